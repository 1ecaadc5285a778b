//! Posting ingestion: the remote listings client, the posting store, and the
//! endpoints that refresh and browse stored postings.

pub mod handlers;
pub mod listings;
pub mod store;
