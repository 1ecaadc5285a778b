//! Resume analysis: PDF text extraction plus the role-fit endpoints.

pub mod extract;
pub mod handlers;
