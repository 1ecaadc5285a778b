//! Market-wide skill demand: counts how many postings mention each skill.

use std::collections::HashMap;

use crate::matching::vocabulary::SkillVocabulary;
use crate::models::posting::JobPosting;

/// Tallies vocabulary-term presence across a batch of postings.
///
/// Each posting contributes at most 1 to a skill's count no matter how many
/// times the term repeats inside one description: the result is "how many
/// postings want this skill", not raw term frequency. Skills never seen are
/// omitted from the map; callers treat an absent key as zero.
///
/// Matching is plain substring containment against the lowercased
/// description, so "java" also registers on a description containing
/// "javascript". That is a known property of the matching policy, kept
/// deliberately rather than papered over with tokenization.
pub fn compute_skill_demand(
    vocabulary: &SkillVocabulary,
    postings: &[JobPosting],
) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();

    for posting in postings {
        let description = posting.description.to_lowercase();

        for skill in vocabulary.skills() {
            if description.contains(skill.as_str()) {
                *counts.entry(skill.clone()).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Orders demand counts for display: descending by count, with vocabulary
/// order breaking ties (the sort is stable over a vocabulary-ordered list).
/// Zero-count skills are absent from `counts` and so never appear.
pub fn rank_demand(
    vocabulary: &SkillVocabulary,
    counts: &HashMap<String, u32>,
) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = vocabulary
        .skills()
        .iter()
        .filter_map(|skill| counts.get(skill).map(|&count| (skill.clone(), count)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(skills: &[&str]) -> SkillVocabulary {
        SkillVocabulary::from_raw(skills.iter().map(|s| s.to_string()).collect())
    }

    fn posting(description: &str) -> JobPosting {
        JobPosting {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            salary: None,
            source: None,
            apply_link: None,
        }
    }

    #[test]
    fn test_counts_presence_per_posting() {
        let v = vocab(&["python", "react", "docker"]);
        let postings = vec![
            posting("Looking for Python and Docker engineer"),
            posting("React developer needed"),
        ];
        let counts = compute_skill_demand(&v, &postings);
        assert_eq!(counts.get("python"), Some(&1));
        assert_eq!(counts.get("docker"), Some(&1));
        assert_eq!(counts.get("react"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_repeated_term_counts_once_per_posting() {
        let v = vocab(&["python"]);
        let postings = vec![posting("python python python everywhere")];
        let counts = compute_skill_demand(&v, &postings);
        assert_eq!(counts.get("python"), Some(&1));
    }

    #[test]
    fn test_unseen_skills_are_omitted() {
        let v = vocab(&["python", "rust"]);
        let postings = vec![posting("python shop")];
        let counts = compute_skill_demand(&v, &postings);
        assert_eq!(counts.get("rust"), None);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_empty_postings_yield_empty_map() {
        let v = vocab(&["python"]);
        assert!(compute_skill_demand(&v, &[]).is_empty());
    }

    #[test]
    fn test_empty_vocabulary_yields_empty_map() {
        let v = vocab(&[]);
        let postings = vec![posting("python and docker")];
        assert!(compute_skill_demand(&v, &postings).is_empty());
    }

    #[test]
    fn test_substring_skills_register_independently() {
        // "java" inside "javascript" counts for both terms.
        let v = vocab(&["java", "javascript"]);
        let postings = vec![posting("senior javascript developer")];
        let counts = compute_skill_demand(&v, &postings);
        assert_eq!(counts.get("java"), Some(&1));
        assert_eq!(counts.get("javascript"), Some(&1));
    }

    #[test]
    fn test_counts_bounded_by_posting_count() {
        let v = vocab(&["sql", "git"]);
        let postings = vec![
            posting("sql and git"),
            posting("git only"),
            posting("sql warehouse with git history"),
        ];
        let counts = compute_skill_demand(&v, &postings);
        for (_, count) in &counts {
            assert!(*count >= 1 && *count as usize <= postings.len());
        }
        assert_eq!(counts.get("git"), Some(&3));
        assert_eq!(counts.get("sql"), Some(&2));
    }

    #[test]
    fn test_description_case_is_irrelevant() {
        let v = vocab(&["docker"]);
        let postings = vec![posting("DOCKER and Kubernetes experience")];
        let counts = compute_skill_demand(&v, &postings);
        assert_eq!(counts.get("docker"), Some(&1));
    }

    #[test]
    fn test_rank_demand_sorts_descending() {
        let v = vocab(&["python", "react", "docker"]);
        let postings = vec![
            posting("python and docker"),
            posting("python shop"),
            posting("react studio"),
        ];
        let counts = compute_skill_demand(&v, &postings);
        let ranked = rank_demand(&v, &counts);
        assert_eq!(ranked[0], ("python".to_string(), 2));
    }

    #[test]
    fn test_rank_demand_ties_keep_vocabulary_order() {
        let v = vocab(&["react", "docker", "python"]);
        let postings = vec![posting("react docker python team")];
        let counts = compute_skill_demand(&v, &postings);
        let ranked = rank_demand(&v, &counts);
        let names: Vec<&str> = ranked.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, ["react", "docker", "python"]);
    }
}
