//! Resume-to-role matching: partitions a role's required skills by presence
//! in the resume text and scores the result.

use serde::Serialize;

use crate::matching::vocabulary::RoleSkillSet;

/// Matched/missing partition of a role's required skills plus the derived
/// match percentage. The two sequences are disjoint, cover the checklist
/// exactly, and each preserves the checklist's original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percent: u8,
}

/// Scores one resume against a role's skill checklist. Pure function of its
/// two inputs.
///
/// `resume_text` is expected to already be lowercase (the extraction step
/// normalizes it); each required skill is substring-tested against the full
/// text. The percentage is nearest-integer: `round(100 * matched / required)`.
/// An empty checklist yields a well-formed zero-percent result, never an
/// error.
pub fn match_resume(resume_text: &str, role: &RoleSkillSet) -> MatchResult {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in &role.skills {
        if resume_text.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let percent = if role.skills.is_empty() {
        0
    } else {
        (100.0 * matched.len() as f64 / role.skills.len() as f64).round() as u8
    };

    MatchResult {
        matched,
        missing,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(skills: &[&str]) -> RoleSkillSet {
        RoleSkillSet {
            role: "Test Role".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_partition_and_percent() {
        let r = role(&["python", "django", "sql"]);
        let result = match_resume("experienced python and sql developer", &r);
        assert_eq!(result.matched, ["python", "sql"]);
        assert_eq!(result.missing, ["django"]);
        assert_eq!(result.percent, 67); // round(100 * 2/3)
    }

    #[test]
    fn test_partition_covers_checklist_exactly() {
        let r = role(&["a", "b", "c", "d", "e"]);
        let result = match_resume("has b and d only", &r);
        assert_eq!(result.matched.len() + result.missing.len(), r.skills.len());
        for skill in &result.matched {
            assert!(!result.missing.contains(skill));
        }
    }

    #[test]
    fn test_both_sequences_preserve_checklist_order() {
        let r = role(&["sql", "python", "docker", "git"]);
        let result = match_resume("git and python person", &r);
        assert_eq!(result.matched, ["python", "git"]);
        assert_eq!(result.missing, ["sql", "docker"]);
    }

    #[test]
    fn test_empty_checklist_is_zero_percent_not_error() {
        let result = match_resume("any resume text at all", &role(&[]));
        assert_eq!(result.percent, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_matches_nothing() {
        let r = role(&["python", "sql"]);
        let result = match_resume("", &r);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, ["python", "sql"]);
        assert_eq!(result.percent, 0);
    }

    #[test]
    fn test_full_match_is_one_hundred() {
        let r = role(&["python", "sql"]);
        let result = match_resume("python and sql daily", &r);
        assert_eq!(result.percent, 100);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        // 1/3 -> 33, not 34; 1/6 -> 17, not 16.
        let result = match_resume("python", &role(&["python", "go", "c"]));
        assert_eq!(result.percent, 33);
        let result = match_resume("rust", &role(&["rust", "go", "c", "zig", "d", "v"]));
        assert_eq!(result.percent, 17);
    }

    #[test]
    fn test_adding_a_keyword_never_decreases_percent() {
        let r = role(&["python", "django", "sql"]);
        let before = match_resume("python shop", &r);
        let after = match_resume("python shop with sql", &r);
        assert!(after.percent >= before.percent);
    }

    #[test]
    fn test_pure_function_is_idempotent() {
        let r = role(&["python", "django", "sql"]);
        let first = match_resume("experienced python and sql developer", &r);
        let second = match_resume("experienced python and sql developer", &r);
        assert_eq!(first, second);
    }
}
