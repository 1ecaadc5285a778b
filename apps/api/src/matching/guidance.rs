//! Tiered career guidance derived from a resume match percentage.

use serde::{Deserialize, Serialize};

/// Coarse recommendation bucket. Boundaries are inclusive: 80 and above is
/// `Ready`, 60-79 is `ImproveFew`, everything below 60 is `UpskillNeeded`.
/// Total over the whole u8 range, so values above 100 still classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceTier {
    Ready,
    ImproveFew,
    UpskillNeeded,
}

impl GuidanceTier {
    pub fn classify(percent: u8) -> Self {
        if percent >= 80 {
            GuidanceTier::Ready
        } else if percent >= 60 {
            GuidanceTier::ImproveFew
        } else {
            GuidanceTier::UpskillNeeded
        }
    }
}

/// Builds the human-readable guidance line for a tier.
/// `ImproveFew` names up to three missing skills to focus on.
pub fn advice(tier: GuidanceTier, missing: &[String]) -> String {
    match tier {
        GuidanceTier::Ready => {
            "You are ready. Start applying aggressively.".to_string()
        }
        GuidanceTier::ImproveFew => {
            let focus: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
            format!(
                "Focus on {} to become a strong candidate in 2-4 weeks.",
                focus.join(", ")
            )
        }
        GuidanceTier::UpskillNeeded => {
            "Focus on core skills and projects first, then start applying.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exact() {
        assert_eq!(GuidanceTier::classify(80), GuidanceTier::Ready);
        assert_eq!(GuidanceTier::classify(79), GuidanceTier::ImproveFew);
        assert_eq!(GuidanceTier::classify(60), GuidanceTier::ImproveFew);
        assert_eq!(GuidanceTier::classify(59), GuidanceTier::UpskillNeeded);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(GuidanceTier::classify(0), GuidanceTier::UpskillNeeded);
        assert_eq!(GuidanceTier::classify(100), GuidanceTier::Ready);
        // Unreachable from the matcher, but classification stays total.
        assert_eq!(GuidanceTier::classify(255), GuidanceTier::Ready);
    }

    #[test]
    fn test_improve_few_advice_names_top_three_missing() {
        let missing: Vec<String> = ["docker", "sql", "git", "aws"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let line = advice(GuidanceTier::ImproveFew, &missing);
        assert!(line.contains("docker, sql, git"));
        assert!(!line.contains("aws"));
    }

    #[test]
    fn test_ready_advice_says_apply() {
        let line = advice(GuidanceTier::Ready, &[]);
        assert!(line.contains("applying"));
    }

    #[test]
    fn test_upskill_advice_says_core_skills() {
        let line = advice(GuidanceTier::UpskillNeeded, &["everything".to_string()]);
        assert!(line.contains("core skills"));
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GuidanceTier::ImproveFew).unwrap(),
            r#""improve_few""#
        );
    }
}
