//! Scoring override resolution.

use serde::{Deserialize, Serialize};

/// Comparison applied by an override rule to the raw point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideWhen {
    Gte,
    Eq,
    Lte,
}

/// A single threshold rule rewriting a target's raw point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOverride {
    pub when: OverrideWhen,
    pub threshold: u32,
    pub points: u32,
}

impl ScoringOverride {
    #[must_use]
    const fn matches(&self, raw: u32) -> bool {
        match self.when {
            OverrideWhen::Gte => raw >= self.threshold,
            OverrideWhen::Eq => raw == self.threshold,
            OverrideWhen::Lte => raw <= self.threshold,
        }
    }
}

/// Resolve a raw point value through an ordered override list.
///
/// The first matching rule wins; with no match (or no rules) the raw value
/// passes through unchanged.
#[must_use]
pub fn resolve_points(raw: u32, overrides: &[ScoringOverride]) -> u32 {
    overrides
        .iter()
        .find(|rule| rule.matches(raw))
        .map_or(raw, |rule| rule.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn gte(threshold: u32, points: u32) -> ScoringOverride {
        ScoringOverride {
            when: OverrideWhen::Gte,
            threshold,
            points,
        }
    }

    #[test]
    fn empty_overrides_pass_raw_value_through() {
        assert_eq!(resolve_points(7, &[]), 7);
    }

    #[test]
    fn first_matching_rule_wins_over_later_exact_match() {
        let rules = [
            gte(5, 1),
            ScoringOverride {
                when: OverrideWhen::Eq,
                threshold: 5,
                points: 99,
            },
        ];
        // The eq rule is unreachable for raw == 5: declaration order decides.
        assert_eq!(resolve_points(5, &rules), 1);
    }

    #[test]
    fn non_matching_rules_leave_value_unchanged() {
        assert_eq!(resolve_points(3, &[gte(5, 1)]), 3);
    }

    #[test]
    fn lte_rule_flattens_small_values() {
        let rules = [ScoringOverride {
            when: OverrideWhen::Lte,
            threshold: 2,
            points: 0,
        }];
        assert_eq!(resolve_points(1, &rules), 0);
        assert_eq!(resolve_points(2, &rules), 0);
        assert_eq!(resolve_points(3, &rules), 3);
    }

    #[test]
    fn overrides_parse_from_mode_json() {
        let rules: Vec<ScoringOverride> =
            serde_json::from_str(r#"[{"when": "gte", "threshold": 2, "points": 2}]"#).unwrap();
        assert_eq!(rules, vec![gte(2, 2)]);
    }
}
