//! SWOT analysis value object.

use serde::{Deserialize, Serialize};

/// SWOT analysis produced alongside the idea analysis.
///
/// An empty analysis (all four lists empty) is a legal value and is NOT the
/// same as "not yet analyzed" — gating keys off `BusinessRecord::name`, never
/// off this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// Creates a new SWOT analysis from its four lists.
    pub fn new(
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        opportunities: Vec<String>,
        threats: Vec<String>,
    ) -> Self {
        Self {
            strengths,
            weaknesses,
            opportunities,
            threats,
        }
    }

    /// Returns true if all four lists are empty.
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.opportunities.is_empty()
            && self.threats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(SwotAnalysis::default().is_empty());
    }

    #[test]
    fn single_entry_is_not_empty() {
        let swot = SwotAnalysis::new(vec!["first mover".to_string()], vec![], vec![], vec![]);
        assert!(!swot.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let swot = SwotAnalysis::new(
            vec!["loyal customers".to_string()],
            vec!["high CAC".to_string()],
            vec!["untapped market".to_string()],
            vec!["incumbents".to_string()],
        );
        let json = serde_json::to_string(&swot).unwrap();
        let back: SwotAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(swot, back);
    }
}
