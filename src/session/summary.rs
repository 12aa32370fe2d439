use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The numbers one practice session produced. This is the dialog's entire
/// input; score and accuracy are percentages on the caller's 0-100 contract
/// and are not re-validated here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PracticeSummary {
    pub score: f64,
    pub accuracy: f64,
    #[serde(default)]
    pub improvement: f64,
    #[serde(default)]
    pub weak_points: Vec<String>,
    #[serde(default = "Utc::now")]
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read results file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid results file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("results file contains no sessions")]
    Empty,
}

/// Loads a review queue from a JSON file holding either a single summary
/// object or an array of them.
pub fn load_queue(path: &Path) -> Result<Vec<PracticeSummary>, SummaryError> {
    let content = fs::read_to_string(path)?;
    let queue = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<PracticeSummary>>(&content)?
    } else {
        vec![serde_json::from_str::<PracticeSummary>(&content)?]
    };
    if queue.is_empty() {
        return Err(SummaryError::Empty);
    }
    Ok(queue)
}

/// Canned sessions shown when the user gives neither a results file nor
/// score flags.
pub fn sample_queue() -> Vec<PracticeSummary> {
    vec![
        PracticeSummary {
            score: 90.0,
            accuracy: 95.0,
            improvement: 0.0,
            weak_points: Vec::new(),
            completed_at: Utc::now(),
        },
        PracticeSummary {
            score: 72.0,
            accuracy: 78.0,
            improvement: 12.0,
            weak_points: vec!["fractions".to_string(), "word problems".to_string()],
            completed_at: Utc::now(),
        },
        PracticeSummary {
            score: 45.0,
            accuracy: 52.0,
            improvement: 0.0,
            weak_points: vec!["long division".to_string()],
            completed_at: Utc::now(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serde_defaults_optional_fields() {
        // Only the required fields present: optionals fall back to neutral
        let json = r#"{"score": 70.0, "accuracy": 75.5}"#;
        let summary: PracticeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.score, 70.0);
        assert_eq!(summary.accuracy, 75.5);
        assert_eq!(summary.improvement, 0.0);
        assert!(summary.weak_points.is_empty());
    }

    #[test]
    fn test_summary_serde_roundtrip() {
        let summary = PracticeSummary {
            score: 88.0,
            accuracy: 91.0,
            improvement: 5.0,
            weak_points: vec!["分数".to_string()],
            completed_at: Utc::now(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: PracticeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, summary.score);
        assert_eq!(back.weak_points, summary.weak_points);
        assert_eq!(back.completed_at, summary.completed_at);
    }
}
