/// Performance bucket derived from the session score. Drives which canned
/// tutor phrasing the dialog uses; nothing else depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceCategory {
    Excellent,
    Normal,
    Poor,
}

impl PerformanceCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            PerformanceCategory::Excellent
        } else if score >= 60.0 {
            PerformanceCategory::Normal
        } else {
            PerformanceCategory::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceCategory::Excellent => "excellent",
            PerformanceCategory::Normal => "normal",
            PerformanceCategory::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_scores_are_excellent() {
        assert_eq!(
            PerformanceCategory::from_score(85.0),
            PerformanceCategory::Excellent
        );
        assert_eq!(
            PerformanceCategory::from_score(100.0),
            PerformanceCategory::Excellent
        );
    }

    #[test]
    fn test_mid_scores_are_normal() {
        assert_eq!(
            PerformanceCategory::from_score(60.0),
            PerformanceCategory::Normal
        );
        assert_eq!(
            PerformanceCategory::from_score(84.9),
            PerformanceCategory::Normal
        );
    }

    #[test]
    fn test_low_scores_are_poor() {
        assert_eq!(
            PerformanceCategory::from_score(59.9),
            PerformanceCategory::Poor
        );
        assert_eq!(PerformanceCategory::from_score(0.0), PerformanceCategory::Poor);
    }
}
