use std::time::Duration;

use crate::feedback::category::PerformanceCategory;
use crate::session::summary::PracticeSummary;

pub const GREETING_DELAY_MS: u64 = 500;
pub const STATS_DELAY_MS: u64 = 1200;
pub const FEEDBACK_DELAY_MS: u64 = 2000;
pub const REPORT_DELAY_MS: u64 = 2800;
pub const ADVICE_DELAY_MS: u64 = 3600;

/// What a chat entry renders as. Structured blocks get their own variant
/// instead of a marker string so the renderer can't misinterpret prose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    /// Literal tutor prose.
    Text(String),
    /// Score/accuracy/improvement block with weak-point tags. The renderer
    /// reads the numbers from the session summary the dialog already owns.
    StatsCard,
    /// Inline preview that opens the full report when activated.
    ReportPreview,
}

/// One entry of the tutor's scripted chat. Ids are stable (1..=5) even when
/// the optional feedback entry is omitted, so id 4 is always the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u8,
    pub delay: Duration,
    pub body: MessageBody,
}

impl ChatMessage {
    fn text(id: u8, delay_ms: u64, text: String) -> Self {
        Self {
            id,
            delay: Duration::from_millis(delay_ms),
            body: MessageBody::Text(text),
        }
    }
}

/// Build the tutor's message script for one session. Pure: same summary,
/// same plan. Delays are offsets from dialog open and must stay strictly
/// increasing — the reveal scheduler relies on that to keep the visible set
/// a prefix of the plan.
pub fn build_plan(summary: &PracticeSummary) -> Vec<ChatMessage> {
    let category = PerformanceCategory::from_score(summary.score);

    let mut plan = vec![
        ChatMessage::text(1, GREETING_DELAY_MS, greeting(category, summary.accuracy)),
        ChatMessage {
            id: 2,
            delay: Duration::from_millis(STATS_DELAY_MS),
            body: MessageBody::StatsCard,
        },
    ];

    if let Some(text) = feedback(summary.improvement, &summary.weak_points) {
        plan.push(ChatMessage::text(3, FEEDBACK_DELAY_MS, text));
    }

    plan.push(ChatMessage {
        id: 4,
        delay: Duration::from_millis(REPORT_DELAY_MS),
        body: MessageBody::ReportPreview,
    });
    plan.push(ChatMessage::text(5, ADVICE_DELAY_MS, advice(category).to_string()));

    plan
}

fn greeting(category: PerformanceCategory, accuracy: f64) -> String {
    match category {
        PerformanceCategory::Excellent => format!(
            "Fantastic work! You got {accuracy:.0}% right today — that's top-tier."
        ),
        PerformanceCategory::Normal => format!(
            "Nice effort today — {accuracy:.0}% correct. A few rough spots, but you're on track."
        ),
        PerformanceCategory::Poor => format!(
            "Today was a tough one — {accuracy:.0}% correct. Don't worry, we'll work through it together."
        ),
    }
}

/// The optional third message. Praise for improvement wins over weak-point
/// review; with neither there is nothing useful to say, so say nothing.
fn feedback(improvement: f64, weak_points: &[String]) -> Option<String> {
    if improvement > 0.0 {
        Some(match weak_points.first() {
            Some(first) => format!(
                "You're up {improvement:.0}% from last time! Keep an eye on {first} and it'll keep climbing."
            ),
            None => format!(
                "You're up {improvement:.0}% from last time — the practice is paying off."
            ),
        })
    } else if !weak_points.is_empty() {
        Some(format!(
            "Let's give these another look together: {}.",
            weak_points.join(", ")
        ))
    } else {
        None
    }
}

fn advice(category: PerformanceCategory) -> &'static str {
    match category {
        PerformanceCategory::Excellent => {
            "You're ready for harder material. Try a challenge set next time!"
        }
        PerformanceCategory::Normal => {
            "Steady practice beats cramming — a short session tomorrow will lock this in."
        }
        PerformanceCategory::Poor => {
            "Let's slow down and revisit the basics next session. Small steps count."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: f64, accuracy: f64, improvement: f64, weak: &[&str]) -> PracticeSummary {
        PracticeSummary {
            score,
            accuracy,
            improvement,
            weak_points: weak.iter().map(|s| s.to_string()).collect(),
            completed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_plan_always_contains_structured_blocks() {
        for s in [
            summary(90.0, 95.0, 0.0, &[]),
            summary(40.0, 30.0, 12.0, &["分数", "应用题"]),
            summary(70.0, 72.0, 0.0, &["geometry"]),
        ] {
            let plan = build_plan(&s);
            assert_eq!(
                plan.iter().filter(|m| m.body == MessageBody::StatsCard).count(),
                1
            );
            assert_eq!(
                plan.iter()
                    .filter(|m| m.body == MessageBody::ReportPreview)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_feedback_omitted_without_improvement_or_weak_points() {
        let plan = build_plan(&summary(90.0, 95.0, 0.0, &[]));
        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|m| m.id != 3));
        // Remaining ids keep their numbers
        assert_eq!(
            plan.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2, 4, 5]
        );
    }

    #[test]
    fn test_improvement_praise_names_only_first_weak_point() {
        let plan = build_plan(&summary(75.0, 80.0, 12.0, &["分数", "应用题"]));
        assert_eq!(plan.len(), 5);
        let MessageBody::Text(text) = &plan[2].body else {
            panic!("feedback entry should be prose");
        };
        assert_eq!(plan[2].id, 3);
        assert!(text.contains("12%"));
        assert!(text.contains("分数"));
        assert!(!text.contains("应用题"));
    }

    #[test]
    fn test_weak_points_all_listed_without_improvement() {
        let plan = build_plan(&summary(75.0, 80.0, 0.0, &["分数", "应用题"]));
        let MessageBody::Text(text) = &plan[2].body else {
            panic!("feedback entry should be prose");
        };
        assert!(text.contains("分数"));
        assert!(text.contains("应用题"));
    }

    #[test]
    fn test_delays_strictly_increase() {
        let plan = build_plan(&summary(75.0, 80.0, 12.0, &["分数"]));
        assert_eq!(plan.len(), 5);
        for pair in plan.windows(2) {
            assert!(pair[0].delay < pair[1].delay);
        }
        assert_eq!(plan[0].delay, Duration::from_millis(500));
        assert_eq!(plan[4].delay, Duration::from_millis(3600));
    }

    #[test]
    fn test_excellent_scenario_wording() {
        let plan = build_plan(&summary(90.0, 95.0, 0.0, &[]));
        let MessageBody::Text(greeting) = &plan[0].body else {
            panic!("greeting should be prose");
        };
        assert!(greeting.contains("95"));
        assert!(greeting.contains("Fantastic"));
        let MessageBody::Text(advice) = &plan[3].body else {
            panic!("advice should be prose");
        };
        assert!(advice.contains("challenge set"));
    }
}
