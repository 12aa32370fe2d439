use std::time::Instant;

use crate::feedback::plan::{ChatMessage, MessageBody, build_plan};
use crate::feedback::reveal::{RevealPhase, RevealTimeline};
use crate::session::summary::PracticeSummary;

/// Follow-up actions offered once the chat has fully played out.
pub const ACTION_LABELS: [&str; 2] = ["Continue Practice", "New Challenge"];

/// What the dialog tells its host. The host decides what each event means
/// (this binary advances its review queue; an embedding app might start a
/// real practice run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// Dialog dismissed before or after the full reveal.
    Dismissed,
    ContinuePractice,
    NewChallenge,
    ViewReport,
}

/// The tutor-chat dialog: one session summary, its message plan, and the
/// reveal timeline. All interaction goes through the mutators below; the key
/// matching lives with the rest of the key handling in main.
pub struct FeedbackDialog {
    pub summary: PracticeSummary,
    plan: Vec<ChatMessage>,
    timeline: RevealTimeline,
    pub selected_action: usize,
}

impl FeedbackDialog {
    pub fn new(summary: PracticeSummary) -> Self {
        let plan = build_plan(&summary);
        let timeline = RevealTimeline::new(&plan);
        Self {
            summary,
            plan,
            timeline,
            selected_action: 0,
        }
    }

    /// Opens (or reopens) the dialog; the chat always replays from the top.
    pub fn open(&mut self, now: Instant) {
        self.selected_action = 0;
        self.timeline.open(now);
    }

    pub fn is_open(&self) -> bool {
        self.timeline.is_open()
    }

    /// Forwarded from the event-loop tick. True means something new became
    /// visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.timeline.advance(now)
    }

    /// The revealed prefix of the plan, in id order.
    pub fn visible_messages(&self) -> &[ChatMessage] {
        &self.plan[..self.timeline.visible_ids().len()]
    }

    pub fn actions_visible(&self) -> bool {
        self.timeline.actions_visible()
    }

    pub fn phase(&self) -> RevealPhase {
        self.timeline.phase()
    }

    /// The report can be opened as soon as its preview message is on screen,
    /// independent of the action buttons.
    pub fn report_revealed(&self) -> bool {
        self.visible_messages()
            .iter()
            .any(|m| m.body == MessageBody::ReportPreview)
    }

    pub fn next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % ACTION_LABELS.len();
    }

    pub fn prev_action(&mut self) {
        self.selected_action = if self.selected_action == 0 {
            ACTION_LABELS.len() - 1
        } else {
            self.selected_action - 1
        };
    }

    /// Activates the selected action button. Inert until the buttons unlock.
    pub fn activate_action(&mut self) -> Option<DialogEvent> {
        if !self.actions_visible() {
            return None;
        }
        Some(match self.selected_action {
            0 => DialogEvent::ContinuePractice,
            _ => DialogEvent::NewChallenge,
        })
    }

    pub fn view_report(&self) -> Option<DialogEvent> {
        self.report_revealed().then_some(DialogEvent::ViewReport)
    }

    /// Closes the dialog, cancelling everything still scheduled.
    pub fn dismiss(&mut self) -> DialogEvent {
        self.timeline.close();
        DialogEvent::Dismissed
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn dialog() -> FeedbackDialog {
        FeedbackDialog::new(PracticeSummary {
            score: 72.0,
            accuracy: 78.0,
            improvement: 12.0,
            weak_points: vec!["fractions".to_string()],
            completed_at: chrono::Utc::now(),
        })
    }

    #[test]
    fn test_actions_inert_until_unlocked() {
        let mut d = dialog();
        let t0 = Instant::now();
        d.open(t0);
        d.tick(t0 + Duration::from_millis(3600));
        assert!(d.activate_action().is_none());

        d.tick(t0 + Duration::from_millis(4400));
        assert_eq!(d.activate_action(), Some(DialogEvent::ContinuePractice));
        d.next_action();
        assert_eq!(d.activate_action(), Some(DialogEvent::NewChallenge));
    }

    #[test]
    fn test_report_opens_before_actions_unlock() {
        let mut d = dialog();
        let t0 = Instant::now();
        d.open(t0);

        d.tick(t0 + Duration::from_millis(2000));
        assert_eq!(d.view_report(), None);

        d.tick(t0 + Duration::from_millis(2800));
        assert_eq!(d.view_report(), Some(DialogEvent::ViewReport));
        assert!(!d.actions_visible());
    }

    #[test]
    fn test_dismiss_mid_reveal_resets_progress() {
        let mut d = dialog();
        let t0 = Instant::now();
        d.open(t0);
        d.tick(t0 + Duration::from_millis(1200));
        assert_eq!(d.visible_messages().len(), 2);

        assert_eq!(d.dismiss(), DialogEvent::Dismissed);
        assert!(!d.is_open());
        assert!(d.visible_messages().is_empty());

        // Reopen starts over
        let t1 = t0 + Duration::from_secs(60);
        d.open(t1);
        assert!(d.visible_messages().is_empty());
        d.tick(t1 + Duration::from_millis(500));
        assert_eq!(d.visible_messages().len(), 1);
    }

    #[test]
    fn test_action_selection_wraps() {
        let mut d = dialog();
        assert_eq!(d.selected_action, 0);
        d.prev_action();
        assert_eq!(d.selected_action, ACTION_LABELS.len() - 1);
        d.next_action();
        assert_eq!(d.selected_action, 0);
    }
}
