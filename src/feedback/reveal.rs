use std::time::{Duration, Instant};

use crate::feedback::plan::ChatMessage;

/// Gap between the last message appearing and the action buttons unlocking.
pub const ACTIONS_GAP_MS: u64 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Closed,
    /// k of n messages visible.
    Revealing(usize),
    AllRevealed,
    ActionsShown,
}

/// Drip-feeds the message plan onto the screen.
///
/// All deadlines are one-shot offsets from the open instant, computed once
/// at `open` and held as plain data — closing the dialog drops them, so a
/// cancelled timeline has nothing left that could fire. The caller samples
/// the clock (the event-loop tick) and passes it to [`advance`], which makes
/// the whole schedule deterministic under test.
///
/// [`advance`]: RevealTimeline::advance
pub struct RevealTimeline {
    deadlines: Vec<(u8, Duration)>,
    actions_after: Duration,
    opened_at: Option<Instant>,
    visible: Vec<u8>,
    actions_visible: bool,
}

impl RevealTimeline {
    /// Plans the schedule for `plan`. Delays must be strictly increasing
    /// (the builder guarantees this); the visible set is revealed strictly
    /// in plan order, so it is always a prefix.
    pub fn new(plan: &[ChatMessage]) -> Self {
        let deadlines: Vec<(u8, Duration)> = plan.iter().map(|m| (m.id, m.delay)).collect();
        let last = deadlines.last().map(|(_, d)| *d).unwrap_or_default();
        Self {
            deadlines,
            actions_after: last + Duration::from_millis(ACTIONS_GAP_MS),
            opened_at: None,
            visible: Vec::new(),
            actions_visible: false,
        }
    }

    /// Starts (or restarts) the sequence from scratch. Prior progress never
    /// survives a reopen.
    pub fn open(&mut self, now: Instant) {
        self.opened_at = Some(now);
        self.visible.clear();
        self.actions_visible = false;
    }

    /// Cancels every pending deadline and resets to the closed state.
    pub fn close(&mut self) {
        self.opened_at = None;
        self.visible.clear();
        self.actions_visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Reveals everything whose deadline has passed. Returns true if the
    /// visible state changed (the caller uses this to skip redraws). A no-op
    /// while closed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(opened_at) = self.opened_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(opened_at);

        let mut changed = false;
        while self.visible.len() < self.deadlines.len() {
            let (id, delay) = self.deadlines[self.visible.len()];
            if elapsed < delay {
                break;
            }
            self.visible.push(id);
            changed = true;
        }

        if !self.actions_visible
            && self.visible.len() == self.deadlines.len()
            && elapsed >= self.actions_after
        {
            self.actions_visible = true;
            changed = true;
        }

        changed
    }

    pub fn visible_ids(&self) -> &[u8] {
        &self.visible
    }

    pub fn actions_visible(&self) -> bool {
        self.actions_visible
    }

    pub fn phase(&self) -> RevealPhase {
        if self.opened_at.is_none() {
            RevealPhase::Closed
        } else if self.actions_visible {
            RevealPhase::ActionsShown
        } else if self.visible.len() == self.deadlines.len() {
            RevealPhase::AllRevealed
        } else {
            RevealPhase::Revealing(self.visible.len())
        }
    }
}
