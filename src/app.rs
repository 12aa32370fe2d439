use std::time::Instant;

use crate::config::Config;
use crate::feedback::dialog::{DialogEvent, FeedbackDialog};
use crate::session::summary::PracticeSummary;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Report,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub queue: Vec<PracticeSummary>,
    pub queue_index: usize,
    pub dialog: FeedbackDialog,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// `queue` must be non-empty; main falls back to the built-in samples.
    pub fn new(queue: Vec<PracticeSummary>) -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let dialog = FeedbackDialog::new(queue[0].clone());

        Self {
            screen: AppScreen::Home,
            config,
            theme,
            queue,
            queue_index: 0,
            dialog,
            status: None,
            should_quit: false,
        }
    }

    pub fn queue_exhausted(&self) -> bool {
        self.queue_index >= self.queue.len()
    }

    pub fn open_dialog(&mut self, now: Instant) {
        if !self.queue_exhausted() {
            self.dialog.open(now);
        }
    }

    /// Event-loop tick: sample the clock into the reveal timeline. Returns
    /// true if the dialog changed (kept for symmetry with the timeline; the
    /// loop redraws every iteration regardless).
    pub fn tick(&mut self, now: Instant) -> bool {
        self.dialog.tick(now)
    }

    pub fn handle_dialog_event(&mut self, event: DialogEvent, now: Instant) {
        match event {
            DialogEvent::Dismissed => {
                self.status = Some("Review dismissed".to_string());
            }
            DialogEvent::ContinuePractice => {
                self.status = Some("Continuing practice".to_string());
                self.advance_queue(now);
            }
            DialogEvent::NewChallenge => {
                self.status = Some("Starting a new challenge".to_string());
                self.advance_queue(now);
            }
            DialogEvent::ViewReport => {
                self.screen = AppScreen::Report;
            }
        }
    }

    /// Moves on to the next queued session and replays its chat from the
    /// top. Past the end, the dialog just closes.
    fn advance_queue(&mut self, now: Instant) {
        self.dialog.dismiss();
        self.queue_index += 1;
        if let Some(next) = self.queue.get(self.queue_index) {
            self.dialog = FeedbackDialog::new(next.clone());
            self.dialog.open(now);
        } else {
            self.status = Some("All sessions reviewed".to_string());
        }
    }

    pub fn close_report(&mut self) {
        self.screen = AppScreen::Home;
    }
}
