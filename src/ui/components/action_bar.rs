use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::feedback::dialog::ACTION_LABELS;
use crate::ui::theme::Theme;

/// Footer row of the dialog: the follow-up buttons once the chat has played
/// out, a dim hint before that.
pub struct ActionBar<'a> {
    pub visible: bool,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> ActionBar<'a> {
    pub fn new(visible: bool, selected: usize, theme: &'a Theme) -> Self {
        Self {
            visible,
            selected,
            theme,
        }
    }
}

impl Widget for ActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if !self.visible {
            Paragraph::new(Line::from(Span::styled(
                "[Esc] Close",
                Style::default().fg(colors.text_dim()),
            )))
            .alignment(Alignment::Center)
            .render(area, buf);
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        for (i, label) in ACTION_LABELS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(colors.button_selected_fg())
                    .bg(colors.button_selected_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.button_fg())
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
