use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::feedback::dialog::FeedbackDialog;
use crate::feedback::plan::MessageBody;
use crate::ui::components::stats_card::StatsCard;
use crate::ui::layout::wrapped_line_count;
use crate::ui::theme::Theme;

const REPORT_BLOCK_HEIGHT: u16 = 3;

/// Renders the revealed portion of the tutor chat, newest message at the
/// bottom. Older bubbles scroll off the top when the panel runs out of rows.
pub struct ChatPanel<'a> {
    pub dialog: &'a FeedbackDialog,
    pub theme: &'a Theme,
}

impl<'a> ChatPanel<'a> {
    pub fn new(dialog: &'a FeedbackDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    /// Rows a message occupies: prose bubbles get a speaker line plus wrapped
    /// text plus a blank separator; structured blocks have fixed sizes.
    fn message_height(&self, body: &MessageBody, width: u16) -> u16 {
        match body {
            MessageBody::Text(text) => {
                // Undercount the width so word wrap can't need more lines
                // than we reserve
                let text_width = width.saturating_sub(8).max(1) as usize;
                1 + wrapped_line_count(text, text_width) as u16 + 1
            }
            MessageBody::StatsCard => {
                StatsCard::new(&self.dialog.summary, self.theme).height() + 1
            }
            MessageBody::ReportPreview => REPORT_BLOCK_HEIGHT + 1,
        }
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let visible = self.dialog.visible_messages();

        // Work out which suffix of the visible messages fits
        let heights: Vec<u16> = visible
            .iter()
            .map(|m| self.message_height(&m.body, area.width))
            .collect();
        let mut start = 0;
        let mut total: u16 = heights.iter().sum();
        while start < visible.len() && total > area.height {
            total = total.saturating_sub(heights[start]);
            start += 1;
        }

        let mut y = area.y;
        for (message, height) in visible.iter().zip(&heights).skip(start) {
            let rect = Rect::new(area.x, y, area.width, *height);
            match &message.body {
                MessageBody::Text(text) => {
                    let speaker = Line::from(Span::styled(
                        "● Tutor",
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ));
                    let body = Line::from(Span::styled(
                        text.clone(),
                        Style::default().fg(colors.bubble_fg()),
                    ));
                    Paragraph::new(vec![speaker, body])
                        .wrap(Wrap { trim: false })
                        .render(rect, buf);
                }
                MessageBody::StatsCard => {
                    let card_rect = Rect::new(rect.x, rect.y, rect.width, height - 1);
                    StatsCard::new(&self.dialog.summary, self.theme).render(card_rect, buf);
                }
                MessageBody::ReportPreview => {
                    let block_rect = Rect::new(rect.x, rect.y, rect.width, REPORT_BLOCK_HEIGHT);
                    let block = Block::bordered()
                        .border_style(Style::default().fg(colors.accent()))
                        .style(Style::default().bg(colors.bubble_bg()));
                    let inner = block.inner(block_rect);
                    block.render(block_rect, buf);
                    Paragraph::new(Line::from(vec![
                        Span::styled(
                            " Practice Report ",
                            Style::default()
                                .fg(colors.bubble_fg())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled("— [r] open", Style::default().fg(colors.text_dim())),
                    ]))
                    .render(inner, buf);
                }
            }
            y = y.saturating_add(*height);
        }

        // Typing indicator while the script is still playing
        if !self.dialog.actions_visible() && y < area.y + area.height {
            let rect = Rect::new(area.x, y, area.width, 1);
            Paragraph::new(Line::from(Span::styled(
                "● Tutor is typing…",
                Style::default().fg(colors.text_dim()),
            )))
            .render(rect, buf);
        }
    }
}
