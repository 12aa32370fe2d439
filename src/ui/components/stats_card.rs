use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::summary::PracticeSummary;
use crate::ui::theme::Theme;

/// The structured score block inside the chat. Reads straight from the
/// session summary so it can never drift from the prose around it.
pub struct StatsCard<'a> {
    pub summary: &'a PracticeSummary,
    pub theme: &'a Theme,
}

impl<'a> StatsCard<'a> {
    pub fn new(summary: &'a PracticeSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }

    /// Rows needed including the border; the chat panel sizes bubbles
    /// before rendering them.
    pub fn height(&self) -> u16 {
        let tag_row = if self.summary.weak_points.is_empty() { 0 } else { 1 };
        3 + tag_row + 2
    }
}

impl Widget for StatsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Today's Results ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bubble_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let score_color = if self.summary.score >= 85.0 {
            colors.success()
        } else if self.summary.score >= 60.0 {
            colors.warning()
        } else {
            colors.error()
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(" Score:       ", Style::default().fg(colors.bubble_fg())),
                Span::styled(
                    format!("{:.0}", self.summary.score),
                    Style::default().fg(score_color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Accuracy:    ", Style::default().fg(colors.bubble_fg())),
                Span::styled(
                    format!("{:.0}%", self.summary.accuracy),
                    Style::default().fg(colors.accent()),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Improvement: ", Style::default().fg(colors.bubble_fg())),
                if self.summary.improvement > 0.0 {
                    Span::styled(
                        format!("+{:.0}%", self.summary.improvement),
                        Style::default().fg(colors.success()),
                    )
                } else {
                    Span::styled("—", Style::default().fg(colors.text_dim()))
                },
            ]),
        ];

        if !self.summary.weak_points.is_empty() {
            let mut spans = vec![Span::styled(
                " Review: ",
                Style::default().fg(colors.text_dim()),
            )];
            for (i, point) in self.summary.weak_points.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {point} "),
                    Style::default().fg(colors.tag_fg()).bg(colors.tag_bg()),
                ));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
