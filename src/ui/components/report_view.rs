use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph, Widget};

use crate::feedback::category::PerformanceCategory;
use crate::session::summary::PracticeSummary;
use crate::ui::theme::Theme;

/// Full-screen practice report, opened from the chat's report preview.
pub struct ReportView<'a> {
    pub summary: &'a PracticeSummary,
    pub theme: &'a Theme,
}

impl<'a> ReportView<'a> {
    pub fn new(summary: &'a PracticeSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let category = PerformanceCategory::from_score(self.summary.score);

        let block = Block::bordered()
            .title(" Practice Report ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let category_color = match category {
            PerformanceCategory::Excellent => colors.success(),
            PerformanceCategory::Normal => colors.warning(),
            PerformanceCategory::Poor => colors.error(),
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                self.summary
                    .completed_at
                    .format("%Y-%m-%d %H:%M UTC  ")
                    .to_string(),
                Style::default().fg(colors.text_dim()),
            ),
            Span::styled(
                category.as_str().to_uppercase(),
                Style::default()
                    .fg(category_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        header.render(layout[0], buf);

        let score_ratio = (self.summary.score / 100.0).clamp(0.0, 1.0);
        Gauge::default()
            .label(format!("Score {:.0}", self.summary.score))
            .ratio(score_ratio)
            .gauge_style(
                Style::default()
                    .fg(colors.gauge_filled())
                    .bg(colors.gauge_empty()),
            )
            .render(layout[1], buf);

        let accuracy_ratio = (self.summary.accuracy / 100.0).clamp(0.0, 1.0);
        Gauge::default()
            .label(format!("Accuracy {:.0}%", self.summary.accuracy))
            .ratio(accuracy_ratio)
            .gauge_style(
                Style::default()
                    .fg(colors.gauge_filled())
                    .bg(colors.gauge_empty()),
            )
            .render(layout[2], buf);

        let improvement_line = if self.summary.improvement > 0.0 {
            Line::from(vec![
                Span::styled("Improvement: ", Style::default().fg(colors.fg())),
                Span::styled(
                    format!("+{:.0}% since last session", self.summary.improvement),
                    Style::default().fg(colors.success()),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Improvement: no change since last session",
                Style::default().fg(colors.text_dim()),
            ))
        };
        Paragraph::new(improvement_line).render(layout[3], buf);

        let weak_line = if self.summary.weak_points.is_empty() {
            Line::from(Span::styled(
                "No weak spots this session.",
                Style::default().fg(colors.success()),
            ))
        } else {
            let mut spans = vec![Span::styled(
                "Needs review: ",
                Style::default().fg(colors.fg()),
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
            Line::from(spans)
        };
        Paragraph::new(weak_line).render(layout[4], buf);

        let footer = Paragraph::new(Line::from(Span::styled(
            " [Esc/q] Back ",
            Style::default().fg(colors.accent()),
        )));
        footer.render(layout[6], buf);
    }
}
