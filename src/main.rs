mod app;
mod config;
mod event;
mod feedback;
mod session;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use session::summary::{PracticeSummary, load_queue, sample_queue};
use ui::components::action_bar::ActionBar;
use ui::components::chat_panel::ChatPanel;
use ui::components::report_view::ReportView;

#[derive(Parser)]
#[command(
    name = "tutorchat",
    version,
    about = "Review practice results as a chat with an AI tutor"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "JSON results file (object or array)")]
    input: Option<PathBuf>,

    #[arg(long, requires = "accuracy", help = "Session score (0-100)")]
    score: Option<f64>,

    #[arg(long, requires = "score", help = "Session accuracy (0-100)")]
    accuracy: Option<f64>,

    #[arg(long, default_value_t = 0.0, help = "Improvement over the previous session (%)")]
    improvement: f64,

    #[arg(long, value_delimiter = ',', help = "Weak knowledge points, comma separated")]
    weak_points: Vec<String>,
}

impl Cli {
    fn build_queue(&self) -> Result<Vec<PracticeSummary>> {
        if let (Some(score), Some(accuracy)) = (self.score, self.accuracy) {
            return Ok(vec![PracticeSummary {
                score,
                accuracy,
                improvement: self.improvement,
                weak_points: self.weak_points.clone(),
                completed_at: chrono::Utc::now(),
            }]);
        }
        if let Some(ref path) = self.input {
            return Ok(load_queue(path)?);
        }
        Ok(sample_queue())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fail on bad input before touching the terminal
    let queue = cli.build_queue()?;
    let mut app = App::new(queue);

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }

    if app.config.auto_open {
        app.open_dialog(Instant::now());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {
                app.tick(Instant::now());
            }
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Report => handle_report_key(app, key),
        AppScreen::Home if app.dialog.is_open() => handle_dialog_key(app, key),
        AppScreen::Home => handle_home_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter | KeyCode::Char(' ') => app.open_dialog(Instant::now()),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            let event = app.dialog.dismiss();
            app.handle_dialog_event(event, now);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.dialog.prev_action(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.dialog.next_action(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(event) = app.dialog.activate_action() {
                app.handle_dialog_event(event, now);
            }
        }
        KeyCode::Char('r') => {
            if let Some(event) = app.dialog.view_report() {
                app.handle_dialog_event(event, now);
            }
        }
        _ => {}
    }
}

fn handle_report_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_report(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Home => {
            render_home(frame, app);
            if app.dialog.is_open() {
                render_dialog(frame, app);
            }
        }
        AppScreen::Report => render_report(frame, app),
    }
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let position = if app.queue_exhausted() {
        format!(" {} sessions reviewed", app.queue.len())
    } else {
        format!(" Session {} of {}", app.queue_index + 1, app.queue.len())
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " tutorchat ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            position,
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let mut lines: Vec<Line> = vec![Line::from("")];
    if let Some(summary) = app.queue.get(app.queue_index) {
        lines.push(Line::from(Span::styled(
            format!(
                "Practice complete — score {:.0}, accuracy {:.0}%",
                summary.score, summary.accuracy
            ),
            Style::default().fg(colors.fg()),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Review with tutor",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "All caught up — nothing left to review.",
            Style::default().fg(colors.success()),
        )));
    }
    if let Some(ref status) = app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(colors.text_dim()),
        )));
    }
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Enter] Review  [q] Quit ",
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[2]);
}

fn render_dialog(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let popup = ui::layout::centered_rect(60, 75, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" AI Tutor ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(popup);
    block.render(popup, frame.buffer_mut());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    let chat = ChatPanel::new(&app.dialog, app.theme);
    frame.render_widget(chat, layout[0]);

    let actions = ActionBar::new(
        app.dialog.actions_visible(),
        app.dialog.selected_action,
        app.theme,
    );
    frame.render_widget(actions, layout[1]);
}

fn render_report(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let report = ReportView::new(&app.dialog.summary, app.theme);
    frame.render_widget(report, area);
}
