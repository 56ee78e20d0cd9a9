// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive leaderboard (ratatui + crossterm): metrics header, filter controls, ranked table
//! and a detail panel for the selected user. Every key press that edits a control goes through
//! [`Leaderboard::apply`], and each frame re-derives the whole view.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::model::{Dataset, UserRecord};
use crate::ops::{DerivedView, Leaderboard, ViewEvent};
use crate::query::SortKey;
use crate::render::text::{single_line, truncate_with_ellipsis};
use crate::render::{
    format_count, format_score, metric_items, repo_url, EMPTY_DETAIL_MESSAGE, NO_MATCH_MESSAGE,
};
use crate::store::StoreError;

const FOCUS_COLOR: Color = Color::LightGreen;
const SELECTED_ROW_BG: Color = Color::DarkGray;
const DENOUNCED_COLOR: Color = Color::LightRed;
const SCORE_COLOR: Color = Color::LightYellow;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND: &str = "vouchbook";
const TOAST_TTL: Duration = Duration::from_secs(2);
const NAME_COLUMN_MAX: usize = 32;

/// Runs the interactive terminal UI against the outcome of the one-time dataset load.
pub fn run(loaded: Result<Dataset, StoreError>) -> Result<(), Box<dyn Error>> {
    let mut app = App::from_load(loaded);
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

// Extracted header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
    MinRepos,
}

#[derive(Debug)]
enum Screen {
    Ready(Leaderboard),
    /// The dataset could not be loaded; nothing but the message is shown.
    LoadFailed { data_path: String, error: String },
}

struct App {
    screen: Screen,
    input_mode: InputMode,
    /// Raw control contents, as typed (the view holds the normalized values).
    search_input: String,
    min_repos_input: String,
    /// Value of the control being edited when editing started, restored on Esc.
    edit_backup: String,
    table_state: TableState,
    show_help: bool,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_screen(Screen::Ready(Leaderboard::new(dataset)))
    }

    fn load_failed(data_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::with_screen(Screen::LoadFailed {
            data_path: data_path.into(),
            error: error.into(),
        })
    }

    fn from_load(loaded: Result<Dataset, StoreError>) -> Self {
        match loaded {
            Ok(dataset) => Self::new(Arc::new(dataset)),
            Err(err) => Self::load_failed(err.path().display().to_string(), err.to_string()),
        }
    }

    fn with_screen(screen: Screen) -> Self {
        Self {
            screen,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            min_repos_input: "0".to_owned(),
            edit_backup: String::new(),
            table_state: TableState::default(),
            show_help: false,
            toast: None,
            should_quit: false,
        }
    }

    fn board(&self) -> Option<&Leaderboard> {
        match &self.screen {
            Screen::Ready(board) => Some(board),
            Screen::LoadFailed { .. } => None,
        }
    }

    fn board_mut(&mut self) -> Option<&mut Leaderboard> {
        match &mut self.screen {
            Screen::Ready(board) => Some(board),
            Screen::LoadFailed { .. } => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.board().is_none() {
            return matches!(code, KeyCode::Char('q') | KeyCode::Esc);
        }

        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        match self.input_mode {
            InputMode::Search | InputMode::MinRepos => {
                self.handle_edit_key(code);
                return false;
            }
            InputMode::Normal => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('/') => self.begin_edit(InputMode::Search),
            KeyCode::Char('m') => self.begin_edit(InputMode::MinRepos),
            KeyCode::Char('s') => self.cycle_sort(SortKey::cycle),
            KeyCode::Char('S') => self.cycle_sort(SortKey::cycle_back),
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_min_repos(1),
            KeyCode::Char('-') => self.step_min_repos(-1),
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::PageUp => self.move_selection(-10),
            KeyCode::Home | KeyCode::Char('g') => self.move_selection(isize::MIN),
            KeyCode::End | KeyCode::Char('G') => self.move_selection(isize::MAX),
            KeyCode::Char('y') => self.yank_selected_repo_urls(),
            _ => {}
        }

        false
    }

    fn begin_edit(&mut self, mode: InputMode) {
        self.edit_backup = match mode {
            InputMode::Search => self.search_input.clone(),
            InputMode::MinRepos => self.min_repos_input.clone(),
            InputMode::Normal => return,
        };
        self.input_mode = mode;
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                let backup = std::mem::take(&mut self.edit_backup);
                self.set_active_input(backup);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter | KeyCode::Tab => {
                self.edit_backup.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                let mut value = self.active_input().to_owned();
                value.pop();
                self.set_active_input(value);
            }
            KeyCode::Char(ch) => {
                let mut value = self.active_input().to_owned();
                value.push(ch);
                self.set_active_input(value);
            }
            _ => {}
        }
    }

    fn active_input(&self) -> &str {
        match self.input_mode {
            InputMode::MinRepos => &self.min_repos_input,
            InputMode::Search | InputMode::Normal => &self.search_input,
        }
    }

    /// Stores the raw control value and feeds it through the view's input parsing.
    fn set_active_input(&mut self, value: String) {
        let event = match self.input_mode {
            InputMode::Search => {
                self.search_input = value.clone();
                ViewEvent::SearchInput(value)
            }
            InputMode::MinRepos => {
                self.min_repos_input = value.clone();
                ViewEvent::MinReposInput(value)
            }
            InputMode::Normal => return,
        };
        if let Some(board) = self.board_mut() {
            board.apply(event);
        }
    }

    fn cycle_sort(&mut self, step: fn(SortKey) -> SortKey) {
        let Some(board) = self.board_mut() else {
            return;
        };
        let next = step(board.view().sort_by());
        board.apply(ViewEvent::SortInput(next.as_str().to_owned()));
        self.set_toast(format!("Sorted by {}", next.label()));
    }

    fn step_min_repos(&mut self, delta: i64) {
        let Some(board) = self.board_mut() else {
            return;
        };
        let current = board.view().min_repos();
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        let raw = next.to_string();
        board.apply(ViewEvent::MinReposInput(raw.clone()));
        self.min_repos_input = raw;
    }

    fn clear_filters(&mut self) {
        let Some(board) = self.board_mut() else {
            return;
        };
        board.apply(ViewEvent::SearchInput(String::new()));
        board.apply(ViewEvent::MinReposInput("0".to_owned()));
        self.search_input.clear();
        self.min_repos_input = "0".to_owned();
        self.set_toast("Filters cleared");
    }

    /// Moves the selection by `delta` rows within the visible list, clamped to its ends.
    fn move_selection(&mut self, delta: isize) {
        let Some(board) = self.board_mut() else {
            return;
        };

        let derived = board.derive();
        if derived.visible.is_empty() {
            return;
        }
        let last = derived.visible.len() - 1;
        let current = derived.selected_index().unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs()).min(last)
        };
        let user_key = derived.visible[next].user_key.clone();

        board.apply(ViewEvent::SelectRow(user_key));
    }

    fn yank_selected_repo_urls(&mut self) {
        let Some(board) = self.board_mut() else {
            return;
        };
        let derived = board.derive();
        let Some(user) = derived.selected() else {
            self.set_toast("No user selected");
            return;
        };

        let urls = user.repos.iter().map(|repo| repo_url(&repo.repo)).collect::<Vec<_>>();
        let count = urls.len();
        match copy_to_clipboard(&urls.join("\n")) {
            Ok(backend) => self.set_toast(format!("Yanked {count} repo links ({backend})")),
            Err(err) => self.set_toast(format!("Clipboard error: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&mut self) -> Option<String> {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| toast.message.clone())
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    if let Screen::LoadFailed { data_path, error } = &app.screen {
        draw_load_error(frame, area, data_path, error);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let (metrics_area, controls_area, main_area, status_area) =
        (layout[0], layout[1], layout[2], layout[3]);

    let toast = app.active_toast();
    let input_mode = app.input_mode;
    let show_help = app.show_help;
    let controls = ControlValues {
        search: app.search_input.clone(),
        min_repos: app.min_repos_input.clone(),
    };

    let App {
        screen, table_state, ..
    } = app;
    let Screen::Ready(board) = screen else {
        return;
    };
    let derived = board.derive();

    frame.render_widget(
        Paragraph::new(metrics_line(derived.dataset))
            .block(Block::default().borders(Borders::ALL).title(view_title("Vouch Book", None))),
        metrics_area,
    );

    frame.render_widget(
        Paragraph::new(controls_line(&controls, derived.view.sort_by(), input_mode))
            .block(Block::default().borders(Borders::ALL).title(view_title("Filters", None))),
        controls_area,
    );

    let panes = Layout::default()
        .direction(if main_area.width < 100 { Direction::Vertical } else { Direction::Horizontal })
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_area);
    draw_table(frame, panes[0], &derived, table_state);
    draw_detail(frame, panes[1], derived.selected());

    frame.render_widget(
        Paragraph::new(footer_help_line(input_mode, toast.as_deref())),
        status_area,
    );

    if show_help {
        render_help(frame, main_area);
    }
}

fn draw_load_error(frame: &mut Frame<'_>, area: Rect, data_path: &str, error: &str) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Failed to load data file: "),
            Span::styled(data_path.to_owned(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(error.to_owned(), Style::default().fg(DENOUNCED_COLOR))),
        Line::from(""),
        Line::from(Span::styled("Press q to quit.", Style::default().fg(FOOTER_LABEL_COLOR))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(view_title("Vouch Book", None))),
        area,
    );
}

fn draw_table(frame: &mut Frame<'_>, area: Rect, derived: &DerivedView<'_>, state: &mut TableState) {
    let title = view_title("Leaderboard", Some(&format!("[{}]", derived.visible.len())));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title(title);

    if derived.visible.is_empty() {
        state.select(None);
        frame.render_widget(
            Paragraph::new(Span::styled(NO_MATCH_MESSAGE, Style::default().fg(FOOTER_LABEL_COLOR)))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(["#", "User", "Score", "Active", "Denounced", "Stars"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = derived.visible.iter().enumerate().map(|(idx, user)| leaderboard_row(idx, user));
    let widths = [
        Constraint::Length(5),
        Constraint::Min(12),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    state.select(derived.selected_index());
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(SELECTED_ROW_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(table, area, state);
}

fn leaderboard_row(idx: usize, user: &UserRecord) -> Row<'static> {
    let denounced_style = if user.denounced_repo_count > 0 {
        Style::default().fg(DENOUNCED_COLOR)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from((idx + 1).to_string()),
        Cell::from(truncate_with_ellipsis(&single_line(&user.user), NAME_COLUMN_MAX)),
        Cell::from(Span::styled(format_score(user.score), Style::default().fg(SCORE_COLOR))),
        Cell::from(user.active_repo_count.to_string()),
        Cell::from(Span::styled(user.denounced_repo_count.to_string(), denounced_style)),
        Cell::from(format_count(user.stars_total)),
    ])
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, selected: Option<&UserRecord>) {
    let block = Block::default().borders(Borders::ALL).title(view_title("Detail", None));
    let text = match selected {
        Some(user) => Text::from(detail_lines(user)),
        None => Text::from(Span::styled(
            EMPTY_DETAIL_MESSAGE,
            Style::default().fg(FOOTER_LABEL_COLOR),
        )),
    };
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }).block(block), area);
}

fn detail_lines(user: &UserRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(single_line(&user.user), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format_score(user.score), Style::default().fg(SCORE_COLOR)),
        ]),
        Line::from(format!(
            "{} active repos, {} denounced, {} weighted stars.",
            user.active_repo_count,
            user.denounced_repo_count,
            format_count(user.stars_total)
        )),
        Line::from(""),
    ];

    for repo in &user.repos {
        let status = if repo.denounced {
            Span::styled("denounced", Style::default().fg(DENOUNCED_COLOR))
        } else {
            Span::raw("active")
        };
        lines.push(Line::from(vec![
            Span::styled(single_line(&repo.repo), Style::default().fg(FOCUS_COLOR)),
            Span::raw("  "),
            status,
        ]));
        lines.push(Line::from(format!(
            "  {} stars • {} • {}",
            format_count(repo.stars),
            single_line(&repo.path),
            single_line(&repo.raw_entry)
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", repo_url(&repo.repo)),
            Style::default().fg(FOOTER_LABEL_COLOR),
        )));
    }

    lines
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
