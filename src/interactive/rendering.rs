//! TUI rendering with ratatui
//!
//! Draws the tile board, the hint keyboard, transient notifications and the
//! status bar. Board geometry is shared with the mouse handler through
//! [`tile_at`].

use super::app::App;
use crate::core::{KeyboardState, LetterStatus, MAX_TRIES, WORD_LENGTH, normalize_letter};
use crate::output::display::uppercase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::rc::Rc;

/// On-screen keyboard rows (Portuguese layout, ç included)
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjklç", "zxcvbnm"];

/// Rendered width of one board line: tiles of 3 cells with 1-cell gaps
const BOARD_LINE_WIDTH: u16 = (WORD_LENGTH as u16) * 4 - 1;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = layout_chunks(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_notifications(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Split the frame into header, board, keyboard, notifications and status
///
/// Shared with the mouse handler via [`tile_at`].
fn layout_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(MAX_TRIES as u16 + 2), // Board
            Constraint::Length(5),                    // Keyboard
            Constraint::Length(3),                    // Notifications
            Constraint::Length(3),                    // Status bar
        ])
        .split(area)
}

/// Map a terminal coordinate to a board tile
///
/// Returns `(row, col)` for clicks landing on a tile; gaps, borders and
/// everything outside the board return `None`.
#[must_use]
pub fn tile_at(area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let board = layout_chunks(area)[1];
    if board.width < BOARD_LINE_WIDTH + 2 || board.height < 2 {
        return None;
    }

    // Step inside the block borders
    let inner_y = board.y + 1;
    let inner_height = board.height - 2;
    if y < inner_y || y >= inner_y + inner_height {
        return None;
    }
    let row = (y - inner_y) as usize;
    if row >= MAX_TRIES {
        return None;
    }

    let inner_x = board.x + 1;
    let inner_width = board.width - 2;
    let x0 = inner_x + (inner_width - BOARD_LINE_WIDTH) / 2;
    if x < x0 {
        return None;
    }
    let dx = x - x0;
    if dx >= BOARD_LINE_WIDTH || dx % 4 == 3 {
        return None;
    }

    Some((row, (dx / 4) as usize))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("P A L A V R A")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_TRIES);

    for row in 0..MAX_TRIES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2 - 1);
        for col in 0..WORD_LENGTH {
            let (text, style) = tile_view(app, row, col);
            spans.push(Span::styled(text, style));
            if col + 1 < WORD_LENGTH {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// What a single tile shows right now
fn tile_view(app: &App, row: usize, col: usize) -> (String, Style) {
    // Submitted rows show their scored colors; the revealing row only up to
    // the revealed prefix
    if let Some(result) = app.session.history().get(row) {
        let unrevealed = app
            .reveal
            .as_ref()
            .is_some_and(|r| r.row == row && col >= r.revealed);

        if unrevealed {
            let ch = app.session.tile(row, col).unwrap_or(' ');
            return (
                format!(" {} ", uppercase(ch)),
                Style::default().add_modifier(Modifier::BOLD),
            );
        }

        let ch = result.display()[col];
        return (format!(" {} ", uppercase(ch)), status_style(result.statuses()[col]));
    }

    // Rows still to be typed
    let typed = app.session.tile(row, col);
    let text = match typed {
        Some(ch) => format!(" {} ", uppercase(ch)),
        None => " · ".to_string(),
    };
    let mut style = match typed {
        Some(_) => Style::default().add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    let cursor_here = !app.is_revealing()
        && !app.session.is_over()
        && row == app.session.row()
        && col == app.session.col();
    if cursor_here {
        style = style.add_modifier(Modifier::REVERSED);
    }

    (text, style)
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.visible_keyboard();

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, ch) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {} ", uppercase(ch)),
                    key_style(&keyboard, ch),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Teclado ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn key_style(keyboard: &KeyboardState, ch: char) -> Style {
    let letter = normalize_letter(ch);

    if keyboard.is_blocked(letter) {
        return Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
    }

    match keyboard.hint(letter) {
        Some(status) => status_style(status),
        None => Style::default(),
    }
}

fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let Some(notification) = app.notifications.last() {
        (
            notification.text.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.session.is_over() && !app.is_revealing() {
        (
            "Pressione N para novo jogo ou Q para sair".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (String::new(), Style::default())
    };

    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempt = (app.session.row() + 1).min(MAX_TRIES);
    let tries = Paragraph::new(format!("Tentativa: {attempt}/{MAX_TRIES}"))
        .alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let phase_text = match app.session.phase() {
        crate::core::Phase::Active => "Em jogo",
        crate::core::Phase::Won => "Vitória!",
        crate::core::Phase::Lost => "Derrota",
    };
    let phase = Paragraph::new(phase_text).alignment(Alignment::Center);
    f.render_widget(phase, chunks[1]);

    let help_text = if app.session.is_over() {
        "N: novo jogo | Q: sair"
    } else {
        "Enter: enviar | Backspace: apagar | clique: mover cursor | Esc: sair"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
