//! TUI rendering with ratatui
//!
//! Draws the board, the on-screen keyboard and the alert line.

use super::app::App;
use crate::core::{LetterScore, WORD_LENGTH};
use crate::engine::{CellState, GameStatus, KEY_ROWS, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(3),                // Alert
            Constraint::Length(ROWS as u16 * 2),  // Board
            Constraint::Min(5),                   // Keyboard
            Constraint::Length(3),                // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_alert(f, app, now, chunks[1]);
    render_board(f, app, now, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn render_alert(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let Some(text) = app.alert_text(now) else {
        return;
    };

    let color = match app.game.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::Yellow,
    };

    let alert = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(alert, area);
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let active_row = app.game.current_row();
    let shake = app.shake_offset(now);

    let mut lines = Vec::with_capacity(ROWS * 2);
    for row in 0..ROWS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2 + 1);

        // Jiggle the active row sideways while it shakes
        if row == active_row && shake == 1 {
            spans.push(Span::raw(" "));
        }

        for offset in 0..WORD_LENGTH {
            let index = row * WORD_LENGTH + offset;
            spans.push(cell_span(app, index, now));
            if offset + 1 < WORD_LENGTH {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn cell_span(app: &App, index: usize, now: Instant) -> Span<'static> {
    let cell = app.game.board().cells()[index];
    let letter = cell
        .letter
        .map_or(' ', |c| c.to_ascii_uppercase());

    // A cell mid-flip still shows as active until its turn in the reveal
    let state = if app.is_cell_revealed(index, now) {
        cell.state
    } else {
        CellState::Active
    };

    let style = match state {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Active => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellState::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };

    let style = if app.is_cell_dancing(index, now) {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    let text = if cell.letter.is_none() {
        " · ".to_string()
    } else {
        format!(" {letter} ")
    };

    Span::styled(text, style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(KEY_ROWS.len() * 2);

    for (i, key_row) in KEY_ROWS.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();

        // Enter and Delete flank the bottom letter row
        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::styled(" ENTER ", plain_key_style()));
            spans.push(Span::raw(" "));
        }

        for (j, letter) in key_row.chars().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(key_span(app, letter));
        }

        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(" DEL ", plain_key_style()));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn key_span(app: &App, letter: char) -> Span<'static> {
    let style = match app.game.keyboard().score_of(letter) {
        Some(LetterScore::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterScore::Misplaced) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterScore::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => plain_key_style(),
    };

    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn plain_key_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Gray)
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.game.status() {
        GameStatus::InProgress => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
        GameStatus::Won | GameStatus::Lost => "n / Enter: New Game | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(help, area);
}
