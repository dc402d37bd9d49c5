//! Stateless UI rendering for the game.

use crate::app::{App, Mode, NameForm};
use crate::status::{score_lines, status_line};
use noughts::{Cell, GameStatus, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const SCORE_WIDTH: u16 = 28;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title, body, status, help] = screen_chunks(area);

    let title_text = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title_text, title);

    let [board_area, score_area] = body_chunks(body);
    draw_board(frame, board_area, app);
    draw_scores(frame, score_area, app);

    let mut status_spans = vec![Span::styled(
        status_line(app.engine()),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(hint) = app.hint() {
        status_spans.push(Span::styled(
            format!("  ({})", hint),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status_text = Paragraph::new(Line::from(status_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status);

    let help_text = Paragraph::new(
        "arrows/1-9 move  enter play  r restart round  n new game  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help_text, help);

    if let Mode::NewGame(form) = app.mode() {
        draw_form(frame, area, form);
    }
}

/// Screen cell areas for the board, in index order, for a given frame size.
///
/// Shared by rendering and mouse hit-testing so both agree on layout.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let [_, body, _, _] = screen_chunks(area);
    let [board_area, _] = body_chunks(body);
    let grid = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);

    Position::ALL.map(|pos| {
        let x = grid.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
    })
}

/// Board cell under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    cell_areas(area).iter().position(|cell| {
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board and scores
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn body_chunks(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(SCORE_WIDTH)])
        .split(area);
    [chunks[0], chunks[1]]
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let separator = Style::default().fg(Color::DarkGray);

    for row in 1..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(grid.x, y, BOARD_WIDTH, 1).intersection(area);
        let rule = Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(separator);
        frame.render_widget(rule, line);
    }
    for col in 1..3u16 {
        let x = grid.x + col * (CELL_WIDTH + 1) - 1;
        let line = Rect::new(x, grid.y, 1, BOARD_HEIGHT).intersection(area);
        let bars: Vec<Line> = (0..BOARD_HEIGHT).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(bars).style(separator), line);
    }

    for (pos, cell_area) in Position::ALL.into_iter().zip(cell_areas(frame.area())) {
        draw_cell(frame, cell_area, app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();

    let (symbol, base_style) = match engine.board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match engine.status() {
        GameStatus::Won { line, .. } if line.contains(pos) => base_style.bg(Color::Green),
        GameStatus::InProgress { .. } if pos == app.cursor() => {
            base_style.bg(Color::White).fg(Color::Black)
        }
        _ => base_style,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = score_lines(app.engine())
        .into_iter()
        .map(Line::from)
        .collect();
    let scores = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Score"),
    );
    frame.render_widget(scores, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &NameForm) {
    let popup = center_rect(area, 44, 8);
    frame.render_widget(Clear, popup);

    let field = |mark: Mark, value: &str| {
        let style = if form.focus == mark {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("Player {}: ", mark)),
            Span::styled(format!("{:<20}", value), style),
        ])
    };

    let mut lines = vec![field(Mark::X, &form.x), field(Mark::O, &form.o), Line::from("")];
    match &form.error {
        Some(message) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from(Span::styled(
            "tab switch  enter start  esc cancel",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New game"),
    );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
