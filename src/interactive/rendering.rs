//! TUI rendering with ratatui
//!
//! Honeycomb, word list and input fields for the Spelling Bee interface.

use super::app::{App, InputMode, WordEntry};
use crate::game::{Color as GameColor, Field, GameController, Session};
use crate::output::formatters::{HONEYCOMB, cell_letter};
use crate::wordlists::DictionarySource;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Width of one word list column
const WORD_COLUMN_WIDTH: u16 = 18;

/// Main UI rendering function
pub fn ui<D: DictionarySource, R: Rng>(f: &mut Frame, game: &GameController<App, D, R>) {
    let app = game.presenter();
    let session = game.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input fields
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32), // Honeycomb
            Constraint::Min(20),    // Word list
        ])
        .split(chunks[1]);

    render_honeycomb(f, app, main_chunks[0]);
    render_words(f, app, session, main_chunks[1]);
    render_inputs(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_status(f, session, chunks[4]);
}

/// Terminal color for a game color
#[must_use]
pub const fn tui_color(color: GameColor) -> Color {
    match color {
        GameColor::Black => Color::Reset,
        GameColor::Blue => Color::LightBlue,
        GameColor::Green => Color::Green,
        GameColor::Red => Color::Red,
        GameColor::Purple => Color::Magenta,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_honeycomb(f: &mut Frame, app: &App, area: Rect) {
    let center_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let outer_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    for row in &HONEYCOMB {
        let spans: Vec<Span> = row
            .iter()
            .map(|cell| match cell {
                Some(index) => {
                    let style = if *index == 0 { center_style } else { outer_style };
                    Span::styled(format!("  {}  ", cell_letter(&app.letters, *index)), style)
                }
                None => Span::raw("     "),
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let honeycomb = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Beehive ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(honeycomb, area);
}

fn render_words(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let title = format!(" Words ({}) ", session.found_count());
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.words.is_empty() {
        let empty = Paragraph::new("No words yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    }

    // Fill columns top to bottom
    let rows = usize::from(inner.height.max(1));
    let columns = usize::from((inner.width / WORD_COLUMN_WIDTH).max(1));
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(WORD_COLUMN_WIDTH); columns])
        .split(inner);

    let (hidden, shown) = visible_words(&app.words, rows * columns);
    let mut items: Vec<ListItem> = Vec::with_capacity(shown.len() + 1);
    if hidden > 0 {
        let marker = ListItem::new(format!("+{hidden} more"));
        items.push(marker.style(Style::default().fg(Color::DarkGray)));
    }
    items.extend(shown.iter().map(|entry| {
        let style = Style::default().fg(tui_color(entry.color));
        let style = if entry.color == GameColor::Blue {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        ListItem::new(entry.text.clone()).style(style)
    }));

    let mut items = items.into_iter();
    for area in column_areas.iter().copied() {
        let column: Vec<ListItem> = items.by_ref().take(rows).collect();
        if column.is_empty() {
            break;
        }
        f.render_widget(List::new(column), area);
    }
}

/// Entries that fit in `capacity` cells, newest kept
///
/// When the list overflows, one cell goes to a "+N more" marker and the
/// returned count is the number of older entries left out.
fn visible_words(words: &[WordEntry], capacity: usize) -> (usize, &[WordEntry]) {
    if words.len() <= capacity {
        return (0, words);
    }
    let kept = capacity.saturating_sub(1);
    let hidden = words.len() - kept;
    (hidden, &words[hidden..])
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let fields = [
        (InputMode::Puzzle, Field::Puzzle, app.puzzle_input.as_str()),
        (InputMode::Word, Field::Word, app.word_input.as_str()),
    ];

    for ((mode, field, content), chunk) in fields.into_iter().zip(chunks.iter()) {
        let (color, border) = if app.input_mode == mode {
            (Color::Cyan, BorderType::Double)
        } else {
            (Color::DarkGray, BorderType::Plain)
        };

        let input = Paragraph::new(content)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(format!(" {} ", field.name()))
                    .borders(Borders::ALL)
                    .border_type(border)
                    .style(Style::default().fg(color)),
            );
        f.render_widget(input, *chunk);
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let line = app.message.as_ref().map_or_else(Line::default, |msg| {
        Line::from(Span::styled(
            msg.text.clone(),
            Style::default()
                .fg(tui_color(msg.color))
                .add_modifier(Modifier::BOLD),
        ))
    });

    let message = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(score, chunks[0]);

    let help = Paragraph::new(
        "Enter: Submit | TAB: Switch field | Space: Shuffle | ?: Hint | Ctrl+S: Solve | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
