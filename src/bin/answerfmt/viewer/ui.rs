//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Message body (remaining space): the thought part when expanded, then the answer
//! - Help line (1 line, fixed)
//!
//! Headings and callouts are painted from the part's palette. Paragraphs show only what
//! their reveal has uncovered so far.

use super::app::App;
use answer_render::answer::ast::{self, Document};
use answer_render::answer::reveal::RevealBoard;
use answer_render::answer::tagging::{Palette, Rgb};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CELL_SEPARATOR: &str = " │ ";
const HELP: &str = " j/k: scroll   t: thought   r: restart   q: quit";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(1),    // Message body
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0], title);
    render_body(frame, chunks[1], app);
    render_help(frame, chunks[2]);
}

fn render_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(format!("answerfmt:: {}", title)).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Every line of the message body, before scrolling
pub fn body_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if app.view.has_thought() {
        let marker = if app.view.thought_expanded() {
            "▾ Thought"
        } else {
            "▸ Thought"
        };
        lines.push(Line::styled(
            marker,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        if let Some(thought) = app.view.thought().filter(|_| app.view.thought_expanded()) {
            lines.extend(document_lines(thought, &app.thought_board, &app.thought_palette));
        }
        lines.push(Line::default());
    }

    lines.extend(document_lines(
        app.view.answer(),
        &app.answer_board,
        &app.answer_palette,
    ));
    lines
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let lines = body_lines(app);
    let offset = app.scroll_offset().min(lines.len().saturating_sub(1));

    let block = Block::default().borders(Borders::ALL).title("Answer");
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// One styled line per block, with a blank line between sections
pub fn document_lines(
    document: &Document,
    board: &RevealBoard,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current_section = None;

    for (key, block) in document.blocks() {
        if current_section.is_some_and(|section| section != key.section) {
            lines.push(Line::default());
        }
        current_section = Some(key.section);

        match block {
            ast::Block::Heading { spans, .. } => {
                let base = Style::default()
                    .fg(color(palette.heading()))
                    .add_modifier(Modifier::BOLD);
                lines.push(Line::from(inline_spans(spans, base)));
            }
            ast::Block::CalloutHeading { text, tag } => {
                lines.push(Line::styled(
                    text.clone(),
                    Style::default()
                        .fg(color(palette.color(*tag)))
                        .add_modifier(Modifier::BOLD),
                ));
            }
            ast::Block::Bullet { spans } => {
                let mut line = vec![Span::raw("• ")];
                line.extend(inline_spans(spans, Style::default()));
                lines.push(Line::from(line));
            }
            ast::Block::Table(table) => lines.extend(table_lines(table)),
            ast::Block::Paragraph { .. } => {
                let visible = board.visible(key).unwrap_or_default();
                lines.push(Line::raw(visible.to_string()));
            }
        }
    }
    lines
}

fn table_lines(table: &ast::Table) -> Vec<Line<'static>> {
    let widths: Vec<usize> = (0..table.column_count)
        .map(|column| {
            (0..table.row_count())
                .map(|row| shown_width(&table.cell_spans(row, column)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    (0..table.row_count())
        .map(|row| {
            let base = if row == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = Vec::new();
            for (column, width) in widths.iter().enumerate() {
                if column > 0 {
                    spans.push(Span::raw(CELL_SEPARATOR));
                }
                let cell = table.cell_spans(row, column);
                let padding = width.saturating_sub(shown_width(&cell));
                spans.extend(inline_spans(&cell, base));
                spans.push(Span::raw(" ".repeat(padding)));
            }
            Line::from(spans)
        })
        .collect()
}

/// Width of a cell once emphasis markers are gone
fn shown_width(spans: &[ast::Span]) -> usize {
    spans.iter().map(|span| span.text.chars().count()).sum()
}

fn inline_spans(spans: &[ast::Span], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| {
            let style = match span.kind {
                ast::SpanKind::Plain => base,
                ast::SpanKind::Bold => base.add_modifier(Modifier::BOLD),
                ast::SpanKind::Italic => base.add_modifier(Modifier::ITALIC),
            };
            Span::styled(span.text.clone(), style)
        })
        .collect()
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
