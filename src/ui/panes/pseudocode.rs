//! Pseudocode pane rendering
//!
//! Shows the fixed listing of the running producer with line numbers and the
//! line of the exposed step highlighted. Keywords get a light tokenizer pass
//! in the same spirit as a source view, no real parsing involved.

use crate::trace::Listing;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn highlight_pseudocode(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }
        if !current_word.is_empty() {
            spans.push(Span::styled(current_word.clone(), word_style(&current_word)));
            current_word.clear();
        }
        let style = match c {
            '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    if !current_word.is_empty() {
        let style = word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    match word {
        "for" | "while" | "if" | "else" | "return" | "repeat" | "to" | "down" | "and" | "or"
        | "not" | "in" | "continue" | "times" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "null" | "NOT_FOUND" | "invalid" | "overflow" | "underflow" => {
            Style::default().fg(DEFAULT_THEME.error)
        }
        w if w.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the pseudocode pane; `current_line` is the 0-based highlighted line
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &Listing,
    current_line: Option<usize>,
) {
    let block = Block::default()
        .title(format!(" {} ", listing.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines: Vec<Line> = listing
        .lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = current_line == Some(idx);
            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content = highlight_pseudocode(text);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
