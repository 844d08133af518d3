//! Container pane rendering
//!
//! Draws every container of the exposed step. The first container is laid out
//! according to the trace's [`Shape`]; the auxiliary ones (`count`, `output`,
//! `frontier`, `visited`, `pattern`) are always a row of boxes. Highlighted
//! cells carry the labels of the roles pointing at them underneath.

use crate::trace::{Container, ContainerId, Role, Shape, Step, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height in rows of the tallest bar
const BAR_HEIGHT: usize = 6;

/// Roles pointing at each cell of a container
fn labels_for(step: &Step, id: ContainerId, len: usize) -> Vec<Vec<Role>> {
    let mut labels = vec![Vec::new(); len];
    for (role, index) in step.pointers_into(id) {
        if let Some(slot) = labels.get_mut(index) {
            slot.push(role);
        }
    }
    labels
}

fn label_text(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(",")
}

/// Inner width shared by all cells of a container
fn cell_width(cells: &[Value]) -> usize {
    cells
        .iter()
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(1)
        .max(1)
        + 2
}

fn cell_style(value: &Value, highlighted: bool, accent: Color) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.pointer)
            .add_modifier(Modifier::BOLD)
    } else if !value.is_filled() {
        Style::default().fg(DEFAULT_THEME.empty_cell)
    } else {
        Style::default().fg(accent)
    }
}

fn accent_for(container: &Container) -> Color {
    match container.name {
        "visited" | "output" => DEFAULT_THEME.visited,
        _ => DEFAULT_THEME.fg,
    }
}

/// Fit `text` into `width` columns, centered
fn centered(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{:^width$}", clipped, width = width)
}

fn title_line(container: &Container) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} ({})", container.name, container.cells.len()),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// A row of boxes with indices and pointer labels below
fn box_rows(container: &Container, labels: &[Vec<Role>]) -> Vec<Line<'static>> {
    if container.cells.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let w = cell_width(&container.cells);
    let accent = accent_for(container);
    let (mut top, mut mid, mut bottom) = (Vec::new(), Vec::new(), Vec::new());
    let mut index_row = String::new();
    let mut label_row = String::new();

    for (i, value) in container.cells.iter().enumerate() {
        let style = cell_style(value, !labels[i].is_empty(), accent);
        top.push(Span::styled(format!("┌{}┐", "─".repeat(w)), style));
        mid.push(Span::styled(format!("│{}│", centered(&value.to_string(), w)), style));
        bottom.push(Span::styled(format!("└{}┘", "─".repeat(w)), style));
        index_row.push_str(&centered(&i.to_string(), w + 2));
        label_row.push_str(&centered(&label_text(&labels[i]), w + 2));
    }

    vec![
        Line::from(top),
        Line::from(mid),
        Line::from(bottom),
        Line::from(Span::styled(index_row, Style::default().fg(DEFAULT_THEME.comment))),
        Line::from(Span::styled(
            label_row,
            Style::default()
                .fg(DEFAULT_THEME.pointer)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Vertical bars above the boxes, scaled to the largest value
fn bar_rows(container: &Container, labels: &[Vec<Role>]) -> Vec<Line<'static>> {
    let w = cell_width(&container.cells);
    let max = container
        .cells
        .iter()
        .filter_map(Value::as_int)
        .max()
        .unwrap_or(0)
        .max(1);
    let heights: Vec<usize> = container
        .cells
        .iter()
        .map(|v| {
            let n = i128::from(v.as_int().unwrap_or(0).max(0));
            let max = i128::from(max);
            ((n * BAR_HEIGHT as i128 + max - 1) / max) as usize
        })
        .collect();

    (1..=BAR_HEIGHT)
        .rev()
        .map(|row| {
            let spans: Vec<Span<'static>> = heights
                .iter()
                .enumerate()
                .map(|(i, &h)| {
                    let fill = if h >= row { "█" } else { " " };
                    let style = if labels[i].is_empty() {
                        Style::default().fg(DEFAULT_THEME.primary)
                    } else {
                        Style::default().fg(DEFAULT_THEME.pointer)
                    };
                    Span::styled(format!(" {} ", fill.repeat(w)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Stack drawn top-down, the top element first
fn stack_rows(container: &Container, labels: &[Vec<Role>]) -> Vec<Line<'static>> {
    if container.cells.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty stack)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let w = cell_width(&container.cells);
    let mut lines: Vec<Line<'static>> = container
        .cells
        .iter()
        .enumerate()
        .rev()
        .map(|(i, value)| {
            let style = cell_style(value, !labels[i].is_empty(), DEFAULT_THEME.fg);
            let mut spans = vec![Span::styled(
                format!("│{}│", centered(&value.to_string(), w)),
                style,
            )];
            if !labels[i].is_empty() {
                spans.push(Span::styled(
                    format!(" ← {}", label_text(&labels[i])),
                    Style::default().fg(DEFAULT_THEME.pointer),
                ));
            }
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(w)),
        Style::default().fg(DEFAULT_THEME.border_normal),
    )));
    lines
}

/// Nodes joined by arrows, with a wrap marker for circular lists
fn list_rows(
    container: &Container,
    labels: &[Vec<Role>],
    doubly: bool,
    circular: bool,
) -> Vec<Line<'static>> {
    if container.cells.is_empty() {
        return vec![Line::from(Span::styled(
            "head → null",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let w = cell_width(&container.cells);
    let arrow = if doubly { " ⇄ " } else { " → " };
    let link_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = Vec::new();
    let mut label_row = String::new();

    for (i, value) in container.cells.iter().enumerate() {
        let style = cell_style(value, !labels[i].is_empty(), DEFAULT_THEME.fg);
        spans.push(Span::styled(format!("[{}]", centered(&value.to_string(), w)), style));
        label_row.push_str(&centered(&label_text(&labels[i]), w + 2));
        if i + 1 < container.cells.len() {
            spans.push(Span::styled(arrow, link_style));
            label_row.push_str("   ");
        }
    }
    spans.push(Span::styled(
        if circular { " ↺ head" } else { " → null" },
        link_style,
    ));

    vec![
        Line::from(spans),
        Line::from(Span::styled(
            label_row,
            Style::default()
                .fg(DEFAULT_THEME.pointer)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Level-order nodes, one text row per tree level
fn tree_rows(container: &Container, labels: &[Vec<Role>], width: usize) -> Vec<Line<'static>> {
    let n = container.cells.len();
    let w = cell_width(&container.cells) + 2;
    let mut lines = Vec::new();
    let mut start = 0;
    let mut level_len = 1;

    while start < n {
        let slot = (width / level_len).max(w);
        let mut spans = Vec::new();
        let mut label_row = String::new();
        for i in start..(start + level_len).min(n) {
            let value = &container.cells[i];
            let style = cell_style(value, !labels[i].is_empty(), DEFAULT_THEME.fg);
            spans.push(Span::styled(centered(&format!("({})", value), slot), style));
            label_row.push_str(&centered(&label_text(&labels[i]), slot));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            label_row,
            Style::default().fg(DEFAULT_THEME.pointer),
        )));
        start += level_len;
        level_len *= 2;
    }
    lines
}

/// Render all containers of `step`
pub fn render_containers_pane(frame: &mut Frame, area: Rect, step: &Step, shape: Shape) {
    let block = Block::default()
        .title(" Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (ci, container) in step.containers.iter().enumerate() {
        let labels = labels_for(step, ContainerId(ci), container.cells.len());
        lines.push(title_line(container));

        let primary = ci == 0;
        match shape {
            Shape::Bars if primary => {
                lines.extend(bar_rows(container, &labels));
                lines.extend(box_rows(container, &labels));
            }
            Shape::Stack if primary => lines.extend(stack_rows(container, &labels)),
            Shape::LinkedList { doubly, circular } if primary => {
                lines.extend(list_rows(container, &labels, doubly, circular));
            }
            Shape::Tree if primary => lines.extend(tree_rows(container, &labels, inner_width)),
            _ => lines.extend(box_rows(container, &labels)),
        }
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(nothing to show)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_fits_widest_value() {
        let cells = vec![Value::Int(5), Value::Int(-120), Value::Empty];
        assert_eq!(cell_width(&cells), 6);
    }

    #[test]
    fn test_centered_clips() {
        assert_eq!(centered("pivot", 3), "piv");
        assert_eq!(centered("i", 3), " i ");
    }
}
