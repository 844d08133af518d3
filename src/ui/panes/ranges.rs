//! Merge-sort split tree rendering

use crate::trace::{RangeNode, RangeStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn status_style(status: RangeStatus) -> Style {
    match status {
        RangeStatus::Pending => Style::default().fg(DEFAULT_THEME.comment),
        RangeStatus::Active => Style::default()
            .fg(DEFAULT_THEME.pointer)
            .add_modifier(Modifier::BOLD),
        RangeStatus::Leaf => Style::default().fg(DEFAULT_THEME.primary),
        RangeStatus::Merging => Style::default()
            .fg(DEFAULT_THEME.merging)
            .add_modifier(Modifier::BOLD),
        RangeStatus::Merged => Style::default().fg(DEFAULT_THEME.success),
    }
}

fn node_text(node: &RangeNode) -> String {
    let values = node
        .values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}-{}] {}", node.low, node.high, values)
}

/// Render the split tree, one row per recursion depth ordered by range
pub fn render_ranges_pane(frame: &mut Frame, area: Rect, ranges: &[RangeNode]) {
    let block = Block::default()
        .title(" Split Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let depth = ranges.iter().map(|n| n.depth).max().map_or(0, |d| d + 1);
    let lines: Vec<Line> = (0..depth)
        .map(|d| {
            let mut level: Vec<&RangeNode> = ranges.iter().filter(|n| n.depth == d).collect();
            level.sort_by_key(|n| n.low);
            let mut spans = vec![Span::styled(
                format!("{:2} ", d),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            for node in level {
                spans.push(Span::styled(node_text(node), status_style(node.status)));
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
