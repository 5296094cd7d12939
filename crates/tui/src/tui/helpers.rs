use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::TaskCounts;

use super::palette::Palette;

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

pub(crate) fn accent_title(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

pub fn counts_summary(counts: &TaskCounts) -> String {
    format!(
        "Total: {} | ✅ Done: {} | 🕒 Pending: {}",
        counts.total, counts.done, counts.pending
    )
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab / Shift+Tab", "Switch between All / Done / Pending"),
        ("j / k or ↓ / ↑", "Move selection"),
        ("q", "Quit"),
        ("a", "Add a task"),
        ("e", "Edit the selected task"),
        ("Enter / Space / d", "Toggle done on the selected task"),
        ("x / Delete", "Delete the selected task"),
        ("/", "Search tasks as you type"),
        ("C", "Clear the whole list (with confirmation)"),
        ("t", "Toggle light/dark theme"),
        ("r", "Refresh from storage"),
        ("h", "Toggle this help overlay"),
        ("Esc", "Cancel/close overlays"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_keeps_within_bounds() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = centered_rect(40, 10, area);
        assert!(rect.x >= area.x);
        assert!(rect.y >= area.y);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn counts_summary_matches_footer_format() {
        let counts = TaskCounts {
            total: 3,
            done: 1,
            pending: 2,
        };
        assert_eq!(counts_summary(&counts), "Total: 3 | ✅ Done: 1 | 🕒 Pending: 2");
    }
}
