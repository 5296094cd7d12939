use std::cmp::min;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use crate::tui::constants::APP_VERSION;
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, counts_summary, inset_rect,
};
use crate::tui::palette::Palette;

use super::{App, InputMode};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let palette = Palette::for_theme(self.theme.current());
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(palette.base)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0], &palette);
        self.draw_tabs(f, chunks[1], &palette);
        self.draw_search(f, chunks[2], &palette);
        self.draw_tasks(f, chunks[3], &palette);
        self.draw_footer(f, chunks[4], &palette);

        match self.input_mode {
            InputMode::Add | InputMode::Edit => self.draw_input_overlay(f, size, &palette),
            InputMode::Help => self.draw_help_overlay(f, size, &palette),
            InputMode::ConfirmClear => self.draw_confirm_overlay(f, size, &palette),
            InputMode::Normal | InputMode::Search => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(area);

        let current = self
            .tabs
            .get(self.tab_index)
            .map(|tab| tab.description)
            .unwrap_or("Tasks");
        let mut left_spans = vec![
            Span::styled(
                format!(" taskpad v{} ☑ ", APP_VERSION),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("— {}", current)),
            Span::raw("  "),
            Span::styled(
                format!("💾 {}", self.config.data_dir().display()),
                Style::default().fg(palette.muted),
            ),
        ];

        if !self.view.search().is_empty() {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(
                format!("🔍 '{}'", self.view.search()),
                Style::default()
                    .fg(palette.search)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let left_line = Line::from(left_spans);
        f.render_widget(
            Paragraph::new(left_line).style(Style::default().bg(palette.base)),
            cols[0],
        );

        let theme_label = match self.theme.current() {
            crate::theme::Theme::Light => "☀️ light",
            crate::theme::Theme::Dark => "🌙 dark",
        };
        let right_line = Line::from(vec![Span::styled(
            format!("{} (press t) ", theme_label),
            Style::default().fg(palette.muted),
        )]);
        let right_para = Paragraph::new(right_line)
            .alignment(ratatui::layout::Alignment::Right)
            .style(Style::default().bg(palette.base));
        f.render_widget(right_para, cols[1]);
    }

    fn draw_tabs(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let titles: Vec<Line> = self.tabs.iter().map(|tab| Line::from(tab.label)).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab_index)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Filters", palette))
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.panel)),
            )
            .style(Style::default().fg(palette.text))
            .highlight_style(
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selection)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    fn draw_search(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let active = self.input_mode == InputMode::Search;
        let border_style = if active {
            Style::default()
                .fg(palette.search)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🔎 Search", palette))
            .border_style(border_style)
            .style(Style::default().bg(palette.panel));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let content = if self.view.search().is_empty() && !active {
            Span::styled("Search task…  (press /)", Style::default().fg(palette.muted))
        } else {
            Span::styled(
                self.view.search().to_string(),
                Style::default().fg(palette.text),
            )
        };
        f.render_widget(
            Paragraph::new(Line::from(content)).style(Style::default().bg(palette.panel)),
            inner,
        );

        if active {
            let col = self
                .input
                .cursor_col()
                .min(inner.width.saturating_sub(1) as usize) as u16;
            f.set_cursor(inner.x + col, inner.y);
        }
    }

    fn draw_tasks(&mut self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        if self.visible.is_empty() {
            let lines = self.empty_state_lines(palette);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.panel));
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);

            if inner.width == 0 || inner.height == 0 {
                return;
            }

            let width = inner.width.min(80).max(1);
            let mut height = (lines.len() as u16).saturating_add(2).min(inner.height);
            if height < 3 && inner.height >= 3 {
                height = 3;
            }
            let content_area = centered_rect(width, height, inner);
            f.render_widget(Clear, content_area);

            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().bg(palette.panel));
            f.render_widget(paragraph, content_area);
            return;
        }

        let header = Row::new(vec![
            Cell::from("#️⃣ ID"),
            Cell::from("✔"),
            Cell::from("📝 Task"),
        ])
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .visible
            .iter()
            .map(|task| {
                let mark = if task.completed { "[x]" } else { "[ ]" };
                let text_style = if task.completed {
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(palette.text)
                };
                let mark_style = if task.completed {
                    Style::default().fg(palette.done)
                } else {
                    Style::default().fg(palette.muted)
                };
                Row::new(vec![
                    Cell::from(task.id.to_string()).style(Style::default().fg(palette.muted)),
                    Cell::from(mark).style(mark_style),
                    Cell::from(task.text.clone()).style(text_style),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.panel)),
            )
            .highlight_style(
                Style::default()
                    .bg(palette.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn empty_state_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        let heading = if self.store.tasks().is_empty() {
            "🎉 No tasks yet. Add your first task!"
        } else {
            "No tasks match this view"
        };

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::from(vec![Span::styled(
            heading,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::default());

        let mut hints = vec!["Press 'a' to add a task."];
        if !self.view.search().is_empty() {
            hints.push("Press '/' then Esc to restore the previous search.");
        }
        if self.store.tasks().is_empty() && self.first_run {
            hints.push("Tasks and the theme are saved between sessions.");
        }

        for hint in hints {
            lines.push(Line::from(vec![Span::styled(
                hint,
                Style::default().fg(palette.muted),
            )]));
        }

        if self.first_run {
            lines.push(Line::default());
            lines.push(Line::from(vec![Span::styled(
                format!(
                    "Your taskpad data lives in `{}` (adjust with `--data-dir` or `TASKPAD_DATA_DIR`).",
                    self.config.data_dir().display()
                ),
                Style::default().fg(palette.muted),
            )]));
        }

        lines
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            Line::from(vec![Span::styled(
                "Ready",
                Style::default().fg(palette.muted),
            )])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let keys = match self.input_mode {
            InputMode::Normal => {
                "a add ✚ | e edit ✏️ | enter/space toggle ✅ | x delete 🗑️ | / search 🔍 | C clear all | t theme 🌓 | h help ❔ | q quit"
            }
            InputMode::Add => "Enter to add ✍️ • Esc to cancel",
            InputMode::Edit => "Enter to save ✏️ • Esc to cancel",
            InputMode::Search => "Type to narrow 🔍 • Enter keep • Esc restore",
            InputMode::Help => "Enter/Esc to close ❔",
            InputMode::ConfirmClear => "←/→ choose • Space toggle • Enter confirm • Esc cancel",
        };

        let help_line = Line::from(vec![
            Span::styled(
                counts_summary(&self.store.counts()),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(keys, Style::default().fg(palette.muted)),
        ]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }

    fn draw_input_overlay(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let width = min(area.width.saturating_sub(10), 70);
        let popup_area = centered_rect(width, 5, area);
        f.render_widget(Clear, popup_area);

        let title = match self.input_mode {
            InputMode::Edit => "✏️ Edit Task",
            _ => "➕ Add Task",
        };
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(popup_area);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(title, palette))
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.panel));
        f.render_widget(input_block.clone(), inner[0]);
        let input_area = input_block.inner(inner[0]);
        let paragraph = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(palette.text).bg(palette.panel));
        f.render_widget(paragraph, input_area);
        let col = self
            .input
            .cursor_col()
            .min(input_area.width.saturating_sub(1) as usize) as u16;
        f.set_cursor(input_area.x + col, input_area.y);

        let hint = Line::from(vec![Span::styled(
            "Enter saves • Esc cancels • blank text is ignored",
            Style::default().fg(palette.muted),
        )]);
        f.render_widget(Clear, inner[1]);
        f.render_widget(
            Paragraph::new(hint)
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().bg(palette.panel)),
            inner[1],
        );
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 90);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference", palette))
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.panel));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(combo, Style::default().fg(palette.accent)),
                    Span::raw("  "),
                    Span::styled(desc, Style::default().fg(palette.text)),
                ])
            })
            .collect();

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let content = inset_rect(inner, 1);
        f.render_widget(Clear, inner);
        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(palette.panel)),
            content,
        );
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let width = min(area.width.saturating_sub(20), 60).max(40);
        let popup_area = centered_rect(width, 8, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🗑 Clear All Tasks", palette))
            .border_style(Style::default().fg(palette.danger))
            .style(Style::default().bg(palette.panel));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let total = self.store.counts().total;
        let mut lines = Vec::new();
        lines.push(Line::from(vec![Span::styled(
            "This action cannot be undone.",
            Style::default().fg(palette.danger),
        )]));
        lines.push(Line::from(vec![Span::styled(
            format!(
                "Remove all {} task{}?",
                total,
                if total == 1 { "" } else { "s" }
            ),
            Style::default().fg(palette.text),
        )]));
        lines.push(Line::default());

        let yes_style = if self.confirm_choice == super::ConfirmChoice::Yes {
            Style::default()
                .fg(palette.panel)
                .bg(palette.danger)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.danger)
        };
        let no_style = if self.confirm_choice == super::ConfirmChoice::No {
            Style::default()
                .fg(palette.panel)
                .bg(palette.muted)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        lines.push(Line::from(vec![
            Span::styled("  Yes  ", yes_style),
            Span::raw("    "),
            Span::styled("  No  ", no_style),
        ]));

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().bg(palette.panel)),
            inset_rect(inner, 1),
        );
    }
}
