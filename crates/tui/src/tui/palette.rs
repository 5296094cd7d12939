//! Render palettes for the light and dark modes of the task list.

use ratatui::style::Color;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) base: Color,
    pub(crate) panel: Color,
    pub(crate) selection: Color,
    pub(crate) border: Color,
    pub(crate) text: Color,
    pub(crate) muted: Color,
    pub(crate) accent: Color,
    pub(crate) done: Color,
    pub(crate) search: Color,
    pub(crate) danger: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Color::Rgb(18, 18, 18),
                panel: Color::Rgb(26, 27, 30),
                selection: Color::Rgb(42, 42, 42),
                border: Color::Rgb(75, 85, 99),
                text: Color::Rgb(235, 235, 235),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(74, 222, 128),
                done: Color::Rgb(74, 222, 128),
                search: Color::Rgb(250, 204, 21),
                danger: Color::Rgb(248, 113, 113),
            },
            Theme::Light => Self {
                base: Color::Rgb(255, 255, 255),
                panel: Color::Rgb(249, 250, 251),
                selection: Color::Rgb(229, 231, 235),
                border: Color::Rgb(156, 163, 175),
                text: Color::Rgb(17, 17, 17),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(55, 65, 81),
                done: Color::Rgb(22, 130, 60),
                search: Color::Rgb(161, 98, 7),
                danger: Color::Rgb(220, 38, 38),
            },
        }
    }
}
