use crate::config::ThemeMode;
use crate::todo::Counts;
use crate::ui::theme::{Palette, ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    theme: ThemeMode,
    counts: Counts,
}

impl Header {
    pub fn new(theme: ThemeMode, counts: Counts) -> Self {
        Self { theme, counts }
    }

    pub fn widget(&self, palette: Palette) -> Paragraph<'static> {
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let theme_icon = match self.theme {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "myToDo",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} pending, {} done", self.counts.pending, self.counts.done),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} {}", theme_icon, self.theme.label()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
