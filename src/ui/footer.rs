use crate::ui::app::Focus;
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISMISS_HINT: &str = " │ Ctrl+O: OK";

pub struct Footer {
    hints: &'static str,
    /// Appends the dismiss hint while a notice is shown.
    notice_visible: bool,
}

impl Footer {
    pub fn new(focus: Focus, dialog_open: bool, notice_visible: bool) -> Self {
        Self {
            hints: hints_for(focus, dialog_open),
            notice_visible: notice_visible && !dialog_open,
        }
    }

    pub fn widget(&self, area: Rect, palette: Palette) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Pad by display width, not byte count
        let dismiss = if self.notice_visible { DISMISS_HINT } else { "" };
        let hints_width = self.hints.width() + dismiss.width();
        let version_width = version.width();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(dismiss, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

fn hints_for(focus: Focus, dialog_open: bool) -> &'static str {
    if dialog_open {
        return " y/Enter: Delete │ n/Esc: Keep";
    }
    match focus {
        Focus::Input => " Enter: Add │ ↓: List │ Tab: Filter │ Ctrl+T: Theme │ Esc/Ctrl+Q: Quit",
        Focus::List => {
            " Space: Done │ e: Edit │ d: Delete │ c: Copy │ 1-3/Tab: Filter │ i: New │ Ctrl+T: Theme │ Ctrl+Q: Quit"
        }
        Focus::Editing(_) => " Enter: Save │ Esc: Cancel",
    }
}
