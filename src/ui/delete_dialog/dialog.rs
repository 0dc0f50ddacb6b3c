use crate::ui::delete_dialog::state::DeleteDialogState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{Palette, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 48;
const MAX_PREVIEW_CHARS: usize = 40;

pub fn render_delete_dialog(frame: &mut Frame, area: Rect, state: &DeleteDialogState, palette: Palette) {
    let DeleteDialogState::Pending { text, .. } = state else {
        return;
    };

    let text_style = Style::default().fg(palette.text);
    let lines = vec![
        Line::from(Span::styled("Do you really want to delete this item?", text_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", preview(text)),
            text_style.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)),
            Span::styled(": Yes   ", text_style),
            Span::styled("n", Style::default().fg(palette.muted).add_modifier(Modifier::BOLD)),
            Span::styled(": No", text_style),
        ]),
    ];

    let height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled("Please confirm", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

fn preview(text: &str) -> String {
    if text.chars().count() <= MAX_PREVIEW_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_PREVIEW_CHARS - 1).collect();
    short.push('…');
    short
}
