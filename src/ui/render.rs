use crate::todo::FilterMode;
use crate::ui::app::{App, Focus};
use crate::ui::delete_dialog::render_delete_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notice::{NoticeKind, NoticeState};
use crate::ui::theme::{palette, Palette, ACCENT, EDIT_ACTION, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let colors = palette(app.theme());
    let regions = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        area,
    );

    let header = Header::new(app.theme(), app.counts());
    frame.render_widget(header.widget(colors), regions.header);

    draw_input(frame, app, regions.input, regions.counter, colors);
    draw_tabs(frame, app, regions.tabs, colors);
    draw_list(frame, app, regions.list, colors);
    draw_notice(frame, app.notice(), regions.notice);

    let footer = Footer::new(
        app.focus(),
        app.delete_dialog().is_visible(),
        app.notice().is_visible(),
    );
    frame.render_widget(footer.widget(regions.footer, colors), regions.footer);

    render_delete_dialog(frame, regions.list, app.delete_dialog(), colors);
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect, counter: Rect, colors: Palette) {
    let (title, input, active) = match app.focus() {
        Focus::Editing(_) => ("Edit item", app.edit_input(), true),
        Focus::Input => ("New item", app.new_item_input(), true),
        Focus::List => ("New item", app.new_item_input(), false),
    };

    let border = if active { ACCENT } else { colors.border };
    let inner_width = usize::from(area.width.saturating_sub(2));
    let (shown, column) = input.scrolled(inner_width);
    let content = if input.is_empty() && matches!(app.focus(), Focus::Input | Focus::List) {
        Line::from(Span::styled(
            "What do you plan to do?",
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(shown.to_string(), Style::default().fg(colors.text)))
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(border)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(content).block(block), area);

    frame.render_widget(
        Paragraph::new(format!("{} chars ", input.char_count()))
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Right),
        counter,
    );

    if active && inner_width > 0 && area.height >= 3 {
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        frame.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect, colors: Palette) {
    let counts = app.counts();
    let titles: Vec<Line> = FilterMode::TABS
        .iter()
        .map(|mode| Line::from(format!(" {} ({}) ", mode.title(), counts.for_mode(*mode))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.filter().index())
        .style(Style::default().fg(colors.muted))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    frame.render_widget(tabs, area);
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect, colors: Palette) {
    let editing = match app.focus() {
        Focus::Editing(id) => Some(id),
        _ => None,
    };
    let visible = app.visible_items();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if visible.is_empty() {
        let message = match app.filter() {
            FilterMode::All => "Nothing to do yet.",
            FilterMode::Pending => "All done!",
            FilterMode::Done => "Nothing completed yet.",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(colors.muted))).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let (check, check_style) = if item.is_done() {
                ("[x] ", Style::default().fg(STATUS_OK))
            } else {
                ("[ ] ", Style::default().fg(colors.muted))
            };
            let text_style = if item.is_done() {
                Style::default()
                    .fg(colors.done_text)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };
            let mut spans = vec![
                Span::styled(check, check_style),
                Span::styled(item.text().to_string(), text_style),
            ];
            if editing == Some(item.id()) {
                spans.push(Span::styled("  ✎ editing", Style::default().fg(EDIT_ACTION)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors.highlight))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if app.focus() != Focus::Input {
        state.select(app.selected_index());
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_notice(frame: &mut Frame<'_>, notice: &NoticeState, area: Rect) {
    let NoticeState::Visible { message, kind, .. } = notice else {
        return;
    };
    let color = match kind {
        NoticeKind::Info => STATUS_OK,
        NoticeKind::Error => STATUS_ERROR,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {message} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        area,
    );
}
