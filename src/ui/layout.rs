use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub counter: Rect,
    pub tabs: Rect,
    pub list: Rect,
    pub notice: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        input: chunks[1],
        counter: chunks[2],
        tabs: chunks[3],
        list: chunks[4],
        notice: chunks[5],
        footer: chunks[6],
    }
}

/// Rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
