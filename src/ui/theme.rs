use crate::config::ThemeMode;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const EDIT_ACTION: Color = Color::Rgb(0x64, 0xdd, 0x17);

/// Colours resolved for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub done_text: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0xe0, 0xe7, 0xff),
    done_text: Color::Rgb(0x9c, 0xa3, 0xaf),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    done_text: Color::Rgb(0x6b, 0x72, 0x80),
};

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}
