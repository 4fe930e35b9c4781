use ratatui::style::Color;

pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub mauve: Color,
}

/// Dark palette matching the portal's default (dark) site theme.
pub const PORTAL_DARK: Palette = Palette {
    base: Color::Rgb(18, 18, 28),
    crust: Color::Rgb(10, 10, 16),
    text: Color::Rgb(230, 230, 240),
    subtext0: Color::Rgb(160, 160, 180),
    surface0: Color::Rgb(36, 36, 52),
    surface1: Color::Rgb(48, 48, 68),
    surface2: Color::Rgb(72, 72, 96),
    overlay0: Color::Rgb(110, 110, 135),
    blue: Color::Rgb(102, 126, 234),
    green: Color::Rgb(72, 199, 142),
    yellow: Color::Rgb(255, 209, 102),
    peach: Color::Rgb(250, 160, 110),
    red: Color::Rgb(239, 83, 80),
    mauve: Color::Rgb(118, 75, 162),
};
