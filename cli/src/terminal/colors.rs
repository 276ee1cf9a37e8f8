use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0, g: 215, b: 135 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const REACHABLE: Color = Color::Green;
pub const UNREACHABLE: Color = Color::Red;
