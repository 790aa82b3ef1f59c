use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SECONDARY: Color = Color::Green;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SLOT: Color = Color::BrightYellow;
pub const REGISTRATION: Color = Color::BrightWhite;
pub const FAILURE: Color = Color::Red;
