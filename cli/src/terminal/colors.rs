use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const ONLINE: Color = Color::Yellow;
pub const OFFLINE: Color = Color::Red;
pub const ALERT: Color = Color::BrightRed;
pub const MENU: Color = Color::Green;

pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const IPV4_PREFIX: Color = Color::Blue;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
pub const IPV6_PREFIX: Color = Color::Magenta;
pub const MAC_ADDR: Color = Color::BrightGreen;
