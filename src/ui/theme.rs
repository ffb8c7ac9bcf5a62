//! Traditional Japanese color palette shared by the screens

use ratatui::style::Color;

/// 黒 (kuro)
pub const KURO: Color = Color::Rgb(0x1C, 0x19, 0x17);
/// 白 (shiro)
pub const SHIRO: Color = Color::Rgb(0xFC, 0xFA, 0xF2);
/// 青 (ao)
pub const AO: Color = Color::Rgb(0x11, 0x32, 0x85);
/// 赤 (aka)
pub const AKA: Color = Color::Rgb(0xB7, 0x28, 0x2E);

/// Highlight for the focused field
pub const ACTIVE: Color = Color::Cyan;
/// De-emphasized chrome
pub const DIM: Color = Color::DarkGray;

/// Swatches shown on the landing screen, with their katakana names
pub const PALETTE: &[(&str, &str, Color)] = &[
    ("Kuro (黒)", "#1C1917", KURO),
    ("Shiro (白)", "#FCFAF2", SHIRO),
    ("Ao (青)", "#113285", AO),
    ("Aka (赤)", "#B7282E", AKA),
];
