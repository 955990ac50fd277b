//! The Neon Protocol color palette.

use crate::error::{BrandError, BrandResult};
use anon_brand_canvas2d::CanvasColor;

/// Named brand colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    VoidBlack,
    TerminalDark,
    MatrixGray,
    SyntaxSlate,
    ElectricCyan,
    NeonMagenta,
    TerminalGreen,
    PulseBlue,
    HotCoral,
    PureWhite,
    GhostWhite,
}

impl Palette {
    pub const ALL: [Palette; 11] = [
        Palette::VoidBlack,
        Palette::TerminalDark,
        Palette::MatrixGray,
        Palette::SyntaxSlate,
        Palette::ElectricCyan,
        Palette::NeonMagenta,
        Palette::TerminalGreen,
        Palette::PulseBlue,
        Palette::HotCoral,
        Palette::PureWhite,
        Palette::GhostWhite,
    ];

    /// Symbolic snake_case name, e.g. `electric_cyan`.
    pub const fn name(self) -> &'static str {
        match self {
            Palette::VoidBlack => "void_black",
            Palette::TerminalDark => "terminal_dark",
            Palette::MatrixGray => "matrix_gray",
            Palette::SyntaxSlate => "syntax_slate",
            Palette::ElectricCyan => "electric_cyan",
            Palette::NeonMagenta => "neon_magenta",
            Palette::TerminalGreen => "terminal_green",
            Palette::PulseBlue => "pulse_blue",
            Palette::HotCoral => "hot_coral",
            Palette::PureWhite => "pure_white",
            Palette::GhostWhite => "ghost_white",
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Palette::VoidBlack => "#0a0a0f",
            Palette::TerminalDark => "#12121a",
            Palette::MatrixGray => "#1e1e2e",
            Palette::SyntaxSlate => "#6b7280",
            Palette::ElectricCyan => "#00ffff",
            Palette::NeonMagenta => "#ff00ff",
            Palette::TerminalGreen => "#00ff41",
            Palette::PulseBlue => "#0080ff",
            Palette::HotCoral => "#ff3366",
            Palette::PureWhite => "#ffffff",
            Palette::GhostWhite => "#e5e5e5",
        }
    }

    pub fn from_name(name: &str) -> BrandResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| BrandError::UnknownPaletteName(name.to_string()))
    }

    /// Opaque canvas color.
    pub const fn rgb(self) -> CanvasColor {
        let (r, g, b) = PALETTE_RGB[self as usize];
        CanvasColor::from_rgb8(r, g, b)
    }

    /// Canvas color with the given alpha.
    pub const fn with_alpha(self, alpha: u8) -> CanvasColor {
        self.rgb().with_alpha(alpha)
    }

    pub const fn rgb_tuple(self) -> (u8, u8, u8) {
        PALETTE_RGB[self as usize]
    }
}

// Parsed at compile time; indexed by discriminant.
const PALETTE_RGB: [(u8, u8, u8); 11] = {
    let mut table = [(0u8, 0u8, 0u8); 11];
    let mut i = 0;
    while i < Palette::ALL.len() {
        table[i] = match parse_hex6(Palette::ALL[i].hex()) {
            Some(rgb) => rgb,
            None => panic!("palette entry is not a six digit hex color"),
        };
        i += 1;
    }
    table
};

/// Convert a `#rrggbb` (or `rrggbb`) string into its RGB components.
pub fn hex_to_rgb(hex: &str) -> BrandResult<(u8, u8, u8)> {
    parse_hex6(hex).ok_or_else(|| BrandError::InvalidHexColor(hex.to_string()))
}

const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

const fn parse_hex6(hex: &str) -> Option<(u8, u8, u8)> {
    let bytes = hex.as_bytes();
    let start = if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else {
        0
    };
    if bytes.len() - start != 6 {
        return None;
    }

    let mut out = [0u8; 3];
    let mut i = 0;
    while i < 3 {
        let hi = match hex_digit(bytes[start + 2 * i]) {
            Some(v) => v,
            None => return None,
        };
        let lo = match hex_digit(bytes[start + 2 * i + 1]) {
            Some(v) => v,
            None => return None,
        };
        out[i] = hi * 16 + lo;
        i += 1;
    }
    Some((out[0], out[1], out[2]))
}
