//! Terminal color theme
//!
//! All console code takes its colors from here instead of hardcoding
//! `Color::Rgb` values.

use crossterm::style::Color;
use wd_core::{Backdrop, FurColor};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Color theme for the console
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Text drawn over backdrops
    pub text: Color,
    /// Banner text (stage clear, game over)
    pub banner: Color,
    /// Background behind the stage clear banner
    pub clear_bg: Color,
    /// Background behind the game over banner
    pub danger_bg: Color,

    pub sky: Color,
    pub night_sky: Color,
    pub ocean: Color,
    pub dirt: Color,
    pub concrete: Color,
    pub grass: Color,
    pub sand: Color,

    pub fur_black: Color,
    pub fur_brown: Color,
    pub fur_gold: Color,
    pub fur_ash: Color,
    pub fur_white: Color,
}

impl Theme {
    /// The 24-bit palette the game was designed with
    pub const fn classic() -> Self {
        Self {
            text: rgb(255, 255, 255),
            banner: rgb(255, 255, 0),
            clear_bg: rgb(29, 162, 216),
            danger_bg: rgb(255, 0, 0),

            sky: rgb(175, 223, 228),
            night_sky: rgb(46, 68, 130),
            ocean: rgb(29, 162, 216),
            dirt: rgb(107, 84, 40),
            concrete: rgb(128, 128, 118),
            grass: rgb(169, 209, 89),
            sand: rgb(246, 215, 176),

            fur_black: rgb(0, 0, 0),
            fur_brown: rgb(139, 69, 19),
            fur_gold: rgb(255, 255, 0),
            fur_ash: rgb(113, 115, 117),
            fur_white: rgb(255, 255, 255),
        }
    }

    pub const fn backdrop(&self, backdrop: Backdrop) -> Color {
        match backdrop {
            Backdrop::Sky => self.sky,
            Backdrop::NightSky => self.night_sky,
            Backdrop::Ocean => self.ocean,
            Backdrop::Dirt => self.dirt,
            Backdrop::Concrete => self.concrete,
            Backdrop::Grass => self.grass,
            Backdrop::Sand => self.sand,
        }
    }

    pub const fn fur(&self, fur: FurColor) -> Color {
        match fur {
            FurColor::Black => self.fur_black,
            FurColor::Brown => self.fur_brown,
            FurColor::Gold => self.fur_gold,
            FurColor::Ash => self.fur_ash,
            FurColor::White => self.fur_white,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
