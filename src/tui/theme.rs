// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::{
    Rgb, SEAT_FILL_FEMALE, SEAT_FILL_MALE, SEAT_FILL_NEUTRAL, SEAT_STROKE, TABLE_FILL,
    TABLE_STROKE, TEXT_MAIN, TEXT_SECONDARY,
};

/// Terminal color mapping for scene colors, with an optional palette override
/// from `PLACECARD_PALETTE`.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    /// Maps a scene color to a terminal color, substituting the overridden
    /// slot when the color is one of the eight scene constants.
    pub(crate) fn resolve(&self, rgb: Rgb) -> Color {
        match (&self.palette, PaletteSlot::of(rgb)) {
            (Some(palette), Some(slot)) => palette.slot(slot),
            _ => Color::Rgb(rgb.r, rgb.g, rgb.b),
        }
    }

    pub(crate) fn caption_style(&self) -> Style {
        Style::default().fg(self.resolve(TEXT_SECONDARY))
    }

    pub(crate) fn text_style(&self) -> Style {
        Style::default().fg(self.resolve(TEXT_MAIN))
    }

    pub(crate) fn tooltip_style(&self) -> Style {
        Style::default()
            .fg(self.resolve(TEXT_MAIN))
            .add_modifier(Modifier::BOLD)
    }
}

/// The eight scene color slots, in `PLACECARD_PALETTE` CSV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum PaletteSlot {
    TableFill,
    TableStroke,
    SeatMale,
    SeatFemale,
    SeatNeutral,
    SeatStroke,
    TextMain,
    TextSecondary,
}

impl PaletteSlot {
    const COUNT: usize = 8;

    fn of(rgb: Rgb) -> Option<Self> {
        // SEAT_STROKE shares TEXT_MAIN's default value and the terminal canvas
        // never strokes markers, so the shared value resolves via the text slot.
        debug_assert_eq!(SEAT_STROKE, TEXT_MAIN);
        if rgb == TABLE_FILL {
            Some(Self::TableFill)
        } else if rgb == TABLE_STROKE {
            Some(Self::TableStroke)
        } else if rgb == SEAT_FILL_MALE {
            Some(Self::SeatMale)
        } else if rgb == SEAT_FILL_FEMALE {
            Some(Self::SeatFemale)
        } else if rgb == SEAT_FILL_NEUTRAL {
            Some(Self::SeatNeutral)
        } else if rgb == TEXT_MAIN {
            Some(Self::TextMain)
        } else if rgb == TEXT_SECONDARY {
            Some(Self::TextSecondary)
        } else {
            None
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::TableFill => 0,
            Self::TableStroke => 1,
            Self::SeatMale => 2,
            Self::SeatFemale => 3,
            Self::SeatNeutral => 4,
            Self::SeatStroke => 5,
            Self::TextMain => 6,
            Self::TextSecondary => 7,
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    slots: [Color; PaletteSlot::COUNT],
}

impl TuiPalette {
    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != PaletteSlot::COUNT {
            return Err(format!(
                "expected {} comma-separated colors (table_fill,table_stroke,seat_male,seat_female,seat_neutral,seat_stroke,text_main,text_secondary), got {}",
                PaletteSlot::COUNT,
                parts.len()
            ));
        }

        let mut slots = [Color::Reset; PaletteSlot::COUNT];
        for (idx, part) in parts.iter().enumerate() {
            slots[idx] = parse_palette_color(part)?;
        }

        Ok(Self { slots })
    }

    fn slot(&self, slot: PaletteSlot) -> Color {
        self.slots[slot.idx()]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let value = match env::var("PLACECARD_PALETTE") {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: "PLACECARD_PALETTE".to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: "PLACECARD_PALETTE".to_owned(),
        value: format!("{trimmed} ({error})"),
    })?;

    Ok(Some(parsed))
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
