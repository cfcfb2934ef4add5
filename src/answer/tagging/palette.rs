//! Tag to colour palettes
//!
//! Thought and answer content share one tagging ruleset; only the colours differ. The answer
//! palette colours nine groups and paints every other tag with its default colour.

use crate::answer::ast::SemanticTag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-bit colour, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("colour '{s}' must start with '#'"))?;
        if digits.len() != 6 {
            return Err(format!("colour '{s}' must have six hex digits"));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|e| format!("colour '{s}': {e}"))?;
        Ok(Rgb::from_hex(value))
    }
}

/// Which palette a content part is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteChoice {
    Thought,
    #[default]
    Answer,
}

/// Colours for tagged callouts and markdown headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(SemanticTag, Rgb)>,
    default: Rgb,
    heading: Rgb,
}

impl Palette {
    pub fn thought() -> Self {
        Palette {
            entries: vec![
                (SemanticTag::Summary, Rgb::from_hex(0x6c63ff)),
                (SemanticTag::Observation, Rgb::from_hex(0x00bfa6)),
                (SemanticTag::Issue, Rgb::from_hex(0xff6b6b)),
                (SemanticTag::Cause, Rgb::from_hex(0xffb347)),
                (SemanticTag::Impact, Rgb::from_hex(0xab47bc)),
                (SemanticTag::Recommendation, Rgb::from_hex(0x4caf50)),
                (SemanticTag::Analysis, Rgb::from_hex(0x42a5f5)),
                (SemanticTag::Conclusion, Rgb::from_hex(0x5c6bc0)),
                (SemanticTag::Note, Rgb::from_hex(0xffa726)),
                (SemanticTag::Question, Rgb::from_hex(0x26c6da)),
                (SemanticTag::Metric, Rgb::from_hex(0x789262)),
                (SemanticTag::Goal, Rgb::from_hex(0x66bb6a)),
                (SemanticTag::Increase, Rgb::from_hex(0x81c784)),
                (SemanticTag::Decrease, Rgb::from_hex(0xe57373)),
                (SemanticTag::Fluctuation, Rgb::from_hex(0xba68c8)),
            ],
            default: Rgb::from_hex(0x757575),
            heading: Rgb::from_hex(0x0e4b7f),
        }
    }

    pub fn answer() -> Self {
        Palette {
            entries: vec![
                (SemanticTag::Summary, Rgb::from_hex(0x0e4b7f)),
                (SemanticTag::Observation, Rgb::from_hex(0x007bff)),
                (SemanticTag::Issue, Rgb::from_hex(0xe53935)),
                (SemanticTag::Cause, Rgb::from_hex(0xff9800)),
                (SemanticTag::Impact, Rgb::from_hex(0x9c27b0)),
                (SemanticTag::Recommendation, Rgb::from_hex(0x2e7d32)),
                (SemanticTag::Analysis, Rgb::from_hex(0x6a1b9a)),
                (SemanticTag::Conclusion, Rgb::from_hex(0xd81b60)),
                (SemanticTag::Note, Rgb::from_hex(0xf9a825)),
            ],
            default: Rgb::from_hex(0x37474f),
            heading: Rgb::from_hex(0x0e4b7f),
        }
    }

    pub fn from_choice(choice: PaletteChoice) -> Self {
        match choice {
            PaletteChoice::Thought => Palette::thought(),
            PaletteChoice::Answer => Palette::answer(),
        }
    }

    /// Colour for a tag, the palette default when the tag has no entry
    pub fn color(&self, tag: SemanticTag) -> Rgb {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == tag)
            .map(|(_, rgb)| *rgb)
            .unwrap_or(self.default)
    }

    /// Colour for markdown headings
    pub fn heading(&self) -> Rgb {
        self.heading
    }
}
