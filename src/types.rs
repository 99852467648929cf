use serde::{Deserialize, Serialize};

/// Which set of keys is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Alphabetic keys.
    #[default]
    Letters,
    /// Digits and common punctuation.
    Numbers,
    /// Special characters.
    Special,
}

/// An sRGBA colour as handed to the widget toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 235, 4);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The four colour states every key widget styles itself with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyColors {
    pub normal: Color,
    pub highlighted: Color,
    pub pressed: Color,
    pub selected: Color,
}

impl Default for KeyColors {
    fn default() -> Self {
        Self {
            normal: Color::BLACK,
            highlighted: Color::YELLOW,
            pressed: Color::RED,
            selected: Color::BLUE,
        }
    }
}

/// A text selection in the output field.
///
/// Indices count characters (code points). The selected range is the
/// half-open interval `[start, end)`; an empty selection is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// The end that stays put while the selection is extended.
    pub anchor: usize,
    /// The end that moves.
    pub focus: usize,
}

impl Selection {
    /// A collapsed selection at `pos`.
    pub const fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            focus: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.focus)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }
}

/// Which sprite the shift button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftSprite {
    Default,
    /// Caps lock indicator.
    Active,
}

/// How the shift button should currently look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftAppearance {
    pub color: Color,
    pub sprite: ShiftSprite,
}
