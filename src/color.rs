use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// Garment colors offered in the dropdown.
///
/// `Blue` is the base image's own color, so it never needs a recolor pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShirtColor {
    #[default]
    Blue,
    Maroon,
    Lightblue,
    Purple,
    Green,
    Black,
    White,
    Orange,
    Red,
    Beige,
}

impl ShirtColor {
    /// Dropdown order.
    pub const ALL: [ShirtColor; 10] = [
        ShirtColor::Blue,
        ShirtColor::Maroon,
        ShirtColor::Lightblue,
        ShirtColor::Purple,
        ShirtColor::Green,
        ShirtColor::Black,
        ShirtColor::White,
        ShirtColor::Orange,
        ShirtColor::Red,
        ShirtColor::Beige,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ShirtColor::Blue => "blue",
            ShirtColor::Maroon => "maroon",
            ShirtColor::Lightblue => "lightblue",
            ShirtColor::Purple => "purple",
            ShirtColor::Green => "green",
            ShirtColor::Black => "black",
            ShirtColor::White => "white",
            ShirtColor::Orange => "orange",
            ShirtColor::Red => "red",
            ShirtColor::Beige => "beige",
        }
    }

    /// Title-cased token, e.g. `"Lightblue"`.
    pub fn label(self) -> String {
        let token = self.token();
        let mut chars = token.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn is_default(self) -> bool {
        self == ShirtColor::default()
    }

    /// Overlay text color that stays readable on this garment.
    pub fn text_color(self) -> TextColor {
        match self {
            ShirtColor::Black | ShirtColor::Maroon => TextColor::White,
            _ => TextColor::Black,
        }
    }
}

impl fmt::Display for ShirtColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ShirtColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShirtColor::ALL
            .into_iter()
            .find(|color| color.token() == s)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn token(self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
