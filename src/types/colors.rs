use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text and block colors, including the `*_background` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl Color {
    const ALL: [Color; 19] = [
        Color::Default,
        Color::Gray,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::GrayBackground,
        Color::BrownBackground,
        Color::RedBackground,
        Color::OrangeBackground,
        Color::YellowBackground,
        Color::GreenBackground,
        Color::BlueBackground,
        Color::PurpleBackground,
        Color::PinkBackground,
    ];

    /// Wire name of the color
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    /// All accepted wire names, in declaration order.
    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(Color::as_str).collect()
    }

    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidColor {
                value: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Colors accepted for select and multi-select options.
///
/// Options only take the foreground palette; background colors are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectColor {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl SelectColor {
    const ALL: [SelectColor; 10] = [
        SelectColor::Default,
        SelectColor::Gray,
        SelectColor::Brown,
        SelectColor::Orange,
        SelectColor::Yellow,
        SelectColor::Green,
        SelectColor::Blue,
        SelectColor::Purple,
        SelectColor::Pink,
        SelectColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectColor::Default => "default",
            SelectColor::Gray => "gray",
            SelectColor::Brown => "brown",
            SelectColor::Orange => "orange",
            SelectColor::Yellow => "yellow",
            SelectColor::Green => "green",
            SelectColor::Blue => "blue",
            SelectColor::Purple => "purple",
            SelectColor::Pink => "pink",
            SelectColor::Red => "red",
        }
    }

    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(SelectColor::as_str).collect()
    }
}

impl std::str::FromStr for SelectColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidColor {
                value: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for SelectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
