//! Paragraph and text styling attached to document nodes.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Named paragraph style (`paragraphStyle.namedStyleType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    NormalText,
    Title,
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    #[serde(rename = "NAMED_STYLE_TYPE_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl NamedStyleType {
    /// Markdown heading level for this style, if it renders as a heading.
    ///
    /// `TITLE` and `SUBTITLE` map onto levels 1 and 2.
    pub fn heading_level(self) -> Option<usize> {
        match self {
            NamedStyleType::Title | NamedStyleType::Heading1 => Some(1),
            NamedStyleType::Subtitle | NamedStyleType::Heading2 => Some(2),
            NamedStyleType::Heading3 => Some(3),
            NamedStyleType::Heading4 => Some(4),
            NamedStyleType::Heading5 => Some(5),
            NamedStyleType::Heading6 => Some(6),
            NamedStyleType::NormalText | NamedStyleType::Unspecified => None,
        }
    }

    /// Heading style for a Markdown heading level. Levels past 6 are capped at `HEADING_6`.
    pub fn heading(level: usize) -> Self {
        match level {
            0 | 1 => NamedStyleType::Heading1,
            2 => NamedStyleType::Heading2,
            3 => NamedStyleType::Heading3,
            4 => NamedStyleType::Heading4,
            5 => NamedStyleType::Heading5,
            _ => NamedStyleType::Heading6,
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Start,
    Center,
    End,
    Justified,
    #[serde(rename = "ALIGNMENT_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl Alignment {
    /// Value for an HTML `align` attribute. `None` for start-aligned or unknown alignment.
    pub fn html_value(self) -> Option<&'static str> {
        match self {
            Alignment::Center => Some("center"),
            Alignment::End => Some("right"),
            Alignment::Justified => Some("justify"),
            Alignment::Start | Alignment::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl ParagraphStyle {
    pub fn named(style: NamedStyleType) -> Self {
        ParagraphStyle {
            named_style_type: Some(style),
            alignment: None,
        }
    }
}

/// Character-level styling of a text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
}

impl TextStyle {
    pub fn bold() -> Self {
        TextStyle {
            bold: true,
            ..TextStyle::default()
        }
    }

    pub fn italic() -> Self {
        TextStyle {
            italic: true,
            ..TextStyle::default()
        }
    }

    pub fn strikethrough() -> Self {
        TextStyle {
            strikethrough: true,
            ..TextStyle::default()
        }
    }

    pub fn font(family: impl Into<String>) -> Self {
        TextStyle {
            weighted_font_family: Some(WeightedFontFamily {
                font_family: family.into(),
            }),
            ..TextStyle::default()
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        TextStyle {
            link: Some(Link {
                url: Some(url.into()),
            }),
            ..TextStyle::default()
        }
    }

    pub fn font_family(&self) -> Option<&str> {
        self.weighted_font_family
            .as_ref()
            .map(|font| font.font_family.as_str())
    }

    /// Link target, ignoring links with an empty or absent URL.
    pub fn link_url(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|link| link.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn background_rgb(&self) -> Option<RgbColor> {
        self.background_color.as_ref().and_then(OptionalColor::rgb)
    }

    pub fn foreground_rgb(&self) -> Option<RgbColor> {
        self.foreground_color.as_ref().and_then(OptionalColor::rgb)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    #[serde(default)]
    pub font_family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A color that may be unset (the API's `OptionalColor` wrapper).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionalColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl OptionalColor {
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        OptionalColor {
            color: Some(Color {
                rgb_color: Some(RgbColor { red, green, blue }),
            }),
        }
    }

    pub fn rgb(&self) -> Option<RgbColor> {
        self.color.as_ref().and_then(|color| color.rgb_color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
}

/// RGB channels in `[0, 1]`. The API omits zero channels, so absent reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}
