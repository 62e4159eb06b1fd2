use crate::types::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationContent {
    pub expression: String,
}

/// The content variant of a rich text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    Text { text: TextContent },
    /// Mentions of users, pages, databases and dates, kept as received.
    Mention { mention: Value },
    Equation { equation: EquationContent },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Rich text item with formatting annotations.
///
/// Items received from the API carry `plain_text` and `annotations`; items
/// built locally leave them out and serialize to the minimal
/// `{"type": "text", "text": {"content": ...}}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub content: RichTextContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RichText {
    /// Unformatted text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Text {
                text: TextContent {
                    content: text.into(),
                    link: None,
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// Text linking to `url`.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Text {
                text: TextContent {
                    content: text.into(),
                    link: Some(Link { url: url.into() }),
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// Inline LaTeX expression.
    pub fn equation(expression: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Equation {
                equation: EquationContent {
                    expression: expression.into(),
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// The API-provided `plain_text`, falling back to the local content.
    pub fn text(&self) -> &str {
        if let Some(plain_text) = &self.plain_text {
            return plain_text;
        }
        match &self.content {
            RichTextContent::Text { text } => &text.content,
            RichTextContent::Equation { equation } => &equation.expression,
            RichTextContent::Mention { .. } => "",
        }
    }
}

/// Concatenated plain text of a rich text array.
pub fn plain_text(items: &[RichText]) -> String {
    items.iter().map(RichText::text).collect()
}
