//! Blocks: the content of pages.
//!
//! A [`Block`] carries the fields every block shares and a [`BlockKind`], one
//! variant per block type, each holding the content object stored under the
//! type's key on the wire. Content structs are shared between variants that
//! have the same capabilities (rich text and color, a file source and a
//! caption, a URL), so capabilities are composed per variant rather than
//! inherited.

use super::common::{Empty, FileSource, Icon, Parent};
use super::rich_text::{plain_text, EquationContent, RichText};
use crate::types::{Color, NotionId, ValidatedUrl, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Languages accepted by code blocks.
pub const CODE_LANGUAGES: &[&str] = &[
    "abap",
    "arduino",
    "bash",
    "basic",
    "c",
    "clojure",
    "coffeescript",
    "c++",
    "c#",
    "css",
    "dart",
    "diff",
    "docker",
    "elixir",
    "elm",
    "erlang",
    "flow",
    "fortran",
    "f#",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "python",
    "r",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

/// Rich text, color and nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl TextBlockContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichText::plain(text)],
            color: Color::Default,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingContent {
    #[serde(flatten)]
    pub text: TextBlockContent,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(flatten)]
    pub text: TextBlockContent,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutContent {
    #[serde(flatten)]
    pub text: TextBlockContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeContent {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorContent {
    #[serde(default)]
    pub color: Color,
}

/// Image, video, file and PDF blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaContent {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

/// Bookmark, embed and link preview blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleContent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableContent {
    pub table_width: u32,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowContent {
    pub cells: Vec<Vec<RichText>>,
}

/// Column lists and columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerContent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncedFrom {
    BlockId { block_id: NotionId },
}

/// An original synced block (`synced_from` is null) or a reference to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncedContent {
    #[serde(default)]
    pub synced_from: Option<SyncedFrom>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateContent {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Block types, tagged by `type` with the content under the type's key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph {
        paragraph: TextBlockContent,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingContent,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingContent,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingContent,
    },
    BulletedListItem {
        bulleted_list_item: TextBlockContent,
    },
    NumberedListItem {
        numbered_list_item: TextBlockContent,
    },
    ToDo {
        to_do: ToDoContent,
    },
    Toggle {
        toggle: TextBlockContent,
    },
    Quote {
        quote: TextBlockContent,
    },
    Callout {
        callout: CalloutContent,
    },
    Code {
        code: CodeContent,
    },
    Equation {
        equation: EquationContent,
    },
    Divider {
        #[serde(default)]
        divider: Empty,
    },
    Breadcrumb {
        #[serde(default)]
        breadcrumb: Empty,
    },
    TableOfContents {
        #[serde(default)]
        table_of_contents: ColorContent,
    },
    Image {
        image: MediaContent,
    },
    Video {
        video: MediaContent,
    },
    File {
        file: MediaContent,
    },
    Pdf {
        pdf: MediaContent,
    },
    Bookmark {
        bookmark: LinkContent,
    },
    Embed {
        embed: LinkContent,
    },
    LinkPreview {
        link_preview: LinkContent,
    },
    ChildPage {
        child_page: TitleContent,
    },
    ChildDatabase {
        child_database: TitleContent,
    },
    LinkToPage {
        link_to_page: Parent,
    },
    Table {
        table: TableContent,
    },
    TableRow {
        table_row: TableRowContent,
    },
    ColumnList {
        #[serde(default)]
        column_list: ContainerContent,
    },
    Column {
        #[serde(default)]
        column: ContainerContent,
    },
    SyncedBlock {
        synced_block: SyncedContent,
    },
    Template {
        template: TemplateContent,
    },
    /// Block types this client does not model.
    #[serde(other)]
    Unsupported,
}

impl BlockKind {
    /// Wire name of the block type
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Heading1 { .. } => "heading_1",
            BlockKind::Heading2 { .. } => "heading_2",
            BlockKind::Heading3 { .. } => "heading_3",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::NumberedListItem { .. } => "numbered_list_item",
            BlockKind::ToDo { .. } => "to_do",
            BlockKind::Toggle { .. } => "toggle",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Callout { .. } => "callout",
            BlockKind::Code { .. } => "code",
            BlockKind::Equation { .. } => "equation",
            BlockKind::Divider { .. } => "divider",
            BlockKind::Breadcrumb { .. } => "breadcrumb",
            BlockKind::TableOfContents { .. } => "table_of_contents",
            BlockKind::Image { .. } => "image",
            BlockKind::Video { .. } => "video",
            BlockKind::File { .. } => "file",
            BlockKind::Pdf { .. } => "pdf",
            BlockKind::Bookmark { .. } => "bookmark",
            BlockKind::Embed { .. } => "embed",
            BlockKind::LinkPreview { .. } => "link_preview",
            BlockKind::ChildPage { .. } => "child_page",
            BlockKind::ChildDatabase { .. } => "child_database",
            BlockKind::LinkToPage { .. } => "link_to_page",
            BlockKind::Table { .. } => "table",
            BlockKind::TableRow { .. } => "table_row",
            BlockKind::ColumnList { .. } => "column_list",
            BlockKind::Column { .. } => "column",
            BlockKind::SyncedBlock { .. } => "synced_block",
            BlockKind::Template { .. } => "template",
            BlockKind::Unsupported => "unsupported",
        }
    }

    fn text_content(&self) -> Option<&TextBlockContent> {
        match self {
            BlockKind::Paragraph { paragraph: content }
            | BlockKind::BulletedListItem {
                bulleted_list_item: content,
            }
            | BlockKind::NumberedListItem {
                numbered_list_item: content,
            }
            | BlockKind::Toggle { toggle: content }
            | BlockKind::Quote { quote: content } => Some(content),
            BlockKind::Heading1 { heading_1: heading }
            | BlockKind::Heading2 { heading_2: heading }
            | BlockKind::Heading3 { heading_3: heading } => Some(&heading.text),
            BlockKind::ToDo { to_do } => Some(&to_do.text),
            BlockKind::Callout { callout } => Some(&callout.text),
            _ => None,
        }
    }

    fn text_content_mut(&mut self) -> Option<&mut TextBlockContent> {
        match self {
            BlockKind::Paragraph { paragraph: content }
            | BlockKind::BulletedListItem {
                bulleted_list_item: content,
            }
            | BlockKind::NumberedListItem {
                numbered_list_item: content,
            }
            | BlockKind::Toggle { toggle: content }
            | BlockKind::Quote { quote: content } => Some(content),
            BlockKind::Heading1 { heading_1: heading }
            | BlockKind::Heading2 { heading_2: heading }
            | BlockKind::Heading3 { heading_3: heading } => Some(&mut heading.text),
            BlockKind::ToDo { to_do } => Some(&mut to_do.text),
            BlockKind::Callout { callout } => Some(&mut callout.text),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            BlockKind::Table { table } => Some(&mut table.children),
            BlockKind::ColumnList { column_list: content }
            | BlockKind::Column { column: content } => Some(&mut content.children),
            BlockKind::SyncedBlock { synced_block } => Some(&mut synced_block.children),
            BlockKind::Template { template } => Some(&mut template.children),
            other => other.text_content_mut().map(|text| &mut text.children),
        }
    }

    fn caption_mut(&mut self) -> Option<&mut Vec<RichText>> {
        match self {
            BlockKind::Image { image: media }
            | BlockKind::Video { video: media }
            | BlockKind::File { file: media }
            | BlockKind::Pdf { pdf: media } => Some(&mut media.caption),
            BlockKind::Bookmark { bookmark: link } | BlockKind::Embed { embed: link } => {
                Some(&mut link.caption)
            }
            BlockKind::Code { code } => Some(&mut code.caption),
            _ => None,
        }
    }
}

/// A block, as received from the API or built locally for creation.
///
/// Locally built blocks have no `id` or timestamps; those are assigned by
/// the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NotionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_children: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub archived: bool,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: None,
            parent: None,
            created_time: None,
            last_edited_time: None,
            has_children: false,
            archived: false,
            kind,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph {
            paragraph: TextBlockContent::new(text),
        })
    }

    pub fn heading_1(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading1 {
            heading_1: heading_content(text),
        })
    }

    pub fn heading_2(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading2 {
            heading_2: heading_content(text),
        })
    }

    pub fn heading_3(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading3 {
            heading_3: heading_content(text),
        })
    }

    pub fn bulleted_list_item(text: impl Into<String>) -> Self {
        Self::new(BlockKind::BulletedListItem {
            bulleted_list_item: TextBlockContent::new(text),
        })
    }

    pub fn numbered_list_item(text: impl Into<String>) -> Self {
        Self::new(BlockKind::NumberedListItem {
            numbered_list_item: TextBlockContent::new(text),
        })
    }

    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Self::new(BlockKind::ToDo {
            to_do: ToDoContent {
                text: TextBlockContent::new(text),
                checked,
            },
        })
    }

    pub fn toggle(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Toggle {
            toggle: TextBlockContent::new(text),
        })
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Quote {
            quote: TextBlockContent::new(text),
        })
    }

    pub fn callout(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self::new(BlockKind::Callout {
            callout: CalloutContent {
                text: TextBlockContent::new(text),
                icon: Some(Icon::emoji(emoji)),
            },
        })
    }

    /// A code block; `language` must be one of [`CODE_LANGUAGES`].
    pub fn code(text: impl Into<String>, language: &str) -> Result<Self, ValidationError> {
        if !CODE_LANGUAGES.contains(&language) {
            return Err(ValidationError::InvalidLanguage(language.to_string()));
        }
        Ok(Self::new(BlockKind::Code {
            code: CodeContent {
                rich_text: vec![RichText::plain(text)],
                caption: Vec::new(),
                language: language.to_string(),
            },
        }))
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::new(BlockKind::Equation {
            equation: EquationContent {
                expression: expression.into(),
            },
        })
    }

    pub fn divider() -> Self {
        Self::new(BlockKind::Divider { divider: Empty {} })
    }

    pub fn breadcrumb() -> Self {
        Self::new(BlockKind::Breadcrumb {
            breadcrumb: Empty {},
        })
    }

    pub fn table_of_contents() -> Self {
        Self::new(BlockKind::TableOfContents {
            table_of_contents: ColorContent::default(),
        })
    }

    pub fn bookmark(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::Bookmark {
            bookmark: link(url)?,
        }))
    }

    pub fn embed(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::Embed { embed: link(url)? }))
    }

    pub fn image(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::Image {
            image: external_media(url)?,
        }))
    }

    pub fn video(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::Video {
            video: external_media(url)?,
        }))
    }

    pub fn pdf(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::Pdf {
            pdf: external_media(url)?,
        }))
    }

    pub fn file(url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(BlockKind::File {
            file: external_media(url)?,
        }))
    }

    pub fn block_type(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Rich text of text-bearing blocks, concatenated.
    pub fn plain_text(&self) -> Option<String> {
        match &self.kind {
            BlockKind::Code { code } => Some(plain_text(&code.rich_text)),
            BlockKind::Template { template } => Some(plain_text(&template.rich_text)),
            BlockKind::Equation { equation } => Some(equation.expression.clone()),
            kind => kind.text_content().map(|text| plain_text(&text.rich_text)),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match &self.kind {
            BlockKind::TableOfContents { table_of_contents } => Some(table_of_contents.color),
            kind => kind.text_content().map(|text| text.color),
        }
    }

    pub fn with_color(mut self, color: Color) -> Result<Self, ValidationError> {
        let block_type = self.block_type();
        match &mut self.kind {
            BlockKind::TableOfContents { table_of_contents } => table_of_contents.color = color,
            kind => {
                kind.text_content_mut()
                    .ok_or(ValidationError::UnsupportedCapability(block_type, "color"))?
                    .color = color
            }
        }
        Ok(self)
    }

    /// Nests `children` under this block for creation. Headings become
    /// toggleable.
    pub fn with_children(mut self, children: Vec<Block>) -> Result<Self, ValidationError> {
        let block_type = self.block_type();
        if let BlockKind::Heading1 { heading_1: heading }
        | BlockKind::Heading2 { heading_2: heading }
        | BlockKind::Heading3 { heading_3: heading } = &mut self.kind
        {
            heading.is_toggleable = true;
        }
        *self
            .kind
            .children_mut()
            .ok_or(ValidationError::UnsupportedCapability(block_type, "children"))? = children;
        Ok(self)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Result<Self, ValidationError> {
        let block_type = self.block_type();
        *self
            .kind
            .caption_mut()
            .ok_or(ValidationError::UnsupportedCapability(block_type, "caption"))? =
            vec![RichText::plain(caption)];
        Ok(self)
    }

    /// The create payload: `{"object": "block", "type": t, t: {...}}`.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut object = Map::new();
        object.insert("object".to_string(), Value::String("block".to_string()));
        if let Value::Object(kind) = serde_json::to_value(&self.kind)? {
            object.extend(kind);
        }
        Ok(Value::Object(object))
    }
}

fn heading_content(text: impl Into<String>) -> HeadingContent {
    HeadingContent {
        text: TextBlockContent::new(text),
        is_toggleable: false,
    }
}

fn link(url: &str) -> Result<LinkContent, ValidationError> {
    Ok(LinkContent {
        url: ValidatedUrl::parse(url)?.as_str().to_string(),
        caption: Vec::new(),
    })
}

fn external_media(url: &str) -> Result<MediaContent, ValidationError> {
    Ok(MediaContent {
        source: FileSource::external(ValidatedUrl::parse(url)?.as_str()),
        caption: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn paragraph_create_payload() {
        assert_eq!(
            Block::paragraph("Hello").to_json().unwrap(),
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{"type": "text", "text": {"content": "Hello"}}],
                    "color": "default"
                }
            })
        );
    }

    #[test]
    fn heading_uses_numbered_key() {
        let payload = Block::heading_2("Section").to_json().unwrap();
        assert_eq!(payload["type"], "heading_2");
        assert_eq!(payload["heading_2"]["is_toggleable"], false);
        assert_eq!(
            payload["heading_2"]["rich_text"][0]["text"]["content"],
            "Section"
        );
    }

    #[test]
    fn code_language_is_validated() {
        let block = Block::code("fn main() {}", "rust").unwrap();
        assert_eq!(block.plain_text().as_deref(), Some("fn main() {}"));
        assert_eq!(
            Block::code("x", "brainfuck").unwrap_err(),
            ValidationError::InvalidLanguage("brainfuck".to_string())
        );
    }

    #[test]
    fn capabilities_are_per_variant() {
        let quote = Block::quote("Q").with_color(Color::BlueBackground).unwrap();
        assert_eq!(quote.color(), Some(Color::BlueBackground));

        assert_eq!(
            Block::divider().with_color(Color::Red).unwrap_err(),
            ValidationError::UnsupportedCapability("divider", "color")
        );
        assert_eq!(
            Block::paragraph("p").with_caption("c").unwrap_err(),
            ValidationError::UnsupportedCapability("paragraph", "caption")
        );

        let image = Block::image("https://example.com/cat.png")
            .unwrap()
            .with_caption("A cat")
            .unwrap();
        assert_eq!(
            image.to_json().unwrap(),
            json!({
                "object": "block",
                "type": "image",
                "image": {
                    "type": "external",
                    "external": {"url": "https://example.com/cat.png"},
                    "caption": [{"type": "text", "text": {"content": "A cat"}}]
                }
            })
        );
    }

    #[test]
    fn children_make_headings_toggleable() {
        let heading = Block::heading_1("H")
            .with_children(vec![Block::paragraph("inside")])
            .unwrap();
        let payload = heading.to_json().unwrap();
        assert_eq!(payload["heading_1"]["is_toggleable"], true);
        assert_eq!(payload["heading_1"]["children"][0]["type"], "paragraph");

        assert!(Block::equation("x").with_children(vec![]).is_err());
    }

    #[test]
    fn media_urls_are_validated() {
        assert!(Block::bookmark("not a url").is_err());
        assert!(Block::embed("ftp://example.com/x").is_err());
    }

    #[test]
    fn parses_api_blocks() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            {
                "object": "block",
                "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
                "parent": {"type": "page_id", "page_id": "59833787-2cf9-4fdf-8782-e53db20768a5"},
                "created_time": "2022-03-01T19:05:00.000Z",
                "last_edited_time": "2022-03-01T19:05:00.000Z",
                "created_by": {"object": "user", "id": "ee5f0f84-409a-440f-983a-a5315961c6e4"},
                "last_edited_by": {"object": "user", "id": "ee5f0f84-409a-440f-983a-a5315961c6e4"},
                "has_children": false,
                "archived": false,
                "type": "to_do",
                "to_do": {
                    "rich_text": [{"type": "text", "text": {"content": "Buy milk", "link": null}, "plain_text": "Buy milk", "href": null}],
                    "checked": true,
                    "color": "default"
                }
            },
            {
                "object": "block",
                "id": "acc7eb06-05cd-4603-a384-5e1e4f1f4e72",
                "has_children": false,
                "archived": false,
                "type": "ai_block",
                "ai_block": {}
            },
            {
                "object": "block",
                "id": "2f3e0c91-76b1-4a17-8d0c-8b2f4bf0a7a9",
                "type": "child_page",
                "child_page": {"title": "Sub page"}
            }
        ]))
        .unwrap();

        assert!(matches!(
            &blocks[0].kind,
            BlockKind::ToDo { to_do } if to_do.checked
        ));
        assert_eq!(blocks[0].plain_text().as_deref(), Some("Buy milk"));
        assert_eq!(blocks[1].kind, BlockKind::Unsupported);
        assert_eq!(blocks[2].block_type(), "child_page");
    }
}
