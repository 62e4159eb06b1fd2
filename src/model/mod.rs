//! Typed models of the API's wire objects.

pub mod block;
pub mod comment;
pub mod common;
pub mod database;
pub mod page;
pub mod properties;
pub mod rich_text;
pub mod user;

pub use block::{Block, BlockKind, TextBlockContent, CODE_LANGUAGES};
pub use comment::{Comment, CommentTarget, NewComment};
pub use common::{Empty, ExternalFile, FileSource, HostedFile, Icon, Parent};
pub use database::{Database, NewDatabase};
pub use page::{NewPage, Page};
pub use properties::{
    DatabaseProperty, DateInput, PageReference, PropertySchema, PropertyValue, SelectOption,
    SelectValue,
};
pub use rich_text::{plain_text, Annotations, RichText, RichTextContent};
pub use user::{PartialUser, User, UserKind};

use serde::{Deserialize, Serialize};

/// Results of a search: pages and databases, told apart by `object`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum NotionObject {
    Page(Page),
    Database(Database),
}

impl NotionObject {
    pub fn id(&self) -> &crate::types::NotionId {
        match self {
            NotionObject::Page(page) => &page.id,
            NotionObject::Database(database) => &database.id,
        }
    }

    pub fn object_type_name(&self) -> &str {
        match self {
            NotionObject::Page(_) => "page",
            NotionObject::Database(_) => "database",
        }
    }

    /// Returns a human-readable display title for this object.
    pub fn display_title(&self) -> String {
        match self {
            NotionObject::Page(page) => page.title().unwrap_or_else(|| "Untitled".to_string()),
            NotionObject::Database(database) => {
                let text = database.title_text();
                if text.is_empty() {
                    "Untitled Database".to_string()
                } else {
                    text
                }
            }
        }
    }
}
