use crate::types::NotionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parent reference, serialized as `{"type": t, t: id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    PageId { page_id: NotionId },
    DatabaseId { database_id: NotionId },
    BlockId { block_id: NotionId },
    Workspace { workspace: bool },
}

impl Parent {
    pub fn page(id: NotionId) -> Self {
        Parent::PageId { page_id: id }
    }

    pub fn database(id: NotionId) -> Self {
        Parent::DatabaseId { database_id: id }
    }

    pub fn block(id: NotionId) -> Self {
        Parent::BlockId { block_id: id }
    }

    pub fn workspace() -> Self {
        Parent::Workspace { workspace: true }
    }

    /// The referenced object's ID; `None` for the workspace.
    pub fn id(&self) -> Option<&NotionId> {
        match self {
            Parent::PageId { page_id } => Some(page_id),
            Parent::DatabaseId { database_id } => Some(database_id),
            Parent::BlockId { block_id } => Some(block_id),
            Parent::Workspace { .. } => None,
        }
    }
}

/// Placeholder for configuration objects the API sends as `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// File uploaded to Notion; its URL expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Where a file lives: an external URL or a Notion-hosted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl FileSource {
    pub fn external(url: impl Into<String>) -> Self {
        FileSource::External {
            external: ExternalFile { url: url.into() },
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FileSource::External { external } => &external.url,
            FileSource::File { file } => &file.url,
        }
    }
}

/// Page, database and callout icons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl Icon {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Icon::Emoji {
            emoji: emoji.into(),
        }
    }
}
