use super::common::Parent;
use super::rich_text::{plain_text, RichText};
use super::user::PartialUser;
use crate::types::NotionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a page or in a discussion thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: NotionId,
    pub parent: Parent,
    pub discussion_id: NotionId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub rich_text: Vec<RichText>,
}

impl Comment {
    pub fn text(&self) -> String {
        plain_text(&self.rich_text)
    }
}

/// Where a new comment goes: a top-level comment on a page, or a reply to
/// an existing discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommentTarget {
    Page { parent: Parent },
    Discussion { discussion_id: NotionId },
}

/// A comment to be created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    #[serde(flatten)]
    pub target: CommentTarget,
    pub rich_text: Vec<RichText>,
}

impl NewComment {
    pub fn new(page_id: NotionId, text: impl Into<String>) -> Self {
        Self {
            target: CommentTarget::Page {
                parent: Parent::page(page_id),
            },
            rich_text: vec![RichText::plain(text)],
        }
    }

    pub fn reply(discussion_id: NotionId, text: impl Into<String>) -> Self {
        Self {
            target: CommentTarget::Discussion { discussion_id },
            rich_text: vec![RichText::plain(text)],
        }
    }
}
