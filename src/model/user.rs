use crate::types::NotionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

/// Whether a user is a human member or an integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserKind {
    Person {
        #[serde(default)]
        person: Person,
    },
    Bot {
        #[serde(default)]
        bot: Bot,
    },
}

/// User representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: NotionId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub kind: UserKind,
}

impl User {
    pub fn is_bot(&self) -> bool {
        matches!(self.kind, UserKind::Bot { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match &self.kind {
            UserKind::Person { person } => person.email.as_deref(),
            UserKind::Bot { .. } => None,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.email()) {
            (Some(name), _) => write!(f, "{}", name),
            (None, Some(email)) => write!(f, "{}", email),
            (None, None) => write!(f, "User {}", self.id),
        }
    }
}

/// Partial user representation (`created_by`, `last_edited_by`, people values)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialUser {
    pub id: NotionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_person_and_bot() {
        let users: Vec<User> = serde_json::from_value(json!([
            {
                "object": "user",
                "id": "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
                "type": "person",
                "person": {"email": "avo@example.org"},
                "name": "Avocado Lovelace",
                "avatar_url": null
            },
            {
                "object": "user",
                "id": "9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57",
                "type": "bot",
                "bot": {},
                "name": "Doug Engelbot",
                "avatar_url": null
            }
        ]))
        .unwrap();

        assert_eq!(users[0].email(), Some("avo@example.org"));
        assert!(!users[0].is_bot());
        assert!(users[1].is_bot());
        assert_eq!(users[1].to_string(), "Doug Engelbot");
    }
}
