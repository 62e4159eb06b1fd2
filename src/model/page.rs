use super::block::Block;
use super::common::{FileSource, Icon, Parent};
use super::properties::PropertyValue;
use super::user::PartialUser;
use crate::types::NotionId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Notion page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: NotionId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<PartialUser>,
    #[serde(default)]
    pub last_edited_by: Option<PartialUser>,
    pub parent: Parent,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub cover: Option<FileSource>,
    /// Property values keyed by name, as returned by the API.
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl Page {
    /// Name of the page's title property. Every page has exactly one, but
    /// it can be renamed.
    pub fn title_property_name(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|(_, value)| value.get("type").and_then(Value::as_str) == Some("title"))
            .map(|(name, _)| name.as_str())
    }

    /// Plain text of the title property.
    pub fn title(&self) -> Option<String> {
        let name = self.title_property_name()?;
        let items = self.properties.get(name)?.get("title")?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
                .collect(),
        )
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A page to be created.
///
/// `NewPage::new("Tuscan kale")` produces a page whose `title` property holds
/// the given text; database rows use [`NewPage::with_title_property`] to name
/// the database's title column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPage {
    parent: Option<Parent>,
    properties: IndexMap<String, PropertyValue>,
    children: Vec<Block>,
    icon: Option<Icon>,
    cover: Option<FileSource>,
}

impl NewPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_title_property("title", title)
    }

    pub fn with_title_property(name: impl Into<String>, title: impl Into<String>) -> Self {
        let mut properties = IndexMap::new();
        properties.insert(name.into(), PropertyValue::title(title));
        Self {
            parent: None,
            properties,
            children: Vec::new(),
            icon: None,
            cover: None,
        }
    }

    pub fn parent(&self) -> Option<&Parent> {
        self.parent.as_ref()
    }

    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_cover(mut self, cover: FileSource) -> Self {
        self.cover = Some(cover);
        self
    }

    /// The create-page request body.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut body = Map::new();
        body.insert("object".to_string(), Value::String("page".to_string()));
        if let Some(parent) = &self.parent {
            body.insert("parent".to_string(), serde_json::to_value(parent)?);
        }
        body.insert(
            "properties".to_string(),
            serde_json::to_value(&self.properties)?,
        );
        if !self.children.is_empty() {
            let children = self
                .children
                .iter()
                .map(Block::to_json)
                .collect::<Result<Vec<_>, _>>()?;
            body.insert("children".to_string(), Value::Array(children));
        }
        if let Some(icon) = &self.icon {
            body.insert("icon".to_string(), serde_json::to_value(icon)?);
        }
        if let Some(cover) = &self.cover {
            body.insert("cover".to_string(), serde_json::to_value(cover)?);
        }
        Ok(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::properties::PropertyValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_page() -> Value {
        json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T20:25:00.000Z",
            "created_by": {"object": "user", "id": "ee5f0f84-409a-440f-983a-a5315961c6e4"},
            "last_edited_by": {"object": "user", "id": "0c3e9826-b8f7-4f73-927d-2caaf86f1103"},
            "cover": null,
            "icon": {"type": "emoji", "emoji": "🥬"},
            "parent": {"type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce"},
            "archived": false,
            "properties": {
                "Price": {"id": "BJXS", "type": "number", "number": 2.5},
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        {"type": "text", "text": {"content": "Tuscan ", "link": null}, "plain_text": "Tuscan ", "href": null},
                        {"type": "text", "text": {"content": "kale", "link": null}, "plain_text": "kale", "href": null}
                    ]
                }
            },
            "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5"
        })
    }

    #[test]
    fn parses_page_and_finds_renamed_title() {
        let page: Page = serde_json::from_value(sample_page()).unwrap();
        assert_eq!(page.title_property_name(), Some("Name"));
        assert_eq!(page.title().as_deref(), Some("Tuscan kale"));
        assert_eq!(page.property("Price").and_then(|v| v.get("number")), Some(&json!(2.5)));
        assert_eq!(page.icon, Some(Icon::emoji("🥬")));
        assert!(matches!(page.parent, Parent::DatabaseId { .. }));
    }

    #[test]
    fn new_page_body() {
        let parent = Parent::page(NotionId::parse("b55c9c91384d452b81dbd1ef79372b75").unwrap());
        let page = NewPage::new("Groceries")
            .with_parent(parent)
            .with_property("Done", PropertyValue::checkbox(false))
            .with_children(vec![Block::paragraph("Buy kale")]);

        assert_eq!(
            page.to_json().unwrap(),
            json!({
                "object": "page",
                "parent": {"type": "page_id", "page_id": "b55c9c91-384d-452b-81db-d1ef79372b75"},
                "properties": {
                    "title": {"title": [{"type": "text", "text": {"content": "Groceries"}}]},
                    "Done": {"checkbox": false}
                },
                "children": [{
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": {
                        "rich_text": [{"type": "text", "text": {"content": "Buy kale"}}],
                        "color": "default"
                    }
                }]
            })
        );
    }
}
