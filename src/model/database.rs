use super::common::{FileSource, Icon, Parent};
use super::properties::{DatabaseProperty, PropertySchema};
use super::rich_text::{plain_text, RichText};
use crate::types::NotionId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: NotionId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub description: Vec<RichText>,
    pub parent: Parent,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub cover: Option<FileSource>,
    #[serde(default)]
    pub properties: IndexMap<String, DatabaseProperty>,
}

impl Database {
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }

    pub fn property(&self, name: &str) -> Option<&DatabaseProperty> {
        self.properties.get(name)
    }
}

/// A database to be created under a page.
///
/// Every database needs exactly one title property; `NewDatabase::new`
/// declares it as `Name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDatabase {
    pub parent: Parent,
    pub title: Vec<RichText>,
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_inline: bool,
}

impl NewDatabase {
    pub fn new(parent_page: NotionId, title: impl Into<String>) -> Self {
        let mut properties = IndexMap::new();
        properties.insert("Name".to_string(), PropertySchema::title());
        Self {
            parent: Parent::page(parent_page),
            title: vec![RichText::plain(title)],
            properties,
            is_inline: false,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::properties::SelectOption;
    use crate::types::SelectColor;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_database_schema_in_order() {
        let database: Database = serde_json::from_value(json!({
            "object": "database",
            "id": "bc1211ca-e3f1-4939-ae34-5260b16f627c",
            "created_time": "2021-07-08T23:50:00.000Z",
            "last_edited_time": "2021-07-08T23:50:00.000Z",
            "title": [{"type": "text", "text": {"content": "Grocery List", "link": null}, "plain_text": "Grocery List", "href": null}],
            "description": [],
            "icon": null,
            "cover": null,
            "parent": {"type": "page_id", "page_id": "98ad959b-2b6a-4774-80ee-00246fb0ea9b"},
            "url": "https://www.notion.so/bc1211cae3f14939ae34260b16f627c",
            "archived": false,
            "is_inline": false,
            "properties": {
                "Price": {"id": "evWq", "name": "Price", "type": "number", "number": {"format": "dollar"}},
                "Done": {"id": "F%5Ctk", "name": "Done", "type": "checkbox", "checkbox": {}},
                "Name": {"id": "title", "name": "Name", "type": "title", "title": {}}
            }
        }))
        .unwrap();

        assert_eq!(database.title_text(), "Grocery List");
        let names: Vec<&str> = database.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Price", "Done", "Name"]);
        assert_eq!(
            database.property("Price").map(|p| &p.schema),
            Some(&PropertySchema::number("dollar"))
        );
    }

    #[test]
    fn new_database_always_has_a_title_column() {
        let database = NewDatabase::new(
            NotionId::parse("98ad959b2b6a477480ee00246fb0ea9b").unwrap(),
            "Tasks",
        )
        .with_property(
            "Status",
            PropertySchema::select(vec![SelectOption::with_color("Done", SelectColor::Green)]),
        );

        assert_eq!(
            serde_json::to_value(&database).unwrap(),
            json!({
                "parent": {"type": "page_id", "page_id": "98ad959b-2b6a-4774-80ee-00246fb0ea9b"},
                "title": [{"type": "text", "text": {"content": "Tasks"}}],
                "properties": {
                    "Name": {"title": {}},
                    "Status": {"select": {"options": [{"name": "Done", "color": "green"}]}}
                }
            })
        );
    }
}
