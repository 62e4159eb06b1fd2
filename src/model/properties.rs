//! Database property schemas and page property values.

use super::common::Empty;
use super::rich_text::RichText;
use crate::types::{NotionId, SelectColor, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Select, multi-select and status option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: SelectColor,
}

impl SelectOption {
    /// Rejects colors outside the option palette, listing the accepted set.
    pub fn new(name: impl Into<String>, color: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: name.into(),
            color: color.parse()?,
        })
    }

    pub fn with_color(name: impl Into<String>, color: SelectColor) -> Self {
        Self {
            id: None,
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default = "default_number_format")]
    pub format: String,
}

fn default_number_format() -> String {
    "number".to_string()
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            format: default_number_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: NotionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_property: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_property: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
    pub function: String,
}

/// Database property schema, serialized as `{type: config}`.
///
/// Types this crate does not model land in [`PropertySchema::Unsupported`],
/// which keeps the raw `{type: config}` entry and writes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySchema {
    Title(Empty),
    RichText(Empty),
    Number(NumberConfig),
    Checkbox(Empty),
    Select(SelectConfig),
    MultiSelect(SelectConfig),
    Status(SelectConfig),
    Date(Empty),
    People(Empty),
    Files(Empty),
    Url(Empty),
    Email(Empty),
    PhoneNumber(Empty),
    Formula(FormulaConfig),
    Relation(RelationConfig),
    Rollup(RollupConfig),
    CreatedTime(Empty),
    CreatedBy(Empty),
    LastEditedTime(Empty),
    LastEditedBy(Empty),
    UniqueId(Empty),
    Verification(Empty),
    Button(Empty),
    #[serde(untagged)]
    Unsupported(Map<String, Value>),
}

impl PropertySchema {
    pub fn title() -> Self {
        Self::Title(Empty {})
    }

    pub fn rich_text() -> Self {
        Self::RichText(Empty {})
    }

    pub fn number(format: impl Into<String>) -> Self {
        Self::Number(NumberConfig {
            format: format.into(),
        })
    }

    pub fn checkbox() -> Self {
        Self::Checkbox(Empty {})
    }

    pub fn date() -> Self {
        Self::Date(Empty {})
    }

    pub fn people() -> Self {
        Self::People(Empty {})
    }

    pub fn files() -> Self {
        Self::Files(Empty {})
    }

    pub fn url() -> Self {
        Self::Url(Empty {})
    }

    pub fn email() -> Self {
        Self::Email(Empty {})
    }

    pub fn phone_number() -> Self {
        Self::PhoneNumber(Empty {})
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self::Select(SelectConfig { options })
    }

    pub fn multi_select(options: Vec<SelectOption>) -> Self {
        Self::MultiSelect(SelectConfig { options })
    }

    pub fn formula(expression: impl Into<String>) -> Self {
        Self::Formula(FormulaConfig {
            expression: expression.into(),
        })
    }

    /// One-way relation to `database_id`.
    pub fn relation(database_id: NotionId) -> Self {
        Self::Relation(RelationConfig {
            database_id,
            single_property: Some(Empty {}),
            dual_property: None,
        })
    }

    pub fn rollup(
        relation_property_name: impl Into<String>,
        rollup_property_name: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self::Rollup(RollupConfig {
            relation_property_name: Some(relation_property_name.into()),
            rollup_property_name: Some(rollup_property_name.into()),
            function: function.into(),
            ..RollupConfig::default()
        })
    }

    /// The wire name of the property type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Title(_) => "title",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::Checkbox(_) => "checkbox",
            Self::Select(_) => "select",
            Self::MultiSelect(_) => "multi_select",
            Self::Status(_) => "status",
            Self::Date(_) => "date",
            Self::People(_) => "people",
            Self::Files(_) => "files",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::PhoneNumber(_) => "phone_number",
            Self::Formula(_) => "formula",
            Self::Relation(_) => "relation",
            Self::Rollup(_) => "rollup",
            Self::CreatedTime(_) => "created_time",
            Self::CreatedBy(_) => "created_by",
            Self::LastEditedTime(_) => "last_edited_time",
            Self::LastEditedBy(_) => "last_edited_by",
            Self::UniqueId(_) => "unique_id",
            Self::Verification(_) => "verification",
            Self::Button(_) => "button",
            Self::Unsupported(raw) => raw.keys().next().map_or("unsupported", String::as_str),
        }
    }
}

/// Database property definition as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseProperty {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub schema: PropertySchema,
}

impl<'de> Deserialize<'de> for DatabaseProperty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawProperty {
            id: String,
            name: String,
            #[serde(rename = "type")]
            kind: Option<String>,
            #[serde(flatten)]
            rest: Map<String, Value>,
        }

        let RawProperty {
            id,
            name,
            kind,
            mut rest,
        } = RawProperty::deserialize(deserializer)?;

        // Only the entry named by `type` is the config; siblings such as
        // `description` are dropped.
        let entry = match kind {
            Some(kind) => {
                let config = rest
                    .remove(&kind)
                    .unwrap_or_else(|| Value::Object(Map::new()));
                Map::from_iter([(kind, config)])
            }
            None => rest,
        };
        let schema =
            PropertySchema::deserialize(Value::Object(entry)).map_err(de::Error::custom)?;
        if let PropertySchema::Unsupported(_) = schema {
            log::debug!(
                "Property '{}' has unsupported type '{}'",
                name,
                schema.type_name()
            );
        }

        Ok(Self { id, name, schema })
    }
}

/// Start (and optional end) of a date value; each an ISO-8601 date or datetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInput {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateInput {
    /// A whole day.
    pub fn date(start: NaiveDate) -> Self {
        Self {
            start: start.format("%Y-%m-%d").to_string(),
            end: None,
            time_zone: None,
        }
    }

    pub fn datetime(start: DateTime<Utc>) -> Self {
        Self {
            start: start.to_rfc3339(),
            end: None,
            time_zone: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectValue {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReference {
    pub id: NotionId,
}

/// A page property value, serialized as `{type: value}` for page creation
/// and updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Number(Option<f64>),
    Checkbox(bool),
    Select(Option<SelectValue>),
    MultiSelect(Vec<SelectValue>),
    Status(Option<SelectValue>),
    Date(Option<DateInput>),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    Relation(Vec<PageReference>),
    People(Vec<PageReference>),
}

impl PropertyValue {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(vec![RichText::plain(text)])
    }

    pub fn rich_text(text: impl Into<String>) -> Self {
        Self::RichText(vec![RichText::plain(text)])
    }

    pub fn number(value: f64) -> Self {
        Self::Number(Some(value))
    }

    pub fn checkbox(value: bool) -> Self {
        Self::Checkbox(value)
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::Select(Some(SelectValue { name: name.into() }))
    }

    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect(
            names
                .into_iter()
                .map(|name| SelectValue { name: name.into() })
                .collect(),
        )
    }

    pub fn status(name: impl Into<String>) -> Self {
        Self::Status(Some(SelectValue { name: name.into() }))
    }

    pub fn date(value: DateInput) -> Self {
        Self::Date(Some(value))
    }

    pub fn url(value: impl Into<String>) -> Self {
        Self::Url(Some(value.into()))
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::Email(Some(value.into()))
    }

    pub fn phone_number(value: impl Into<String>) -> Self {
        Self::PhoneNumber(Some(value.into()))
    }

    pub fn relation(pages: impl IntoIterator<Item = NotionId>) -> Self {
        Self::Relation(pages.into_iter().map(|id| PageReference { id }).collect())
    }

    pub fn people(users: impl IntoIterator<Item = NotionId>) -> Self {
        Self::People(users.into_iter().map(|id| PageReference { id }).collect())
    }
}
