// src/filter/derived.rs
//! Filters that re-key another filter: timestamps, rollups and formulas.

use super::condition::Condition;
use super::property::{
    date_condition_methods, Checkbox, Date, Number, PropertyFilter, Text,
};
use crate::types::ValidationError;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The two page timestamps a [`Timestamp`] filter may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    CreatedTime,
    LastEditedTime,
}

impl TimestampKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedTime => "created_time",
            Self::LastEditedTime => "last_edited_time",
        }
    }

    pub fn supported() -> Vec<&'static str> {
        vec![
            Self::CreatedTime.as_str(),
            Self::LastEditedTime.as_str(),
        ]
    }
}

impl FromStr for TimestampKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_time" => Ok(Self::CreatedTime),
            "last_edited_time" => Ok(Self::LastEditedTime),
            other => Err(ValidationError::InvalidTimestamp {
                value: other.to_string(),
                supported: Self::supported(),
            }),
        }
    }
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date conditions on a page's `created_time` or `last_edited_time`.
///
/// Renders as `{"timestamp": name, name: <condition>}`; the timestamp name is
/// both a value and a key.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp {
    kind: TimestampKind,
    condition: Option<Condition>,
}

impl Timestamp {
    /// Targets the timestamp named `timestamp`, rejecting anything other
    /// than `created_time` and `last_edited_time`.
    pub fn new(timestamp: &str) -> Result<Self, ValidationError> {
        Ok(Self::of(timestamp.parse()?))
    }

    pub fn of(kind: TimestampKind) -> Self {
        Self {
            kind,
            condition: None,
        }
    }

    pub fn created_time() -> Self {
        Self::of(TimestampKind::CreatedTime)
    }

    pub fn last_edited_time() -> Self {
        Self::of(TimestampKind::LastEditedTime)
    }

    pub fn kind(&self) -> TimestampKind {
        self.kind
    }

    pub fn with_condition(&self, condition: Condition) -> Self {
        Self {
            kind: self.kind,
            condition: Some(condition),
        }
    }

    date_condition_methods!();

    pub fn to_json(&self) -> Result<Value, ValidationError> {
        let condition = self
            .condition
            .as_ref()
            .ok_or_else(|| ValidationError::IncompleteFilter {
                target: self.kind.as_str().to_string(),
            })?;

        let mut object = Map::new();
        object.insert(
            "timestamp".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        object.insert(self.kind.as_str().to_string(), condition.to_json());
        Ok(Value::Object(object))
    }
}

/// How an array-valued rollup aggregates its inner condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayCondition {
    Any,
    Every,
    None,
}

impl ArrayCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Every => "every",
            Self::None => "none",
        }
    }

    pub fn supported() -> Vec<&'static str> {
        vec!["any", "every", "none"]
    }
}

impl FromStr for ArrayCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "every" => Ok(Self::Every),
            "none" => Ok(Self::None),
            other => Err(ValidationError::InvalidArrayCondition {
                value: other.to_string(),
                supported: Self::supported(),
            }),
        }
    }
}

/// Filters a rollup evaluating to a single number or date can wrap.
pub trait RollupValue: Into<PropertyFilter> {}

impl RollupValue for Number {}
impl RollupValue for Date {}

/// Filters a formula result can be matched with.
pub trait FormulaValue: Into<PropertyFilter> {}

impl FormulaValue for Text {}
impl FormulaValue for Checkbox {}
impl FormulaValue for Number {}
impl FormulaValue for Date {}

/// Condition on a rollup property.
///
/// The wrapped filter names the rollup property and carries the condition;
/// its family key is nested under `"rollup"`, one level deeper when an
/// array condition is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Rollup {
    inner: PropertyFilter,
    array_condition: Option<ArrayCondition>,
}

impl Rollup {
    /// A rollup evaluating to a number or a date.
    pub fn new(filter: impl RollupValue) -> Self {
        Self {
            inner: filter.into(),
            array_condition: None,
        }
    }

    /// An array rollup matched by `array_condition`; the inner filter may be
    /// of any property family.
    pub fn matching(array_condition: ArrayCondition, filter: impl Into<PropertyFilter>) -> Self {
        Self {
            inner: filter.into(),
            array_condition: Some(array_condition),
        }
    }

    /// Like [`Rollup::matching`], with the array condition given by name.
    pub fn with_array_condition(
        filter: impl Into<PropertyFilter>,
        array_condition: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::matching(array_condition.parse()?, filter))
    }

    /// Any item in the rollup satisfies the filter.
    pub fn any(filter: impl Into<PropertyFilter>) -> Self {
        Self::matching(ArrayCondition::Any, filter)
    }

    /// Every item in the rollup satisfies the filter.
    pub fn every(filter: impl Into<PropertyFilter>) -> Self {
        Self::matching(ArrayCondition::Every, filter)
    }

    /// No item in the rollup satisfies the filter.
    pub fn none(filter: impl Into<PropertyFilter>) -> Self {
        Self::matching(ArrayCondition::None, filter)
    }

    pub fn array_condition(&self) -> Option<ArrayCondition> {
        self.array_condition
    }

    pub fn to_json(&self) -> Result<Value, ValidationError> {
        let mut payload = Map::new();
        payload.insert(
            self.inner.kind().wire_key().to_string(),
            self.inner.condition_json()?,
        );

        let rollup = match self.array_condition {
            Some(array_condition) => {
                let mut nested = Map::new();
                nested.insert(array_condition.as_str().to_string(), Value::Object(payload));
                nested
            }
            None => payload,
        };

        let mut object = Map::new();
        object.insert(
            "property".to_string(),
            Value::String(self.inner.target().to_string()),
        );
        object.insert("rollup".to_string(), Value::Object(rollup));
        Ok(Value::Object(object))
    }
}

/// Condition on a formula property's result.
///
/// Renders exactly like the wrapped filter: the formula's result type is
/// selected by the family key.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    inner: PropertyFilter,
}

impl Formula {
    pub fn new(filter: impl FormulaValue) -> Self {
        Self {
            inner: filter.into(),
        }
    }

    pub fn to_json(&self) -> Result<Value, ValidationError> {
        self.inner.to_json()
    }
}
