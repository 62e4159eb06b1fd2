// src/filter/property.rs
//! Property filters: a property name bound to one condition.
//!
//! Each property family is its own type and only exposes the conditions the
//! API accepts for it, so `Number::new("Count").greater_than(3)` compiles
//! while `Checkbox::new("Done").greater_than(3)` does not. Builder methods
//! take `&self` and return a new value; a half-built filter can be reused in
//! several branches of a compound without aliasing.

use super::condition::Condition;
use crate::types::ValidationError;
use serde_json::{Map, Value};

/// Property families, each carrying the JSON discriminator the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Text,
    Number,
    Checkbox,
    Select,
    MultiSelect,
    Date,
    People,
    Files,
    Relation,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 9] = [
        Self::Text,
        Self::Number,
        Self::Checkbox,
        Self::Select,
        Self::MultiSelect,
        Self::Date,
        Self::People,
        Self::Files,
        Self::Relation,
    ];

    /// Key under which the condition is nested.
    ///
    /// Text filters apply to title, rich text, url, email and phone number
    /// properties and are keyed `rich_text`, not `text`.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::Text => "rich_text",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Date => "date",
            Self::People => "people",
            Self::Files => "files",
            Self::Relation => "relation",
        }
    }
}

/// A property name, its family and the (possibly not yet attached) condition.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFilter {
    target: String,
    kind: PropertyKind,
    condition: Option<Condition>,
}

impl PropertyFilter {
    pub fn new(kind: PropertyKind, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind,
            condition: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Returns a copy of this filter with `condition` attached.
    pub fn with_condition(&self, condition: Condition) -> Self {
        Self {
            target: self.target.clone(),
            kind: self.kind,
            condition: Some(condition),
        }
    }

    /// The attached condition rendered as JSON, or an error if none is attached.
    pub(crate) fn condition_json(&self) -> Result<Value, ValidationError> {
        self.condition
            .as_ref()
            .map(Condition::to_json)
            .ok_or_else(|| ValidationError::IncompleteFilter {
                target: self.target.clone(),
            })
    }

    /// Renders `{"property": target, <wire key>: <condition>}`.
    pub fn to_json(&self) -> Result<Value, ValidationError> {
        let mut object = Map::new();
        object.insert("property".to_string(), Value::String(self.target.clone()));
        object.insert(self.kind.wire_key().to_string(), self.condition_json()?);
        Ok(Value::Object(object))
    }
}

/// Generates builder methods; each arm names how the operand is taken.
macro_rules! condition_methods {
    () => {};
    (text $(#[$doc:meta])* fn $method:ident => $pred:ident; $($rest:tt)*) => {
        $(#[$doc])*
        pub fn $method(&self, value: impl Into<String>) -> Self {
            self.with_condition($crate::filter::condition::Condition::Valued(
                $crate::filter::condition::ValuedPredicate::$pred,
                $crate::filter::condition::Operand::text(value),
            ))
        }
        $crate::filter::property::condition_methods!($($rest)*);
    };
    (value $(#[$doc:meta])* fn $method:ident => $pred:ident; $($rest:tt)*) => {
        $(#[$doc])*
        pub fn $method(&self, value: impl Into<$crate::filter::condition::Operand>) -> Self {
            self.with_condition($crate::filter::condition::Condition::Valued(
                $crate::filter::condition::ValuedPredicate::$pred,
                value.into(),
            ))
        }
        $crate::filter::property::condition_methods!($($rest)*);
    };
    (boolean $(#[$doc:meta])* fn $method:ident => $pred:ident; $($rest:tt)*) => {
        $(#[$doc])*
        pub fn $method(&self, value: bool) -> Self {
            self.with_condition($crate::filter::condition::Condition::Valued(
                $crate::filter::condition::ValuedPredicate::$pred,
                $crate::filter::condition::Operand::from(value),
            ))
        }
        $crate::filter::property::condition_methods!($($rest)*);
    };
    (flag $(#[$doc:meta])* fn $method:ident => $pred:ident; $($rest:tt)*) => {
        $(#[$doc])*
        pub fn $method(&self) -> Self {
            self.with_condition($crate::filter::condition::Condition::Flag(
                $crate::filter::condition::FlagPredicate::$pred,
            ))
        }
        $crate::filter::property::condition_methods!($($rest)*);
    };
    (window $(#[$doc:meta])* fn $method:ident => $pred:ident; $($rest:tt)*) => {
        $(#[$doc])*
        pub fn $method(&self) -> Self {
            self.with_condition($crate::filter::condition::Condition::Window(
                $crate::filter::condition::RelativeWindow::$pred,
            ))
        }
        $crate::filter::property::condition_methods!($($rest)*);
    };
}

/// Date conditions, shared by [`Date`] and [`super::Timestamp`].
///
/// Date operands are ISO-8601 strings (`"2021-05-10"`,
/// `"2021-10-15T12:00:00-07:00"`) or chrono dates. Dates without a time are
/// compared against the whole UTC day; datetimes with millisecond precision.
macro_rules! date_condition_methods {
    () => {
        $crate::filter::property::condition_methods! {
            value /// Date matches the provided date exactly.
            fn equals => Equals;
            value /// Date is before the provided date.
            fn before => Before;
            value /// Date is after the provided date.
            fn after => After;
            value /// Date is on or before the provided date.
            fn on_or_before => OnOrBefore;
            value /// Date is on or after the provided date.
            fn on_or_after => OnOrAfter;
            flag /// Date is empty.
            fn is_empty => IsEmpty;
            flag /// Date is present.
            fn is_not_empty => IsNotEmpty;
            window /// Date falls within the past week.
            fn past_week => PastWeek;
            window /// Date falls within the past month.
            fn past_month => PastMonth;
            window /// Date falls within the past year.
            fn past_year => PastYear;
            window /// Date falls within the next week.
            fn next_week => NextWeek;
            window /// Date falls within the next month.
            fn next_month => NextMonth;
            window /// Date falls within the next year.
            fn next_year => NextYear;
        }
    };
}

pub(crate) use condition_methods;
pub(crate) use date_condition_methods;

/// Declares a property family wrapping [`PropertyFilter`].
macro_rules! property_family {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(PropertyFilter);

        impl $name {
            pub fn new(property: impl Into<String>) -> Self {
                Self(PropertyFilter::new(PropertyKind::$kind, property))
            }

            pub fn with_condition(&self, condition: Condition) -> Self {
                Self(self.0.with_condition(condition))
            }

            pub fn to_json(&self) -> Result<Value, ValidationError> {
                self.0.to_json()
            }
        }

        impl From<$name> for PropertyFilter {
            fn from(filter: $name) -> Self {
                filter.0
            }
        }

        impl From<$name> for super::Filter {
            fn from(filter: $name) -> Self {
                super::Filter::Property(filter.0)
            }
        }
    };
}

property_family! {
    /// Text conditions for title, rich text, url, email and phone number properties.
    Text => Text
}

impl Text {
    condition_methods! {
        text /// Value matches the provided string exactly.
        fn equals => Equals;
        text /// Value does not match the provided string.
        fn does_not_equal => DoesNotEqual;
        text /// Value contains the provided string.
        fn contains => Contains;
        text /// Value does not contain the provided string.
        fn does_not_contain => DoesNotContain;
        text /// Value starts with the provided string.
        fn starts_with => StartsWith;
        text /// Value ends with the provided string.
        fn ends_with => EndsWith;
        flag /// Value is empty.
        fn is_empty => IsEmpty;
        flag /// Value is present.
        fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Number conditions.
    Number => Number
}

impl Number {
    condition_methods! {
        value fn equals => Equals;
        value fn does_not_equal => DoesNotEqual;
        value fn greater_than => GreaterThan;
        value fn less_than => LessThan;
        value fn greater_than_or_equal_to => GreaterThanOrEqualTo;
        value fn less_than_or_equal_to => LessThanOrEqualTo;
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Checkbox conditions.
    Checkbox => Checkbox
}

impl Checkbox {
    condition_methods! {
        boolean fn equals => Equals;
        boolean fn does_not_equal => DoesNotEqual;
    }
}

property_family! {
    /// Select conditions, matched against the option name.
    Select => Select
}

impl Select {
    condition_methods! {
        text fn equals => Equals;
        text fn does_not_equal => DoesNotEqual;
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Multi-select conditions, matched against option names.
    MultiSelect => MultiSelect
}

impl MultiSelect {
    condition_methods! {
        text fn contains => Contains;
        text fn does_not_contain => DoesNotContain;
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Date conditions for date properties.
    Date => Date
}

impl Date {
    date_condition_methods!();
}

property_family! {
    /// People conditions for people, created_by and last_edited_by properties.
    /// Operands are user IDs.
    People => People
}

impl People {
    condition_methods! {
        text fn contains => Contains;
        text fn does_not_contain => DoesNotContain;
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Files conditions.
    Files => Files
}

impl Files {
    condition_methods! {
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}

property_family! {
    /// Relation conditions. Operands are page IDs.
    Relation => Relation
}

impl Relation {
    condition_methods! {
        text fn contains => Contains;
        text fn does_not_contain => DoesNotContain;
        flag fn is_empty => IsEmpty;
        flag fn is_not_empty => IsNotEmpty;
    }
}
