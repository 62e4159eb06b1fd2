// src/filter/condition.rs
//! Leaf predicates of a database filter.
//!
//! A [`Condition`] is independent of the property it is applied to. It
//! renders to a single-entry JSON object whose key is the predicate name in
//! snake_case. Operands are passed through untouched: the API is the only
//! authority on whether a value fits the property's type.

use serde_json::{Map, Value};

/// Operand of a valued condition: a string, number, boolean or ISO-8601 date.
///
/// Non-finite floats (`NaN`, `inf`, `-inf`) have no JSON number form and
/// render as `null`, so `Number::new("N").equals(f64::NAN)` produces
/// `{"number": {"equals": null}}`. Values are not checked before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand(Value);

impl Operand {
    /// A string operand.
    pub fn text(value: impl Into<String>) -> Self {
        Self(Value::String(value.into()))
    }

    /// An ISO-8601 date or datetime operand, e.g. `"2021-05-10"` or
    /// `"2021-10-15T12:00:00-07:00"`.
    pub fn date(value: impl Into<String>) -> Self {
        Self(Value::String(value.into()))
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self(Value::Bool(value))
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self(Value::from(value))
                }
            }
        )*
    };
}

numeric_operand!(i32, i64, u32, u64, usize, f32, f64);

impl From<chrono::NaiveDate> for Operand {
    fn from(value: chrono::NaiveDate) -> Self {
        Self::date(value.format("%Y-%m-%d").to_string())
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Operand
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self::date(value.to_rfc3339())
    }
}

/// Predicates that carry an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuedPredicate {
    Equals,
    DoesNotEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    Before,
    After,
    OnOrBefore,
    OnOrAfter,
}

impl ValuedPredicate {
    pub const ALL: [ValuedPredicate; 14] = [
        Self::Equals,
        Self::DoesNotEqual,
        Self::Contains,
        Self::DoesNotContain,
        Self::StartsWith,
        Self::EndsWith,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterThanOrEqualTo,
        Self::LessThanOrEqualTo,
        Self::Before,
        Self::After,
        Self::OnOrBefore,
        Self::OnOrAfter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::DoesNotEqual => "does_not_equal",
            Self::Contains => "contains",
            Self::DoesNotContain => "does_not_contain",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            Self::LessThanOrEqualTo => "less_than_or_equal_to",
            Self::Before => "before",
            Self::After => "after",
            Self::OnOrBefore => "on_or_before",
            Self::OnOrAfter => "on_or_after",
        }
    }
}

/// Emptiness checks, rendered as `{key: true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagPredicate {
    IsEmpty,
    IsNotEmpty,
}

impl FlagPredicate {
    pub const ALL: [FlagPredicate; 2] = [Self::IsEmpty, Self::IsNotEmpty];

    pub fn key(self) -> &'static str {
        match self {
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
        }
    }
}

/// Relative time windows, rendered as `{key: {}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeWindow {
    PastWeek,
    PastMonth,
    PastYear,
    NextWeek,
    NextMonth,
    NextYear,
}

impl RelativeWindow {
    pub const ALL: [RelativeWindow; 6] = [
        Self::PastWeek,
        Self::PastMonth,
        Self::PastYear,
        Self::NextWeek,
        Self::NextMonth,
        Self::NextYear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::PastWeek => "past_week",
            Self::PastMonth => "past_month",
            Self::PastYear => "past_year",
            Self::NextWeek => "next_week",
            Self::NextMonth => "next_month",
            Self::NextYear => "next_year",
        }
    }
}

/// One comparison, emptiness or relative-time predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Valued(ValuedPredicate, Operand),
    Flag(FlagPredicate),
    Window(RelativeWindow),
}

impl Condition {
    pub fn valued(predicate: ValuedPredicate, operand: impl Into<Operand>) -> Self {
        Self::Valued(predicate, operand.into())
    }

    /// The predicate name used as the JSON key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Valued(predicate, _) => predicate.key(),
            Self::Flag(flag) => flag.key(),
            Self::Window(window) => window.key(),
        }
    }

    /// Renders `{key: operand}`, `{key: true}` or `{key: {}}`.
    pub fn to_json(&self) -> Value {
        let value = match self {
            Self::Valued(_, operand) => operand.as_json().clone(),
            Self::Flag(_) => Value::Bool(true),
            Self::Window(_) => Value::Object(Map::new()),
        };
        let mut object = Map::with_capacity(1);
        object.insert(self.key().to_string(), value);
        Value::Object(object)
    }
}
