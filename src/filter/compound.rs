// src/filter/compound.rs
//! Logical `and` / `or` aggregation of filters.

use super::derived::{Formula, Rollup, Timestamp};
use super::property::{
    Checkbox, Date, Files, MultiSelect, Number, People, PropertyFilter, Relation, Select, Text,
};
use super::Filter;
use crate::types::ValidationError;
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{BitAnd, BitOr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered group of filters joined by one operator.
///
/// Members are kept in insertion order and nested compounds are never
/// flattened: `(a & b) & c` renders as `{"and": [{"and": [a, b]}, c]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    operator: LogicalOperator,
    members: Vec<Filter>,
}

impl Compound {
    pub fn new(operator: LogicalOperator, members: impl IntoIterator<Item = Filter>) -> Self {
        Self {
            operator,
            members: members.into_iter().collect(),
        }
    }

    pub fn and(members: impl IntoIterator<Item = Filter>) -> Self {
        Self::new(LogicalOperator::And, members)
    }

    pub fn or(members: impl IntoIterator<Item = Filter>) -> Self {
        Self::new(LogicalOperator::Or, members)
    }

    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    pub fn members(&self) -> &[Filter] {
        &self.members
    }

    /// Returns a copy with `member` appended.
    pub fn with_member(&self, member: impl Into<Filter>) -> Self {
        let mut members = self.members.clone();
        members.push(member.into());
        Self {
            operator: self.operator,
            members,
        }
    }

    pub fn to_json(&self) -> Result<Value, ValidationError> {
        let members = self
            .members
            .iter()
            .map(Filter::to_json)
            .collect::<Result<Vec<_>, _>>()?;

        let mut object = Map::with_capacity(1);
        object.insert(self.operator.as_str().to_string(), Value::Array(members));
        Ok(Value::Object(object))
    }
}

/// `{"and": [...]}` over the given members.
pub fn and(members: impl IntoIterator<Item = Filter>) -> Compound {
    Compound::and(members)
}

/// `{"or": [...]}` over the given members.
pub fn or(members: impl IntoIterator<Item = Filter>) -> Compound {
    Compound::or(members)
}

/// `&` and `|` on every filter type, producing a two-member [`Compound`].
macro_rules! impl_logical_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Into<Filter>> BitAnd<R> for $ty {
                type Output = Compound;

                fn bitand(self, rhs: R) -> Compound {
                    Compound::and([Filter::from(self), rhs.into()])
                }
            }

            impl<R: Into<Filter>> BitOr<R> for $ty {
                type Output = Compound;

                fn bitor(self, rhs: R) -> Compound {
                    Compound::or([Filter::from(self), rhs.into()])
                }
            }
        )*
    };
}

impl_logical_ops!(
    Text,
    Number,
    Checkbox,
    Select,
    MultiSelect,
    Date,
    People,
    Files,
    Relation,
    PropertyFilter,
    Timestamp,
    Rollup,
    Formula,
    Compound,
    Filter,
);
