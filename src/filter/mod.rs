// src/filter/mod.rs
//! Database query filters.
//!
//! A filter tree is built with typed property families and combined with
//! [`and`], [`or`] or the `&` / `|` operators, then rendered once with
//! [`Filter::to_json`] into the JSON filter grammar of the query endpoint:
//!
//! ```
//! use notion_sdk::filter::{Checkbox, MultiSelect};
//! use serde_json::json;
//!
//! let filter = Checkbox::new("Done").equals(true)
//!     & (MultiSelect::new("Tags").contains("A") | MultiSelect::new("Tags").contains("B"));
//!
//! assert_eq!(
//!     filter.to_json().unwrap(),
//!     json!({"and": [
//!         {"property": "Done", "checkbox": {"equals": true}},
//!         {"or": [
//!             {"property": "Tags", "multi_select": {"contains": "A"}},
//!             {"property": "Tags", "multi_select": {"contains": "B"}},
//!         ]},
//!     ]})
//! );
//! ```

pub mod compound;
pub mod condition;
pub mod derived;
pub mod property;
pub mod sort;

pub use compound::{and, or, Compound, LogicalOperator};
pub use condition::{Condition, FlagPredicate, Operand, RelativeWindow, ValuedPredicate};
pub use derived::{
    ArrayCondition, Formula, FormulaValue, Rollup, RollupValue, Timestamp, TimestampKind,
};
pub use property::{
    Checkbox, Date, Files, MultiSelect, Number, People, PropertyFilter, PropertyKind, Relation,
    Select, Text,
};
pub use sort::{Direction, Sort};

use crate::types::ValidationError;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Any node of a filter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Property(PropertyFilter),
    Timestamp(Timestamp),
    Rollup(Rollup),
    Formula(Formula),
    Compound(Compound),
}

impl Filter {
    /// Renders the tree. Fails if any leaf has no condition attached.
    pub fn to_json(&self) -> Result<Value, ValidationError> {
        match self {
            Filter::Property(filter) => filter.to_json(),
            Filter::Timestamp(filter) => filter.to_json(),
            Filter::Rollup(filter) => filter.to_json(),
            Filter::Formula(filter) => filter.to_json(),
            Filter::Compound(filter) => filter.to_json(),
        }
    }
}

impl From<PropertyFilter> for Filter {
    fn from(filter: PropertyFilter) -> Self {
        Filter::Property(filter)
    }
}

impl From<Timestamp> for Filter {
    fn from(filter: Timestamp) -> Self {
        Filter::Timestamp(filter)
    }
}

impl From<Rollup> for Filter {
    fn from(filter: Rollup) -> Self {
        Filter::Rollup(filter)
    }
}

impl From<Formula> for Filter {
    fn from(filter: Formula) -> Self {
        Filter::Formula(filter)
    }
}

impl From<Compound> for Filter {
    fn from(filter: Compound) -> Self {
        Filter::Compound(filter)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
