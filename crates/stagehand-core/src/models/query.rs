use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operator of a filter condition, in the tracking service's
/// wire spelling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Is,
    IsNot,
    In,
    NotIn,
    Contains,
}

/// A `[field, operator, value]` condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition(pub String, pub FilterOp, pub Value);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOp {
    Any,
    All,
}

/// A `{filter_operator, filters}` compound clause.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub filter_operator: GroupOp,
    pub filters: Vec<FilterClause>,
}

/// One clause of a tracking-service query: conditions serialize as
/// 3-element arrays, groups as objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterClause {
    Condition(FilterCondition),
    Group(FilterGroup),
}

impl FilterClause {
    pub fn condition(field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        Self::Condition(FilterCondition(field.into(), op, value))
    }

    pub fn any(filters: Vec<FilterClause>) -> Self {
        Self::Group(FilterGroup {
            filter_operator: GroupOp::Any,
            filters,
        })
    }

    pub fn all(filters: Vec<FilterClause>) -> Self {
        Self::Group(FilterGroup {
            filter_operator: GroupOp::All,
            filters,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OrderClause {
    pub field_name: String,
    pub direction: SortDirection,
}

impl OrderClause {
    pub fn desc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Complete configuration of a find query. A `limit` of zero means
/// unbounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub filters: Vec<FilterClause>,
    pub fields: Vec<String>,
    pub order: Vec<OrderClause>,
    pub limit: u32,
}
