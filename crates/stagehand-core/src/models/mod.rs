pub mod context;
pub mod entity;
pub mod error;
pub mod query;

pub use context::Context;
pub use entity::{Credentials, EntityRef, TaskRecord, TrackedUser};
pub use error::{HookError, HookErrorKind, HookResult};
pub use query::{
    FilterClause, FilterCondition, FilterGroup, FilterOp, GroupOp, OrderClause, QueryDescriptor,
    SortDirection,
};
