use crate::models::{Context, FilterClause, OrderClause, QueryDescriptor};
use crate::tracking::{CREATED_AT_FIELD, VERSION_NUMBER_FIELD};

/// Newest publish first: version number, ties broken by creation time.
pub fn latest_first_order() -> Vec<OrderClause> {
    vec![
        OrderClause::desc(VERSION_NUMBER_FIELD),
        OrderClause::desc(CREATED_AT_FIELD),
    ]
}

/// Shapes the find query used to fetch the latest published files for a
/// work area. Derived configurations append constraints or cap the result
/// set; the base behavior leaves the inputs untouched. Building the
/// descriptor cannot fail; executing it is the caller's business.
pub trait PublishQueryHook {
    /// Extension point for additional filter clauses. The default appends
    /// nothing.
    fn extend_filters(&self, _context: &Context, _filters: &mut Vec<FilterClause>) {}

    /// Maximum number of publishes to fetch. Zero means all of them.
    fn limit(&self) -> u32 {
        0
    }

    fn execute(
        &self,
        context: &Context,
        filters: Vec<FilterClause>,
        fields: Vec<String>,
    ) -> QueryDescriptor {
        let mut filters = filters;
        self.extend_filters(context, &mut filters);

        QueryDescriptor {
            filters,
            fields,
            order: latest_first_order(),
            limit: self.limit(),
        }
    }
}

/// Base configuration: identity on filters and fields, latest version
/// first, unbounded.
pub struct LatestPublishesQuery;

impl PublishQueryHook for LatestPublishesQuery {}
