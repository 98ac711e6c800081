use serde_json::json;

use stagehand_core::hooks::{LatestPublishesQuery, PublishQueryHook, latest_first_order};
use stagehand_core::models::{Context, EntityRef, FilterClause, FilterOp, QueryDescriptor};

fn work_area() -> Context {
    Context {
        project: EntityRef::with_kind(10, "Project"),
        entity: Some(EntityRef::with_kind(55, "Shot")),
    }
}

#[test]
fn base_hook_is_identity_on_filters_and_fields() {
    let filters = vec![
        FilterClause::condition("project", FilterOp::Is, json!({"id": 10})),
        FilterClause::condition("entity", FilterOp::Is, json!({"id": 55, "type": "Shot"})),
    ];
    let fields = vec![
        "code".to_string(),
        "version_number".to_string(),
        "created_at".to_string(),
    ];

    let descriptor = LatestPublishesQuery.execute(&work_area(), filters.clone(), fields.clone());

    assert_eq!(descriptor.filters, filters);
    assert_eq!(descriptor.fields, fields);
    assert_eq!(descriptor.order, latest_first_order());
    assert_eq!(descriptor.limit, 0);
}

#[test]
fn descriptor_serializes_to_the_find_query_options_shape() {
    let descriptor = LatestPublishesQuery.execute(
        &work_area(),
        vec![FilterClause::condition(
            "project",
            FilterOp::Is,
            json!({"id": 10}),
        )],
        vec!["code".to_string()],
    );

    let value = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        value,
        json!({
            "filters": [["project", "is", {"id": 10}]],
            "fields": ["code"],
            "order": [
                {"field_name": "version_number", "direction": "desc"},
                {"field_name": "created_at", "direction": "desc"},
            ],
            "limit": 0,
        })
    );

    let roundtripped: QueryDescriptor = serde_json::from_value(value).unwrap();
    assert_eq!(roundtripped, descriptor);
}

#[test]
fn empty_inputs_stay_empty() {
    let descriptor = LatestPublishesQuery.execute(&work_area(), Vec::new(), Vec::new());
    assert!(descriptor.filters.is_empty());
    assert!(descriptor.fields.is_empty());
    assert_eq!(descriptor.limit, 0);
}

#[test]
fn derived_hooks_shape_the_same_descriptor() {
    struct ShotScopedPublishes;

    impl PublishQueryHook for ShotScopedPublishes {
        fn extend_filters(&self, context: &Context, filters: &mut Vec<FilterClause>) {
            if let Some(entity) = &context.entity {
                filters.push(FilterClause::condition(
                    "entity",
                    FilterOp::Is,
                    serde_json::to_value(entity).unwrap(),
                ));
            }
        }

        fn limit(&self) -> u32 {
            10
        }
    }

    let descriptor = ShotScopedPublishes.execute(&work_area(), Vec::new(), Vec::new());
    assert_eq!(
        serde_json::to_value(&descriptor.filters).unwrap(),
        json!([["entity", "is", {"id": 55, "type": "Shot"}]])
    );
    assert_eq!(descriptor.limit, 10);
    assert_eq!(descriptor.order, latest_first_order());
}
