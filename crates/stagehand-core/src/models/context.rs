use serde::{Deserialize, Serialize};

use crate::models::EntityRef;

/// The project/entity scope the host application is operating in. Only the
/// project is consumed by this layer; the entity rides along for derived
/// hook configurations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub project: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub entity: Option<EntityRef>,
}

impl Context {
    pub fn for_project(project: EntityRef) -> Self {
        Self {
            project,
            entity: None,
        }
    }
}
