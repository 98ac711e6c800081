pub mod publishes;
pub mod user_tasks;

pub use publishes::{LatestPublishesQuery, PublishQueryHook, latest_first_order};
pub use user_tasks::{EXCLUDED_TASK_STATUSES, UserTaskFilter};
