//! The to-do record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One task. Immutable value object: created on insert, removed on delete,
/// never mutated in place.
///
/// Wire names are camelCase (`dueDate`, `isCompleted`). The id is
/// caller-supplied and the store does not enforce uniqueness — see
/// [`TaskStore`](crate::store::TaskStore).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: i64,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}
