//! Create-time validation policy.
//!
//! Two rules, evaluated independently — a request violating both gets both
//! errors back in one response. The clock is passed in rather than read here
//! so the policy stays deterministic under test.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::ToDo;

pub const PAST_DATE: &str = "Please note that a past date is invalid.";
pub const ALREADY_COMPLETED: &str = "Please note that a completed todo is invalid.";

/// Field-keyed validation errors. BTreeMap keeps the serialized body stable.
pub type FieldErrors = BTreeMap<&'static str, Vec<&'static str>>;

/// Checks a create payload against the policy. Empty map means accept.
///
/// - `dueDate` strictly before `now` is rejected.
/// - a record arriving already completed is rejected.
pub fn check_create(todo: &ToDo, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if todo.due_date < now {
        errors.insert("dueDate", vec![PAST_DATE]);
    }
    if todo.is_completed {
        errors.insert("isCompleted", vec![ALREADY_COMPLETED]);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn todo(due_date: DateTime<Utc>, is_completed: bool) -> ToDo {
        ToDo { id: 1, name: "test".to_owned(), due_date, is_completed }
    }

    #[test]
    fn accepts_future_incomplete_todo() {
        let now = Utc::now();
        let errors = check_create(&todo(now + Duration::days(1), false), now);
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_past_due_date() {
        let now = Utc::now();
        let errors = check_create(&todo(now - Duration::days(1), false), now);
        assert_eq!(errors.get("dueDate"), Some(&vec![PAST_DATE]));
        assert!(!errors.contains_key("isCompleted"));
    }

    #[test]
    fn rejects_already_completed() {
        let now = Utc::now();
        let errors = check_create(&todo(now + Duration::days(1), true), now);
        assert_eq!(errors.get("isCompleted"), Some(&vec![ALREADY_COMPLETED]));
        assert!(!errors.contains_key("dueDate"));
    }

    #[test]
    fn reports_both_violations_together() {
        let now = Utc::now();
        let errors = check_create(&todo(now - Duration::hours(1), true), now);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn due_date_equal_to_now_is_accepted() {
        // The rule is strictly-before: an exactly-now due date passes.
        let now = Utc::now();
        let errors = check_create(&todo(now, false), now);
        assert!(errors.is_empty());
    }
}
