//! The in-memory task store.
//!
//! `TaskStore` owns every [`ToDo`] for the lifetime of the process. Nothing is
//! persisted; a restart starts empty. A mutex guards the record list because
//! hyper serves each connection on its own tokio task — without it,
//! simultaneous creates and deletes would race on the shared `Vec`.
//!
//! The store deliberately does **not** enforce id uniqueness on insert.
//! Callers own that invariant; [`TaskStore::get`] reports a violation as
//! [`DuplicateId`] when it finds more than one match.

use std::sync::Mutex;

use thiserror::Error;

use crate::model::ToDo;

/// Lookup found more than one record with the requested id.
///
/// `get` is defined only for at-most-one match, so this is an invariant
/// violation, not a routine error.
#[derive(Debug, Error, PartialEq)]
#[error("more than one to-do with id {0}")]
pub struct DuplicateId(pub i64);

/// The authoritative in-memory collection of to-do records.
pub struct TaskStore {
    todos: Mutex<Vec<ToDo>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { todos: Mutex::new(Vec::new()) }
    }

    /// Returns the single record whose id matches, `None` when there is none,
    /// and [`DuplicateId`] when there is more than one.
    pub fn get(&self, id: i64) -> Result<Option<ToDo>, DuplicateId> {
        let todos = self.lock();
        let mut matches = todos.iter().filter(|todo| todo.id == id);
        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(DuplicateId(id));
        }
        Ok(first)
    }

    /// Every record, in insertion order. No filtering, no pagination.
    pub fn list(&self) -> Vec<ToDo> {
        self.lock().clone()
    }

    /// Appends the record unmodified — no id regeneration, no uniqueness
    /// check — and echoes it back.
    pub fn add(&self, todo: ToDo) -> ToDo {
        self.lock().push(todo.clone());
        todo
    }

    /// Removes every record with the given id. Silently succeeds when none
    /// match; delete is not "delete one".
    pub fn delete(&self, id: i64) {
        self.lock().retain(|todo| todo.id != id);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ToDo>> {
        // Poisoning is unreachable: no code path panics while holding the lock.
        self.todos.lock().expect("task store mutex poisoned")
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn todo(id: i64, name: &str) -> ToDo {
        ToDo {
            id,
            name: name.to_owned(),
            due_date: Utc::now() + Duration::days(1),
            is_completed: false,
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = TaskStore::new();
        store.add(todo(3, "c"));
        store.add(todo(1, "a"));
        store.add(todo(2, "b"));

        let ids: Vec<i64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn add_echoes_the_record_unmodified() {
        let store = TaskStore::new();
        let input = todo(9, "echo");
        let echoed = store.add(input.clone());
        assert_eq!(echoed, input);
    }

    #[test]
    fn get_finds_exactly_one_match() {
        let store = TaskStore::new();
        store.add(todo(1, "one"));
        store.add(todo(2, "two"));

        let found = store.get(2).unwrap().unwrap();
        assert_eq!(found.name, "two");
    }

    #[test]
    fn get_returns_none_when_absent() {
        let store = TaskStore::new();
        assert_eq!(store.get(999), Ok(None));
    }

    #[test]
    fn get_rejects_duplicate_ids() {
        let store = TaskStore::new();
        store.add(todo(5, "first"));
        store.add(todo(5, "second"));

        assert_eq!(store.get(5), Err(DuplicateId(5)));
    }

    #[test]
    fn delete_removes_all_matches() {
        let store = TaskStore::new();
        store.add(todo(1, "keep"));
        store.add(todo(2, "drop"));
        store.add(todo(2, "drop too"));

        store.delete(2);

        let ids: Vec<i64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn delete_of_absent_id_is_a_noop() {
        let store = TaskStore::new();
        store.add(todo(1, "only"));
        store.delete(42);
        assert_eq!(store.len(), 1);
    }
}
