//! Insertion-ordered record table.

use std::collections::HashMap;

use uuid::Uuid;

use ttrave_core::storage::{DeletePolicy, Deletable, Record};

/// Rows of one kind, keyed by ID, iterated in insertion order.
#[derive(Debug, Clone)]
pub(super) struct Table<T> {
    rows: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn get(&self, id: Uuid) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Stores a row and returns a copy of it.
    pub fn insert(&mut self, row: T) -> T {
        let id = row.id();
        if self.rows.insert(id, row.clone()).is_none() {
            self.order.push(id);
        }
        row
    }

    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// First row in insertion order matching the predicate.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .find(|row| predicate(row))
            .cloned()
    }

    /// Mutates a row in place and returns the updated copy.
    pub fn modify(&mut self, id: Uuid, change: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        change(row);
        Some(row.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        if self.rows.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Deletable> Table<T> {
    /// Deletes according to the kind's [`DeletePolicy`].
    pub fn delete(&mut self, id: Uuid) -> bool {
        match T::DELETE_POLICY {
            DeletePolicy::Soft => self.modify(id, T::deactivate).is_some(),
            DeletePolicy::Hard => self.remove(id),
        }
    }
}
