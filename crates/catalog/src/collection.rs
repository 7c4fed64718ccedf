use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::Entity;

/// Ordered, lock-guarded sequence of entities acting as one table.
///
/// Rows keep insertion order. Lookups are linear scans; at catalog scale an
/// index would not pay for itself.
#[derive(Debug)]
pub struct Collection<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::from_rows(Vec::new())
    }

    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds a consistent sequence.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Append a row at the end of the sequence.
    pub fn push(&self, row: T) {
        self.write().push(row);
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T>
where
    T: Entity + Clone,
{
    /// Snapshot of every row, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    /// Snapshot of the rows matching `pred`, preserving relative order.
    pub fn list_where(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().iter().filter(|row| pred(row)).cloned().collect()
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.read().iter().find(|row| row.id() == id).cloned()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.read().iter().any(|row| row.id() == id)
    }

    /// Apply `change` to the first row with `id` and return the updated row.
    ///
    /// Returns `None` (and touches nothing) when no row matches.
    pub fn update(&self, id: &T::Id, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.write();
        let row = rows.iter_mut().find(|row| row.id() == id)?;
        change(row);
        Some(row.clone())
    }

    /// Remove the first row with `id`, keeping the order of the rest.
    pub fn remove(&self, id: &T::Id) -> Option<T> {
        let mut rows = self.write();
        let idx = rows.iter().position(|row| row.id() == id)?;
        Some(rows.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    fn rows() -> Collection<Row> {
        Collection::from_rows(vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ])
    }

    #[test]
    fn remove_keeps_relative_order() {
        let table = rows();
        let removed = table.remove(&2).unwrap();
        assert_eq!(removed.label, "b");

        let ids: Vec<_> = table.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_is_none_and_leaves_rows() {
        let table = rows();
        assert!(table.remove(&42).is_none());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn update_missing_does_not_run_change() {
        let table = rows();
        let before = table.list();
        let out = table.update(&42, |_| panic!("must not be called"));
        assert!(out.is_none());
        assert_eq!(table.list(), before);
    }

    #[test]
    fn update_is_in_place() {
        let table = rows();
        let updated = table.update(&3, |r| r.label = "z").unwrap();
        assert_eq!(updated, Row { id: 3, label: "z" });
        assert_eq!(table.list()[2], updated);
    }

    #[test]
    fn list_where_preserves_order() {
        let table = rows();
        let odd: Vec<_> = table.list_where(|r| r.id % 2 == 1).into_iter().map(|r| r.id).collect();
        assert_eq!(odd, vec![1, 3]);
    }
}
