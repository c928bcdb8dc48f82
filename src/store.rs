// In-memory task list with positional and id-addressed mutation

use crate::models::{Task, TaskId, now_ms};
use crate::sort::SortOrder;
use tracing::debug;

/// Error type for task-list operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no task with id {0}")]
    NotFound(TaskId),
}

/// Listener invoked with the full list contents after every mutation
pub type RefreshListener = Box<dyn Fn(&[Task])>;

/// Owns the canonical ordered list of tasks.
///
/// Both the primary list view and the search-results view render from this
/// one collection. Views only ever see `&[Task]` or filtered output, never
/// a mutable alias; after any mutation each registered refresh listener is
/// called with the full current contents and observers re-render from that.
///
/// Positions are meaningful only until the next insert, delete, or sort.
/// The `*_at` operations address the current index and fail fast when it is
/// out of range; the id-addressed operations survive interleaved mutation.
#[derive(Default)]
pub struct TodoStore {
    tasks: Vec<Task>,
    listeners: Vec<RefreshListener>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Read-only view of the current contents, in list order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Current position of the identified task, if present
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Register a refresh listener. Every successful mutation invokes each
    /// listener with the full current contents; failed operations do not.
    pub fn on_refresh(&mut self, listener: impl Fn(&[Task]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ========================================================================
    // Positional mutations
    // ========================================================================

    /// Append a task to the end of the list. Duplicate titles and dates are
    /// permitted.
    pub fn add(&mut self, task: Task) {
        debug!(id = %task.id, title = %task.title, "adding task");
        self.tasks.push(task);
        self.notify();
    }

    /// Overwrite the task at `index` with `task`
    pub fn replace_at(&mut self, index: usize, mut task: Task) -> Result<(), TaskError> {
        self.check_index(index)?;
        task.updated_at = now_ms();
        debug!(index, id = %task.id, "replacing task at index");
        self.tasks[index] = task;
        self.notify();
        Ok(())
    }

    /// Delete the task at `index`, shifting later tasks down one position
    pub fn remove_at(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        let task = self.tasks.remove(index);
        debug!(index, id = %task.id, remaining = self.tasks.len(), "removed task");
        self.notify();
        Ok(task)
    }

    /// Flip the favourite flag of the task at `index`; returns the new value
    pub fn toggle_favourite_at(&mut self, index: usize) -> Result<bool, TaskError> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.is_favourite = !task.is_favourite;
        task.updated_at = now_ms();
        let starred = task.is_favourite;
        debug!(index, id = %task.id, starred, "toggled favourite");
        self.notify();
        Ok(starred)
    }

    // ========================================================================
    // Id-addressed mutations
    // ========================================================================

    /// Overwrite the identified task with `task`, keeping its identity.
    ///
    /// The stored `id` and `created_at` survive the edit; `updated_at` is
    /// refreshed.
    pub fn replace(&mut self, id: TaskId, task: Task) -> Result<(), TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        let slot = &mut self.tasks[index];
        let created_at = slot.created_at;
        *slot = task;
        slot.id = id;
        slot.created_at = created_at;
        slot.updated_at = now_ms();
        debug!(%id, index, "replaced task");
        self.notify();
        Ok(())
    }

    /// Delete the identified task
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        let task = self.tasks.remove(index);
        debug!(%id, index, remaining = self.tasks.len(), "removed task");
        self.notify();
        Ok(task)
    }

    /// Flip the favourite flag of the identified task; returns the new value
    pub fn toggle_favourite(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound(id))?;
        let task = &mut self.tasks[index];
        task.is_favourite = !task.is_favourite;
        task.updated_at = now_ms();
        let starred = task.is_favourite;
        debug!(%id, index, starred, "toggled favourite");
        self.notify();
        Ok(starred)
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Reorder the whole list in place according to `order`.
    ///
    /// The sort is stable: tasks with equal keys keep their relative order,
    /// so repeated application with the same order is idempotent.
    pub fn sort_by(&mut self, order: SortOrder) {
        debug!(order = %order, count = self.tasks.len(), "sorting task list");
        self.tasks.sort_by(|a, b| order.compare(a, b));
        self.notify();
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        if index < len {
            Ok(())
        } else {
            Err(TaskError::IndexOutOfRange { index, len })
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn task(title: &str, due_date: &str) -> Task {
        Task::new(title, due_date, "")
    }

    fn seeded_store() -> TodoStore {
        let mut store = TodoStore::new();
        store.add(Task::new("Buy milk", "2024-01-05", "2% from the corner shop"));
        store.add(Task::new("Call bank", "2024-01-01", "ask about the fee"));
        store
    }

    fn titles(store: &TodoStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = seeded_store();
        assert_eq!(store.len(), 2);
        assert_eq!(titles(&store), vec!["Buy milk", "Call bank"]);
    }

    #[test]
    fn test_add_permits_duplicates() {
        let mut store = TodoStore::new();
        store.add(task("Buy milk", "2024-01-05"));
        store.add(task("Buy milk", "2024-01-05"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_at_overwrites() {
        let mut store = seeded_store();
        store.replace_at(1, task("Call landlord", "2024-01-02")).unwrap();
        assert_eq!(titles(&store), vec!["Buy milk", "Call landlord"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_at_out_of_range_leaves_list_unmodified() {
        let mut store = seeded_store();
        let before = titles(&store).join(",");
        let err = store.replace_at(5, task("x", "")).unwrap_err();
        assert!(matches!(err, TaskError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(titles(&store).join(","), before);
    }

    #[test]
    fn test_remove_at_shifts_and_preserves_order() {
        let mut store = seeded_store();
        store.add(task("Water plants", "2024-01-02"));
        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.title, "Call bank");
        assert_eq!(titles(&store), vec!["Buy milk", "Water plants"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = seeded_store();
        assert!(store.remove_at(2).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_toggle_favourite_at_twice_restores() {
        let mut store = seeded_store();
        let snapshot = store.tasks().to_vec();

        assert!(store.toggle_favourite_at(0).unwrap());
        assert!(store.tasks()[0].is_favourite);
        // other task untouched
        assert!(!store.tasks()[1].is_favourite);

        assert!(!store.toggle_favourite_at(0).unwrap());
        for (before, after) in snapshot.iter().zip(store.tasks()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.title, after.title);
            assert_eq!(before.due_date, after.due_date);
            assert_eq!(before.sub_tasks, after.sub_tasks);
            assert_eq!(before.is_favourite, after.is_favourite);
        }
    }

    #[test]
    fn test_toggle_favourite_at_out_of_range() {
        let mut store = TodoStore::new();
        assert!(matches!(
            store.toggle_favourite_at(0),
            Err(TaskError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_sort_by_date_then_remove_scenario() {
        let mut store = seeded_store();
        store.sort_by(SortOrder::DateAscending);
        assert_eq!(titles(&store), vec!["Call bank", "Buy milk"]);

        store.remove_at(0).unwrap();
        assert_eq!(titles(&store), vec!["Buy milk"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for order in SortOrder::ALL {
            let mut store = seeded_store();
            store.add(task("Water plants", "2024-01-02"));
            store.sort_by(order);
            let once = titles(&store).join(",");
            store.sort_by(order);
            assert_eq!(titles(&store).join(","), once, "order {order} not idempotent");
        }
    }

    #[test]
    fn test_name_descending_reverses_ascending_for_distinct_titles() {
        let mut store = seeded_store();
        store.add(task("Water plants", "2024-01-02"));
        store.sort_by(SortOrder::NameAscending);
        let mut ascending = titles(&store).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        store.sort_by(SortOrder::NameDescending);
        let descending = titles(&store).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_stable_sort_keeps_tie_order() {
        let mut store = TodoStore::new();
        store.add(task("Pack lunch", "2024-01-01"));
        store.add(task("Feed cat", "2024-01-01"));
        store.sort_by(SortOrder::DateAscending);
        // equal due dates retain insertion order
        assert_eq!(titles(&store), vec!["Pack lunch", "Feed cat"]);
    }

    #[test]
    fn test_replace_by_id_preserves_identity() {
        let mut store = seeded_store();
        let original = store.tasks()[1].clone();

        store.replace(original.id, task("Call landlord", "2024-01-02")).unwrap();
        let edited = &store.tasks()[1];
        assert_eq!(edited.title, "Call landlord");
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert!(edited.updated_at >= original.updated_at);
    }

    #[test]
    fn test_id_ops_survive_interleaved_mutation() {
        let mut store = seeded_store();
        let call_bank = store.tasks()[1].id;
        // a prior delete shifts positions; the id still hits the right task
        store.remove_at(0).unwrap();
        assert!(store.toggle_favourite(call_bank).unwrap());
        assert_eq!(store.tasks()[0].title, "Call bank");
        assert!(store.tasks()[0].is_favourite);
    }

    #[test]
    fn test_remove_by_unknown_id() {
        let mut store = seeded_store();
        let gone = store.remove_at(0).unwrap();
        let err = store.remove(gone.id).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(id) if id == gone.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_refresh_fires_on_every_successful_mutation() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let mut store = TodoStore::new();
        let sink = Rc::clone(&seen);
        store.on_refresh(move |tasks| sink.borrow_mut().push(tasks.len()));

        store.add(task("Buy milk", "2024-01-05"));
        store.add(task("Call bank", "2024-01-01"));
        store.sort_by(SortOrder::DateAscending);
        store.toggle_favourite_at(0).unwrap();
        store.remove_at(0).unwrap();

        // one signal per mutation, each carrying the full current contents
        assert_eq!(*seen.borrow(), vec![1, 2, 2, 2, 1]);
    }

    #[test]
    fn test_refresh_does_not_fire_on_failed_mutation() {
        let count: Rc<RefCell<usize>> = Rc::default();
        let mut store = TodoStore::new();
        let sink = Rc::clone(&count);
        store.on_refresh(move |_| *sink.borrow_mut() += 1);

        assert!(store.remove_at(0).is_err());
        assert!(store.replace_at(3, task("x", "")).is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_index_of_tracks_positions() {
        let mut store = seeded_store();
        let call_bank = store.tasks()[1].id;
        assert_eq!(store.index_of(call_bank), Some(1));
        store.sort_by(SortOrder::DateAscending);
        assert_eq!(store.index_of(call_bank), Some(0));
    }
}
