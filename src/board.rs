//! Board State
//!
//! Pure in-memory state for the three-column board. Keeps the per-column
//! ordered lists together with an id-to-column index so every lookup and
//! mutation is resolved without scanning all columns; the index is updated
//! in the same call as the lists.

use std::collections::HashMap;

use crate::models::{Column, Todo};

/// Tasks partitioned by column.
///
/// Invariant: each task id appears in exactly one column list, and the index
/// maps it to that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boards {
    lists: [Vec<Todo>; 3],
    index: HashMap<i64, Column>,
}

impl Boards {
    /// Partition a server response into columns, preserving response order
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let mut boards = Self::default();
        for todo in todos {
            boards.push(todo);
        }
        boards
    }

    /// Tasks currently in one column, in display order
    pub fn tasks(&self, column: Column) -> &[Todo] {
        &self.lists[column.index()]
    }

    /// Column currently holding the task, if it exists
    pub fn column_of(&self, id: i64) -> Option<Column> {
        self.index.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Append a task to its own column's list
    pub fn push(&mut self, todo: Todo) {
        self.index.insert(todo.id, todo.column);
        self.lists[todo.column.index()].push(todo);
    }

    /// Replace the content of one task in place; unknown ids are a no-op
    pub fn edit(&mut self, id: i64, content: &str) -> bool {
        let Some(column) = self.column_of(id) else {
            return false;
        };
        match self.lists[column.index()].iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Move a task to the end of the target column's list.
    ///
    /// Dropping a task on the column it is already in re-appends it at the
    /// end, matching what the user sees happen. Unknown ids are a no-op.
    pub fn move_to(&mut self, id: i64, target: Column) -> bool {
        let Some(mut task) = self.take(id) else {
            return false;
        };
        task.column = target;
        self.push(task);
        true
    }

    /// Remove a task from whichever column holds it
    pub fn remove(&mut self, id: i64) -> Option<Todo> {
        self.take(id)
    }

    fn take(&mut self, id: i64) -> Option<Todo> {
        let column = self.index.remove(&id)?;
        let list = &mut self.lists[column.index()];
        let position = list.iter().position(|t| t.id == id)?;
        Some(list.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: i64, content: &str, column: Column) -> Todo {
        Todo {
            id,
            content: content.to_string(),
            done: false,
            column,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample_boards() -> Boards {
        Boards::from_todos(vec![
            make_todo(1, "Buy milk", Column::Todo),
            make_todo(2, "Write report", Column::Todo),
            make_todo(3, "Review PR", Column::Doing),
            make_todo(4, "Ship release", Column::Done),
        ])
    }

    #[test]
    fn test_load_partitions_by_column() {
        let boards = sample_boards();

        assert_eq!(boards.tasks(Column::Todo).len(), 2);
        assert_eq!(boards.tasks(Column::Doing).len(), 1);
        assert_eq!(boards.tasks(Column::Done).len(), 1);
        assert_eq!(boards.len(), 4);
        assert_eq!(boards.column_of(3), Some(Column::Doing));
    }

    #[test]
    fn test_push_appends_to_own_column() {
        let mut boards = Boards::default();
        boards.push(make_todo(9, "Buy milk", Column::Todo));

        assert_eq!(boards.tasks(Column::Todo).len(), 1);
        assert!(boards.tasks(Column::Doing).is_empty());
        assert!(boards.tasks(Column::Done).is_empty());
        assert_eq!(boards.column_of(9), Some(Column::Todo));
    }

    #[test]
    fn test_move_places_task_in_exactly_one_column() {
        let mut boards = sample_boards();
        assert!(boards.move_to(1, Column::Doing));

        assert_eq!(boards.column_of(1), Some(Column::Doing));
        assert!(boards.tasks(Column::Todo).iter().all(|t| t.id != 1));
        let moved = boards.tasks(Column::Doing).last().expect("missing task");
        assert_eq!(moved.id, 1);
        assert_eq!(moved.column, Column::Doing);
        assert_eq!(boards.len(), 4);
    }

    #[test]
    fn test_move_to_same_column_reappends_at_end() {
        let mut boards = sample_boards();
        assert!(boards.move_to(1, Column::Todo));

        let ids: Vec<i64> = boards.tasks(Column::Todo).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut boards = sample_boards();
        let before = boards.clone();

        assert!(!boards.move_to(99, Column::Done));
        assert_eq!(boards, before);
    }

    #[test]
    fn test_edit_updates_exactly_one_task() {
        let mut boards = sample_boards();
        assert!(boards.edit(1, "Buy oat milk"));

        assert_eq!(boards.tasks(Column::Todo)[0].content, "Buy oat milk");
        assert_eq!(boards.tasks(Column::Todo)[1].content, "Write report");
        assert_eq!(boards.tasks(Column::Doing)[0].content, "Review PR");
        // editing does not change the column
        assert_eq!(boards.column_of(1), Some(Column::Todo));
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut boards = sample_boards();
        let before = boards.clone();

        assert!(!boards.edit(99, "nope"));
        assert_eq!(boards, before);
    }

    #[test]
    fn test_remove_clears_task_from_all_lists() {
        let mut boards = sample_boards();
        let removed = boards.remove(3).expect("task should exist");

        assert_eq!(removed.id, 3);
        assert_eq!(boards.len(), 3);
        assert_eq!(boards.column_of(3), None);
        for column in Column::ALL {
            assert!(boards.tasks(column).iter().all(|t| t.id != 3));
        }
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut boards = sample_boards();
        assert!(boards.remove(99).is_none());
        assert_eq!(boards.len(), 4);
    }

    #[test]
    fn test_example_scenario() {
        // Add to an empty board, move it, edit it, trash it.
        let mut boards = Boards::default();
        boards.push(make_todo(1, "Buy milk", Column::Todo));
        assert_eq!(boards.tasks(Column::Todo).len(), 1);
        assert!(boards.tasks(Column::Doing).is_empty() && boards.tasks(Column::Done).is_empty());

        boards.move_to(1, Column::Doing);
        assert!(boards.tasks(Column::Todo).is_empty());
        assert_eq!(boards.column_of(1), Some(Column::Doing));

        boards.edit(1, "Buy oat milk");
        assert_eq!(boards.tasks(Column::Doing)[0].content, "Buy oat milk");
        assert_eq!(boards.column_of(1), Some(Column::Doing));

        boards.remove(1);
        assert!(boards.is_empty());
    }
}
