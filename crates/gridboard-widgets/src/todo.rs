#![forbid(unsafe_code)]

//! Task list view.

/// One task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Editable task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        let seeded = [
            ("Review dashboard metrics", false),
            ("Update user documentation", true),
            ("Plan team meeting", false),
            ("Analyze performance data", false),
        ];
        let items: Vec<TodoItem> = seeded
            .into_iter()
            .zip(1..)
            .map(|((text, completed), id)| TodoItem {
                id,
                text: text.to_owned(),
                completed,
            })
            .collect();
        let next_id = items.len() as u64 + 1;
        Self { items, next_id }
    }
}

impl TodoList {
    /// An empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Flip completion of `id`. Returns `false` if no such task.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Append a task. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            text: text.to_owned(),
            completed: false,
        });
        Some(id)
    }

    /// Delete `id`. Returns `false` if no such task.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() < before
    }

    /// Number of open tasks.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// `"3 of 4 tasks remaining"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} tasks remaining", self.remaining(), self.items.len())
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|t| format!("[{}] {}", if t.completed { 'x' } else { ' ' }, t.text))
            .chain(std::iter::once(self.summary()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_tasks() {
        let list = TodoList::default();
        assert_eq!(list.items().len(), 4);
        assert!(list.items()[1].completed);
        assert_eq!(list.summary(), "3 of 4 tasks remaining");
        assert_eq!(list.lines()[1], "[x] Update user documentation");
        assert_eq!(list.lines()[0], "[ ] Review dashboard metrics");
    }

    #[test]
    fn toggle_add_delete() {
        let mut list = TodoList::default();
        assert!(list.toggle(2));
        assert_eq!(list.remaining(), 4);
        assert!(!list.toggle(99));

        assert_eq!(list.add("   "), None);
        let id = list.add("  Ship it ").unwrap();
        assert_eq!(id, 5);
        assert_eq!(list.items().last().unwrap().text, "Ship it");
        assert_eq!(list.summary(), "5 of 5 tasks remaining");

        assert!(list.delete(1));
        assert!(!list.delete(1));
        assert_eq!(list.summary(), "4 of 4 tasks remaining");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut list = TodoList::empty();
        let a = list.add("a").unwrap();
        list.delete(a);
        let b = list.add("b").unwrap();
        assert_ne!(a, b);
        assert_eq!(list.lines(), ["[ ] b", "1 of 1 tasks remaining"]);
    }
}
