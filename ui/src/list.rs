//! Client-side todo list.
//!
//! [`TodoList`] holds what a todo screen shows and performs each user action
//! against a [`TodoApi`]. Local state changes only after the server confirms;
//! failures leave the list as it was and set a user-facing error message.

use crate::client::{ClientError, TodoApi};
use crate::filter::{FilterMode, TodoCounts, visible_todos};
use todo_master_core::{Todo, TodoId, TodoPatch};

/// Everything the todo screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoListState {
    /// Todos as last confirmed by the server, newest additions first
    pub todos: Vec<Todo>,
    /// Contents of the "new todo" input
    pub new_todo: String,
    /// `true` until the initial fetch settles
    pub loading: bool,
    /// User-facing error message; empty when there is none
    pub error: String,
    /// Todo shown in the detail panel
    pub selected: Option<Todo>,
    /// Active filter
    pub filter: FilterMode,
    /// Search text matched against titles
    pub search: String,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            new_todo: String::new(),
            loading: true,
            error: String::new(),
            selected: None,
            filter: FilterMode::All,
            search: String::new(),
        }
    }
}

/// A todo list bound to an API client.
#[derive(Debug)]
pub struct TodoList<A> {
    api: A,
    state: TodoListState,
}

impl<A: TodoApi> TodoList<A> {
    /// Create a list in its initial loading state. Call [`TodoList::load`] next.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TodoListState::default(),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TodoListState {
        &self.state
    }

    /// The API client
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Fetch all todos, replacing the local list.
    ///
    /// `loading` is `false` afterwards whatever the outcome.
    pub async fn load(&mut self) {
        let result = self.api.list().await;
        match result {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "Loaded todos");
                self.state.todos = todos;
            }
            Err(err) => self.fail(&err, "Failed to fetch todos", "Error fetching todos"),
        }
        self.state.loading = false;
    }

    /// Set the "new todo" input.
    pub fn set_new_todo(&mut self, text: impl Into<String>) {
        self.state.new_todo = text.into();
    }

    /// Submit the "new todo" input.
    ///
    /// Blank input is ignored without contacting the server. On success the
    /// new todo is placed first and the input and error are cleared. On
    /// rejection the error is the server's first message, if it sent one.
    pub async fn add(&mut self) {
        if self.state.new_todo.trim().is_empty() {
            return;
        }

        let result = self.api.create(self.state.new_todo.clone()).await;
        match result {
            Ok(todo) => {
                tracing::debug!(id = %todo.id, "Added todo");
                self.state.todos.insert(0, todo);
                self.state.new_todo.clear();
                self.state.error.clear();
            }
            Err(ClientError::Rejected {
                message: Some(message),
                ..
            }) => self.state.error = message,
            Err(err) => self.fail(&err, "Failed to add todo", "Error adding todo"),
        }
    }

    /// Flip the completion flag of the todo with `id`.
    ///
    /// Does nothing if `id` is not in the local list.
    pub async fn toggle(&mut self, id: &TodoId) {
        let Some(completed) = self.find(id).map(|todo| todo.completed) else {
            return;
        };

        let result = self
            .api
            .update(id.clone(), TodoPatch::completed(!completed))
            .await;
        match result {
            Ok(updated) => {
                if let Some(todo) = self.state.todos.iter_mut().find(|t| &t.id == id) {
                    *todo = updated.clone();
                }
                if let Some(selected) = self.state.selected.as_mut().filter(|s| &s.id == id) {
                    *selected = updated;
                }
            }
            Err(err) => self.fail(&err, "Failed to update todo", "Error updating todo"),
        }
    }

    /// Delete the todo with `id`, clearing the selection if it was selected.
    pub async fn delete(&mut self, id: &TodoId) {
        let result = self.api.delete(id.clone()).await;
        match result {
            Ok(()) => {
                self.state.todos.retain(|todo| &todo.id != id);
                if self.state.selected.as_ref().is_some_and(|s| &s.id == id) {
                    self.state.selected = None;
                }
            }
            Err(err) => self.fail(&err, "Failed to delete todo", "Error deleting todo"),
        }
    }

    /// Show the todo with `id` in the detail panel.
    ///
    /// Returns `false` if `id` is not in the local list.
    pub fn select(&mut self, id: &TodoId) -> bool {
        let found = self.find(id).cloned();
        let selected = found.is_some();
        self.state.selected = found;
        selected
    }

    /// Close the detail panel.
    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }

    /// Change the active filter.
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.state.filter = filter;
    }

    /// Change the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
    }

    /// Todos passing the current filter and search, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        visible_todos(&self.state.todos, self.state.filter, &self.state.search)
    }

    /// Counts over the whole list, ignoring filter and search.
    #[must_use]
    pub fn counts(&self) -> TodoCounts {
        TodoCounts::of(&self.state.todos)
    }

    fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.state.todos.iter().find(|todo| &todo.id == id)
    }

    /// Record a failed action: rejections get `rejected`, everything else `transport`.
    fn fail(&mut self, err: &ClientError, rejected: &str, transport: &str) {
        tracing::warn!(error = %err, "Todo action failed");
        self.state.error = match err {
            ClientError::Rejected { .. } => rejected,
            ClientError::Transport(_) | ClientError::Decode(_) => transport,
        }
        .to_string();
    }
}
