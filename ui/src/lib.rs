//! Client side of Todo Master.
//!
//! - [`TodoList`] - the state behind a todo screen and the actions on it
//! - [`TodoApi`] / [`HttpTodoClient`] - how that state reaches the server
//! - [`FilterMode`], [`TodoCounts`] - view helpers over the local list
//!
//! # Example
//!
//! ```ignore
//! use todo_master_ui::{HttpTodoClient, TodoList};
//!
//! let mut list = TodoList::new(HttpTodoClient::new("http://127.0.0.1:3000/api"));
//! list.load().await;
//! list.set_new_todo("Buy milk");
//! list.add().await;
//! println!("{} active", list.counts().active);
//! ```

pub mod cli;
pub mod client;
pub mod filter;
pub mod list;

pub use cli::{CliArgs, CliError};
pub use client::{ClientError, ClientFuture, DEFAULT_API_URL, HttpTodoClient, TodoApi};
pub use filter::{FilterMode, ParseFilterModeError, TodoCounts, visible_todos};
pub use list::{TodoList, TodoListState};
