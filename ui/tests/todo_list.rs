//! Behaviour of the client-side todo list against a live service.
//!
//! `ServiceApi` answers through a real `TodoService`, so rejections carry the
//! same messages the HTTP layer would send.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_master_core::{InMemoryTodoRepository, Todo, TodoError, TodoId, TodoPatch, TodoService};
use todo_master_testing::{FailingTodoRepository, test_environment, test_service};
use todo_master_ui::{ClientError, ClientFuture, FilterMode, TodoApi, TodoCounts, TodoList};

struct ServiceApi {
    service: TodoService,
    offline: AtomicBool,
}

impl ServiceApi {
    fn new(service: TodoService) -> Self {
        Self {
            service,
            offline: AtomicBool::new(false),
        }
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), ClientError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ClientError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn rejected(err: TodoError) -> ClientError {
    let (status, message) = match err {
        TodoError::Validation(errors) => (400, errors.into_iter().next()),
        TodoError::MissingId => (400, Some("Todo ID is required".to_string())),
        TodoError::NotFound => (404, Some("Todo not found".to_string())),
        TodoError::Repository(_) => (500, None),
    };
    ClientError::Rejected { status, message }
}

impl TodoApi for ServiceApi {
    fn list(&self) -> ClientFuture<'_, Vec<Todo>> {
        Box::pin(async move {
            self.check_online()?;
            self.service.list().await.map_err(rejected)
        })
    }

    fn create(&self, title: String) -> ClientFuture<'_, Todo> {
        Box::pin(async move {
            self.check_online()?;
            self.service.create(Some(&title)).await.map_err(rejected)
        })
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> ClientFuture<'_, Todo> {
        Box::pin(async move {
            self.check_online()?;
            self.service
                .update(Some(id.as_str()), patch)
                .await
                .map_err(rejected)
        })
    }

    fn delete(&self, id: TodoId) -> ClientFuture<'_, ()> {
        Box::pin(async move {
            self.check_online()?;
            self.service
                .delete(Some(id.as_str()))
                .await
                .map_err(rejected)
        })
    }
}

/// Loaded list over a service holding "Buy milk" (id 1, active),
/// "Milk the cow" (id 2, completed), and "Walk the dog" (id 3, active).
async fn loaded_list() -> (TodoList<ServiceApi>, InMemoryTodoRepository) {
    let (service, repo) = test_service();
    service.create(Some("Buy milk")).await.unwrap();
    service.create(Some("Milk the cow")).await.unwrap();
    service.create(Some("Walk the dog")).await.unwrap();
    service
        .update(Some("2"), TodoPatch::completed(true))
        .await
        .unwrap();

    let mut list = TodoList::new(ServiceApi::new(service));
    list.load().await;
    (list, repo)
}

fn titles(todos: &[&Todo]) -> Vec<String> {
    todos.iter().map(|t| t.title.clone()).collect()
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn new_list_starts_loading() {
    let (service, _repo) = test_service();
    let list = TodoList::new(ServiceApi::new(service));

    assert!(list.state().loading);
    assert!(list.state().todos.is_empty());
    assert_eq!(list.state().filter, FilterMode::All);
}

#[tokio::test]
async fn load_populates_list() {
    let (list, _repo) = loaded_list().await;

    assert!(!list.state().loading);
    assert!(list.state().error.is_empty());
    assert_eq!(list.state().todos.len(), 3);
}

#[tokio::test]
async fn load_transport_failure() {
    let (service, _repo) = test_service();
    let api = ServiceApi::new(service);
    api.set_offline(true);
    let mut list = TodoList::new(api);

    list.load().await;

    assert!(!list.state().loading);
    assert_eq!(list.state().error, "Error fetching todos");
}

#[tokio::test]
async fn load_rejected_by_server() {
    let service = TodoService::new(Arc::new(FailingTodoRepository), test_environment());
    let mut list = TodoList::new(ServiceApi::new(service));

    list.load().await;

    assert!(!list.state().loading);
    assert_eq!(list.state().error, "Failed to fetch todos");
    assert!(list.state().todos.is_empty());
}

// ============================================================================
// Adding
// ============================================================================

#[tokio::test]
async fn add_prepends_and_clears_input() {
    let (mut list, repo) = loaded_list().await;

    list.set_new_todo("Call mom");
    list.add().await;

    assert_eq!(list.state().todos[0].title, "Call mom");
    assert_eq!(list.state().todos.len(), 4);
    assert!(list.state().new_todo.is_empty());
    assert!(list.state().error.is_empty());
    assert_eq!(repo.len(), 4);
}

#[tokio::test]
async fn add_ignores_blank_input() {
    let (mut list, repo) = loaded_list().await;
    let before = list.state().clone();

    list.set_new_todo("   ");
    list.add().await;

    assert_eq!(list.state().todos, before.todos);
    assert_eq!(list.state().new_todo, "   ");
    assert_eq!(repo.len(), 3);
}

#[tokio::test]
async fn add_shows_server_validation_message() {
    let (mut list, repo) = loaded_list().await;
    let title = "a".repeat(101);

    list.set_new_todo(title.clone());
    list.add().await;

    let message = "Title must be less than 100 characters";
    assert_eq!(list.state().error, message);
    assert_eq!(list.state().new_todo, title);
    assert_eq!(list.state().todos.len(), 3);
    assert_eq!(repo.len(), 3);
}

#[tokio::test]
async fn add_rejected_without_message_uses_fallback() {
    let service = TodoService::new(Arc::new(FailingTodoRepository), test_environment());
    let mut list = TodoList::new(ServiceApi::new(service));

    list.set_new_todo("Buy milk");
    list.add().await;

    assert_eq!(list.state().error, "Failed to add todo");
}

#[tokio::test]
async fn add_transport_failure() {
    let (mut list, _repo) = loaded_list().await;
    list.api().set_offline(true);

    list.set_new_todo("Call mom");
    list.add().await;

    assert_eq!(list.state().error, "Error adding todo");
    assert_eq!(list.state().new_todo, "Call mom");
}

#[tokio::test]
async fn successful_add_clears_previous_error() {
    let (mut list, _repo) = loaded_list().await;
    list.api().set_offline(true);
    list.set_new_todo("Call mom");
    list.add().await;
    assert!(!list.state().error.is_empty());

    list.api().set_offline(false);
    list.add().await;

    assert!(list.state().error.is_empty());
    assert_eq!(list.state().todos[0].title, "Call mom");
}

// ============================================================================
// Toggling
// ============================================================================

#[tokio::test]
async fn toggle_updates_list_and_selection() {
    let (mut list, _repo) = loaded_list().await;
    let id = TodoId::new("1");
    assert!(list.select(&id));

    list.toggle(&id).await;

    let todo = list.state().todos.iter().find(|t| t.id == id).unwrap();
    assert!(todo.completed);
    assert!(list.state().selected.as_ref().unwrap().completed);

    list.toggle(&id).await;
    assert!(!list.state().selected.as_ref().unwrap().completed);
}

#[tokio::test]
async fn toggle_leaves_other_selection_alone() {
    let (mut list, _repo) = loaded_list().await;
    list.select(&TodoId::new("3"));

    list.toggle(&TodoId::new("1")).await;

    let selected = list.state().selected.as_ref().unwrap();
    assert_eq!(selected.id, TodoId::new("3"));
    assert!(!selected.completed);
}

#[tokio::test]
async fn toggle_of_todo_gone_from_server() {
    let (mut list, repo) = loaded_list().await;
    let id = TodoId::new("1");
    todo_master_core::TodoRepository::delete(&repo, id.clone())
        .await
        .unwrap();

    list.toggle(&id).await;

    assert_eq!(list.state().error, "Failed to update todo");
    let todo = list.state().todos.iter().find(|t| t.id == id).unwrap();
    assert!(!todo.completed);
}

#[tokio::test]
async fn toggle_transport_failure() {
    let (mut list, _repo) = loaded_list().await;
    list.api().set_offline(true);

    list.toggle(&TodoId::new("1")).await;

    assert_eq!(list.state().error, "Error updating todo");
}

// ============================================================================
// Deleting
// ============================================================================

#[tokio::test]
async fn delete_removes_and_clears_selection() {
    let (mut list, repo) = loaded_list().await;
    let id = TodoId::new("2");
    list.select(&id);

    list.delete(&id).await;

    assert!(list.state().todos.iter().all(|t| t.id != id));
    assert!(list.state().selected.is_none());
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn delete_keeps_unrelated_selection() {
    let (mut list, _repo) = loaded_list().await;
    list.select(&TodoId::new("3"));

    list.delete(&TodoId::new("1")).await;

    let selected = list.state().selected.as_ref().unwrap();
    assert_eq!(selected.id, TodoId::new("3"));
}

#[tokio::test]
async fn delete_of_unknown_todo() {
    let (mut list, _repo) = loaded_list().await;

    list.delete(&TodoId::new("999")).await;

    assert_eq!(list.state().error, "Failed to delete todo");
    assert_eq!(list.state().todos.len(), 3);
}

#[tokio::test]
async fn delete_transport_failure() {
    let (mut list, _repo) = loaded_list().await;
    list.api().set_offline(true);

    list.delete(&TodoId::new("1")).await;

    assert_eq!(list.state().error, "Error deleting todo");
    assert_eq!(list.state().todos.len(), 3);
}

// ============================================================================
// Selection, filtering, counts
// ============================================================================

#[tokio::test]
async fn select_unknown_id_clears_selection() {
    let (mut list, _repo) = loaded_list().await;
    list.select(&TodoId::new("1"));

    assert!(!list.select(&TodoId::new("999")));
    assert!(list.state().selected.is_none());

    list.select(&TodoId::new("1"));
    list.clear_selection();
    assert!(list.state().selected.is_none());
}

#[tokio::test]
async fn search_and_filter_combine() {
    let (mut list, _repo) = loaded_list().await;

    list.set_search("milk");
    assert_eq!(titles(&list.visible()), ["Buy milk", "Milk the cow"]);

    list.set_filter(FilterMode::Active);
    assert_eq!(titles(&list.visible()), ["Buy milk"]);

    list.set_filter(FilterMode::Completed);
    assert_eq!(titles(&list.visible()), ["Milk the cow"]);

    list.set_search("");
    list.set_filter(FilterMode::All);
    assert_eq!(list.visible().len(), 3);
}

#[tokio::test]
async fn counts_ignore_filter_and_search() {
    let (mut list, _repo) = loaded_list().await;
    list.set_filter(FilterMode::Completed);
    list.set_search("dog");

    assert_eq!(
        list.counts(),
        TodoCounts {
            total: 3,
            active: 2,
            completed: 1
        }
    );
}

#[tokio::test]
async fn boxed_api_drives_list() {
    let (service, _repo) = test_service();
    let api: Box<dyn TodoApi> = Box::new(ServiceApi::new(service));
    let mut list = TodoList::new(api);

    list.set_new_todo("Buy milk");
    list.add().await;

    assert_eq!(list.counts().total, 1);
}
