//! Command-line front end for the todo API.
//!
//! ```text
//! todo-master-cli                          # print the list
//! todo-master-cli Buy milk                 # add "Buy milk", then print the list
//! todo-master-cli --filter active          # print only active todos
//! todo-master-cli --search milk Buy bread  # add "Buy bread", print titles containing "milk"
//! ```
//!
//! The server is read from `TODO_API_URL` (default `http://127.0.0.1:3000/api`).

use todo_master_ui::{CliArgs, HttpTodoClient, TodoList};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let client = HttpTodoClient::from_env();
    tracing::info!(api_url = client.api_url(), "Using todo API");

    let mut list = TodoList::new(client);
    list.set_filter(args.filter);
    if let Some(search) = args.search {
        list.set_search(search);
    }
    list.load().await;

    if !args.title.trim().is_empty() {
        list.set_new_todo(args.title);
        list.add().await;
    }

    for todo in list.visible() {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {}  ({})", todo.title, todo.id);
    }

    let counts = list.counts();
    println!(
        "{} total, {} active, {} completed",
        counts.total, counts.active, counts.completed
    );

    let error = &list.state().error;
    if error.is_empty() {
        Ok(())
    } else {
        Err(error.clone().into())
    }
}
