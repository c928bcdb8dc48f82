// TodoStore - In-memory to-do list management with search, sort and starring

pub mod config;
pub mod filter;
pub mod models;
pub mod sort;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use filter::SearchQuery;
pub use models::{Task, TaskId, now_ms};
pub use sort::SortOrder;
pub use store::{TaskError, TodoStore};
