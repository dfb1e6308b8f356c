pub mod memory_watcher_service;
pub mod pg_watcher_service;
pub mod watcher_service;

pub use memory_watcher_service::InMemoryWatcherService;
pub use pg_watcher_service::PgWatcherService;
pub use watcher_service::{WatcherError, WatcherService};
