//! Tokio Runtime Bridge
//!
//! The store and the controllers are plain synchronous code; fetches run on a
//! process-wide tokio runtime. Fire-and-forget refreshes are spawned here, and
//! the binary blocks on it during startup.
//!
//! ## Pattern
//!
//! ```text
//! controller (sync)
//!       │
//!       ▼
//! spawn_named_in_tokio("refresh", store.fetch_vehicles())
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! store state updated, subscribers notified
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task with a name (for debugging)
///
/// The task runs independently and its result is not awaited.
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}

/// Block on a future synchronously (use sparingly, mainly for initialization)
///
/// **Warning**: This blocks the current thread and panics when called from
/// inside an async context.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
