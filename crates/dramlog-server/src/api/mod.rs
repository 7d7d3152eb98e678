//! HTTP handlers, one module per resource.
//!
//! The store is synchronous filesystem code, so every handler runs it
//! on the blocking pool with its own store clone.

pub mod admin;
pub mod bottles;
pub mod health;
pub mod reviewers;
pub mod tastings;

use crate::error::ApiError;
use dramlog_store::Store;

/// Run a store operation on the blocking pool.
pub(crate) async fn run_blocking<T, F>(store: &Store, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(Store) -> dramlog_core::Result<T> + Send + 'static,
{
    let store = store.clone();
    let result = tokio::task::spawn_blocking(move || op(store)).await?;
    Ok(result?)
}
