//! Driver Runtime
//!
//! The pipeline is blocking; the Chrome driver is not. Its futures run here,
//! and the CDP event handler lives on the worker threads while the caller
//! blocks on a page operation.

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("matchscrape-driver")
        .enable_all()
        .build()
        .expect("failed to build driver runtime")
});

/// Run a future to completion on the driver runtime.
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    RUNTIME.block_on(future)
}

/// Spawn a background task on the driver runtime.
pub fn spawn<F>(future: F) -> tokio::task::JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    RUNTIME.spawn(future)
}
