//! # Background Runtime
//!
//! egui owns the main thread and never polls futures, but reqwest needs a
//! tokio context. Every network task is spawned onto this runtime and reports
//! back through the app event channel.
//!
//! ```rust,ignore
//! use swap_client::utils::runtime::spawn;
//!
//! spawn(async move {
//!     let result = api.list_swap_requests().await;
//!     let _ = event_tx.send(AppEvent::SwapRequestsLoaded { epoch, result: result.map_err(|e| e.to_string()) }).await;
//! });
//! ```

use once_cell::sync::Lazy;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("swapdesk-io")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime for async HTTP operations")
});

/// Spawn a future onto the background runtime.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    TOKIO_RT.spawn(future)
}
