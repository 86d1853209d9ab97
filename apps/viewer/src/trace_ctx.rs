//! Task-local trace context for web requests.
//!
//! Lets error responses pick up the current request's trace_id without
//! threading it through every call. Established by the `RequestTrace`
//! middleware; core/domain code should not import this module.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace id in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
