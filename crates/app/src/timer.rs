use std::time::Duration;

/// Suspend the current task for `duration`.
///
/// The browser has no tokio runtime, so wasm builds sleep on a JS timeout.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
