//! Platform glue for detached async work.

/// Run a future to completion without blocking the render loop.
///
/// Only the wasm target needs this: native callers run their (synchronous)
/// work on the spot, and component-scoped work goes through `dioxus::spawn`.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
