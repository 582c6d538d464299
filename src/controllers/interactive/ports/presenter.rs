use crate::controllers::interactive::events::render::RenderEvent;

/// Receives completed frames and render errors from the worker thread.
pub trait RenderPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
