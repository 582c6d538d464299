/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that a new frame may be available from the render worker.
    /// The handler still checks generation and dimensions before
    /// presenting.
    Wake,
}
