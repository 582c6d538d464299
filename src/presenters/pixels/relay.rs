use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::input::gui::events::GuiEvent;
use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

/// Carries render events from the worker thread to the UI thread.
///
/// Holds only the newest event; a frame that arrives before the UI thread
/// drained the previous one simply replaces it, which is the behaviour we
/// want for a latest-wins pipeline.
pub struct FrameRelay {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl RenderPresenterPort for FrameRelay {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);
        // The proxy fails only when the event loop is gone, at which point
        // nobody is left to wake.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl FrameRelay {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().unwrap().take()
    }
}
