/// Receives a notification whenever the visible frame changes.
///
/// The clock owns its sink; hosts pass a closure or a small handle that
/// forwards to their own invalidation primitive (e.g. a window redraw
/// request), so no back-reference to the host is needed.
pub trait RedrawSink {
    fn invalidate(&mut self);
}

impl<F> RedrawSink for F
where
    F: FnMut(),
{
    fn invalidate(&mut self) {
        self()
    }
}

/// Sink that drops every notification.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoRedraw;

impl RedrawSink for NoRedraw {
    fn invalidate(&mut self) {}
}
