/// User events posted to the winit loop from other threads.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter's mailbox.
    ///
    /// The loop only marks a redraw as pending; the frame is pulled during
    /// `RedrawRequested`.
    Wake,
}
