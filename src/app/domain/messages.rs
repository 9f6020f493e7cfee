/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Calculate button pressed, or Enter in a date entry
    Calculate,
    /// User closed the main window
    WindowClose,
}
