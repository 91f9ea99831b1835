/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    // --- Chat ---
    /// Flip the chat collapse flag (floating toggle or chat header)
    ToggleChat,
}
