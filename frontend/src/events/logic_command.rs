/// Logic commands sent from UI thread to Logic thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicCommand {
    // --- Session ---
    /// Ask the token provider for a viewer token for this host
    ResolveViewerToken { host_id: String },
}
