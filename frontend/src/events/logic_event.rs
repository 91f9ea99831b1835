use crate::models::ViewerCredentials;

/// Events sent from Logic thread back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicEvent {
    /// The provider answered; credentials may still be incomplete
    ViewerTokenResolved {
        host_id: String,
        credentials: ViewerCredentials,
    },

    /// The provider call failed
    ViewerTokenFailed { host_id: String, reason: String },
}
