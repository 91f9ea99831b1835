//! Session Gate
//!
//! Holds the readiness of one page view. A gate is created per host page,
//! issues a single token request, and applies the logic thread's answer.
//! There is no retry and no timeout: a request that never completes keeps
//! the gate pending for the life of the page.

use crate::error::{PlayerError, Result};
use crate::events::{LogicCommand, LogicEvent};
use crate::models::ViewerIdentity;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Readiness of the viewer session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the provider, or the provider answered with incomplete credentials
    Pending,
    Ready(ViewerIdentity),
    /// The provider reported an error
    Failed(String),
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready(_))
    }

    pub fn viewer(&self) -> Option<&ViewerIdentity> {
        match self {
            SessionState::Ready(viewer) => Some(viewer),
            _ => None,
        }
    }
}

/// Per-page readiness gate
#[derive(Debug)]
pub struct SessionGate {
    host_id: String,
    state: SessionState,
    requested: bool,
}

impl SessionGate {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            state: SessionState::Pending,
            requested: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the token request has already been sent
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Sends the token request to the logic thread. Later calls do nothing.
    pub fn request(&mut self, logic_cmd_tx: &Sender<LogicCommand>) -> Result<()> {
        if self.requested {
            return Ok(());
        }

        info!("[SESSION] Requesting viewer token for host {}", self.host_id);
        logic_cmd_tx
            .send(LogicCommand::ResolveViewerToken {
                host_id: self.host_id.clone(),
            })
            .map_err(|_| PlayerError::ChannelClosed)?;

        self.requested = true;
        Ok(())
    }

    /// Applies a logic event to the gate
    pub fn handle_event(&mut self, event: LogicEvent) {
        match event {
            LogicEvent::ViewerTokenResolved {
                host_id,
                credentials,
            } => {
                if !self.is_current(&host_id) {
                    return;
                }

                match credentials.into_identity() {
                    Some(viewer) => {
                        info!(
                            "[SESSION] Viewer {} ready for host {}",
                            viewer.identity(),
                            self.host_id
                        );
                        self.state = SessionState::Ready(viewer);
                    }
                    None => {
                        debug!("[SESSION] Incomplete viewer credentials, staying pending");
                    }
                }
            }

            LogicEvent::ViewerTokenFailed { host_id, reason } => {
                if !self.is_current(&host_id) {
                    return;
                }

                warn!(
                    "[SESSION] Viewer token request for host {} failed: {}",
                    self.host_id, reason
                );
                self.state = SessionState::Failed(reason);
            }
        }
    }

    fn is_current(&self, host_id: &str) -> bool {
        if host_id != self.host_id {
            debug!(
                "[SESSION] Ignoring token event for host {} (page host is {})",
                host_id, self.host_id
            );
            return false;
        }
        true
    }
}
