// Logic thread: runs blocking provider calls off the UI thread

use crate::events::{LogicCommand, LogicEvent};
use crate::session::ViewerTokenProvider;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

/// Main function of the logic thread.
/// Receives `LogicCommand`s and sends `LogicEvent`s back to the UI thread.
/// Returns when the command channel closes.
pub fn run_logic_thread(
    cmd_rx: Receiver<LogicCommand>,
    evt_tx: Sender<LogicEvent>,
    provider: Box<dyn ViewerTokenProvider>,
) {
    for command in cmd_rx {
        match command {
            LogicCommand::ResolveViewerToken { host_id } => {
                handle_resolve_viewer_token(provider.as_ref(), host_id, &evt_tx);
            }
        }
    }

    debug!("[LOGIC] Command channel closed, logic thread exiting");
}

/// Spawns the logic thread and returns the UI side of its channels
pub fn spawn_logic_thread(
    provider: Box<dyn ViewerTokenProvider>,
) -> (Sender<LogicCommand>, Receiver<LogicEvent>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = channel();
    let (evt_tx, evt_rx) = channel();

    info!("[LOGIC] Starting logic thread...");
    let handle = std::thread::spawn(move || run_logic_thread(cmd_rx, evt_tx, provider));

    (cmd_tx, evt_rx, handle)
}

fn handle_resolve_viewer_token(
    provider: &dyn ViewerTokenProvider,
    host_id: String,
    evt_tx: &Sender<LogicEvent>,
) {
    let event = match provider.resolve(&host_id) {
        Ok(credentials) => LogicEvent::ViewerTokenResolved {
            host_id,
            credentials,
        },
        Err(e) => LogicEvent::ViewerTokenFailed {
            host_id,
            reason: e.to_string(),
        },
    };

    // The page may already be gone; nobody is waiting for the answer then
    if evt_tx.send(event).is_err() {
        warn!("[LOGIC] UI dropped before viewer token result was delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlayerError, Result};
    use crate::models::ViewerCredentials;
    use std::time::Duration;

    struct FixedProvider(Option<ViewerCredentials>);

    impl ViewerTokenProvider for FixedProvider {
        fn resolve(&self, _host_id: &str) -> Result<ViewerCredentials> {
            self.0
                .clone()
                .ok_or_else(|| PlayerError::Provider("unreachable".to_string()))
        }
    }

    #[test]
    fn test_resolves_and_reports_credentials() {
        let credentials = ViewerCredentials::new("v1", "Viewer1", "tok");
        let (cmd_tx, evt_rx, handle) =
            spawn_logic_thread(Box::new(FixedProvider(Some(credentials.clone()))));

        cmd_tx
            .send(LogicCommand::ResolveViewerToken {
                host_id: "u1".to_string(),
            })
            .unwrap();

        let event = evt_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            event,
            LogicEvent::ViewerTokenResolved {
                host_id: "u1".to_string(),
                credentials,
            }
        );

        drop(cmd_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_reports_provider_failure() {
        let (cmd_tx, evt_rx, handle) = spawn_logic_thread(Box::new(FixedProvider(None)));

        cmd_tx
            .send(LogicCommand::ResolveViewerToken {
                host_id: "u1".to_string(),
            })
            .unwrap();

        match evt_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LogicEvent::ViewerTokenFailed { host_id, reason } => {
                assert_eq!(host_id, "u1");
                assert!(reason.contains("unreachable"));
            }
            other => panic!("Expected failure event, got {:?}", other),
        }

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
