//! Handles events from the background logic thread.

use super::state::App;
use tracing::info;

impl App {
    /// Drains the event channel without blocking.
    /// Returns how many events were applied.
    pub(super) fn process_logic_events(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(event) = self.logic_evt_rx.try_recv() {
            let was_ready = self.session_gate.state().is_ready();
            self.session_gate.handle_event(event);
            applied += 1;

            if !was_ready {
                self.log_room_binding();
            }
        }

        applied
    }

    fn log_room_binding(&self) {
        if let Some(viewer) = self.session_gate.state().viewer() {
            info!(
                "[APP] Joining room at {} as {}",
                self.config.room_server_url,
                viewer.display_name()
            );
        }
    }
}
