//! UI Command Handler

use super::state::App;
use crate::events::UiCommand;
use tracing::{debug, info};

impl App {
    /// Dispatches UI commands returned by the page
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        debug!("[UI] Handling command: {:?}", command);
        match command {
            UiCommand::ToggleChat => self.handle_toggle_chat(),
        }
    }

    fn handle_toggle_chat(&mut self) {
        self.chat_sidebar.toggle();
        let state = if self.chat_sidebar.collapsed() {
            "collapsed"
        } else {
            "expanded"
        };
        info!("[CHAT] Chat {}", state);
    }
}
