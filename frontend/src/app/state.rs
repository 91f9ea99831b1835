//! Application State
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Apply events from the logic thread (non-blocking)
//! 2. Render the navigation bar and the watch page
//! 3. Apply the UI command returned by the page

use crate::config::AppConfig;
use crate::context::ChatSidebar;
use crate::events::{LogicCommand, LogicEvent, UiCommand};
use crate::layout::HEADER_OFFSET;
use crate::logic::spawn_logic_thread;
use crate::models::StreamPageData;
use crate::pages::StreamPlayer;
use crate::session::{SessionGate, SessionState, ViewerTokenProvider};
use egui::{Color32, FontId, RichText};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use tracing::{error, info};

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state - MVU Controller
pub struct App {
    pub(super) config: AppConfig,
    pub(super) page: StreamPageData,

    // Collapse state shared by the floating toggle and the grid
    pub(super) chat_sidebar: ChatSidebar,

    pub(super) session_gate: SessionGate,

    // Logic thread communication
    pub(super) logic_cmd_tx: Sender<LogicCommand>,
    pub(super) logic_evt_rx: Receiver<LogicEvent>,
}

impl App {
    /// Starts the logic thread and asks it for the viewer token
    pub fn new(
        config: AppConfig,
        page: StreamPageData,
        provider: Box<dyn ViewerTokenProvider>,
    ) -> Self {
        info!("[APP] Initializing watch page for host {}", page.host.id);

        let (logic_cmd_tx, logic_evt_rx, _logic_thread) = spawn_logic_thread(provider);

        let session_gate = SessionGate::new(page.host.id.clone());

        let mut app = Self {
            config,
            page,
            chat_sidebar: ChatSidebar::new(),
            session_gate,
            logic_cmd_tx,
            logic_evt_rx,
        };

        app.request_viewer_token();
        app
    }

    /// Sends the page's single token request to the logic thread
    fn request_viewer_token(&mut self) {
        if let Err(e) = self.session_gate.request(&self.logic_cmd_tx) {
            error!("[SESSION] Could not request viewer token: {}", e);
        }
    }

    pub fn session_state(&self) -> &SessionState {
        self.session_gate.state()
    }

    pub fn chat_sidebar(&self) -> &ChatSidebar {
        &self.chat_sidebar
    }

    /// Renders the navigation bar and the page, returning the page's command
    fn render_view(&self, ctx: &egui::Context) -> Option<UiCommand> {
        egui::TopBottomPanel::top("navbar")
            .exact_height(HEADER_OFFSET)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new(&self.page.host.username)
                            .font(FontId::proportional(24.0))
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(
                        RichText::new(&self.page.stream.name)
                            .font(FontId::proportional(16.0))
                            .color(Color32::LIGHT_GRAY),
                    );
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                StreamPlayer::new(&self.page).show(
                    ui,
                    self.session_gate.state(),
                    &self.chat_sidebar,
                    &self.config.room_server_url,
                )
            })
            .inner
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Process all pending logic events
        self.process_logic_events();

        // 2. Keep polling while the viewer token is outstanding
        if *self.session_gate.state() == SessionState::Pending {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }

        // 3. Render the view and collect UI commands
        let ui_command = self.render_view(ctx);

        // 4. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
        }
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("[APP] Watch page closing, goodbye!");
    }
}
