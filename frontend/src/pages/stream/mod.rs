//! Stream Watch Page
//!
//! Gates the page on the viewer identity, then composes the video, header,
//! info, about and chat panels into the grid for the current viewport.
//!
//! - `view.rs`: the view tree
//! - `render.rs`: egui painter for the view tree
//! - `skeleton.rs`: loading layout
//! - `components/`: one file per panel

mod components;
mod render;
mod skeleton;
mod view;

pub use components::{
    ABOUT_CARD_HEIGHT, AboutCardView, ChatToggleView, ChatView, FLOATING_TOGGLE_RIGHT,
    FLOATING_TOGGLE_TOP, HEADER_HEIGHT, HeaderView, INFO_CARD_HEIGHT, InfoCardView, VideoView,
    video_height,
};
pub use skeleton::StreamPlayerSkeleton;
pub use view::{
    LayoutStructure, LiveLayout, MAIN_PANEL_ORDER, PageView, Panel, PanelKind, RoomBinding,
    SkeletonLayout,
};

use crate::context::ChatSidebar;
use crate::events::UiCommand;
use crate::layout::{GridSpec, ViewportClass};
use crate::models::{HostDescriptor, StreamDescriptor, StreamPageData, ViewerIdentity};
use crate::session::SessionState;
use render::render_page;

/// Watch page for one host's stream
pub struct StreamPlayer<'a> {
    host: &'a HostDescriptor,
    stream: &'a StreamDescriptor,
    is_following: bool,
}

impl<'a> StreamPlayer<'a> {
    pub fn new(page: &'a StreamPageData) -> Self {
        Self {
            host: &page.host,
            stream: &page.stream,
            is_following: page.is_following,
        }
    }

    /// Builds the view tree for one frame.
    ///
    /// Renders the skeleton until the session holds a complete identity.
    pub fn view(
        &self,
        session: &SessionState,
        sidebar: &ChatSidebar,
        viewport: ViewportClass,
        server_url: &str,
    ) -> PageView {
        match session {
            SessionState::Pending => StreamPlayerSkeleton::view(viewport),
            // The gate logged the reason; the page stays on the loading layout
            SessionState::Failed(_) => StreamPlayerSkeleton::view(viewport),
            SessionState::Ready(viewer) => PageView::Live(self.live_layout(
                viewer,
                sidebar.collapsed(),
                viewport,
                server_url,
            )),
        }
    }

    /// Renders the page into `ui`, sized from its available width
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        session: &SessionState,
        sidebar: &ChatSidebar,
        server_url: &str,
    ) -> Option<UiCommand> {
        let viewport = ViewportClass::from_width(ui.available_width());
        render_page(ui, &self.view(session, sidebar, viewport, server_url))
    }

    fn live_layout(
        &self,
        viewer: &ViewerIdentity,
        collapsed: bool,
        viewport: ViewportClass,
        server_url: &str,
    ) -> LiveLayout {
        let viewer_is_host = viewer.identity() == self.host.identity_as_viewer();

        let main = vec![
            Panel::Video(VideoView {
                host_name: self.host.username.clone(),
                is_live: self.stream.is_live,
            }),
            Panel::Header(HeaderView {
                host_name: self.host.username.clone(),
                image_url: self.host.image_url.clone(),
                stream_name: self.stream.name.clone(),
                is_following: self.is_following,
                is_live: self.stream.is_live,
                viewer_is_host,
            }),
            Panel::Info(InfoCardView {
                stream_name: self.stream.name.clone(),
                thumbnail_url: self.stream.thumbnail_url.clone(),
                editable: viewer_is_host,
            }),
            Panel::About(AboutCardView {
                host_name: self.host.username.clone(),
                bio: self.host.bio_or_default().to_string(),
                follower_label: self.host.follower_label(),
                viewer_is_host,
            }),
        ];

        let chat = (!collapsed).then(|| ChatView {
            viewer_name: viewer.display_name().to_string(),
            host_name: self.host.username.clone(),
            is_following: self.is_following,
            is_live: self.stream.is_live,
            viewer_is_host,
            policy: self.stream.chat_policy(),
        });

        let chat_toggle =
            (collapsed && viewport.is_large()).then_some(ChatToggleView { collapsed: true });

        LiveLayout {
            grid: GridSpec::for_viewport(viewport, collapsed),
            room: RoomBinding {
                token: viewer.token().to_string(),
                server_url: server_url.to_string(),
            },
            chat_toggle,
            main,
            chat,
        }
    }
}
