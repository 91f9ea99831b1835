//! Watch Page View Tree
//!
//! Plain data describing what the page shows for one frame. Built by pure
//! functions and painted by `render`, so layout decisions can be compared
//! without a UI context.

use super::components::{
    AboutCardView, ChatToggleView, ChatView, HeaderView, InfoCardView, VideoView,
};
use crate::layout::GridSpec;

/// Panel slots of the watch page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Video,
    Header,
    Info,
    About,
    Chat,
}

/// Top-to-bottom order of the main region
pub const MAIN_PANEL_ORDER: [PanelKind; 4] = [
    PanelKind::Video,
    PanelKind::Header,
    PanelKind::Info,
    PanelKind::About,
];

/// A populated main region panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Video(VideoView),
    Header(HeaderView),
    Info(InfoCardView),
    About(AboutCardView),
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        match self {
            Panel::Video(_) => PanelKind::Video,
            Panel::Header(_) => PanelKind::Header,
            Panel::Info(_) => PanelKind::Info,
            Panel::About(_) => PanelKind::About,
        }
    }
}

/// What the room provider container is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBinding {
    pub token: String,
    pub server_url: String,
}

/// Layout shown once the viewer is identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveLayout {
    pub grid: GridSpec,
    pub room: RoomBinding,
    /// Floating re-expand control, present only while collapsed on large viewports
    pub chat_toggle: Option<ChatToggleView>,
    pub main: Vec<Panel>,
    /// `None` while the chat is collapsed
    pub chat: Option<ChatView>,
}

/// Layout shown while the viewer is not identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonLayout {
    pub grid: GridSpec,
    pub main: Vec<PanelKind>,
    pub chat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Skeleton(SkeletonLayout),
    Live(LiveLayout),
}

/// Shape of a page view without panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStructure {
    pub grid: GridSpec,
    pub main: Vec<PanelKind>,
    pub chat: bool,
    pub chat_toggle: bool,
}

impl PageView {
    pub fn is_live(&self) -> bool {
        matches!(self, PageView::Live(_))
    }

    pub fn grid(&self) -> GridSpec {
        match self {
            PageView::Skeleton(layout) => layout.grid,
            PageView::Live(layout) => layout.grid,
        }
    }

    /// Every panel slot in render order, chat last
    pub fn panel_kinds(&self) -> Vec<PanelKind> {
        let structure = self.structure();
        let mut kinds = structure.main;
        if structure.chat {
            kinds.push(PanelKind::Chat);
        }
        kinds
    }

    pub fn structure(&self) -> LayoutStructure {
        match self {
            PageView::Skeleton(layout) => LayoutStructure {
                grid: layout.grid,
                main: layout.main.clone(),
                chat: layout.chat,
                chat_toggle: false,
            },
            PageView::Live(layout) => LayoutStructure {
                grid: layout.grid,
                main: layout.main.iter().map(Panel::kind).collect(),
                chat: layout.chat.is_some(),
                chat_toggle: layout.chat_toggle.is_some(),
            },
        }
    }
}
