//! Watch Page Panels
//!
//! One file per panel. Each exposes a plain view struct, a render function
//! taking the column width, and a skeleton of the same size.

mod about_card;
mod chat;
mod chat_toggle;
mod header;
mod info_card;
mod video;

pub use about_card::{
    ABOUT_CARD_HEIGHT, AboutCardView, render_about_card, render_about_card_skeleton,
};
pub use chat::{ChatView, render_chat, render_chat_skeleton};
pub use chat_toggle::{
    ChatToggleView, FLOATING_TOGGLE_RIGHT, FLOATING_TOGGLE_TOP, render_floating_chat_toggle,
};
pub use header::{HEADER_HEIGHT, HeaderView, render_header, render_header_skeleton};
pub use info_card::{INFO_CARD_HEIGHT, InfoCardView, render_info_card, render_info_card_skeleton};
pub use video::{VideoView, render_video, render_video_skeleton, video_height};
