//! Shared UI Components
//!
//! Building blocks used by the watch page panels.

mod button;
mod card;
mod empty_state;
mod skeleton;
mod user_avatar;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use empty_state::EmptyState;
pub use skeleton::Skeleton;
pub use user_avatar::UserAvatar;
