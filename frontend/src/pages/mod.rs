pub mod stream;

pub use stream::{StreamPlayer, StreamPlayerSkeleton};
