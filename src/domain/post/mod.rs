pub mod commands;
pub mod entity;

pub use self::commands::{CreatePost, UpdatePost};
pub use self::entity::Post;
