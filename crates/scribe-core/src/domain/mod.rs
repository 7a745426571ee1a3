//! Domain entities - the core business objects.

mod post;

pub use post::{MAX_TITLE_LENGTH, Post, PostDraft, PostId};
