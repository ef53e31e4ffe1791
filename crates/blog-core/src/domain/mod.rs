//! Domain entities - the core business objects.

mod listing;
mod post;

pub use listing::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest, PostFilter, PostPage};
pub use post::{Post, PostDetail, PostDraft, PostId};
