//! SeaORM entities for the `posts`, `categories` and `statuses` tables.

pub mod category;
pub mod post;
pub mod status;
