//! sea-orm entities for the news service database.

pub mod access_tokens;
pub mod categories;
pub mod comments;
pub mod news;
pub mod users;
