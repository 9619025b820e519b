pub mod category;
pub mod comment;
pub mod news;
