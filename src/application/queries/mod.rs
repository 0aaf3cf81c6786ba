pub mod articles;
pub mod categories;
