pub mod article;
pub mod category;
pub mod errors;
pub mod hooks;
pub mod slug;
