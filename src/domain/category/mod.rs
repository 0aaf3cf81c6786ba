pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Category;
pub use repository::{CategoryReadRepository, CategoryWriteRepository};
pub use value_objects::{CategoryId, CategoryName};
