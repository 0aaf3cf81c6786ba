pub mod dirty;
pub mod repository;
pub mod service;
pub mod sluggable;
pub mod value_objects;

pub use dirty::DirtyFields;
pub use repository::SlugRepository;
pub use service::SlugService;
pub use sluggable::Sluggable;
pub use value_objects::{Slug, SlugPolicy, WriteOperation};
