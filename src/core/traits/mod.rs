pub mod lifecycle;
pub mod repository;

pub use lifecycle::StoreLifecycle;
pub use repository::Repository;
