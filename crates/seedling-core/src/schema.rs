pub mod app;

mod builder;
pub use builder::{Builder, FieldBuilder, ModelBuilder};

mod verify;

pub use app::Schema;
