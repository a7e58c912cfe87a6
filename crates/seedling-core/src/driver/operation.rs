mod insert;
pub use insert::{Column, Insert};
