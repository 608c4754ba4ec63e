pub mod catalog;

pub use catalog::{Item, ItemType, CATALOG};
