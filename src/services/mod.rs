mod error;
pub mod imagekit_storage;

pub use imagekit_storage::{ImageKitConfig, ImageKitStorage};
