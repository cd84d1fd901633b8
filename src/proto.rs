//! Protobuf messages and the tonic server for `media.v1.MediaService`.

#![allow(clippy::derive_partial_eq_without_eq)]

pub mod media {
    pub mod v1 {
        include!("generated/media.v1.rs");
    }
}

pub use media::v1::*;
