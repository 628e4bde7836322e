//! Common compile-time utilities used by the other vox crates.
//!
//! This is an internal crate which contains small compile-time helpers that
//! don't have a more dedicated home: fixed-size array lengths and branch
//! prediction hints.

#![cfg_attr(feature = "nightly", feature(core_intrinsics))]
#![cfg_attr(feature = "nightly", allow(internal_features))]

pub mod array;
pub mod hint;
