//! Packed encoding of shader vector swizzles.
//!
//! A swizzle selects, reorders or repeats vector components (`v.zx`,
//! `v.xxyy`). This crate converts the selector text to and from a 16-bit mask
//! with one one-hot nibble per position, and answers the two questions shader
//! code generators ask of a mask: how wide is it, and how large must the
//! source vector be.
//!
//! # Overview
//!
//! - [`mask`] holds the raw `u16` codec: [`encode`], [`decode`],
//!   [`component_count`] and [`required_vector_size`].
//! - [`Swizzle`] is a typed wrapper over a mask with parsing, formatting and
//!   a [`Swizzle::fits`] check against a source vector size.
//! - [`Component`] names a single vector component.
//!
//! Every function here is pure and holds no state, so it can be called from
//! any thread.

pub mod component;
pub mod error;
pub mod mask;
pub mod swizzle;

// Re-export primary types at crate root for convenience.
pub use component::Component;
pub use error::{Result, SwizzleError};
pub use mask::{
    component_count, decode, encode, encode_opt, pack, required_vector_size, MAX_COMPONENTS,
};
pub use swizzle::Swizzle;
