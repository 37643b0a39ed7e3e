//! Swizzle masks for naga shader IR.
//!
//! This crate connects [`swizzle_core`] masks to [`naga`]:
//!
//! - [`convert`] maps a [`Swizzle`](swizzle_core::Swizzle) to and from the
//!   `size` / `pattern` pair of [`naga::Expression::Swizzle`].
//! - [`scan`] parses and validates WGSL and reports every swizzle it
//!   contains together with the size of the vector it reads.
//!
//! # Usage
//!
//! ```rust,ignore
//! let uses = swizzle_naga::check_wgsl(&std::fs::read_to_string("blur.wgsl")?)?;
//! for u in &uses {
//!     println!("{}: {}", u.function, u.swizzle.suffix());
//! }
//! ```

pub mod convert;
pub mod scan;

pub use convert::{from_naga, to_naga};
pub use scan::{check_wgsl, scan_module, scan_wgsl, SwizzleUse};
