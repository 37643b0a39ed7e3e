//! Typed swizzle built on the raw mask codec.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::{Result, SwizzleError};
use crate::mask::{self, MAX_COMPONENTS};

/// A vector swizzle such as `.zx` or `.xxyy`, stored as its packed mask.
///
/// Any `u16` is accepted as a mask; text goes through [`Swizzle::parse`]
/// which validates it.
///
/// ```
/// use swizzle_core::Swizzle;
///
/// let swizzle: Swizzle = "zx".parse().unwrap();
/// assert_eq!(swizzle.mask(), 0x0014);
/// assert_eq!(swizzle.required_size(), 3);
/// assert_eq!(swizzle.suffix(), ".zx");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Swizzle(u16);

impl Swizzle {
    /// The empty selector, mask 0.
    pub const EMPTY: Swizzle = Swizzle(0);

    pub const fn from_mask(mask: u16) -> Self {
        Self(mask)
    }

    pub const fn mask(self) -> u16 {
        self.0
    }

    /// Parse a selector string.
    pub fn parse(selector: &str) -> Result<Self> {
        mask::encode(selector).map(Self)
    }

    /// Build a swizzle from components in selector order.
    pub fn from_components(components: &[Component]) -> Result<Self> {
        if components.len() > MAX_COMPONENTS {
            return Err(SwizzleError::TooLong {
                selector: components.iter().map(|c| c.as_char()).collect(),
                len: components.len(),
            });
        }
        Ok(Self(mask::pack(components.iter().copied())))
    }

    /// Decoded components in selector order. Malformed nibbles are skipped.
    pub fn components(self) -> impl Iterator<Item = Component> {
        (0..self.len()).filter_map(move |position| {
            Component::from_nibble(mask::nibble(self.0, position))
        })
    }

    /// Swizzle width: positions before the first zero nibble.
    pub fn len(self) -> usize {
        mask::component_count(self.0)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest source vector size this swizzle can read from.
    pub fn required_size(self) -> usize {
        mask::required_vector_size(self.0)
    }

    /// Check that a vector of `source_size` components has everything this
    /// swizzle reads.
    pub fn fits(self, source_size: usize) -> Result<()> {
        let required = self.required_size();
        if required > source_size {
            return Err(SwizzleError::SourceTooSmall {
                swizzle: self.to_string(),
                required,
                available: source_size,
            });
        }
        Ok(())
    }

    /// Member access suffix for emitted shader text, e.g. `.zx`.
    pub fn suffix(self) -> String {
        let selector = mask::decode(self.0);
        if selector.is_empty() {
            selector
        } else {
            format!(".{selector}")
        }
    }
}

impl FromStr for Swizzle {
    type Err = SwizzleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Swizzle {
    type Error = SwizzleError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<u16> for Swizzle {
    fn from(mask: u16) -> Self {
        Self(mask)
    }
}

impl From<Swizzle> for u16 {
    fn from(swizzle: Swizzle) -> Self {
        swizzle.0
    }
}

impl fmt::Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask::decode(self.0))
    }
}

impl fmt::Debug for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swizzle({:?}, {:#06x})", mask::decode(self.0), self.0)
    }
}
