//! Raw mask codec.
//!
//! A mask packs up to four components into a `u16`, one 4-bit nibble per
//! selector position starting from the least significant end. Each nibble is
//! one-hot (`x = 0b0001` .. `w = 0b1000`) and a zero nibble ends the selector.
//!
//! | selector | mask     |
//! |----------|----------|
//! | `""`     | `0x0000` |
//! | `"x"`    | `0x0001` |
//! | `"xy"`   | `0x0021` |
//! | `"zx"`   | `0x0014` |
//! | `"wwww"` | `0x8888` |

use tracing::trace;

use crate::component::Component;
use crate::error::{Result, SwizzleError};

/// Maximum number of components in a selector.
pub const MAX_COMPONENTS: usize = 4;

const NIBBLE_BITS: u32 = 4;
const NIBBLE_MASK: u16 = 0b1111;

/// Extract the nibble at selector position `position`. Positions past the
/// last nibble read as 0.
#[inline]
pub fn nibble(mask: u16, position: usize) -> u8 {
    let shifted = u32::try_from(position)
        .ok()
        .and_then(|p| p.checked_mul(NIBBLE_BITS))
        .and_then(|shift| mask.checked_shr(shift))
        .unwrap_or(0);
    (shifted & NIBBLE_MASK) as u8
}

/// `component` shifted into the nibble for selector position `position`
/// (0..4).
#[inline]
fn place(component: Component, position: usize) -> u16 {
    u16::from(component.nibble()) << (position as u32 * NIBBLE_BITS)
}

/// Pack components into a mask in selector order. Only the first
/// [`MAX_COMPONENTS`] are used.
pub fn pack(components: impl IntoIterator<Item = Component>) -> u16 {
    components
        .into_iter()
        .take(MAX_COMPONENTS)
        .enumerate()
        .fold(0, |mask, (position, component)| {
            mask | place(component, position)
        })
}

/// Nibbles up to (not including) the first zero one.
fn live_nibbles(mask: u16) -> impl Iterator<Item = u8> {
    (0..MAX_COMPONENTS)
        .map(move |position| nibble(mask, position))
        .take_while(|&n| n != 0)
}

/// Encode a selector string such as `"zx"` into a mask.
///
/// Fails when the selector is longer than [`MAX_COMPONENTS`] or contains a
/// character other than `x`, `y`, `z`, `w`. The empty selector encodes to 0.
pub fn encode(selector: &str) -> Result<u16> {
    let len = selector.chars().count();
    if len > MAX_COMPONENTS {
        trace!(selector, len, "rejected swizzle: too long");
        return Err(SwizzleError::TooLong {
            selector: selector.to_string(),
            len,
        });
    }

    let mut mask = 0u16;
    for (position, c) in selector.chars().enumerate() {
        let Some(component) = Component::from_char(c) else {
            trace!(selector, position, found = %c, "rejected swizzle: bad component");
            return Err(SwizzleError::InvalidComponent {
                selector: selector.to_string(),
                found: c,
                position,
            });
        };
        mask |= place(component, position);
    }
    Ok(mask)
}

/// Encode an optional selector; `None` is the empty selector.
pub fn encode_opt(selector: Option<&str>) -> Result<u16> {
    selector.map_or(Ok(0), encode)
}

/// Decode a mask back into a selector string.
///
/// Total over every `u16`. Scanning stops at the first zero nibble, so
/// anything after it is ignored. Nibbles with more than one bit set are
/// skipped without ending the scan.
pub fn decode(mask: u16) -> String {
    live_nibbles(mask)
        .filter_map(Component::from_nibble)
        .map(Component::as_char)
        .collect()
}

/// Number of positions before the first zero nibble (0..=4).
///
/// Malformed nibbles still count, this is the width the mask addresses.
pub fn component_count(mask: u16) -> usize {
    live_nibbles(mask).count()
}

/// Smallest source vector size that has every component the mask reads.
///
/// `zx` needs 3 components because `z` is the third. Returns 0 for the
/// empty mask; malformed nibbles do not raise the result.
pub fn required_vector_size(mask: u16) -> usize {
    live_nibbles(mask)
        .filter_map(Component::from_nibble)
        .map(Component::ordinal)
        .max()
        .unwrap_or(0)
}
