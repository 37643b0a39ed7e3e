//! Conversions between swizzle masks and naga's swizzle pattern.

use naga::{SwizzleComponent, VectorSize};
use swizzle_core::{Component, Swizzle};

pub fn component_to_naga(component: Component) -> SwizzleComponent {
    match component {
        Component::X => SwizzleComponent::X,
        Component::Y => SwizzleComponent::Y,
        Component::Z => SwizzleComponent::Z,
        Component::W => SwizzleComponent::W,
    }
}

pub fn component_from_naga(component: SwizzleComponent) -> Component {
    match component {
        SwizzleComponent::X => Component::X,
        SwizzleComponent::Y => Component::Y,
        SwizzleComponent::Z => Component::Z,
        SwizzleComponent::W => Component::W,
    }
}

/// Number of components in a naga vector size.
pub fn vector_len(size: VectorSize) -> usize {
    match size {
        VectorSize::Bi => 2,
        VectorSize::Tri => 3,
        VectorSize::Quad => 4,
    }
}

/// Convert a swizzle to the `size` / `pattern` pair of
/// [`naga::Expression::Swizzle`].
///
/// naga only represents swizzles of two to four components (a single
/// component is an index access), so other widths return `None`, as do masks
/// with malformed nibbles. Unused pattern slots are `X`.
pub fn to_naga(swizzle: Swizzle) -> Option<(VectorSize, [SwizzleComponent; 4])> {
    let size = match swizzle.len() {
        2 => VectorSize::Bi,
        3 => VectorSize::Tri,
        4 => VectorSize::Quad,
        _ => return None,
    };

    let mut pattern = [SwizzleComponent::X; 4];
    let mut written = 0;
    for (slot, component) in pattern.iter_mut().zip(swizzle.components()) {
        *slot = component_to_naga(component);
        written += 1;
    }
    if written != swizzle.len() {
        return None;
    }
    Some((size, pattern))
}

/// Convert a naga swizzle back to a mask. Only the first `size` pattern
/// entries are read.
pub fn from_naga(size: VectorSize, pattern: [SwizzleComponent; 4]) -> Swizzle {
    let components = pattern[..vector_len(size)]
        .iter()
        .copied()
        .map(component_from_naga);
    Swizzle::from_mask(swizzle_core::pack(components))
}
