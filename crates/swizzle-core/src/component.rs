//! Vector components addressable by a swizzle.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// One component of a shader vector.
///
/// The discriminant is the zero-based component index, so `X` is bit 0 of a
/// mask nibble and `W` is bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
#[repr(u8)]
pub enum Component {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Component {
    /// All components in vector order.
    pub const ALL: [Component; 4] = [Component::X, Component::Y, Component::Z, Component::W];

    /// Parse a selector character. Only lowercase `x`, `y`, `z`, `w` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Component::X),
            'y' => Some(Component::Y),
            'z' => Some(Component::Z),
            'w' => Some(Component::W),
            _ => None,
        }
    }

    /// Look up a component by zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Component::from_usize(index)
    }

    /// Decode a mask nibble. Only exact one-hot values map to a component.
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            0b0001 => Some(Component::X),
            0b0010 => Some(Component::Y),
            0b0100 => Some(Component::Z),
            0b1000 => Some(Component::W),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Component::X => 'x',
            Component::Y => 'y',
            Component::Z => 'z',
            Component::W => 'w',
        }
    }

    /// Zero-based index into the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-hot nibble value, `1 << index`.
    pub fn nibble(self) -> u8 {
        1 << (self as u8)
    }

    /// One-based position in the vector; the smallest vector size that has
    /// this component.
    pub fn ordinal(self) -> usize {
        self.index() + 1
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
