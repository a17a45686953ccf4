//! Core value types shared by the state machine.

/// A direction of travel: through a unit's stages, or along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heading {
    /// Towards higher indices (`+1`).
    Forward,

    /// Towards lower indices (`-1`).
    Backward,
}

impl Heading {
    /// Returns the opposite heading.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Heading::Forward => Heading::Backward,
            Heading::Backward => Heading::Forward,
        }
    }

    /// Returns `1.0` for `Forward` and `-1.0` for `Backward`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Heading::Forward => 1.0,
            Heading::Backward => -1.0,
        }
    }

    /// Returns `1` for `Forward` and `-1` for `Backward`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Heading::Forward => 1,
            Heading::Backward => -1,
        }
    }

    /// Steps `index` once in this heading, staying inside `0..len`.
    ///
    /// Returns `None` when the step would leave the range.
    #[inline]
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Heading::Forward => index.checked_add(1).filter(|&next| next < len),
            Heading::Backward => index.checked_sub(1),
        }
    }
}

/// The resting value a unit's scales return to between sweeps.
///
/// Only two resting values exist, so the direction derived from an anchor
/// always has unit magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    /// Scales at rest on `0.0`.
    #[default]
    Low,

    /// Scales at rest on `1.0`.
    High,
}

impl Anchor {
    /// Returns the scale value of this anchor.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Anchor::Low => 0.0,
            Anchor::High => 1.0,
        }
    }

    /// Returns the heading a sweep leaving this anchor takes.
    #[inline]
    pub fn departure(self) -> Heading {
        match self {
            Anchor::Low => Heading::Forward,
            Anchor::High => Heading::Backward,
        }
    }

    /// Returns the anchor reached after a full sweep.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Anchor::Low => Anchor::High,
            Anchor::High => Anchor::Low,
        }
    }
}

/// Index of a unit within a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnitId(pub usize);

impl From<usize> for UnitId {
    fn from(id: usize) -> Self {
        UnitId(id)
    }
}

impl From<UnitId> for usize {
    fn from(id: UnitId) -> Self {
        id.0
    }
}
