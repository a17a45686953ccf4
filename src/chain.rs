//! The row of linked bar units and its ping-pong traversal.
//!
//! Units live in a fixed arena and refer to their neighbors by [`UnitId`].
//! [`Chain`] owns the arena and a [`ChainState`] recording which unit is active
//! and which way the traversal is heading.

use crate::colors::{LEADING_SEGMENT, TRAILING_SEGMENT};
use crate::state::{InterpolationState, Progress};
use crate::surface::{DrawSurface, Rect, Viewport};
use crate::types::{Heading, UnitId};
use crate::BAR_NODES;

/// Result of looking up a unit's neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Neighbor {
    /// The adjacent unit in the requested heading.
    Adjacent(UnitId),

    /// No unit in that heading; carries the queried unit itself.
    Boundary(UnitId),
}

impl Neighbor {
    /// Returns the unit that should become active.
    #[inline]
    pub fn unit(self) -> UnitId {
        match self {
            Neighbor::Adjacent(id) | Neighbor::Boundary(id) => id,
        }
    }

    /// Returns true if the lookup hit the end of the chain.
    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Neighbor::Boundary(_))
    }
}

/// One bar in the row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarUnit {
    id: UnitId,
    state: InterpolationState,
    next: Option<UnitId>,
    prev: Option<UnitId>,
}

impl BarUnit {
    /// Creates a resting unit at position `index` of a chain of `len` units.
    fn linked(index: usize, len: usize) -> Self {
        Self {
            id: UnitId(index),
            state: InterpolationState::new(),
            next: (index + 1 < len).then_some(UnitId(index + 1)),
            prev: index.checked_sub(1).map(UnitId),
        }
    }

    /// Draws this unit's two segments into its slot.
    ///
    /// The leading segment spans the first and second scale, the trailing
    /// segment the second and third, both measured in half-slot widths.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, viewport: &Viewport) {
        let gap = viewport.gap();
        let thickness = viewport.thickness();
        let half = gap / 2.0;
        let [s0, s1, s2] = *self.state.scales();

        surface.save();
        surface.translate(gap * self.id.0 as f64, viewport.height() / 2.0);
        surface.fill_rect(
            Rect::new(half * s1, -thickness / 2.0, half * (s0 - s1), thickness),
            LEADING_SEGMENT,
        );
        surface.fill_rect(
            Rect::new(half + half * s2, -thickness / 2.0, half * (s1 - s2), thickness),
            TRAILING_SEGMENT,
        );
        surface.restore();
    }

    /// Advances this unit's interpolation state by one step.
    #[inline]
    pub fn advance(&mut self) -> Progress {
        self.state.advance()
    }

    /// Starts a sweep if the unit is at rest.
    #[inline]
    pub fn begin_motion(&mut self) -> bool {
        self.state.begin_motion()
    }

    /// Looks up the neighbor in `heading`.
    ///
    /// At either end of the chain the unit itself is returned as a
    /// [`Neighbor::Boundary`].
    pub fn resolve_neighbor(&self, heading: Heading) -> Neighbor {
        let link = match heading {
            Heading::Forward => self.next,
            Heading::Backward => self.prev,
        };

        match link {
            Some(id) => Neighbor::Adjacent(id),
            None => Neighbor::Boundary(self.id),
        }
    }

    /// Returns this unit's position in the chain.
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the unit's interpolation state.
    pub fn state(&self) -> &InterpolationState {
        &self.state
    }

    /// Returns the forward neighbor, or `None` on the last unit.
    pub fn next(&self) -> Option<UnitId> {
        self.next
    }

    /// Returns the backward neighbor, or `None` on the first unit.
    pub fn prev(&self) -> Option<UnitId> {
        self.prev
    }
}

/// Position of the traversal: the active unit and the chain heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Unit that receives advances.
    pub active: UnitId,
    /// Direction the next handoff takes.
    pub heading: Heading,
}

/// Traversal state of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainState {
    /// No tick stream needed. Waiting for an activation.
    Idle(Cursor),

    /// Tick stream running. The active unit is sweeping, or resting after a
    /// handoff until the next activation.
    Sweeping(Cursor),
}

impl ChainState {
    /// Returns the cursor carried by either state.
    #[inline]
    pub fn cursor(self) -> Cursor {
        match self {
            ChainState::Idle(cursor) | ChainState::Sweeping(cursor) => cursor,
        }
    }
}

/// How a finished sweep moved the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepEnd {
    /// Control passed to the adjacent unit; the tick stream continues.
    Handoff { from: UnitId, to: UnitId },

    /// The active unit sits at the end of the chain. The heading flipped and
    /// the chain went idle.
    Reversed { at: UnitId, heading: Heading },
}

/// A row of [`BAR_NODES`] linked units with a single active unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    units: [BarUnit; BAR_NODES],
    state: ChainState,
}

impl Chain {
    /// Creates an idle chain, active on unit 0 and heading forward.
    pub fn new() -> Self {
        Self {
            units: core::array::from_fn(|index| BarUnit::linked(index, BAR_NODES)),
            state: ChainState::Idle(Cursor {
                active: UnitId(0),
                heading: Heading::Forward,
            }),
        }
    }

    /// Draws the active unit only.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, viewport: &Viewport) {
        self.active_unit().render(surface, viewport);
    }

    /// Starts a sweep on the active unit.
    ///
    /// Returns `false` if the active unit is already sweeping. On success the
    /// chain is `Sweeping`.
    pub fn begin_motion(&mut self) -> bool {
        let cursor = self.state.cursor();
        if !self.units[cursor.active.0].begin_motion() {
            return false;
        }

        self.state = ChainState::Sweeping(cursor);
        true
    }

    /// Advances the active unit by one step.
    ///
    /// Does nothing while `Idle`. Returns `Some` only on the tick that finishes
    /// the active unit's sweep.
    pub fn advance_active(&mut self) -> Option<SweepEnd> {
        let ChainState::Sweeping(cursor) = self.state else {
            return None;
        };

        let unit = &mut self.units[cursor.active.0];
        if unit.advance() != Progress::Finished {
            return None;
        }

        let end = match unit.resolve_neighbor(cursor.heading) {
            Neighbor::Adjacent(to) => {
                self.state = ChainState::Sweeping(Cursor {
                    active: to,
                    heading: cursor.heading,
                });
                SweepEnd::Handoff {
                    from: cursor.active,
                    to,
                }
            }
            Neighbor::Boundary(at) => {
                let heading = cursor.heading.reversed();
                self.state = ChainState::Idle(Cursor {
                    active: at,
                    heading,
                });
                SweepEnd::Reversed { at, heading }
            }
        };

        Some(end)
    }

    /// Returns the active unit's id.
    pub fn active(&self) -> UnitId {
        self.state.cursor().active
    }

    /// Returns the active unit.
    pub fn active_unit(&self) -> &BarUnit {
        &self.units[self.active().0]
    }

    /// Returns the chain heading.
    pub fn heading(&self) -> Heading {
        self.state.cursor().heading
    }

    /// Returns the traversal state.
    pub fn state(&self) -> ChainState {
        self.state
    }

    /// Returns true while the tick stream should keep running.
    pub fn is_sweeping(&self) -> bool {
        matches!(self.state, ChainState::Sweeping(_))
    }

    /// Returns a unit by id, or `None` if out of range.
    pub fn unit(&self, id: UnitId) -> Option<&BarUnit> {
        self.units.get(id.0)
    }

    /// Returns all units in chain order.
    pub fn units(&self) -> &[BarUnit] {
        &self.units
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
