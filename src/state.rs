//! Per-unit interpolation state.
//!
//! Provides [`InterpolationState`], which sweeps three scale values one stage at
//! a time from one [`Anchor`] to the other, snapping each stage exactly onto the
//! boundary value once the accumulated steps overshoot it.

use crate::types::{Anchor, Heading};
use crate::{STAGES, STEP};

/// Result of a single advance call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// No sweep in progress; nothing changed.
    Resting,

    /// Sweep still in progress.
    Moving,

    /// The last stage landed on its boundary and the state is at rest on the
    /// opposite anchor.
    Finished,
}

/// Animation state of one bar unit.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationState {
    scales: [f64; STAGES],
    cursor: usize,
    motion: Option<Heading>,
    anchor: Anchor,
}

impl InterpolationState {
    /// Creates a resting state with all scales at the `Low` anchor.
    pub const fn new() -> Self {
        Self {
            scales: [0.0; STAGES],
            cursor: 0,
            motion: None,
            anchor: Anchor::Low,
        }
    }

    /// Starts a sweep away from the current anchor.
    ///
    /// Returns `false` without changing anything if a sweep is already in
    /// progress.
    pub fn begin_motion(&mut self) -> bool {
        if self.motion.is_some() {
            return false;
        }

        self.motion = Some(self.anchor.departure());
        true
    }

    /// Advances the stage under the cursor by one step.
    ///
    /// When the stage moves more than a full unit away from the anchor it is
    /// snapped to `anchor + direction` and the cursor moves on. Stepping the
    /// cursor past either end completes the sweep.
    pub fn advance(&mut self) -> Progress {
        let Some(heading) = self.motion else {
            return Progress::Resting;
        };

        let origin = self.anchor.value();
        let scale = &mut self.scales[self.cursor];
        *scale += heading.sign() * STEP;

        if (-1.0..=1.0).contains(&(*scale - origin)) {
            return Progress::Moving;
        }

        *scale = origin + heading.sign();

        match heading.step(self.cursor, STAGES) {
            Some(next) => {
                self.cursor = next;
                Progress::Moving
            }
            None => {
                self.motion = None;
                self.anchor = self.anchor.opposite();
                Progress::Finished
            }
        }
    }

    /// Returns the three scale values.
    pub fn scales(&self) -> &[f64; STAGES] {
        &self.scales
    }

    /// Returns the index of the stage currently (or last) advanced.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the sweep heading, or `None` while at rest.
    pub fn motion(&self) -> Option<Heading> {
        self.motion
    }

    /// Returns the numeric direction: `1`, `-1`, or `0` while at rest.
    pub fn direction(&self) -> i8 {
        self.motion.map_or(0, Heading::as_i8)
    }

    /// Returns the anchor the state rests on (or is sweeping away from).
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns true while a sweep is in progress.
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }
}

impl Default for InterpolationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut InterpolationState) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if state.advance() == Progress::Finished {
                return ticks;
            }
            assert!(ticks < 1000, "sweep never finished");
        }
    }

    #[test]
    fn advance_is_a_no_op_at_rest() {
        let mut state = InterpolationState::new();
        assert_eq!(state.advance(), Progress::Resting);
        assert_eq!(state.scales(), &[0.0, 0.0, 0.0]);
        assert_eq!(state.direction(), 0);
    }

    #[test]
    fn begin_motion_sets_direction_from_anchor() {
        let mut state = InterpolationState::new();
        assert!(state.begin_motion());
        assert_eq!(state.direction(), 1);

        run_to_completion(&mut state);
        assert_eq!(state.anchor(), Anchor::High);

        assert!(state.begin_motion());
        assert_eq!(state.direction(), -1);
    }

    #[test]
    fn begin_motion_while_moving_changes_nothing() {
        let mut state = InterpolationState::new();
        assert!(state.begin_motion());
        state.advance();
        let before = state.clone();

        assert!(!state.begin_motion());
        assert_eq!(state, before);
    }

    #[test]
    fn first_step_adds_one_tenth() {
        let mut state = InterpolationState::new();
        state.begin_motion();
        assert_eq!(state.advance(), Progress::Moving);
        assert_eq!(state.scales()[0], STEP);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn stage_snaps_exactly_onto_boundary() {
        let mut state = InterpolationState::new();
        state.begin_motion();

        while state.cursor() == 0 {
            state.advance();
        }

        assert_eq!(state.scales()[0], 1.0);
        assert_eq!(state.scales()[1], 0.0);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn forward_sweep_takes_eleven_ticks_per_stage() {
        let mut state = InterpolationState::new();
        state.begin_motion();
        assert_eq!(run_to_completion(&mut state), 3 * 11);
    }

    #[test]
    fn finished_state_freezes_cursor_on_last_stage() {
        let mut state = InterpolationState::new();
        state.begin_motion();
        run_to_completion(&mut state);

        assert_eq!(state.cursor(), STAGES - 1);
        assert!(!state.is_moving());
        assert_eq!(state.advance(), Progress::Resting);
        assert_eq!(state.scales(), &[1.0, 1.0, 1.0]);
    }
}
