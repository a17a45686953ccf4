//! Top-level orchestration of surface, chain and scheduler.
//!
//! Provides [`Stage`], which turns activation events and scheduler ticks into
//! rendered frames and chain advances.

use crate::chain::{Chain, SweepEnd};
use crate::colors::BACKGROUND;
use crate::scheduler::{Scheduler, TickTiming};
use crate::surface::{DrawSurface, Viewport};
use crate::time::{TimeInstant, TimeSource};

/// Timing information returned by stage operations.
///
/// Indicates when the stage needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Animation running. Service again after this delay.
    Delay(D),

    /// Scheduler stopped. No servicing needed until the next activation.
    Idle,
}

/// Owns a drawing surface and animates a bar chain on it.
///
/// The host forwards its pointer-press (or any trigger) to [`activate`] and
/// calls [`service`] whenever the returned delay has elapsed.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Drawing surface implementation type
/// * `T` - Time source implementation type
///
/// [`activate`]: Stage::activate
/// [`service`]: Stage::service
pub struct Stage<'t, I: TimeInstant, S: DrawSurface, T: TimeSource<I>> {
    surface: S,
    time_source: &'t T,
    viewport: Viewport,
    chain: Chain,
    scheduler: Scheduler<I>,
}

impl<'t, I: TimeInstant, S: DrawSurface, T: TimeSource<I>> Stage<'t, I, S, T> {
    /// Creates an idle stage and draws the first frame.
    pub fn new(surface: S, time_source: &'t T, viewport: Viewport) -> Self {
        let mut stage = Self {
            surface,
            time_source,
            viewport,
            chain: Chain::new(),
            scheduler: Scheduler::new(),
        };
        stage.render();
        stage
    }

    /// Handles an activation event.
    ///
    /// Starts the active unit's sweep and, if it started, the scheduler. A
    /// second activation during a sweep is ignored.
    pub fn activate(&mut self) -> ServiceTiming<I::Duration> {
        let now = self.time_source.now();

        if self.chain.begin_motion() {
            #[cfg(feature = "defmt")]
            defmt::debug!("sweep started on {}", self.chain.active());

            self.scheduler.start(now);
        }

        self.timing(now)
    }

    /// Services the stage, running at most one tick.
    ///
    /// A due tick draws the current frame and then advances the active unit.
    /// When the sweep ends at either end of the chain the scheduler stops.
    pub fn service(&mut self) -> ServiceTiming<I::Duration> {
        let now = self.time_source.now();

        match self.scheduler.poll(now) {
            TickTiming::Stopped => return ServiceTiming::Idle,
            TickTiming::Wait(delay) => return ServiceTiming::Delay(delay),
            TickTiming::Due => {}
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("tick on {}", self.chain.active());

        self.render();

        if let Some(end) = self.chain.advance_active() {
            #[cfg(feature = "defmt")]
            defmt::debug!("sweep ended: {}", end);

            if matches!(end, SweepEnd::Reversed { .. }) {
                self.scheduler.stop();
            }
        }

        self.timing(now)
    }

    /// Clears the viewport and draws the chain.
    pub fn render(&mut self) {
        self.surface.fill_rect(self.viewport.bounds(), BACKGROUND);
        self.chain.render(&mut self.surface, &self.viewport);
    }

    fn timing(&self, now: I) -> ServiceTiming<I::Duration> {
        match self.scheduler.remaining(now) {
            Some(delay) => ServiceTiming::Delay(delay),
            None => ServiceTiming::Idle,
        }
    }

    /// Returns true while the scheduler is ticking.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Returns the animated chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Returns the viewport fixed at creation.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns a reference to the drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the drawing surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the stage, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
