#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InterpolationState`**: Three scale values swept one stage at a time between two anchors
//! - **`BarUnit`**: One bar in the row, owning its state and linked to its neighbors by index
//! - **`Chain`**: The row of units, tracking the active unit and the ping-pong heading
//! - **`Scheduler`**: Fixed-period tick source built on the `TimeSource` abstraction
//! - **`Stage`**: Owns the surface, chain and scheduler; turns activations and ticks into frames
//! - **`DrawSurface`**: Trait to implement for your drawing backend
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! All geometry is `f64` in surface units. Colors are `Srgb<f32>` (0.0-1.0 range);
//! convert them to your backend's native format inside `DrawSurface::fill_rect`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod surface;
pub mod colors;
pub mod state;
pub mod scheduler;
pub mod chain;
pub mod stage;

pub use chain::{BarUnit, Chain, ChainState, Cursor, Neighbor, SweepEnd};
pub use scheduler::{Scheduler, TickTiming};
pub use stage::{ServiceTiming, Stage};
pub use state::{InterpolationState, Progress};
pub use surface::{DrawSurface, Rect, Viewport, ViewportError};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Anchor, Heading, UnitId};

/// Number of bar units in the chain.
pub const BAR_NODES: usize = 5;

/// Number of scale stages swept per unit.
pub const STAGES: usize = 3;

/// Scheduler tick period in milliseconds.
pub const TICK_PERIOD_MS: u64 = 50;

/// Scale change applied per tick.
pub const STEP: f64 = 0.1;

/// Bar thickness is the viewport height divided by this.
pub const THICKNESS_DIVISOR: f64 = 10.0;
