//! Shared test infrastructure for linked-bars integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use linked_bars::{DrawSurface, Rect, Srgb, TimeDuration, TimeInstant, TimeSource, Viewport};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// A single recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Save,
    Restore,
    Translate(f64, f64),
    Fill(Rect, Srgb),
}

/// Mock surface that records drawing calls (oldest first, drops overflow)
pub struct MockSurface {
    calls: heapless::Vec<DrawCall, 64>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Rectangles filled, in order
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Srgb)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Fill(rect, color) => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl DrawSurface for MockSurface {
    fn save(&mut self) {
        let _ = self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        let _ = self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let _ = self.calls.push(DrawCall::Translate(dx, dy));
    }

    fn fill_rect(&mut self, rect: Rect, color: Srgb) {
        let _ = self.calls.push(DrawCall::Fill(rect, color));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Tick period used by the library
pub const PERIOD: TestDuration = TestDuration(linked_bars::TICK_PERIOD_MS);

/// Ticks a full sweep of one unit takes (three stages of eleven steps)
pub const TICKS_PER_SWEEP: usize = 33;

/// 500x200 viewport: 100 wide slots, 20 thick bars
pub fn test_viewport() -> Viewport {
    Viewport::new(500.0, 200.0).unwrap()
}

/// Compare two floats with tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
