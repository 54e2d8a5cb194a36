//! Shared test infrastructure for button-sensor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_sensor::{ButtonId, ButtonPins, EdgePolarity, SensorEvents, TimeDuration, TimeInstant, TimeSource, Watchdog};
use core::cell::{Cell, RefCell};
use std::rc::Rc;

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
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

#[derive(Debug, Default)]
struct PinRegisters {
    raw: bool,
    pending: bool,
    irq_enabled: bool,
    edge: Option<EdgePolarity>,
    input_configured: u32,
    source_enabled: bool,
}

/// Mock pin registers with an externally controllable raw level and
/// pending latch. Clone the handle before moving it into a channel to keep
/// driving the "hardware" from the test.
#[derive(Clone)]
pub struct MockPins(Rc<RefCell<PinRegisters>>);

impl MockPins {
    pub fn new() -> Self {
        MockPins(Rc::new(RefCell::new(PinRegisters::default())))
    }

    /// Latches the pending-interrupt flag, as a hardware edge would.
    pub fn latch_edge(&self) {
        self.0.borrow_mut().pending = true;
    }

    /// Sets the instantaneous electrical level.
    pub fn set_raw(&self, level: bool) {
        self.0.borrow_mut().raw = level;
    }

    pub fn pending(&self) -> bool {
        self.0.borrow().pending
    }

    pub fn enabled(&self) -> bool {
        self.0.borrow().irq_enabled
    }

    pub fn edge(&self) -> Option<EdgePolarity> {
        self.0.borrow().edge
    }

    pub fn init_count(&self) -> u32 {
        self.0.borrow().input_configured
    }
}

impl ButtonPins for MockPins {
    fn configure_input(&mut self) {
        self.0.borrow_mut().input_configured += 1;
    }

    fn set_trigger_edge(&mut self, edge: EdgePolarity) {
        self.0.borrow_mut().edge = Some(edge);
    }

    fn enable_interrupt_source(&mut self) {
        self.0.borrow_mut().source_enabled = true;
    }

    fn read_raw(&self) -> bool {
        self.0.borrow().raw
    }

    fn irq_enabled(&self) -> bool {
        self.0.borrow().irq_enabled
    }

    fn enable_irq(&mut self) {
        self.0.borrow_mut().irq_enabled = true;
    }

    fn disable_irq(&mut self) {
        self.0.borrow_mut().irq_enabled = false;
    }

    fn irq_pending(&self) -> bool {
        self.0.borrow().pending
    }

    fn clear_irq_flag(&mut self) {
        self.0.borrow_mut().pending = false;
    }
}

// ============================================================================
// Recording Event Sink
// ============================================================================

/// Event sink that records every sensor-changed notification
#[derive(Clone)]
pub struct RecordingEvents(Rc<RefCell<heapless::Vec<ButtonId, 32>>>);

impl RecordingEvents {
    pub fn new() -> Self {
        RecordingEvents(Rc::new(RefCell::new(heapless::Vec::new())))
    }

    pub fn notifications(&self) -> heapless::Vec<ButtonId, 32> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn count_for(&self, id: ButtonId) -> usize {
        self.0.borrow().iter().filter(|n| **n == id).count()
    }
}

impl SensorEvents for RecordingEvents {
    fn sensor_changed(&mut self, id: ButtonId) {
        let _ = self.0.borrow_mut().push(id);
    }
}

// ============================================================================
// Mock Watchdog
// ============================================================================

/// Watchdog that records reboot requests instead of resetting
#[derive(Clone)]
pub struct MockWatchdog(Rc<Cell<u32>>);

impl MockWatchdog {
    pub fn new() -> Self {
        MockWatchdog(Rc::new(Cell::new(0)))
    }

    pub fn reboots(&self) -> u32 {
        self.0.get()
    }
}

impl Watchdog for MockWatchdog {
    fn reboot(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
