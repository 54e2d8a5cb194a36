//! Per-button channel state and the hardware pin contract.

use crate::types::{ButtonId, EdgePolarity};

/// Trait for abstracting a button channel's hardware registers.
///
/// Implement this for your platform's pin, edge-select and interrupt-latch
/// registers. All methods are plain register reads and writes; handle any
/// hardware quirks internally - these methods cannot fail.
pub trait ButtonPins {
    /// Selects the GPIO function and input direction for the pin.
    fn configure_input(&mut self);

    /// Selects which electrical edge latches the pending-interrupt flag.
    fn set_trigger_edge(&mut self, edge: EdgePolarity);

    /// Enables the channel's interrupt source at the hardware level.
    ///
    /// This gates whether edges are latched at all; whether latched edges
    /// are delivered is controlled separately by [`enable_irq`].
    ///
    /// [`enable_irq`]: ButtonPins::enable_irq
    fn enable_interrupt_source(&mut self);

    /// Reads the instantaneous electrical level. True means physically
    /// actuated.
    fn read_raw(&self) -> bool;

    /// Returns whether interrupt delivery is currently enabled.
    fn irq_enabled(&self) -> bool;

    /// Enables interrupt delivery for this channel.
    fn enable_irq(&mut self);

    /// Disables interrupt delivery for this channel.
    fn disable_irq(&mut self);

    /// Reads the hardware pending-interrupt latch.
    fn irq_pending(&self) -> bool;

    /// Clears the hardware pending-interrupt latch.
    fn clear_irq_flag(&mut self);
}

/// State for one physical button wired to a port.
///
/// Created once at process start for each configured channel and registered
/// with a [`ButtonPort`]; never destroyed. The trigger-edge polarity is
/// fixed at construction - on the reference hardware button 1 is
/// release-triggered and button 2 press-triggered.
///
/// [`ButtonPort`]: crate::port::ButtonPort
pub struct ButtonChannel<P: ButtonPins> {
    id: ButtonId,
    edge: EdgePolarity,
    pins: P,
}

impl<P: ButtonPins> ButtonChannel<P> {
    /// Creates a channel for the given button with the given trigger edge.
    pub fn new(id: ButtonId, edge: EdgePolarity, pins: P) -> Self {
        Self { id, edge, pins }
    }

    /// Returns which button this channel serves.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Returns the configured trigger-edge polarity.
    pub fn edge(&self) -> EdgePolarity {
        self.edge
    }

    /// One-time hardware setup: pin function and direction, trigger edge,
    /// interrupt source.
    ///
    /// Must run before any other channel operation. Idempotent - calling it
    /// again re-applies the same register writes and nothing else.
    pub fn hardware_init(&mut self) {
        self.pins.configure_input();
        self.pins.set_trigger_edge(self.edge);
        self.pins.enable_interrupt_source();
    }

    /// Reads the instantaneous electrical level.
    pub fn read_raw(&self) -> bool {
        self.pins.read_raw()
    }

    /// Returns whether interrupt delivery is currently enabled.
    pub fn irq_enabled(&self) -> bool {
        self.pins.irq_enabled()
    }

    /// Enables interrupt delivery for this channel.
    pub fn enable_irq(&mut self) {
        self.pins.enable_irq();
    }

    /// Disables interrupt delivery for this channel.
    pub fn disable_irq(&mut self) {
        self.pins.disable_irq();
    }

    /// Reads the hardware pending-interrupt latch.
    pub fn irq_pending(&self) -> bool {
        self.pins.irq_pending()
    }

    /// Clears the hardware pending-interrupt latch.
    pub fn clear_irq_flag(&mut self) {
        self.pins.clear_irq_flag();
    }
}
