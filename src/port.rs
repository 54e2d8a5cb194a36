//! Shared-port interrupt handling and the per-channel capability triplet.
//!
//! Provides [`ButtonPort`] which owns the port's debounce [`GuardTimer`]
//! and up to two [`ButtonChannel`]s, services the port-level interrupt, and
//! exposes the framework's value/status/configure interface keyed by
//! [`ButtonId`]. Also defines the [`SensorEvents`] and [`Watchdog`] traits
//! for the event-dispatcher and reset collaborators.

use crate::channel::{ButtonChannel, ButtonPins};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::timer::{GUARD_WINDOW_MS, GuardTimer};
use crate::types::{Button2Policy, ButtonId, ConfigureResult, PortError, SensorType};

/// Trait for abstracting the framework's event dispatcher.
///
/// Notifications are fire-and-forget and carry no payload; the dispatcher
/// is responsible for later scheduling consumers that re-read `value()`.
pub trait SensorEvents {
    /// Signals that the named sensor's value may have changed.
    fn sensor_changed(&mut self, id: ButtonId);
}

/// Trait for abstracting the watchdog reset collaborator.
pub trait Watchdog {
    /// Triggers an unconditional system reset.
    ///
    /// On real hardware this does not return. Mock implementations may
    /// return; the interrupt handler stops processing either way.
    fn reboot(&mut self);
}

/// Watchdog stand-in for ports that never use [`Button2Policy::Reset`].
pub struct NoReset;

impl Watchdog for NoReset {
    fn reboot(&mut self) {}
}

/// Immutable per-port configuration, fixed at construction.
///
/// Mirrors the reference hardware's build-time selection: the channel count
/// follows from which channels the bootstrap registers, and
/// `button2_policy` selects whether an accepted trigger on button 2
/// notifies or resets.
#[derive(Debug, Clone, Copy)]
pub struct PortConfig {
    /// What an accepted trigger on button 2 does.
    pub button2_policy: Button2Policy,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            button2_policy: Button2Policy::Notify,
        }
    }
}

/// One hardware interrupt port serving one or two button channels.
///
/// The port owns the single [`GuardTimer`] that governs debounce for every
/// channel on it, the event sink, and the watchdog. Foreground code calls
/// the capability triplet ([`value`], [`status`], [`configure`]); the
/// platform's interrupt service routine calls [`on_port_interrupt`].
///
/// Both the interrupt handler and `configure`'s read-modify-write of the
/// enabled/guard state run inside `critical_section::with`, so each is
/// atomic with respect to the other. On the target this is the usual
/// global-interrupt-disable bracket; there is no blocking anywhere.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin hardware implementation type
/// * `E` - Event sink implementation type
/// * `W` - Watchdog implementation type
/// * `T` - Time source implementation type
///
/// [`value`]: ButtonPort::value
/// [`status`]: ButtonPort::status
/// [`configure`]: ButtonPort::configure
/// [`on_port_interrupt`]: ButtonPort::on_port_interrupt
pub struct ButtonPort<'t, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    channels: [Option<ButtonChannel<P>>; 2],
    guard: GuardTimer<'t, I, T>,
    events: E,
    watchdog: W,
    config: PortConfig,
}

impl<'t, I, P, E, W, T> ButtonPort<'t, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    /// Creates a port with no channels registered and an expired guard.
    pub fn new(time_source: &'t T, events: E, watchdog: W, config: PortConfig) -> Self {
        Self {
            channels: [None, None],
            guard: GuardTimer::new(time_source),
            events,
            watchdog,
            config,
        }
    }

    /// Registers a channel in its fixed slot on the port.
    ///
    /// Channels are registered once by the platform bootstrap; the set of
    /// registered channels is the port's channel count.
    ///
    /// # Errors
    /// * `DuplicateChannel` - A channel with this ID is already registered
    pub fn add_channel(&mut self, channel: ButtonChannel<P>) -> Result<(), PortError> {
        let id = channel.id();
        let slot = &mut self.channels[id.index()];

        if slot.is_some() {
            return Err(PortError::DuplicateChannel(id));
        }

        *slot = Some(channel);
        Ok(())
    }

    /// Returns true if a channel with the given ID is registered.
    pub fn contains(&self, id: ButtonId) -> bool {
        self.channels[id.index()].is_some()
    }

    /// Returns the port's guard timer, for observation.
    pub fn guard(&self) -> &GuardTimer<'t, I, T> {
        &self.guard
    }

    fn channel(&self, id: ButtonId) -> Result<&ButtonChannel<P>, PortError> {
        self.channels[id.index()]
            .as_ref()
            .ok_or(PortError::ChannelNotPresent(id))
    }

    /// Reads the sensor value for a channel.
    ///
    /// True while the raw electrical level is asserted or the guard window
    /// is still open, so the channel reports active for the physical press
    /// duration plus the trailing guard window. This smooths contact
    /// chatter on release.
    ///
    /// The query code is accepted but unused, reserved by the framework
    /// contract.
    ///
    /// # Errors
    /// Returns `ChannelNotPresent` if the channel is not registered.
    pub fn value(&self, id: ButtonId, _query: SensorType) -> Result<bool, PortError> {
        let channel = self.channel(id)?;
        Ok(channel.read_raw() || !self.guard.expired())
    }

    /// Answers a status query for a channel.
    ///
    /// The is-active and is-ready queries both report whether interrupt
    /// delivery is enabled; any other query code reports false.
    ///
    /// # Errors
    /// Returns `ChannelNotPresent` if the channel is not registered.
    pub fn status(&self, id: ButtonId, query: SensorType) -> Result<bool, PortError> {
        let channel = self.channel(id)?;
        Ok(match query {
            SensorType::Active | SensorType::Ready => channel.irq_enabled(),
            SensorType::HwInit => false,
        })
    }

    /// Applies a configure operation to a channel.
    ///
    /// * `HwInit` - one-time hardware setup; must run before activation and
    ///   is safe to repeat.
    /// * `Active` with `value` true - arms the guard with a zero-length
    ///   window (already expired, so the first real trigger passes) and
    ///   enables interrupt delivery. Idempotent: if the channel is already
    ///   enabled nothing changes, so re-activating never resets debounce
    ///   state mid-window.
    /// * `Active` with `value` false - disables interrupt delivery. The
    ///   sensor goes inert; no further edges can arm new guard windows.
    /// * Any other code - `Unrecognized`, no state change.
    ///
    /// The activation read-modify-write runs inside a critical section so a
    /// port interrupt cannot interleave with the enabled-check-then-arm
    /// sequence.
    ///
    /// # Errors
    /// Returns `ChannelNotPresent` if the channel is not registered.
    pub fn configure(
        &mut self,
        id: ButtonId,
        op: SensorType,
        value: bool,
    ) -> Result<ConfigureResult, PortError> {
        let channel = self.channels[id.index()]
            .as_mut()
            .ok_or(PortError::ChannelNotPresent(id))?;

        match op {
            SensorType::HwInit => {
                channel.hardware_init();
                Ok(ConfigureResult::Handled)
            }
            SensorType::Active if value => {
                let guard = &mut self.guard;
                critical_section::with(|_| {
                    if !channel.irq_enabled() {
                        guard.arm(I::Duration::ZERO);
                        channel.enable_irq();
                    }
                });
                Ok(ConfigureResult::Handled)
            }
            SensorType::Active => {
                critical_section::with(|_| channel.disable_irq());
                Ok(ConfigureResult::Handled)
            }
            SensorType::Ready => Ok(ConfigureResult::Unrecognized),
        }
    }

    /// Services the port-level interrupt.
    ///
    /// Call this from the platform's interrupt service routine whenever the
    /// port signals. For each registered channel, in fixed order (button 1
    /// first), a latched trigger is either suppressed (guard window still
    /// open) or accepted (guard rearmed for [`GUARD_WINDOW_MS`], then
    /// either a notification or - for button 2 under
    /// [`Button2Policy::Reset`] - a watchdog reset). Afterwards every
    /// registered channel's pending flag is cleared, regardless of outcome.
    ///
    /// Because the guard timer is shared, an accept on one channel
    /// suppresses a near-simultaneous genuine trigger on the other. This
    /// cross-channel suppression is inherited from the reference hardware
    /// and intentionally preserved.
    ///
    /// The whole handler runs inside a critical section, mirroring the
    /// global-interrupt-disable bracket the target's ISR executes under.
    pub fn on_port_interrupt(&mut self) {
        critical_section::with(|_| {
            let Self {
                channels,
                guard,
                events,
                watchdog,
                config,
            } = self;

            for channel in channels.iter().flatten() {
                if !channel.irq_pending() {
                    continue;
                }
                if !guard.expired() {
                    // Suppress: trigger is inside the debounce guard window
                    continue;
                }

                guard.arm(I::Duration::from_millis(GUARD_WINDOW_MS));

                if channel.id() == ButtonId::Button2
                    && config.button2_policy == Button2Policy::Reset
                {
                    // Does not return on real hardware; pending flags stay
                    // latched, as on the reference port.
                    watchdog.reboot();
                    return;
                }

                events.sensor_changed(channel.id());
            }

            for channel in channels.iter_mut().flatten() {
                channel.clear_irq_flag();
            }
        });
    }
}
