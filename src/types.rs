//! Core types for the button sensor driver.

/// Framework type tag under which button sensors are registered.
pub const BUTTON_SENSOR: &str = "button";

/// Identifies one of the two button channels a port can serve.
///
/// The interrupt handler always scans channels in this order: `Button1`
/// first, then `Button2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// First button channel.
    Button1,

    /// Second button channel (dual-button hardware only).
    Button2,
}

impl ButtonId {
    /// Returns the channel's fixed slot index on the port.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ButtonId::Button1 => 0,
            ButtonId::Button2 => 1,
        }
    }
}

/// Which electrical edge triggers a channel's interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolarity {
    /// Interrupt fires when the button is pressed.
    PressTriggered,

    /// Interrupt fires when the button is released.
    ReleaseTriggered,
}

/// Request type codes recognized by the sensor capability interface.
///
/// `HwInit` and `Active` are configure codes; `Active` and `Ready` are
/// status-query codes. `value()` accepts a type code but ignores it
/// (reserved by the generic framework contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorType {
    /// One-time hardware setup, invoked by the platform bootstrap.
    HwInit,

    /// Activation toggle (configure) or is-active query (status).
    Active,

    /// Is-ready query (status only).
    Ready,
}

/// Outcome of a `configure` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigureResult {
    /// The operation type was recognized and applied.
    Handled,

    /// The operation type is not a configure code for this sensor.
    Unrecognized,
}

/// What an accepted trigger on button 2 does.
///
/// Selected once at port construction, mirroring the build-time choice on
/// the reference hardware. Mutually exclusive with notification delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button2Policy {
    /// Raise a sensor-changed event, same as button 1.
    Notify,

    /// Trigger an unconditional hardware reset instead of an event.
    Reset,
}

/// Errors that can occur during port channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// No channel with this ID is registered on the port.
    ChannelNotPresent(ButtonId),

    /// A channel with this ID is already registered on the port.
    DuplicateChannel(ButtonId),
}

impl core::fmt::Display for PortError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PortError::ChannelNotPresent(id) => {
                write!(f, "channel {:?} is not registered on this port", id)
            }
            PortError::DuplicateChannel(id) => {
                write!(f, "channel {:?} is already registered on this port", id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PortError {}
