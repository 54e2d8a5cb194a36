//! The framework-facing sensor capability interface.
//!
//! Every sensor in the surrounding framework exposes the same capability
//! triplet: read a value, query a status, apply a configuration. The
//! [`Sensor`] trait captures that contract; [`ButtonSensor`] implements it
//! for one button channel, hiding the shared debounce state behind the
//! port.

use crate::channel::ButtonPins;
use crate::port::{ButtonPort, SensorEvents, Watchdog};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{BUTTON_SENSOR, ButtonId, ConfigureResult, PortError, SensorType};

/// The framework-wide active-sensor contract.
///
/// One implementation serves every channel of a sensor family; the
/// framework registers sensors against their type tag and dispatches the
/// triplet through this trait.
pub trait Sensor {
    /// The type tag this sensor registers under.
    fn sensor_type(&self) -> &'static str;

    /// Reads the sensor value. The query code is reserved by the framework
    /// contract and may be ignored.
    fn value(&self, query: SensorType) -> bool;

    /// Answers a status query.
    fn status(&self, query: SensorType) -> bool;

    /// Applies a configure operation.
    fn configure(&mut self, op: SensorType, value: bool) -> ConfigureResult;
}

/// Capability handle for one button channel on a port.
///
/// Obtained from [`ButtonPort::sensor`]; borrows the port exclusively for
/// as long as the handle lives, which is also what makes its operations
/// infallible: the channel was present at creation and channels are never
/// removed.
pub struct ButtonSensor<'p, 't, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    port: &'p mut ButtonPort<'t, I, P, E, W, T>,
    id: ButtonId,
}

impl<'p, 't, I, P, E, W, T> ButtonSensor<'p, 't, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    /// Returns which button this handle serves.
    pub fn id(&self) -> ButtonId {
        self.id
    }
}

impl<'p, 't, I, P, E, W, T> Sensor for ButtonSensor<'p, 't, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    fn sensor_type(&self) -> &'static str {
        BUTTON_SENSOR
    }

    fn value(&self, query: SensorType) -> bool {
        // Channel presence was verified when the handle was created.
        self.port.value(self.id, query).unwrap_or(false)
    }

    fn status(&self, query: SensorType) -> bool {
        self.port.status(self.id, query).unwrap_or(false)
    }

    fn configure(&mut self, op: SensorType, value: bool) -> ConfigureResult {
        self.port
            .configure(self.id, op, value)
            .unwrap_or(ConfigureResult::Unrecognized)
    }
}

impl<'t, I, P, E, W, T> ButtonPort<'t, I, P, E, W, T>
where
    I: TimeInstant,
    P: ButtonPins,
    E: SensorEvents,
    W: Watchdog,
    T: TimeSource<I>,
{
    /// Returns the capability handle for a registered channel.
    ///
    /// # Errors
    /// Returns `ChannelNotPresent` if the channel is not registered.
    pub fn sensor(
        &mut self,
        id: ButtonId,
    ) -> Result<ButtonSensor<'_, 't, I, P, E, W, T>, PortError> {
        if !self.contains(id) {
            return Err(PortError::ChannelNotPresent(id));
        }
        Ok(ButtonSensor { port: self, id })
    }
}
