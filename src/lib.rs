#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonPort`**: one hardware interrupt port serving one or two button channels,
//!   owning the shared debounce guard timer and servicing the port interrupt
//! - **`ButtonChannel`**: per-button state — trigger-edge polarity, one-time hardware setup,
//!   the raw-level and interrupt-latch pin capabilities
//! - **`GuardTimer`**: the single per-port countdown that suppresses re-triggers inside
//!   the 125 ms guard window
//! - **`Sensor` / `ButtonSensor`**: the framework's value/status/configure capability
//!   triplet, one handle per channel
//! - **`ButtonPins`**: trait to implement for your pin and interrupt-latch registers
//! - **`SensorEvents`** / **`Watchdog`**: traits for the event dispatcher and reset
//!   collaborators
//! - **`TimeSource`**: trait to implement for your timing system
//!
//! Foreground calls into the port and the port interrupt handler are kept atomic with
//! respect to each other via the `critical-section` crate; provide an implementation
//! for your target (HALs usually do).

pub mod channel;
pub mod port;
pub mod sensor;
pub mod time;
pub mod timer;
pub mod types;

pub use channel::{ButtonChannel, ButtonPins};
pub use port::{ButtonPort, NoReset, PortConfig, SensorEvents, Watchdog};
pub use sensor::{ButtonSensor, Sensor};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use timer::{GUARD_WINDOW_MS, GuardTimer};
pub use types::{
    BUTTON_SENSOR, Button2Policy, ButtonId, ConfigureResult, EdgePolarity, PortError, SensorType,
};
