/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/
#![cfg_attr(not(test), no_std)]

//! Control driver for the OmniVision OV13855 image sensor
//! This imaging sensor has multiple interfaces:
//! - Two-wire i2c (SCCB) for configuration registers
//! - MIPI CSI-2 pixel data out
//! - External reference clock, reset line and three supply rails
//! This driver is concerned with the configuration interface and the power
//! sequencing needed before it responds: mode selection, exposure and
//! blanking controls, and the standby/streaming state.
//!
//! A companion driver for the DW9800W voice-coil lens actuator
//! is in [`dw9800`].

pub mod controls;
pub mod dw9800;
pub mod interface;
pub mod modes;
pub mod power;
pub mod sensor;
pub mod tables;
pub mod transport;

#[cfg(test)]
pub mod mock;

use core::fmt;

pub use controls::{Control, ControlError, ControlGraph, ControlId};
pub use dw9800::Dw9800;
pub use interface::{
    BusFormat, ControlAccess, Format, FormatNegotiation, ModeQuery, PowerHooks, StreamControl,
};
pub use modes::{FrequencyConfig, Mode, ModeCatalog, CATALOG};
pub use power::{
    NoReset, PowerError, PowerSequencer, PowerState, ReferenceClock, SettleTiming, SupplyGroup,
};
pub use sensor::{Config, Identity, Ov13855};
pub use transport::{Reg, RegisterTransport};

/// Errors in this crate
#[derive(Debug, PartialEq)]
pub enum Error<CommE> {
    /// Sensor communication error, including short transfers
    Bus(CommE),

    /// Register access wider than four bytes (or empty)
    InvalidWidth(usize),

    /// Control write rejected, device state unchanged
    Control(ControlError),

    /// Supply rails could not be enabled
    Supply,

    /// Reference clock could not be configured or enabled
    Clock,

    /// Reset line could not be driven
    Reset,

    /// Chip identity register did not hold the expected value
    Identification { expected: u32, found: u32 },

    /// Lens actuator is held in power-down and cannot move
    Busy,
}

impl<CommE> From<ControlError> for Error<CommE> {
    fn from(err: ControlError) -> Self {
        Error::Control(err)
    }
}

impl<CommE> From<PowerError> for Error<CommE> {
    fn from(err: PowerError) -> Self {
        match err {
            PowerError::Supply => Error::Supply,
            PowerError::Clock => Error::Clock,
            PowerError::Reset => Error::Reset,
        }
    }
}

impl<CommE: fmt::Debug> fmt::Display for Error<CommE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidWidth(w) => write!(f, "invalid register width {}", w),
            Error::Control(ControlError::ReadOnly(id)) => {
                write!(f, "control {:?} is read-only", id)
            }
            Error::Control(ControlError::OutOfRange { id, value }) => {
                write!(f, "value {} out of range for {:?}", value, id)
            }
            Error::Control(ControlError::Unsupported(id)) => {
                write!(f, "control {:?} not supported", id)
            }
            Error::Supply => write!(f, "failed to enable supplies"),
            Error::Clock => write!(f, "failed to enable reference clock"),
            Error::Reset => write!(f, "failed to drive reset line"),
            Error::Identification { expected, found } => {
                write!(f, "chip id mismatch: {:x} != {:x}", expected, found)
            }
            Error::Busy => write!(f, "device busy"),
        }
    }
}

/// 7-bit bus address with the SID pin low
pub const DEFAULT_I2C_ADDRESS: u8 = 0x36;
/// 7-bit bus address with the SID pin high
pub const ALT_I2C_ADDRESS: u8 = 0x10;

/// Expected content of the 24-bit chip id register
pub const CHIP_ID: u32 = 0x00d855;

/// Reference clock rate the mode tables are computed for
pub const XCLK_FREQ: u32 = 23_800_000;

/// Frames to drop after streaming starts, while the sensor settles
pub const NUM_OF_SKIP_FRAMES: u32 = 2;

pub const MODE_STANDBY: u32 = 0x00;
pub const MODE_STREAMING: u32 = 0x01;
pub const SOFTWARE_RST: u32 = 0x01;

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    ModeSelect = 0x0100,
    SoftwareReset = 0x0103,
    /// 24 bits wide
    ChipId = 0x300a,
    /// Frame length in lines, 16 bits
    Vts = 0x380e,
    /// Coarse exposure in 1/16 line units, 24 bits
    Exposure = 0x3500,
    AnalogGain = 0x3508,
    TestPattern = 0x4503,
    /// Digital white-balance gains, 16 bits each
    BlueGain = 0x5100,
    GreenGain = 0x5102,
    RedGain = 0x5104,
}
