/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Capability interfaces the drivers expose to higher layers.
//! Each device implements the subset that applies to it.

use crate::controls::{Control, ControlId};

/// Media bus pixel codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BusFormat {
    /// Raw Bayer BGGR, 10 bits per sample
    Sbggr10 = 0x3007,
}

/// An applied or proposed frame format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub width: u32,
    pub height: u32,
    pub code: BusFormat,
}

/// Enumerates what the device can produce, by index.
/// Returns `None` past the last entry.
pub trait ModeQuery {
    fn bus_format(&self, index: usize) -> Option<BusFormat>;
    fn frame_size(&self, index: usize) -> Option<(u32, u32)>;
}

pub trait FormatNegotiation {
    type Error;

    /// Format currently in effect
    fn format(&self) -> Format;

    /// Format that `set_format` would apply, without applying it
    fn try_format(&self, width: u32, height: u32) -> Format;

    /// Apply the closest supported format and return it
    fn set_format(&mut self, width: u32, height: u32) -> Result<Format, Self::Error>;
}

pub trait ControlAccess {
    type Error;

    /// Snapshot of a control, or `None` if the device lacks it
    fn control(&self, id: ControlId) -> Option<Control>;

    fn set_control(&mut self, id: ControlId, value: i64) -> Result<(), Self::Error>;
}

pub trait StreamControl {
    type Error;

    fn enable_stream(&mut self) -> Result<(), Self::Error>;

    /// Never fails to leave the device in standby
    fn disable_stream(&mut self) -> Result<(), Self::Error>;
}

/// System sleep hooks, driven by the platform power manager
pub trait PowerHooks {
    type Error;

    fn suspend(&mut self) -> Result<(), Self::Error>;
    fn resume(&mut self) -> Result<(), Self::Error>;
}
