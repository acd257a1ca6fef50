/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! The sensor instance: power reference counting, mode selection and the
//! standby/streaming state machine.
//!
//! Every mutating operation takes `&mut self`, so the exclusive borrow is the
//! device lock; embedders sharing the driver wrap it in the mutex of their
//! execution context. Hardware waits are fixed delays and block the caller.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

use crate::controls::{Control, ControlGraph, ControlId};
use crate::interface::{
    BusFormat, ControlAccess, Format, FormatNegotiation, ModeQuery, PowerHooks, StreamControl,
};
use crate::modes::{Mode, ModeCatalog, CATALOG};
use crate::power::{PowerSequencer, PowerState, ReferenceClock, SettleTiming, SupplyGroup};
use crate::transport::{RegisterTransport, WIDTH_24BIT, WIDTH_8BIT};
use crate::{tables, Error, Register};

/// Frame interval as (numerator, denominator) seconds
pub const FRAME_INTERVAL: (u32, u32) = (1, 30);

/// Instance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub address: u8,
    pub xclk_hz: u32,
    pub timing: SettleTiming,
    /// Catalog index of the mode selected at construction
    pub initial_mode: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: crate::DEFAULT_I2C_ADDRESS,
            xclk_hz: crate::XCLK_FREQ,
            timing: SettleTiming::default(),
            initial_mode: 0,
        }
    }
}

impl Config {
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_xclk(mut self, hz: u32) -> Self {
        self.xclk_hz = hz;
        self
    }

    pub fn with_timing(mut self, timing: SettleTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_initial_mode(mut self, index: usize) -> Self {
        self.initial_mode = index;
        self
    }
}

/// Outcome of the chip identity check made at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Verified,
    Mismatch { found: u32 },
    /// Power-up or the identity read itself failed
    Unreadable,
}

/// Main driver struct
pub struct Ov13855<I2C, RST, SUP, CLK, D> {
    transport: RegisterTransport<I2C>,
    power: PowerSequencer<RST, SUP, CLK, D>,
    catalog: &'static ModeCatalog,
    controls: ControlGraph,
    mode: &'static Mode,
    power_count: u32,
    streaming: bool,
    suspended: bool,
    identity: Identity,
}

impl<I2C, CommE, RST, SUP, CLK, D> Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    /// Create a new instance in standby with power off.
    ///
    /// Sets the reference clock rate, then briefly powers the sensor to check
    /// its identity. An identity failure does not prevent construction: check
    /// [`identity`](Self::identity) before accepting the device.
    pub fn new(
        i2c: I2C,
        power: PowerSequencer<RST, SUP, CLK, D>,
        config: Config,
    ) -> Result<Self, Error<CommE>> {
        let mut power = power.with_timing(config.timing);
        power.set_clock_rate(config.xclk_hz)?;

        let catalog = &CATALOG;
        let mode = match catalog.mode(config.initial_mode) {
            Some(mode) => mode,
            None => {
                log::warn!("no mode {}, using default", config.initial_mode);
                catalog.default_mode()
            }
        };

        let mut sensor = Self {
            transport: RegisterTransport::new(i2c, config.address),
            power,
            catalog,
            controls: ControlGraph::new(catalog, mode),
            mode,
            power_count: 0,
            streaming: false,
            suspended: false,
            identity: Identity::Unreadable,
        };

        sensor.identity = match sensor.identify() {
            Ok(_) => Identity::Verified,
            Err(Error::Identification { found, .. }) => Identity::Mismatch { found },
            Err(_) => {
                log::error!("failed to find sensor");
                Identity::Unreadable
            }
        };
        Ok(sensor)
    }

    /// Read the 24-bit chip id, powering the sensor for the duration
    pub fn identify(&mut self) -> Result<u32, Error<CommE>> {
        self.enable_power()?;
        let res = self.transport.read(Register::ChipId as u16, WIDTH_24BIT);
        self.disable_power();

        let found = res?;
        if found != crate::CHIP_ID {
            log::error!("chip id mismatch: {:x}!={:x}", crate::CHIP_ID, found);
            return Err(Error::Identification {
                expected: crate::CHIP_ID,
                found,
            });
        }
        Ok(found)
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Take a power reference. The first reference runs the power-up
    /// sequence; a failure is unwound and leaves the count unchanged.
    pub fn enable_power(&mut self) -> Result<(), Error<CommE>> {
        if self.power_count == 0 {
            if let Err(e) = self.power.power_up() {
                self.power.power_down();
                return Err(e.into());
            }
        }
        self.power_count += 1;
        Ok(())
    }

    /// Drop a power reference. Dropping the last one powers the sensor down,
    /// after which every control must be rewritten.
    pub fn disable_power(&mut self) {
        if self.power_count == 0 {
            log::warn!("unbalanced power disable");
            return;
        }
        self.power_count -= 1;
        if self.power_count == 0 {
            self.power.power_down();
            self.controls.mark_all_pending();
        }
    }

    pub fn power_count(&self) -> u32 {
        self.power_count
    }

    pub fn power_state(&self) -> PowerState {
        self.power.state()
    }

    pub fn is_powered(&self) -> bool {
        self.power_count > 0
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub fn mode(&self) -> &'static Mode {
        self.mode
    }

    pub fn controls(&self) -> &ControlGraph {
        &self.controls
    }

    pub fn get_control(&self, id: ControlId) -> Option<i64> {
        self.controls.get(id)
    }

    /// Record a control value. When powered the register write happens
    /// now; otherwise it is deferred to the replay at the next stream start.
    pub fn set_control(&mut self, id: ControlId, value: i64) -> Result<(), Error<CommE>> {
        self.controls.set(id, value, self.mode)?;
        if self.is_powered() {
            self.controls.flush(&mut self.transport, self.mode)?;
        }
        Ok(())
    }

    /// Select the closest supported mode and re-derive the dependent controls.
    /// Takes effect on the sensor at the next stream start.
    pub fn select_mode(&mut self, width: u32, height: u32) -> Result<&'static Mode, Error<CommE>> {
        let mode = self.catalog.find_best_fit(width, height);
        self.mode = mode;
        self.controls.apply_mode(self.catalog, mode);
        log::debug!("mode {}x{}", mode.width, mode.height);
        if self.is_powered() {
            self.controls.flush(&mut self.transport, self.mode)?;
        }
        Ok(mode)
    }

    pub fn frame_interval(&self) -> (u32, u32) {
        FRAME_INTERVAL
    }

    pub fn skip_frames(&self) -> u32 {
        crate::NUM_OF_SKIP_FRAMES
    }

    /// Switch between standby and streaming. Repeating the current state
    /// is a no-op. A failed start leaves the sensor in standby with its
    /// power reference released. While suspended, stopping only cancels the
    /// restart that resume would perform.
    pub fn set_stream(&mut self, enable: bool) -> Result<(), Error<CommE>> {
        if self.streaming == enable {
            return Ok(());
        }
        if self.suspended {
            // already stopped and unpowered by suspend; only streaming may be
            // set here, so cancel the pending restart
            self.suspended = false;
            self.streaming = false;
            return Ok(());
        }
        if enable {
            self.enable_power()?;
            if let Err(e) = self.start_streaming() {
                self.disable_power();
                return Err(e);
            }
        } else {
            self.stop_streaming();
            self.disable_power();
        }
        self.streaming = enable;
        Ok(())
    }

    /// Soft reset, full init sequence, current mode, every control value,
    /// then the streaming bit.
    fn start_streaming(&mut self) -> Result<(), Error<CommE>> {
        #[cfg(feature = "rttdebug")]
        rprintln!("ov13855 stream start");

        self.transport
            .write(Register::SoftwareReset as u16, WIDTH_8BIT, crate::SOFTWARE_RST)
            .map_err(|e| {
                log::warn!("failed to issue software reset");
                e
            })?;
        self.transport.write_sequence(&tables::INIT_SETTING)?;
        self.catalog.apply(self.mode, &mut self.transport)?;
        self.controls.replay(&mut self.transport, self.mode)?;
        self.transport
            .write(Register::ModeSelect as u16, WIDTH_8BIT, crate::MODE_STREAMING)?;

        log::debug!("streaming {}x{}", self.mode.width, self.mode.height);
        Ok(())
    }

    fn stop_streaming(&mut self) {
        let res = self
            .transport
            .write(Register::ModeSelect as u16, WIDTH_8BIT, crate::MODE_STANDBY);
        if res.is_err() {
            log::warn!("failed to write standby");
        }
    }

    /// Put the sensor to sleep for a system suspend. The streaming flag
    /// survives so that [`resume`](Self::resume) knows whether to restart.
    pub fn suspend(&mut self) {
        if self.suspended || !self.streaming {
            return;
        }
        self.stop_streaming();
        self.disable_power();
        self.suspended = true;
    }

    /// Restart streaming if it was active at suspend time.
    /// On failure the sensor is left in standby and the flag cleared.
    pub fn resume(&mut self) -> Result<(), Error<CommE>> {
        if !(self.suspended && self.streaming) {
            self.suspended = false;
            return Ok(());
        }
        self.suspended = false;

        if let Err(e) = self.enable_power() {
            self.streaming = false;
            return Err(e);
        }
        if let Err(e) = self.start_streaming() {
            self.stop_streaming();
            self.disable_power();
            self.streaming = false;
            return Err(e);
        }
        Ok(())
    }

    /// Stop streaming, drop every power reference and hand back the hardware
    pub fn release(mut self) -> (I2C, RST, SUP, CLK, D) {
        if self.streaming && !self.suspended {
            self.stop_streaming();
        }
        self.streaming = false;
        while self.power_count > 0 {
            self.disable_power();
        }
        let (reset, supplies, clock, delay) = self.power.release();
        (self.transport.release(), reset, supplies, clock, delay)
    }

    fn current_format(mode: &Mode) -> Format {
        Format {
            width: mode.width,
            height: mode.height,
            code: BusFormat::Sbggr10,
        }
    }
}

impl<I2C, CommE, RST, SUP, CLK, D> ModeQuery for Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    /// Only one Bayer order is supported
    fn bus_format(&self, index: usize) -> Option<BusFormat> {
        if index == 0 {
            Some(BusFormat::Sbggr10)
        } else {
            None
        }
    }

    fn frame_size(&self, index: usize) -> Option<(u32, u32)> {
        self.catalog.mode(index).map(|m| (m.width, m.height))
    }
}

impl<I2C, CommE, RST, SUP, CLK, D> FormatNegotiation for Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    type Error = Error<CommE>;

    fn format(&self) -> Format {
        Self::current_format(self.mode)
    }

    fn try_format(&self, width: u32, height: u32) -> Format {
        Self::current_format(self.catalog.find_best_fit(width, height))
    }

    fn set_format(&mut self, width: u32, height: u32) -> Result<Format, Self::Error> {
        let mode = self.select_mode(width, height)?;
        Ok(Self::current_format(mode))
    }
}

impl<I2C, CommE, RST, SUP, CLK, D> ControlAccess for Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    type Error = Error<CommE>;

    fn control(&self, id: ControlId) -> Option<Control> {
        self.controls.control(id).copied()
    }

    fn set_control(&mut self, id: ControlId, value: i64) -> Result<(), Self::Error> {
        Ov13855::set_control(self, id, value)
    }
}

impl<I2C, CommE, RST, SUP, CLK, D> StreamControl for Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    type Error = Error<CommE>;

    fn enable_stream(&mut self) -> Result<(), Self::Error> {
        self.set_stream(true)
    }

    fn disable_stream(&mut self) -> Result<(), Self::Error> {
        self.set_stream(false)
    }
}

impl<I2C, CommE, RST, SUP, CLK, D> PowerHooks for Ov13855<I2C, RST, SUP, CLK, D>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    type Error = Error<CommE>;

    fn suspend(&mut self) -> Result<(), Self::Error> {
        Ov13855::suspend(self);
        Ok(())
    }

    fn resume(&mut self) -> Result<(), Self::Error> {
        Ov13855::resume(self)
    }
}
