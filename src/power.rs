/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Ordered bring-up and tear-down of the reset line, supply rails and
//! reference clock.

use core::fmt::Debug;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

/// All supply rails of a device, switched as one group.
/// A failed `enable` must leave no rail of the group enabled.
pub trait SupplyGroup {
    type Error: Debug;

    fn enable(&mut self) -> Result<(), Self::Error>;
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// External reference (master) clock feeding the device
pub trait ReferenceClock {
    type Error: Debug;

    fn set_rate(&mut self, hz: u32) -> Result<(), Self::Error>;
    fn enable(&mut self) -> Result<(), Self::Error>;
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// Stand-in for boards that do not wire the reset line
pub struct NoReset;

impl OutputPin for NoReset {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Power sequencing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerError {
    /// The supply group could not be enabled
    Supply,
    /// The reference clock could not be enabled or configured
    Clock,
    /// The reset line could not be driven
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Off,
    SuppliesEnabling,
    ClockEnabling,
    Ready,
}

/// Fixed delays, in microseconds, between bring-up steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTiming {
    /// After enabling the supplies, before asserting reset
    pub supply_us: u32,
    /// After asserting reset, before enabling the clock
    pub reset_us: u32,
    /// After enabling the clock, before the first register access
    pub clock_us: u32,
}

impl Default for SettleTiming {
    fn default() -> Self {
        Self {
            supply_us: 1_000,
            reset_us: 5_000,
            clock_us: 10_000,
        }
    }
}

/// Exclusively owns the reset line, supplies, clock and delay source
pub struct PowerSequencer<RST, SUP, CLK, D> {
    reset: RST,
    supplies: SUP,
    clock: CLK,
    delay: D,
    timing: SettleTiming,
    state: PowerState,
}

impl<RST, SUP, CLK, D> PowerSequencer<RST, SUP, CLK, D>
where
    RST: OutputPin,
    SUP: SupplyGroup,
    CLK: ReferenceClock,
    D: DelayUs<u32>,
{
    pub fn new(reset: RST, supplies: SUP, clock: CLK, delay: D) -> Self {
        Self {
            reset,
            supplies,
            clock,
            delay,
            timing: SettleTiming::default(),
            state: PowerState::Off,
        }
    }

    pub fn with_timing(mut self, timing: SettleTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn set_clock_rate(&mut self, hz: u32) -> Result<(), PowerError> {
        self.clock.set_rate(hz).map_err(|e| {
            log::warn!("could not set reference clock to {} Hz: {:?}", hz, e);
            PowerError::Clock
        })
    }

    /// Bring the device from `Off` to `Ready`.
    ///
    /// A supply failure leaves the device `Off`. A clock failure leaves
    /// the supplies enabled and the reset line asserted; the caller unwinds
    /// with [`power_down`](Self::power_down). Nothing is retried.
    pub fn power_up(&mut self) -> Result<(), PowerError> {
        if self.state == PowerState::Ready {
            return Ok(());
        }
        #[cfg(feature = "rttdebug")]
        rprintln!("ov13855 power up");

        self.reset.set_low().map_err(|_| PowerError::Reset)?;

        self.state = PowerState::SuppliesEnabling;
        if let Err(e) = self.supplies.enable() {
            log::warn!("failed to enable supplies: {:?}", e);
            self.state = PowerState::Off;
            return Err(PowerError::Supply);
        }
        self.delay.delay_us(self.timing.supply_us);

        self.reset.set_high().map_err(|_| PowerError::Reset)?;
        self.delay.delay_us(self.timing.reset_us);

        self.state = PowerState::ClockEnabling;
        if let Err(e) = self.clock.enable() {
            log::warn!("failed to enable reference clock: {:?}", e);
            return Err(PowerError::Clock);
        }
        self.delay.delay_us(self.timing.clock_us);

        self.state = PowerState::Ready;
        log::debug!("power sequence complete");
        Ok(())
    }

    /// Release reset, stop the clock and drop the supplies.
    /// Failures here are logged and otherwise ignored.
    pub fn power_down(&mut self) {
        if self.state == PowerState::Off {
            return;
        }
        #[cfg(feature = "rttdebug")]
        rprintln!("ov13855 power down");

        if self.reset.set_low().is_err() {
            log::warn!("failed to release reset line");
        }
        if self.state == PowerState::Ready {
            if let Err(e) = self.clock.disable() {
                log::warn!("failed to disable reference clock: {:?}", e);
            }
        }
        if let Err(e) = self.supplies.disable() {
            log::warn!("failed to disable supplies: {:?}", e);
        }
        self.state = PowerState::Off;
    }

    /// Give back the owned handles, in construction order
    pub fn release(self) -> (RST, SUP, CLK, D) {
        (self.reset, self.supplies, self.clock, self.delay)
    }
}
