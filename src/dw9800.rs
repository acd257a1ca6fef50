/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Driver for the DW9800W voice-coil lens actuator that focuses the
//! OV13855 camera module. Registers are 8 bits wide at 8-bit addresses.

use crate::controls::{Control, ControlError, ControlId};
use crate::interface::{ControlAccess, PowerHooks};
use crate::power::SupplyGroup;
use crate::Error;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

pub const DEFAULT_I2C_ADDRESS: u8 = 0x0c;

/// Expected content of the IC info register
pub const IC_INFO: u8 = 0xf2;

pub const FOCUS_MIN: i64 = -512;
pub const FOCUS_MAX: i64 = 511;
pub const FOCUS_STEP: i64 = 1;
pub const FOCUS_DEFAULT: i64 = 0;

/// Control register bit that holds the actuator in power-down
const CONTROL_PD: u8 = 0x01;
/// VCM_MSB bit selecting the positive drive direction
const VCM_POSITIVE: u8 = 0x02;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    IcInfo = 0x00,
    /// Hardware revision in the low nibble
    IcVersion = 0x01,
    Control = 0x02,
    VcmMsb = 0x03,
    VcmLsb = 0x04,
    Status = 0x05,
    Mode = 0x06,
    Resonance = 0x07,
}

pub struct Dw9800<I2C, SUP> {
    i2c: I2C,
    address: u8,
    supply: SUP,
    focus: Control,
    revision: u8,
}

impl<I2C, CommE, SUP> Dw9800<I2C, SUP>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    SUP: SupplyGroup,
{
    /// Power the actuator up and verify its identity.
    /// The actuator is left powered on success and powered down on failure.
    pub fn new(i2c: I2C, supply: SUP, address: u8) -> Result<Self, Error<CommE>> {
        let mut lens = Self {
            i2c,
            address,
            supply,
            focus: Control::new(
                ControlId::FocusAbsolute,
                FOCUS_MIN,
                FOCUS_MAX,
                FOCUS_STEP,
                FOCUS_DEFAULT,
            ),
            revision: 0,
        };

        lens.set_power(true)?;
        if let Err(e) = lens.probe() {
            if lens.set_power(false).is_err() {
                log::warn!("failed to power down lens actuator");
            }
            return Err(e);
        }
        Ok(lens)
    }

    fn probe(&mut self) -> Result<(), Error<CommE>> {
        let info = self.read_reg_u8(Register::IcInfo as u8)?;
        if info != IC_INFO {
            log::error!("failed to detect lens actuator: {:x}", info);
            return Err(Error::Identification {
                expected: u32::from(IC_INFO),
                found: u32::from(info),
            });
        }
        self.revision = self.read_reg_u8(Register::IcVersion as u8)? & 0x0f;
        log::debug!("dw9800w revision {:x}", self.revision);

        #[cfg(feature = "rttdebug")]
        rprintln!("dw9800w rev {:x}", self.revision);
        Ok(())
    }

    pub fn revision(&self) -> u8 {
        self.revision
    }

    pub fn focus(&self) -> i64 {
        self.focus.value()
    }

    /// Power on: supply first, then release the power-down bit.
    /// Power off: assert the power-down bit, then cut the supply even if
    /// the bit could not be written.
    pub fn set_power(&mut self, enabled: bool) -> Result<(), Error<CommE>> {
        if enabled {
            self.supply.enable().map_err(|e| {
                log::warn!("lens supply enable failed: {:?}", e);
                Error::Supply
            })?;
            self.update_bits(Register::Control as u8, CONTROL_PD, 0)
        } else {
            let res = self.update_bits(Register::Control as u8, CONTROL_PD, CONTROL_PD);
            if res.is_err() {
                log::warn!("failed to assert lens power-down");
            }
            self.supply.disable().map_err(|e| {
                log::warn!("lens supply disable failed: {:?}", e);
                Error::Supply
            })?;
            res
        }
    }

    /// Move the lens. Fails with `Busy` while the actuator is powered down.
    pub fn set_focus(&mut self, value: i64) -> Result<(), Error<CommE>> {
        let mut next = self.focus;
        next.set(value)?;

        let control = self.read_reg_u8(Register::Control as u8)?;
        if control & CONTROL_PD != 0 {
            return Err(Error::Busy);
        }

        // sign-magnitude: direction bit plus a 9-bit magnitude.
        // Negative values take the magnitude of `v`, not of `v >> 8`.
        let magnitude = value.unsigned_abs();
        let mut msb = ((magnitude >> 8) & 0x01) as u8;
        if value > 0 {
            msb |= VCM_POSITIVE;
        }
        self.write_reg_u8(Register::VcmMsb as u8, msb)?;
        self.write_reg_u8(Register::VcmLsb as u8, (magnitude & 0xff) as u8)?;

        next.mark_written();
        self.focus = next;
        Ok(())
    }

    /// Hand back the bus and the supply
    pub fn release(self) -> (I2C, SUP) {
        (self.i2c, self.supply)
    }

    pub fn read_reg_u8(&mut self, reg: u8) -> Result<u8, Error<CommE>> {
        let mut recv_buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut recv_buf)
            .map_err(Error::Bus)?;
        Ok(recv_buf[0])
    }

    pub fn write_reg_u8(&mut self, reg: u8, val: u8) -> Result<(), Error<CommE>> {
        self.i2c.write(self.address, &[reg, val]).map_err(Error::Bus)
    }

    fn update_bits(&mut self, reg: u8, mask: u8, val: u8) -> Result<(), Error<CommE>> {
        let current = self.read_reg_u8(reg)?;
        self.write_reg_u8(reg, (current & !mask) | (val & mask))
    }
}

impl<I2C, CommE, SUP> ControlAccess for Dw9800<I2C, SUP>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    SUP: SupplyGroup,
{
    type Error = Error<CommE>;

    fn control(&self, id: ControlId) -> Option<Control> {
        if id == ControlId::FocusAbsolute {
            Some(self.focus)
        } else {
            None
        }
    }

    fn set_control(&mut self, id: ControlId, value: i64) -> Result<(), Self::Error> {
        match id {
            ControlId::FocusAbsolute => self.set_focus(value),
            _ => Err(ControlError::Unsupported(id).into()),
        }
    }
}

impl<I2C, CommE, SUP> PowerHooks for Dw9800<I2C, SUP>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    SUP: SupplyGroup,
{
    type Error = Error<CommE>;

    fn suspend(&mut self) -> Result<(), Self::Error> {
        self.set_power(false)
    }

    fn resume(&mut self) -> Result<(), Self::Error> {
        self.set_power(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusLog, Event, Events, MockBus, MockBusError, MockSupplies, PowerRig};

    type Lens = Dw9800<MockBus, MockSupplies>;

    fn build(info: u8) -> (Result<Lens, Error<MockBusError>>, BusLog, Events) {
        let bus = MockBus::new();
        let log = bus.log();
        // control register (powered down), IC info, then IC version only
        // when the probe gets that far
        log.queue_read(&[0x01]);
        log.queue_read(&[info]);
        if info == IC_INFO {
            log.queue_read(&[0x13]);
        }
        let rig = PowerRig::new();
        let events = rig.events.clone();
        (Dw9800::new(bus, rig.supplies, DEFAULT_I2C_ADDRESS), log, events)
    }

    fn lens() -> (Lens, BusLog, Events) {
        let (lens, log, events) = build(IC_INFO);
        let lens = lens.expect("probe");
        log.clear();
        events.clear();
        (lens, log, events)
    }

    #[test]
    fn test_probe() {
        let (lens, log, events) = build(IC_INFO);
        let lens = lens.expect("probe");
        assert_eq!(lens.revision(), 0x03);
        assert_eq!(lens.focus(), FOCUS_DEFAULT);
        assert_eq!(events.actions(), vec![Event::SuppliesOn]);
        // power-down bit released
        assert_eq!(log.writes(), vec![vec![0x02, 0x00]]);
        assert_eq!(log.read_addresses(), vec![vec![0x02], vec![0x00], vec![0x01]]);
        assert!(log.addresses().iter().all(|a| *a == DEFAULT_I2C_ADDRESS));
    }

    #[test]
    fn test_probe_mismatch_powers_down() {
        let (lens, log, events) = build(0x55);
        assert!(matches!(
            lens,
            Err(Error::Identification { expected: 0xf2, found: 0x55 })
        ));
        assert_eq!(events.actions(), vec![Event::SuppliesOn, Event::SuppliesOff]);
        assert_eq!(log.writes().last().expect("writes"), &vec![0x02, 0x01]);
        // no version read after the mismatch
        assert_eq!(log.read_addresses(), vec![vec![0x02], vec![0x00], vec![0x02]]);
    }

    #[test]
    fn test_probe_mismatch_keeps_other_control_bits() {
        let bus = MockBus::new();
        let log = bus.log();
        log.queue_read(&[0x01]);
        log.queue_read(&[0x55]);
        log.queue_read(&[0x12]);
        let rig = PowerRig::new();
        let res = Dw9800::new(bus, rig.supplies, DEFAULT_I2C_ADDRESS);
        assert!(res.is_err());
        assert_eq!(log.writes().last().expect("writes"), &vec![0x02, 0x13]);
    }

    #[test]
    fn test_probe_mismatch_with_failed_power_down() {
        let bus = MockBus::new();
        let log = bus.log();
        log.queue_read(&[0x01]);
        log.queue_read(&[0x55]);
        // power-up read and write, IC info read, then the bus dies
        log.fail_after(3);
        let rig = PowerRig::new();
        let events = rig.events.clone();
        let res = Dw9800::new(bus, rig.supplies, DEFAULT_I2C_ADDRESS);
        assert!(matches!(
            res,
            Err(Error::Identification { expected: 0xf2, found: 0x55 })
        ));
        assert_eq!(events.actions(), vec![Event::SuppliesOn, Event::SuppliesOff]);
    }

    #[test]
    fn test_probe_supply_failure() {
        let rig = PowerRig::new();
        rig.events.fail_supplies(true);
        let bus = MockBus::new();
        let log = bus.log();
        let res = Dw9800::new(bus, rig.supplies, DEFAULT_I2C_ADDRESS);
        assert!(matches!(res, Err(Error::Supply)));
        assert!(log.writes().is_empty());
    }

    #[test]
    fn test_focus_positive() {
        let (mut lens, log, _) = lens();
        lens.set_control(ControlId::FocusAbsolute, 300).expect("focus");
        assert_eq!(log.writes(), vec![vec![0x03, 0x03], vec![0x04, 0x2c]]);
        assert_eq!(lens.focus(), 300);
    }

    #[test]
    fn test_focus_negative_and_zero() {
        let (mut lens, log, _) = lens();
        lens.set_control(ControlId::FocusAbsolute, -300).expect("focus");
        lens.set_control(ControlId::FocusAbsolute, 0).expect("focus");
        lens.set_control(ControlId::FocusAbsolute, FOCUS_MIN).expect("focus");
        assert_eq!(
            log.writes(),
            vec![
                vec![0x03, 0x01],
                vec![0x04, 0x2c],
                vec![0x03, 0x00],
                vec![0x04, 0x00],
                vec![0x03, 0x00],
                vec![0x04, 0x00],
            ]
        );
        assert_eq!(lens.focus(), FOCUS_MIN);
    }

    #[test]
    fn test_focus_busy_while_powered_down() {
        let (mut lens, log, _) = lens();
        log.queue_read(&[0x01]);
        assert!(matches!(
            lens.set_control(ControlId::FocusAbsolute, 10),
            Err(Error::Busy)
        ));
        assert!(log.writes().is_empty());
        assert_eq!(lens.focus(), FOCUS_DEFAULT);
    }

    #[test]
    fn test_focus_out_of_range() {
        let (mut lens, log, _) = lens();
        for &value in &[FOCUS_MAX + 1, FOCUS_MIN - 1] {
            assert_eq!(
                lens.set_control(ControlId::FocusAbsolute, value),
                Err(Error::Control(ControlError::OutOfRange {
                    id: ControlId::FocusAbsolute,
                    value
                }))
            );
        }
        assert!(log.read_addresses().is_empty());
        assert!(log.writes().is_empty());
    }

    #[test]
    fn test_only_focus_supported() {
        let (mut lens, _, _) = lens();
        assert!(lens.control(ControlId::Exposure).is_none());
        let focus = lens.control(ControlId::FocusAbsolute).expect("focus");
        assert_eq!((focus.minimum, focus.maximum), (FOCUS_MIN, FOCUS_MAX));
        assert_eq!(
            lens.set_control(ControlId::Exposure, 10),
            Err(Error::Control(ControlError::Unsupported(ControlId::Exposure)))
        );
    }

    #[test]
    fn test_suspend_resume() {
        let (mut lens, log, events) = lens();
        lens.suspend().expect("suspend");
        assert_eq!(log.writes(), vec![vec![0x02, 0x01]]);
        assert_eq!(events.actions(), vec![Event::SuppliesOff]);

        log.clear();
        events.clear();
        log.queue_read(&[0x01]);
        lens.resume().expect("resume");
        assert_eq!(events.actions(), vec![Event::SuppliesOn]);
        assert_eq!(log.writes(), vec![vec![0x02, 0x00]]);
    }

    #[test]
    fn test_power_off_cuts_supply_on_bus_error() {
        let (mut lens, log, events) = lens();
        log.fail_after(0);
        assert_eq!(lens.set_power(false), Err(Error::Bus(MockBusError)));
        assert_eq!(events.actions(), vec![Event::SuppliesOff]);
    }
}
