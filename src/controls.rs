/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Range-bounded device controls and the dependencies between them.
//!
//! Values are recorded here whether or not the sensor is powered. Each
//! control carries a deferred-write flag: it is raised whenever the value
//! changes and cleared once the value reaches the device, either through an
//! immediate write or through a full replay when streaming starts.

use crate::modes::{Mode, ModeCatalog};
use crate::transport::{RegisterTransport, WIDTH_16BIT, WIDTH_24BIT, WIDTH_8BIT};
use crate::{Error, Register};

/// Smallest vertical blank, in lines, for modes whose own timing allows it
pub const VBLANK_MIN: i64 = 56;
/// Largest frame length the VTS register can hold
pub const VTS_MAX: i64 = 0x7fff;

pub const EXPOSURE_MIN: i64 = 4;
pub const EXPOSURE_STEP: i64 = 1;
pub const EXPOSURE_DEFAULT: i64 = 0x640;
/// Lines of frame length that exposure may not use
pub const EXPOSURE_MARGIN: i64 = 8;

pub const ANA_GAIN_MIN: i64 = 0;
pub const ANA_GAIN_MAX: i64 = 0x1fff;
pub const ANA_GAIN_STEP: i64 = 1;
pub const ANA_GAIN_DEFAULT: i64 = 0x80;

/// Digital gain is in 1/1024 steps: 1024 is 1x, the maximum 16x
pub const DGTL_GAIN_MIN: i64 = 0;
pub const DGTL_GAIN_MAX: i64 = 16384;
pub const DGTL_GAIN_STEP: i64 = 1;
pub const DGTL_GAIN_DEFAULT: i64 = 1024;

const TEST_PATTERN_ENABLE: u32 = 0x80;
const TEST_PATTERN_MASK: u32 = 0xfc;

pub const TEST_PATTERN_MENU: [&str; 5] = [
    "Disabled",
    "Vertical Color Bar Type 1",
    "Vertical Color Bar Type 2",
    "Vertical Color Bar Type 3",
    "Vertical Color Bar Type 4",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    /// Index into the link frequency menu
    LinkFrequency,
    PixelRate,
    VerticalBlank,
    HorizontalBlank,
    Exposure,
    AnalogGain,
    DigitalGain,
    TestPattern,
    /// Lens position, on focus actuators
    FocusAbsolute,
}

/// Control contract violations. The control is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The control only changes through internal propagation
    ReadOnly(ControlId),
    /// The value is outside `[minimum, maximum]` or off the step grid
    OutOfRange { id: ControlId, value: i64 },
    /// The device has no such control
    Unsupported(ControlId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub minimum: i64,
    pub maximum: i64,
    pub step: i64,
    pub default: i64,
    value: i64,
    read_only: bool,
    pending: bool,
}

impl Control {
    pub const fn new(id: ControlId, minimum: i64, maximum: i64, step: i64, default: i64) -> Self {
        Self {
            id,
            minimum,
            maximum,
            step,
            default,
            value: default,
            read_only: false,
            pending: true,
        }
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the current value has yet to reach the device
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn mark_written(&mut self) {
        self.pending = false;
    }

    pub(crate) fn mark_pending(&mut self) {
        self.pending = true;
    }

    /// Write from outside the driver: honours the read-only flag and the range
    pub fn set(&mut self, value: i64) -> Result<(), ControlError> {
        if self.read_only {
            return Err(ControlError::ReadOnly(self.id));
        }
        self.check(value)?;
        self.value = value;
        self.pending = true;
        Ok(())
    }

    fn check(&self, value: i64) -> Result<(), ControlError> {
        let on_grid = self.step <= 1 || (value - self.minimum) % self.step == 0;
        if value < self.minimum || value > self.maximum || !on_grid {
            return Err(ControlError::OutOfRange { id: self.id, value });
        }
        Ok(())
    }

    /// Internal write, allowed on read-only controls; clamps into range.
    /// Returns true if the value changed.
    fn force(&mut self, value: i64) -> bool {
        let value = value.max(self.minimum).min(self.maximum);
        let changed = value != self.value;
        if changed {
            self.value = value;
            self.pending = true;
        }
        changed
    }

    /// Replace the range and default, pulling the value back into range.
    /// Returns true if the value changed.
    fn modify_range(&mut self, minimum: i64, maximum: i64, default: i64) -> bool {
        self.minimum = minimum;
        self.maximum = maximum;
        self.default = default;
        let current = self.value;
        self.force(current)
    }
}

/// Number of sensor controls
const CONTROL_COUNT: usize = 8;

/// The sensor's control set with its fixed dependency edges:
/// a mode change re-derives blanking, pixel rate and exposure limits, and
/// a vertical blank change re-derives the exposure limit.
#[derive(Debug, Clone)]
pub struct ControlGraph {
    controls: [Control; CONTROL_COUNT],
}

impl ControlGraph {
    /// Build the control set with ranges derived from `mode`
    pub fn new(catalog: &ModeCatalog, mode: &Mode) -> Self {
        let freq = catalog.frequency(mode);
        let max_pixel_rate = catalog
            .modes()
            .iter()
            .map(|m| catalog.frequency(m).pixel_rate)
            .max()
            .unwrap_or(freq.pixel_rate) as i64;
        let height = i64::from(mode.height);
        let vts = i64::from(mode.vts);
        let hblank = i64::from(freq.pixels_per_line) - i64::from(mode.width);

        let controls = [
            Control::new(
                ControlId::LinkFrequency,
                0,
                crate::modes::LINK_FREQUENCIES.len() as i64 - 1,
                1,
                mode.frequency_index as i64,
            )
            .read_only(),
            Control::new(ControlId::PixelRate, 0, max_pixel_rate, 1, freq.pixel_rate as i64)
                .read_only(),
            Control::new(
                ControlId::VerticalBlank,
                vblank_min(mode),
                VTS_MAX - height,
                1,
                vts - height,
            ),
            Control::new(ControlId::HorizontalBlank, hblank, hblank, 1, hblank).read_only(),
            Control::new(
                ControlId::Exposure,
                EXPOSURE_MIN,
                vts - EXPOSURE_MARGIN,
                EXPOSURE_STEP,
                EXPOSURE_DEFAULT.min(vts - EXPOSURE_MARGIN),
            ),
            Control::new(
                ControlId::AnalogGain,
                ANA_GAIN_MIN,
                ANA_GAIN_MAX,
                ANA_GAIN_STEP,
                ANA_GAIN_DEFAULT,
            ),
            Control::new(
                ControlId::DigitalGain,
                DGTL_GAIN_MIN,
                DGTL_GAIN_MAX,
                DGTL_GAIN_STEP,
                DGTL_GAIN_DEFAULT,
            ),
            Control::new(
                ControlId::TestPattern,
                0,
                TEST_PATTERN_MENU.len() as i64 - 1,
                1,
                0,
            ),
        ];
        Self { controls }
    }

    /// All controls, in replay order
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    fn control_mut(&mut self, id: ControlId) -> Result<&mut Control, ControlError> {
        self.controls
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ControlError::Unsupported(id))
    }

    pub fn get(&self, id: ControlId) -> Option<i64> {
        self.control(id).map(Control::value)
    }

    /// External write: rejected with no change if read-only or out of range,
    /// otherwise recorded, marked pending and propagated.
    pub fn set(&mut self, id: ControlId, value: i64, mode: &Mode) -> Result<(), ControlError> {
        self.control_mut(id)?.set(value)?;
        self.propagate(id, mode);
        Ok(())
    }

    /// Re-derive every mode-dependent limit and default for `mode`
    pub fn apply_mode(&mut self, catalog: &ModeCatalog, mode: &Mode) {
        let freq = catalog.frequency(mode);
        let height = i64::from(mode.height);
        let vblank_def = i64::from(mode.default_vblank());
        let hblank = i64::from(freq.pixels_per_line) - i64::from(mode.width);

        if let Ok(link) = self.control_mut(ControlId::LinkFrequency) {
            link.force(mode.frequency_index as i64);
        }
        if let Ok(rate) = self.control_mut(ControlId::PixelRate) {
            rate.force(freq.pixel_rate as i64);
        }
        if let Ok(vblank) = self.control_mut(ControlId::VerticalBlank) {
            vblank.modify_range(vblank_min(mode), VTS_MAX - height, vblank_def);
            vblank.force(vblank_def);
            // the frame length register depends on the mode height too
            vblank.mark_pending();
        }
        if let Ok(hblank_ctrl) = self.control_mut(ControlId::HorizontalBlank) {
            hblank_ctrl.modify_range(hblank, hblank, hblank);
        }
        self.propagate(ControlId::VerticalBlank, mode);
    }

    fn propagate(&mut self, source: ControlId, mode: &Mode) {
        if source != ControlId::VerticalBlank {
            return;
        }
        let vblank = match self.get(ControlId::VerticalBlank) {
            Some(v) => v,
            None => return,
        };
        let max = i64::from(mode.height) + vblank - EXPOSURE_MARGIN;
        if let Ok(exposure) = self.control_mut(ControlId::Exposure) {
            let minimum = exposure.minimum;
            if exposure.modify_range(minimum, max, max) {
                log::debug!("exposure clamped to {}", exposure.value());
            }
        }
    }

    /// Controls whose values have not reached the device yet
    pub fn pending(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.controls.iter().filter(|c| c.pending).map(|c| c.id)
    }

    /// The device lost its register state; every value must be rewritten
    pub(crate) fn mark_all_pending(&mut self) {
        self.controls.iter_mut().for_each(Control::mark_pending);
    }

    /// Write every pending control, in replay order
    pub fn flush<I2C, CommE>(
        &mut self,
        transport: &mut RegisterTransport<I2C>,
        mode: &Mode,
    ) -> Result<(), Error<CommE>>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
            + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    {
        for ctrl in self.controls.iter_mut().filter(|c| c.pending) {
            write_control(transport, ctrl, mode)?;
            ctrl.mark_written();
        }
        Ok(())
    }

    /// Write every control's current value regardless of its pending flag
    pub fn replay<I2C, CommE>(
        &mut self,
        transport: &mut RegisterTransport<I2C>,
        mode: &Mode,
    ) -> Result<(), Error<CommE>>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
            + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    {
        for ctrl in self.controls.iter_mut() {
            write_control(transport, ctrl, mode)?;
            ctrl.mark_written();
        }
        Ok(())
    }
}

/// Lower vblank limit for `mode`. Modes whose native frame length leaves
/// less than `VBLANK_MIN` (the 60 fps binned mode) keep their native timing.
fn vblank_min(mode: &Mode) -> i64 {
    VBLANK_MIN.min(i64::from(mode.default_vblank()))
}

/// Issue the register write(s) backing one control.
/// Link frequency, pixel rate and horizontal blank are derived from the
/// mode tables and have no register of their own.
fn write_control<I2C, CommE>(
    transport: &mut RegisterTransport<I2C>,
    ctrl: &Control,
    mode: &Mode,
) -> Result<(), Error<CommE>>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
{
    let val = ctrl.value() as u32;
    match ctrl.id {
        ControlId::VerticalBlank => {
            transport.write(Register::Vts as u16, WIDTH_16BIT, mode.height + val)
        }
        ControlId::Exposure => transport.write(Register::Exposure as u16, WIDTH_24BIT, val << 4),
        ControlId::AnalogGain => transport.write(Register::AnalogGain as u16, WIDTH_16BIT, val),
        ControlId::DigitalGain => {
            transport.write(Register::BlueGain as u16, WIDTH_16BIT, val)?;
            transport.write(Register::GreenGain as u16, WIDTH_16BIT, val)?;
            transport.write(Register::RedGain as u16, WIDTH_16BIT, val)
        }
        ControlId::TestPattern => {
            let mut reg = transport.read(Register::TestPattern as u16, WIDTH_8BIT)?;
            if val > 0 {
                reg &= TEST_PATTERN_MASK;
                reg |= (val - 1) | TEST_PATTERN_ENABLE;
            } else {
                reg &= !TEST_PATTERN_ENABLE;
            }
            transport.write(Register::TestPattern as u16, WIDTH_8BIT, reg)
        }
        ControlId::LinkFrequency
        | ControlId::PixelRate
        | ControlId::HorizontalBlank
        | ControlId::FocusAbsolute => Ok(()),
    }
}
