/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Supported operating modes and best-fit selection.

use crate::tables;
use crate::transport::{Reg, RegisterTransport};
use crate::Error;

/// 30 fps frame length in lines
pub const VTS_30FPS: u32 = 0x0c8e;
/// 60 fps frame length in lines
pub const VTS_60FPS: u32 = 0x0648;

/// Link frequencies, indexed by `Mode::frequency_index`
pub const LINK_FREQ_1080MBPS: i64 = 1_080_000_000;
pub const LINK_FREQ_540MBPS: i64 = 540_000_000;
pub const LINK_FREQUENCIES: [i64; 2] = [LINK_FREQ_1080MBPS, LINK_FREQ_540MBPS];

/// Pixels per line at each link frequency
pub const PPL_1080MHZ: u32 = 4488;
pub const PPL_540MHZ: u32 = 2244;

/// Timing configuration shared by every mode running at one link frequency
#[derive(Debug)]
pub struct FrequencyConfig {
    pub pixel_rate: u64,
    pub pixels_per_line: u32,
    /// PLL registers for this link frequency
    pub regs: &'static [Reg],
}

/// Resolution, frame timing and the register values that realize them
#[derive(Debug)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
    /// Frame length in lines, including vertical blank
    pub vts: u32,
    /// Index into the frequency config table
    pub frequency_index: usize,
    pub regs: &'static [Reg],
}

impl Mode {
    /// Manhattan distance between this mode and a requested resolution
    pub fn distance(&self, width: u32, height: u32) -> u32 {
        self.width.abs_diff(width) + self.height.abs_diff(height)
    }

    /// Default vertical blank: the frame length minus active lines
    pub fn default_vblank(&self) -> u32 {
        self.vts - self.height
    }
}

pub const FREQUENCY_CONFIGS: [FrequencyConfig; 2] = [
    FrequencyConfig {
        pixel_rate: 4224 * 3136 * 30,
        pixels_per_line: PPL_1080MHZ,
        regs: &tables::PLL_1080MBPS,
    },
    FrequencyConfig {
        pixel_rate: 2112 * 1568 * 60,
        pixels_per_line: PPL_540MHZ,
        regs: &tables::PLL_540MBPS,
    },
];

/// Catalog order is priority order: ties in best-fit go to the earlier mode
pub const SUPPORTED_MODES: [Mode; 3] = [
    Mode {
        width: 4224,
        height: 3136,
        vts: VTS_30FPS,
        frequency_index: 0,
        regs: &tables::MODE_4224X3136,
    },
    Mode {
        width: 2112,
        height: 1568,
        vts: VTS_60FPS,
        frequency_index: 1,
        regs: &tables::MODE_2112X1568,
    },
    Mode {
        width: 1056,
        height: 784,
        vts: VTS_30FPS,
        frequency_index: 1,
        regs: &tables::MODE_1056X784,
    },
];

/// The OV13855 mode and frequency tables
pub static CATALOG: ModeCatalog = ModeCatalog::new(&SUPPORTED_MODES, &FREQUENCY_CONFIGS);

/// An immutable, non-empty set of modes plus the frequency configs they use
#[derive(Debug)]
pub struct ModeCatalog {
    modes: &'static [Mode],
    frequencies: &'static [FrequencyConfig],
}

impl ModeCatalog {
    /// Both tables must be non-empty and every mode must reference a valid
    /// frequency config; violations fail const evaluation.
    pub const fn new(
        modes: &'static [Mode],
        frequencies: &'static [FrequencyConfig],
    ) -> Self {
        assert!(!modes.is_empty());
        let mut i = 0;
        while i < modes.len() {
            assert!(modes[i].frequency_index < frequencies.len());
            i += 1;
        }
        Self { modes, frequencies }
    }

    pub fn modes(&self) -> &'static [Mode] {
        self.modes
    }

    pub fn mode(&self, index: usize) -> Option<&'static Mode> {
        self.modes.get(index)
    }

    /// The first catalog entry
    pub fn default_mode(&self) -> &'static Mode {
        &self.modes[0]
    }

    /// Frequency config used by `mode`
    pub fn frequency(&self, mode: &Mode) -> &'static FrequencyConfig {
        &self.frequencies[mode.frequency_index]
    }

    /// Closest mode to the requested resolution, by `|dw| + |dh|`.
    /// Ties resolve to the earliest catalog entry.
    pub fn find_best_fit(&self, width: u32, height: u32) -> &'static Mode {
        let mut best = self.default_mode();
        let mut best_dist = best.distance(width, height);
        for mode in &self.modes[1..] {
            let dist = mode.distance(width, height);
            if dist < best_dist {
                best = mode;
                best_dist = dist;
            }
        }
        best
    }

    /// Write the PLL settings for the mode's link frequency, then the mode's
    /// own register list. Stops at the first failure without rolling back.
    pub fn apply<I2C, CommE>(
        &self,
        mode: &Mode,
        transport: &mut RegisterTransport<I2C>,
    ) -> Result<(), Error<CommE>>
    where
        I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
            + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
    {
        transport.write_sequence(self.frequency(mode).regs)?;
        transport.write_sequence(mode.regs)
    }
}
