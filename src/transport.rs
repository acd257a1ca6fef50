/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Fixed-width register access over the two-wire bus.
//! The sensor uses 16-bit register addresses and big-endian values of
//! one to four bytes.

use crate::Error;

/// Single byte register value
pub const WIDTH_8BIT: usize = 1;
/// Two byte register value
pub const WIDTH_16BIT: usize = 2;
/// Three byte register value
pub const WIDTH_24BIT: usize = 3;

const MAX_WIDTH: usize = 4;
const ADDR_LEN: usize = 2;

/// One entry in a register sequence: an 8-bit value for a 16-bit address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg {
    pub address: u16,
    pub value: u8,
}

impl Reg {
    pub const fn new(address: u16, value: u8) -> Self {
        Self { address, value }
    }
}

/// Owns the bus handle and the device address.
/// Failures are never retried; they propagate unchanged to the caller.
pub struct RegisterTransport<I2C> {
    address: u8,
    i2c: I2C,
}

impl<I2C, CommE> RegisterTransport<I2C>
where
    I2C: embedded_hal::blocking::i2c::Write<Error = CommE>
        + embedded_hal::blocking::i2c::WriteRead<Error = CommE>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { address, i2c }
    }

    /// Read up to four bytes from a 16-bit address.
    /// The address write and the data read form one chained transaction
    /// (repeated start, no stop in between).
    pub fn read(
        &mut self,
        reg: u16,
        width: usize,
    ) -> Result<u32, Error<CommE>> {
        check_width(width)?;
        let cmd_buf = reg.to_be_bytes();
        let mut recv_buf = [0u8; MAX_WIDTH];
        self.i2c
            .write_read(self.address, &cmd_buf, &mut recv_buf[MAX_WIDTH - width..])
            .map_err(Error::Bus)?;

        Ok(u32::from_be_bytes(recv_buf))
    }

    /// Write the low `width` bytes of `val` to a 16-bit address,
    /// most significant byte first, as a single transaction.
    pub fn write(
        &mut self,
        reg: u16,
        width: usize,
        val: u32,
    ) -> Result<(), Error<CommE>> {
        check_width(width)?;
        let mut write_buf = [0u8; ADDR_LEN + MAX_WIDTH];
        write_buf[..ADDR_LEN].copy_from_slice(&reg.to_be_bytes());
        let val_be = val.to_be_bytes();
        write_buf[ADDR_LEN..ADDR_LEN + width]
            .copy_from_slice(&val_be[MAX_WIDTH - width..]);
        self.i2c
            .write(self.address, &write_buf[..ADDR_LEN + width])
            .map_err(Error::Bus)?;
        Ok(())
    }

    /// Write a list of 8-bit registers in order, stopping at the first failure.
    /// Entries already written stay written.
    pub fn write_sequence(&mut self, regs: &[Reg]) -> Result<(), Error<CommE>> {
        for reg in regs {
            if let Err(e) = self.write(reg.address, WIDTH_8BIT, u32::from(reg.value)) {
                log::warn!("failed to write reg 0x{:04x}", reg.address);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Bus address this transport talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus handle
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn check_width<CommE>(width: usize) -> Result<(), Error<CommE>> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidWidth(width));
    }
    Ok(())
}
