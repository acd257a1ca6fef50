/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Recording stand-ins for the bus and the power collaborators, for testing
//! without hardware. Every mock shares its log through a cloneable handle so
//! tests can inspect traffic after handing the mock to the driver.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use crate::power::{ReferenceClock, SupplyGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Default)]
struct BusState {
    writes: Vec<(u8, Vec<u8>)>,
    read_addresses: Vec<Vec<u8>>,
    read_queue: VecDeque<Vec<u8>>,
    remaining_ok: Option<usize>,
}

impl BusState {
    fn should_fail(&mut self) -> bool {
        match self.remaining_ok.as_mut() {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        }
    }
}

/// Shared view of the traffic seen by a [`MockBus`]
#[derive(Clone, Default)]
pub struct BusLog(Rc<RefCell<BusState>>);

impl BusLog {
    /// Raw bytes of every successful write, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.0.borrow().writes.iter().map(|(_, w)| w.clone()).collect()
    }

    /// Device addresses targeted by every successful write
    pub fn addresses(&self) -> Vec<u8> {
        self.0.borrow().writes.iter().map(|(a, _)| *a).collect()
    }

    /// 16-bit register address of every successful write
    pub fn written_regs(&self) -> Vec<u16> {
        self.writes()
            .iter()
            .map(|w| u16::from_be_bytes([w[0], w[1]]))
            .collect()
    }

    /// Payloads (register address stripped) written to `reg`
    pub fn values_for(&self, reg: u16) -> Vec<Vec<u8>> {
        self.writes()
            .iter()
            .filter(|w| u16::from_be_bytes([w[0], w[1]]) == reg)
            .map(|w| w[2..].to_vec())
            .collect()
    }

    /// Address bytes sent ahead of each read
    pub fn read_addresses(&self) -> Vec<Vec<u8>> {
        self.0.borrow().read_addresses.clone()
    }

    /// Data returned by the next read; reads with nothing queued return zeros
    pub fn queue_read(&self, data: &[u8]) {
        self.0.borrow_mut().read_queue.push_back(data.to_vec());
    }

    /// Let `n` more transactions succeed, then fail every one after that
    pub fn fail_after(&self, n: usize) {
        self.0.borrow_mut().remaining_ok = Some(n);
    }

    pub fn clear_failure(&self) {
        self.0.borrow_mut().remaining_ok = None;
    }

    pub fn clear(&self) {
        let mut state = self.0.borrow_mut();
        state.writes.clear();
        state.read_addresses.clear();
    }
}

/// Two-wire bus that records transactions
#[derive(Default)]
pub struct MockBus {
    log: BusLog,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> BusLog {
        self.log.clone()
    }
}

impl embedded_hal::blocking::i2c::Write for MockBus {
    type Error = MockBusError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.log.0.borrow_mut();
        if state.should_fail() {
            return Err(MockBusError);
        }
        state.writes.push((address, bytes.to_vec()));
        Ok(())
    }
}

impl embedded_hal::blocking::i2c::WriteRead for MockBus {
    type Error = MockBusError;

    fn write_read(
        &mut self,
        _address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.log.0.borrow_mut();
        if state.should_fail() {
            return Err(MockBusError);
        }
        state.read_addresses.push(bytes.to_vec());
        let data = state.read_queue.pop_front().unwrap_or_default();
        for (dst, src) in buffer.iter_mut().zip(data.iter().chain(core::iter::repeat(&0))) {
            *dst = *src;
        }
        Ok(())
    }
}

/// One observable hardware action outside the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Reset(bool),
    SuppliesOn,
    SuppliesOff,
    ClockRate(u32),
    ClockOn,
    ClockOff,
    DelayUs(u32),
}

#[derive(Default)]
struct EventState {
    events: Vec<Event>,
    fail_supplies: bool,
    fail_clock: bool,
    fail_clock_rate: bool,
}

/// Shared log of power collaborator activity, with failure injection
#[derive(Clone, Default)]
pub struct Events(Rc<RefCell<EventState>>);

impl Events {
    pub fn all(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    /// Events other than delays
    pub fn actions(&self) -> Vec<Event> {
        self.all()
            .into_iter()
            .filter(|e| !matches!(e, Event::DelayUs(_)))
            .collect()
    }

    pub fn count(&self, event: Event) -> usize {
        self.all().iter().filter(|e| **e == event).count()
    }

    pub fn fail_supplies(&self, fail: bool) {
        self.0.borrow_mut().fail_supplies = fail;
    }

    pub fn fail_clock(&self, fail: bool) {
        self.0.borrow_mut().fail_clock = fail;
    }

    pub fn fail_clock_rate(&self, fail: bool) {
        self.0.borrow_mut().fail_clock_rate = fail;
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockHwError;

pub struct MockPin(Events);

impl embedded_hal::digital::v2::OutputPin for MockPin {
    type Error = MockHwError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Reset(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Reset(true));
        Ok(())
    }
}

pub struct MockSupplies(Events);

impl SupplyGroup for MockSupplies {
    type Error = MockHwError;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.0 .0.borrow().fail_supplies {
            return Err(MockHwError);
        }
        self.0.push(Event::SuppliesOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::SuppliesOff);
        Ok(())
    }
}

pub struct MockClock(Events);

impl ReferenceClock for MockClock {
    type Error = MockHwError;

    fn set_rate(&mut self, hz: u32) -> Result<(), Self::Error> {
        if self.0 .0.borrow().fail_clock_rate {
            return Err(MockHwError);
        }
        self.0.push(Event::ClockRate(hz));
        Ok(())
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.0 .0.borrow().fail_clock {
            return Err(MockHwError);
        }
        self.0.push(Event::ClockOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::ClockOff);
        Ok(())
    }
}

pub struct MockDelay(Events);

impl embedded_hal::blocking::delay::DelayUs<u32> for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.0.push(Event::DelayUs(us));
    }
}

/// A full set of power collaborators sharing one event log
pub struct PowerRig {
    pub reset: MockPin,
    pub supplies: MockSupplies,
    pub clock: MockClock,
    pub delay: MockDelay,
    pub events: Events,
}

impl PowerRig {
    pub fn new() -> Self {
        let events = Events::default();
        Self {
            reset: MockPin(events.clone()),
            supplies: MockSupplies(events.clone()),
            clock: MockClock(events.clone()),
            delay: MockDelay(events.clone()),
            events,
        }
    }
}
