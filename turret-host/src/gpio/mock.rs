use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

use super::GpioController;
use crate::errors::GpioError;

#[derive(Debug, Default)]
struct BoardState {
    lines: BTreeMap<u8, Vec<bool>>,
    faulty: BTreeSet<u8>,
    unavailable: BTreeSet<u8>,
    releases: u32,
    delay_us: u64,
}

/// Simulated header shared between a test and the controller it hands out.
#[derive(Debug, Clone, Default)]
pub struct MockBoard {
    state: Rc<RefCell<BoardState>>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> MockController {
        MockController { board: self.clone() }
    }

    /// Every level written to `pin`, starting with the requested default.
    pub fn history(&self, pin: u8) -> Vec<bool> {
        self.state.borrow().lines.get(&pin).cloned().unwrap_or_default()
    }

    pub fn level(&self, pin: u8) -> Option<bool> {
        self.state.borrow().lines.get(&pin).and_then(|h| h.last().copied())
    }

    /// Rising edges written after the line was requested.
    pub fn pulses(&self, pin: u8) -> usize {
        self.history(pin).iter().skip(1).filter(|level| **level).count()
    }

    pub fn is_requested(&self, pin: u8) -> bool {
        self.state.borrow().lines.contains_key(&pin)
    }

    pub fn releases(&self) -> u32 {
        self.state.borrow().releases
    }

    pub fn total_delay_us(&self) -> u64 {
        self.state.borrow().delay_us
    }

    pub fn fail_writes_on(&self, pin: u8) {
        self.state.borrow_mut().faulty.insert(pin);
    }

    pub fn refuse_request(&self, pin: u8) {
        self.state.borrow_mut().unavailable.insert(pin);
    }
}

pub struct MockController {
    board: MockBoard,
}

impl GpioController for MockController {
    type Line = MockLine;
    type Delay = MockDelay;

    fn request_output(&mut self, pin: u8, initial: PinState) -> Result<MockLine, GpioError> {
        let mut state = self.board.state.borrow_mut();
        if state.unavailable.contains(&pin) {
            return Err(GpioError::request(pin, "Pin is busy"));
        }
        state.lines.insert(pin, vec![initial == PinState::High]);

        Ok(MockLine {
            pin,
            board: self.board.clone(),
        })
    }

    fn delay(&self) -> MockDelay {
        MockDelay {
            board: self.board.clone(),
        }
    }
}

impl Drop for MockController {
    fn drop(&mut self) {
        self.board.state.borrow_mut().releases += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLineError(pub u8);

impl embedded_hal::digital::Error for MockLineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockLine {
    pin: u8,
    board: MockBoard,
}

impl MockLine {
    fn write(&mut self, level: bool) -> Result<(), MockLineError> {
        let mut state = self.board.state.borrow_mut();
        if state.faulty.contains(&self.pin) {
            return Err(MockLineError(self.pin));
        }
        state.lines.entry(self.pin).or_default().push(level);
        Ok(())
    }
}

impl ErrorType for MockLine {
    type Error = MockLineError;
}

impl OutputPin for MockLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

pub struct MockDelay {
    board: MockBoard,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.board.state.borrow_mut().delay_us += u64::from(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.board.state.borrow_mut().delay_us += u64::from(us);
    }
}
