//! Interruptible pauses between scenario steps.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::units::Milliseconds;
use crate::config::PacingConfig;
use crate::error::Result;

use super::interrupt::InterruptFlag;

/// Longest single sleep before the interrupt flag is checked again.
pub const SLICE_MS: u32 = 50;

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Applies pacing to scripted pauses and sleeps them in slices.
#[derive(Debug)]
pub struct Pacer<D: DelayNs> {
    delay: D,
    config: PacingConfig,
    interrupt: InterruptFlag,
}

impl<D: DelayNs> Pacer<D> {
    /// Create a pacer.
    pub fn new(delay: D, config: PacingConfig, interrupt: InterruptFlag) -> Self {
        Self {
            delay,
            config,
            interrupt,
        }
    }

    /// Fail with `Error::Interrupted` if the user asked to stop.
    #[inline]
    pub fn checkpoint(&self) -> Result<()> {
        self.interrupt.check()
    }

    /// Wait out a scripted pause, returning the time actually waited.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interrupted` as soon as the interrupt flag is seen.
    pub fn pause(&mut self, scripted: Milliseconds) -> Result<Milliseconds> {
        let effective = self.config.effective(scripted);
        let mut remaining = effective.value();

        while remaining > 0 {
            self.checkpoint()?;
            let slice = remaining.min(SLICE_MS);
            self.delay.delay_ms(slice);
            remaining -= slice;
        }

        self.checkpoint()?;
        Ok(effective)
    }

    /// Release the delay provider.
    pub fn into_inner(self) -> D {
        self.delay
    }
}
