use embedded_hal::delay::DelayNs;

/// A monotonic millisecond time source. The value is allowed to wrap; elapsed time is always
/// computed with wrapping subtraction.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_ms(&mut self) -> u32;

    /// Blocks until at least `ms` milliseconds have elapsed on this clock.
    fn wait_ms(&mut self, ms: u32) {
        let start = self.now_ms();
        while self.now_ms().wrapping_sub(start) < ms {}
    }
}

/// Adapts a `DelayNs` implementation into a `Clock` for boards without a free running timer.
/// Every reading sleeps for one millisecond and advances a virtual counter, so elapsed time on
/// this clock is never shorter than real elapsed time.
pub struct DelayClock<DELAY>
where
    DELAY: DelayNs,
{
    delay: DELAY,
    elapsed_ms: u32,
}

impl<DELAY> DelayClock<DELAY>
where
    DELAY: DelayNs,
{
    pub fn new(delay: DELAY) -> Self {
        Self {
            delay,
            elapsed_ms: 0,
        }
    }

    /// Returns the wrapped delay object.
    pub fn release(self) -> DELAY {
        self.delay
    }
}

impl<DELAY> Clock for DelayClock<DELAY>
where
    DELAY: DelayNs,
{
    fn now_ms(&mut self) -> u32 {
        self.delay.delay_ms(1);
        self.elapsed_ms = self.elapsed_ms.wrapping_add(1);
        self.elapsed_ms
    }
}
