//! Fixed-window incremental mean with O(1) memory
//!
//! Behaves as a plain running mean until `period` samples have been seen, then
//! switches to a decaying average: each new sample evicts one period-sized
//! slot of the accumulated total. This approximates a simple moving average
//! without storing the window.

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct RollingMean {
    period: u32,
    count: u32,
    total: Decimal,
}

impl RollingMean {
    pub fn new(period: u32) -> Self {
        debug_assert!(period > 0, "rolling mean period must be positive");
        Self {
            period,
            count: 0,
            total: Decimal::ZERO,
        }
    }

    /// Record one sample
    pub fn append(&mut self, value: Decimal) {
        if self.count < self.period {
            self.count += 1;
            self.total += value;
        } else {
            let period = Decimal::from(self.period);
            let decayed = (self.total / period) * (period - Decimal::ONE) + value;
            self.total = decayed.round_dp(10);
        }
    }

    /// Current mean of the samples seen so far
    ///
    /// Panics if called before the first `append`; callers seed one sample at
    /// construction time, so this is an invariant violation, not an error.
    pub fn current_value(&self) -> Decimal {
        assert!(self.count > 0, "rolling mean read before any sample");
        self.total / Decimal::from(self.count)
    }
}
