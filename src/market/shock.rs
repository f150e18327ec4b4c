//! Shock timing: a per-asset state machine emitting rare high-volatility days

use super::rng::RandomSource;

/// Countdown-driven shock timer
///
/// `Interval` redraws the days-to-next-shock from Normal(mean, std_dev) each
/// time the countdown runs out; `Disabled` never fires and is used for assets
/// configured with a (0, 0) interval, such as the base currency.
#[derive(Debug, Clone)]
pub enum ShockTimer {
    Interval {
        interval_mean: f64,
        interval_std_dev: f64,
        countdown: f64,
        in_shock: bool,
    },
    Disabled,
}

impl ShockTimer {
    /// Build from configured interval parameters; (0, 0) disables shocks
    pub fn from_config(
        interval_mean: f64,
        interval_std_dev: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        if interval_mean == 0.0 && interval_std_dev == 0.0 {
            ShockTimer::Disabled
        } else {
            Self::interval(interval_mean, interval_std_dev, rng)
        }
    }

    /// Always-armed interval timer, regardless of parameters
    pub fn interval(
        interval_mean: f64,
        interval_std_dev: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let countdown = rng.sample_normal(interval_mean, interval_std_dev);
        ShockTimer::Interval {
            interval_mean,
            interval_std_dev,
            countdown,
            in_shock: false,
        }
    }

    /// Advance by one simulated day
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        if let ShockTimer::Interval {
            interval_mean,
            interval_std_dev,
            countdown,
            in_shock,
        } = self
        {
            if *countdown <= 0.0 {
                *in_shock = true;
                *countdown = rng.sample_normal(*interval_mean, *interval_std_dev);
            } else {
                *in_shock = false;
                *countdown -= 1.0;
            }
        }
    }

    /// Whether today is a shock day for this asset
    pub fn is_shock(&self) -> bool {
        match self {
            ShockTimer::Interval { in_shock, .. } => *in_shock,
            ShockTimer::Disabled => false,
        }
    }
}
