//! Timing Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, SiteError};

/// Periods and delays for every timer on the site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Hero headline rotation
    pub headline_period_ms: u64,

    /// Testimonial carousel rotation
    pub testimonial_period_ms: u64,

    /// Simulated payment processing
    pub payment_delay_ms: u64,

    /// Length of a count-up animation
    pub count_up_ms: u64,

    /// Tick between count-up frames
    pub count_up_frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            headline_period_ms: 3000,
            testimonial_period_ms: 8000,
            payment_delay_ms: 2000,
            count_up_ms: 2500,
            count_up_frame_ms: 16,
        }
    }
}

impl TimingConfig {
    pub fn headline_period(&self) -> Duration {
        Duration::from_millis(self.headline_period_ms)
    }

    pub fn testimonial_period(&self) -> Duration {
        Duration::from_millis(self.testimonial_period_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn count_up_frame(&self) -> Duration {
        Duration::from_millis(self.count_up_frame_ms)
    }

    /// Repeating timers with a zero period would spin
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("headline_period_ms", self.headline_period_ms),
            ("testimonial_period_ms", self.testimonial_period_ms),
            ("count_up_frame_ms", self.count_up_frame_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(SiteError::Config(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.headline_period(), Duration::from_secs(3));
        assert_eq!(config.testimonial_period(), Duration::from_secs(8));
        assert_eq!(config.payment_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: TimingConfig = serde_json::from_str(r#"{"payment_delay_ms": 500}"#).unwrap();
        assert_eq!(config.payment_delay(), Duration::from_millis(500));
        assert_eq!(config.headline_period_ms, 3000);
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = TimingConfig {
            count_up_frame_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }
}
