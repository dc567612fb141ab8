//! Step/period schedule for the training driver.

use crate::errors::ModelError;

/// How a training step budget is split into reporting periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicSchedule {
    /// Total number of training steps across all periods.
    pub steps: u64,
    /// Number of reporting periods.
    pub periods: usize,
    /// Mini-batch size for each step.
    pub batch_size: usize,
}

impl Default for PeriodicSchedule {
    fn default() -> Self {
        Self {
            steps: 1000,
            periods: 10,
            batch_size: 32,
        }
    }
}

impl PeriodicSchedule {
    /// Creates a schedule with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total step budget.
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the number of reporting periods.
    pub fn periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the mini-batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.steps == 0 {
            return Err(ModelError::InvalidSchedule {
                message: "steps must be non-zero".to_string(),
            });
        }
        if self.periods == 0 {
            return Err(ModelError::InvalidSchedule {
                message: "periods must be non-zero".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(ModelError::InvalidSchedule {
                message: "batch size must be non-zero".to_string(),
            });
        }
        if self.periods as u64 > self.steps {
            return Err(ModelError::InvalidSchedule {
                message: format!(
                    "{} periods cannot split {} steps",
                    self.periods, self.steps
                ),
            });
        }
        Ok(())
    }

    /// Steps allotted to `period`. The integer remainder of the split is
    /// folded into the final period so the whole budget is spent.
    pub(crate) fn steps_for_period(&self, period: usize) -> u64 {
        let base = self.steps / self.periods as u64;
        if period + 1 == self.periods {
            base + self.steps % self.periods as u64
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = PeriodicSchedule::default();
        assert_eq!(schedule.steps, 1000);
        assert_eq!(schedule.periods, 10);
        assert_eq!(schedule.batch_size, 32);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_schedule_builder() {
        let schedule = PeriodicSchedule::new().steps(500).periods(5).batch_size(16);

        assert_eq!(schedule.steps, 500);
        assert_eq!(schedule.periods, 5);
        assert_eq!(schedule.batch_size, 16);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert!(PeriodicSchedule::new().steps(0).validate().is_err());
        assert!(PeriodicSchedule::new().periods(0).validate().is_err());
        assert!(PeriodicSchedule::new().batch_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_more_periods_than_steps() {
        let schedule = PeriodicSchedule::new().steps(3).periods(5);
        assert!(matches!(
            schedule.validate(),
            Err(ModelError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_uneven_split_spends_whole_budget() {
        let schedule = PeriodicSchedule::new().steps(10).periods(3);

        let allotted: Vec<u64> = (0..3).map(|p| schedule.steps_for_period(p)).collect();
        assert_eq!(allotted, vec![3, 3, 4]);
        assert_eq!(allotted.iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_even_split() {
        let schedule = PeriodicSchedule::new().steps(100).periods(4);
        for period in 0..4 {
            assert_eq!(schedule.steps_for_period(period), 25);
        }
    }
}
