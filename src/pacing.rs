use std::time::Duration;

/// Pacing between assets, kept as data so the schedule is testable without
/// sleeping. The orchestrator asks for the delay and does the waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPolicy {
    /// Same pause after every asset. Matches the providers' per-chat and
    /// per-key rate limits well enough for a seven-asset batch.
    FixedInterval(Duration),
    /// No pacing; used by tests.
    None,
}

impl PacingPolicy {
    pub fn fixed(interval: Duration) -> Self {
        PacingPolicy::FixedInterval(interval)
    }

    /// Delay to apply after finishing the asset at `index` out of `total`.
    /// The last asset gets no trailing pause.
    pub fn delay_after(&self, index: usize, total: usize) -> Duration {
        if index + 1 >= total {
            return Duration::ZERO;
        }
        match self {
            PacingPolicy::FixedInterval(interval) => *interval,
            PacingPolicy::None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_interval_between_assets() {
        let policy = PacingPolicy::fixed(Duration::from_secs(2));
        assert_eq!(policy.delay_after(0, 3), Duration::from_secs(2));
        assert_eq!(policy.delay_after(1, 3), Duration::from_secs(2));
    }

    #[test]
    fn test_no_trailing_pause() {
        let policy = PacingPolicy::fixed(Duration::from_secs(2));
        assert_eq!(policy.delay_after(2, 3), Duration::ZERO);
        assert_eq!(policy.delay_after(0, 1), Duration::ZERO);
    }

    #[test]
    fn test_none_policy() {
        assert_eq!(PacingPolicy::None.delay_after(0, 5), Duration::ZERO);
    }
}
