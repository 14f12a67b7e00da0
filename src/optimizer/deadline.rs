//! Wall-clock limit and cooperative cancellation for one optimization call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::RoutingError;

/// Time budget and stop flag checked between pipeline steps.
///
/// The clock starts when the deadline is created. A raised stop flag takes
/// precedence over an expired limit.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
/// use u_searoute::optimizer::Deadline;
///
/// let stop = AtomicBool::new(false);
/// let deadline = Deadline::new(Some(Duration::from_secs(60))).with_stop_flag(&stop);
/// assert!(deadline.check().is_ok());
///
/// stop.store(true, Ordering::Relaxed);
/// assert!(deadline.check().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Deadline<'a> {
    start: Instant,
    time_limit: Option<Duration>,
    stop_flag: Option<&'a AtomicBool>,
}

impl<'a> Deadline<'a> {
    /// Starts the clock with an optional limit.
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            stop_flag: None,
        }
    }

    /// A deadline that never expires.
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Also stops when `flag` becomes `true`.
    pub fn with_stop_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Fails with `Cancelled` if the flag is raised, or `Timeout` once the
    /// elapsed time reaches the limit.
    pub fn check(&self) -> Result<(), RoutingError> {
        if self
            .stop_flag
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(RoutingError::Cancelled);
        }
        if let Some(limit) = self.time_limit {
            let elapsed = self.elapsed();
            if elapsed >= limit {
                return Err(RoutingError::Timeout { elapsed });
            }
        }
        Ok(())
    }
}

impl Default for Deadline<'_> {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_expires() {
        assert!(Deadline::unbounded().check().is_ok());
        assert!(Deadline::default().check().is_ok());
    }

    #[test]
    fn test_zero_limit_times_out() {
        let deadline = Deadline::new(Some(Duration::ZERO));
        assert!(matches!(
            deadline.check(),
            Err(RoutingError::Timeout { .. })
        ));
    }

    #[test]
    fn test_stop_flag_cancels() {
        let flag = AtomicBool::new(false);
        let deadline = Deadline::unbounded().with_stop_flag(&flag);
        assert!(deadline.check().is_ok());
        flag.store(true, Ordering::Relaxed);
        assert_eq!(deadline.check(), Err(RoutingError::Cancelled));
    }

    #[test]
    fn test_stop_flag_wins_over_timeout() {
        let flag = AtomicBool::new(true);
        let deadline = Deadline::new(Some(Duration::ZERO)).with_stop_flag(&flag);
        assert_eq!(deadline.check(), Err(RoutingError::Cancelled));
    }
}
