// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page time in whole milliseconds.
//!
//! [`HostTime`] is a point on the page's monotonic clock (the browser's
//! `performance.now()`, truncated to milliseconds). [`Duration`] is a span in
//! the same unit. Every delay in the crate (notification lifetimes, autoplay
//! intervals, simulated submissions) is expressed with these two types so
//! that state holders can be driven by a fake clock in tests.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time, in milliseconds since page start.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}ms)", self.0)
    }
}

/// A span of time in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as the `i32` timeout argument browsers expect,
    /// saturating at `i32::MAX`.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is checked against i32::MAX first"
    )]
    pub const fn as_timeout(self) -> i32 {
        if self.0 > i32::MAX as u64 {
            i32::MAX
        } else {
            self.0 as i32
        }
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_time_arithmetic() {
        let t = HostTime(1_000);
        assert_eq!(t + Duration(300), HostTime(1_300));
        assert_eq!(HostTime(1_300) - t, Duration(300));
        assert_eq!(t - HostTime(1_300), Duration::ZERO);
    }

    #[test]
    fn timeout_saturates() {
        assert_eq!(Duration(3_000).as_timeout(), 3_000);
        assert_eq!(Duration(u64::MAX).as_timeout(), i32::MAX);
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(HostTime(u64::MAX).checked_add(Duration(1)), None);
        assert_eq!(HostTime(1).checked_add(Duration(1)), Some(HostTime(2)));
    }
}
