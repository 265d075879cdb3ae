// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-up animation for the trust figures.
//!
//! A [`CountUp`] advances from zero towards a target in fixed increments,
//! one per frame, so that the whole run takes roughly `duration`. Displayed
//! values are floored; the final frame shows the exact target.

use crate::time::Duration;

/// One rendered frame of a count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountFrame {
    /// Intermediate value; more frames follow.
    Running(u64),
    /// The target was reached; the animation is over.
    Done(u64),
}

impl CountFrame {
    /// The value to display.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

/// State of one count-up animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    /// Creates an animation towards `target` spanning `duration` at one frame
    /// every `frame`.
    #[must_use]
    pub fn new(target: u64, duration: Duration, frame: Duration) -> Self {
        let frames = if frame.millis() == 0 {
            1.0
        } else {
            duration.millis() as f64 / frame.millis() as f64
        };
        let increment = if frames > 0.0 {
            target as f64 / frames
        } else {
            target as f64
        };
        Self {
            target,
            increment,
            current: 0.0,
            done: false,
        }
    }

    /// Parses the `data-count` attribute (leading integer, like `parseInt`).
    ///
    /// Returns `None` if no digits lead the string.
    #[must_use]
    pub fn parse_target(raw: &str) -> Option<u64> {
        let trimmed = raw.trim_start();
        let digits = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        trimmed[..digits].parse().ok()
    }

    /// Whether the final frame has been produced.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one frame.
    ///
    /// After [`CountFrame::Done`] every further call repeats it.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "current is non-negative and below target, which fits in u64"
    )]
    pub fn step(&mut self) -> CountFrame {
        if self.done {
            return CountFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 || self.increment <= 0.0 {
            self.done = true;
            CountFrame::Done(self.target)
        } else {
            CountFrame::Running(self.current as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trust(target: u64) -> CountUp {
        CountUp::new(target, Duration(2_000), Duration(16))
    }

    #[test]
    fn reaches_exact_target() {
        let mut c = trust(1_250);
        let mut frames = 0;
        let mut last = 0;
        loop {
            frames += 1;
            match c.step() {
                CountFrame::Running(v) => {
                    assert!(v >= last, "monotonic");
                    assert!(v < 1_250);
                    last = v;
                }
                CountFrame::Done(v) => {
                    assert_eq!(v, 1_250);
                    break;
                }
            }
            assert!(frames < 1_000, "must terminate");
        }
        // 2000 ms / 16 ms = 125 frames.
        assert_eq!(frames, 125);
        assert!(c.is_done());
        assert_eq!(c.step(), CountFrame::Done(1_250));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut c = trust(0);
        assert_eq!(c.step(), CountFrame::Done(0));
    }

    #[test]
    fn values_are_floored() {
        let mut c = trust(10);
        // increment = 10 / 125 = 0.08
        assert_eq!(c.step(), CountFrame::Running(0));
        assert_eq!(c.step().value(), 0);
    }

    #[test]
    fn parse_target_like_parse_int() {
        assert_eq!(CountUp::parse_target("500"), Some(500));
        assert_eq!(CountUp::parse_target(" 98%"), Some(98));
        assert_eq!(CountUp::parse_target("k12"), None);
        assert_eq!(CountUp::parse_target(""), None);
    }
}
