//! Simulated time: a 64-bit femtosecond count plus formatting helpers.
//!
//! The delta-iteration counter that pairs with [`Time`] to form the
//! kernel's full ordering key lives on the cycle driver (`dvsim_kernel`),
//! not here — `Time` only models the "real time" axis.

use std::fmt;
use std::ops::{Add, AddAssign};

/// One femtosecond-resolution point on the simulated time axis.
///
/// Ordering between two [`Time`] values is a plain integer comparison;
/// the delta-iteration counter needed to fully order *events* (as
/// opposed to points in time) is tracked separately by the cycle
/// driver, per the two-level `(now, iteration)` model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time(u64);

/// One unit in the formatting ladder: its name and size in femtoseconds.
const UNITS: &[(&str, u64)] = &[
    ("ms", 1_000_000_000_000),
    ("us", 1_000_000_000),
    ("ns", 1_000_000),
    ("ps", 1_000),
    ("fs", 1),
];

impl Time {
    /// The origin of simulated time.
    pub const ZERO: Time = Time(0);

    /// Construct a `Time` from a femtosecond count.
    #[inline]
    pub const fn from_fs(fs: u64) -> Self {
        Time(fs)
    }

    /// The raw femtosecond count.
    #[inline]
    pub const fn as_fs(self) -> u64 {
        self.0
    }

    /// `now + after`, saturating rather than wrapping on overflow — a
    /// design that schedules past `u64::MAX` fs has a bug elsewhere,
    /// not a kernel-correctness issue worth crashing on.
    #[inline]
    pub const fn saturating_add(self, after: u64) -> Self {
        Time(self.0.saturating_add(after))
    }

    /// Render using the largest unit from `{fs, ps, ns, us, ms}` that
    /// divides the value exactly, falling back to `fs` otherwise.
    ///
    /// ```rust
    /// use dvsim_common::time::Time;
    /// assert_eq!(Time::from_fs(500_000).format(), "500ps");
    /// assert_eq!(Time::from_fs(3).format(), "3fs");
    /// assert_eq!(Time::from_fs(0).format(), "0fs");
    /// ```
    pub fn format(self) -> String {
        if self.0 == 0 {
            return "0fs".to_string();
        }
        for (name, size) in UNITS {
            if *size != 1 && self.0 % size == 0 {
                return format!("{}{name}", self.0 / size);
            }
        }
        format!("{}fs", self.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Add<u64> for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: u64) -> Time {
        self.saturating_add(rhs)
    }
}

impl AddAssign<u64> for Time {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        *self = self.saturating_add(rhs);
    }
}

impl From<u64> for Time {
    #[inline]
    fn from(fs: u64) -> Self {
        Time::from_fs(fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_picks_largest_exact_unit() {
        assert_eq!(Time::from_fs(500_000).format(), "500ps");
        assert_eq!(Time::from_fs(3).format(), "3fs");
        assert_eq!(Time::from_fs(1_000_000).format(), "1ns");
        assert_eq!(Time::from_fs(1_000_000_000).format(), "1us");
        assert_eq!(Time::from_fs(1_000_000_000_000).format(), "1ms");
        assert_eq!(Time::from_fs(0).format(), "0fs");
    }

    #[test]
    fn format_falls_back_to_fs_when_inexact() {
        // Not divisible by ps (1000): 1500 fs has no larger exact unit above fs.
        assert_eq!(Time::from_fs(1500).format(), "1500fs");
        // 1_500_000 fs is divisible by ps but not ns -> 1500ps.
        assert_eq!(Time::from_fs(1_500_000).format(), "1500ps");
    }

    #[test]
    fn ordering_is_plain_integer_ordering() {
        assert!(Time::from_fs(10) < Time::from_fs(20));
        assert!(Time::ZERO < Time::from_fs(1));
    }

    #[test]
    fn add_saturates_instead_of_wrapping() {
        let near_max = Time::from_fs(u64::MAX - 5);
        assert_eq!(near_max + 10, Time::from_fs(u64::MAX));
    }

    #[test]
    fn round_trips_up_to_1e15_fs() {
        for fs in [0u64, 1, 999, 1000, 1_000_000, 999_999_999_999, 1_000_000_000_000_000] {
            let t = Time::from_fs(fs);
            // The formatted string always encodes the exact value in
            // some unit; reconstructing fs from (number, unit) recovers it.
            let s = t.format();
            let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
            let unit = &s[digits.len()..];
            let size = UNITS.iter().find(|(name, _)| *name == unit).map(|(_, s)| *s).unwrap();
            let recovered: u64 = digits.parse::<u64>().unwrap() * size;
            assert_eq!(recovered, fs);
        }
    }
}
