//! Leveled consistency checks. Cheap checks run in every build; the expensive ones (re-probing
//! open cells, re-deriving attack relations between committed queens) only run under
//! `cfg(test)` or with the `debug-checks` feature enabled.

pub const QUEENS_ASSERT_SIMPLE: u8 = 1;
pub const QUEENS_ASSERT_MODERATE: u8 = 2;
pub const QUEENS_ASSERT_EXTREME: u8 = 3;

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const QUEENS_ASSERT_LEVEL: u8 = QUEENS_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const QUEENS_ASSERT_LEVEL: u8 = QUEENS_ASSERT_EXTREME;

#[macro_export]
#[doc(hidden)]
macro_rules! print_queens_assert_warning_message {
    () => {
        if $crate::asserts::QUEENS_ASSERT_LEVEL >= $crate::asserts::QUEENS_ASSERT_MODERATE {
            log::warn!(
                "Potential performance degradation: assert level {} re-checks every propagation.",
                $crate::asserts::QUEENS_ASSERT_LEVEL
            );
        }
    };
}

/// Run `$check` only when the configured level is at least `$level`.
#[macro_export]
#[doc(hidden)]
macro_rules! queens_assert_at_level {
    ($level:expr, $check:ident!($($arg:tt)*)) => {
        if $crate::asserts::QUEENS_ASSERT_LEVEL >= $level {
            $check!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! queens_assert_simple {
    ($($arg:tt)*) => {
        $crate::queens_assert_at_level!($crate::asserts::QUEENS_ASSERT_SIMPLE, assert!($($arg)*))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! queens_assert_eq_simple {
    ($($arg:tt)*) => {
        $crate::queens_assert_at_level!($crate::asserts::QUEENS_ASSERT_SIMPLE, assert_eq!($($arg)*))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! queens_assert_moderate {
    ($($arg:tt)*) => {
        $crate::queens_assert_at_level!($crate::asserts::QUEENS_ASSERT_MODERATE, assert!($($arg)*))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! queens_assert_extreme {
    ($($arg:tt)*) => {
        $crate::queens_assert_at_level!($crate::asserts::QUEENS_ASSERT_EXTREME, assert!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::QUEENS_ASSERT_EXTREME;
    use super::QUEENS_ASSERT_LEVEL;

    #[test]
    fn tests_run_every_check() {
        assert_eq!(QUEENS_ASSERT_LEVEL, QUEENS_ASSERT_EXTREME);
    }

    #[test]
    #[should_panic(expected = "levelled check fired")]
    fn extreme_checks_fire_under_test() {
        crate::queens_assert_extreme!(1 + 1 == 3, "levelled check fired");
    }
}
