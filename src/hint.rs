//! Branch prediction hints.
//!
//! [`likely`] and [`unlikely`] wrap the condition of a branch to tell the
//! optimizer which way it usually goes. They never change the condition's
//! value and evaluate their argument exactly once, so wrapping a condition
//! is always behavior-preserving and correctness never depends on whether
//! the hint is honored.
//!
//! The hint mechanism is selected by the `nightly` cargo feature. When it is
//! enabled the hints forward to the `core::intrinsics` equivalents. On
//! stable Rust they fall back to steering code layout with a `#[cold]`
//! function, the approach used by the `hashbrown` crate via
//! <https://users.rust-lang.org/t/compiler-hint-for-unlikely-likely-for-if-branches/62102/4>.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "nightly")] {
        /// Mark the condition of a branch as likely to be true.
        #[inline(always)]
        pub fn likely(b: bool) -> bool {
            core::intrinsics::likely(b)
        }

        /// Mark the condition of a branch as unlikely to be true.
        #[inline(always)]
        pub fn unlikely(b: bool) -> bool {
            core::intrinsics::unlikely(b)
        }
    } else {
        #[inline]
        #[cold]
        fn cold() {}

        /// Mark the condition of a branch as likely to be true.
        #[inline]
        pub fn likely(b: bool) -> bool {
            if !b {
                cold()
            }
            b
        }

        /// Mark the condition of a branch as unlikely to be true.
        #[inline]
        pub fn unlikely(b: bool) -> bool {
            if b {
                cold()
            }
            b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{likely, unlikely};

    #[test]
    fn test_hints_preserve_value() {
        for b in [false, true] {
            assert_eq!(likely(b), b);
            assert_eq!(unlikely(b), b);
        }
    }

    #[test]
    fn test_hints_evaluate_argument_once() {
        let mut count = 0;
        let mut flip = |value| {
            count += 1;
            value
        };
        assert!(likely(flip(true)));
        assert!(!unlikely(flip(false)));
        assert_eq!(count, 2);
    }
}
