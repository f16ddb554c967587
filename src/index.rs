//! Index normalization and precondition checks.
//!
//! These are stateless helpers over `(index, size)` pairs so that the
//! Python-style index rules can be tested without touching storage.

use crate::error::{ListError, Result};

/// Translates a Python-style index into its non-negative form.
///
/// The raw `index` is accepted when `low <= index < high`; a negative
/// index is then shifted by `size`. The result may be `-1` only when the
/// caller's accepted range reaches below `-size` (slice stops do).
pub(crate) fn normalize(index: isize, size: usize, low: isize, high: isize) -> Result<isize> {
    if index < low || index >= high {
        return Err(ListError::OutOfBounds { index, low, high });
    }

    Ok(if index < 0 { index + size as isize } else { index })
}

/// Fails with [`ListError::Empty`] when there is no element to operate on.
pub(crate) fn check_empty(size: usize) -> Result<()> {
    if size == 0 {
        return Err(ListError::Empty);
    }

    Ok(())
}

/// Fails with [`ListError::CapacityExceeded`] when `size` has reached the
/// supplied ceiling.
pub(crate) fn check_full(size: usize, ceiling: usize) -> Result<()> {
    if size == ceiling {
        return Err(ListError::CapacityExceeded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_empty, check_full, normalize};
    use crate::error::ListError;

    #[test]
    fn test_normalize_keeps_non_negative_indices() {
        assert_eq!(normalize(0, 3, -3, 3), Ok(0));
        assert_eq!(normalize(2, 3, -3, 3), Ok(2));
    }

    #[test]
    fn test_normalize_translates_negative_indices() {
        assert_eq!(normalize(-1, 3, -3, 3), Ok(2));
        assert_eq!(normalize(-3, 3, -3, 3), Ok(0));
    }

    #[test]
    fn test_normalize_rejects_out_of_range_indices() {
        assert_eq!(
            normalize(3, 3, -3, 3),
            Err(ListError::OutOfBounds {
                index: 3,
                low: -3,
                high: 3
            })
        );
        assert_eq!(
            normalize(-4, 3, -3, 3),
            Err(ListError::OutOfBounds {
                index: -4,
                low: -3,
                high: 3
            })
        );
    }

    #[test]
    fn test_normalize_insertion_range_accepts_one_past_the_end() {
        assert_eq!(normalize(3, 3, -3, 4), Ok(3));
        assert_eq!(normalize(4, 3, -3, 4), Err(ListError::OutOfBounds {
            index: 4,
            low: -3,
            high: 4
        }));
    }

    #[test]
    fn test_normalize_slice_stop_may_reach_minus_one() {
        // a stop of -size-1 addresses the cell before the first element
        assert_eq!(normalize(-4, 3, -4, 4), Ok(-1));
    }

    #[test]
    fn test_normalize_rejects_everything_on_an_empty_size_zero_range() {
        assert_eq!(
            normalize(0, 0, 0, 0),
            Err(ListError::OutOfBounds {
                index: 0,
                low: 0,
                high: 0
            })
        );
    }

    #[test]
    fn test_check_empty() {
        assert_eq!(check_empty(0), Err(ListError::Empty));
        assert_eq!(check_empty(1), Ok(()));
    }

    #[test]
    fn test_check_full() {
        assert_eq!(check_full(8, 8), Err(ListError::CapacityExceeded));
        assert_eq!(check_full(7, 8), Ok(()));
    }
}
