use std::ops::{Bound, Range, RangeBounds};

/// Relative index arithmetic: negative values count back from the end.
pub trait RelativeIndex: Copy {
    /// Resolves against `len`, clamped into `[0, len]`.
    fn relative_to(self, len: usize) -> usize;

    /// Position one past the resolved index, clamped into `[0, len]`.
    ///
    /// An index that lies before the start entirely yields `0`.
    fn after(self, len: usize) -> usize;
}

impl RelativeIndex for isize {
    #[inline]
    fn relative_to(self, len: usize) -> usize {
        if self < 0 {
            len.saturating_sub(self.unsigned_abs())
        } else {
            (self as usize).min(len)
        }
    }

    #[inline]
    fn after(self, len: usize) -> usize {
        if self < 0 {
            let back = self.unsigned_abs();
            if back > len { 0 } else { len - back + 1 }
        } else {
            (self as usize).saturating_add(1).min(len)
        }
    }
}

/// Resolves a relative range to `start..end` with `start < end <= len`.
///
/// Unbounded ends default to `0` and `len`. Returns `None` for an empty range.
pub fn normalize_range<R: RangeBounds<isize>>(range: R, len: usize) -> Option<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s.relative_to(len),
        Bound::Excluded(&s) => s.after(len),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Excluded(&e) => e.relative_to(len),
        Bound::Included(&e) => e.after(len),
    };
    if end <= start {
        return None;
    }
    Some(start..end)
}

/// Resolves a `copy_within` target.
///
/// Negative targets wrap modulo `len` instead of offsetting from the end, so
/// `-1` and `len - 1` agree but `-len - 1` also lands on `len - 1`. Targets at
/// or past `len` (and any target on an empty sequence) resolve to `None`.
pub fn wrap_target(raw: isize, len: usize) -> Option<usize> {
    let signed_len = isize::try_from(len).ok()?;
    if signed_len == 0 {
        return None;
    }
    if raw < 0 {
        return Some(raw.rem_euclid(signed_len) as usize);
    }
    let target = raw as usize;
    (target < len).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_index_table() {
        // [0,1,2,3,4]
        assert_eq!((-6_isize).relative_to(5), 0);
        assert_eq!((-5_isize).relative_to(5), 0);
        assert_eq!((-2_isize).relative_to(5), 3);
        assert_eq!((-1_isize).relative_to(5), 4);
        assert_eq!(0_isize.relative_to(5), 0);
        assert_eq!(4_isize.relative_to(5), 4);
        assert_eq!(5_isize.relative_to(5), 5);
        assert_eq!(isize::MAX.relative_to(5), 5);
        assert_eq!(isize::MIN.relative_to(5), 0);
    }

    #[test]
    fn after_table() {
        assert_eq!((-6_isize).after(5), 0);
        assert_eq!((-5_isize).after(5), 1);
        assert_eq!((-1_isize).after(5), 5);
        assert_eq!(0_isize.after(5), 1);
        assert_eq!(4_isize.after(5), 5);
        assert_eq!(isize::MAX.after(5), 5);
    }

    #[test]
    fn ranges() {
        assert_eq!(normalize_range(.., 5), Some(0..5));
        assert_eq!(normalize_range(-2.., 5), Some(3..5));
        assert_eq!(normalize_range(3.., 5), Some(3..5));
        assert_eq!(normalize_range(-100.., 5), Some(0..5));
        assert_eq!(normalize_range(1..-1, 5), Some(1..4));
        assert_eq!(normalize_range(1..=-1, 5), Some(1..5));
        assert_eq!(normalize_range(..=-6, 5), None);
        assert_eq!(normalize_range(0..100, 5), Some(0..5));
        assert_eq!(
            normalize_range((Bound::Excluded(0), Bound::Unbounded), 5),
            Some(1..5)
        );
    }

    #[test]
    fn empty_ranges_collapse() {
        assert_eq!(normalize_range(5.., 5), None);
        assert_eq!(normalize_range(7.., 5), None);
        assert_eq!(normalize_range(3..3, 5), None);
        assert_eq!(normalize_range(4..2, 5), None);
        assert_eq!(normalize_range(-1..-2, 5), None);
        assert_eq!(normalize_range(.., 0), None);
    }

    #[test]
    fn targets_wrap() {
        assert_eq!(wrap_target(0, 5), Some(0));
        assert_eq!(wrap_target(4, 5), Some(4));
        assert_eq!(wrap_target(5, 5), None);
        assert_eq!(wrap_target(-1, 5), Some(4));
        assert_eq!(wrap_target(-5, 5), Some(0));
        assert_eq!(wrap_target(-6, 5), Some(4));
        assert_eq!(wrap_target(-1, 0), None);
        assert_eq!(wrap_target(0, 0), None);
    }
}
