//! In-place range mutators: `fill`, `copy_within` and `splice`.

use std::ops::{Range, RangeBounds};

use crate::normalize::{RelativeIndex, normalize_range, wrap_target};
use crate::sequence::Sequence;

/// Overwrites every slot of the normalized `range` with `item`.
///
/// Size is unchanged; an empty range leaves `seq` untouched.
pub fn fill<S, R>(seq: &mut S, item: S::Item, range: R) -> &mut S
where
    S: Sequence,
    S::Item: Clone,
    R: RangeBounds<isize>,
{
    let Some(Range { start, end }) = normalize_range(range, seq.len()) else {
        return seq;
    };

    #[cfg(feature = "op_logging")]
    tracing::trace!(target: "array_ops::mutate", start, end, "fill");

    for i in start..end {
        seq.set(i, item.clone());
    }
    seq
}

/// Copies the normalized `range` so that it begins at `target`.
///
/// `target` wraps modulo the length when negative and is a no-op at or past
/// the end. The copy is overlap-safe and truncated at the end of `seq`; the
/// size never changes.
pub fn copy_within<S, R>(seq: &mut S, target: isize, range: R) -> &mut S
where
    S: Sequence,
    S::Item: Clone,
    R: RangeBounds<isize>,
{
    let len = seq.len();
    let Some(target) = wrap_target(target, len) else {
        return seq;
    };
    let Some(Range { start, end }) = normalize_range(range, len) else {
        return seq;
    };
    if target == start {
        return seq;
    }

    if target < start {
        #[cfg(feature = "op_logging")]
        tracing::trace!(
            target: "array_ops::mutate",
            dest = target,
            start,
            end,
            "copy_within forward"
        );

        for (offset, from) in (start..end).enumerate() {
            copy_slot(seq, from, target + offset);
        }
    } else {
        // Destination after source: walk backward so unread source slots survive.
        let end = end.min(len - target + start);

        #[cfg(feature = "op_logging")]
        tracing::trace!(
            target: "array_ops::mutate",
            dest = target,
            start,
            end,
            "copy_within backward"
        );

        for from in (start..end).rev() {
            copy_slot(seq, from, target + from - start);
        }
    }
    seq
}

#[inline]
fn copy_slot<S>(seq: &mut S, from: usize, to: usize)
where
    S: Sequence,
    S::Item: Clone,
{
    if let Some(value) = seq.get(from).cloned() {
        seq.set(to, value);
    }
}

/// Removes up to `delete_count` elements at `start` and inserts `items` there.
///
/// `delete_count: None` removes through the end. A `start` at or past the end
/// deletes nothing and appends `items`. Returns the removed elements in their
/// original order.
pub fn splice<S, I>(seq: &mut S, start: isize, delete_count: Option<usize>, items: I) -> S
where
    S: Sequence + Default,
    I: IntoIterator<Item = S::Item>,
{
    let len = seq.len();
    let start = start.relative_to(len);
    let tail = len - start;
    let count = delete_count.map_or(tail, |count| count.min(tail));

    #[cfg(feature = "op_logging")]
    tracing::trace!(target: "array_ops::mutate", start, count, "splice");

    let mut removed = S::default();
    for _ in 0..count {
        if let Some(value) = seq.remove(start) {
            removed.push(value);
        }
    }

    let mut at = start;
    for item in items {
        seq.insert(at, item);
        at += 1;
    }
    removed
}
