use std::ops::RangeBounds;

use crate::normalize::normalize_range;
use crate::sequence::Sequence;

/// Shallow copy of the normalized `range` into a new sequence.
///
/// `seq` is never modified; an empty range yields an empty sequence.
pub fn slice<S, R>(seq: &S, range: R) -> S
where
    S: Sequence + Default,
    S::Item: Clone,
    R: RangeBounds<isize>,
{
    let mut result = S::default();
    if let Some(range) = normalize_range(range, seq.len()) {
        result.extend(range.filter_map(|i| seq.get(i).cloned()));
    }
    result
}
