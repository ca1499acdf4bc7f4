use crate::normalize::RelativeIndex;
use crate::sequence::Sequence;

/// First index at or after `from_index` holding a value equal to `item`.
///
/// A `from_index` at or past the end finds nothing.
pub fn index_of<S>(seq: &S, item: &S::Item, from_index: isize) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    let len = seq.len();
    let start = from_index.relative_to(len);
    (start..len).find(|&i| seq.get(i) == Some(item))
}

/// Last index at or before `from_index` holding a value equal to `item`.
///
/// Pass `-1` to search from the last element. A `from_index` past the end is
/// clamped to the last element; one that stays negative after offsetting
/// finds nothing.
pub fn last_index_of<S>(seq: &S, item: &S::Item, from_index: isize) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    let last = seq.len().checked_sub(1)?;
    let start = if from_index < 0 {
        let back = from_index.unsigned_abs();
        last.checked_sub(back - 1)?
    } else {
        (from_index as usize).min(last)
    };
    (0..=start).rev().find(|&i| seq.get(i) == Some(item))
}

/// `true` when the first occurrence of `item` lies at or after `from_index`.
///
/// The first occurrence is taken over the whole sequence, so a match before
/// `from_index` hides any later ones. A `from_index` at or past the end is
/// always `false`.
pub fn includes<S>(seq: &S, item: &S::Item, from_index: isize) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    let len = seq.len();
    if from_index >= 0 && from_index as usize >= len {
        return false;
    }
    let from = from_index.relative_to(len);
    index_of(seq, item, 0).is_some_and(|found| found >= from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_from_offsets() {
        let v = vec![1, 2, 3, 1, 2];
        assert_eq!(index_of(&v, &1, 0), Some(0));
        assert_eq!(index_of(&v, &1, 1), Some(3));
        assert_eq!(index_of(&v, &2, -1), Some(4));
        assert_eq!(index_of(&v, &3, -2), None);
        assert_eq!(index_of(&v, &1, -100), Some(0));
        assert_eq!(index_of(&v, &1, 5), None);
        assert_eq!(index_of(&v, &9, 0), None);
    }

    #[test]
    fn last_index_of_from_offsets() {
        let v = vec![1, 2, 3, 1, 2];
        assert_eq!(last_index_of(&v, &1, -1), Some(3));
        assert_eq!(last_index_of(&v, &1, 2), Some(0));
        assert_eq!(last_index_of(&v, &2, 100), Some(4));
        assert_eq!(last_index_of(&v, &2, -2), Some(1));
        assert_eq!(last_index_of(&v, &1, -5), Some(0));
        assert_eq!(last_index_of(&v, &1, -6), None);
        assert_eq!(last_index_of(&v, &9, -1), None);

        let empty: Vec<i32> = Vec::new();
        assert_eq!(last_index_of(&empty, &1, -1), None);
    }

    #[test]
    fn includes_compares_first_occurrence_with_offset() {
        let v = vec!["a", "b", "a"];
        assert!(includes(&v, &"a", 0));
        assert!(!includes(&v, &"a", 1));
        assert!(!includes(&v, &"a", -1));
        assert!(includes(&v, &"a", -100));
        assert!(includes(&v, &"b", 1));
        assert!(includes(&v, &"b", -2));
        assert!(!includes(&v, &"b", 2));
        assert!(!includes(&v, &"a", 3));
        assert!(!includes(&v, &"z", 0));

        let empty: Vec<&str> = Vec::new();
        assert!(!includes(&empty, &"a", 0));
        assert!(!includes(&empty, &"a", -1));
    }
}
