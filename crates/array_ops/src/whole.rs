//! Whole-sequence operations: building, joining, reordering and the
//! push/pop/shift/unshift end operations.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::extract::slice;
use crate::sequence::Sequence;
use crate::stable_sort::{apply_order, sorted_order};
use crate::traverse::map;

/// Builds a sequence holding `items` in order.
pub fn of<S, I>(items: I) -> S
where
    S: Sequence + Default,
    I: IntoIterator<Item = S::Item>,
{
    let mut result = S::default();
    result.extend(items);
    result
}

/// Shallow copy of `seq` followed by the elements of each source in turn.
///
/// Neither `seq` nor the sources are modified.
pub fn concat<'a, S, I, O>(seq: &S, others: I) -> S
where
    S: Sequence + Default,
    S::Item: Clone + 'a,
    I: IntoIterator<Item = O>,
    O: IntoIterator<Item = &'a S::Item>,
{
    let mut result = slice(seq, ..);
    for other in others {
        result.extend(other.into_iter().cloned());
    }
    result
}

/// Shallow copy of `seq` followed by `items`.
pub fn concat_items<S, I>(seq: &S, items: I) -> S
where
    S: Sequence + Default,
    S::Item: Clone,
    I: IntoIterator<Item = S::Item>,
{
    let mut result = slice(seq, ..);
    result.extend(items);
    result
}

pub fn join<S>(seq: &S, separator: &str) -> String
where
    S: Sequence,
    S::Item: Display,
{
    join_by(seq, separator, |element, out| out.push_str(&element.to_string()))
}

/// Like [`join`], rendering `None` elements as empty strings.
pub fn join_optional<S, T>(seq: &S, separator: &str) -> String
where
    S: Sequence<Item = Option<T>>,
    T: Display,
{
    join_by(seq, separator, |element, out| {
        if let Some(value) = element {
            out.push_str(&value.to_string());
        }
    })
}

/// Comma-separated rendering, as [`join`] with `","`.
pub fn to_string<S>(seq: &S) -> String
where
    S: Sequence,
    S::Item: Display,
{
    join(seq, ",")
}

fn join_by<S, F>(seq: &S, separator: &str, mut render: F) -> String
where
    S: Sequence,
    F: FnMut(&S::Item, &mut String),
{
    let mut out = String::new();
    let mut index = 0;
    while let Some(element) = seq.get(index) {
        if index > 0 {
            out.push_str(separator);
        }
        render(element, &mut out);
        index += 1;
    }
    out
}

pub fn reverse<S: Sequence>(seq: &mut S) -> &mut S {
    let len = seq.len();
    for i in 0..len / 2 {
        seq.swap(i, len - i - 1);
    }
    seq
}

/// Stable sort by the elements' string form.
pub fn sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence,
    S::Item: Display,
{
    let keys = map(&*seq, |element, _, _| element.to_string());
    let order = sorted_order(keys.len(), |a, b| keys[a].cmp(&keys[b]));
    apply_order(seq, order);
    seq
}

/// Stable sort under `compare`; equal elements keep their relative order.
pub fn sort_by<S, F>(seq: &mut S, mut compare: F) -> &mut S
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let order = {
        let view: &S = seq;
        sorted_order(view.len(), |a, b| match (view.get(a), view.get(b)) {
            (Some(x), Some(y)) => compare(x, y),
            _ => Ordering::Equal,
        })
    };
    apply_order(seq, order);
    seq
}

/// Appends `items`; returns the new length.
pub fn push<S, I>(seq: &mut S, items: I) -> usize
where
    S: Sequence,
    I: IntoIterator<Item = S::Item>,
{
    seq.extend(items);
    seq.len()
}

/// Prepends `items`, keeping their order; returns the new length.
pub fn unshift<S, I>(seq: &mut S, items: I) -> usize
where
    S: Sequence,
    I: IntoIterator<Item = S::Item>,
{
    for (at, item) in items.into_iter().enumerate() {
        seq.insert(at, item);
    }
    seq.len()
}

pub fn pop<S: Sequence>(seq: &mut S) -> Option<S::Item> {
    let last = seq.len().checked_sub(1)?;
    seq.remove(last)
}

pub fn shift<S: Sequence>(seq: &mut S) -> Option<S::Item> {
    seq.remove(0)
}
