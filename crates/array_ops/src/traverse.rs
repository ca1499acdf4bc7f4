//! Callback-driven traversals.
//!
//! Callbacks receive `(element, index, sequence)`. The length is re-read on
//! every step; the shared borrow keeps callbacks from resizing the sequence.

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

pub fn for_each<S, F>(seq: &S, mut consumer: F)
where
    S: Sequence,
    F: FnMut(&S::Item, usize, &S),
{
    let mut index = 0;
    while let Some(element) = seq.get(index) {
        consumer(element, index, seq);
        index += 1;
    }
}

/// Maps each element by position into a new sequence of the same length.
pub fn map<S, R, F>(seq: &S, mut mapper: F) -> Vec<R>
where
    S: Sequence,
    F: FnMut(&S::Item, usize, &S) -> R,
{
    let mut result = Vec::with_capacity(seq.len());
    for_each(seq, |element, index, seq| {
        result.push(mapper(element, index, seq));
    });
    result
}

/// Copies `collection` into a sequence and maps it like [`map`].
pub fn from_mapped<I, R, F>(collection: I, mapper: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize, &Vec<I::Item>) -> R,
{
    let copy: Vec<I::Item> = collection.into_iter().collect();
    map(&copy, mapper)
}

/// Keeps the elements for which `predicate` holds, in order.
pub fn filter<S, P>(seq: &S, mut predicate: P) -> S
where
    S: Sequence + Default,
    S::Item: Clone,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    let mut result = S::default();
    for_each(seq, |element, index, seq| {
        if predicate(element, index, seq) {
            result.push(element.clone());
        }
    });
    result
}

pub fn find<'a, S, P>(seq: &'a S, predicate: P) -> Option<&'a S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    find_index(seq, predicate).and_then(|index| seq.get(index))
}

pub fn find_index<S, P>(seq: &S, mut predicate: P) -> Option<usize>
where
    S: Sequence,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    let mut index = 0;
    while let Some(element) = seq.get(index) {
        if predicate(element, index, seq) {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// `true` when every element passes; vacuously `true` when empty.
pub fn every<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    find_index(seq, |element, index, seq| !predicate(element, index, seq)).is_none()
}

pub fn some<S, P>(seq: &S, predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize, &S) -> bool,
{
    find_index(seq, predicate).is_some()
}

/// Left fold seeded with the first element, starting at index 1.
///
/// Fails with [`SeqError::EmptyReduction`] on an empty sequence.
pub fn reduce<S, F>(seq: &S, mut reducer: F) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item, usize, &S) -> S::Item,
{
    let mut accumulator = seq.get(0).cloned().ok_or_else(|| empty_reduction("reduce"))?;
    let mut index = 1;
    while let Some(element) = seq.get(index) {
        accumulator = reducer(accumulator, element, index, seq);
        index += 1;
    }
    Ok(accumulator)
}

/// Left fold from index 0 with a supplied seed; an empty sequence returns it.
pub fn reduce_with<S, A, F>(seq: &S, mut reducer: F, initial: A) -> A
where
    S: Sequence,
    F: FnMut(A, &S::Item, usize, &S) -> A,
{
    let mut accumulator = initial;
    let mut index = 0;
    while let Some(element) = seq.get(index) {
        accumulator = reducer(accumulator, element, index, seq);
        index += 1;
    }
    accumulator
}

/// Right fold seeded with the last element, walking down to index 0.
pub fn reduce_right<S, F>(seq: &S, mut reducer: F) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item, usize, &S) -> S::Item,
{
    let last = seq.len().checked_sub(1).ok_or_else(|| empty_reduction("reduceRight"))?;
    let mut accumulator = seq
        .get(last)
        .cloned()
        .ok_or_else(|| empty_reduction("reduceRight"))?;
    for index in (0..last).rev() {
        if let Some(element) = seq.get(index) {
            accumulator = reducer(accumulator, element, index, seq);
        }
    }
    Ok(accumulator)
}

pub fn reduce_right_with<S, A, F>(seq: &S, mut reducer: F, initial: A) -> A
where
    S: Sequence,
    F: FnMut(A, &S::Item, usize, &S) -> A,
{
    let mut accumulator = initial;
    for index in (0..seq.len()).rev() {
        if let Some(element) = seq.get(index) {
            accumulator = reducer(accumulator, element, index, seq);
        }
    }
    accumulator
}

fn empty_reduction(op: &'static str) -> SeqError {
    #[cfg(feature = "op_logging")]
    tracing::debug!(target: "array_ops::traverse", op, "reduction over empty sequence");

    SeqError::EmptyReduction { op }
}
