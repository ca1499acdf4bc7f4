//! ECMAScript `Array`-style operations over any [`Sequence`].
//!
//! Raw indices are `isize` and may be negative (counted back from the end)
//! or out of range; they are normalized, never rejected. Ranges are written
//! with Rust range syntax over those raw indices: `fill(&mut v, 0, 1..-1)`,
//! `slice(&v, -2..)`, `copy_within(&mut v, 0, ..)`.
//!
//! Callers holding a nullable sequence handle (`Option<&S>`) pass it through
//! [`require`] first to get [`SeqError::NullSequence`] instead of a panic.

mod error;
mod extract;
mod mutate;
mod normalize;
mod search;
mod sequence;
mod stable_sort;
mod traverse;
mod whole;

pub use error::{Result, SeqError, require};
pub use extract::slice;
pub use mutate::{copy_within, fill, splice};
pub use normalize::{RelativeIndex, normalize_range, wrap_target};
pub use search::{includes, index_of, last_index_of};
pub use sequence::Sequence;
pub use traverse::{
    every, filter, find, find_index, for_each, from_mapped, map, reduce, reduce_right,
    reduce_right_with, reduce_with, some,
};
pub use whole::{
    concat, concat_items, join, join_optional, of, pop, push, reverse, shift, sort, sort_by,
    to_string, unshift,
};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Runs at or below this length are sorted by insertion.
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 24,
};
