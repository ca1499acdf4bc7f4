use std::collections::VecDeque;

/// Ordered, index-addressable, mutable storage.
///
/// - Indices are 0-based and valid in `[0, len)`.
/// - `insert` accepts `index <= len`; anything past that is ignored.
/// - `get`, `set` and `remove` return `None` when the index is out of range.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Replaces the element at `index`, returning the displaced one.
    fn set(&mut self, index: usize, value: Self::Item) -> Option<Self::Item>;
    fn insert(&mut self, index: usize, value: Self::Item);
    fn remove(&mut self, index: usize) -> Option<Self::Item>;

    fn push(&mut self, value: Self::Item) {
        let index = self.len();
        self.insert(index, value);
    }

    fn extend<I: IntoIterator<Item = Self::Item>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if lo == hi || hi >= self.len() {
            return;
        }
        // remove(hi) leaves lo in place, so the displaced value goes back at hi.
        if let Some(upper) = self.remove(hi) {
            if let Some(lower) = self.set(lo, upper) {
                self.insert(hi, lower);
            }
        }
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Option<T> {
        let slot = self.as_mut_slice().get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        if index > Vec::len(self) {
            return;
        }
        Vec::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= Vec::len(self) {
            return None;
        }
        Some(Vec::remove(self, index))
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        let len = Vec::len(self);
        if a < len && b < len {
            self.as_mut_slice().swap(a, b);
        }
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Option<T> {
        let slot = VecDeque::get_mut(self, index)?;
        Some(std::mem::replace(slot, value))
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        if index > VecDeque::len(self) {
            return;
        }
        VecDeque::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        let len = VecDeque::len(self);
        if a < len && b < len {
            VecDeque::swap(self, a, b);
        }
    }
}
