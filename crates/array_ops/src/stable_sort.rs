use std::cmp::Ordering;

use crate::TUNED_PARAMS;
use crate::sequence::Sequence;

/// Stable ordering of the positions `0..len` under `compare`.
///
/// Top-down merge sort over an index permutation with an insertion-sort
/// cutoff; ties keep their original relative order.
pub(crate) fn sorted_order<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    if len < 2 || is_sorted(&order, &mut compare) {
        return order;
    }

    let mut buf = order.clone();
    merge_sort_recursive(&mut buf, &mut order, 0, len, &mut compare);
    order
}

/// Rearranges `seq` so that position `i` holds the element previously at `order[i]`.
pub(crate) fn apply_order<S: Sequence>(seq: &mut S, mut order: Vec<usize>) {
    for i in 0..order.len() {
        let mut cur = i;
        while order[cur] != i {
            let next = order[cur];
            seq.swap(cur, next);
            order[cur] = cur;
            cur = next;
        }
        order[cur] = cur;
    }
}

fn is_sorted<F>(order: &[usize], compare: &mut F) -> bool
where
    F: FnMut(usize, usize) -> Ordering,
{
    order
        .windows(2)
        .all(|pair| compare(pair[0], pair[1]) != Ordering::Greater)
}

fn insertion_sort<F>(data: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if compare(prev, key) != Ordering::Greater {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}

fn merge_sort_recursive<F>(
    src: &mut [usize],
    dst: &mut [usize],
    left: usize,
    right: usize,
    compare: &mut F,
) where
    F: FnMut(usize, usize) -> Ordering,
{
    let len = right - left;
    if len <= TUNED_PARAMS.insertion_threshold {
        dst[left..right].copy_from_slice(&src[left..right]);
        insertion_sort(&mut dst[left..right], compare);
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, compare);
    merge_sort_recursive(dst, src, mid, right, compare);

    if compare(src[mid - 1], src[mid]) != Ordering::Greater {
        dst[left..right].copy_from_slice(&src[left..right]);
        return;
    }

    merge_ranges(src, dst, left, mid, right, compare);
}

fn merge_ranges<F>(
    src: &[usize],
    dst: &mut [usize],
    left: usize,
    mid: usize,
    right: usize,
    compare: &mut F,
) where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        // Equal keys take from the left run first.
        if compare(src[i], src[j]) != Ordering::Greater {
            dst[k] = src[i];
            i += 1;
        } else {
            dst[k] = src[j];
            j += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].copy_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].copy_from_slice(&src[j..right]);
    }
}
