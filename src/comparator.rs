/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`PartialOrd`].
*/

use std::cmp::Ordering;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/**
Sort `items` in place with the provided comparator.

The sort is stable, so elements that the comparator considers equal keep their relative order.
*/
pub fn sort_by_comparator<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    log::trace!("Sorting {} items", items.len());
    items.sort_by(|a, b| comparator.compare(a, b));
}
