use std::convert::Infallible;

use crate::sequence::Sequence;

// All four strategies share the same contract: every element for which the
// predicate holds is removed, survivors keep their relative order. The
// fallible `try_` forms re-signal predicate errors unchanged and leave the
// sequence in an unspecified (but valid) state on failure. The plain forms
// are thin wrappers over the fallible ones.

/// Remove matching elements by scanning from the last index to the first and
/// deleting each match immediately.
///
/// Each deletion shifts the remaining tail left, so the worst case is O(n²).
pub fn remove_where_quadratic<S, P>(seq: &mut S, mut pred: P)
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    into_ok(try_remove_where_quadratic(seq, |x| Ok(pred(x))));
}

/// Fallible form of [`remove_where_quadratic`](./fn.remove_where_quadratic.html).
pub fn try_remove_where_quadratic<S, P, E>(seq: &mut S, mut pred: P) -> Result<(), E>
where
    S: Sequence,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    for i in (0 .. seq.len()).rev() {
        if pred(seq.get(i))? {
            seq.remove_range(i, i + 1);
        }
    }
    Ok(())
}

/// Remove matching elements by rebuilding the survivors into a fresh sequence
/// and replacing the original.
///
/// One predicate evaluation and at most one clone per element, at the cost of
/// a full reallocation.
pub fn remove_where_filter<S, P>(seq: &mut S, mut pred: P)
where
    S: Sequence + Default,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    into_ok(try_remove_where_filter(seq, |x| Ok(pred(x))));
}

/// Fallible form of [`remove_where_filter`](./fn.remove_where_filter.html).
pub fn try_remove_where_filter<S, P, E>(seq: &mut S, mut pred: P) -> Result<(), E>
where
    S: Sequence + Default,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    let mut kept = S::default();
    for i in 0 .. seq.len() {
        let x = seq.get(i);
        if !pred(x)? {
            kept.push(x.clone());
        }
    }
    *seq = kept;
    Ok(())
}

/// Remove matching elements with a single in-place compaction pass.
///
/// After locating the first match, a read cursor `j` walks the tail and each
/// survivor is assigned into the write cursor position `i`. At most one
/// assignment per survivor, no reallocation. A sequence without matches is
/// left untouched.
pub fn remove_where_move<S, P>(seq: &mut S, mut pred: P)
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    into_ok(try_remove_where_move(seq, |x| Ok(pred(x))));
}

/// Fallible form of [`remove_where_move`](./fn.remove_where_move.html).
pub fn try_remove_where_move<S, P, E>(seq: &mut S, mut pred: P) -> Result<(), E>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    let mut i = match try_first_index(seq, &mut pred)? {
        Some(i) => i,
        None => return Ok(()),
    };

    for j in i + 1 .. seq.len() {
        let x = seq.get(j).clone();
        if !pred(&x)? {
            seq.set(i, x);
            i += 1;
        }
    }

    seq.truncate(i);
    Ok(())
}

/// Remove matching elements with a single in-place swap-compaction pass.
///
/// Same cursor structure as [`remove_where_move`](./fn.remove_where_move.html),
/// but survivors are swapped into place instead of assigned, so no temporary
/// clone is needed.
///
/// Note: the predicate is evaluated on the element at the write cursor `i`,
/// not the read cursor `j`. The write position holds an element already
/// marked for removal, so this variant is only equivalent to the other three
/// for positional predicates that fire based on evaluation count (one
/// evaluation per step), such as "every k-th call". A predicate that inspects
/// its argument will produce different results.
pub fn remove_where_swap<S, P>(seq: &mut S, mut pred: P)
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    into_ok(try_remove_where_swap(seq, |x| Ok(pred(x))));
}

/// Fallible form of [`remove_where_swap`](./fn.remove_where_swap.html).
pub fn try_remove_where_swap<S, P, E>(seq: &mut S, mut pred: P) -> Result<(), E>
where
    S: Sequence,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    let mut i = match try_first_index(seq, &mut pred)? {
        Some(i) => i,
        None => return Ok(()),
    };

    for j in i + 1 .. seq.len() {
        if !pred(seq.get(i))? {
            seq.swap(i, j);
            i += 1;
        }
    }

    seq.truncate(i);
    Ok(())
}

fn try_first_index<S, P, E>(seq: &S, pred: &mut P) -> Result<Option<usize>, E>
where
    S: Sequence,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    for i in 0 .. seq.len() {
        if pred(seq.get(i))? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

fn into_ok(result: Result<(), Infallible>) {
    match result {
        Ok(()) => (),
        Err(never) => match never {},
    }
}
