//!
//! This crate provides four strategies for removing all elements matching a predicate
//! from an ordered sequence, each with a different cost profile:
//!
//! - [`remove_where_quadratic`](./fn.remove_where_quadratic.html): per-match element shifting, O(n²) worst case.
//! - [`remove_where_filter`](./fn.remove_where_filter.html): rebuild the survivors into a fresh sequence.
//! - [`remove_where_move`](./fn.remove_where_move.html): in-place two-cursor copy compaction.
//! - [`remove_where_swap`](./fn.remove_where_swap.html): in-place two-cursor swap compaction.
//!
//! All operate through the [`Sequence`](./trait.Sequence.html) trait, implemented for
//! `Vec<T>` and for [`CharString`](./struct.CharString.html).
//!
//! # Example
//!
//! ```
//! use remove_where::remove_where_move;
//!
//! let mut values = vec![1, 2, 3, 4, 5, 6];
//!
//! remove_where_move(&mut values, |x| x % 2 == 0);
//!
//! assert_eq!(values, vec![1, 3, 5]);
//! ```
//!

mod remove;
mod sequence;

pub use crate::remove::{
    remove_where_filter, remove_where_move, remove_where_quadratic, remove_where_swap,
    try_remove_where_filter, try_remove_where_move, try_remove_where_quadratic,
    try_remove_where_swap,
};
pub use crate::sequence::{CharString, Sequence};
