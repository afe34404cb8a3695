//! This crate maintains series of closed intervals `[start, end]`, each of
//! which optionally carries a value.  Such a series describes a (possibly
//! partial) function from keys to values, for instance the price of an item
//! over time, where each interval is a period during which the price did
//! not change.
//!
//! Keys must be totally ordered and discretely steppable (see
//! [`Steppable`]): this is what makes `[1, 10]` and `[11, 20]` adjacent.
//! Integers and calendar dates ([`chrono::NaiveDate`], with the `chrono`
//! feature) are supported out of the box.
//!
//! Most operations expect the series to be continuous (no key is missing
//! between its first and last bound) and non-overlapping (no key belongs to
//! two intervals).  These are not enforced by the types: the series is just
//! a collection owned by the caller, and [`verify()`] checks them.
//!
//!  |Operation          |Description
//!  |-------------------|------------------------------------------------
//!  |[`insert()`]       |insert an interval, splitting or merging neighbours
//!  |[`update()`]       |modify values over a range, in place
//!  |[`trim_start()`]   |drop all keys before a new start
//!  |[`trim_end()`]     |drop all keys after a new end
//!  |[`rebuild()`]      |merge adjacent intervals that have equal values
//!  |[`merge()`]        |consolidate overlapping intervals, keep gaps
//!  |[`find()`]         |the interval that contains a key
//!  |[`find_range()`]   |all intervals that overlap a range
//!  |[`join()`]         |combine two series on their common keys
//!  |[`verify()`]       |check continuity and non-overlap
//!
//! For instance:
//! ```text
//!    series        [---- A ----][------- B -------]
//!
//!    insert C             [--- C ---]
//!                  [- A -][--- C ---][---- B -----]
//!
//!    update B'                            [------]
//!                  [---- A ----][-- B --][- B' -]
//! ```
//!
//! ```
//!    use interval_series::{insert, verify, Interval};
//!    let series = vec![Interval::new(1, 100, "A").unwrap()];
//!    let out = insert(
//!        series,
//!        Interval::new(51, 100, "B").unwrap(),
//!        |a, b| a.value == b.value,
//!        Clone::clone,
//!    )
//!    .unwrap()
//!    .collect::<Result<Vec<_>, _>>()
//!    .unwrap();
//!    assert_eq!(out.len(), 2);
//!    assert_eq!(verify(&out, true), Ok(true));
//! ```

mod errors;
mod find;
mod insert;
mod intervals;
mod join;
mod merge;
mod rebuild;
mod steppable;
mod trim;
mod update;
mod verify;

pub use crate::errors::{Error, Result};
pub use crate::find::{find, find_mut, find_range, find_required};
pub use crate::insert::{insert, Insert, Relation};
pub use crate::intervals::{domain, Interval, Span};
pub use crate::join::join;
pub use crate::merge::merge;
pub use crate::rebuild::rebuild;
pub use crate::steppable::Steppable;
pub use crate::trim::{trim_end, trim_start, TrimEnd, TrimStart};
pub use crate::update::update;
pub use crate::verify::{verify, violations};
