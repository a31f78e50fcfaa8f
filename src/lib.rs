//! Singly-linked sequences with owned nodes: forward iteration, O(1) front
//! insertion and removal, and cursor-based insertion and removal after any
//! position, including the position before the first element.

pub mod sequence;

pub use sequence::{Cursor, CursorMut, IntoIter, Iter, IterMut, LinkedSequence};
