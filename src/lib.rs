//! An always-sorted contiguous buffer, plus the line-sorting tool built on it.
//!
//! [`OrderedBuffer`] keeps its elements in ascending order through every
//! insertion and removal. The remaining modules make up the `sortvec`
//! binary, which feeds input lines through the buffer one insert at a time.

pub mod buffer;
pub mod cli;
pub mod compare;
pub mod config;
pub mod debug;
pub mod error;
pub mod input;
pub mod output;
pub mod sort;

pub use buffer::OrderedBuffer;
pub use error::{Result, SortvecError};
