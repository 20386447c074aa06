//! Always-sorted growable buffer
//!
//! `OrderedBuffer` keeps its elements in ascending order after every
//! mutation. Storage is a single `Vec` whose reserved size is tracked
//! separately as the buffer's capacity, so growth happens exactly when the
//! buffer is full and always doubles.
//!
//! Positions returned by `insert`, `erase` and `find` are plain indices.
//! Any insert invalidates all previously obtained positions; an erase
//! invalidates positions at or after the erase point.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::Deref;

use crate::error::{Result, SortvecError};

/// A contiguous buffer whose elements are always in ascending order
pub struct OrderedBuffer<T> {
    /// Live elements. Always reserved to at least `cap` slots.
    buf: Vec<T>,
    /// Slots owned by the buffer
    cap: usize,
}

impl<T> OrderedBuffer<T> {
    /// Create an empty buffer without allocating
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of slots owned by the buffer
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The live elements, ascending
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Iterate in ascending order; call `.rev()` for descending
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Bounds-checked access
    pub fn at(&self, index: usize) -> Result<&T> {
        self.buf.get(index).ok_or(SortvecError::OutOfRange {
            index,
            len: self.buf.len(),
        })
    }

    /// Unchecked access
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: upheld by the caller
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Remove the element at `position`, returning the position now held
    /// by its successor (equal to `len()` when the last element went)
    ///
    /// Capacity is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> usize {
        self.buf.remove(position);
        position
    }

    /// Keep only the elements for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.retain(keep);
    }

    /// Move the contents out, leaving `self` empty with no storage
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Unwrap into the underlying ascending `Vec`
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }
}

impl<T: Clone> OrderedBuffer<T> {
    /// Create a buffer of exactly `n` slots, all holding `value`
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            buf: vec![value; n],
            cap: n,
        }
    }

    /// Like `filled`, but reports allocation failure instead of aborting
    pub fn try_filled(n: usize, value: T) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(n)?;
        buf.resize(n, value);
        Ok(Self { buf, cap: n })
    }
}

impl<T: Ord> OrderedBuffer<T> {
    /// Build from an arbitrary sequence, sorting it once
    pub fn from_unsorted<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf: Vec<T> = iter.into_iter().collect();
        buf.shrink_to_fit();
        buf.sort_unstable();
        let cap = buf.len();
        Self { buf, cap }
    }

    /// Insert `value` in order and return the position it now occupies
    ///
    /// An element equal to existing ones lands after them. When the
    /// buffer is full its capacity doubles (or becomes 1 when empty).
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn insert(&mut self, value: T) -> usize {
        if self.buf.len() < self.cap {
            return self.insert_in_place(value);
        }

        let Some(new_cap) = grown_capacity(self.cap) else {
            panic!("capacity overflow");
        };
        self.grow_with(Vec::with_capacity(new_cap), new_cap, value)
    }

    /// Like `insert`, but reports allocation failure instead of aborting
    ///
    /// On error the buffer is left untouched and `value` is dropped.
    pub fn try_insert(&mut self, value: T) -> Result<usize> {
        if self.buf.len() < self.cap {
            return Ok(self.insert_in_place(value));
        }

        let new_cap = grown_capacity(self.cap).ok_or(SortvecError::CapacityOverflow)?;
        let mut grown = Vec::new();
        grown.try_reserve_exact(new_cap)?;
        Ok(self.grow_with(grown, new_cap, value))
    }

    /// Position of an element equal to `value`, if any
    ///
    /// With duplicates present, any one of the equal positions may be
    /// returned.
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut front = 0;
        let mut back = self.buf.len();

        while front < back {
            let mid = front + (back - front) / 2;
            match self.buf[mid].borrow().cmp(value) {
                Ordering::Equal => return Some(mid),
                Ordering::Greater => back = mid,
                Ordering::Less => front = mid + 1,
            }
        }

        None
    }

    /// Whether an element equal to `value` is present
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Insertion-sort step: walk back over strictly greater elements
    fn insert_in_place(&mut self, value: T) -> usize {
        let mut position = self.buf.len();
        while position > 0 && self.buf[position - 1] > value {
            position -= 1;
        }
        // Within the reserved slots, so this only shifts the tail.
        self.buf.insert(position, value);
        position
    }

    /// Merge the current contents and `value` into `grown`, then adopt it
    ///
    /// All comparisons happen before `self` is modified.
    fn grow_with(&mut self, mut grown: Vec<T>, new_cap: usize, value: T) -> usize {
        let position = self.buf.partition_point(|elem| *elem <= value);

        let mut old = mem::take(&mut self.buf);
        grown.extend(old.drain(..position));
        grown.push(value);
        grown.append(&mut old);

        self.buf = grown;
        self.cap = new_cap;
        position
    }
}

fn grown_capacity(cap: usize) -> Option<usize> {
    cap.checked_mul(2).map(|doubled| doubled.max(1))
}

impl<T> Default for OrderedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedBuffer<T> {
    /// The copy owns exactly as many slots as the source has elements
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.buf.len());
        buf.extend_from_slice(&self.buf);
        Self {
            cap: buf.len(),
            buf,
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf.len() == other.buf.len() && self.buf.iter().eq(other.buf.iter())
    }
}

impl<T: Eq> Eq for OrderedBuffer<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.buf).finish()
    }
}

impl<T> Deref for OrderedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> AsRef<[T]> for OrderedBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.buf
    }
}

impl<T: Ord> FromIterator<T> for OrderedBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter)
    }
}

impl<T: Ord> From<Vec<T>> for OrderedBuffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_unsorted(values)
    }
}

impl<T: Ord> Extend<T> for OrderedBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for OrderedBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
