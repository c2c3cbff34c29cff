//! Buffer-level algorithms shared by the list operations.
//!
//! Everything in here works on physical slots through `CircularBuffer` and
//! knows nothing about the element type.

pub mod copy;
pub mod insert;
pub mod remove;

use crate::utils;

pub trait CircularBuffer {
    /// Physical number of slots.
    fn array_len(&self) -> usize;

    /// Number of logical elements.
    fn len(&self) -> usize;

    /// Physical slot of logical index 0.
    fn head(&self) -> usize;

    fn set_head(&mut self, head: usize);

    /// Moves a contiguous run of `len` slots from `src` to `dst`, leaving
    /// the source slots that are not overwritten vacant. The runs may
    /// overlap.
    fn copy(&mut self, dst: usize, src: usize, len: usize);

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        utils::wrap_add(index, addend, self.array_len())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        utils::wrap_sub(index, subtrahend, self.array_len())
    }

    /// Translates a logical index into its physical slot.
    #[inline]
    fn real_index(&self, index: usize) -> usize {
        debug_assert!(index < self.array_len());
        self.wrap_add(self.head(), index)
    }

    /// Moves a run of `len` slots that may cross the wrap point.
    #[inline]
    fn wrap_copy(&mut self, dst: usize, src: usize, len: usize) {
        copy::wrap_copy(self, dst, src, len)
    }
}
