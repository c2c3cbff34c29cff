use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::Error;
use crate::logic::insert::open_slot;
use crate::logic::remove::close_slot;
use crate::logic::CircularBuffer;
use crate::utils;
use crate::RangeArgument;

mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{Drain, IntoIter, Iter, IterMut};

/// Capacity of a list created with `RingList::new`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list stored in a ring buffer.
///
/// Logical index `i` lives in physical slot `(head + i) % capacity`.
/// Inserting or removing at either end moves no other element, and an
/// insertion in the middle moves only one side of the insertion point.
///
/// The list counts its structural modifications (insertions and removals).
/// A [`Cursor`] snapshots that count and refuses to continue once it has
/// changed underneath it.
///
/// [`Cursor`]: struct.Cursor.html
pub struct RingList<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
    modifications: usize,
}

impl<T> CircularBuffer for RingList<T> {
    #[inline]
    fn array_len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.slots.len());
        self.head = head;
    }

    fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.slots.len(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.slots.len());
        debug_assert!(src + len <= self.slots.len(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.slots.len());
        if dst < src {
            for k in 0..len {
                self.slots[dst + k] = self.slots[src + k].take();
            }
        } else if dst > src {
            for k in (0..len).rev() {
                self.slots[dst + k] = self.slots[src + k].take();
            }
        }
    }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

impl<T> RingList<T> {
    /// Creates an empty `RingList` with room for `DEFAULT_CAPACITY` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<u32> = RingList::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `RingList` with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first insertion grows the buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        RingList {
            slots: vacant_slots(capacity),
            head: 0,
            len: 0,
            modifications: 0,
        }
    }

    #[inline]
    fn occupied(&self, real: usize) -> &T {
        match self.slots[real] {
            Some(ref element) => element,
            None => unreachable!("vacant slot {} inside the logical range", real),
        }
    }

    #[inline]
    fn occupied_mut(&mut self, real: usize) -> &mut T {
        match self.slots[real] {
            Some(ref mut element) => element,
            None => unreachable!("vacant slot {} inside the logical range", real),
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len: self.len })
        }
    }

    #[inline]
    fn bump_modifications(&mut self) {
        self.modifications = self.modifications.wrapping_add(1);
    }

    /// Reallocates and linearizes the storage when it is full, so that
    /// there is always a free slot to insert into afterwards.
    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() {
            return;
        }

        let old_capacity = self.slots.len();
        let new_capacity = utils::grown_capacity(old_capacity);

        let mut slots = Vec::with_capacity(new_capacity);
        {
            // Full buffer: `head..` followed by `..head` is the whole sequence.
            let (wrapped, front) = self.slots.split_at_mut(self.head);
            slots.extend(front.iter_mut().map(Option::take));
            slots.extend(wrapped.iter_mut().map(Option::take));
        }
        slots.resize_with(new_capacity, || None);

        self.slots = slots.into_boxed_slice();
        self.head = 0;

        trace!(old_capacity, new_capacity, len = self.len, "grew ring list storage");
    }

    fn insert_at(&mut self, index: usize, element: T) {
        self.ensure_capacity();
        let real = open_slot(self, index);
        self.slots[real] = Some(element);
        self.len += 1;
        self.bump_modifications();
    }

    fn remove_at(&mut self, index: usize) -> T {
        let real = self.real_index(index);
        let element = match self.slots[real].take() {
            Some(element) => element,
            None => unreachable!("vacant slot {} inside the logical range", real),
        };
        close_slot(self, index);
        self.len -= 1;
        self.bump_modifications();
        element
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the list can hold before it has to
    /// grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns how many structural modifications the list has gone
    /// through. Every successful insertion or removal increases it;
    /// `set` and other in-place writes do not.
    #[inline]
    pub fn modifications(&self) -> usize {
        self.modifications
    }

    /// Retrieves an element by logical index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, RingList};
    ///
    /// let list: RingList<_> = vec![3, 4, 5].into();
    /// assert_eq!(list.get(1), Ok(&4));
    /// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        Ok(self.occupied(self.real_index(index)))
    }

    /// Retrieves an element mutably by logical index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_index(index)?;
        let real = self.real_index(index);
        Ok(self.occupied_mut(real))
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Replacing is not a structural modification.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec!['a', 'b'].into();
    /// assert_eq!(list.set(1, 'z'), Ok('b'));
    /// assert_eq!(list, vec!['a', 'z']);
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, Error> {
        self.check_index(index)?;
        let real = self.real_index(index);
        Ok(mem::replace(self.occupied_mut(real), element))
    }

    /// Inserts `element` at `index`, moving the elements at `index..` one
    /// position up. `index == len()` appends.
    ///
    /// Fails without touching the list when `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![1, 3].into();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list, vec![1, 2, 3, 4]);
    /// assert!(list.insert(6, 6).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        self.insert_at(index, element);
        Ok(())
    }

    /// Removes and returns the element at `index`, moving the elements
    /// after it one position down.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![1, 2, 3].into();
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.get(1), Ok(&3));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;
        Ok(self.remove_at(index))
    }

    /// Appends an element to the back of the list.
    #[inline]
    pub fn push_back(&mut self, element: T) {
        let len = self.len;
        self.insert_at(len, element);
    }

    /// Prepends an element to the front of the list.
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.insert_at(0, element);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.len - 1;
        Some(self.remove_at(last))
    }

    /// Provides a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Provides a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1).ok()
    }

    /// Returns `true` if the list contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`.
    pub fn index_of(&self, x: &T) -> Option<usize>
        where T: PartialEq
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the index of the last element equal to `x`.
    pub fn last_index_of(&self, x: &T) -> Option<usize>
        where T: PartialEq
    {
        self.iter().rposition(|e| e == x)
    }

    /// The occupied slots in logical order, split at the wrap point.
    fn slot_runs(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let end = self.head + self.len;
        let array_len = self.slots.len();
        if end <= array_len {
            (&self.slots[self.head..end], &[])
        } else {
            let (wrapped, front) = self.slots.split_at(self.head);
            (front, &wrapped[..end - array_len])
        }
    }

    fn slot_runs_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        if self.len == 0 {
            return (&mut [], &mut []);
        }
        let end = self.head + self.len;
        let array_len = self.slots.len();
        if end <= array_len {
            (&mut self.slots[self.head..end], &mut [])
        } else {
            let (wrapped, front) = self.slots.split_at_mut(self.head);
            (front, &mut wrapped[..end - array_len])
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::with_capacity(3);
    /// list.push_back(5);
    /// list.push_back(3);
    /// list.push_front(4);
    /// let c: Vec<&i32> = list.iter().collect();
    /// assert_eq!(c, vec![&4, &5, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.slot_runs();
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.slot_runs_mut();
        IterMut::new(front, back)
    }

    /// Starts a versioned traversal at the front of the list.
    ///
    /// Unlike `iter`, the cursor does not borrow the list, so the list may
    /// be modified between steps; the next step then fails with
    /// `Error::ConcurrentModification` unless the modification went through
    /// the cursor itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, RingList};
    ///
    /// let mut list: RingList<_> = vec![1, 2, 3].into();
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(Some(&1)));
    ///
    /// list.insert(1, 9).unwrap();
    /// match cursor.next(&list) {
    ///     Err(Error::ConcurrentModification { .. }) => {}
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.modifications)
    }

    /// Creates a draining iterator that removes the specified range and
    /// yields the removed items in order.
    ///
    /// The list is one structural modification further along once the
    /// iterator is dropped, if the range was not empty. If the iterator is
    /// leaked the list keeps only the elements before the range.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![1, 2, 3].into();
    /// let drained: Vec<_> = list.drain(2..).collect();
    /// assert_eq!(drained, vec![3]);
    ///
    /// let drained: Vec<_> = list.drain(..).collect();
    /// assert_eq!(drained, vec![1, 2]);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
        where R: RangeArgument<usize>
    {
        let len = self.len;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Until the drain is dropped only the prefix counts as live.
        self.len = start;

        Drain::new(self, start, end, len)
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.drain(..);
    }
}
