//! Versioned traversal over a `RingList`.

use tracing::debug;

use crate::error::Error;
use crate::ringlist::RingList;

/// A position in a `RingList` that does not borrow the list.
///
/// The cursor remembers the list's modification count from when it was
/// created (or last modified the list itself). Every step compares that
/// snapshot with the list's current count and fails with
/// `Error::ConcurrentModification` if they differ. Detection is lazy: the
/// mutation itself succeeds, the following step fails.
///
/// A cursor must only be used with the list that created it.
#[derive(Clone, Debug)]
pub struct Cursor {
    index: usize,
    last_returned: Option<usize>,
    expected: usize,
}

impl Cursor {
    pub(crate) fn new(expected: usize) -> Cursor {
        Cursor {
            index: 0,
            last_returned: None,
            expected,
        }
    }

    /// Logical index of the element the next call to `next` returns.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if `next` would yield an element.
    #[inline]
    pub fn has_next<T>(&self, list: &RingList<T>) -> bool {
        self.index < list.len()
    }

    fn check<T>(&self, list: &RingList<T>) -> Result<(), Error> {
        let found = list.modifications();
        if found == self.expected {
            return Ok(());
        }
        debug!(expected = self.expected, found, "list modified during traversal");
        Err(Error::ConcurrentModification {
            expected: self.expected,
            found,
        })
    }

    /// Advances the cursor, returning the element it passed over or
    /// `None` at the end of the list.
    pub fn next<'a, T>(&mut self, list: &'a RingList<T>) -> Result<Option<&'a T>, Error> {
        self.check(list)?;
        if self.index >= list.len() {
            return Ok(None);
        }
        let element = list.get(self.index)?;
        self.last_returned = Some(self.index);
        self.index += 1;
        Ok(Some(element))
    }

    /// Removes the element last returned by `next`.
    ///
    /// Returns `Ok(None)` if `next` has not returned an element since the
    /// cursor was created or last modified the list. The cursor stays
    /// usable afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = (1..6).collect();
    /// let mut cursor = list.cursor();
    /// while let Some(&n) = cursor.next(&list).unwrap() {
    ///     if n % 2 == 0 {
    ///         cursor.remove(&mut list).unwrap();
    ///     }
    /// }
    /// assert_eq!(list, vec![1, 3, 5]);
    /// ```
    pub fn remove<T>(&mut self, list: &mut RingList<T>) -> Result<Option<T>, Error> {
        self.check(list)?;
        let last = match self.last_returned.take() {
            Some(last) => last,
            None => return Ok(None),
        };
        let element = list.remove(last)?;
        self.index = last;
        self.expected = list.modifications();
        Ok(Some(element))
    }

    /// Inserts `element` at the cursor position, before the element the
    /// next call to `next` would return. The cursor moves past it.
    pub fn insert<T>(&mut self, list: &mut RingList<T>, element: T) -> Result<(), Error> {
        self.check(list)?;
        list.insert(self.index, element)?;
        self.index += 1;
        self.last_returned = None;
        self.expected = list.modifications();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traverses_in_logical_order() {
        let mut list = RingList::with_capacity(3);
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);

        let mut cursor = list.cursor();
        let mut seen = Vec::new();
        while let Some(&n) = cursor.next(&list).unwrap() {
            seen.push(n);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.next(&list), Ok(None));
    }

    #[test]
    fn insert_mid_traversal_is_detected() {
        let mut list: RingList<_> = vec![1, 2, 3].into();
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(&list), Ok(Some(&1)));

        list.insert(1, 9).unwrap();
        assert_eq!(
            cursor.next(&list),
            Err(Error::ConcurrentModification { expected: 0, found: 1 })
        );
        // Sticky until a new cursor is taken.
        assert!(cursor.next(&list).is_err());
        assert_eq!(cursor.remove(&mut list).unwrap_err(),
                   Error::ConcurrentModification { expected: 0, found: 1 });
    }

    #[test]
    fn remove_mid_traversal_is_detected() {
        let mut list: RingList<_> = vec![1, 2, 3].into();
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        list.pop_back();
        assert!(cursor.next(&list).is_err());
    }

    #[test]
    fn set_is_not_detected() {
        let mut list: RingList<_> = vec![1, 2, 3].into();
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        list.set(1, 20).unwrap();
        assert_eq!(cursor.next(&list), Ok(Some(&20)));
    }

    #[test]
    fn modifications_through_the_cursor_resync() {
        let mut list: RingList<_> = vec!['a', 'b', 'c'].into();
        let mut cursor = list.cursor();
        assert_eq!(cursor.remove(&mut list), Ok(None));

        cursor.next(&list).unwrap();
        assert_eq!(cursor.remove(&mut list), Ok(Some('a')));
        assert_eq!(cursor.remove(&mut list), Ok(None));
        assert_eq!(cursor.index(), 0);

        cursor.insert(&mut list, 'x').unwrap();
        assert_eq!(cursor.next(&list), Ok(Some(&'b')));
        cursor.insert(&mut list, 'y').unwrap();
        assert_eq!(cursor.next(&list), Ok(Some(&'c')));
        assert_eq!(cursor.next(&list), Ok(None));
        assert_eq!(list, vec!['x', 'b', 'y', 'c']);
    }
}
