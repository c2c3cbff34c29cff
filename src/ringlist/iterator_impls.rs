use core::slice;

use super::RingList;
use crate::logic::CircularBuffer;

/// `RingList` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(front: &'a [Option<T>], back: &'a [Option<T>]) -> Self {
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let back = &mut self.back;
        self.front.next().or_else(|| back.next()).and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        let front = &mut self.front;
        self.back.next_back().or_else(|| front.next_back()).and_then(Option::as_ref)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// `RingList` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>]) -> Self {
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let back = &mut self.back;
        self.front.next().or_else(|| back.next()).and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let front = &mut self.front;
        self.back.next_back().or_else(|| front.next_back()).and_then(Option::as_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// By-value `RingList` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: RingList<T>) -> Self {
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Draining `RingList` iterator
pub struct Drain<'a, T: 'a> {
    list: &'a mut RingList<T>,
    // Logical bounds of what is left to yield.
    next: usize,
    end: usize,
    drain_start: usize,
    drain_end: usize,
    orig_len: usize,
}

impl<'a, T> Drain<'a, T> {
    pub(super) fn new(list: &'a mut RingList<T>, start: usize, end: usize, orig_len: usize) -> Self {
        Drain {
            list,
            next: start,
            end,
            drain_start: start,
            drain_end: end,
            orig_len,
        }
    }

    fn take(&mut self, index: usize) -> Option<T> {
        let real = self.list.wrap_add(self.list.head, index);
        self.list.slots[real].take()
    }
}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        //        H   s   e   H+len
        // [. . . o o x x o o . . .]
        //
        // `before` elements precede the hole, `after` follow it; the
        // shorter side moves.
        let before = self.drain_start;
        let after = self.orig_len - self.drain_end;
        let drained = self.drain_end - self.drain_start;
        let list = &mut *self.list;

        match (before, after) {
            (0, 0) => list.head = 0,
            (_, 0) => {}
            (0, _) => {
                let new_head = list.wrap_add(list.head, drained);
                list.set_head(new_head);
            }
            _ if before <= after => {
                let head = list.head;
                let new_head = list.wrap_add(head, drained);
                list.wrap_copy(new_head, head, before);
                list.set_head(new_head);
            }
            _ => {
                let dst = list.wrap_add(list.head, self.drain_start);
                let src = list.wrap_add(list.head, self.drain_end);
                list.wrap_copy(dst, src, after);
            }
        }

        list.len = self.orig_len - drained;
        if drained > 0 {
            list.bump_modifications();
        }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        self.take(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        let index = self.end;
        self.take(index)
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}
