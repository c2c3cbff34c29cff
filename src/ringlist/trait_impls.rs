use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::{IntoIter, Iter, IterMut, RingList};

impl<T> Clone for RingList<T>
    where T: Clone
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingList<T> {
    #[inline]
    fn default() -> Self {
        RingList::new()
    }
}

/// Takes over the elements of `elements`; the capacity equals their
/// number and the head sits on slot 0.
impl<T> From<Vec<T>> for RingList<T> {
    fn from(elements: Vec<T>) -> Self {
        let len = elements.len();
        let slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
        RingList {
            slots: slots.into_boxed_slice(),
            head: 0,
            len,
            modifications: 0,
        }
    }
}

impl<T> PartialEq for RingList<T>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T> PartialEq<&'a [T]> for RingList<T>
    where T: PartialEq
{
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<Vec<T>> for RingList<T>
    where T: PartialEq
{
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T> Eq for RingList<T> where T: Eq {}

impl<T> PartialOrd for RingList<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingList<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingList<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for RingList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(_) => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       self.len(),
                       index)
            }
        }
    }
}

impl<T> IndexMut<usize> for RingList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Ok(element) => element,
            Err(_) => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T> iter::FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the `RingList` with an iterator, appending at the back.
impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter.into_iter() {
            self.push_back(elt);
        }
    }
}

impl<T> fmt::Debug for RingList<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
