use crate::list::{LinkedList, Link};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// A forward walk over the elements of a `LinkedList`, from the first data
/// node to the end of the chain.
///
/// Though the `Iter` does not hold a reference to the list, it actually
/// *borrows* (immutably) from it, so a phantom marker of `&'a LinkedList<T>`
/// keeps the list from being written while the walk is alive.
pub(crate) struct Iter<'a, T: 'a> {
    current: Link<T>,
    len: usize,
    _marker: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            current: list.first_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        // SAFETY: every node reachable from the sentinel is a live data node
        // owned by the list, which is borrowed for `'a`.
        let node = unsafe { &*node.as_ptr() };
        self.current = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn iter_walks_chain_order() {
        let list = LinkedList::from_sequence(vec!['a', 'b', 'c']);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&'a'));
        assert_eq!(iter.next(), Some(&'b'));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&'c'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_empty() {
        let list = LinkedList::<u8>::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().size_hint(), (0, Some(0)));
    }
}
