use std::convert::TryFrom;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

use crate::list::iterator::Iter;
use crate::ListError;

pub mod error;
pub(crate) mod iterator;

mod algorithms;

/// The `LinkedList` is a singly-linked list with owned nodes, anchored by a
/// permanent sentinel node and shortcut by a tail pointer.
/// Appending and prepending take constant time. In compromise, accessing,
/// inserting or removing elements at any other position take *O*(*n*) time.
///
/// The `LinkedList` contains:
/// - a pointer `sentinel` to the head node, which never holds an element;
/// - a non-owning pointer `tail` to the last node of the chain (the sentinel
///   itself when the list is empty);
/// - a length field `len` counting the data nodes.
///
/// # Positions
///
/// Every positional operation takes a signed position and resolves it with
/// wraparound: in a list of length *n*, the walk from the sentinel is
/// `(n + pos) % n + 1` links long, so `0` is the first element, `-1` the last
/// one, and `-n` the first one again. A walk of zero links lands on the
/// sentinel; a negative walk, or any position in an empty list, resolves to
/// nothing.
pub struct LinkedList<T> {
    sentinel: NonNull<Node<T>>,
    tail: NonNull<Node<T>>,
    /// the number of data nodes
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A node of the chain. Each node owns its successor.
///
/// `#[repr(C)]` keeps `Node<T>` and `Node<MaybeUninit<T>>` layout-compatible,
/// which is how the sentinel is allocated.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> LinkedList<T> {
    pub(crate) fn first_node(&self) -> Link<T> {
        // SAFETY: the sentinel lives as long as the list, and only its link
        // is read.
        unsafe { (*self.sentinel.as_ptr()).next }
    }

    /// Computes how many links separate the sentinel from the node at `pos`.
    ///
    /// Returns `None` for an empty list, for a negative walk, or when
    /// `len + pos` overflows.
    fn walk_len(&self, pos: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = isize::try_from(self.len).ok()?;
        let steps = len.checked_add(pos)? % len + 1;
        usize::try_from(steps).ok()
    }

    /// Follows `steps` links from the sentinel. Zero steps is the sentinel.
    fn walk(&self, steps: usize) -> Link<T> {
        let mut node = self.sentinel;
        for _ in 0..steps {
            // SAFETY: `node` is either the sentinel or a live data node.
            node = unsafe { (*node.as_ptr()).next }?;
        }
        Some(node)
    }

    /// Resolves a position to a node of the chain, possibly the sentinel.
    pub(crate) fn node_at(&self, pos: isize) -> Link<T> {
        self.walk(self.walk_len(pos)?)
    }

    /// Like [`LinkedList::node_at`], but rejects the sentinel.
    fn data_node_at(&self, pos: isize) -> Result<NonNull<Node<T>>, ListError> {
        match self.node_at(pos) {
            Some(node) if node != self.sentinel => Ok(node),
            _ => Err(self.out_of_range(pos)),
        }
    }

    fn out_of_range(&self, pos: isize) -> ListError {
        #[cfg(feature = "tracing")]
        tracing::trace!(pos, len = self.len, "position does not resolve to an element");
        ListError::IndexOutOfRange { pos, len: self.len }
    }

    fn check_remove_ability(&self) -> Result<(), ListError> {
        if self.len == 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!("cannot remove element from empty list");
            return Err(ListError::EmptyCollection);
        }
        Ok(())
    }

    /// Splice a new node holding `element` right after `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    unsafe fn attach_after(&mut self, prev: NonNull<Node<T>>, element: T) {
        let node = Node::new_detached(element, (*prev.as_ptr()).next);
        (*prev.as_ptr()).next = Some(node);
        if prev == self.tail {
            self.tail = node;
        }
        self.len += 1;
    }

    /// Detach the successor of `prev` from the list, and return it as a box,
    /// or `None` if `prev` is the last node.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    unsafe fn detach_after(&mut self, prev: NonNull<Node<T>>) -> Option<Box<Node<T>>> {
        let node = (*prev.as_ptr()).next?;
        (*prev.as_ptr()).next = (*node.as_ptr()).next;
        if node == self.tail {
            self.tail = prev;
        }
        self.len -= 1;
        Some(Box::from_raw(node.as_ptr()))
    }

    fn detach_first(&mut self) -> Option<Box<Node<T>>> {
        // SAFETY: the sentinel always belongs to the list.
        unsafe { self.detach_after(self.sentinel) }
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> LinkedList<T> {
    /// Create an empty `LinkedList`.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::LinkedList;
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let sentinel = new_sentinel();
        Self {
            sentinel,
            tail: sentinel,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a `LinkedList` holding the items of `items`, in order.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let list = LinkedList::from_sequence(vec![10, 20, 30]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(items);
        list
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides a reference to the first element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the first node, if any, is a data node borrowed with `self`.
        self.first_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty list has a data node as its tail.
        Some(unsafe { &(*self.tail.as_ptr()).element })
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn append(&mut self, element: T) {
        // SAFETY: the tail always belongs to the list.
        unsafe { self.attach_after(self.tail, element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.prepend(2);
    /// list.prepend(1);
    /// list.append(3);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn prepend(&mut self, element: T) {
        // SAFETY: the sentinel always belongs to the list.
        unsafe { self.attach_after(self.sentinel, element) }
    }

    /// Inserts an element right after the node that `pos - 1` resolves to.
    ///
    /// In a list of length *n*, `insert(k, x)` with `1 <= k <= n` places `x`
    /// at index `k`. Following the wraparound rule, `insert(0, x)` lands after
    /// the last element, and `insert(-1, x)` right before the last element.
    /// When *n* >= 2, `insert(-n, x)` places `x` at the front; in a
    /// single-element list every position resolves to that element, so `x` is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `pos - 1` does not resolve,
    /// which is always the case in an empty list. `element` is dropped and
    /// the list is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::from_sequence(vec![1, 2, 3]);
    ///
    /// list.insert(1, 4).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 4, 2, 3]);
    ///
    /// list.insert(-4, 5).unwrap();
    /// assert_eq!(list.to_vec(), vec![5, 1, 4, 2, 3]);
    ///
    /// assert!(LinkedList::new().insert(0, 6).is_err());
    /// ```
    pub fn insert(&mut self, pos: isize, element: T) -> Result<(), ListError> {
        let prev = pos
            .checked_sub(1)
            .and_then(|prev_pos| self.node_at(prev_pos))
            .ok_or_else(|| self.out_of_range(pos))?;
        // SAFETY: `prev` was resolved from the list.
        unsafe { self.attach_after(prev, element) };
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since the node before
    /// the tail has to be found by walking the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::from_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.pop(), Ok(3));
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    ///
    /// let mut empty = LinkedList::<i32>::new();
    /// assert_eq!(empty.pop(), Err(ListError::EmptyCollection));
    /// ```
    pub fn pop(&mut self) -> Result<T, ListError> {
        self.check_remove_ability()?;
        // The node before the tail is `len - 1` links away from the sentinel.
        let prev = self.walk(self.len - 1);
        // SAFETY: `prev` was walked to from the sentinel.
        let node = prev.and_then(|prev| unsafe { self.detach_after(prev) });
        node.map(Node::into_element)
            .ok_or(ListError::EmptyCollection)
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::from_sequence(vec![1, 2]);
    /// assert_eq!(list.pop_left(), Ok(1));
    /// assert_eq!(list.pop_left(), Ok(2));
    /// assert!(list.pop_left().is_err());
    /// ```
    pub fn pop_left(&mut self) -> Result<T, ListError> {
        self.check_remove_ability()?;
        self.detach_first()
            .map(Node::into_element)
            .ok_or(ListError::EmptyCollection)
    }

    /// Provides a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `pos` does not resolve to an
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let list = LinkedList::from_sequence(vec!['a', 'b', 'c']);
    /// assert_eq!(list.at(0), Ok(&'a'));
    /// assert_eq!(list.at(-1), Ok(&'c'));
    /// assert_eq!(list.at(-3), Ok(&'a'));
    /// assert_eq!(list.at(4), Ok(&'b'));
    /// assert!(list.at(-4).is_err());
    /// ```
    pub fn at(&self, pos: isize) -> Result<&T, ListError> {
        let node = self.data_node_at(pos)?;
        // SAFETY: `node` is a data node borrowed with `self`.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `pos` does not resolve to an
    /// element.
    pub fn at_mut(&mut self, pos: isize) -> Result<&mut T, ListError> {
        let node = self.data_node_at(pos)?;
        // SAFETY: `node` is a data node mutably borrowed with `self`.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Removes the element right after the node that `pos - 1` resolves to,
    /// and returns it.
    ///
    /// When `pos - 1` resolves to the last element, which has no successor,
    /// the first element is removed instead.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollection`] if the list is empty, and
    /// [`ListError::IndexOutOfRange`] if `pos - 1` does not resolve.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::from_sequence(vec![10, 20, 30, 40]);
    /// assert_eq!(list.remove_at(1), Ok(20));
    /// assert_eq!(list.remove_at(-1), Ok(40));
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    /// ```
    pub fn remove_at(&mut self, pos: isize) -> Result<T, ListError> {
        self.check_remove_ability()?;
        let prev = pos
            .checked_sub(1)
            .and_then(|prev_pos| self.node_at(prev_pos))
            .ok_or_else(|| self.out_of_range(pos))?;
        let prev = if prev == self.tail { self.sentinel } else { prev };
        // SAFETY: `prev` was resolved from the list.
        match unsafe { self.detach_after(prev) } {
            Some(node) => Ok(node.into_element()),
            None => Err(self.out_of_range(pos)),
        }
    }

    /// Replaces the element at `pos` with `element`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `pos` does not resolve to an
    /// element; `element` is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let mut list = LinkedList::from_sequence(vec![10, 30]);
    /// assert_eq!(list.update_at(0, 99), Ok(10));
    /// assert_eq!(list.to_vec(), vec![99, 30]);
    /// ```
    pub fn update_at(&mut self, pos: isize, element: T) -> Result<T, ListError> {
        Ok(mem::replace(self.at_mut(pos)?, element))
    }

    /// Copies the elements into a new `Vec`, in list order.
    ///
    /// The returned vector is a snapshot: later changes to the list are not
    /// reflected in it.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a new `Vec`, in list order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len);
        while let Some(node) = self.detach_first() {
            elements.push(node.into_element());
        }
        elements
    }

    /// Removes all elements from the list, in list order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while let Some(node) = self.detach_first() {
            drop(node);
        }
    }
}

impl<T> Node<T> {
    /// Create a node on the heap and hand its ownership to the caller as a
    /// pointer.
    fn new_detached(element: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, element })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Allocate a sentinel whose payload is never initialised.
fn new_sentinel<T>() -> NonNull<Node<T>> {
    let sentinel: Box<Node<MaybeUninit<T>>> = Box::new(Node {
        next: None,
        element: MaybeUninit::uninit(),
    });
    NonNull::from(Box::leak(sentinel)).cast()
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the sentinel was leaked from a `Box<Node<MaybeUninit<T>>>`
        // and its payload was never written, so only the allocation is freed.
        unsafe {
            drop(Box::from_raw(
                self.sentinel.cast::<Node<MaybeUninit<T>>>().as_ptr(),
            ));
        }
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::{LinkedList, ListError};
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Append(u8),
        Prepend(u8),
        Insert(isize, u8),
        Pop,
        PopLeft,
        RemoveAt(isize),
        UpdateAt(isize, u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<u8>().prop_map(Op::Append),
            2 => any::<u8>().prop_map(Op::Prepend),
            2 => (-12isize..12, any::<u8>()).prop_map(|(pos, x)| Op::Insert(pos, x)),
            1 => Just(Op::Pop),
            1 => Just(Op::PopLeft),
            1 => (-12isize..12).prop_map(Op::RemoveAt),
            1 => (-12isize..12, any::<u8>()).prop_map(|(pos, x)| Op::UpdateAt(pos, x)),
        ]
    }

    /// Links from the sentinel to `pos`, computed on plain integers.
    fn steps(len: usize, pos: isize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as isize;
        let steps = (len + pos) % len + 1;
        if steps < 0 {
            None
        } else {
            Some(steps as usize)
        }
    }

    fn out_of_range(model: &[u8], pos: isize) -> ListError {
        ListError::IndexOutOfRange {
            pos,
            len: model.len(),
        }
    }

    fn apply(list: &mut LinkedList<u8>, model: &mut Vec<u8>, op: &Op) {
        match *op {
            Op::Append(x) => {
                list.append(x);
                model.push(x);
            }
            Op::Prepend(x) => {
                list.prepend(x);
                model.insert(0, x);
            }
            Op::Insert(pos, x) => {
                let expected = match steps(model.len(), pos - 1) {
                    Some(at) => {
                        model.insert(at, x);
                        Ok(())
                    }
                    None => Err(out_of_range(model, pos)),
                };
                assert_eq!(list.insert(pos, x), expected);
            }
            Op::Pop => {
                assert_eq!(list.pop(), model.pop().ok_or(ListError::EmptyCollection));
            }
            Op::PopLeft => {
                let expected = if model.is_empty() {
                    Err(ListError::EmptyCollection)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(list.pop_left(), expected);
            }
            Op::RemoveAt(pos) => {
                // The successor of the node `pos - 1` resolves to; the last
                // node has none, so the first element goes instead.
                let expected = match steps(model.len(), pos - 1) {
                    _ if model.is_empty() => Err(ListError::EmptyCollection),
                    Some(at) if at == model.len() => Ok(model.remove(0)),
                    Some(at) => Ok(model.remove(at)),
                    None => Err(out_of_range(model, pos)),
                };
                assert_eq!(list.remove_at(pos), expected);
            }
            Op::UpdateAt(pos, x) => {
                let expected = match steps(model.len(), pos) {
                    Some(at) if at > 0 => Ok(std::mem::replace(&mut model[at - 1], x)),
                    _ => Err(out_of_range(model, pos)),
                };
                assert_eq!(list.update_at(pos, x), expected);
            }
        }
    }

    proptest! {
        #[test]
        fn appends_keep_order(items in proptest::collection::vec(any::<i32>(), 0..64)) {
            let mut list = LinkedList::new();
            for &item in &items {
                list.append(item);
            }
            prop_assert_eq!(list.len(), items.len());
            prop_assert_eq!(list.to_vec(), items);
        }

        #[test]
        fn round_trip(items in proptest::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(LinkedList::from_sequence(items.clone()).to_vec(), items);
        }

        #[test]
        fn negative_positions(items in proptest::collection::vec(any::<i32>(), 1..32)) {
            let list = LinkedList::from_sequence(items.clone());
            let n = items.len() as isize;
            prop_assert_eq!(list.at(-1), Ok(&items[items.len() - 1]));
            prop_assert_eq!(list.at(-n), Ok(&items[0]));
        }

        #[test]
        fn matches_vec_model(ops in proptest::collection::vec(op(), 0..128)) {
            let mut list = LinkedList::new();
            let mut model = Vec::new();
            for op in &ops {
                apply(&mut list, &mut model, op);
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.back(), model.last());
                prop_assert_eq!(list.front(), model.first());
            }
            prop_assert_eq!(list.to_vec(), model);
        }
    }
}
