use crate::list::LinkedList;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self.iter() {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.append(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_sequence(items)
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_sequence(items)
    }
}

impl<T> From<LinkedList<T>> for Vec<T> {
    fn from(list: LinkedList<T>) -> Self {
        list.into_vec()
    }
}

// SAFETY: the list owns its nodes exclusively, like a `Box<Node<T>>` chain.
unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::LinkedList;
    ///
    /// let list = LinkedList::from([0, 1, 2]);
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

// Ensure that `LinkedList` is covariant in its type parameter.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: LinkedList<&'static str>) -> LinkedList<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_and_ord() {
        let a = LinkedList::from_iter([1, 2, 3]);
        let b = LinkedList::from(vec![1, 2, 3]);
        let c = LinkedList::from([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(LinkedList::from([1, 2]) < a);
        assert_eq!(LinkedList::<i32>::new(), LinkedList::default());
    }

    #[test]
    fn list_clone_is_independent() {
        let mut list = LinkedList::from([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list.pop(), Ok(3));
        list.append(4);
        assert_eq!(cloned.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn list_hash() {
        let a = LinkedList::from([1, 2, 3]);
        let b = LinkedList::from([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_debug() {
        let mut list = LinkedList::new();
        assert_eq!(format!("{:?}", list), "[]");
        list.extend(&[1, 2]);
        list.extend(vec![3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn list_contains() {
        let list = LinkedList::from(["a", "b"]);
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));
        assert!(!LinkedList::<&str>::new().contains(&"a"));
    }

    #[test]
    fn list_into_vec() {
        let list = LinkedList::from_iter((0..4).map(|i| i * 2));
        assert_eq!(Vec::from(list), vec![0, 2, 4, 6]);
    }
}
