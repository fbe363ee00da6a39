use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::hash_table::Entry;
use crate::hash_table::HashTable;

/// A hash set implemented using the separate-chaining [`HashTable`] as the
/// underlying storage.
///
/// `HashSet<T, S>` stores values of type `T` where `T` implements
/// `Hash + Eq` and uses a configurable hasher builder `S` to hash values.
/// A value is in the set at most once; insertion of an already-present value
/// is a no-op.
///
/// Two sets compare equal when they contain the same values, regardless of
/// insertion order or bucket layout.
#[derive(Clone)]
pub struct HashSet<T, S = crate::DefaultHashBuilder> {
    table: HashTable<T>,
    hash_builder: S,
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug + Hash + Eq,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash set with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    ///
    /// use chain_hash::HashSet;
    ///
    /// let set: HashSet<i32, _> = HashSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates a new hash set with the specified capacity and hasher
    /// builder.
    ///
    /// The actual capacity may be larger than requested because the bucket
    /// count only takes doubled-plus-one values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    ///
    /// use chain_hash::HashSet;
    ///
    /// let set: HashSet<i32, _> = HashSet::with_capacity_and_hasher(100, RandomState::new());
    /// assert!(set.capacity() >= 100);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of elements the set can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the current number of buckets of the underlying table.
    ///
    /// Purely diagnostic; the bucket count only changes through growth and
    /// [`clear`].
    ///
    /// [`clear`]: HashSet::clear
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Borrows the underlying table.
    ///
    /// Useful for its `Debug` dump, which renders every bucket's chain.
    pub fn raw_table(&self) -> &HashTable<T> {
        &self.table
    }

    /// Removes all elements from the set and resets it to the minimum
    /// bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain this value, `true` is
    ///   returned.
    /// - If the set already contained this value, `false` is returned and
    ///   the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// assert_eq!(set.insert(37), true);
    /// assert_eq!(set.insert(37), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.hash_builder.hash_one(&value);
        match self.table.entry(hash, |candidate| candidate == &value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Returns `true` if the set contains a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |candidate| candidate == value).is_some()
    }

    /// Returns a reference to the value in the set, if any, that is equal
    /// to the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |candidate| candidate == value)
    }

    /// Removes a value from the set. Returns whether the value was present
    /// in the set.
    ///
    /// Removal never shrinks the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), true);
    /// assert_eq!(set.remove(&1), false);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let hash = self.hash_builder.hash_one(value);
        self.table.remove(hash, |candidate| candidate == value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to
    /// the given one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.remove(hash, |candidate| candidate == value)
    }

    /// Adds a value to the set, replacing the existing value, if any, that
    /// is equal to the given one. Returns the replaced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// assert_eq!(set.replace(1), Some(1));
    /// assert_eq!(set.replace(2), None);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        let hash = self.hash_builder.hash_one(&value);
        match self.table.entry(hash, |candidate| candidate == &value) {
            Entry::Occupied(mut entry) => Some(core::mem::replace(entry.get_mut(), value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns an iterator over the values of the set.
    ///
    /// Values are yielded in bucket order; within a bucket, most recently
    /// inserted first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// assert_eq!(set.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Removes all values from the set and returns an iterator over them.
    ///
    /// The set is emptied as soon as this method returns; unconsumed values
    /// are dropped with the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let values: Vec<_> = set.drain().collect();
    /// assert!(set.is_empty());
    /// assert_eq!(values.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<T> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.extend([1, 2, 3, 4]);
    ///
    /// set.retain(|&x| x % 2 == 0);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains(&2));
    /// assert!(set.contains(&4));
    /// ```
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.table.retain(f);
    }

    /// Returns `true` if the set contains no elements in common with
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([3, 4]);
    /// assert!(a.is_disjoint(&b));
    /// ```
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|v| !other.contains(v))
        } else {
            other.iter().all(|v| !self.contains(v))
        }
    }

    /// Returns `true` if the set is a subset of another, i.e., `other`
    /// contains at least all the elements in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([1, 2, 3]);
    /// assert!(a.is_subset(&b));
    /// ```
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }

    /// Returns `true` if the set is a superset of another, i.e., `self`
    /// contains at least all the elements in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2, 3]);
    /// let b: HashSet<i32> = HashSet::from([1, 2]);
    /// assert!(a.is_superset(&b));
    /// ```
    pub fn is_superset(&self, other: &HashSet<T, S>) -> bool {
        other.is_subset(self)
    }

    /// Returns an iterator over the union of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([2, 3]);
    ///
    /// let union: Vec<_> = a.union(&b).copied().collect();
    /// assert_eq!(union.len(), 3);
    /// ```
    pub fn union<'a>(&'a self, other: &'a HashSet<T, S>) -> Union<'a, T, S> {
        Union {
            iter: self.iter(),
            rest: other.iter(),
            first: self,
        }
    }

    /// Returns an iterator over the intersection of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([2, 3]);
    ///
    /// let intersection: Vec<_> = a.intersection(&b).copied().collect();
    /// assert_eq!(intersection, [2]);
    /// ```
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, S>) -> Intersection<'a, T, S> {
        if self.len() <= other.len() {
            Intersection {
                iter: self.iter(),
                other,
            }
        } else {
            Intersection {
                iter: other.iter(),
                other: self,
            }
        }
    }

    /// Returns an iterator over the difference of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([2, 3]);
    ///
    /// let difference: Vec<_> = a.difference(&b).copied().collect();
    /// assert_eq!(difference, [1]);
    /// ```
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, S>) -> Difference<'a, T, S> {
        Difference {
            iter: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the symmetric difference of `self` and
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let a: HashSet<i32> = HashSet::from([1, 2]);
    /// let b: HashSet<i32> = HashSet::from([2, 3]);
    ///
    /// let sym_diff: Vec<_> = a.symmetric_difference(&b).copied().collect();
    /// assert_eq!(sym_diff.len(), 2);
    /// ```
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashSet<T, S>,
    ) -> SymmetricDifference<'a, T, S> {
        SymmetricDifference {
            iter: self.difference(other).chain(other.difference(self)),
        }
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates a new hash set using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new hash set with the specified capacity using the default
    /// hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the values of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A draining iterator over the values of a `HashSet`.
pub struct Drain<T> {
    inner: crate::hash_table::Drain<T>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A consuming iterator over the values of a `HashSet`.
pub struct IntoIter<T> {
    inner: crate::hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T, S> IntoIterator for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T, S, const N: usize> From<[T; N]> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// An iterator over the union of two sets.
pub struct Union<'a, T, S> {
    iter: Iter<'a, T>,
    rest: Iter<'a, T>,
    first: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Union<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.iter.next() {
            return Some(v);
        }
        loop {
            let v = self.rest.next()?;
            if !self.first.contains(v) {
                return Some(v);
            }
        }
    }
}

/// An iterator over the intersection of two sets.
pub struct Intersection<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Intersection<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.iter.next()?;
            if self.other.contains(v) {
                return Some(v);
            }
        }
    }
}

/// An iterator over the difference of two sets.
pub struct Difference<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Difference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.iter.next()?;
            if !self.other.contains(v) {
                return Some(v);
            }
        }
    }
}

/// An iterator over the symmetric difference of two sets.
pub struct SymmetricDifference<'a, T, S> {
    iter: core::iter::Chain<Difference<'a, T, S>, Difference<'a, T, S>>,
}

impl<'a, T, S> Iterator for SymmetricDifference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}
