//! A [`DVector`] is a double-ended vector whose elements always sit in one contiguous run inside a
//! single allocation. Pushes at either end are amortized *O*(1): when one side runs out of room the
//! block grows fourfold and the live range is re-centered, keeping slack on both sides.

use crate::raw::{RawBlock, DEFAULT_CAPACITY};
use crate::{DVectorError, Global, SlotAllocator};
use std::fmt::{self, Debug, Display};
use std::ops::{Deref, DerefMut};

/// A double-ended vector with amortized constant-time pushes and pops at both ends.
///
/// The live elements occupy the slots strictly between two cursors, `left` and `right`, inside a
/// block of `capacity` slots. A fresh vector starts with its cursors in the middle of the block.
/// Pushing to an exhausted side multiplies the capacity by [`GROWTH_FACTOR`](crate::GROWTH_FACTOR)
/// and moves the live range into the new block.
///
/// # Examples
/// ```
/// use dvector::DVector;
/// let mut dvector = DVector::new();
/// dvector.push_back(2);
/// dvector.push_front(1);
/// dvector.push_back(3);
/// assert_eq!(&*dvector, &[1, 2, 3]);
/// assert_eq!(dvector.capacity(), 10);
/// ```
///
/// # Checked and unchecked access
/// [`at`](DVector::at) reports an out-of-range index as a [`DVectorError`]. The slice methods
/// reached through [`Deref`] include `get_unchecked`, and [`front_unchecked`](DVector::front_unchecked),
/// [`back_unchecked`](DVector::back_unchecked), [`pop_front_unchecked`](DVector::pop_front_unchecked)
/// and [`pop_back_unchecked`](DVector::pop_back_unchecked) skip the emptiness check entirely.
///
/// # Moved-from state
/// [`take`](DVector::take) and [`move_from`](DVector::move_from) leave the source as an empty
/// shell with zero capacity. A shell is still a valid vector: it reports itself as empty, and the
/// next push allocates a fresh block of the default capacity.
pub struct DVector<T, A = Global>
where
    A: SlotAllocator,
{
    raw: RawBlock<T, A>,
}

/// A snapshot of where the live range sits inside the block, returned by [`DVector::layout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockLayout {
    /// Total slots in the block, including the unused slot 0.
    pub capacity: usize,
    /// Number of live elements.
    pub size: usize,
    /// Exclusive lower bound of the live range.
    pub left: usize,
    /// Exclusive upper bound of the live range.
    pub right: usize,
}

impl Display for BlockLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ capacity = {}, size = {} ] [ left: {}, right: {} ]",
            self.capacity, self.size, self.left, self.right
        )
    }
}

impl<T: Debug, A: SlotAllocator> Debug for DVector<T, A> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T> DVector<T> {
    /// Creates an empty `DVector` with the default capacity of 10 slots.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let dvector: DVector<i32> = DVector::new();
    /// assert!(dvector.is_empty());
    /// assert_eq!(dvector.capacity(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty `DVector` with a block of exactly `capacity` slots.
    /// A capacity of zero falls back to the default of 10.
    ///
    /// # Panics
    /// Panics if the block size exceeds [`isize::MAX`] bytes.
    /// Aborts through [`handle_alloc_error`](std::alloc::handle_alloc_error) if the allocation fails.
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let dvector: DVector<i32> = DVector::with_capacity(100);
    /// assert_eq!(dvector.capacity(), 100);
    /// assert_eq!(DVector::<i32>::with_capacity(0).capacity(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Like [`with_capacity`](DVector::with_capacity), but reports allocation failure.
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DVectorError> {
        Self::try_with_capacity_in(capacity, Global)
    }
}

impl<T, A: SlotAllocator> DVector<T, A> {
    /// Creates an empty `DVector` with the default capacity, drawing memory from `alloc`.
    #[inline]
    #[must_use]
    pub fn new_in(alloc: A) -> Self {
        Self::with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Creates an empty `DVector` of `capacity` slots (zero means the default), drawing memory
    /// from `alloc`.
    #[inline]
    #[must_use]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(dvector) => dvector,
            Err(e) => e.raise(),
        }
    }

    #[inline]
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, DVectorError> {
        Ok(DVector {
            raw: RawBlock::try_new_in(capacity, alloc)?,
        })
    }

    /// Returns the allocator backing this `DVector`.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.raw.allocator()
    }

    /// Pushes an element to the back and returns a reference to it.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([42, 10]);
    /// *dvector.push_back(100) += 1;
    /// assert_eq!(dvector.back(), Some(&101));
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        if self.raw.back_exhausted() {
            self.grow();
        }
        unsafe { self.raw.write_back(value) }
    }

    /// Pushes an element to the front and returns a reference to it.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([42, 10]);
    /// dvector.push_front(100);
    /// assert_eq!(&*dvector, &[100, 42, 10]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, value: T) -> &mut T {
        if self.raw.front_exhausted() {
            self.grow();
        }
        unsafe { self.raw.write_front(value) }
    }

    /// Pushes an element to the back, reporting allocation failure instead of aborting.
    /// On failure the `DVector` is left unchanged and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::new();
    /// assert_eq!(dvector.try_push_back(7).map(|v| *v), Ok(7));
    /// ```
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, DVectorError> {
        if self.raw.back_exhausted() {
            self.raw.try_grow()?;
        }
        Ok(unsafe { self.raw.write_back(value) })
    }

    /// Pushes an element to the front, reporting allocation failure instead of aborting.
    /// On failure the `DVector` is left unchanged and `value` is dropped.
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<&mut T, DVectorError> {
        if self.raw.front_exhausted() {
            self.raw.try_grow()?;
        }
        Ok(unsafe { self.raw.write_front(value) })
    }

    /// Makes room at the back, then constructs the new element in place from `make`.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector: DVector<String> = DVector::new();
    /// dvector.emplace_back(|| "x".repeat(3));
    /// assert_eq!(dvector[0], "xxx");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `make` panics. No element is added in that case, but the block may already
    /// have grown to make room for it.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.raw.back_exhausted() {
            self.grow();
        }
        unsafe { self.raw.write_back(make()) }
    }

    /// Makes room at the front, then constructs the new element in place from `make`.
    ///
    /// # Panics
    ///
    /// Panics if `make` panics. No element is added in that case, but the block may already
    /// have grown to make room for it.
    #[inline]
    pub fn emplace_front<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.raw.front_exhausted() {
            self.grow();
        }
        unsafe { self.raw.write_front(make()) }
    }

    /// Like [`emplace_back`](DVector::emplace_back), but reports allocation failure.
    /// `make` is only called once room is secured, so if it panics the block may already have
    /// grown even though no element was added.
    #[inline]
    pub fn try_emplace_back<F>(&mut self, make: F) -> Result<&mut T, DVectorError>
    where
        F: FnOnce() -> T,
    {
        if self.raw.back_exhausted() {
            self.raw.try_grow()?;
        }
        Ok(unsafe { self.raw.write_back(make()) })
    }

    /// Like [`emplace_front`](DVector::emplace_front), but reports allocation failure.
    /// `make` is only called once room is secured, so if it panics the block may already have
    /// grown even though no element was added.
    #[inline]
    pub fn try_emplace_front<F>(&mut self, make: F) -> Result<&mut T, DVectorError>
    where
        F: FnOnce() -> T,
    {
        if self.raw.front_exhausted() {
            self.raw.try_grow()?;
        }
        Ok(unsafe { self.raw.write_front(make()) })
    }

    /// Removes the last element and returns it, or `None` if the `DVector` is empty.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([42, 10]);
    /// assert_eq!(dvector.pop_back(), Some(10));
    /// assert_eq!(dvector.pop_back(), Some(42));
    /// assert_eq!(dvector.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.raw.read_back() })
        }
    }

    /// Removes the first element and returns it, or `None` if the `DVector` is empty.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([42, 10]);
    /// assert_eq!(dvector.pop_front(), Some(42));
    /// assert_eq!(dvector.pop_front(), Some(10));
    /// assert_eq!(dvector.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.raw.read_front() })
        }
    }

    /// Removes the last element without checking that there is one.
    ///
    /// # Safety
    /// The `DVector` must not be empty.
    #[inline]
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        self.raw.read_back()
    }

    /// Removes the first element without checking that there is one.
    ///
    /// # Safety
    /// The `DVector` must not be empty.
    #[inline]
    pub unsafe fn pop_front_unchecked(&mut self) -> T {
        self.raw.read_front()
    }

    /// Returns a reference to the element at `index`, or [`DVectorError::OutOfRange`] carrying
    /// the index if it is not below [`len`](DVector::len).
    ///
    /// # Examples
    /// ```
    /// # use dvector::{DVector, DVectorError};
    /// let dvector = DVector::from([1, 2, 3]);
    /// assert_eq!(dvector.at(2), Ok(&3));
    /// assert_eq!(dvector.at(3), Err(DVectorError::OutOfRange { index: 3, size: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, DVectorError> {
        let size = self.len();
        self.as_slice()
            .get(index)
            .ok_or(DVectorError::OutOfRange { index, size })
    }

    /// Mutable counterpart of [`at`](DVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DVectorError> {
        let size = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DVectorError::OutOfRange { index, size })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns the first element without checking that there is one.
    ///
    /// # Safety
    /// The `DVector` must not be empty.
    #[inline]
    pub unsafe fn front_unchecked(&self) -> &T {
        &*self.raw.live_ptr()
    }

    /// Returns the last element without checking that there is one.
    ///
    /// # Safety
    /// The `DVector` must not be empty.
    #[inline]
    pub unsafe fn back_unchecked(&self) -> &T {
        &*self.raw.live_ptr().add(self.len() - 1)
    }

    /// Returns the number of elements in the `DVector`.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the `DVector` holds no elements, including when it is a moved-from shell.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut v = DVector::new();
    /// assert!(v.is_empty());
    ///
    /// v.push_back(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_shell() || self.raw.right() - self.raw.left() == 1
    }

    /// Returns the total number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of slots in front of the live range, `left + 1`.
    ///
    /// `front_capacity() + back_capacity() + len() == capacity()` always holds.
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::new();
    /// dvector.push_front(1);
    /// assert_eq!(dvector.front_capacity(), 4);
    /// assert_eq!(dvector.back_capacity(), 5);
    /// ```
    #[inline]
    pub fn front_capacity(&self) -> usize {
        self.raw.front_capacity()
    }

    /// Returns the number of free slots behind the live range, `capacity - right`.
    #[inline]
    pub fn back_capacity(&self) -> usize {
        self.raw.back_capacity()
    }

    /// Returns where the live range sits inside the block.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::new();
    /// dvector.push_back('a');
    /// assert_eq!(
    ///     dvector.layout().to_string(),
    ///     "[ capacity = 10, size = 1 ] [ left: 4, right: 6 ]"
    /// );
    /// ```
    #[inline]
    pub fn layout(&self) -> BlockLayout {
        BlockLayout {
            capacity: self.raw.capacity(),
            size: self.raw.len(),
            left: self.raw.left(),
            right: self.raw.right(),
        }
    }

    /// Drops every element and moves the cursors back to the middle of the block.
    /// The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector: DVector<i32> = (0..30).collect();
    /// let capacity = dvector.capacity();
    /// dvector.clear();
    /// assert!(dvector.is_empty());
    /// assert_eq!(dvector.capacity(), capacity);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Forces one growth step: the capacity is multiplied by
    /// [`GROWTH_FACTOR`](crate::GROWTH_FACTOR) and the live range is re-centered.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([1, 2]);
    /// let before = dvector.capacity();
    /// dvector.grow();
    /// assert_eq!(dvector.capacity(), before * 4);
    /// assert_eq!(&*dvector, &[1, 2]);
    /// ```
    #[inline]
    pub fn grow(&mut self) {
        if let Err(e) = self.raw.try_grow() {
            e.raise()
        }
    }

    #[inline]
    pub fn try_grow(&mut self) -> Result<(), DVectorError> {
        self.raw.try_grow()
    }

    /// Grows until at least `additional` more elements can be pushed to the back without
    /// reallocating.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector: DVector<u8> = DVector::new();
    /// dvector.reserve_back(12);
    /// assert!(dvector.back_capacity() >= 12);
    /// ```
    #[inline]
    pub fn reserve_back(&mut self, additional: usize) {
        if let Err(e) = self.try_reserve_back(additional) {
            e.raise()
        }
    }

    /// Grows until at least `additional` more elements can be pushed to the front without
    /// reallocating.
    #[inline]
    pub fn reserve_front(&mut self, additional: usize) {
        if let Err(e) = self.try_reserve_front(additional) {
            e.raise()
        }
    }

    /// Like [`reserve_back`](DVector::reserve_back), but reports failure. The block is
    /// reallocated at most once; on error the vector is unchanged.
    pub fn try_reserve_back(&mut self, additional: usize) -> Result<(), DVectorError> {
        self.raw
            .try_grow_until(|capacity, _, right| capacity - right >= additional)
    }

    /// Like [`reserve_front`](DVector::reserve_front), but reports failure. The block is
    /// reallocated at most once; on error the vector is unchanged.
    pub fn try_reserve_front(&mut self, additional: usize) -> Result<(), DVectorError> {
        // slot 0 is never written, so `left` is the number of front pushes that fit
        self.raw.try_grow_until(|_, left, _| left >= additional)
    }

    /// Extracts a slice of the live range. Equivalent to `&s[..]`.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_slice()
    }

    /// Extracts a mutable slice of the live range. Equivalent to `&mut s[..]`.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut dvector = DVector::from([1, 2]);
    /// dvector.as_mut_slice()[0] = 3;
    /// assert_eq!(dvector.as_slice(), &[3, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_mut_slice()
    }

    /// Returns a pointer to the first live element. It stays valid until the next operation that
    /// may reallocate.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.live_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.live_ptr()
    }

    /// Exchanges the contents, capacity and allocator of two `DVector`s.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut a = DVector::from([1, 2]);
    /// let mut b = DVector::with_capacity(3);
    /// b.push_back(9);
    /// a.swap(&mut b);
    /// assert_eq!((&*a, a.capacity()), (&[9][..], 3));
    /// assert_eq!(&*b, &[1, 2]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Moves the whole block out into a new `DVector`, leaving `self` as an empty shell with zero
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut source = DVector::from([1, 2, 3]);
    /// let dest = source.take();
    /// assert_eq!(&*dest, &[1, 2, 3]);
    /// assert_eq!((source.len(), source.capacity()), (0, 0));
    /// assert!(source.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        DVector {
            raw: self.raw.take(),
        }
    }

    /// Drops the current contents and block, then takes over `source`'s block, leaving `source`
    /// as an empty shell.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut source = DVector::from([1, 2, 3]);
    /// let mut dest = DVector::from([7]);
    /// dest.move_from(&mut source);
    /// assert_eq!(&*dest, &[1, 2, 3]);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    #[inline]
    pub fn move_from(&mut self, source: &mut Self)
    where
        A: Clone,
    {
        self.raw = source.raw.take();
    }

    /// Copies the `DVector` into a block of the same capacity, with every element on the same slot
    /// as in the original. Reports allocation failure instead of aborting.
    ///
    /// # Examples
    /// ```
    /// # use dvector::DVector;
    /// let mut original = DVector::from([1, 2, 3]);
    /// original.push_front(0);
    /// let copy = original.try_clone().unwrap();
    /// assert_eq!(copy, original);
    /// assert_eq!(copy.layout(), original.layout());
    /// ```
    pub fn try_clone(&self) -> Result<Self, DVectorError>
    where
        T: Clone,
        A: Clone,
    {
        let mut raw = self.raw.try_empty_like()?;
        for elem in self.as_slice() {
            // the copy has the same capacity and starts at our `left`, so the back never runs out
            unsafe { raw.write_back(elem.clone()) };
        }
        Ok(DVector { raw })
    }
}

impl<T, A: SlotAllocator + Default> Default for DVector<T, A> {
    #[inline]
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: SlotAllocator + Clone> Clone for DVector<T, A> {
    #[inline]
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => e.raise(),
        }
    }

    /// Copy-and-swap: the copy is built completely before `self` is touched, so a panicking
    /// `T::clone` leaves `self` as it was.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, A: SlotAllocator> Deref for DVector<T, A> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: SlotAllocator> DerefMut for DVector<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: SlotAllocator, I> std::ops::Index<I> for DVector<T, A>
where
    I: std::slice::SliceIndex<[T]>,
{
    type Output = <[T] as std::ops::Index<I>>::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, A: SlotAllocator, I> std::ops::IndexMut<I> for DVector<T, A>
where
    I: std::slice::SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, A: SlotAllocator> AsRef<[T]> for DVector<T, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: SlotAllocator> AsMut<[T]> for DVector<T, A> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: SlotAllocator> Extend<T> for DVector<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_back(iter.size_hint().0);
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> FromIterator<T> for DVector<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dvector = DVector::new();
        dvector.extend(iter);
        dvector
    }
}

impl<T> From<Vec<T>> for DVector<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DVector<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T: PartialEq, A: SlotAllocator, B: SlotAllocator> PartialEq<DVector<T, B>> for DVector<T, A> {
    #[inline]
    fn eq(&self, other: &DVector<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, A: SlotAllocator> PartialEq<[T]> for DVector<T, A> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, A: SlotAllocator> Eq for DVector<T, A> {}

impl<T: std::hash::Hash, A: SlotAllocator> std::hash::Hash for DVector<T, A> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::de::{SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::marker::PhantomData;

    impl<T: Serialize, A: SlotAllocator> Serialize for DVector<T, A> {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_slice().serialize(serializer)
        }
    }

    struct DVectorVisitor<T, A>(PhantomData<(T, A)>);

    impl<'de, T, A> Visitor<'de> for DVectorVisitor<T, A>
    where
        T: Deserialize<'de>,
        A: SlotAllocator + Default,
    {
        type Value = DVector<T, A>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a sequence")
        }

        fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
            let mut dvector = DVector::default();
            while let Some(elem) = seq.next_element()? {
                dvector
                    .try_push_back(elem)
                    .map_err(serde::de::Error::custom)?;
            }
            Ok(dvector)
        }
    }

    impl<'de, T, A> Deserialize<'de> for DVector<T, A>
    where
        T: Deserialize<'de>,
        A: SlotAllocator + Default,
    {
        #[inline]
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(DVectorVisitor(PhantomData))
        }
    }

}

/// Creates a [`DVector`] containing the arguments, like [`vec!`].
///
/// # Examples
/// ```
/// # use dvector::dvector;
/// let dvector = dvector![1, 2, 3];
/// assert_eq!(dvector.as_slice(), &[1, 2, 3]);
/// ```
/// ```
/// # use dvector::dvector;
/// let dvector = dvector![1; 5];
/// assert_eq!(dvector.len(), 5);
/// assert_eq!(dvector.as_slice(), &[1, 1, 1, 1, 1]);
/// ```
/// ```
/// # use dvector::{DVector, dvector};
/// let dvector: DVector<i32> = dvector![];
/// assert_eq!(dvector.len(), 0);
/// assert_eq!(dvector.capacity(), 10);
/// ```
#[macro_export]
macro_rules! dvector {
    () => {
        $crate::DVector::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::DVector<_> as ::std::iter::FromIterator<_>>::from_iter(
            ::std::iter::repeat($elem).take($n),
        )
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DVector::<_>::from([$($x),+])
    };
}
