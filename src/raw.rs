//! The storage block beneath a [`DVector`](crate::DVector): one raw allocation plus the two
//! exclusive cursors that delimit the live range inside it.

use crate::{DVectorError, SlotAllocator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Capacity used when none (or zero) is requested, and when a shell is revived by a push.
pub const DEFAULT_CAPACITY: usize = 10;

/// Every growth multiplies the capacity by this, so capacities run 10, 40, 160, ...
pub const GROWTH_FACTOR: usize = 4;

/// Cursor positions of an empty block of `capacity` slots, as close to the middle as possible.
#[inline]
pub(crate) fn centered(capacity: usize) -> (usize, usize) {
    // a single-slot block cannot put `right` at 0 without `left` underflowing
    let right = (capacity / 2).max(1);
    (right - 1, right)
}

/// Capacity and cursors after one growth step.
///
/// The front boundary keeps its offset from the center of the block
/// (`capacity / 2 - left - 1` before and after), so whichever side was exhausted gets the bulk of
/// the new room without starving the other one.
#[inline]
pub(crate) fn regrown(
    capacity: usize,
    left: usize,
    right: usize,
) -> Result<(usize, usize, usize), DVectorError> {
    let size = right - left - 1;
    let new_capacity = capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(DVectorError::CapacityOverflow { capacity })?;
    // new_capacity / 2 - (capacity / 2 - left - 1) - 1, without going through a signed offset
    let new_left = new_capacity / 2 - capacity / 2 + left;
    Ok((new_capacity, new_left, new_left + size + 1))
}

/// Owns exactly one block at a time.
///
/// Slots strictly between `left` and `right` hold constructed values; every other slot is
/// uninitialized. A block with `capacity == 0` is a shell: it owns no memory and its cursors
/// are both zero.
pub(crate) struct RawBlock<T, A: SlotAllocator> {
    ptr: NonNull<T>,
    capacity: usize,
    left: usize,
    right: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send, A: SlotAllocator + Send> Send for RawBlock<T, A> {}
unsafe impl<T: Sync, A: SlotAllocator + Sync> Sync for RawBlock<T, A> {}

impl<T, A: SlotAllocator> RawBlock<T, A> {
    /// Allocates an empty block with centered cursors. Zero means [`DEFAULT_CAPACITY`].
    pub(crate) fn try_new_in(capacity: usize, alloc: A) -> Result<Self, DVectorError> {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        let ptr = alloc.allocate::<T>(capacity)?;
        let (left, right) = centered(capacity);
        Ok(RawBlock {
            ptr,
            capacity,
            left,
            right,
            alloc,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) const fn shell(alloc: A) -> Self {
        RawBlock {
            ptr: NonNull::dangling(),
            capacity: 0,
            left: 0,
            right: 0,
            alloc,
            _owns: PhantomData,
        }
    }

    /// An empty block with this block's capacity, whose cursors sit where this block's first
    /// element is, so pushing clones of the live range to the back lands them on the same slots.
    pub(crate) fn try_empty_like(&self) -> Result<Self, DVectorError>
    where
        A: Clone,
    {
        let alloc = self.alloc.clone();
        if self.is_shell() {
            return Ok(Self::shell(alloc));
        }
        let ptr = alloc.allocate::<T>(self.capacity)?;
        Ok(RawBlock {
            ptr,
            capacity: self.capacity,
            left: self.left,
            right: self.left + 1,
            alloc,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn is_shell(&self) -> bool {
        self.capacity == 0
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn left(&self) -> usize {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> usize {
        self.right
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        if self.is_shell() {
            0
        } else {
            self.right - self.left - 1
        }
    }

    #[inline]
    pub(crate) fn front_capacity(&self) -> usize {
        if self.is_shell() {
            0
        } else {
            self.left + 1
        }
    }

    #[inline]
    pub(crate) fn back_capacity(&self) -> usize {
        self.capacity - self.right
    }

    /// Whether a push to the back has to grow first. Always true for a shell.
    #[inline]
    pub(crate) fn back_exhausted(&self) -> bool {
        self.right >= self.capacity
    }

    /// Whether a push to the front has to grow first. Always true for a shell.
    #[inline]
    pub(crate) fn front_exhausted(&self) -> bool {
        self.left == 0
    }

    /// Moves the live range into a block [`GROWTH_FACTOR`] times larger, or allocates a
    /// [`DEFAULT_CAPACITY`] block for a shell.
    ///
    /// Nothing is touched until the new block has been handed out, so a failure leaves `self`
    /// exactly as it was.
    pub(crate) fn try_grow(&mut self) -> Result<(), DVectorError> {
        let plan = self.next_growth()?;
        self.relocate(plan)
    }

    /// Grows as many steps as it takes for `fits(capacity, left, right)` to hold, with a single
    /// allocation for the final block. Does nothing if the current block already fits.
    ///
    /// The intermediate steps are only computed, never allocated, so a failure leaves `self`
    /// exactly as it was.
    pub(crate) fn try_grow_until<F>(&mut self, fits: F) -> Result<(), DVectorError>
    where
        F: Fn(usize, usize, usize) -> bool,
    {
        if !self.is_shell() && fits(self.capacity, self.left, self.right) {
            return Ok(());
        }
        let mut plan = self.next_growth()?;
        while !fits(plan.0, plan.1, plan.2) {
            plan = regrown(plan.0, plan.1, plan.2)?;
        }
        self.relocate(plan)
    }

    /// Capacity and cursors one growth step from now.
    fn next_growth(&self) -> Result<(usize, usize, usize), DVectorError> {
        if self.is_shell() {
            let (left, right) = centered(DEFAULT_CAPACITY);
            Ok((DEFAULT_CAPACITY, left, right))
        } else {
            regrown(self.capacity, self.left, self.right)
        }
    }

    /// Allocates a block for `(capacity, left, right)` and moves the live range into it.
    fn relocate(&mut self, plan: (usize, usize, usize)) -> Result<(), DVectorError> {
        let (new_capacity, new_left, new_right) = plan;
        let new_ptr = self.alloc.allocate::<T>(new_capacity)?;
        if self.is_shell() {
            log::trace!("reviving empty shell with {new_capacity} slots");
        } else {
            log::trace!(
                "growing block {} -> {} slots, cursors ({}, {}) -> ({}, {})",
                self.capacity,
                new_capacity,
                self.left,
                self.right,
                new_left,
                new_right
            );
            let len = self.len();
            debug_assert_eq!(new_right - new_left - 1, len);
            unsafe {
                // a bitwise move: the old slots are uninitialized from here on
                std::ptr::copy_nonoverlapping(
                    self.ptr.as_ptr().add(self.left + 1),
                    new_ptr.as_ptr().add(new_left + 1),
                    len,
                );
                self.alloc.deallocate(self.ptr, self.capacity);
            }
        }

        self.ptr = new_ptr;
        self.capacity = new_capacity;
        self.left = new_left;
        self.right = new_right;
        Ok(())
    }

    /// Constructs `value` in the slot at `right` and advances the cursor.
    ///
    /// # Safety
    /// The back must not be exhausted.
    #[inline]
    pub(crate) unsafe fn write_back(&mut self, value: T) -> &mut T {
        debug_assert!(!self.back_exhausted());
        let slot = self.ptr.as_ptr().add(self.right);
        slot.write(value);
        self.right += 1;
        &mut *slot
    }

    /// Constructs `value` in the slot at `left` and retreats the cursor.
    ///
    /// # Safety
    /// The front must not be exhausted.
    #[inline]
    pub(crate) unsafe fn write_front(&mut self, value: T) -> &mut T {
        debug_assert!(!self.front_exhausted());
        let slot = self.ptr.as_ptr().add(self.left);
        slot.write(value);
        self.left -= 1;
        &mut *slot
    }

    /// Moves the last live value out of the block.
    ///
    /// # Safety
    /// The live range must not be empty.
    #[inline]
    pub(crate) unsafe fn read_back(&mut self) -> T {
        debug_assert!(self.len() > 0);
        self.right -= 1;
        self.ptr.as_ptr().add(self.right).read()
    }

    /// Moves the first live value out of the block.
    ///
    /// # Safety
    /// The live range must not be empty.
    #[inline]
    pub(crate) unsafe fn read_front(&mut self) -> T {
        debug_assert!(self.len() > 0);
        self.left += 1;
        self.ptr.as_ptr().add(self.left).read()
    }

    /// Pointer to the first live slot. Dangling for a shell.
    #[inline]
    pub(crate) fn live_ptr(&self) -> *mut T {
        if self.is_shell() {
            self.ptr.as_ptr()
        } else {
            // left + 1 <= right <= capacity, so this stays within or one past the block
            unsafe { self.ptr.as_ptr().add(self.left + 1) }
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.live_ptr(), self.len()) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.live_ptr(), self.len()) }
    }

    /// Destroys the live range and re-centers the cursors. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        if self.is_shell() {
            return;
        }
        let live: *mut [T] = self.as_mut_slice();
        // cursors first, so a panicking destructor cannot lead to a second drop of the same values
        let (left, right) = centered(self.capacity);
        self.left = left;
        self.right = right;
        unsafe { std::ptr::drop_in_place(live) };
    }

    /// Hands the block over to the caller, leaving a shell behind.
    #[inline]
    pub(crate) fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let shell = Self::shell(self.alloc.clone());
        std::mem::replace(self, shell)
    }
}

impl<T, A: SlotAllocator> Drop for RawBlock<T, A> {
    fn drop(&mut self) {
        if self.is_shell() {
            return;
        }

        // releases the memory even if one of the element destructors panics
        struct Release<'a, T, A: SlotAllocator> {
            ptr: NonNull<T>,
            capacity: usize,
            alloc: &'a A,
        }
        impl<T, A: SlotAllocator> Drop for Release<'_, T, A> {
            fn drop(&mut self) {
                unsafe { self.alloc.deallocate(self.ptr, self.capacity) }
            }
        }

        let live: *mut [T] = self.as_mut_slice();
        let _release = Release {
            ptr: self.ptr,
            capacity: self.capacity,
            alloc: &self.alloc,
        };
        unsafe { std::ptr::drop_in_place(live) };
    }
}
