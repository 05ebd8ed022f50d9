//! The allocation capability a [`DVector`](crate::DVector) draws its block from.

use crate::DVectorError;
use std::alloc::Layout;
use std::fmt::Debug;
use std::ptr::NonNull;

/// Hands out and takes back raw blocks of uninitialized slots.
///
/// An allocator only deals in memory. Constructing values into the slots and destroying them again
/// is the container's job.
///
/// # Safety
/// A successful `allocate::<T>(n)` must return a pointer that is aligned for `T` and valid for
/// reads and writes of `n` values of `T` until it is passed back to `deallocate::<T>` with the same
/// `n`. Zero-byte requests may return a dangling pointer.
pub unsafe trait SlotAllocator: Debug {
    /// Allocates a block of `slots` uninitialized values of `T`.
    fn allocate<T>(&self, slots: usize) -> Result<NonNull<T>, DVectorError>;

    /// Releases a block.
    ///
    /// # Safety
    /// `ptr` must come from `self.allocate::<T>(slots)` (or a clone of `self`) with the same
    /// `slots`, and must not be used afterwards.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, slots: usize);
}

/// The process-wide allocator from [`std::alloc`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl SlotAllocator for Global {
    #[inline]
    fn allocate<T>(&self, slots: usize) -> Result<NonNull<T>, DVectorError> {
        let layout = Layout::array::<T>(slots)
            .map_err(|_| DVectorError::CapacityOverflow { capacity: slots })?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let ptr = unsafe { std::alloc::alloc(layout) };
        match NonNull::new(ptr as *mut T) {
            Some(p) => Ok(p),
            None => {
                log::debug!("system allocator refused {} bytes", layout.size());
                Err(DVectorError::AllocFailed { slots, layout })
            }
        }
    }

    #[inline]
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, slots: usize) {
        // the layout was already validated when the block was handed out
        let Ok(layout) = Layout::array::<T>(slots) else {
            return;
        };
        if layout.size() != 0 {
            std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
        }
    }
}

/// Allocators used by the unit tests to watch for leaks and to inject failures.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Wraps [`Global`], counting live blocks and failing once its allocation budget runs out.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct CountingAllocator {
        live: Rc<Cell<usize>>,
        allocations: Rc<Cell<usize>>,
        budget: Rc<Cell<Option<usize>>>,
    }

    impl CountingAllocator {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Number of blocks handed out and not yet returned.
        pub(crate) fn live_blocks(&self) -> usize {
            self.live.get()
        }

        /// Number of successful allocations so far.
        pub(crate) fn allocations(&self) -> usize {
            self.allocations.get()
        }

        /// Lets `n` more allocations succeed, then fails every request.
        pub(crate) fn fail_after(&self, n: usize) {
            self.budget.set(Some(n));
        }

        pub(crate) fn never_fail(&self) {
            self.budget.set(None);
        }
    }

    unsafe impl SlotAllocator for CountingAllocator {
        fn allocate<T>(&self, slots: usize) -> Result<NonNull<T>, DVectorError> {
            if let Some(left) = self.budget.get() {
                if left == 0 {
                    let layout = Layout::array::<T>(slots)
                        .map_err(|_| DVectorError::CapacityOverflow { capacity: slots })?;
                    return Err(DVectorError::AllocFailed { slots, layout });
                }
                self.budget.set(Some(left - 1));
            }
            let ptr = Global.allocate::<T>(slots)?;
            self.live.set(self.live.get() + 1);
            self.allocations.set(self.allocations.get() + 1);
            Ok(ptr)
        }

        unsafe fn deallocate<T>(&self, ptr: NonNull<T>, slots: usize) {
            self.live.set(self.live.get() - 1);
            Global.deallocate(ptr, slots);
        }
    }

    #[test]
    fn budget_runs_out() {
        let alloc = CountingAllocator::new();
        alloc.fail_after(1);
        let block = alloc.allocate::<u64>(4).unwrap();
        assert_eq!(alloc.live_blocks(), 1);
        assert!(matches!(
            alloc.allocate::<u64>(4),
            Err(DVectorError::AllocFailed { slots: 4, .. })
        ));
        unsafe { alloc.deallocate(block, 4) };
        assert_eq!(alloc.live_blocks(), 0);
        assert_eq!(alloc.allocations(), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_round_trip() {
        let ptr = Global.allocate::<String>(16).unwrap();
        unsafe {
            ptr.as_ptr().add(15).write(String::from("last"));
            assert_eq!(&*ptr.as_ptr().add(15), "last");
            std::ptr::drop_in_place(ptr.as_ptr().add(15));
            Global.deallocate(ptr, 16);
        }
    }

    #[test]
    fn zero_sized_requests_do_not_allocate() {
        let ptr = Global.allocate::<()>(1000).unwrap();
        assert_eq!(ptr, NonNull::dangling());
        unsafe { Global.deallocate(ptr, 1000) };
    }

    #[test]
    fn oversized_request_is_overflow() {
        assert_eq!(
            Global.allocate::<u64>(usize::MAX / 2),
            Err(DVectorError::CapacityOverflow {
                capacity: usize::MAX / 2
            })
        );
    }
}
