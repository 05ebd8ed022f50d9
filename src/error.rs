use std::alloc::Layout;

/// The ways an operation on a [`DVector`](crate::DVector) can fail.
///
/// Only the `try_*` methods and the checked accessors report these. Every failed call leaves the
/// container exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DVectorError {
    /// The allocator could not provide a block of `slots` values.
    #[error("allocation of {slots} slots ({} bytes) failed", .layout.size())]
    AllocFailed { slots: usize, layout: Layout },
    /// Growing past `capacity` slots would overflow the address space.
    #[error("capacity overflow while growing past {capacity} slots")]
    CapacityOverflow { capacity: usize },
    /// A checked access named an index outside the live range.
    #[error("index {index} out of range for size {size}")]
    OutOfRange { index: usize, size: usize },
}

impl DVectorError {
    /// Turns an allocation fault into the std collection behavior: abort through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error), or panic on overflow.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            DVectorError::AllocFailed { layout, .. } => std::alloc::handle_alloc_error(layout),
            DVectorError::CapacityOverflow { .. } => panic!("capacity overflow"),
            DVectorError::OutOfRange { index, size } => {
                panic!("index {index} out of range for size {size}")
            }
        }
    }
}
