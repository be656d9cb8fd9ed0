//! Double-ended bump arena.
//!
//! A [`BiStack`] serves allocations from both ends of one fixed buffer:
//!
//! ```text
//!  0                                                        capacity
//!  ├── front allocations ──►│      free      │◄── back allocations ──┤
//!                         front           capacity - back
//! ```
//!
//! Allocation only moves a cursor. Memory is reclaimed in bulk by resetting
//! an end, which also bumps that end's generation so outstanding
//! [`TempHandle`]s for it stop resolving. The buffer is never grown, and the
//! raw arena does not zero what it hands out.

use std::ops::Range;

use crate::error::ArenaError;
use crate::handle::{End, TempHandle};

/// Fixed-capacity arena with independent front and back bump cursors.
///
/// `S` is the backing storage. The default owns a boxed slice; any
/// `AsRef<[u8]> + AsMut<[u8]>` works, including a caller-owned `&mut [u8]`.
///
/// Invariant: `used_front() + used_back() <= capacity()`.
pub struct BiStack<S = Box<[u8]>> {
    storage: S,
    /// Bytes consumed from the low end.
    front: usize,
    /// Bytes consumed from the high end.
    back: usize,
    front_generation: u32,
    back_generation: u32,
}

impl BiStack {
    /// Create an arena over a freshly allocated, zeroed buffer.
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(vec![0u8; capacity].into_boxed_slice())
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> BiStack<S> {
    /// Bind an arena to existing storage. Both cursors start at zero.
    pub fn from_buffer(storage: S) -> Self {
        Self {
            storage,
            front: 0,
            back: 0,
            front_generation: 0,
            back_generation: 0,
        }
    }

    /// Allocate `size` bytes from the low end.
    ///
    /// On [`ArenaError::CapacityExceeded`] neither cursor moves.
    pub fn alloc_front(&mut self, size: usize) -> Result<TempHandle, ArenaError> {
        let remaining = self.remaining();
        if size > remaining {
            return Err(ArenaError::CapacityExceeded {
                requested: size,
                remaining,
            });
        }
        let offset = self.front;
        self.front += size;
        Ok(TempHandle::new(
            self.front_generation,
            offset,
            size,
            End::Front,
        ))
    }

    /// Allocate `size` bytes from the high end, growing downward.
    ///
    /// On [`ArenaError::CapacityExceeded`] neither cursor moves.
    pub fn alloc_back(&mut self, size: usize) -> Result<TempHandle, ArenaError> {
        let remaining = self.remaining();
        if size > remaining {
            return Err(ArenaError::CapacityExceeded {
                requested: size,
                remaining,
            });
        }
        self.back += size;
        let offset = self.capacity() - self.back;
        Ok(TempHandle::new(self.back_generation, offset, size, End::Back))
    }

    /// Release every front allocation and invalidate their handles.
    pub fn reset_front(&mut self) {
        self.front = 0;
        self.front_generation = self.front_generation.wrapping_add(1);
    }

    /// Release every back allocation and invalidate their handles.
    pub fn reset_back(&mut self) {
        self.back = 0;
        self.back_generation = self.back_generation.wrapping_add(1);
    }

    /// Release both ends.
    pub fn reset_all(&mut self) {
        self.reset_front();
        self.reset_back();
    }

    /// Resolve a handle to its bytes.
    ///
    /// Fails with [`ArenaError::StaleHandle`] if the handle's end has been
    /// reset since the allocation, or [`ArenaError::HandleOutOfBounds`] if the
    /// range is not inside that end's live region (e.g. a handle from a
    /// different arena).
    pub fn get(&self, handle: &TempHandle) -> Result<&[u8], ArenaError> {
        let range = self.check(handle)?;
        Ok(&self.storage.as_ref()[range])
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, handle: &TempHandle) -> Result<&mut [u8], ArenaError> {
        let range = self.check(handle)?;
        Ok(&mut self.storage.as_mut()[range])
    }

    /// Total buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    /// Bytes allocated from the front.
    pub fn used_front(&self) -> usize {
        self.front
    }

    /// Bytes allocated from the back.
    pub fn used_back(&self) -> usize {
        self.back
    }

    /// Free bytes between the cursors.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.front - self.back
    }

    /// Current front generation (bumped on each front reset).
    pub fn front_generation(&self) -> u32 {
        self.front_generation
    }

    /// Current back generation (bumped on each back reset).
    pub fn back_generation(&self) -> u32 {
        self.back_generation
    }

    /// Give back the storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    fn live_region(&self, end: End) -> Range<usize> {
        match end {
            End::Front => 0..self.front,
            End::Back => self.capacity() - self.back..self.capacity(),
        }
    }

    fn check(&self, handle: &TempHandle) -> Result<Range<usize>, ArenaError> {
        let current = match handle.end {
            End::Front => self.front_generation,
            End::Back => self.back_generation,
        };
        if handle.generation != current {
            return Err(ArenaError::StaleHandle {
                end: handle.end,
                handle_generation: handle.generation,
                current_generation: current,
            });
        }
        let live = self.live_region(handle.end);
        match handle.offset.checked_add(handle.len) {
            Some(stop) if handle.offset >= live.start && stop <= live.end => {
                Ok(handle.offset..stop)
            }
            _ => Err(ArenaError::HandleOutOfBounds {
                offset: handle.offset,
                len: handle.len,
                live,
            }),
        }
    }
}

impl<S: AsRef<[u8]>> std::fmt::Debug for BiStack<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiStack")
            .field("capacity", &self.storage.as_ref().len())
            .field("front", &self.front)
            .field("back", &self.back)
            .field("front_generation", &self.front_generation)
            .field("back_generation", &self.back_generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_allocs_are_sequential() {
        let mut arena = BiStack::new(64);
        let a = arena.alloc_front(10).unwrap();
        let b = arena.alloc_front(20).unwrap();
        assert_eq!(a.offset(), 0);
        assert_eq!(b.offset(), 10);
        assert_eq!(arena.used_front(), 30);
        assert_eq!(arena.remaining(), 34);
    }

    #[test]
    fn back_allocs_grow_downward() {
        let mut arena = BiStack::new(64);
        let a = arena.alloc_back(10).unwrap();
        let b = arena.alloc_back(4).unwrap();
        assert_eq!(a.offset(), 54);
        assert_eq!(b.offset(), 50);
        assert_eq!(arena.used_back(), 14);
    }

    #[test]
    fn ends_meet_without_overlap() {
        let mut arena = BiStack::new(16);
        let _ = arena.alloc_front(10).unwrap();
        let _ = arena.alloc_back(6).unwrap();
        assert_eq!(arena.remaining(), 0);
        assert!(arena.alloc_front(1).is_err());
        assert!(arena.alloc_back(1).is_err());
        // Zero-sized requests still fit in a full arena.
        assert!(arena.alloc_front(0).is_ok());
    }

    #[test]
    fn failed_alloc_leaves_cursors_untouched() {
        let mut arena = BiStack::new(32);
        let _ = arena.alloc_front(8).unwrap();
        let _ = arena.alloc_back(8).unwrap();
        let err = arena.alloc_front(17).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 17,
                remaining: 16
            }
        );
        assert_eq!(arena.used_front(), 8);
        assert_eq!(arena.used_back(), 8);
    }

    #[test]
    fn huge_request_does_not_overflow() {
        let mut arena = BiStack::new(32);
        let _ = arena.alloc_front(1).unwrap();
        assert!(arena.alloc_front(usize::MAX).is_err());
        assert!(arena.alloc_back(usize::MAX).is_err());
    }

    #[test]
    fn reset_all_then_full_alloc_succeeds() {
        let mut arena = BiStack::new(128);
        let _ = arena.alloc_front(50).unwrap();
        let _ = arena.alloc_back(50).unwrap();
        arena.reset_all();
        let h = arena.alloc_front(128).unwrap();
        assert_eq!(h.len(), 128);
    }

    #[test]
    fn reset_front_invalidates_only_front_handles() {
        let mut arena = BiStack::new(64);
        let f = arena.alloc_front(8).unwrap();
        let b = arena.alloc_back(8).unwrap();
        arena.reset_front();
        assert!(matches!(
            arena.get(&f),
            Err(ArenaError::StaleHandle {
                end: End::Front,
                handle_generation: 0,
                current_generation: 1,
            })
        ));
        assert!(arena.get(&b).is_ok());
    }

    #[test]
    fn reset_back_invalidates_back_handles() {
        let mut arena = BiStack::new(64);
        let b = arena.alloc_back(8).unwrap();
        arena.reset_back();
        let again = arena.alloc_back(8).unwrap();
        assert_eq!(again.offset(), b.offset());
        assert!(arena.get(&b).is_err());
        assert!(arena.get(&again).is_ok());
    }

    #[test]
    fn write_then_read_through_handle() {
        let mut arena = BiStack::new(64);
        let h = arena.alloc_back(4).unwrap();
        arena.get_mut(&h).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(arena.get(&h).unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn foreign_handle_out_of_bounds() {
        let mut big = BiStack::new(64);
        let small = BiStack::new(8);
        let h = big.alloc_front(32).unwrap();
        assert!(matches!(
            small.get(&h),
            Err(ArenaError::HandleOutOfBounds { .. })
        ));
    }

    #[test]
    fn borrowed_storage() {
        let mut backing = [0xEEu8; 16];
        let mut arena = BiStack::from_buffer(&mut backing[..]);
        let h = arena.alloc_front(2).unwrap();
        arena.get_mut(&h).unwrap().copy_from_slice(b"hi");
        drop(arena);
        assert_eq!(&backing[..3], b"hi\xEE");
    }

    #[test]
    fn raw_arena_does_not_zero() {
        let mut arena = BiStack::new(4);
        let h = arena.alloc_front(4).unwrap();
        arena.get_mut(&h).unwrap().fill(9);
        arena.reset_front();
        let h = arena.alloc_front(4).unwrap();
        assert_eq!(arena.get(&h).unwrap(), &[9, 9, 9, 9]);
    }

    #[test]
    fn zero_capacity_arena() {
        let mut arena = BiStack::new(0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.alloc_front(0).is_ok());
        assert!(arena.alloc_back(1).is_err());
    }
}
