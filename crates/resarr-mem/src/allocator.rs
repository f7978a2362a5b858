use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Source of raw, uninitialized memory.
///
/// Implementors hand out and take back bytes only. No constructor or
/// destructor ever runs inside an allocator; element lifetimes are the
/// caller's business.
pub trait Allocator {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Allocates room for `count` values of `T`.
    ///
    /// Returns [`None`] if the layout overflows or the request fails.
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe { self.allocate_raw(layout.size(), layout.align()).map(|ptr| ptr.cast::<T>()) }
    }

    /// Releases memory obtained from [`Allocator::allocate_uninit`] with the same `count`.
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout.size(), layout.align()) }
    }
}
