use core::{
    mem::needs_drop,
    ptr::NonNull,
};

/// Relocates `len` live values from `src` to `dst`.
///
/// The values are moved bitwise; afterwards the `src` slots are logically
/// uninitialized and must not be dropped.
///
/// # Safety
/// `src` must hold `len` initialized values, `dst` must have room for `len`
/// values and the two regions must not overlap.
#[inline(always)]
pub(crate) unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    if len == 0 {
        return
    }
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// Runs the destructor of each of the `len` values starting at `ptr`.
///
/// # Safety
/// Every slot in `ptr..ptr + len` must hold an initialized value that is
/// not used again.
#[inline(always)]
pub(crate) unsafe fn drop_elements<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            for i in 0..len {
                ptr.add(i).drop_in_place();
            }
        }
    }
}

/// Constructs `value` in the uninitialized slot `index` past `ptr`.
///
/// # Safety
/// The slot must lie inside the allocation and must not hold a live value.
#[inline(always)]
pub(crate) unsafe fn write_slot<T>(ptr: NonNull<T>, index: usize, value: T) {
    unsafe {
        ptr.add(index).write(value);
    }
}
