//! Growth policies for [`ResizableArray`](crate::ResizableArray).

/// Decides how many slots a container reserves up front and after each
/// overflow.
///
/// [`CapacityPolicy::grow`] must return a value strictly greater than
/// `current` for every input, `0` included.
pub trait CapacityPolicy {

    fn initial() -> usize;

    fn grow(current: usize) -> usize;
}

/// Starts with three slots and doubles on every overflow.
#[derive(Clone, Copy, Default, Debug)]
pub struct Doubling;

impl Doubling {

    pub const INITIAL_CAPACITY: usize = 3;
}

const_assert!(Doubling::INITIAL_CAPACITY > 0);

impl CapacityPolicy for Doubling {

    #[inline(always)]
    fn initial() -> usize {
        Self::INITIAL_CAPACITY
    }

    #[inline]
    fn grow(current: usize) -> usize {
        if current == 0 {
            return Self::INITIAL_CAPACITY
        }
        match current.checked_mul(2) {
            Some(c) => c,
            None => capacity_overflow(),
        }
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
