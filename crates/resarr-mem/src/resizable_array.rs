//! A growable array that keeps allocation and element lifetime apart.
//!
//! Storage is obtained as raw slots from an [`Allocator`]; values are
//! constructed into those slots only by insertions and destroyed only by
//! removals, [`ResizableArray::clear`], shrinking reallocations and drop.
//! Exactly the first `len` slots are live at any time.

use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Index, IndexMut, Deref, DerefMut},
    ptr::NonNull,
    slice,
};

use std::alloc::{Layout, handle_alloc_error};

use crate::{
    allocator::Allocator,
    global_alloc::GlobalAlloc,
    capacity_policy::{CapacityPolicy, Doubling, capacity_overflow},
    errors::ArrayError,
    Result,
    strategies::{move_elements, drop_elements, write_slot},
};

/// The path taken by the most recent insertion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Insertion {
    /// The value was cloned from a borrowed source.
    Copied,
    /// The value was moved in by the caller.
    Moved,
    /// The value was constructed directly in its slot.
    Emplaced,
}

/// Counters describing the reallocations an array has gone through.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct GrowthStats {
    /// Number of times the storage was replaced.
    pub reallocations: usize,
    /// Total number of live values relocated across all reallocations.
    pub relocated: usize,
}

/// Contiguous, growable array of `T`.
///
/// # Example
/// ```rust
/// use resarr_mem::ResizableArray;
///
/// let mut names = ResizableArray::new();
/// names.push_back("Tom");
/// names.push_back("Lois");
/// assert_eq!(names.len(), 2);
/// assert_eq!(names.capacity(), 3);
/// assert!(names.get(2).is_err());
/// ```
pub struct ResizableArray<T, Alloc: Allocator = GlobalAlloc, Pol: CapacityPolicy = Doubling> {
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: Alloc,
    stats: GrowthStats,
    last_insertion: Option<Insertion>,
    _markers: PhantomData<(T, Pol)>,
}

const_assert!(size_of!(ResizableArray<u32>) == size_of!(Option<ResizableArray<u32>>));

// SAFETY: the array owns its `T`s through `data`; `Pol` is a stateless marker
// that only appears in `PhantomData`, so it needs no `Send`/`Sync` bound.
unsafe impl<T, Alloc, Pol> Send for ResizableArray<T, Alloc, Pol>
    where
        T: Send,
        Alloc: Allocator + Send,
        Pol: CapacityPolicy,
{}

unsafe impl<T, Alloc, Pol> Sync for ResizableArray<T, Alloc, Pol>
    where
        T: Sync,
        Alloc: Allocator + Sync,
        Pol: CapacityPolicy,
{}

impl<T> ResizableArray<T> {

    #[inline(always)]
    pub fn new() -> Self {
        Self::new_in(GlobalAlloc)
    }
}

impl<T> Default for ResizableArray<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Alloc, Pol> ResizableArray<T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    /// Creates an empty array reserving [`CapacityPolicy::initial`] slots from `alloc`.
    pub fn new_in(alloc: Alloc) -> Self {
        let mut array = Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc,
            stats: GrowthStats::default(),
            last_insertion: None,
            _markers: PhantomData,
        };
        let initial = Pol::initial();
        if initial != 0 {
            array.data = array.allocate(initial);
            array.capacity = initial;
        }
        array
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots reserved, occupied or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn stats(&self) -> GrowthStats {
        self.stats
    }

    #[inline(always)]
    pub fn last_insertion(&self) -> Option<Insertion> {
        self.last_insertion
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Appends `value`, taking ownership of it.
    pub fn push_back(&mut self, value: T) {
        self.reserve_one();
        unsafe { write_slot(self.data, self.len, value); }
        self.len += 1;
        self.last_insertion = Some(Insertion::Moved);
    }

    /// Appends a clone of `value`, leaving the source untouched.
    ///
    /// Growth happens before the clone; relocated residents are never cloned.
    pub fn push_back_clone(&mut self, value: &T)
        where
            T: Clone
    {
        self.reserve_one();
        unsafe { write_slot(self.data, self.len, value.clone()); }
        self.len += 1;
        self.last_insertion = Some(Insertion::Copied);
    }

    /// Constructs a value from `args` directly in the next free slot.
    ///
    /// Tuples stand in for multi-argument constructors:
    /// `array.emplace_back((1.0, 2.0, 4.0))`.
    #[inline]
    pub fn emplace_back<A>(&mut self, args: A) -> &mut T
        where
            T: From<A>
    {
        self.emplace_back_with(|| T::from(args))
    }

    /// Constructs the value returned by `f` directly in the next free slot.
    pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T
        where
            F: FnOnce() -> T
    {
        self.reserve_one();
        let index = self.len;
        unsafe { write_slot(self.data, index, f()); }
        self.len += 1;
        self.last_insertion = Some(Insertion::Emplaced);
        unsafe { self.data.add(index).as_mut() }
    }

    /// Destroys the last value. Does nothing when empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return
        }
        self.len -= 1;
        unsafe { drop_elements(self.data.add(self.len), 1); }
    }

    /// Destroys every value. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe { drop_elements(self.data, len); }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    #[inline(always)]
    fn reserve_one(&mut self) {
        if self.len >= self.capacity {
            self.grow()
        }
    }

    fn grow(&mut self) {
        let new_capacity = Pol::grow(self.capacity);
        assert!(
            new_capacity > self.capacity,
            "capacity policy did not grow past {}", self.capacity,
        );
        self.reallocate(new_capacity);
    }

    /// Replaces the storage with one of `new_capacity` slots.
    ///
    /// Values past `new_capacity` are destroyed first. The remaining values
    /// are relocated in order; the old slots are released without running
    /// any destructor.
    fn reallocate(&mut self, new_capacity: usize) {
        if new_capacity < self.len {
            let excess = self.len - new_capacity;
            self.len = new_capacity;
            unsafe { drop_elements(self.data.add(new_capacity), excess); }
        }
        let data = self.allocate(new_capacity);
        unsafe {
            move_elements(self.data, data, self.len);
            self.release(self.data, self.capacity);
        }
        self.data = data;
        self.capacity = new_capacity;
        self.stats.reallocations += 1;
        self.stats.relocated += self.len;
    }

    fn allocate(&self, capacity: usize) -> NonNull<T> {
        if size_of::<T>() == 0 || capacity == 0 {
            return NonNull::dangling()
        }
        match unsafe { self.alloc.allocate_uninit(capacity) } {
            Some(ptr) => ptr,
            None => match Layout::array::<T>(capacity) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => capacity_overflow(),
            },
        }
    }

    unsafe fn release(&self, data: NonNull<T>, capacity: usize) {
        if size_of::<T>() == 0 || capacity == 0 {
            return
        }
        unsafe { self.alloc.free_uninit(data, capacity); }
    }
}

impl_traits! {
    for ResizableArray<T, Alloc: Allocator, Pol: CapacityPolicy>
    Drop =>

        fn drop(&mut self) {
            self.clear();
            unsafe { self.release(self.data, self.capacity); }
        }
    ,
    Index<usize> =>

        type Output = T;

        #[inline(always)]
        #[track_caller]
        fn index(&self, index: usize) -> &Self::Output {
            match self.get(index) {
                Ok(value) => value,
                Err(err) => panic!("{}", err),
            }
        }
    ,
    IndexMut<usize> =>

        #[inline(always)]
        #[track_caller]
        fn index_mut(&mut self, index: usize) -> &mut Self::Output {
            match self.get_mut(index) {
                Ok(value) => value,
                Err(err) => panic!("{}", err),
            }
        }
    ,
    AsRef<[T]> =>

        #[inline(always)]
        fn as_ref(&self) -> &[T] {
            self.as_slice()
        }
    ,
    AsMut<[T]> =>

        #[inline(always)]
        fn as_mut(&mut self) -> &mut [T] {
            self.as_mut_slice()
        }
    ,
    Deref =>

        type Target = [T];

        #[inline(always)]
        fn deref(&self) -> &Self::Target {
            self.as_slice()
        }
    ,
    DerefMut =>

        #[inline(always)]
        fn deref_mut(&mut self) -> &mut Self::Target {
            self.as_mut_slice()
        }
    ,
    Debug where T: Debug =>

        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.as_slice()).finish()
        }
    ,
}

impl<'a, T, Alloc: Allocator, Pol: CapacityPolicy> IntoIterator for &'a ResizableArray<T, Alloc, Pol> {

    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, Alloc: Allocator, Pol: CapacityPolicy> IntoIterator for &'a mut ResizableArray<T, Alloc, Pol> {

    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
