use core::{
    fmt::{self, Debug, Formatter},
    ops::{Index, IndexMut},
};

use crate::{errors::ArrayError, Result};

/// Array of exactly `N` values with checked indexing.
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {

    pub fn new() -> Self
        where
            T: Default
    {
        Self {
            data: core::array::from_fn(|_| T::default()),
        }
    }

    #[inline(always)]
    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len: N })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len: N })
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {

    fn default() -> Self {
        Self::new()
    }
}

impl_traits! {
    for FixedArray<T, N: usize [const]>
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
    Debug where T: Debug =>

        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.data.iter()).finish()
        }
    ,
}
