#[macro_use]

mod macros;
mod allocator;
mod global_alloc;
mod errors;
mod strategies;

pub mod capacity_policy;
pub mod resizable_array;
pub mod fixed_array;

pub use allocator::Allocator;
pub use global_alloc::GlobalAlloc;
pub use errors::ArrayError;
pub use capacity_policy::{CapacityPolicy, Doubling};
pub use resizable_array::{ResizableArray, Insertion, GrowthStats};
pub use fixed_array::FixedArray;

pub type Result<T> = core::result::Result<T, ArrayError>;
