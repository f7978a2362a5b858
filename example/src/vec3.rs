//! Sample element type that narrates and counts its own lifetime events.
//!
//! Rust moves are plain memory copies and run no code, so only
//! construction, cloning and dropping can be observed.

use core::fmt::{self, Display, Formatter};

use std::cell::Cell;

use resarr_log::trace;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Census {
    pub defaulted: usize,
    pub scalar: usize,
    pub triple: usize,
    pub cloned: usize,
    pub dropped: usize,
}

thread_local! {
    static CENSUS: Cell<Census> = Cell::new(Census::default());
}

/// Lifetime events recorded on the current thread so far.
pub fn census() -> Census {
    CENSUS.with(Cell::get)
}

fn tally(f: impl FnOnce(&mut Census)) {
    CENSUS.with(|cell| {
        let mut census = cell.get();
        f(&mut census);
        cell.set(census);
    })
}

#[derive(PartialEq, Debug)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Vec3 {

    fn default() -> Self {
        trace!("default constructor");
        tally(|c| c.defaulted += 1);
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }
}

impl From<f32> for Vec3 {

    fn from(scalar: f32) -> Self {
        trace!("scalar constructor");
        tally(|c| c.scalar += 1);
        Self { x: scalar, y: scalar, z: scalar }
    }
}

impl From<(f32, f32, f32)> for Vec3 {

    fn from((x, y, z): (f32, f32, f32)) -> Self {
        trace!("float constructor");
        tally(|c| c.triple += 1);
        Self { x, y, z }
    }
}

impl Clone for Vec3 {

    fn clone(&self) -> Self {
        trace!("copy constructor");
        tally(|c| c.cloned += 1);
        Self { x: self.x, y: self.y, z: self.z }
    }
}

impl Drop for Vec3 {

    fn drop(&mut self) {
        trace!("destructor");
        tally(|c| c.dropped += 1);
    }
}

impl Display for Vec3 {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn constructors_are_counted_by_kind() {
        let before = census();
        let a = Vec3::from(1.0f32);
        let b = Vec3::from((1.0f32, 2.0f32, 3.0f32));
        let c = Vec3::default();
        let after = census();
        assert_eq!(after.scalar - before.scalar, 1);
        assert_eq!(after.triple - before.triple, 1);
        assert_eq!(after.defaulted - before.defaulted, 1);
        assert_eq!((a.x, a.y, a.z), (1.0, 1.0, 1.0));
        assert_eq!((b.x, b.y, b.z), (1.0, 2.0, 3.0));
        assert_eq!((c.x, c.y, c.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn clone_and_drop_are_counted() {
        let before = census();
        let original = Vec3::from(2.0f32);
        let copy = original.clone();
        drop(copy);
        let after = census();
        assert_eq!(after.cloned - before.cloned, 1);
        assert_eq!(after.dropped - before.dropped, 1);
        assert_eq!(original.x, 2.0);
    }

    #[test]
    fn moves_run_no_code() {
        let original = Vec3::from(3.0f32);
        let before = census();
        let moved = original;
        let boxed = Box::new(moved);
        assert_eq!(census(), before);
        assert_eq!(boxed.z, 3.0);
    }

    #[test]
    fn displays_components() {
        let v = Vec3::from((2.0f32, 3.0f32, 4.5f32));
        assert_eq!(v.to_string(), "2, 3, 4.5");
    }
}
