use core::fmt::Display;

use compact_str::CompactString;

use resarr_mem::{FixedArray, ResizableArray};

use resarr_log::{debug, error, info};

use crate::vec3::Vec3;

const SEPARATOR: &str = "------------------------------";

/// Prints one element per line.
pub fn print_array<T: Display>(array: &ResizableArray<T>) {
    for value in array {
        println!("{}", value);
    }
}

pub fn fixed_arrays() -> (FixedArray<i32, 3>, FixedArray<CompactString, 2>) {
    let mut numbers = FixedArray::<i32, 3>::new();
    for i in 0..numbers.size() {
        numbers[i] = i as i32 + 1;
        println!("{}", numbers[i]);
    }
    let mut names = FixedArray::<CompactString, 2>::new();
    names[0] = CompactString::new("Tom");
    names[1] = CompactString::new("Lois");
    for name in names.data() {
        println!("{}", name);
    }
    (numbers, names)
}

pub fn names() -> ResizableArray<CompactString> {
    let mut names = ResizableArray::new();
    for name in ["Tom", "Hudson", "Lois"] {
        names.push_back(CompactString::new(name));
    }
    info!("capacity: {}", names.capacity());
    let repeat = CompactString::new("Hudson");
    names.push_back_clone(&repeat);
    info!("capacity: {}", names.capacity());
    print_array(&names);
    match names.get(7) {
        Ok(name) => println!("{}", name),
        Err(err) => {
            error!("{}", err);
        },
    }
    names
}

pub fn vectors() -> ResizableArray<Vec3> {
    let mut vectors = ResizableArray::new();
    debug!("{}", SEPARATOR);
    vectors.push_back(Vec3::from(1.0f32));
    debug!("{}", SEPARATOR);
    vectors.push_back(Vec3::from((2.0f32, 3.0f32, 4.0f32)));
    debug!("{}", SEPARATOR);
    vectors.push_back(Vec3::default());
    debug!("{}", SEPARATOR);
    print_array(&vectors);
    vectors.clear();
    vectors.emplace_back(1.0f32);
    debug!("{}", SEPARATOR);
    vectors.pop_back();
    vectors.emplace_back((1.0f32, 2.0f32, 4.0f32));
    debug!("{}", SEPARATOR);
    print_array(&vectors);
    vectors
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use resarr_mem::{ArrayError, Insertion};

    use crate::vec3::census;

    use super::*;

    #[test]
    fn fixed_arrays_hold_their_values() {
        let (numbers, names) = fixed_arrays();
        assert_eq!(numbers.data(), &[1, 2, 3]);
        assert_eq!(names.size(), 2);
        assert_eq!(names[1].as_str(), "Lois");
        assert!(names.get(2).is_err());
    }

    #[test]
    fn names_grow_once_and_reject_index_seven() {
        let names = names();
        assert_eq!(names.len(), 4);
        assert_eq!(names.capacity(), 6);
        assert_eq!(names.stats().reallocations, 1);
        assert_eq!(names.last_insertion(), Some(Insertion::Copied));
        let listed: Vec<&str> = names.iter().map(CompactString::as_str).collect();
        assert_eq!(listed, vec!["Tom", "Hudson", "Lois", "Hudson"]);
        assert_eq!(names.get(7), Err(ArrayError::IndexOutOfBounds { index: 7, len: 4 }));
    }

    #[test]
    fn vectors_end_with_the_three_argument_value() {
        let before = census();
        let vectors = vectors();
        let after = census();
        assert_eq!(after.scalar - before.scalar, 2);
        assert_eq!(after.triple - before.triple, 2);
        assert_eq!(after.defaulted - before.defaulted, 1);
        assert_eq!(after.cloned, before.cloned);
        assert_eq!(after.dropped - before.dropped, 4);
        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors.capacity(), 3);
        assert_eq!(vectors.last_insertion(), Some(Insertion::Emplaced));
        let v = &vectors[0];
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 4.0));
    }
}
