#![cfg(test)]

use super::*;
use crate::util::drop::CountedDrop;

#[test]
fn test_add_and_insert() {
    let mut arr: Box<[u32]> = Box::new([]);
    arr.add_element(2);
    arr.insert_element(0, 0).unwrap();
    arr.insert_element(1, 1).unwrap();
    arr.insert_element(3, 3).unwrap();

    assert_eq!(&*arr, &[0, 1, 2, 3]);
    assert_eq!(arr.len(), 4, "The array should be sized exactly to its contents.");
}

#[test]
fn test_insert_out_of_bounds() {
    let mut arr: Box<[u32]> = Box::new([1, 2]);

    assert_eq!(
        arr.insert_element(9, 3),
        Err(IndexOutOfBounds { index: 3, len: 2 }),
        "Inserting past the end should be rejected."
    );
    assert_eq!(&*arr, &[1, 2], "A rejected insertion should leave the array unchanged.");
}

#[test]
fn test_remove_first_match() {
    let mut arr: Box<[&str]> = Box::new(["a", "b", "a", "c"]);

    assert!(arr.remove_element(&"a"));
    assert_eq!(&*arr, &["b", "a", "c"], "Only the first match should be removed.");
    assert!(!arr.remove_element(&"z"));
    assert_eq!(arr.len(), 3);

    assert_eq!(arr.index_of(&"c"), Some(2));
    assert_eq!(arr.index_of(&"z"), None);
    assert!(arr.contains_element(&"b"), "A remaining element should be found.");
    assert!(!arr.contains_element(&"z"));
    assert!(
        arr.contains_element(&"a"),
        "The second match should survive removal of the first."
    );

    let mut single: Box<[&str]> = Box::new(["only"]);
    assert!(single.remove_element(&"only"));
    assert!(single.is_empty());
}

#[test]
fn test_elements_are_moved() {
    let counter = CountedDrop::new();
    let mut arr: Box<[CountedDrop]> = Box::new([counter.clone(), counter.clone()]);

    arr.add_element(counter.clone());
    arr.insert_element(counter.clone(), 1).unwrap();
    assert_eq!(counter.take(), 0, "Resizing shouldn't drop any elements.");

    drop(arr);
    assert_eq!(counter.take(), 4, "Every element should be dropped exactly once.");
}
