use std::vec;

use super::{list_of, values};
use crate::{error::ListError, linked_list::list::SinglyLinkedList};

#[test]
fn test_add_front_builds_in_reverse() {
    let mut list = SinglyLinkedList::new();
    for value in [4, 3, 2, 1] {
        list.add_front(value);
    }
    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_add_front_updates_first() {
    let mut list = list_of(3);
    list.add_front(42);
    assert_eq!(list.first(), Some(&42));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_add_last() {
    let mut list = SinglyLinkedList::new();
    let id = list.add_last(1);
    assert_eq!(list.head(), Some(id));
    list.add_last(2);
    let id = list.add_last(3);
    assert_eq!(list.element_at(2), Ok(id));
    assert_eq!(list.last(), Some(&3));
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_add_after() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let id = list.add_after(99, 1).unwrap();
    assert_eq!(values(&list), vec![1, 2, 99, 3]);
    assert_eq!(list.element_at(2), Ok(id));
    assert_eq!(list.len(), 4);

    list.add_after(100, 3).unwrap();
    assert_eq!(values(&list), vec![1, 2, 99, 3, 100]);
}

#[test]
fn test_add_after_out_of_range() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(
        list.add_after(9, 3),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(values(&list), vec![1, 2, 3]);

    let mut empty = SinglyLinkedList::new();
    assert!(empty.add_after(1, 0).is_err());
    assert!(empty.is_empty());
}

#[test]
fn test_remove_by_value() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3, 2].into_iter().collect();

    // Remove middle
    assert!(list.remove(&2));
    assert_eq!(values(&list), vec![1, 3, 2]);

    // Remove head
    assert!(list.remove(&1));
    assert_eq!(values(&list), vec![3, 2]);
    assert_eq!(list.first(), Some(&3));

    // Remove tail
    assert!(list.remove(&2));
    assert_eq!(values(&list), vec![3]);
    assert_eq!(list.len(), 1);

    assert!(list.remove(&3));
    assert!(list.is_empty());
    assert!(list.head().is_none());
}

#[test]
fn test_remove_missing_value() {
    let mut list = list_of(3);
    assert!(!list.remove(&7));
    assert_eq!(list.len(), 3);
    assert_eq!(values(&list), vec![0, 1, 2]);

    let mut empty = SinglyLinkedList::<usize>::new();
    assert!(!empty.remove(&0));
}

#[test]
fn test_remove_at() {
    let mut list = list_of(5);
    assert_eq!(list.remove_at(0), Ok(0));
    assert_eq!(list.remove_at(3), Ok(4));
    assert_eq!(list.remove_at(1), Ok(2));
    assert_eq!(values(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.remove_at(2),
        Err(ListError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(values(&list), vec![1, 3]);
}

#[test]
fn test_removed_ids_become_stale() {
    let mut list = list_of(3);
    let middle = list.element_at(1).unwrap();
    list.remove_at(1).unwrap();
    assert!(list.node(middle).is_none());

    // The freed slot is reused under a new id.
    let fresh = list.add_front(9);
    assert_eq!(fresh.slot(), middle.slot());
    assert_ne!(fresh, middle);
    assert_eq!(list.set_next(middle, None), Err(ListError::StaleNode(middle)));
}

#[test]
fn test_pop_front_and_clear() {
    let mut list = list_of(3);
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.len(), 2);

    let head = list.head().unwrap();
    list.clear();
    assert!(list.is_empty());
    assert!(list.node(head).is_none());
    assert_eq!(list.pop_front(), None);

    list.add_last(7);
    assert_eq!(values(&list), vec![7]);
}

#[test]
fn test_extend() {
    let mut list = list_of(2);
    list.extend([2, 3]);
    assert_eq!(values(&list), vec![0, 1, 2, 3]);

    let mut empty = SinglyLinkedList::with_capacity(4);
    empty.extend([5, 6]);
    assert_eq!(values(&empty), vec![5, 6]);
}
