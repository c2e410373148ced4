use std::vec;

use super::{list_of, values};
use crate::{
    error::ListError,
    linked_list::{cycle, list::SinglyLinkedList, traits::Link},
};

#[test]
fn test_reverse() {
    let mut list = list_of(4);
    list.reverse().unwrap();
    assert_eq!(values(&list), vec![3, 2, 1, 0]);
    assert_eq!(list.first(), Some(&3));
    assert_eq!(list.last(), Some(&0));

    let tail = list.node(list.element_at(3).unwrap()).unwrap();
    assert!(tail.next().is_none());
}

#[test]
fn test_reverse_small_lists() {
    let mut empty = SinglyLinkedList::<i32>::new();
    empty.reverse().unwrap();
    empty.reverse_recursively().unwrap();
    assert!(empty.is_empty());

    let mut single = list_of(1);
    single.reverse().unwrap();
    assert_eq!(values(&single), vec![0]);
    single.reverse_recursively().unwrap();
    assert_eq!(values(&single), vec![0]);
}

#[test]
fn test_reverse_recursively() {
    let mut list = list_of(5);
    list.reverse_recursively().unwrap();
    assert_eq!(values(&list), vec![4, 3, 2, 1, 0]);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_reverse_keeps_node_ids() {
    let mut list = list_of(3);
    let ids: Vec<_> = (0..3).map(|i| list.element_at(i).unwrap()).collect();
    list.reverse().unwrap();
    assert_eq!(list.head(), Some(ids[2]));
    assert_eq!(list.element_at(2), Ok(ids[0]));
}

#[test]
fn test_reverse_refuses_cycles() {
    let mut list = list_of(4);
    list.close_loop(1).unwrap();
    let head = list.head();

    assert_eq!(list.reverse(), Err(ListError::Cyclic));
    assert_eq!(list.reverse_recursively(), Err(ListError::Cyclic));
    assert_eq!(list.head(), head);
    assert!(cycle::loop_detect(&list));

    assert!(list.remove_loop());
    list.reverse().unwrap();
    assert_eq!(values(&list), vec![3, 2, 1, 0]);
}

#[test]
fn test_mutations_after_reverse() {
    let mut list = list_of(3);
    list.reverse().unwrap();
    list.add_last(10);
    list.add_front(20);
    assert_eq!(values(&list), vec![20, 2, 1, 0, 10]);
    assert_eq!(list.remove_at(4), Ok(10));
    assert_eq!(values(&list), vec![20, 2, 1, 0]);
}
