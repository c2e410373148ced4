extern crate std;

use std::vec::Vec;

use super::list::SinglyLinkedList;

mod mutation;
mod reverse;

fn values<T: Copy>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().copied().collect()
}

fn list_of(len: usize) -> SinglyLinkedList<usize> {
    (0..len).collect()
}
