#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn rendered(list: &IntLinkedList) -> String {
    list.to_string()
}

#[test]
fn test_add_delete_scenario() {
    let mut list = IntLinkedList::new();
    list.add(10);
    list.add(20);
    list.add(30);
    assert_eq!(rendered(&list), "10 -> 20 -> 30 -> nil");

    assert_eq!(list.delete(&20), Some(20));
    assert_eq!(
        rendered(&list), "10 -> 30 -> nil",
        "Deleting a middle value should relink its neighbours."
    );
    assert_eq!(list.len(), 2);
}

#[test]
fn test_empty_rendering() {
    let list = IntLinkedList::new();
    assert_eq!(rendered(&list), "nil");
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_add_preserves_order() {
    let mut list = IntLinkedList::new();
    for i in 1..=5 {
        list.add(i * 11);
    }

    assert_eq!(rendered(&list), "11 -> 22 -> 33 -> 44 -> 55 -> nil");
    assert_eq!(list.len(), 5);
    assert_eq!(list.front(), Some(&11));
    assert_eq!(list.back(), Some(&55));
}

#[test]
fn test_delete_absent_is_noop() {
    let mut list: IntLinkedList = [4, 8, 15, 16, 23, 42].into_iter().collect();
    let before = rendered(&list);

    assert_eq!(list.delete(&7), None);
    assert_eq!(
        rendered(&list), before,
        "Deleting an absent value should leave the list untouched."
    );
    assert_eq!(list.len(), 6);

    let mut empty = IntLinkedList::new();
    assert_eq!(empty.delete(&7), None);
    assert_eq!(rendered(&empty), "nil");
}

#[test]
fn test_delete_head_and_tail() {
    let mut list: IntLinkedList = [1, 2, 3].into_iter().collect();

    list.delete(&1);
    assert_eq!(rendered(&list), "2 -> 3 -> nil", "The second node should become the head.");
    assert_eq!(list.front(), Some(&2));

    list.delete(&3);
    assert_eq!(rendered(&list), "2 -> nil");

    list.delete(&2);
    assert_eq!(rendered(&list), "nil");
    assert!(list.is_empty());

    list.add(9);
    assert_eq!(rendered(&list), "9 -> nil", "An emptied list should accept new values.");
}

#[test]
fn test_delete_first_duplicate_only() {
    let mut list: IntLinkedList = [5, 1, 5, 2, 5].into_iter().collect();

    list.delete(&5);
    assert_eq!(
        rendered(&list), "1 -> 5 -> 2 -> 5 -> nil",
        "Only the first matching node should be removed."
    );

    assert_eq!(list.delete_all(&5), 2);
    assert_eq!(rendered(&list), "1 -> 2 -> nil");
    assert_eq!(list.len(), 2);
    assert_eq!(list.delete_all(&5), 0);
}

#[test]
fn test_delete_everything_in_any_order() {
    let values = [3, 1, 4, 1, 5, 9, 2, 6];
    let orders: [&[i64]; 3] = [
        &[3, 1, 4, 1, 5, 9, 2, 6],
        &[6, 2, 9, 5, 1, 4, 1, 3],
        &[5, 1, 6, 3, 9, 1, 2, 4],
    ];

    for order in orders {
        let mut list: IntLinkedList = values.into_iter().collect();
        for value in order {
            let before = list.len();
            assert_eq!(list.delete(value), Some(*value));
            assert_eq!(list.len(), before - 1);
            assert_eq!(list.iter().count(), list.len());
        }
        assert_eq!(rendered(&list), "nil");
    }
}

#[test]
fn test_push_pop_front() {
    let mut list = IntLinkedList::new();
    list.push_front(2);
    list.push_front(1);
    list.add(3);

    assert_eq!(rendered(&list), "1 -> 2 -> 3 -> nil");
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_indexing() {
    let mut list: IntLinkedList = (0..5).map(|i| i * 2).collect();

    assert_eq!(list[0], 0);
    assert_eq!(list[4], 8);
    assert_eq!(list.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));

    list[2] = 100;
    *list.get_mut(3) += 1;
    assert_eq!(rendered(&list), "0 -> 2 -> 100 -> 7 -> 8 -> nil");

    assert_eq!(list.index_of(&100), Some(2));
    assert_eq!(list.index_of(&3), None);
    assert!(list.contains(&8));
    assert!(!list.contains(&9));

    assert_panics!({
        let list: IntLinkedList = (0..5).collect();
        list.get(5);
    });
}

#[test]
fn test_iterators() {
    let mut list: IntLinkedList = (1..=4).collect();

    let iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.clone().sum::<i64>(), 10);

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(rendered(&list), "10 -> 20 -> 30 -> 40 -> nil");

    let mut owned = list.into_iter();
    assert_eq!(owned.next(), Some(10));
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.collect::<Vec<_>>(), [20, 30, 40]);
}

#[test]
fn test_extend_and_clone() {
    let mut list: IntLinkedList = [1, 2].into_iter().collect();
    list.extend([3, 4]);
    assert_eq!(list.len(), 4);
    assert_eq!(rendered(&list), "1 -> 2 -> 3 -> 4 -> nil");

    let mut copy = list.clone();
    assert_eq!(copy, list);

    copy.delete(&3);
    assert_ne!(copy, list, "A clone should not share nodes with the original.");
    assert_eq!(rendered(&list), "1 -> 2 -> 3 -> 4 -> nil");

    assert_eq!(format!("{list:?}"), "[1, 2, 3, 4]");
}

#[test]
fn test_generic_values() {
    let mut list: LinkedList<&str> = ["ab", "cd"].into_iter().collect();
    list.add("ef");
    list.delete(&"ab");
    assert_eq!(list.to_string(), "cd -> ef -> nil");
}

#[test]
fn test_nodes_dropped_once() {
    let drops = Rc::new(Cell::new(0));
    let mut list = LinkedList::new();
    for id in 0..5 {
        list.add(CountedDrop::new(id, &drops));
    }

    let removed = list.delete(&CountedDrop::new(2, &drops));
    // The temporary used as the search key is dropped immediately.
    assert_eq!(drops.get(), 1);
    assert_eq!(removed.map(|value| value.id), Some(2));
    assert_eq!(drops.get(), 2, "The removed value is dropped once its owner is done with it.");

    list.delete(&CountedDrop::new(7, &drops));
    assert_eq!(drops.get(), 3, "A failed delete shouldn't drop anything from the list.");
    assert_eq!(list.len(), 4);

    drop(list);
    assert_eq!(drops.get(), 7, "Dropping the list should drop every remaining node.");

    let mut list: LinkedList<_> = (0..3).map(|id| CountedDrop::new(id, &drops)).collect();
    list.clear();
    assert_eq!(drops.get(), 10);
    assert!(list.is_empty());
}

#[test]
fn test_long_list_drop() {
    let list: IntLinkedList = (0..1_000_000).collect();
    assert_eq!(list.len(), 1_000_000);
    drop(list);
}
