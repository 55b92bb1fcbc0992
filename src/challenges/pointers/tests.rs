#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_swap() {
    let (mut a, mut b) = (5, 10);
    swap(&mut a, &mut b);
    assert_eq!((a, b), (10, 5));

    swap_copied(&mut a, &mut b);
    assert_eq!((a, b), (5, 10));

    let mut first = String::from("first");
    let mut second = String::from("second");
    swap(&mut first, &mut second);
    assert_eq!(first, "second", "Non-Copy values should be swappable too.");
    assert_eq!(second, "first");
}

#[test]
fn test_double_array() {
    let mut arr = [1, 2, 3, 4, 5];
    double_array(&mut arr);
    assert_eq!(arr, [2, 4, 6, 8, 10]);

    let mut arr = [-3, 0, i64::MAX / 2];
    assert_eq!(try_double_array(&mut arr), Ok(()));
    assert_eq!(arr, [-6, 0, i64::MAX - 1]);

    let mut empty: [i64; 0] = [];
    double_array(&mut empty);
}

#[test]
fn test_double_overflow() {
    let mut arr = [1, 2, i64::MAX, i64::MIN];
    assert_eq!(
        try_double_array(&mut arr),
        Err(DoubleOverflow { index: 2, value: i64::MAX })
    );
    assert_eq!(
        arr, [1, 2, i64::MAX, i64::MIN],
        "An overflow should leave every element unmodified."
    );

    assert_panics!({
        let mut arr = [i64::MIN / 2 - 1];
        double_array(&mut arr);
    });
}
