use std::mem;

/// Exchanges the values behind `a` and `b`.
///
/// Rust won't let a value be moved out from behind a `&mut` and leave a hole, which rules out the
/// usual `let tmp = *a; *a = *b; *b = tmp;` for anything that isn't [`Copy`]. [`mem::swap`] does
/// the same thing without ever leaving either reference pointing at a moved-from value.
///
/// Two `&mut` to the same place can't exist at once, so there's no aliasing case to handle either.
pub fn swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// The same exchange written out with a temporary, for types where that's allowed.
pub fn swap_copied<T: Copy>(a: &mut T, b: &mut T) {
    let tmp = *a;
    *a = *b;
    *b = tmp;
}
