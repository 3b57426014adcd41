/// Resolves an array index, counting negative indices from the end.
///
/// ## Parameters
/// - `index`: The index as given by the program.
/// - `len`: Length of the array being indexed.
///
/// ## Returns
/// - `Some(usize)`: The position inside the array.
/// - `None`: If the index is outside the array in either direction.
///
/// ## Example
/// ```
/// use stacko::util::num::resolve_index;
///
/// assert_eq!(resolve_index(1, 3), Some(1));
/// assert_eq!(resolve_index(-1, 3), Some(2));
/// assert_eq!(resolve_index(3, 3), None);
/// assert_eq!(resolve_index(-4, 3), None);
/// ```
#[must_use]
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(index).ok()?
    };

    (position < len).then_some(position)
}

/// Converts a program-supplied exit code to the `i32` the host expects.
///
/// ## Returns
/// - `Some(i32)`: If the code fits.
/// - `None`: Otherwise.
#[must_use]
pub fn exit_code_checked(code: i64) -> Option<i32> {
    i32::try_from(code).ok()
}
