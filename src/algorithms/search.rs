//! Sequential search.

/// Scan `values` front to back for `target`.
///
/// # Returns
/// Zero-based index of the first match, or `None` if absent
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    let mut index = 0;
    while index < values.len() {
        if &values[index] == target {
            return Some(index);
        }
        index += 1;
    }
    None
}
