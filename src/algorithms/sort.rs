//! Classic comparison sorts.
//!
//! Every sort works in place on a mutable slice. Bubble, insertion and merge
//! sort are stable; heap and quick sort are not required to be.

use std::cmp::Ordering;
use std::fmt;

/// Sorting algorithms available for comparison runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Merge,
    Quick,
    Insertion,
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in the order reports list them.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Insertion,
        SortAlgorithm::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `values` in place with this algorithm.
    pub fn sort<T: Ord + Clone>(&self, values: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bubble sort with early exit once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    bubble_sort_by(values, T::cmp);
}

/// Bubble sort ordered by a key extracted from each element.
pub fn bubble_sort_by_key<T, K, F>(values: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    bubble_sort_by(values, |a, b| key(a).cmp(&key(b)));
}

fn bubble_sort_by<T, F>(values: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = values.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if compare(&values[j], &values[j + 1]) == Ordering::Greater {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Top-down merge sort. Stable.
pub fn merge_sort<T: Ord + Clone>(values: &mut [T]) {
    merge_sort_by(values, &mut T::cmp);
}

/// Merge sort ordered by a key extracted from each element. Stable.
pub fn merge_sort_by_key<T, K, F>(values: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(values, &mut |a: &T, b: &T| key(a).cmp(&key(b)));
}

fn merge_sort_by<T, F>(values: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() <= 1 {
        return;
    }

    let mid = values.len() / 2;
    merge_sort_by(&mut values[..mid], compare);
    merge_sort_by(&mut values[mid..], compare);

    let left = values[..mid].to_vec();
    let right = values[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in values.iter_mut() {
        // Ties take from the left run to keep equal elements in order
        let take_left = j >= right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort with a middle-element pivot and a three-way partition.
pub fn quick_sort<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    let pivot = values[values.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for value in values.iter() {
        match value.cmp(&pivot) {
            Ordering::Less => less.push(value.clone()),
            Ordering::Equal => equal.push(value.clone()),
            Ordering::Greater => greater.push(value.clone()),
        }
    }

    quick_sort(&mut less);
    quick_sort(&mut greater);

    for (slot, value) in values
        .iter_mut()
        .zip(less.into_iter().chain(equal).chain(greater))
    {
        *slot = value;
    }
}

/// Insertion sort by adjacent swaps. Stable.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Heap sort over an implicit max-heap.
pub fn heap_sort<T: Ord>(values: &mut [T]) {
    let len = values.len();
    for root in (0..len / 2).rev() {
        sift_down(values, root, len);
    }
    for end in (1..len).rev() {
        values.swap(0, end);
        sift_down(values, 0, end);
    }
}

fn sift_down<T: Ord>(values: &mut [T], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        values.swap(root, largest);
        root = largest;
    }
}
