//! Merge sort behavior on slices and copies

use dsakit::sorts::{merge_sort, merge_sort_copy};
use rstest::rstest;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![2, 1], vec![1, 2])]
#[case(vec![5, 2, 9, 1, 5, 6], vec![1, 2, 5, 5, 6, 9])]
#[case(vec![9, 8, 7, 6, 5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5, 6, 7, 8, 9])]
#[case(vec![3, 3, 3], vec![3, 3, 3])]
fn given_various_inputs_when_sorting_in_place_then_result_is_ascending(
    #[case] mut input: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    merge_sort(&mut input);
    assert_eq!(input, expected);
}

#[test]
fn given_a_slice_when_sorting_as_copy_then_source_is_untouched() {
    let source = vec![10, -3, 7, 0];
    let sorted = merge_sort_copy(&source);
    assert_eq!(sorted, vec![-3, 0, 7, 10]);
    assert_eq!(source, vec![10, -3, 7, 0]);
}

#[test]
fn given_non_power_of_two_lengths_when_sorting_then_tail_runs_merge_correctly() {
    // odd lengths exercise the clamped window boundaries
    for n in [3usize, 5, 7, 11, 13] {
        let mut values: Vec<i64> = (0..n as i64).rev().collect();
        merge_sort(&mut values);
        let expected: Vec<i64> = (0..n as i64).collect();
        assert_eq!(values, expected, "length {n}");
    }
}

#[test]
fn given_strings_when_sorting_then_lexicographic_order_applies() {
    let mut words = vec!["pear", "apple", "orange", "banana"];
    merge_sort(&mut words);
    assert_eq!(words, vec!["apple", "banana", "orange", "pear"]);
}
