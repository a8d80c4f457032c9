use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::keys::{int_key, RANK_MISSING_FIRST, RANK_MISSING_LAST, RANK_PRESENT};

fn identity(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn all_present(n: usize) -> Vec<u8> {
    vec![RANK_PRESENT; n]
}

#[test]
fn scalar_sorts_ascending_byte_wise() {
    let values: Vec<i64> = vec![300, -7, 0, 255, -7, 1 << 40];
    let keys: Vec<u64> = values.iter().map(|&v| int_key(v)).collect();
    let mut perm = identity(keys.len());
    sort_scalar(&mut perm, &keys, &all_present(keys.len()));
    let sorted: Vec<i64> = perm.iter().map(|&i| values[i as usize]).collect();
    assert_eq!(sorted, vec![-7, -7, 0, 255, 300, 1 << 40]);
}

#[test]
fn scalar_is_stable_on_ties() {
    // rows 0..6 with only two distinct keys; equal keys must keep row order
    let keys: Vec<u64> = vec![5, 9, 5, 9, 5, 5];
    let mut perm = identity(6);
    sort_scalar(&mut perm, &keys, &all_present(6));
    assert_eq!(perm, vec![0, 2, 4, 5, 1, 3]);
}

#[test]
fn uniform_keys_leave_order_untouched() {
    let keys = vec![42u64; 5];
    let mut perm = vec![3, 1, 4, 0, 2]; // prior pass order must survive
    sort_scalar(&mut perm, &keys, &all_present(5));
    assert_eq!(perm, vec![3, 1, 4, 0, 2]);
}

#[test]
fn scalar_matches_comparison_sort_on_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    for &n in &[1usize, 2, 17, 1000] {
        let keys: Vec<u64> = (0..n).map(|_| rng.gen::<u64>() >> rng.gen_range(0..48)).collect();
        let mut perm = identity(n);
        sort_scalar(&mut perm, &keys, &all_present(n));
        let mut expected = identity(n);
        expected.sort_by_key(|&i| keys[i as usize]);
        assert_eq!(perm, expected, "n={n}");
    }
}

#[test]
fn text_prefix_sorts_before_extension() {
    let keys: Vec<Vec<u8>> = vec![b"abc".to_vec(), b"ab".to_vec(), b"abd".to_vec(), vec![]];
    let mut perm = identity(4);
    sort_text(&mut perm, &keys, &all_present(4), false);
    assert_eq!(perm, vec![3, 1, 0, 2]);
}

#[test]
fn complemented_text_reverses_value_order() {
    let originals: Vec<&[u8]> = vec![b"ab", b"abc", b"b", b"a"];
    let keys: Vec<Vec<u8>> = originals
        .iter()
        .map(|k| k.iter().map(|&b| !b).collect())
        .collect();
    let mut perm = identity(4);
    sort_text(&mut perm, &keys, &all_present(4), true);
    let sorted: Vec<&[u8]> = perm.iter().map(|&i| originals[i as usize]).collect();
    // exact reverse of ascending order: b, abc, ab, a
    assert_eq!(sorted, vec![&b"b"[..], b"abc", b"ab", b"a"]);
}

#[test]
fn rank_digit_moves_missing_to_the_requested_end() {
    let keys: Vec<u64> = vec![int_key(5), 0, int_key(3)];

    let mut perm = identity(3);
    let last = vec![RANK_PRESENT, RANK_MISSING_LAST, RANK_PRESENT];
    sort_scalar(&mut perm, &keys, &last);
    assert_eq!(perm, vec![2, 0, 1]); // 3, 5, missing

    let mut perm = identity(3);
    let first = vec![RANK_PRESENT, RANK_MISSING_FIRST, RANK_PRESENT];
    sort_scalar(&mut perm, &keys, &first);
    assert_eq!(perm, vec![1, 2, 0]); // missing, 3, 5
}

#[test]
fn ties_across_missing_rows_stay_stable() {
    // two missing rows keep their relative order at either end
    let keys = vec![0u64, 7, 0, 7];
    let ranks = vec![RANK_MISSING_LAST, RANK_PRESENT, RANK_MISSING_LAST, RANK_PRESENT];
    let mut perm = identity(4);
    sort_scalar(&mut perm, &keys, &ranks);
    assert_eq!(perm, vec![1, 3, 0, 2]);
}

#[test]
fn text_matches_comparison_sort_on_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0002);
    let mut keys: Vec<Vec<u8>> = Vec::new();
    for _ in 0..500 {
        let len = rng.gen_range(0..12);
        keys.push((0..len).map(|_| rng.gen::<u8>()).collect());
    }
    let n = keys.len();
    let mut perm = identity(n);
    sort_text(&mut perm, &keys, &all_present(n), false);
    let mut expected = identity(n);
    expected.sort_by(|&a, &b| keys[a as usize].cmp(&keys[b as usize]));
    assert_eq!(perm, expected);
}
