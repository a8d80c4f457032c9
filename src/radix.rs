//! Stable LSD radix sorter over fixed-width and byte-string keys.
//! --------------------------------------------------------------
//! Every pass is a counting sort, which preserves input order within equal
//! buckets, so each whole-key sort is stable by construction. Passes permute
//! an index vector; column data is never moved.
//!
//! Scalar keys run eight byte passes least-significant first, skipping any
//! pass whose byte is identical across all keys (the common case for small
//! integer ranges). Byte-string keys run one pass per byte position from the
//! last position of the longest key towards the front, over a 257-symbol
//! alphabet: positions past a key's end take a sentinel symbol that sorts
//! before every real byte, so a key that is a proper prefix of another sorts
//! first. Complemented (descending) keys use the opposite sentinel side.
//!
//! A final three-bucket pass applies the rank digit (missing-first /
//! present / missing-last) as the most significant position.
//!
//! Time is O(N * key_width), auxiliary space O(N + alphabet); there is no
//! recursion and no adversarial worst case.

/// Sort `perm` ascending by the fixed-width keys, then apply the rank digit.
/// `keys` and `ranks` are indexed by row position, `perm` by output slot.
pub fn sort_scalar(perm: &mut Vec<u32>, keys: &[u64], ranks: &[u8]) {
    let n = perm.len();
    if n > 1 {
        let mut next = vec![0u32; n];
        for shift in (0..64u32).step_by(8) {
            let byte_of = |row: u32| ((keys[row as usize] >> shift) & 0xFF) as usize;
            counting_pass(perm, &mut next, 256, byte_of);
        }
        rank_pass(perm, &mut next, ranks);
    }
}

/// Sort `perm` ascending by variable-length byte keys, then apply the rank
/// digit. `complemented` marks keys already bitwise-inverted for descending
/// order, which moves the end-of-key sentinel to the high end of the
/// alphabet so that extensions precede their prefixes.
pub fn sort_text(perm: &mut Vec<u32>, keys: &[Vec<u8>], ranks: &[u8], complemented: bool) {
    let n = perm.len();
    if n > 1 {
        let width = keys.iter().map(|k| k.len()).max().unwrap_or(0);
        let mut next = vec![0u32; n];
        for pos in (0..width).rev() {
            let symbol_of = |row: u32| match keys[row as usize].get(pos) {
                Some(&b) if complemented => b as usize,
                Some(&b) => b as usize + 1,
                None if complemented => 256,
                None => 0,
            };
            counting_pass(perm, &mut next, 257, symbol_of);
        }
        rank_pass(perm, &mut next, ranks);
    }
}

/// One stable counting-sort pass over `alphabet` symbols. Skips the scatter
/// when every key shares the same symbol at this position.
fn counting_pass(
    perm: &mut Vec<u32>,
    scratch: &mut Vec<u32>,
    alphabet: usize,
    symbol_of: impl Fn(u32) -> usize,
) {
    let n = perm.len();
    let mut counts = vec![0usize; alphabet];
    for &row in perm.iter() {
        counts[symbol_of(row)] += 1;
    }
    if counts.iter().any(|&c| c == n) {
        return;
    }
    // exclusive prefix sums become scatter offsets
    let mut total = 0usize;
    for c in counts.iter_mut() {
        let here = *c;
        *c = total;
        total += here;
    }
    for &row in perm.iter() {
        let s = symbol_of(row);
        scratch[counts[s]] = row;
        counts[s] += 1;
    }
    std::mem::swap(perm, scratch);
}

/// Most-significant pass over the three rank buckets. Present rows keep the
/// order established by the value passes; missing rows move to whichever end
/// their placement dictates.
fn rank_pass(perm: &mut Vec<u32>, scratch: &mut Vec<u32>, ranks: &[u8]) {
    counting_pass(perm, scratch, 3, |row| ranks[row as usize] as usize);
}

#[cfg(test)]
#[path = "radix_tests.rs"]
mod radix_tests;
