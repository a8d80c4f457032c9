//! Built-in collation with per-language tailorings.
//!
//! Keys carry two levels. The primary level holds one or more weights per
//! character: the folded base letter for untailored characters, or the
//! tailored position (Spanish ñ between n and o, German umlaut expansion,
//! Swedish/Finnish å ä ö after z, Turkish dotless i). The secondary level
//! holds one case byte per character, uppercase before lowercase, so that
//! case only breaks ties the primary level leaves.
//!
//! Weights are emitted length-prefixed (first byte `0x04..=0x07`, then the
//! significant big-endian bytes) so that any weight byte sorts above the
//! level separator `0x01`; a string that is a prefix of another therefore
//! compares below its extension at every level.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use super::{Collator, LocaleId};
use crate::error::OrderError;

/// Gap between base letters in the primary weight space, leaving room for
/// tailored insertions such as ñ between n and o.
const WEIGHT_STRIDE: u32 = 8;

const LEVEL_SEPARATOR: u8 = 0x01;
const CASE_UPPER: u8 = 0x02;
const CASE_LOWER: u8 = 0x03;

/// Deterministic, dependency-free collator with common European tailorings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailoredCollator;

impl Collator for TailoredCollator {
    fn key(&self, text: &str, locale: &LocaleId) -> Result<Vec<u8>, OrderError> {
        let mut out = Vec::with_capacity(text.len() * 3 + 1);
        for ch in text.chars() {
            for w in char_weights(ch, &locale.language) {
                push_weight(&mut out, w);
            }
        }
        out.push(LEVEL_SEPARATOR);
        for ch in text.chars() {
            out.push(if ch.is_uppercase() { CASE_UPPER } else { CASE_LOWER });
        }
        Ok(out)
    }
}

/// Emit a primary weight as a length byte (`0x04` + extra bytes) followed by
/// its significant big-endian bytes. Larger values never get a shorter
/// encoding, so byte-wise comparison of encodings matches numeric order.
fn push_weight(out: &mut Vec<u8>, w: u32) {
    let be = w.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count().min(3);
    out.push(0x04 + (3 - skip) as u8);
    out.extend_from_slice(&be[skip..]);
}

/// Primary weight(s) for one character under a language's tailoring.
fn char_weights(ch: char, lang: &str) -> Vec<u32> {
    match lang {
        "de" => match ch {
            'ä' | 'Ä' => vec![base_weight('a'), base_weight('e')],
            'ö' | 'Ö' => vec![base_weight('o'), base_weight('e')],
            'ü' | 'Ü' => vec![base_weight('u'), base_weight('e')],
            'ß' => vec![base_weight('s'), base_weight('s')],
            _ => vec![default_weight(ch)],
        },
        "sv" | "fi" => match ch {
            // å, ä, ö are distinct letters sorting after z
            'å' | 'Å' => vec![base_weight('z') + 2],
            'ä' | 'Ä' => vec![base_weight('z') + 4],
            'ö' | 'Ö' => vec![base_weight('z') + 6],
            _ => vec![default_weight(ch)],
        },
        "tr" | "az" => match ch {
            'ı' | 'İ' | 'i' => vec![base_weight('i')],
            // plain I sorts after the dotless/dotted i group
            'I' => vec![base_weight('i') + 4],
            _ => vec![default_weight(ch)],
        },
        "es" => match ch {
            // ñ is its own letter between n and o
            'ñ' | 'Ñ' => vec![base_weight('n') + 4],
            _ => vec![default_weight(ch)],
        },
        _ => vec![default_weight(ch)],
    }
}

/// Weight for an untailored character: folded to its lowercase base letter,
/// accent-insensitive at the primary level.
fn default_weight(ch: char) -> u32 {
    base_weight(strip_diacritic(ch))
}

fn base_weight(ch: char) -> u32 {
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    u32::from(lower) * WEIGHT_STRIDE
}

/// Return the base character with combining marks removed, via canonical
/// (NFD) decomposition. Characters that do not decompose pass through.
fn strip_diacritic(ch: char) -> char {
    let mut base = None;
    decompose_canonical(ch, |c| {
        if base.is_none() && !is_combining_mark(c) {
            base = Some(c);
        }
    });
    base.unwrap_or(ch)
}
