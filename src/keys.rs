//! Column key extraction.
//! ----------------------
//! Converts one column's values into radix-sortable keys. Scalar kinds map
//! to a fixed-width `u64` whose byte-wise ascending order equals value
//! order; text delegates to the collation transform and yields
//! variable-length byte keys.
//!
//! Missingness travels out of band: every row gets a rank digit (0 =
//! missing-first, 1 = present, 2 = missing-last) that the sorter applies as
//! the most significant pass. Keeping it out of the value key means the
//! extremal position for missing values can never collide with a legitimate
//! key, even for full-range integers.
//!
//! Descending direction complements the value key (bitwise for scalars,
//! per byte for text) instead of reversing comparison logic, so the sorter
//! always works ascending byte-wise. The rank digit is never complemented:
//! missing placement is explicit, not direction-relative.

use crate::error::OrderError;
use crate::request::{Direction, MissingPlacement, OrderSpec};
use crate::table::{Column, ColumnData};

const SIGN_BIT: u64 = 1 << 63;

pub const RANK_MISSING_FIRST: u8 = 0;
pub const RANK_PRESENT: u8 = 1;
pub const RANK_MISSING_LAST: u8 = 2;

/// Per-row keys for one column, ready for a single sorter pass.
#[derive(Debug)]
pub enum ColumnKeys {
    Scalar { values: Vec<u64>, ranks: Vec<u8> },
    Bytes { values: Vec<Vec<u8>>, ranks: Vec<u8> },
}

/// Producer of collation keys for the text path. The engine supplies a raw
/// UTF-8 closure for the `"C"` locale and a collator-backed, cache-aware
/// closure for named locales.
pub type TextKeyFn<'a> = dyn FnMut(&str) -> Result<Vec<u8>, OrderError> + 'a;

/// Map an `i64` to a `u64` whose unsigned order equals signed order.
#[inline]
pub fn int_key(v: i64) -> u64 {
    (v as u64) ^ SIGN_BIT
}

/// Map an `f64` to a `u64` whose unsigned order equals IEEE total order
/// (negative NaNs first, positive NaNs last).
#[inline]
pub fn real_key(v: f64) -> u64 {
    let bits = v.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits | SIGN_BIT
    }
}

#[inline]
fn rank_of(present: bool, missing: MissingPlacement) -> u8 {
    if present {
        RANK_PRESENT
    } else {
        match missing {
            MissingPlacement::First => RANK_MISSING_FIRST,
            MissingPlacement::Last => RANK_MISSING_LAST,
        }
    }
}

/// Extract one key per row for `column` under `spec`.
///
/// `text_key` is only invoked for present text values; other kinds never
/// touch the collation transform.
pub fn extract(
    column: &Column,
    spec: &OrderSpec,
    text_key: &mut TextKeyFn<'_>,
) -> Result<ColumnKeys, OrderError> {
    let descending = spec.direction == Direction::Descending;
    match column.data() {
        ColumnData::Int(values) => Ok(scalar_keys(values, spec, descending, |v| int_key(*v))),
        ColumnData::Real(values) => Ok(scalar_keys(values, spec, descending, |v| real_key(*v))),
        ColumnData::Bool(values) => Ok(scalar_keys(values, spec, descending, |v| *v as u64)),
        ColumnData::Categorical { levels, codes } => {
            // level rank is the sort order; out-of-range codes count as missing
            let n_levels = levels.len() as u32;
            let mut keys = Vec::with_capacity(codes.len());
            let mut ranks = Vec::with_capacity(codes.len());
            for code in codes {
                match code {
                    Some(c) if *c < n_levels => {
                        let k = u64::from(*c);
                        keys.push(if descending { !k } else { k });
                        ranks.push(RANK_PRESENT);
                    }
                    _ => {
                        keys.push(0);
                        ranks.push(rank_of(false, spec.missing));
                    }
                }
            }
            Ok(ColumnKeys::Scalar { values: keys, ranks })
        }
        ColumnData::Text(values) => {
            let mut keys = Vec::with_capacity(values.len());
            let mut ranks = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Some(text) => {
                        let mut key = text_key(text)?;
                        if descending {
                            for b in &mut key {
                                *b = !*b;
                            }
                        }
                        keys.push(key);
                        ranks.push(RANK_PRESENT);
                    }
                    None => {
                        keys.push(Vec::new());
                        ranks.push(rank_of(false, spec.missing));
                    }
                }
            }
            Ok(ColumnKeys::Bytes { values: keys, ranks })
        }
        ColumnData::Complex(_) => Err(OrderError::unsupported(column.name())),
    }
}

fn scalar_keys<T>(
    values: &[Option<T>],
    spec: &OrderSpec,
    descending: bool,
    encode: impl Fn(&T) -> u64,
) -> ColumnKeys {
    let mut keys = Vec::with_capacity(values.len());
    let mut ranks = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(v) => {
                let k = encode(v);
                keys.push(if descending { !k } else { k });
                ranks.push(RANK_PRESENT);
            }
            None => {
                keys.push(0);
                ranks.push(rank_of(false, spec.missing));
            }
        }
    }
    ColumnKeys::Scalar { values: keys, ranks }
}

/// Raw UTF-8 bytes: the `"C"` locale collation key.
pub fn c_locale_key(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_key_preserves_signed_order() {
        let samples = [i64::MIN, -5, -1, 0, 1, 42, i64::MAX];
        for w in samples.windows(2) {
            assert!(int_key(w[0]) < int_key(w[1]));
        }
    }

    #[test]
    fn real_key_preserves_ieee_order() {
        let samples = [
            f64::NEG_INFINITY,
            -1e300,
            -1.5,
            -0.0,
            0.0,
            1e-300,
            2.5,
            f64::INFINITY,
        ];
        for w in samples.windows(2) {
            assert!(
                real_key(w[0]) <= real_key(w[1]),
                "{} !<= {}",
                w[0],
                w[1]
            );
        }
        // -0.0 and 0.0 are distinct keys under total order
        assert!(real_key(-0.0) < real_key(0.0));
        assert!(real_key(f64::INFINITY) < real_key(f64::NAN));
    }

    #[test]
    fn descending_complements_values_but_not_ranks() {
        use crate::table::Column;
        let col = Column::new("v", ColumnData::Int(vec![Some(1), None, Some(2)]));
        let spec = OrderSpec::new("v").descending();
        let keys = extract(&col, &spec, &mut |_: &str| unreachable!("no text here"))
            .expect("int extraction");
        match keys {
            ColumnKeys::Scalar { values, ranks } => {
                assert!(values[0] > values[2]); // complemented: 1 now above 2
                assert_eq!(ranks, vec![RANK_PRESENT, RANK_MISSING_LAST, RANK_PRESENT]);
            }
            ColumnKeys::Bytes { .. } => panic!("expected scalar keys"),
        }
    }

    #[test]
    fn out_of_range_categorical_codes_are_missing() {
        use crate::table::Column;
        let col = Column::new(
            "lvl",
            ColumnData::Categorical {
                levels: vec!["lo".into(), "hi".into()],
                codes: vec![Some(1), Some(7), Some(0), None],
            },
        );
        let spec = OrderSpec::new("lvl").missing_first();
        let keys = extract(&col, &spec, &mut |_: &str| unreachable!()).expect("categorical");
        match keys {
            ColumnKeys::Scalar { ranks, .. } => {
                assert_eq!(
                    ranks,
                    vec![
                        RANK_PRESENT,
                        RANK_MISSING_FIRST,
                        RANK_PRESENT,
                        RANK_MISSING_FIRST
                    ]
                );
            }
            ColumnKeys::Bytes { .. } => panic!("expected scalar keys"),
        }
    }

    #[test]
    fn complex_columns_are_unsupported() {
        use crate::table::Column;
        let col = Column::new("z", ColumnData::Complex(vec![Some((1.0, 2.0))]));
        let err = extract(&col, &OrderSpec::new("z"), &mut |_: &str| unreachable!()).unwrap_err();
        assert_eq!(err, OrderError::unsupported("z"));
    }
}
