/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Stable, platform-independent hash codes for generated shapes.
//!
//! [`std::hash::Hash`] output depends on the hasher and may change between Rust releases.
//! [`HashCode`] instead produces a fixed `i32` for a given value, so hash codes can be logged,
//! compared across processes, and pinned in tests. Shapes fold their members with
//! [`HashCodeBuilder`]: seed `1`, then `31 * h + c` for every member in declaration order,
//! where an absent member contributes `0`.

use crate::DateTime;

const SEED: i32 = 1;
const MULTIPLIER: i32 = 31;

/// A deterministic hash code, consistent with `PartialEq`.
pub trait HashCode {
    /// Returns the hash code of this value.
    fn hash_code(&self) -> i32;
}

/// Accumulates member hash codes into a shape hash code.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HashCodeBuilder {
    state: i32,
}

impl Default for HashCodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashCodeBuilder {
    /// Creates a builder seeded with `1`.
    pub fn new() -> Self {
        HashCodeBuilder { state: SEED }
    }

    /// Folds in an optional member; `None` contributes `0`.
    pub fn member<T: HashCode>(self, value: &Option<T>) -> Self {
        self.combine(value.as_ref().map_or(0, HashCode::hash_code))
    }

    /// Folds in a precomputed contribution.
    pub fn combine(self, contribution: i32) -> Self {
        HashCodeBuilder {
            state: self
                .state
                .wrapping_mul(MULTIPLIER)
                .wrapping_add(contribution),
        }
    }

    /// Returns the accumulated hash code.
    pub fn finish(self) -> i32 {
        self.state
    }
}

fn fold_i64(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as i32
}

impl HashCode for str {
    /// Polynomial hash over UTF-16 code units.
    fn hash_code(&self) -> i32 {
        self.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(MULTIPLIER).wrapping_add(unit as i32)
        })
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl HashCode for i64 {
    fn hash_code(&self) -> i32 {
        fold_i64(*self)
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl HashCode for DateTime {
    /// Hashes epoch milliseconds; sub-millisecond precision is ignored.
    fn hash_code(&self) -> i32 {
        fold_i64(self.wrapping_millis())
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(HashCodeBuilder::new(), |builder, item| {
                builder.combine(item.hash_code())
            })
            .finish()
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

#[cfg(test)]
mod test {
    use super::{HashCode, HashCodeBuilder};
    use crate::DateTime;

    #[test]
    fn string_hash_codes() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!("hello".hash_code(), 99162322);
        assert_eq!(
            String::from("ForceApplyCapacityChange").hash_code(),
            "ForceApplyCapacityChange".hash_code()
        );
    }

    #[test]
    fn non_bmp_strings_hash_surrogate_pairs() {
        // U+1F600 is encoded as 0xD83D 0xDE00
        assert_eq!("\u{1F600}".hash_code(), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn scalar_hash_codes() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
    }

    #[test]
    fn date_time_hashes_epoch_millis() {
        let date_time = DateTime::from_millis(1576540098520);
        assert_eq!(date_time.hash_code(), 1576540098520i64.hash_code());
    }

    #[test]
    fn list_hash_code() {
        assert_eq!(Vec::<i32>::new().hash_code(), 1);
        assert_eq!(vec![1, 2].hash_code(), 994);
    }

    #[test]
    fn absent_members_contribute_zero() {
        let absent: Option<String> = None;
        let hash = HashCodeBuilder::new()
            .member(&absent)
            .member(&Some(4))
            .finish();
        // (1 * 31 + 0) * 31 + 4
        assert_eq!(hash, 965);
    }

    #[test]
    fn accumulator_wraps() {
        let hash = (0..64).fold(HashCodeBuilder::new(), |builder, _| builder.combine(i32::MAX));
        // must not panic in debug builds
        let _ = hash.finish();
    }
}
