/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Member access for generated shapes.
//!
//! Every member of a generated shape is stored as `Option<T>`, where `None` means the caller
//! did not specify the member or the service did not return it. [`Member`] describes, per
//! member type, how the generated getter borrows the value and how the fluent `with_` setter
//! merges a new value in:
//!
//! | member type | getter returns | `with_` input | `with_` behavior |
//! |---|---|---|---|
//! | `String` | `&str` | `String` | overwrite |
//! | `i32`, `i64`, `bool`, [`DateTime`] | a copy | the same type | overwrite |
//! | `Vec<T>` | `&[T]` | any `IntoIterator` of `impl Into<T>` | append, initializing an absent list first |
//! | generated shape | `&Shape` | the shape | overwrite |
//!
//! The `set_` setter always replaces the stored value, for lists too.

use crate::debug_string::FieldDisplay;
use crate::hash::HashCode;
use crate::schema::ShapeType;
use crate::serialize::{SerializableStruct, SerializeValue};
use crate::DateTime;
use std::fmt;

/// A type that can be stored in a generated shape member.
pub trait Member: Sized {
    /// The borrowed form returned by the generated getter.
    type Ref<'a>
    where
        Self: 'a;

    /// The input accepted by the generated `with_` setter.
    type Input;

    /// The shape type recorded in the member schema.
    const SHAPE_TYPE: ShapeType;

    /// Borrows this value for the generated getter.
    fn member_ref(&self) -> Self::Ref<'_>;

    /// Merges `input` into `slot` for the generated `with_` setter.
    fn merge(slot: &mut Option<Self>, input: Self::Input);
}

/// Return type of a generated getter for a member of type `T`.
pub type MemberRef<'a, T> = <T as Member>::Ref<'a>;

/// Input type of a generated `with_` setter for a member of type `T`.
pub type MemberInput<T> = <T as Member>::Input;

/// Implemented by every generated structure.
pub trait Shape:
    Member
    + Clone
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + HashCode
    + FieldDisplay
    + SerializeValue
    + SerializableStruct
{
    /// Returns true if no member is present.
    fn is_empty(&self) -> bool;
}

impl Member for String {
    type Ref<'a> = &'a str;
    type Input = String;
    const SHAPE_TYPE: ShapeType = ShapeType::String;

    fn member_ref(&self) -> &str {
        self.as_str()
    }

    fn merge(slot: &mut Option<Self>, input: String) {
        *slot = Some(input);
    }
}

macro_rules! copy_member {
    ($($ty:ty => $shape_type:ident),+) => {
        $(
            impl Member for $ty {
                type Ref<'a> = $ty;
                type Input = $ty;
                const SHAPE_TYPE: ShapeType = ShapeType::$shape_type;

                fn member_ref(&self) -> $ty {
                    *self
                }

                fn merge(slot: &mut Option<Self>, input: $ty) {
                    *slot = Some(input);
                }
            }
        )+
    };
}

copy_member!(i32 => Integer, i64 => Long, bool => Boolean, DateTime => Timestamp);

/// Elements appended by the `with_` setter of a list member.
///
/// Built from anything iterable whose items convert into the element type, so
/// `with_values(["a", "b"])` works on a `Vec<String>` member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListInput<T>(Vec<T>);

impl<T, I> From<I> for ListInput<T>
where
    I: IntoIterator,
    I::Item: Into<T>,
{
    fn from(items: I) -> Self {
        ListInput(items.into_iter().map(Into::into).collect())
    }
}

impl<T> Member for Vec<T> {
    type Ref<'a> = &'a [T]
    where
        T: 'a;
    type Input = ListInput<T>;
    const SHAPE_TYPE: ShapeType = ShapeType::List;

    fn member_ref(&self) -> &[T] {
        self.as_slice()
    }

    /// Appends to the stored list. An absent list becomes present even when `input` is empty.
    fn merge(slot: &mut Option<Self>, input: ListInput<T>) {
        slot.get_or_insert_with(Vec::new).extend(input.0);
    }
}

#[cfg(test)]
mod test {
    use super::{ListInput, Member};
    use crate::DateTime;

    #[test]
    fn scalars_overwrite() {
        let mut slot = Some(1);
        i32::merge(&mut slot, 2);
        assert_eq!(slot, Some(2));

        let mut slot = None;
        DateTime::merge(&mut slot, DateTime::from_secs(5));
        assert_eq!(slot.map(|d| d.member_ref()), Some(DateTime::from_secs(5)));
    }

    #[test]
    fn lists_append() {
        let mut slot: Option<Vec<String>> = None;
        Vec::merge(&mut slot, vec!["x".to_owned()].into());
        Vec::merge(&mut slot, ["y"].into());
        assert_eq!(slot, Some(vec!["x".to_owned(), "y".to_owned()]));
    }

    #[test]
    fn empty_append_initializes_list() {
        let mut slot: Option<Vec<i32>> = None;
        Vec::merge(&mut slot, Vec::<i32>::new().into());
        assert_eq!(slot, Some(vec![]));
    }

    #[test]
    fn list_input_converts_elements() {
        let input: ListInput<String> = ["a", "b"].into();
        assert_eq!(input, ListInput(vec!["a".to_owned(), "b".to_owned()]));

        let input: ListInput<i64> = (1..=3i32).into();
        assert_eq!(input, ListInput(vec![1, 2, 3]));
    }

    #[test]
    fn string_ref_is_str() {
        let value = String::from("db-cluster");
        let borrowed: &str = value.member_ref();
        assert_eq!(borrowed, "db-cluster");
    }
}
