/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Format-agnostic serialization of generated shapes.
//!
//! Generated shapes know their members but not the wire format; protocol crates implement
//! [`ShapeSerializer`] and are driven through [`SerializableStruct`]. Only present members
//! are written, in declaration order.

use crate::schema::{MemberSchema, StructSchema};
use crate::DateTime;
use std::error::Error;

/// Serializes shapes to a target format.
///
/// Every write receives the [`MemberSchema`] of the member being written so the serializer
/// can use its wire name. Elements written inside [`write_list`](Self::write_list) receive
/// the schema of the list member itself.
pub trait ShapeSerializer {
    /// The serialization target type (e.g. `String`).
    type Output;

    /// The error type returned by serialization operations.
    type Error: Error;

    /// Finalizes the serialization and returns the serialized output.
    fn finish(self) -> Result<Self::Output, Self::Error>;

    /// Writes a structure.
    ///
    /// `member` is `None` for the top-level shape. `write_members` writes the members.
    fn write_struct<F>(
        &mut self,
        member: Option<&MemberSchema>,
        schema: &StructSchema,
        write_members: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a list. `write_elements` writes each element in order.
    fn write_list<F>(&mut self, member: &MemberSchema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a boolean value.
    fn write_boolean(&mut self, member: &MemberSchema, value: bool) -> Result<(), Self::Error>;

    /// Writes an integer (i32) value.
    fn write_integer(&mut self, member: &MemberSchema, value: i32) -> Result<(), Self::Error>;

    /// Writes a long (i64) value.
    fn write_long(&mut self, member: &MemberSchema, value: i64) -> Result<(), Self::Error>;

    /// Writes a string value.
    fn write_string(&mut self, member: &MemberSchema, value: &str) -> Result<(), Self::Error>;

    /// Writes a timestamp value.
    fn write_timestamp(&mut self, member: &MemberSchema, value: &DateTime)
        -> Result<(), Self::Error>;
}

/// A member value that knows which [`ShapeSerializer`] method writes it.
pub trait SerializeValue {
    /// Writes this value as `member`.
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error>;
}

/// Structures that can be serialized. Implemented by the [`shape!`](crate::shape) template.
pub trait SerializableStruct {
    /// The member table of this structure.
    const SCHEMA: StructSchema;

    /// Writes every present member in declaration order.
    fn serialize_members<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error>;

    /// Writes this structure as a top-level shape.
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.write_struct(None, &Self::SCHEMA, |ser| self.serialize_members(ser))
    }
}

impl SerializeValue for String {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_string(member, self)
    }
}

impl SerializeValue for i32 {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_integer(member, *self)
    }
}

impl SerializeValue for i64 {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_long(member, *self)
    }
}

impl SerializeValue for bool {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_boolean(member, *self)
    }
}

impl SerializeValue for DateTime {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_timestamp(member, self)
    }
}

impl<T: SerializeValue> SerializeValue for Vec<T> {
    fn serialize_value<S: ShapeSerializer>(
        &self,
        member: &MemberSchema,
        serializer: &mut S,
    ) -> Result<(), S::Error> {
        serializer.write_list(member, |ser| {
            for item in self {
                item.serialize_value(member, ser)?;
            }
            Ok(())
        })
    }
}
