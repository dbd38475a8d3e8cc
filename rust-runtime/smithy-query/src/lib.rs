/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol.
//!
//! [`QuerySerializer`] renders a generated shape as an `application/x-www-form-urlencoded`
//! request body:
//! - `Action` and `Version` come first
//! - structure members are keyed by wire name and nested with `.`
//!   (`ScalingConfiguration.MinCapacity=2`)
//! - list elements are keyed `<Wire>.<member>.<index>`, counting from 1
//!   (`Tags.Tag.1.Key=env`); a present but empty list is written as `<Wire>=`
//! - timestamps are written as RFC 3339

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

use smithy_types::date_time::{DateTimeFormatError, Format};
use smithy_types::schema::{MemberSchema, StructSchema};
use smithy_types::serialize::ShapeSerializer;
use smithy_types::DateTime;
use std::error::Error;
use std::fmt;
use tracing::trace;

/// Appends `key=value` pairs to a form-url-encoded body.
#[derive(Debug, Default)]
pub struct QueryWriter {
    output: String,
    params: usize,
}

impl QueryWriter {
    /// Creates a writer whose first parameters are `Action` and `Version`.
    pub fn new(action: &str, version: &str) -> Self {
        let mut writer = QueryWriter::default();
        writer.insert("Action", action);
        writer.insert("Version", version);
        writer
    }

    /// Appends a parameter, percent-encoding both the key and the value.
    pub fn insert(&mut self, key: &str, value: &str) {
        if self.params > 0 {
            self.output.push('&');
        }
        self.params += 1;
        self.output.push_str(&urlencoding::encode(key));
        self.output.push('=');
        self.output.push_str(&urlencoding::encode(value));
    }

    /// Number of parameters written so far, including `Action` and `Version`.
    pub fn len(&self) -> usize {
        self.params
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.params == 0
    }

    /// Returns the body.
    pub fn finish(self) -> String {
        self.output
    }
}

#[derive(Debug)]
enum Frame {
    Struct { prefix: String },
    List { prefix: String, index: usize },
}

/// Serializes shapes into an AWS Query request body.
///
/// ```rust
/// use smithy_query::QuerySerializer;
/// use smithy_types::schema::{MemberSchema, ShapeType, StructSchema};
/// use smithy_types::serialize::ShapeSerializer;
///
/// const CAPACITY: MemberSchema = MemberSchema::new("capacity", "Capacity", ShapeType::Integer);
/// const INPUT: StructSchema = StructSchema::new("Input", &[CAPACITY]);
///
/// let mut ser = QuerySerializer::new("ModifyCurrentDBClusterCapacity", "2014-10-31");
/// ser.write_struct(None, &INPUT, |ser| ser.write_integer(&CAPACITY, 4)).unwrap();
/// assert_eq!(
///     ser.finish().unwrap(),
///     "Action=ModifyCurrentDBClusterCapacity&Version=2014-10-31&Capacity=4"
/// );
/// ```
#[derive(Debug)]
pub struct QuerySerializer {
    writer: QueryWriter,
    frames: Vec<Frame>,
}

impl QuerySerializer {
    /// Creates a serializer for the given action and API version.
    pub fn new(action: &str, version: &str) -> Self {
        QuerySerializer {
            writer: QueryWriter::new(action, version),
            frames: Vec::new(),
        }
    }

    /// Returns the key for the next value written as `member` in the current frame.
    fn next_key(&mut self, member: &MemberSchema) -> String {
        match self.frames.last_mut() {
            Some(Frame::List { prefix, index }) => {
                *index += 1;
                format!("{}.{}", prefix, index)
            }
            Some(Frame::Struct { prefix }) if !prefix.is_empty() => {
                format!("{}.{}", prefix, member.wire_name())
            }
            _ => member.wire_name().to_owned(),
        }
    }

    fn write_value(&mut self, member: &MemberSchema, value: &str) {
        let key = self.next_key(member);
        self.writer.insert(&key, value);
    }
}

impl ShapeSerializer for QuerySerializer {
    type Output = String;
    type Error = QuerySerializationError;

    fn finish(self) -> Result<String, QuerySerializationError> {
        trace!(params = self.writer.len(), "serialized query body");
        Ok(self.writer.finish())
    }

    fn write_struct<F>(
        &mut self,
        member: Option<&MemberSchema>,
        _schema: &StructSchema,
        write_members: F,
    ) -> Result<(), QuerySerializationError>
    where
        F: FnOnce(&mut Self) -> Result<(), QuerySerializationError>,
    {
        let prefix = match member {
            Some(member) => self.next_key(member),
            None => String::new(),
        };
        self.frames.push(Frame::Struct { prefix });
        let result = write_members(self);
        self.frames.pop();
        result
    }

    fn write_list<F>(
        &mut self,
        member: &MemberSchema,
        write_elements: F,
    ) -> Result<(), QuerySerializationError>
    where
        F: FnOnce(&mut Self) -> Result<(), QuerySerializationError>,
    {
        let key = self.next_key(member);
        self.frames.push(Frame::List {
            prefix: format!("{}.{}", key, member.list_member_name()),
            index: 0,
        });
        let result = write_elements(self);
        if let Some(Frame::List { index: 0, .. }) = self.frames.pop() {
            self.writer.insert(&key, "");
        }
        result
    }

    fn write_boolean(
        &mut self,
        member: &MemberSchema,
        value: bool,
    ) -> Result<(), QuerySerializationError> {
        self.write_value(member, if value { "true" } else { "false" });
        Ok(())
    }

    fn write_integer(
        &mut self,
        member: &MemberSchema,
        value: i32,
    ) -> Result<(), QuerySerializationError> {
        self.write_value(member, &value.to_string());
        Ok(())
    }

    fn write_long(
        &mut self,
        member: &MemberSchema,
        value: i64,
    ) -> Result<(), QuerySerializationError> {
        self.write_value(member, &value.to_string());
        Ok(())
    }

    fn write_string(
        &mut self,
        member: &MemberSchema,
        value: &str,
    ) -> Result<(), QuerySerializationError> {
        self.write_value(member, value);
        Ok(())
    }

    fn write_timestamp(
        &mut self,
        member: &MemberSchema,
        value: &DateTime,
    ) -> Result<(), QuerySerializationError> {
        let formatted = value
            .fmt(Format::DateTime)
            .map_err(|source| QuerySerializationError::timestamp(member, source))?;
        self.write_value(member, &formatted);
        Ok(())
    }
}

#[derive(Debug)]
enum QuerySerializationErrorKind {
    InvalidTimestamp {
        member: &'static str,
        source: DateTimeFormatError,
    },
}

/// Failed to serialize a shape into an AWS Query body.
#[derive(Debug)]
pub struct QuerySerializationError {
    kind: QuerySerializationErrorKind,
}

impl QuerySerializationError {
    fn timestamp(member: &MemberSchema, source: DateTimeFormatError) -> Self {
        QuerySerializationError {
            kind: QuerySerializationErrorKind::InvalidTimestamp {
                member: member.wire_name(),
                source,
            },
        }
    }
}

impl fmt::Display for QuerySerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            QuerySerializationErrorKind::InvalidTimestamp { member, .. } => {
                write!(f, "failed to serialize timestamp member `{}`", member)
            }
        }
    }
}

impl Error for QuerySerializationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            QuerySerializationErrorKind::InvalidTimestamp { source, .. } => Some(source),
        }
    }
}
