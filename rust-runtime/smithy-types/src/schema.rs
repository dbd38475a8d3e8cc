/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Static member tables for generated shapes.
//!
//! Every generated structure carries a [`StructSchema`] listing its members in declaration
//! order. Each [`MemberSchema`] pairs the Rust member name with the name used on the wire;
//! the pairing is spelled out per shape rather than derived by case conversion, since wire
//! names such as `DBClusterIdentifier` or `IAMDatabaseAuthenticationEnabled` do not follow a
//! single casing rule.

/// Shape types that generated members can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// UTF-8 string
    String,
    /// Timestamp
    Timestamp,
    /// List type
    List,
    /// Structure type
    Structure,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Long | Self::String | Self::Timestamp
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Structure)
    }
}

/// The default name of list members on the wire.
pub const DEFAULT_LIST_MEMBER: &str = "member";

/// A single member of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberSchema {
    member_name: &'static str,
    wire_name: &'static str,
    shape_type: ShapeType,
    list_member: Option<&'static str>,
}

impl MemberSchema {
    /// Creates a member schema.
    pub const fn new(
        member_name: &'static str,
        wire_name: &'static str,
        shape_type: ShapeType,
    ) -> Self {
        MemberSchema {
            member_name,
            wire_name,
            shape_type,
            list_member: None,
        }
    }

    /// Overrides the wire name of list elements (e.g. `Tag` in `Tags.Tag.1`).
    pub const fn with_list_member(self, list_member: &'static str) -> Self {
        MemberSchema {
            list_member: Some(list_member),
            ..self
        }
    }

    /// The Rust name of the member.
    pub fn member_name(&self) -> &'static str {
        self.member_name
    }

    /// The name of the member on the wire.
    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    /// The shape type of the member.
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// The wire name of list elements, defaulting to [`DEFAULT_LIST_MEMBER`].
    pub fn list_member_name(&self) -> &'static str {
        self.list_member.unwrap_or(DEFAULT_LIST_MEMBER)
    }
}

/// The ordered member table of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructSchema {
    name: &'static str,
    members: &'static [MemberSchema],
}

impl StructSchema {
    /// Creates a structure schema.
    pub const fn new(name: &'static str, members: &'static [MemberSchema]) -> Self {
        StructSchema { name, members }
    }

    /// The name of the shape.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &'static [MemberSchema] {
        self.members
    }

    /// Looks up a member by its wire name.
    pub fn member(&self, wire_name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|m| m.wire_name == wire_name)
    }

    /// Looks up a member by its Rust name.
    pub fn member_by_name(&self, member_name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|m| m.member_name == member_name)
    }
}

#[cfg(test)]
mod test {
    use super::{MemberSchema, ShapeType, StructSchema};

    const TAG_MEMBERS: &[MemberSchema] = &[
        MemberSchema::new("key", "Key", ShapeType::String),
        MemberSchema::new("value", "Value", ShapeType::String),
    ];

    #[test]
    fn lookup_members() {
        let schema = StructSchema::new("Tag", TAG_MEMBERS);
        assert_eq!(schema.member("Key").map(|m| m.member_name()), Some("key"));
        assert_eq!(
            schema.member_by_name("value").map(|m| m.wire_name()),
            Some("Value")
        );
        assert!(schema.member("key").is_none());
    }

    #[test]
    fn list_member_defaults() {
        let tags = MemberSchema::new("tags", "Tags", ShapeType::List);
        assert_eq!(tags.list_member_name(), "member");
        assert_eq!(tags.with_list_member("Tag").list_member_name(), "Tag");
    }

    #[test]
    fn shape_type_categories() {
        assert!(ShapeType::Timestamp.is_simple());
        assert!(!ShapeType::Timestamp.is_aggregate());
        assert!(ShapeType::List.is_aggregate());
        assert!(ShapeType::Structure.is_aggregate());
    }
}
