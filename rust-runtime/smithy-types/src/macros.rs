/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Templates that generated model crates expand for every shape and enumeration.

/// Defines a generated structure from its member list.
///
/// Each member is written `name: Type => "WireName"`, optionally followed by
/// `["ElementName"]` on list members to name list elements on the wire. Members keep their
/// declaration order everywhere: in the debug string, the hash code, the schema and
/// serialization.
///
/// For each member `name` the template generates:
/// - `name(&self)`: the getter, `None` when absent
/// - `set_name(&mut self, Option<T>)`: replaces the value; `None` clears it
/// - `with_name(self, input)`: fluent setter; overwrites scalars, appends to lists
///
/// The calling crate must depend on `serde` with the `derive` feature, and on `smithy-types`
/// with `serde-serialize`/`serde-deserialize` if any member is a [`DateTime`](crate::DateTime).
///
/// ```rust
/// smithy_types::shape! {
///     /// A key-value pair.
///     pub struct Tag {
///         /// The key.
///         key: String => "Key",
///         /// The value.
///         value: String => "Value",
///     }
/// }
///
/// let tag = Tag::default().with_key("env");
/// assert_eq!(tag.key(), Some("env"));
/// assert_eq!(tag.value(), None);
/// assert_eq!(tag.to_string(), "{Key: env}");
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident: $ty:ty => $wire:literal $([$list_member:literal])?
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name {
                $(
                    $(#[doc = $doc])*
                    #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                    $field: ::std::option::Option<$ty>,
                )*
            }

            impl $name {
                $(
                    const [<$field:upper _MEMBER>]: $crate::schema::MemberSchema =
                        $crate::__member_schema!(stringify!($field), $wire, $ty $(, $list_member)?);
                )*

                $(
                    $(#[doc = $doc])*
                    pub fn $field(&self) -> ::std::option::Option<$crate::shape::MemberRef<'_, $ty>> {
                        self.$field
                            .as_ref()
                            .map(<$ty as $crate::shape::Member>::member_ref)
                    }

                    #[doc = concat!("Sets `", $wire, "`, replacing any current value. `None` clears it.")]
                    pub fn [<set_ $field>](&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
                        self.$field = input;
                        self
                    }

                    #[doc = concat!("Fluent setter for `", $wire, "`. Lists are appended to; other members are overwritten.")]
                    pub fn [<with_ $field>](
                        mut self,
                        input: impl ::std::convert::Into<$crate::shape::MemberInput<$ty>>,
                    ) -> Self {
                        <$ty as $crate::shape::Member>::merge(&mut self.$field, input.into());
                        self
                    }
                )*
            }

            impl $crate::shape::Member for $name {
                type Ref<'a> = &'a Self;
                type Input = Self;
                const SHAPE_TYPE: $crate::schema::ShapeType = $crate::schema::ShapeType::Structure;

                fn member_ref(&self) -> &Self {
                    self
                }

                fn merge(slot: &mut ::std::option::Option<Self>, input: Self) {
                    *slot = ::std::option::Option::Some(input);
                }
            }

            impl $crate::shape::Shape for $name {
                fn is_empty(&self) -> bool {
                    true $(&& self.$field.is_none())*
                }
            }

            impl $crate::hash::HashCode for $name {
                fn hash_code(&self) -> i32 {
                    $crate::hash::HashCodeBuilder::new()
                        $(.member(&self.$field))*
                        .finish()
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::debug_string::DebugString::new(f)
                        $(.field($wire, &self.$field))*
                        .finish()
                }
            }

            impl $crate::debug_string::FieldDisplay for $name {
                fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }

            impl $crate::serialize::SerializableStruct for $name {
                const SCHEMA: $crate::schema::StructSchema = $crate::schema::StructSchema::new(
                    stringify!($name),
                    &[$(Self::[<$field:upper _MEMBER>]),*],
                );

                #[allow(unused_variables)]
                fn serialize_members<S: $crate::serialize::ShapeSerializer>(
                    &self,
                    serializer: &mut S,
                ) -> ::std::result::Result<(), S::Error> {
                    $(
                        if let ::std::option::Option::Some(value) = &self.$field {
                            $crate::serialize::SerializeValue::serialize_value(
                                value,
                                &Self::[<$field:upper _MEMBER>],
                                serializer,
                            )?;
                        }
                    )*
                    ::std::result::Result::Ok(())
                }
            }

            impl $crate::serialize::SerializeValue for $name {
                fn serialize_value<S: $crate::serialize::ShapeSerializer>(
                    &self,
                    member: &$crate::schema::MemberSchema,
                    serializer: &mut S,
                ) -> ::std::result::Result<(), S::Error> {
                    $crate::serialize::ShapeSerializer::write_struct(
                        serializer,
                        ::std::option::Option::Some(member),
                        &<Self as $crate::serialize::SerializableStruct>::SCHEMA,
                        |ser| $crate::serialize::SerializableStruct::serialize_members(self, ser),
                    )
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_schema {
    ($member_name:expr, $wire:literal, $ty:ty) => {
        $crate::schema::MemberSchema::new(
            $member_name,
            $wire,
            <$ty as $crate::shape::Member>::SHAPE_TYPE,
        )
    };
    ($member_name:expr, $wire:literal, $ty:ty, $list_member:literal) => {
        $crate::__member_schema!($member_name, $wire, $ty).with_list_member($list_member)
    };
}

/// Defines a closed enumeration whose values travel as strings.
///
/// Members holding an enumerated value are stored as `String`, so the typed constant and the
/// equivalent raw string produce identical shapes. Unrecognized strings are kept verbatim in
/// the `Unknown` variant.
///
/// ```rust
/// smithy_types::string_enum! {
///     /// What to do when a scaling point can't be found.
///     pub enum TimeoutAction {
///         /// Apply the change anyway.
///         ForceApplyCapacityChange => "ForceApplyCapacityChange",
///         /// Abandon the change.
///         RollbackCapacityChange => "RollbackCapacityChange",
///     }
/// }
///
/// let action = TimeoutAction::from("RollbackCapacityChange");
/// assert_eq!(action, TimeoutAction::RollbackCapacityChange);
/// assert_eq!(String::from(action), "RollbackCapacityChange");
/// assert_eq!(TimeoutAction::from("Wait").as_str(), "Wait");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                $variant,
            )+
            /// A value this version of the client does not model, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Returns the wire value of this variant.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every modeled wire value.
            pub const fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(value) => value,
                    known => known.as_str().to_owned(),
                }
            }
        }
    };
}
