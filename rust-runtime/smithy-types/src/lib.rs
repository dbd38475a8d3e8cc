/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime support for smithy-rs generated model crates.
//!
//! Generated shapes are declared with the [`shape!`] template, which derives accessors, the
//! `{Name: value}` debug string, a stable [`HashCode`], a member [schema](schema::StructSchema)
//! and [serialization](serialize::SerializableStruct) from a single member list. Enumerations
//! that travel as strings are declared with [`string_enum!`].

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod date_time;
pub mod debug_string;
pub mod hash;
pub mod schema;
pub mod serialize;
pub mod shape;

mod macros;

pub use date_time::DateTime;
pub use hash::HashCode;
pub use shape::{Member, Shape};

#[doc(hidden)]
pub use paste;
