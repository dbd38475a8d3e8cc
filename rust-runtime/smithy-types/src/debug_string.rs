/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The `{Name: value,Name: value}` debug string rendered by generated shapes.

use crate::DateTime;
use std::fmt;

/// How a member value is rendered inside a debug string.
pub trait FieldDisplay {
    /// Writes this value to `f`.
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_field {
    ($($ty:ty),+) => {
        $(
            impl FieldDisplay for $ty {
                fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_field!(str, String, i32, i64, bool, DateTime);

/// Lists render as `[a, b, c]`.
impl<T: FieldDisplay> FieldDisplay for [T] {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

impl<T: FieldDisplay> FieldDisplay for Vec<T> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt_field(f)
    }
}

/// Builder for a shape debug string, in the manner of [`fmt::DebugStruct`].
///
/// Only present members are written. Members appear in the order [`field`](Self::field) is
/// called, separated by `,`.
///
/// ```rust
/// use smithy_types::debug_string::DebugString;
/// use std::fmt;
///
/// struct Capacity {
///     capacity: Option<i32>,
///     timeout_action: Option<String>,
/// }
///
/// impl fmt::Display for Capacity {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         DebugString::new(f)
///             .field("Capacity", &self.capacity)
///             .field("TimeoutAction", &self.timeout_action)
///             .finish()
///     }
/// }
///
/// let capacity = Capacity { capacity: Some(4), timeout_action: None };
/// assert_eq!(capacity.to_string(), "{Capacity: 4}");
/// ```
#[must_use = "must eventually call `finish()` on DebugString"]
pub struct DebugString<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl fmt::Debug for DebugString<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugString")
            .field("has_fields", &self.has_fields)
            .finish()
    }
}

impl<'a, 'b: 'a> DebugString<'a, 'b> {
    /// Starts a debug string by writing the opening brace.
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        DebugString {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` if `value` is present.
    pub fn field<T: FieldDisplay>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.result = self.result.and_then(|_| {
                if self.has_fields {
                    self.fmt.write_str(",")?;
                }
                self.fmt.write_str(name)?;
                self.fmt.write_str(": ")?;
                value.fmt_field(self.fmt)
            });
            self.has_fields = true;
        }
        self
    }

    /// Writes the closing brace and returns any error encountered along the way.
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.fmt.write_str("}"))
    }
}
