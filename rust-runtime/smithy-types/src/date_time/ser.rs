/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTime, Format};
use serde::ser::SerializeTuple;

/// Human-readable serializers get RFC 3339; compact ones get a `(seconds, nanos)` tuple.
impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            match self.fmt(Format::DateTime) {
                Ok(formatted) => serializer.serialize_str(&formatted),
                Err(err) => Err(serde::ser::Error::custom(err)),
            }
        } else {
            let mut tuple = serializer.serialize_tuple(2)?;
            tuple.serialize_element(&self.seconds)?;
            tuple.serialize_element(&self.subsecond_nanos)?;
            tuple.end()
        }
    }
}
