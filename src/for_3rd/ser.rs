//! Serialization of BigInt.
//! Serialization to a string uses decimal radix.

use crate::BigInt;
use serde::{Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
