//! Result components returned to the fuzzing driver
//!
//! Each is a plain byte buffer; the type only records what produced it so the
//! driver compares digests with digests and keys with keys.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! byte_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Vec<u8>);

        impl $name {
            /// Wrap raw output bytes
            #[must_use]
            pub fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Raw output bytes
            #[must_use]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Take the raw output bytes
            #[must_use]
            pub fn into_vec(self) -> Vec<u8> {
                self.0
            }

            /// Lowercase hexadecimal rendering
            #[must_use]
            pub fn to_hex(&self) -> String {
                hex::encode(&self.0)
            }

            /// Output length in bytes
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the output is zero-length
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for Vec<u8> {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.to_hex())
            }
        }
    };
}

byte_component!(
    /// Fixed-length digest or checksum output
    Digest
);

byte_component!(
    /// Keyed authentication tag
    Mac
);

byte_component!(
    /// Derived key material
    Key
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_hex() {
        let digest = Digest::new(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(digest.to_string(), "deadbeef");
        assert_eq!(format!("{digest:?}"), "Digest(deadbeef)");
        assert_eq!(digest.len(), 4);
    }

    #[test]
    fn empty_key_is_a_value() {
        let key = Key::from(Vec::new());
        assert!(key.is_empty());
        assert_eq!(Vec::<u8>::from(key), Vec::<u8>::new());
    }
}
