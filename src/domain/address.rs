//! Opaque 32-byte identifiers for assets and accounts.
//!
//! The pool never interprets identifiers: they are compared by equality
//! (and byte-wise order when pair keys are canonicalised) and nothing else.
//! Both types display and serialise as lowercase hex.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates an identifier from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }

            /// Parses a 64-character hex string.
            ///
            /// # Errors
            ///
            /// Returns [`hex::FromHexError`] if the input is not exactly 32
            /// bytes of hex.
            pub fn from_hex(input: &str) -> Result<Self, hex::FromHexError> {
                let mut bytes = [0u8; 32];
                hex::decode_to_slice(input, &mut bytes)?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(&self.0[..4]))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_hex(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

opaque_id! {
    /// Identifier of an asset held in pool reserves.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairswap::domain::AssetId;
    ///
    /// let usdc = AssetId::from_bytes([1u8; 32]);
    /// assert_eq!(usdc.as_bytes(), [1u8; 32]);
    /// ```
    AssetId
}

opaque_id! {
    /// Identifier of a depositor, caller or recipient.
    AccountId
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AssetId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn equality_and_order() {
        let lo = AssetId::from_bytes([0u8; 32]);
        let hi = AssetId::from_bytes([1u8; 32]);
        assert_ne!(lo, hi);
        assert!(lo < hi);
    }

    #[test]
    fn display_is_hex() {
        let id = AccountId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "ab".repeat(32));
    }

    #[test]
    fn debug_is_abbreviated() {
        let dbg = format!("{:?}", AssetId::from_bytes([0x01; 32]));
        assert_eq!(dbg, "AssetId(01010101)");
    }

    #[test]
    fn from_hex_rejects_short_input() {
        assert!(AssetId::from_hex("abcd").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = AccountId::from_bytes([7u8; 32]);
        let Ok(json) = serde_json::to_string(&id) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<AccountId>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, id);
    }
}
