//! Macros for generating the typed resource identifiers.

/// Generates a numeric newtype identifier for one resource kind.
///
/// The wire representation is a plain JSON integer, but the generated types
/// are distinct, so an identifier can never be passed for the wrong resource
/// kind.
macro_rules! numeric_id_type {
    ($type_name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $type_name(i64);

        impl $type_name {
            /// Wraps a raw numeric identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw numeric identifier.
            pub fn get_raw(&self) -> i64 {
                self.0
            }
        }

        // Displayed as `ServerId(42)` rather than the bare integer.
        impl core::fmt::Debug for $type_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($type_name)).field(&self.0).finish()
            }
        }

        impl core::fmt::Display for $type_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $type_name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

pub(crate) use numeric_id_type;
