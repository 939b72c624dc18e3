//! Strongly typed identifier wrappers for extract entities.
//!
//! Node and way identifiers come straight from the source extract, so they
//! are sparse 64-bit values rather than dense array indices.  All IDs are
//! `Copy + Ord + Hash` so they can be used as map keys and sorted collection
//! elements without ceremony.  The inner integer is `pub` for callers that
//! need the raw extract value, but prefer the `.raw()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The identifier as it appeared in the source extract.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a road-network point, as declared by the extract.
    pub struct NodeId(i64);
}

typed_id! {
    /// Identifier of a way (road segment) in the extract.
    pub struct WayId(i64);
}
