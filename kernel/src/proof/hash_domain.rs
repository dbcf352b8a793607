//! Typed domain separators for [`super::hash::canonical_hash`].
//!
//! Each artifact kind hashes under its own null-terminated prefix so that a
//! report digest can never collide with a polygon or policy digest over the
//! same bytes. The enum, `as_bytes()` and `ALL` come from one macro list.

macro_rules! hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Domain separator selecting what kind of artifact is being hashed.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// Null-terminated prefix bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// Every domain, in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

hash_domains! {
    /// Ordered vertex list of a submitted polygon.
    PolygonVertices => b"MAXRECT::POLYGON_VERTICES::V1\0",

    /// Canonical `SearchPolicy` snapshot.
    SearchPolicy => b"MAXRECT::SEARCH_POLICY::V1\0",

    /// Canonical `SearchReport` (result interface plus counters).
    SearchReport => b"MAXRECT::SEARCH_REPORT::V1\0",
}
