//! Integer scalar kinds.
//!
//! A [`ScalarKind`] combines a storage [`Width`] with a signedness. Only the
//! eight fixed-width integer kinds exist; floating-point names are recognised
//! solely so they can be rejected with a precise error.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::ScalarError;

/// Storage width of a scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

impl Width {
    /// Number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Width for a bit count.
    ///
    /// # Errors
    /// Returns [`ScalarError::UnsupportedKind`] for anything other than
    /// 8, 16, 32 or 64.
    pub fn from_bits(bits: u32) -> Result<Self, ScalarError> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(ScalarError::UnsupportedKind {
                requested: format!("{other}-bit integer"),
            }),
        }
    }
}

/// Signedness family, used by the typed accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's-complement values with a sign.
    Signed,
    /// Non-negative values.
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => f.write_str("signed"),
            Self::Unsigned => f.write_str("unsigned"),
        }
    }
}

/// Width and signedness of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarKind {
    /// Unsigned 8-bit.
    U8,
    /// Unsigned 16-bit.
    U16,
    /// Unsigned 32-bit.
    U32,
    /// Unsigned 64-bit.
    U64,
    /// Signed 8-bit.
    I8,
    /// Signed 16-bit.
    I16,
    /// Signed 32-bit.
    #[default]
    I32,
    /// Signed 64-bit.
    I64,
}

static KIND_NAMES: phf::Map<&'static str, ScalarKind> = phf_map! {
    "u8" => ScalarKind::U8,
    "u16" => ScalarKind::U16,
    "u32" => ScalarKind::U32,
    "u64" => ScalarKind::U64,
    "i8" => ScalarKind::I8,
    "i16" => ScalarKind::I16,
    "i32" => ScalarKind::I32,
    "i64" => ScalarKind::I64,
    "uint8_t" => ScalarKind::U8,
    "uint16_t" => ScalarKind::U16,
    "uint32_t" => ScalarKind::U32,
    "uint64_t" => ScalarKind::U64,
    "int8_t" => ScalarKind::I8,
    "int16_t" => ScalarKind::I16,
    "int32_t" => ScalarKind::I32,
    "int64_t" => ScalarKind::I64,
};

impl ScalarKind {
    /// All eight kinds, unsigned first.
    pub const ALL: [Self; 8] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
    ];

    /// Builds a kind from its facets.
    #[must_use]
    pub const fn new(width: Width, signedness: Signedness) -> Self {
        match (width, signedness) {
            (Width::W8, Signedness::Unsigned) => Self::U8,
            (Width::W16, Signedness::Unsigned) => Self::U16,
            (Width::W32, Signedness::Unsigned) => Self::U32,
            (Width::W64, Signedness::Unsigned) => Self::U64,
            (Width::W8, Signedness::Signed) => Self::I8,
            (Width::W16, Signedness::Signed) => Self::I16,
            (Width::W32, Signedness::Signed) => Self::I32,
            (Width::W64, Signedness::Signed) => Self::I64,
        }
    }

    /// Storage width.
    #[must_use]
    pub const fn width(self) -> Width {
        match self {
            Self::U8 | Self::I8 => Width::W8,
            Self::U16 | Self::I16 => Width::W16,
            Self::U32 | Self::I32 => Width::W32,
            Self::U64 | Self::I64 => Width::W64,
        }
    }

    /// Signedness family.
    #[must_use]
    pub const fn signedness(self) -> Signedness {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => Signedness::Unsigned,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Signedness::Signed,
        }
    }

    /// True for the four signed kinds.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self.signedness(), Signedness::Signed)
    }

    /// Short Rust-style name, e.g. `"u16"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = ScalarError;

    /// Accepts short (`u8`) and C-style (`uint8_t`) names. Floating-point and
    /// wider names report [`ScalarError::UnsupportedKind`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ScalarError::UnsupportedKind {
                requested: s.to_string(),
            })
    }
}
