//! Type-tagged integer scalar paired with a display base.
//!
//! [`RawScalar`] is the tagged union over the eight integer kinds, so the
//! active interpretation of the stored bits is always explicit.
//! [`ScalarValue`] pairs it with the [`Base`] used by the text codec.

use std::fmt;

use num_traits::{AsPrimitive, PrimInt};

use crate::base::Base;
use crate::error::{ScalarError, TypeMismatch};
use crate::kind::{ScalarKind, Signedness};

/// Raw integer payload tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawScalar {
    /// Unsigned 8-bit payload.
    U8(u8),
    /// Unsigned 16-bit payload.
    U16(u16),
    /// Unsigned 32-bit payload.
    U32(u32),
    /// Unsigned 64-bit payload.
    U64(u64),
    /// Signed 8-bit payload.
    I8(i8),
    /// Signed 16-bit payload.
    I16(i16),
    /// Signed 32-bit payload.
    I32(i32),
    /// Signed 64-bit payload.
    I64(i64),
}

impl RawScalar {
    /// Zero of the given kind.
    #[must_use]
    pub const fn zero(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::U8 => Self::U8(0),
            ScalarKind::U16 => Self::U16(0),
            ScalarKind::U32 => Self::U32(0),
            ScalarKind::U64 => Self::U64(0),
            ScalarKind::I8 => Self::I8(0),
            ScalarKind::I16 => Self::I16(0),
            ScalarKind::I32 => Self::I32(0),
            ScalarKind::I64 => Self::I64(0),
        }
    }

    /// Kind of the payload.
    #[must_use]
    pub const fn kind(self) -> ScalarKind {
        match self {
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
        }
    }

    /// Two's-complement bits, sign-extended to 64 bits for signed kinds.
    #[must_use]
    pub fn to_bits(self) -> u64 {
        match self {
            Self::U8(v) => v.as_(),
            Self::U16(v) => v.as_(),
            Self::U32(v) => v.as_(),
            Self::U64(v) => v,
            Self::I8(v) => v.as_(),
            Self::I16(v) => v.as_(),
            Self::I32(v) => v.as_(),
            Self::I64(v) => v.as_(),
        }
    }

    /// Keeps the low bits of `bits` that fit `kind`.
    #[must_use]
    pub fn from_bits(kind: ScalarKind, bits: u64) -> Self {
        match kind {
            ScalarKind::U8 => Self::U8(bits.as_()),
            ScalarKind::U16 => Self::U16(bits.as_()),
            ScalarKind::U32 => Self::U32(bits.as_()),
            ScalarKind::U64 => Self::U64(bits),
            ScalarKind::I8 => Self::I8(bits.as_()),
            ScalarKind::I16 => Self::I16(bits.as_()),
            ScalarKind::I32 => Self::I32(bits.as_()),
            ScalarKind::I64 => Self::I64(bits.as_()),
        }
    }
}

/// Plain decimal literal, signed kinds with their sign.
impl fmt::Display for RawScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
        }
    }
}

/// Native integer types that can be stored in a [`ScalarValue`].
pub trait NativeInt: PrimInt + AsPrimitive<u64> {
    /// Kind a value of this type carries.
    const KIND: ScalarKind;

    /// Wraps the value in its tagged variant.
    fn into_raw(self) -> RawScalar;

    /// Unwraps a payload of exactly this type.
    fn from_raw(raw: RawScalar) -> Option<Self>;
}

macro_rules! native_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl NativeInt for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn into_raw(self) -> RawScalar {
                    RawScalar::from(self)
                }

                fn from_raw(raw: RawScalar) -> Option<Self> {
                    match raw {
                        RawScalar::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for RawScalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

native_int! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

/// Integer scalar with an associated display base.
///
/// # Examples
///
/// ```
/// use scalario::{Base, ScalarKind, ScalarValue};
///
/// let mut value = ScalarValue::new(ScalarKind::U8, Base::Binary);
/// value.set_from(0x1234_u16);
/// assert_eq!(value.kind(), ScalarKind::U16);
/// assert_eq!(value.as_unsigned(), Ok(0x1234));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarValue {
    raw: RawScalar,
    base: Base,
}

impl Default for ScalarValue {
    fn default() -> Self {
        Self::new(ScalarKind::default(), Base::default())
    }
}

impl ScalarValue {
    /// Zero-valued scalar of `kind`, represented in `base`.
    #[must_use]
    pub const fn new(kind: ScalarKind, base: Base) -> Self {
        Self {
            raw: RawScalar::zero(kind),
            base,
        }
    }

    /// Scalar holding `value`, whose kind follows the native type.
    #[must_use]
    pub fn with_value<T: NativeInt>(value: T, base: Base) -> Self {
        Self {
            raw: value.into_raw(),
            base,
        }
    }

    /// Active kind.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        self.raw.kind()
    }

    /// Base used when the value is rendered or parsed.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Tagged payload.
    #[must_use]
    pub const fn raw(&self) -> RawScalar {
        self.raw
    }

    /// Changes the display base; the value and kind are untouched.
    pub fn set_base(&mut self, base: Base) {
        self.base = base;
    }

    /// Overwrites the value and switches the active kind to `T`'s kind.
    pub fn set_from<T: NativeInt>(&mut self, value: T) {
        self.raw = value.into_raw();
    }

    /// Stores `value` in the current kind, wrapping to its width.
    ///
    /// Storing `300_u32` into an unsigned 8-bit scalar yields `44`.
    pub fn set_truncating<T: NativeInt>(&mut self, value: T) {
        self.raw = RawScalar::from_bits(self.kind(), value.as_());
    }

    pub(crate) fn replace_raw(&mut self, raw: RawScalar) {
        self.raw = raw;
    }

    /// Value as the native type matching the active kind.
    ///
    /// # Errors
    /// Returns [`TypeMismatch::Native`] when `T` is not the active kind.
    pub fn get<T: NativeInt>(&self) -> Result<T, ScalarError> {
        T::from_raw(self.raw).ok_or_else(|| {
            TypeMismatch::Native {
                requested: T::KIND,
                active: self.kind(),
            }
            .into()
        })
    }

    /// Value as a signed 64-bit integer.
    ///
    /// # Errors
    /// Returns [`TypeMismatch::Accessor`] when the active kind is unsigned.
    pub fn as_signed(&self) -> Result<i64, ScalarError> {
        match self.raw {
            RawScalar::I8(v) => Ok(i64::from(v)),
            RawScalar::I16(v) => Ok(i64::from(v)),
            RawScalar::I32(v) => Ok(i64::from(v)),
            RawScalar::I64(v) => Ok(v),
            RawScalar::U8(_) | RawScalar::U16(_) | RawScalar::U32(_) | RawScalar::U64(_) => {
                Err(self.accessor_mismatch(Signedness::Signed))
            }
        }
    }

    /// Value as an unsigned 64-bit integer.
    ///
    /// # Errors
    /// Returns [`TypeMismatch::Accessor`] when the active kind is signed.
    pub fn as_unsigned(&self) -> Result<u64, ScalarError> {
        match self.raw {
            RawScalar::U8(v) => Ok(u64::from(v)),
            RawScalar::U16(v) => Ok(u64::from(v)),
            RawScalar::U32(v) => Ok(u64::from(v)),
            RawScalar::U64(v) => Ok(v),
            RawScalar::I8(_) | RawScalar::I16(_) | RawScalar::I32(_) | RawScalar::I64(_) => {
                Err(self.accessor_mismatch(Signedness::Unsigned))
            }
        }
    }

    fn accessor_mismatch(&self, requested: Signedness) -> ScalarError {
        TypeMismatch::Accessor {
            requested,
            active: self.kind(),
        }
        .into()
    }
}
