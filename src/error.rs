//! Error taxonomy for scalar conversions.
//!
//! Every failure is local and deterministic: the caller receives it
//! synchronously and decides whether to report, re-prompt, or abort.

use thiserror::Error;

use crate::base::Base;
use crate::kind::{ScalarKind, Signedness};

/// Failure raised by the scalar and codec layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Token is not a numeral in the requested radix.
    #[error("failed to convert '{token}' to a {kind} value in {base} base")]
    MalformedInput {
        token: String,
        kind: ScalarKind,
        base: Base,
    },
    /// Operation is incompatible with the active kind or base.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    /// Kind, width or base outside the supported integer matrix.
    #[error("unsupported scalar kind '{requested}'")]
    UnsupportedKind { requested: String },
}

/// Specific kind/base incompatibility behind [`ScalarError::TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypeMismatch {
    /// Signed kinds are only representable in decimal.
    #[error(
        "Signed integer values in non-decimal base representation are not supported \
         ({kind} in {base} base)"
    )]
    SignedNonDecimal { kind: ScalarKind, base: Base },
    /// Accessor family does not match the active kind.
    #[error("cannot read a {active} scalar as {requested}")]
    Accessor {
        requested: Signedness,
        active: ScalarKind,
    },
    /// Native type requested from a scalar of a different kind.
    #[error("cannot read a {active} scalar as {requested}")]
    Native {
        requested: ScalarKind,
        active: ScalarKind,
    },
}

impl ScalarError {
    pub(crate) fn malformed(token: &str, kind: ScalarKind, base: Base) -> Self {
        Self::MalformedInput {
            token: token.to_string(),
            kind,
            base,
        }
    }

    /// Rejects signed kinds paired with a non-decimal base.
    pub(crate) fn check_representable(kind: ScalarKind, base: Base) -> Result<(), Self> {
        if kind.is_signed() && !base.is_decimal() {
            return Err(TypeMismatch::SignedNonDecimal { kind, base }.into());
        }
        Ok(())
    }
}
