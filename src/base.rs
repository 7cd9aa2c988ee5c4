//! Numeral bases used for textual scalar representation.
//!
//! Each [`Base`] maps to a single [`BaseDescriptor`] record holding its
//! display name, radix, and the zero-padded print width for every integer
//! width. The records are `const` data so the association between a base and
//! its widths is fixed at compile time.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::ScalarError;
use crate::kind::{ScalarKind, Width};

/// Numeral system used to render or parse a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 16.
    Hexadecimal,
    /// Base 10.
    #[default]
    Decimal,
}

/// Zero-padded character counts for each integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintWidths {
    w8: usize,
    w16: usize,
    w32: usize,
    w64: usize,
}

impl PrintWidths {
    /// Width in characters for values of `width` bits.
    #[must_use]
    pub const fn get(&self, width: Width) -> usize {
        match width {
            Width::W8 => self.w8,
            Width::W16 => self.w16,
            Width::W32 => self.w32,
            Width::W64 => self.w64,
        }
    }
}

/// Static properties of a [`Base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseDescriptor {
    /// Human-readable name, e.g. `"hexadecimal"`.
    pub name: &'static str,
    /// Radix passed to numeric conversions.
    pub radix: u32,
    /// Print widths for the four integer widths.
    pub widths: PrintWidths,
}

const BINARY: BaseDescriptor = BaseDescriptor {
    name: "binary",
    radix: 2,
    widths: PrintWidths {
        w8: 8,
        w16: 16,
        w32: 32,
        w64: 64,
    },
};

const OCTAL: BaseDescriptor = BaseDescriptor {
    name: "octal",
    radix: 8,
    widths: PrintWidths {
        w8: 3,
        w16: 6,
        w32: 11,
        w64: 22,
    },
};

const HEXADECIMAL: BaseDescriptor = BaseDescriptor {
    name: "hexadecimal",
    radix: 16,
    widths: PrintWidths {
        w8: 2,
        w16: 4,
        w32: 8,
        w64: 16,
    },
};

// Decimal widths bound the digit count of unsigned maxima; they are never
// used as padding targets.
const DECIMAL: BaseDescriptor = BaseDescriptor {
    name: "decimal",
    radix: 10,
    widths: PrintWidths {
        w8: 3,
        w16: 5,
        w32: 10,
        w64: 20,
    },
};

static BASE_NAMES: phf::Map<&'static str, Base> = phf_map! {
    "binary" => Base::Binary,
    "bin" => Base::Binary,
    "octal" => Base::Octal,
    "oct" => Base::Octal,
    "hexadecimal" => Base::Hexadecimal,
    "hex" => Base::Hexadecimal,
    "decimal" => Base::Decimal,
    "dec" => Base::Decimal,
};

impl Base {
    /// Every base, in table order.
    pub const ALL: [Self; 4] = [
        Self::Binary,
        Self::Octal,
        Self::Hexadecimal,
        Self::Decimal,
    ];

    /// Descriptor record for this base.
    #[must_use]
    pub const fn descriptor(self) -> &'static BaseDescriptor {
        match self {
            Self::Binary => &BINARY,
            Self::Octal => &OCTAL,
            Self::Hexadecimal => &HEXADECIMAL,
            Self::Decimal => &DECIMAL,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Radix associated with the base.
    #[must_use]
    pub const fn radix(self) -> u32 {
        self.descriptor().radix
    }

    /// Number of characters a value of `kind` occupies in this base.
    ///
    /// The result depends only on the kind's width, never on the value.
    #[must_use]
    pub const fn print_width(self, kind: ScalarKind) -> usize {
        self.descriptor().widths.get(kind.width())
    }

    /// True for [`Base::Decimal`], the only base accepting signed kinds.
    #[must_use]
    pub const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BASE_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ScalarError::UnsupportedKind {
                requested: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Base::Binary, [8, 16, 32, 64])]
    #[case(Base::Octal, [3, 6, 11, 22])]
    #[case(Base::Hexadecimal, [2, 4, 8, 16])]
    #[case(Base::Decimal, [3, 5, 10, 20])]
    fn print_widths_follow_table(#[case] base: Base, #[case] expected: [usize; 4]) {
        let unsigned = [
            ScalarKind::U8,
            ScalarKind::U16,
            ScalarKind::U32,
            ScalarKind::U64,
        ];
        let signed = [
            ScalarKind::I8,
            ScalarKind::I16,
            ScalarKind::I32,
            ScalarKind::I64,
        ];
        for ((u, s), width) in unsigned.into_iter().zip(signed).zip(expected) {
            assert_eq!(base.print_width(u), width, "{base} {u}");
            assert_eq!(base.print_width(s), width, "{base} {s}");
        }
    }

    #[rstest]
    #[case(Base::Binary, "binary", 2)]
    #[case(Base::Octal, "octal", 8)]
    #[case(Base::Hexadecimal, "hexadecimal", 16)]
    #[case(Base::Decimal, "decimal", 10)]
    fn names_and_radices(#[case] base: Base, #[case] name: &str, #[case] radix: u32) {
        assert_eq!(base.name(), name);
        assert_eq!(base.radix(), radix);
        assert_eq!(base.to_string(), name);
    }

    #[rstest]
    #[case("hex", Base::Hexadecimal)]
    #[case("Octal", Base::Octal)]
    #[case(" bin ", Base::Binary)]
    #[case("dec", Base::Decimal)]
    fn parses_base_names(#[case] name: &str, #[case] expected: Base) {
        assert_eq!(name.parse::<Base>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_base_name() {
        let err = "base64".parse::<Base>();
        assert_eq!(
            err,
            Err(ScalarError::UnsupportedKind {
                requested: "base64".to_string()
            })
        );
    }

    #[test]
    fn default_base_is_decimal() {
        assert_eq!(Base::default(), Base::Decimal);
    }
}
