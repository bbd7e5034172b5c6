//! Machine Word Parsing.
//!
//! Trace files carry program counters and raw encodings as hex strings,
//! with or without a `0x` prefix. Values are truncated to the native word
//! width of the traced core.

use crate::common::error::CovError;

/// Native word width of the traced core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Xlen {
    /// 32-bit core (RV32).
    #[default]
    X32,
    /// 64-bit core (RV64).
    X64,
}

impl Xlen {
    /// Returns the width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Xlen::X32 => 32,
            Xlen::X64 => 64,
        }
    }

    /// Returns the mask selecting the low `bits()` bits of a value.
    pub fn mask(self) -> u64 {
        match self {
            Xlen::X32 => u32::MAX as u64,
            Xlen::X64 => u64::MAX,
        }
    }
}

impl TryFrom<u32> for Xlen {
    type Error = CovError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Xlen::X32),
            64 => Ok(Xlen::X64),
            other => Err(CovError::InvalidXlen(other)),
        }
    }
}

/// Parses a trace word and truncates it to `xlen`.
///
/// Trace words are always hex. An optional `0x`/`0X` prefix is stripped;
/// a leading `0b` is not a radix prefix but two hex digits, so `"0b11"` is
/// the compressed encoding `0x0b11`. Surrounding whitespace is ignored.
///
/// # Arguments
///
/// * `field` - Column name, used in the error
/// * `value` - The raw string from the trace
/// * `xlen` - Native word width
pub fn parse_word(field: &'static str, value: &str, xlen: Xlen) -> Result<u64, CovError> {
    let s = value.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    u64::from_str_radix(digits, 16)
        .map(|v| v & xlen.mask())
        .map_err(|_| CovError::InvalidWord {
            field,
            value: value.to_string(),
        })
}
