use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chromosome::{ChromId, ChromosomeResolver};
use crate::refalt::RefAltCode;

/// 64 bit key for a human genetic variant.
///
/// The key packs three fields, from the most significant bit down:
/// 5 bits of chromosome identifier (bits 63–59), 28 bits of 0-based
/// position (bits 58–31) and a 31 bit [`RefAltCode`] (bits 30–0). The
/// field order makes unsigned comparison of two keys equivalent to
/// comparing their variants by chromosome and then position, so keys
/// sort, search and join correctly without the original strings.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VariantKey(u64);

impl VariantKey {
    /// Number of bits the position field occupies in a key.
    pub const POS_BITS: u32 = 28;

    /// Largest representable position.
    pub const MAX_POS: u32 = (1 << Self::POS_BITS) - 1;

    const CHROM_SHIFT: u32 = 59;
    const POS_SHIFT: u32 = 31;

    /// Constructs a `VariantKey` from its integer value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Gets the integer value of this `VariantKey`.
    ///
    /// # Examples
    /// ```
    /// use variantkey::key::VariantKey;
    ///
    /// let key = VariantKey::new(0x0000_1388_0444_0000);
    /// assert_eq!(key.get(), 0x0000_1388_0444_0000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Packs chromosome, position and REF+ALT code into a key.
    ///
    /// Pure bit composition with no validation: a position wider than
    /// [`POS_BITS`](Self::POS_BITS) is masked down to its low bits, the
    /// way `ChromId` and `RefAltCode` already mask theirs.
    ///
    /// # Examples
    /// ```
    /// use variantkey::chromosome::ChromId;
    /// use variantkey::key::VariantKey;
    /// use variantkey::refalt::RefAltCode;
    ///
    /// let key = VariantKey::pack(ChromId::new(0), 10000, RefAltCode::encode(b"A", b"C"));
    /// assert_eq!(key.get(), 0x0000_1388_0444_0000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn pack(chrom: ChromId, pos: u32, refalt: RefAltCode) -> Self {
        Self(
            ((chrom.get() as u64) << Self::CHROM_SHIFT)
                | (((pos & Self::MAX_POS) as u64) << Self::POS_SHIFT)
                | refalt.get() as u64,
        )
    }

    /// Returns the chromosome identifier field.
    #[inline]
    #[must_use]
    pub const fn chrom(&self) -> ChromId {
        ChromId::new((self.0 >> Self::CHROM_SHIFT) as u8)
    }

    /// Returns the 0-based position field.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> u32 {
        ((self.0 >> Self::POS_SHIFT) as u32) & Self::MAX_POS
    }

    /// Returns the REF+ALT code field.
    #[inline]
    #[must_use]
    pub const fn refalt(&self) -> RefAltCode {
        RefAltCode::new(self.0 as u32)
    }

    /// Splits the key back into its three fields. Total; allele string
    /// recovery is a separate step through [`RefAltCode::decode`].
    ///
    /// # Examples
    /// ```
    /// use variantkey::chromosome::ChromId;
    /// use variantkey::key::VariantKey;
    /// use variantkey::refalt::RefAltCode;
    ///
    /// let key = VariantKey::pack(ChromId::new(9), 123_456, RefAltCode::new(0x0444_0000));
    /// let (chrom, pos, refalt) = key.unpack();
    /// assert_eq!(chrom, ChromId::new(9));
    /// assert_eq!(pos, 123_456);
    /// assert_eq!(refalt, RefAltCode::new(0x0444_0000));
    /// ```
    #[inline]
    #[must_use]
    pub const fn unpack(&self) -> (ChromId, u32, RefAltCode) {
        (self.chrom(), self.pos(), self.refalt())
    }

    /// Encodes a variant into its key.
    ///
    /// Resolves the chromosome name through the given resolver, encodes
    /// the allele pair (exactly when possible, as a digest otherwise)
    /// and packs the fields. The variant must already be normalized;
    /// no left-alignment or parsimony reduction happens here.
    ///
    /// # Examples
    /// ```
    /// use variantkey::chromosome::HumanChromosomes;
    /// use variantkey::key::VariantKey;
    ///
    /// let key = VariantKey::encode(&HumanChromosomes, "X", 193_154, b"GT", b"A");
    /// assert_eq!(key.chrom().get(), 23);
    /// assert_eq!(key.pos(), 193_154);
    /// assert!(key.refalt().is_reversible());
    /// ```
    #[must_use]
    pub fn encode<R: ChromosomeResolver + ?Sized>(
        resolver: &R,
        chrom: &str,
        pos: u32,
        reference: &[u8],
        alternate: &[u8],
    ) -> Self {
        let chrom = resolver.resolve(chrom);
        let refalt = RefAltCode::encode(reference, alternate);
        Self::pack(chrom, pos, refalt)
    }
}

impl Display for VariantKey {
    /// Formats the key as its fixed 16 digit lowercase hexadecimal
    /// form.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error occurring during parsing a hexadecimal variant key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseVariantKeyError {
    /// The string is not exactly 16 characters long.
    InvalidLength(usize),
    /// The string contains a non-hexadecimal character.
    InvalidDigit(char),
}

impl Display for ParseVariantKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseVariantKeyError::InvalidLength(len) => {
                write!(f, "Expected 16 hexadecimal digits, got {} characters", len)
            }
            ParseVariantKeyError::InvalidDigit(ch) => {
                write!(f, "Invalid hexadecimal digit: `{}`", ch)
            }
        }
    }
}

impl Error for ParseVariantKeyError {}

impl FromStr for VariantKey {
    type Err = ParseVariantKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 16 {
            return Err(ParseVariantKeyError::InvalidLength(s.chars().count()));
        }

        let mut value = 0u64;
        for ch in s.chars() {
            let digit = ch
                .to_digit(16)
                .ok_or(ParseVariantKeyError::InvalidDigit(ch))?;
            value = (value << 4) | u64::from(digit);
        }
        Ok(Self(value))
    }
}
