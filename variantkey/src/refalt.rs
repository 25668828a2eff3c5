use std::fmt::{Display, Formatter};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::digest::refalt_digest;
use crate::nucleotide::Nucleotide;

/// Code for a REF+ALT allele pair, as a single number.
///
/// The code occupies the 31 lowest bits of the value and comes in two
/// modes, distinguished by bit 30:
///
/// * **Reversible** (bit 30 clear): bits 29–26 hold the REF length,
///   bits 25–22 the ALT length, and bits 21–0 the base codes — 2 bits
///   per base ([`Nucleotide`]), REF bases followed by ALT bases, packed
///   from the most significant end with trailing bits zero. Eleven
///   bases fill the payload exactly.
/// * **Digest** (bit 30 set): bits 29–0 hold a deterministic
///   fingerprint of the pair. The original strings cannot be recovered
///   from this mode.
///
/// [`encode`](Self::encode) picks the mode: pairs of up to 11 combined
/// uppercase `A`/`C`/`G`/`T` bases get the reversible mode, everything
/// else the digest.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RefAltCode(u32);

/// Number of REF and ALT characters carried by a reversible code.
///
/// The lengths are always the true allele lengths stored in the code,
/// even when an output buffer was too small to receive every character;
/// callers detect truncation by comparing a length against the capacity
/// they supplied.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct AlleleLengths {
    /// Number of characters of the reference allele.
    pub ref_len: usize,
    /// Number of characters of the alternate allele.
    pub alt_len: usize,
}

impl AlleleLengths {
    /// Total number of REF+ALT characters.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ref_len + self.alt_len
    }
}

impl RefAltCode {
    /// Number of meaningful bits in a REF+ALT code.
    pub const BITS: u32 = 31;

    /// Maximum combined number of REF and ALT bases the reversible mode
    /// can hold.
    pub const MAX_REVERSIBLE_BASES: usize = 11;

    const VALUE_MASK: u32 = (1 << Self::BITS) - 1;
    const MODE_MASK: u32 = 1 << 30;
    const REF_LEN_SHIFT: u32 = 26;
    const ALT_LEN_SHIFT: u32 = 22;
    const LEN_MASK: u32 = 0xF;
    const BASES_BITS: u32 = 22;

    /// Constructs a new `RefAltCode`. Only the 31 lowest bits of
    /// `value` are used.
    ///
    /// # Examples
    /// ```
    /// use variantkey::refalt::RefAltCode;
    ///
    /// let code = RefAltCode::new(0x0444_0000);
    /// assert_eq!(code.get(), 0x0444_0000);
    /// assert_eq!(RefAltCode::new(u32::MAX).get(), 0x7FFF_FFFF);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & Self::VALUE_MASK)
    }

    /// Gets the integer value of this `RefAltCode`.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the original allele strings can be recovered
    /// from this code.
    #[inline]
    #[must_use]
    pub const fn is_reversible(&self) -> bool {
        self.0 & Self::MODE_MASK == 0
    }

    /// Encodes an allele pair.
    ///
    /// Pairs with a combined length of at most
    /// [`MAX_REVERSIBLE_BASES`](Self::MAX_REVERSIBLE_BASES) characters,
    /// all of them uppercase `A`/`C`/`G`/`T`, are stored exactly; either
    /// allele may be empty. Every other pair is stored as a one-way
    /// digest. Both alleles must already be normalized.
    ///
    /// # Examples
    /// ```
    /// use variantkey::refalt::RefAltCode;
    ///
    /// let code = RefAltCode::encode(b"A", b"C");
    /// assert_eq!(code.get(), 0x0444_0000);
    /// assert!(code.is_reversible());
    ///
    /// let code = RefAltCode::encode(b"N", b"A");
    /// assert!(!code.is_reversible());
    /// ```
    #[must_use]
    pub fn encode(reference: &[u8], alternate: &[u8]) -> Self {
        match Self::encode_reversible(reference, alternate) {
            Some(code) => code,
            None => Self::encode_digest(reference, alternate),
        }
    }

    fn encode_reversible(reference: &[u8], alternate: &[u8]) -> Option<Self> {
        if reference.len() + alternate.len() > Self::MAX_REVERSIBLE_BASES {
            return None;
        }

        let mut bases = 0;
        let mut shift = Self::BASES_BITS;
        for &byte in reference.iter().chain(alternate) {
            let base = Nucleotide::from_ascii(byte)?;
            shift -= Nucleotide::BITS;
            bases |= base.code() << shift;
        }

        let code = ((reference.len() as u32) << Self::REF_LEN_SHIFT)
            | ((alternate.len() as u32) << Self::ALT_LEN_SHIFT)
            | bases;
        Some(Self(code))
    }

    fn encode_digest(reference: &[u8], alternate: &[u8]) -> Self {
        trace!("allele pair not reversible, falling back to the digest mode");
        Self(Self::MODE_MASK | refalt_digest(reference, alternate))
    }

    /// Decodes the allele pair into the given buffers, if this code is
    /// reversible.
    ///
    /// Returns `None` for a digest-mode code, leaving both buffers
    /// untouched. Otherwise the REF and ALT characters are written to
    /// `ref_buf` and `alt_buf` and their true lengths returned; output
    /// beyond a buffer's capacity is dropped, never written out of
    /// bounds.
    ///
    /// # Examples
    /// ```
    /// use variantkey::refalt::RefAltCode;
    ///
    /// let code = RefAltCode::encode(b"GT", b"A");
    /// let (mut ref_buf, mut alt_buf) = ([0u8; 11], [0u8; 11]);
    /// let lengths = code.decode(&mut ref_buf, &mut alt_buf).unwrap();
    /// assert_eq!(lengths.total(), 3);
    /// assert_eq!(&ref_buf[..lengths.ref_len], b"GT");
    /// assert_eq!(&alt_buf[..lengths.alt_len], b"A");
    /// ```
    pub fn decode(&self, ref_buf: &mut [u8], alt_buf: &mut [u8]) -> Option<AlleleLengths> {
        if !self.is_reversible() {
            return None;
        }
        Some(self.decode_reversible(ref_buf, alt_buf))
    }

    /// Decodes the allele pair of a code already known to be
    /// reversible, skipping the mode check.
    ///
    /// Intended for hot loops where the caller has tested
    /// [`is_reversible`](Self::is_reversible) once up front; use
    /// [`decode`](Self::decode) otherwise. Called on a digest-mode code
    /// it returns meaningless lengths and bases. The buffer contract is
    /// the same as for `decode`.
    pub fn decode_reversible(&self, ref_buf: &mut [u8], alt_buf: &mut [u8]) -> AlleleLengths {
        debug_assert!(self.is_reversible());

        let ref_len = ((self.0 >> Self::REF_LEN_SHIFT) & Self::LEN_MASK) as usize;
        let alt_len = ((self.0 >> Self::ALT_LEN_SHIFT) & Self::LEN_MASK) as usize;

        let mut shift = Self::BASES_BITS;
        let next_base = |shift: &mut u32| {
            *shift = shift.saturating_sub(Nucleotide::BITS);
            Nucleotide::from_code(self.0 >> *shift).to_ascii()
        };

        for slot in 0..ref_len {
            let byte = next_base(&mut shift);
            if let Some(out) = ref_buf.get_mut(slot) {
                *out = byte;
            }
        }
        for slot in 0..alt_len {
            let byte = next_base(&mut shift);
            if let Some(out) = alt_buf.get_mut(slot) {
                *out = byte;
            }
        }

        AlleleLengths { ref_len, alt_len }
    }

    /// Decodes the allele pair into freshly allocated strings, if this
    /// code is reversible.
    ///
    /// Allocating convenience wrapper around [`decode`](Self::decode)
    /// for callers outside the hot path.
    #[must_use]
    pub fn to_alleles(&self) -> Option<(String, String)> {
        let mut ref_buf = [0u8; Self::MAX_REVERSIBLE_BASES];
        let mut alt_buf = [0u8; Self::MAX_REVERSIBLE_BASES];
        let lengths = self.decode(&mut ref_buf, &mut alt_buf)?;

        let ref_end = lengths.ref_len.min(ref_buf.len());
        let alt_end = lengths.alt_len.min(alt_buf.len());
        let reference = String::from_utf8_lossy(&ref_buf[..ref_end]).into_owned();
        let alternate = String::from_utf8_lossy(&alt_buf[..alt_end]).into_owned();
        Some((reference, alternate))
    }
}

impl Display for RefAltCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}
