use std::fmt::{Display, Formatter};

use derive_more::Deref;
use serde::{Deserialize, Serialize};

/// Numeric chromosome identifier, as stored in a variant key.
///
/// The key reserves 5 bits for the chromosome, so only identifiers in
/// `0..=31` are representable; construction masks anything wider down
/// to its 5 lowest bits.
#[derive(
    Deref,
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct ChromId(u8);

impl ChromId {
    /// Number of bits a chromosome identifier occupies in a key.
    pub const BITS: u32 = 5;

    /// Largest representable identifier.
    pub const MAX: ChromId = ChromId((1 << Self::BITS) - 1);

    const MASK: u8 = (1 << Self::BITS) - 1;

    /// Constructs a new `ChromId`. Only the 5 lowest bits of `value`
    /// are used.
    ///
    /// # Examples
    /// ```
    /// use variantkey::chromosome::ChromId;
    ///
    /// assert_eq!(ChromId::new(23).get(), 23);
    /// assert_eq!(ChromId::new(0xFF), ChromId::MAX);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Gets the integer value of this `ChromId`.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Display for ChromId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps chromosome name strings to the 5 bit identifier space.
///
/// The codec never interprets chromosome names itself; name resolution
/// is injected through this trait so the core stays free of
/// process-wide lookup state. Closures with a matching signature
/// implement it directly.
pub trait ChromosomeResolver {
    /// Returns the identifier for a chromosome name.
    #[must_use]
    fn resolve(&self, name: &str) -> ChromId;
}

impl<F: Fn(&str) -> ChromId> ChromosomeResolver for F {
    fn resolve(&self, name: &str) -> ChromId {
        self(name)
    }
}

/// Stateless resolver for human reference chromosome names.
///
/// `"1"`–`"22"` map to 1–22, `"X"` to 23, `"Y"` to 24 and `"M"`/`"MT"`
/// to 25, each with or without a `chr` prefix. Everything else —
/// scaffolds, names with white-space or leading zeros — maps to 0.
///
/// # Examples
/// ```
/// use variantkey::chromosome::{ChromId, ChromosomeResolver, HumanChromosomes};
///
/// assert_eq!(HumanChromosomes.resolve("22"), ChromId::new(22));
/// assert_eq!(HumanChromosomes.resolve("chrX"), ChromId::new(23));
/// assert_eq!(HumanChromosomes.resolve("GL000207.1"), ChromId::new(0));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct HumanChromosomes;

impl HumanChromosomes {
    const X: u8 = 23;
    const Y: u8 = 24;
    const MT: u8 = 25;
    const UNKNOWN: u8 = 0;
}

impl ChromosomeResolver for HumanChromosomes {
    fn resolve(&self, name: &str) -> ChromId {
        let name = name.strip_prefix("chr").unwrap_or(name);
        let id = match name {
            "X" => Self::X,
            "Y" => Self::Y,
            "M" | "MT" => Self::MT,
            _ if name.starts_with(|c: char| c.is_ascii_digit() && c != '0') => {
                match name.parse::<u8>() {
                    Ok(num) if num <= 22 => num,
                    _ => Self::UNKNOWN,
                }
            }
            _ => Self::UNKNOWN,
        };
        ChromId::new(id)
    }
}
