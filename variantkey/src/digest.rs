use sha3::{Digest, Sha3_256};

/// Number of bits of the non-reversible fingerprint.
pub(crate) const DIGEST_BITS: u32 = 30;

/// Fed to the hasher between REF and ALT. Allele strings are printable
/// ASCII and can never contain a NUL byte, so the boundary between the
/// two strings stays unambiguous.
const SEPARATOR: [u8; 1] = [0x00];

/// Computes the 30 bit fingerprint of an allele pair that cannot be
/// encoded reversibly.
///
/// The fingerprint is the SHA3-256 hash of `reference`, a NUL separator
/// and `alternate`, with the first four bytes read big-endian and
/// truncated to 30 bits. The same pair always hashes to the same value
/// on every platform; distinct pairs may collide.
#[must_use]
pub(crate) fn refalt_digest(reference: &[u8], alternate: &[u8]) -> u32 {
    let mut hasher = Sha3_256::new();
    hasher.update(reference);
    hasher.update(SEPARATOR);
    hasher.update(alternate);
    let hash = hasher.finalize();

    let word = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
    word >> (u32::BITS - DIGEST_BITS)
}

#[cfg(test)]
mod tests {
    use crate::digest::{refalt_digest, DIGEST_BITS};

    #[test]
    fn test_digest_is_deterministic() {
        let a = refalt_digest(b"ACGTACGTACGT", b"A");
        let b = refalt_digest(b"ACGTACGTACGT", b"A");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_known_values() {
        assert_eq!(refalt_digest(b"ACGTACGTACGT", b"A"), 0x31B9_B022);
        assert_eq!(refalt_digest(b"N", b"A"), 0x193D_2DB0);
        assert_eq!(refalt_digest(b"<DEL>", b"A"), 0x2DF8_40FF);
        assert_eq!(refalt_digest(b"acgt", b"A"), 0x2002_2BB3);
        assert_eq!(refalt_digest(b"A", b"*"), 0x26FF_DF03);
    }

    #[test]
    fn test_digest_fits_in_30_bits() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"ACGTACGTACGT", b"A"),
            (b"N", b"A"),
            (b"<INS>", b"ACGTN"),
            (b"", b"nnnnnnnnnnnnnnnn"),
        ];
        for (reference, alternate) in pairs {
            assert!(refalt_digest(reference, alternate) < (1 << DIGEST_BITS));
        }
    }

    #[test]
    fn test_digest_distinguishes_allele_boundary() {
        assert_ne!(refalt_digest(b"AB", b""), refalt_digest(b"A", b"B"));
        assert_ne!(refalt_digest(b"", b"AB"), refalt_digest(b"A", b"B"));
    }

    #[test]
    fn test_digest_differs_for_different_pairs() {
        assert_ne!(
            refalt_digest(b"ACGTACGTACGT", b"A"),
            refalt_digest(b"ACGTACGTACGT", b"C")
        );
        assert_ne!(refalt_digest(b"N", b"A"), refalt_digest(b"N", b"T"));
    }
}
