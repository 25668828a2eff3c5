use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use variantkey::chromosome::{ChromId, HumanChromosomes};
use variantkey::key::VariantKey;
use variantkey::nucleotide::Nucleotide;
use variantkey::refalt::RefAltCode;

#[test]
fn test_snv_round_trip() {
    let key = VariantKey::encode(&HumanChromosomes, "1", 10000, b"A", b"C");

    let (chrom, pos, refalt) = key.unpack();
    assert_eq!(chrom, ChromId::new(1));
    assert_eq!(pos, 10000);
    assert_eq!(refalt.to_alleles(), Some(("A".to_string(), "C".to_string())));
}

#[test]
fn test_insertion_round_trip() {
    let key = VariantKey::encode(&HumanChromosomes, "2", 55, b"", b"G");

    assert_eq!(
        key.refalt().to_alleles(),
        Some((String::new(), "G".to_string()))
    );
}

#[test]
fn test_full_payload_round_trip() {
    let key = VariantKey::encode(&HumanChromosomes, "3", 7, b"ACGTACGTACG", b"");

    assert_eq!(
        key.refalt().to_alleles(),
        Some(("ACGTACGTACG".to_string(), String::new()))
    );
}

#[test]
fn test_oversized_pair_is_not_reversible() {
    let key = VariantKey::encode(&HumanChromosomes, "4", 99, b"ACGTACGTACGT", b"A");

    assert!(!key.refalt().is_reversible());
    assert_eq!(key.refalt().to_alleles(), None);
    // coordinates survive the digest mode unchanged
    assert_eq!(key.chrom(), ChromId::new(4));
    assert_eq!(key.pos(), 99);
}

#[test]
fn test_symbolic_allele_is_not_reversible() {
    let key = VariantKey::encode(&HumanChromosomes, "5", 1234, b"N", b"A");

    assert!(!key.refalt().is_reversible());
    assert_eq!(key.refalt().to_alleles(), None);
}

#[test]
fn test_keys_sort_like_coordinates() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);

    let mut coords: Vec<(u8, u32)> = (0..500)
        .map(|_| (rng.gen_range(0..32), rng.gen_range(0..=VariantKey::MAX_POS)))
        .collect();
    let mut keys: Vec<VariantKey> = coords
        .iter()
        .map(|&(chrom, pos)| {
            let refalt = RefAltCode::new(rng.gen::<u32>());
            VariantKey::pack(ChromId::new(chrom), pos, refalt)
        })
        .collect();

    coords.sort_unstable();
    keys.sort_unstable();

    let sorted_coords: Vec<(u8, u32)> = keys
        .iter()
        .map(|key| (key.chrom().get(), key.pos()))
        .collect();
    assert_eq!(sorted_coords, coords);
}

#[test]
fn test_random_reversible_pairs_round_trip() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xDA7A);

    for _ in 0..2000 {
        let total = rng.gen_range(0..=RefAltCode::MAX_REVERSIBLE_BASES);
        let ref_len = rng.gen_range(0..=total);
        let random_allele = |rng: &mut Xoshiro256PlusPlus, len: usize| -> Vec<u8> {
            (0..len)
                .map(|_| Nucleotide::from_code(rng.gen_range(0..4)).to_ascii())
                .collect()
        };
        let reference = random_allele(&mut rng, ref_len);
        let alternate = random_allele(&mut rng, total - ref_len);

        let chrom = rng.gen_range(0..32u8);
        let pos = rng.gen_range(0..=VariantKey::MAX_POS);
        let key = VariantKey::pack(
            ChromId::new(chrom),
            pos,
            RefAltCode::encode(&reference, &alternate),
        );

        assert_eq!(key.chrom().get(), chrom);
        assert_eq!(key.pos(), pos);

        let (mut ref_buf, mut alt_buf) = ([0u8; 11], [0u8; 11]);
        let lengths = key
            .refalt()
            .decode(&mut ref_buf, &mut alt_buf)
            .expect("pairs drawn from ACGT must stay reversible");
        assert_eq!(&ref_buf[..lengths.ref_len], reference.as_slice());
        assert_eq!(&alt_buf[..lengths.alt_len], alternate.as_slice());
    }
}

#[test]
fn test_random_keys_survive_hex_round_trip() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x4E3B);

    for _ in 0..1000 {
        let key = VariantKey::new(rng.gen::<u64>());
        let hex = key.to_string();

        assert_eq!(hex.len(), 16);
        assert_eq!(hex.parse::<VariantKey>(), Ok(key));
    }
}
