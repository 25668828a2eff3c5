use anyhow::Context;
use variantkey::key::VariantKey;

/// Prints one tab-separated line per key: chromosome id, position,
/// REF+ALT code and — when the code is reversible — the recovered
/// alleles. Non-reversible alleles are printed as `.`.
pub fn decode(keys: &[String]) -> anyhow::Result<()> {
    for key in keys {
        let key: VariantKey = key
            .parse()
            .with_context(|| format!("Could not parse `{}` as a variant key", key))?;

        match key.refalt().to_alleles() {
            Some((reference, alternate)) => println!(
                "{}\t{}\t{}\t{}\t{}",
                key.chrom(),
                key.pos(),
                key.refalt(),
                reference,
                alternate
            ),
            None => println!("{}\t{}\t{}\t.\t.", key.chrom(), key.pos(), key.refalt()),
        }
    }

    Ok(())
}
