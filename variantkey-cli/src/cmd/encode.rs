use log::debug;
use variantkey::chromosome::HumanChromosomes;
use variantkey::key::VariantKey;

pub fn encode(chrom: &str, pos: u32, reference: &str, alternate: &str) {
    let key = VariantKey::encode(
        &HumanChromosomes,
        chrom,
        pos,
        reference.as_bytes(),
        alternate.as_bytes(),
    );
    debug!("chromosome `{}` resolved to id {}", chrom, key.chrom());

    println!("{}", key);
}
