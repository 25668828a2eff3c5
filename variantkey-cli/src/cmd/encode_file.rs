use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use log::info;
use rayon::prelude::*;
use variantkey::chromosome::HumanChromosomes;
use variantkey::key::VariantKey;

pub fn encode_file(input: &Path, output: Option<&Path>, sort: bool) -> anyhow::Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(input)
        .with_context(|| format!("Could not open `{}`", input.display()))?;

    let mut variants = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Could not read record {}", line + 1))?;
        if record.len() < 4 {
            bail!(
                "Record {} has {} fields, expected chrom/pos/ref/alt",
                line + 1,
                record.len()
            );
        }

        let pos: u32 = record[1]
            .parse()
            .with_context(|| format!("Invalid position in record {}", line + 1))?;
        variants.push((
            record[0].to_string(),
            pos,
            record[2].to_string(),
            record[3].to_string(),
        ));
    }
    info!("Encoding {} variants", variants.len());

    let mut keys: Vec<VariantKey> = variants
        .par_iter()
        .map(|(chrom, pos, reference, alternate)| {
            VariantKey::encode(
                &HumanChromosomes,
                chrom,
                *pos,
                reference.as_bytes(),
                alternate.as_bytes(),
            )
        })
        .collect();

    if sort {
        keys.par_sort_unstable();
    }

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Could not create `{}`", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    for key in &keys {
        writeln!(writer, "{}", key)?;
    }
    writer.flush()?;

    Ok(())
}
