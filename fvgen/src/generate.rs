use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use libcorner::sequence::{ElementWidth, assemble};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::args::Cli;
use crate::dump;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let width = ElementWidth::try_from(cli.sew)?;
    width.check_setcorner(cli.corner)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);

    for _ in 0..cli.count {
        let seeds = [rng.random(), rng.random(), rng.random()];
        let selector = rng.random();
        let words = assemble(seeds, selector, width, cli.corner)?;

        write_triple(&mut out, &words, cli.first_only)?;
        if cli.dump {
            for word in &words {
                println!("{}", dump::format_word(*word, width));
            }
            println!();
        }
    }
    out.flush()
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    tracing::info!(
        "Wrote {} operand triples ({}-bit lanes) to {}",
        cli.count,
        width.bits(),
        cli.output.display()
    );
    Ok(())
}

fn write_triple(out: &mut impl Write, words: &[u64; 3], first_only: bool) -> anyhow::Result<()> {
    writeln!(out, "{:016x}", words[0])?;
    if first_only {
        writeln!(out, "{:016x}", 0u64)?;
        writeln!(out, "{:016x}", 0u64)?;
    } else {
        writeln!(out, "{:016x}", words[1])?;
        writeln!(out, "{:016x}", words[2])?;
    }
    Ok(())
}
