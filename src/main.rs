use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use mdpost::convert;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Convert blog-post Markdown into HTML fragments")]
struct Cli {
    /// Write <input>.html beside each input instead of printing to stdout
    #[arg(long = "write", requires = "files")]
    write: bool,
    /// Markdown files to convert
    files: Vec<PathBuf>,
}

/// Entry point for the command-line converter.
///
/// With no files, reads Markdown from standard input and prints the
/// fragment to standard output. With files, prints each fragment in
/// argument order, or with `--write` converts the files in parallel and
/// stores each fragment beside its input.
///
/// # Examples
///
/// ```sh
/// # Convert a post and print the fragment
/// mdpost post.md
///
/// # Convert several posts to .html siblings
/// mdpost --write posts/*.md
///
/// # Convert from standard input
/// cat post.md | mdpost
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", convert(&input));
        return Ok(());
    }

    if cli.write {
        cli.files.par_iter().try_for_each(|path| {
            mdpost::io::write_fragment(path)
                .with_context(|| format!("failed to convert {}", path.display()))
        })?;
        return Ok(());
    }

    for path in &cli.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        println!("{}", convert(&text));
    }

    Ok(())
}
