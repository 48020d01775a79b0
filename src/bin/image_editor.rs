//! Command-line front end for the grid operators.
//!
//! # Usage
//!
//! ```bash
//! image_editor in.png out.png --op downsample=4,2
//! image_editor in.png out.png --op rotate=90 --op patch=10,20,0,0,0,logo.png
//! image_editor in.png out.png --op rotate=45 --strict   # fails instead of ignoring
//! image_editor tiny.png tiny-out.png --print            # dump pixels to stdout
//! ```
//!
//! Operations run in the order given. Warnings (such as a non-RGB source) are
//! shown by default; set `RUST_LOG=debug` to see which operations were skipped.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rusty_grid::{FileStore, ImageEditor, Operation};

#[derive(Debug, Parser)]
#[command(name = "image_editor", version, about = "Rotate, downsample and patch images")]
struct Cli {
    /// Image to edit
    input: PathBuf,

    /// Where to write the edited image (always PNG)
    output: PathBuf,

    /// Editing step: rotate=DEG, downsample=HS,WS or patch=ROW,COL,R,G,B,PATH
    #[arg(long = "op", value_name = "OP")]
    ops: Vec<Operation>,

    /// Fail on parameters that would otherwise be ignored
    #[arg(long)]
    strict: bool,

    /// Print the edited grid to stdout, one row per line
    #[arg(long)]
    print: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = FileStore;
    let mut editor = ImageEditor::open_with(&store, &cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    for op in &cli.ops {
        op.apply(&mut editor, &store, cli.strict)
            .with_context(|| format!("applying {op}"))?;
        info!(
            "{op}: grid is now {}x{}",
            editor.grid().height(),
            editor.grid().width()
        );
    }

    if cli.print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        editor.print_image(&mut out).context("printing grid")?;
        out.flush().context("printing grid")?;
    }

    editor
        .save_with(&store, &cli.output)
        .with_context(|| format!("saving {}", cli.output.display()))
}
