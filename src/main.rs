use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};

use huffc::{codec, container, logger, stats::Report};

#[derive(Parser)]
#[command(name = "huffc", version)]
#[command(about = "A lossless Huffman text compressor.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file
    Compress { input: PathBuf, output: PathBuf },
    /// Decompress a previously compressed file
    Decompress { input: PathBuf, output: PathBuf },
}

fn main() -> io::Result<()> {
    logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compress { input, output } => compress(&input, &output),
        Commands::Decompress { input, output } => decompress(&input, &output),
    }
}

fn compress(input: &Path, output: &Path) -> io::Result<()> {
    let text = fs::read_to_string(input)?;
    let encoded = codec::encode(&text)?;
    let bytes = container::to_bytes(&encoded)?;
    write_atomic(output, &bytes)?;

    tracing::info!(input = %input.display(), output = %output.display(), "compressed");
    println!("{}", Report::new(text.len() as u64, bytes.len() as u64));
    Ok(())
}

fn decompress(input: &Path, output: &Path) -> io::Result<()> {
    let data = fs::read(input)?;
    let encoded = container::from_bytes(&data)?;
    let text = codec::decode(&encoded.codes, &encoded.payload, encoded.bit_len)?;
    write_atomic(output, text.as_bytes())?;

    tracing::info!(input = %input.display(), output = %output.display(), "decompressed");
    println!("File decompressed: {}", output.display());
    Ok(())
}

// Write through a temp file and rename, so a failed run leaves no
// half-written output behind.
fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp = path.with_extension("tmp");
    fs::write(&temp, data)?;
    fs::rename(&temp, path)
}
