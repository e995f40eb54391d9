use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use huffman::{compress, decompress, Result};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let (mode, path) = match args.as_slice() {
        [_, mode, path] if mode == "c" || mode == "u" => (mode.as_str(), path.as_str()),
        _ => {
            eprintln!("usage: huffc c|u <file>");
            return ExitCode::FAILURE;
        }
    };
    match run(mode, path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("huffc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: &str, path: &str) -> Result<()> {
    let start = Instant::now();
    let input = fs::read(path)?;
    match mode {
        "c" => {
            fs::write(format!("{path}.huf"), compress(&input)?)?;
            println!(
                "compressed {path} in {:.3} seconds",
                start.elapsed().as_secs_f64()
            );
        }
        _ => {
            fs::write(format!("{path}.orig"), decompress(&input)?)?;
            println!(
                "uncompressed {path} in {:.3} seconds",
                start.elapsed().as_secs_f64()
            );
        }
    }
    Ok(())
}
