use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use scel_reader::ScelDict;
use scel_reader::scel::batch::{self, BatchOptions};
use tracing_subscriber::EnvFilter;

/// Convert Sogou .scel dictionaries to ibus dictionary text.
#[derive(Parser, Debug)]
#[command(name = "scel2ibus", version, about)]
struct Args {
    /// Files or directories to convert. Directories are searched recursively.
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Source file extension to look for in directories.
    #[arg(long, env = "SCEL2IBUS_EXTENSION", default_value = "scel")]
    extension: String,

    /// Write outputs into this directory instead of next to the inputs.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip files that fail to convert instead of stopping.
    #[arg(long)]
    keep_going: bool,

    /// Print dictionary metadata instead of converting.
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scel_reader=info,scel2ibus=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.info {
        return print_info(&args);
    }

    let options = BatchOptions {
        extension: args.extension,
        output_dir: args.output_dir,
        keep_going: args.keep_going,
    };
    match batch::run(&args.paths, &options) {
        Ok(report) => {
            println!("Converted {} file(s)", report.converted.len());
            if report.failed.is_empty() {
                ExitCode::SUCCESS
            } else {
                eprintln!("Failed to convert {} file(s):", report.failed.len());
                for path in &report.failed {
                    eprintln!("  {}", path.display());
                }
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_info(args: &Args) -> ExitCode {
    let sources = match batch::discover(&args.paths, &args.extension) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut status = ExitCode::SUCCESS;
    for source in sources {
        println!("{}", source.path.display());
        match ScelDict::open(&source.path) {
            Ok(dict) => {
                let header = dict.header();
                println!("  Name: {}", header.name);
                println!("  Type: {}", header.dict_type);
                println!("  Description: {}", header.description);
                println!("  Example: {}", header.example);
                println!("  Pinyin entries: {}", dict.pinyin_table().len());
                println!("  Word groups: {}", dict.num_groups());
                println!("  Words: {}", dict.num_words());
            }
            Err(e) => {
                eprintln!("  ERROR: {}", e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
