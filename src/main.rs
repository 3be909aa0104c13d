use clap::Parser;
use pmpcc::emit::{CSourceWriter, ScoreJson};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pmpcc")]
#[command(version = "0.1.0")]
#[command(about = "Plain-text pmpc score to binary track compiler", long_about = None)]
struct Args {
    /// Input score file
    input: PathBuf,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSON instead of C source
    #[arg(short, long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Usage errors exit through clap with status 2; compile and IO failures
    // exit with status 1 so the two classes stay distinguishable.
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), pmpcc::Error> {
    let mut compiler = pmpcc::Compiler::new();
    let score = compiler.compile_file(&args.input)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        let json = ScoreJson::new(&score);
        serde_json::to_writer_pretty(&mut out, &json)?;
        out.write_all(b"\n")?;
    } else {
        CSourceWriter::new(&mut out).write_score(&score)?;
    }
    out.flush()?;

    Ok(())
}
