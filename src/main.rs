use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{debug, LevelFilter};
use std::{env, path::PathBuf};

use inidoc::{
    convert::Format,
    utils::{read_input, write_output},
    Escaping,
};

#[derive(Parser, Debug)]
#[clap(name = "inidoc", version = "0.1.0")]
pub struct Opts {
    #[clap(flatten)]
    pub file_cmd: FileCmd,
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Parser, Debug)]
pub struct FileCmd {
    /// input file, stdin if omitted
    pub input: Option<PathBuf>,
    /// output file, stdout if omitted
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    #[clap(short, long, value_enum)]
    pub from: Option<Format>,
    #[clap(short, long, value_enum)]
    pub to: Option<Format>,
    /// read and write INI values without backslash escapes
    #[clap(long)]
    pub no_escape: bool,
    /// overwrite an existing output file without asking
    #[clap(short, long)]
    pub yes: bool,
}

pub fn run(opts: Opts) -> Result<()> {
    let file_cmd = opts.file_cmd;
    let input = file_cmd.input;
    let output = file_cmd.output;

    let escaping = if file_cmd.no_escape {
        Escaping::None
    } else {
        Escaping::Backslash
    };

    let from = file_cmd
        .from
        .or_else(|| input.as_ref().and_then(Format::from_path))
        .unwrap_or_default();
    let to = file_cmd
        .to
        .or_else(|| output.as_ref().and_then(Format::from_path))
        .unwrap_or_default();
    debug!("Converting {from:?} -> {to:?} with {escaping:?} escaping");

    let input_bytes = read_input(input.as_deref())?;
    let source = input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    let document = from
        .read(&input_bytes, escaping)
        .with_context(|| format!("Failed to read {source} as {from:?}"))?;
    debug!(
        "Read {} section(s) and {} global properties",
        document.len(),
        document.global_section().len()
    );

    let buf = to
        .write(&document, escaping)
        .with_context(|| format!("Failed to render document as {to:?}"))?;
    write_output(output.as_deref(), &buf, file_cmd.yes)
}

#[allow(unused_variables)]
fn init_logger(opts: &Opts) {
    let rust_log = env::var("RUST_LOG").ok()
        .map(|val| val.to_lowercase());

    let mut builder = Builder::from_default_env();

    #[cfg(debug_assertions)]
    {
        if rust_log.is_none() {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    #[cfg(not(debug_assertions))]
    {
        builder
            .format_module_path(false)
            .format_target(false)
            .format_timestamp(None);

        if rust_log.is_none() {
            let log_level = match opts.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };

            builder.filter(None, log_level);
        }
    }

    builder.init();
}

fn main() {
    let opts = Opts::parse();

    init_logger(&opts);

    if let Err(e) = run(opts) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
