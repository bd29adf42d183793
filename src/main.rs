use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use ansitext::{
    Needle,
    PadOptions,
    PadSide,
    WidthMode,
    WrapOptions,
    highlight,
    highlight_all,
    measure,
    pad_with_mode,
    strip,
    truncate_with_mode,
    wrap_with,
};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rayon::prelude::*;
use regex::Regex;

#[derive(Parser)]
#[command(version, about = "Lay out text containing ANSI escape sequences")]
struct Cli {
    /// Measure terminal display columns instead of codepoints
    #[arg(long, global = true)]
    display: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Input {
    /// Files to read; standard input is used when none are given
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Remove escape sequences
    Strip {
        #[command(flatten)]
        input: Input,
    },
    /// Print the widest row and the number of rows as WIDTHxHEIGHT
    Measure {
        #[command(flatten)]
        input: Input,
    },
    /// Reflow paragraphs to a width
    Wrap {
        #[arg(short, long, default_value_t = ansitext::wrap::DEFAULT_WIDTH)]
        width: usize,
        /// Prefix for the first line of each paragraph
        #[arg(long, default_value = "")]
        indent: String,
        /// Prefix for every other line
        #[arg(long, default_value = "")]
        subsequent_indent: String,
        #[arg(long, default_value_t = ansitext::wrap::DEFAULT_TAB_WIDTH)]
        tab_width: usize,
        /// Pad every line with spaces up to the width
        #[arg(long)]
        pad: bool,
        /// Do not reset and replay colours around line breaks
        #[arg(long)]
        no_color_resets: bool,
        /// Report the narrowest and widest word on standard error
        #[arg(long)]
        stats: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Pad each line to a width
    Pad {
        #[arg(short, long)]
        width: usize,
        /// Where the padding goes: right, left or center
        #[arg(long, default_value = "right")]
        side: PadSide,
        #[arg(long, default_value_t = ' ')]
        fill: char,
        /// Truncate lines wider than the width
        #[arg(long)]
        truncate: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Truncate each line to a width
    Truncate {
        #[arg(short, long)]
        width: usize,
        #[command(flatten)]
        input: Input,
    },
    /// Highlight occurrences of a needle
    Highlight {
        needle: String,
        /// Treat the needle as a regular expression
        #[arg(long)]
        regex: bool,
        /// Highlight every occurrence instead of the first
        #[arg(long)]
        all: bool,
        /// SGR parameters of the highlight, for example `1;33`
        #[arg(long, default_value = "7")]
        sgr: String,
        #[command(flatten)]
        input: Input,
    },
}

impl Command {
    fn input(&self) -> &Input {
        match self {
            Command::Strip { input }
            | Command::Measure { input }
            | Command::Wrap { input, .. }
            | Command::Pad { input, .. }
            | Command::Truncate { input, .. }
            | Command::Highlight { input, .. } => input,
        }
    }
}

/// A command with its options validated and compiled once.
enum Job {
    Strip,
    Measure,
    Wrap(WrapOptions),
    Pad(usize, PadOptions),
    Truncate(usize),
    Highlight { needle: Matcher, all: bool, code: String },
}

enum Matcher {
    Literal(String),
    Pattern(Regex),
}

fn build_job(command: &Command, mode: WidthMode) -> anyhow::Result<Job> {
    let job = match command {
        Command::Strip { .. } => Job::Strip,
        Command::Measure { .. } => Job::Measure,
        Command::Wrap {
            width,
            indent,
            subsequent_indent,
            tab_width,
            pad,
            no_color_resets,
            stats,
            ..
        } => {
            let opts = WrapOptions::new(*width)
                .with_initial_indent(indent.as_str())
                .with_subsequent_indent(subsequent_indent.as_str())
                .with_tab_width(*tab_width)
                .with_pad(*pad)
                .with_stats(*stats)
                .with_color_resets(!*no_color_resets)
                .with_mode(mode);
            opts.validate()?;
            Job::Wrap(opts)
        }
        Command::Pad {
            width,
            side,
            fill,
            truncate,
            ..
        } => {
            let opts = PadOptions::new()
                .with_side(*side)
                .with_fill(*fill)?
                .with_truncate(*truncate);
            Job::Pad(*width, opts)
        }
        Command::Truncate { width, .. } => Job::Truncate(*width),
        Command::Highlight {
            needle,
            regex,
            all,
            sgr,
            ..
        } => {
            if !sgr.split(';').all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
                bail!("invalid SGR parameters `{sgr}`");
            }
            let needle = if *regex {
                Matcher::Pattern(
                    Regex::new(needle).with_context(|| format!("invalid pattern `{needle}`"))?,
                )
            } else {
                Matcher::Literal(needle.clone())
            };
            Job::Highlight {
                needle,
                all: *all,
                code: format!("\x1b[{sgr}m"),
            }
        }
    };
    Ok(job)
}

fn map_lines(text: &str, f: impl Fn(&str) -> String) -> String {
    text.lines().map(f).collect::<Vec<_>>().join("\n")
}

fn run_job(job: &Job, mode: WidthMode, text: &str) -> anyhow::Result<String> {
    let out = match job {
        Job::Strip => strip(text).into_owned(),
        Job::Measure => measure(text).to_string(),
        Job::Wrap(opts) => {
            let wrapped = wrap_with(text, opts)?;
            if let Some(stats) = wrapped.stats {
                eprintln!(
                    "min word width: {}, max word width: {}",
                    stats.min_word_width, stats.max_word_width
                );
            }
            wrapped.text
        }
        Job::Pad(width, opts) => {
            map_lines(text, |line| pad_with_mode(mode, line, *width, opts).into_owned())
        }
        Job::Truncate(width) => {
            map_lines(text, |line| truncate_with_mode(mode, line, *width).0.into_owned())
        }
        Job::Highlight { needle, all, code } => {
            let needle = match needle {
                Matcher::Literal(lit) => Needle::Literal(lit),
                Matcher::Pattern(re) => Needle::Pattern(re),
            };
            if *all {
                highlight_all(text, needle, code).into_owned()
            } else {
                highlight(text, needle, code).into_owned()
            }
        }
    };
    Ok(out)
}

fn process_path(path: &Path, job: &Job, mode: WidthMode) -> anyhow::Result<String> {
    debug!("processing {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    run_job(job, mode, &text)
}

fn emit(out: &str) {
    println!("{}", out.strip_suffix('\n').unwrap_or(out));
}

/// Entry point for the `ansitext` command-line tool.
///
/// Reads each file (in parallel) or standard input, applies the selected
/// command and prints the results in input order. Set `RUST_LOG=debug` to
/// trace which files are processed.
///
/// # Examples
///
/// ```sh
/// # Wrap coloured output to 40 columns
/// ls --color=always | ansitext wrap --width 40
///
/// # Right-align CJK text in 12 terminal columns
/// ansitext --display pad --width 12 --side left names.txt
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mode = if cli.display {
        WidthMode::Display
    } else {
        WidthMode::Chars
    };
    let job = build_job(&cli.command, mode)?;
    let files = &cli.command.input().files;

    if files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        emit(&run_job(&job, mode, &input)?);
        return Ok(());
    }

    info!("processing {} files", files.len());
    let results: Vec<anyhow::Result<String>> = files
        .par_iter()
        .map(|path| process_path(path, &job, mode))
        .collect();
    for result in results {
        emit(&result?);
    }
    Ok(())
}
