use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_hardbreaks_config::Config;
use markdown_hardbreaks_engine::{
    Conversion, Document, EditorHost, HardBreakFormat, IncrementalController, LineBuffer,
    convert_document, convert_range, find_candidates,
};
use std::{
    io::{BufRead, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(version, about = "Convert soft line breaks in Markdown prose into hard breaks", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config file (default: ~/.config/markdown-hardbreaks/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every soft break in a document
    Convert {
        /// Markdown file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Hard break marker: double-space or backslash
        #[arg(long)]
        format: Option<HardBreakFormat>,

        /// Rewrite FILE instead of printing the result
        #[arg(long, requires = "file")]
        in_place: bool,

        /// Only convert the line breaks ending lines A through B (1-based)
        #[arg(long, value_name = "A:B", value_parser = parse_line_range)]
        lines: Option<LineRange>,
    },
    /// List remaining soft breaks; exits non-zero if there are any
    Check {
        /// Markdown file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Hard break marker: double-space or backslash
        #[arg(long)]
        format: Option<HardBreakFormat>,
    },
    /// Feed stdin through the as-you-type converter, one line per Enter
    Live {
        /// Hard break marker: double-space or backslash
        #[arg(long)]
        format: Option<HardBreakFormat>,
    },
}

/// An inclusive, one-based range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineRange {
    first: usize,
    last: usize,
}

fn parse_line_range(s: &str) -> Result<LineRange, String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected A:B, got {s:?}"))?;
    let first: usize = a.trim().parse().map_err(|e| format!("bad start line {a:?}: {e}"))?;
    let last: usize = b.trim().parse().map_err(|e| format!("bad end line {b:?}: {e}"))?;
    if first == 0 || last < first {
        return Err(format!("line range {s:?} must satisfy 1 <= A <= B"));
    }
    Ok(LineRange { first, last })
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            file,
            format,
            in_place,
            lines,
        } => {
            let format = format.unwrap_or(config.hard_break_format);
            let doc = read_document(file.as_deref())?;
            let conversion = convert(&doc, lines, format);
            log::info!("{} soft breaks converted", conversion.rewrites.len());
            match file {
                Some(path) if in_place => {
                    if conversion.changed() {
                        write_atomic(&path, &conversion.text())?;
                    }
                }
                _ => print!("{}", conversion.text()),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { file, format } => {
            let format = format.unwrap_or(config.hard_break_format);
            let doc = read_document(file.as_deref())?;
            let name = file
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            let report = check_report(&name, &doc, format);
            print!("{report}");
            Ok(if report.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Live { format } => {
            let format = format.unwrap_or(config.hard_break_format);
            let controller =
                IncrementalController::new(format).with_enabled(config.auto_hard_breaks);
            let stdin = std::io::stdin();
            let text = run_live(stdin.lock(), controller)?;
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn convert(doc: &Document, lines: Option<LineRange>, format: HardBreakFormat) -> Conversion {
    match lines {
        Some(LineRange { first, last }) => {
            convert_range(doc, doc.lines_span(first - 1, last - 1), format)
        }
        None => convert_document(doc, format),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => Config::expand_path(p).unwrap_or_else(|| p.to_path_buf()),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", path.display());
    Ok(Config::load_or_default(&path)?)
}

fn read_document(file: Option<&Path>) -> Result<Document> {
    let bytes = match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    let name = file.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    Document::from_bytes(&bytes).with_context(|| format!("decoding {name}"))
}

/// Writes `text` next to `path` and renames it over the original.
fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// One `name:line: soft line break` entry per remaining soft break, with
/// one-based line numbers.
fn check_report(name: &str, doc: &Document, format: HardBreakFormat) -> String {
    find_candidates(doc, format)
        .iter()
        .map(|c| format!("{name}:{}: soft line break\n", c.line + 1))
        .collect()
}

fn run_live<R: BufRead>(input: R, mut controller: IncrementalController) -> Result<String> {
    let mut buffer = LineBuffer::new();
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        buffer.type_str(&line);
        deliver(&mut buffer, &mut controller);
        buffer.press_enter();
        deliver(&mut buffer, &mut controller);
    }
    Ok(buffer.text())
}

fn deliver(buffer: &mut LineBuffer, controller: &mut IncrementalController) {
    while buffer.take_notification() {
        let outcome = controller.on_edit(buffer);
        log::trace!("line {}: {outcome:?}", buffer.cursor().line);
    }
}
