use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use xtree::{AnnotatedNode, JsTreeNode, ParserConfig, TreeConfig};

#[derive(Debug, Parser)]
#[command(
    name = "xtree",
    version,
    about = "Convert XML into an annotated, path-addressed tree"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,
    /// Prefix paths with a leading slash
    #[arg(long)]
    root_slash: bool,
    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
    /// Append TEXT to the label of the node at PATH (an empty PATH decorates the root)
    #[arg(short, long, value_name = "PATH=TEXT")]
    decorate: Vec<String>,
    /// Maximum element nesting depth (0 or anything above 512 means 512)
    #[arg(long, default_value_t = xtree::xml::parser::DEFAULT_MAX_DEPTH)]
    max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = xtree::xml::parser::DEFAULT_MAX_SIZE)]
    max_size: usize,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Annotated tree as JSON
    Tree,
    /// jsTree node data as JSON
    Jstree,
    /// Indented text outline
    Outline,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let input = read_input(args.input.as_ref())?;
    let decorations = parse_decorations(&args.decorate)?;

    let parser_config = ParserConfig::new(args.max_depth, args.max_size);
    let doc = xtree::from_xml_str_with_config(&input, parser_config)
        .context("failed to parse xml")?;
    info!(root = %doc.root.name, "parsed document");

    let config = TreeConfig::new()
        .with_root_slash(args.root_slash)
        .with_max_depth(args.max_depth);
    let tree = if decorations.is_empty() {
        xtree::transform(&doc.root, &config)
    } else {
        xtree::transform_decorated(&doc.root, &config, |path| {
            Ok::<_, Infallible>(decorations.get(path).cloned().unwrap_or_default())
        })
    }
    .context("failed to build tree")?;
    debug!(nodes = tree.node_count(), "built tree");

    let rendered = render(&tree, args.format, args.pretty)?;
    write_output(args.output.as_ref(), rendered.as_bytes())
}

fn parse_decorations(entries: &[String]) -> Result<HashMap<String, String>> {
    entries
        .iter()
        .map(|entry| match entry.split_once('=') {
            Some((path, text)) => Ok((path.to_string(), text.to_string())),
            None => bail!("invalid --decorate value {entry:?}; expected PATH=TEXT"),
        })
        .collect()
}

fn render(tree: &AnnotatedNode, format: OutputFormat, pretty: bool) -> Result<String> {
    let mut output = match format {
        OutputFormat::Tree => to_json(tree, pretty)?,
        OutputFormat::Jstree => to_json(&JsTreeNode::from_root(tree), pretty)?,
        OutputFormat::Outline => {
            let mut out = String::new();
            write_outline(tree, 0, &mut out)?;
            out
        }
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to encode json")
}

fn write_outline(node: &AnnotatedNode, depth: usize, out: &mut String) -> Result<()> {
    let marker = if node.is_leaf_value { "-" } else { "+" };
    writeln!(
        out,
        "{:indent$}{marker} {}  [{}]",
        "",
        node.label,
        node.path,
        indent = depth * 2
    )?;
    for child in node.children() {
        write_outline(child, depth + 1, out)?;
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
