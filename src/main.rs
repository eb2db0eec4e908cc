use abidoc::{
    parse_source, render_tree, DocSetRenderer, HtmlPage, OutputFormat, RenderContext, SiteConfig,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "abidoc")]
#[command(about = "Render smart-contract ABI metadata as documentation")]
struct Args {
    /// solc AST, standard-JSON output, build-info, artifact, or JSON ABI file
    input: PathBuf,

    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site theme config (JSON) for HTML pages
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only render the contract with this name
    #[arg(long)]
    contract: Option<String>,

    /// Include internal and private functions and variables
    #[arg(long)]
    show_internal: bool,

    /// Emit the HTML body only, without the page wrapper
    #[arg(long)]
    fragment: bool,

    /// Log filter, e.g. "debug" or "abidoc=trace"
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let json_content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim_end_matches(".abi").to_string());

    let mut doc_set = parse_source(&json_content, stem.as_deref())
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    if let Some(name) = &args.contract {
        let Some(contract) = doc_set.contract(name).cloned() else {
            bail!("contract `{}` not found in {}", name, args.input.display());
        };
        doc_set.contracts = vec![contract];
    }

    info!(contracts = doc_set.contracts.len(), "rendering");

    let context = RenderContext::new().with_show_internal(args.show_internal);
    let tree = DocSetRenderer.render(&doc_set, &context);
    if tree.is_empty() {
        warn!(input = %args.input.display(), "no documented contracts found");
    }

    let output = if args.format == OutputFormat::Html && !args.fragment {
        let config = SiteConfig::load(args.config.as_deref())?;
        let title = match doc_set.contracts.as_slice() {
            [only] => only.name.clone(),
            _ => stem.unwrap_or_else(|| "Contracts".to_string()),
        };
        HtmlPage::new(&config).render(&title, doc_set.source.as_deref(), &tree)
    } else {
        render_tree(&tree, args.format)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), bytes = output.len(), "wrote output");
        }
        None => print!("{}", output),
    }

    Ok(())
}
