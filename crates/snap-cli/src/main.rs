use std::path::Path;

use anyhow::Context;
use clap::Parser;
use snap_config::SnapConfig;
use snap_core::MetadataBuilder;
use snap_parser::DocgenExtractor;
use snap_render::{CommandFormatter, TemplateEngine, TestWriter};

mod cli;
mod pipeline;
mod progress;
mod prompt;
mod ui;
mod walk;

fn main() {
    if let Err(error) = run() {
        eprintln!("snapgen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    ui::init(cli.quiet);

    let mut config =
        SnapConfig::load_with_dotenv().context("failed to load snapgen configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    let root = prompt::components_path(
        cli.components_path.as_deref(),
        &config.general.components_path,
    )?;
    if !root.is_dir() {
        anyhow::bail!("components path '{}' is not a directory", root.display());
    }

    let engine = load_template(&config)?;
    let extensions = config.extensions();
    let files = walk::collect_components(&root, &extensions, config.general.skip_tests);
    if files.is_empty() {
        println!("{}", pipeline::no_components_message(&extensions));
        return Ok(());
    }
    tracing::debug!(root = %root.display(), files = files.len(), "found component files");

    let mut writer = TestWriter::new(engine);
    if config.general.prettify {
        writer = writer.with_formatter(CommandFormatter::new(
            config.formatter.command.clone(),
            config.formatter.args.clone(),
        ));
    }
    let builder = MetadataBuilder::new(DocgenExtractor::new()).with_catalog(config.catalog());

    let progress = progress::Progress::bar(files.len() as u64, "generating snapshot tests");
    let report = pipeline::Pipeline::new(builder, writer).run(&root, &files, &progress);

    tracing::debug!(formatted = report.formatted, "formatter pass complete");
    if !cli.quiet {
        println!("{}", report.summary());
    }
    Ok(())
}

fn load_template(config: &SnapConfig) -> anyhow::Result<TemplateEngine> {
    let Some(template) = config.general.template_path() else {
        return TemplateEngine::builtin().context("failed to compile builtin template");
    };
    let path = std::env::current_dir()
        .context("failed to read current directory")?
        .join(Path::new(template));
    println!("Received custom template of: {}", path.display());
    TemplateEngine::from_file(&path)
        .with_context(|| format!("failed to load template '{}'", path.display()))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SNAPGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
