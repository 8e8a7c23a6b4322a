use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;

use paydiff_diff::{compare, compare_by_key, ComparisonResult, DiffKind};
use paydiff_server::{PaydiffServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Diff(args) => cmd_diff(args, cli.format),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    PaydiffServer::new(config).serve().await?;
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let left = read_json(&args.left)?;
    let right = read_json(&args.right)?;

    let result = match &args.key {
        Some(key) => compare_by_key(&left, &right, key),
        None => compare(&left, &right),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_text_diff(&result),
    }
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_text_diff(result: &ComparisonResult) {
    if !result.has_changes {
        println!("No changes.");
        return;
    }
    for diff in &result.diffs {
        let path = if diff.path.is_empty() { "(root)" } else { diff.path.as_str() };
        match diff.kind {
            DiffKind::Added => {
                println!("{} {}: {}", "+".green().bold(), path, render(&diff.new_value).green());
            }
            DiffKind::Removed => {
                println!("{} {}: {}", "-".red().bold(), path, render(&diff.old_value).red());
            }
            DiffKind::Modified => {
                println!(
                    "{} {}: {} -> {}",
                    "~".yellow().bold(),
                    path,
                    render(&diff.old_value).red(),
                    render(&diff.new_value).green()
                );
            }
        }
    }
    println!(
        "\n{} changes ({} added, {} removed, {} modified)",
        result.total_changes.to_string().bold(),
        result.additions(),
        result.removals(),
        result.modifications()
    );
}

fn render(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
