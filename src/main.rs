use clap::{Parser, Subcommand};
use mdx_index::{config, index, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdx-index")]
#[command(about = "Build-time tutorial indexer for MDX content sites")]
#[command(long_about = "\
Build-time tutorial indexer for MDX content sites

Your filesystem is the data source. Directories become tutorial groups,
.mdx files become links, and each file's first-line heading becomes its
title.

Content structure:

  pages/
  ├── config.toml                    # Index config (optional)
  ├── design-patterns/               # Group (\"Design Patterns\")
  │   ├── command-pattern.mdx        # First line: \"# Command Pattern\"
  │   └── factory-pattern.mdx
  ├── clean-code/                    # Group (\"Clean Code\")
  │   └── meaningful-names.mdx
  └── notes.txt                      # Not .mdx → ignored

Derivation rules:
  Title:  first line, heading marker stripped (\"# Command Pattern\" → \"Command Pattern\")
  Href:   relative path, extension stripped (design-patterns/command-pattern)
  Group:  top directory segment, title-cased (design-patterns → \"Design Patterns\")

Run 'mdx-index gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "pages", global = true)]
    source: PathBuf,

    /// Path of the generated index file
    #[arg(long, default_value = "index.json", global = true)]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Index the content directory and write the JSON index
    Index,
    /// Validate the content directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Index => {
            let result = index::index(&cli.source)?;
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&cli.out, json)?;
            output::print_index_output(&result);
            println!("==> Index written to {}", cli.out.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let result = index::index(&cli.source)?;
            output::print_index_output(&result);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
