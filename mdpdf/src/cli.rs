use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdpdf_config::Config;

/// Command line interface for mdpdf
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "mdpdf: Markdown to PDF with templates",
  after_help = "With no FILES, every *.md file of the current directory is \
                converted."
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Markdown files to convert.
  pub files: Vec<PathBuf>,

  /// Template to use, looked up in ~/.mdpdf/templates, the configured
  /// template directories, then ./templates.
  #[arg(short, long)]
  pub template: Option<String>,

  /// Do not print the page header.
  #[arg(long)]
  pub no_header: bool,

  /// Do not print the page footer.
  #[arg(long)]
  pub no_footer: bool,

  /// Stylesheet overriding the template's.
  #[arg(long)]
  pub css: Option<PathBuf>,

  /// Logo overriding the template's.
  #[arg(long)]
  pub logo: Option<PathBuf>,

  /// Output file. Only valid with a single input file.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Directory receiving generated files.
  #[arg(long)]
  pub output_dir: Option<PathBuf>,

  /// First heading level included in the table of contents.
  #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
  pub toc_start: Option<u8>,

  /// Last heading level included in the table of contents.
  #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
  pub toc_depth: Option<u8>,

  /// Write the assembled HTML instead of a PDF. Does not need a browser.
  #[arg(long)]
  pub html: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mdpdf CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new mdpdf configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mdpdf.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// List the templates available in every search directory.
  ListTemplates,

  /// Export the built-in template to a directory for customization.
  ExportTemplate {
    /// Output directory for template files.
    #[arg(short, long, default_value = "templates/default")]
    output_dir: PathBuf,

    /// Whether to overwrite existing files.
    #[arg(long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Apply the conversion flags on top of a loaded configuration.
  ///
  /// Only flags that were given change the configuration.
  pub fn merge_into(&self, config: &mut Config) {
    if let Some(ref template) = self.template {
      config.template.clone_from(template);
    }
    if self.no_header {
      config.header = false;
    }
    if self.no_footer {
      config.footer = false;
    }
    if let Some(ref css) = self.css {
      config.css = Some(css.clone());
    }
    if let Some(ref logo) = self.logo {
      config.logo = Some(logo.clone());
    }
    if let Some(ref output_dir) = self.output_dir {
      config.output_dir = Some(output_dir.clone());
    }
    if let Some(toc_start) = self.toc_start {
      config.toc_start = toc_start;
    }
    if let Some(toc_depth) = self.toc_depth {
      config.toc_depth = toc_depth;
    }
  }
}
