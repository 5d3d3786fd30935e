use std::{fs, path::PathBuf};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use mdpdf::{
  cli::{Cli, Commands},
  convert::Converter,
  render::{ChromeEngine, HtmlEngine, PdfEngine},
};
use mdpdf_commonmark::processor::collect_markdown_files;
use mdpdf_config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(command) = &cli.command {
    return run_command(&cli, command);
  }

  let mut config = Config::load(&cli.config_files, &cli.config_overrides)?;
  cli.merge_into(&mut config);
  config.validate()?;

  let files = if cli.files.is_empty() {
    let cwd = std::env::current_dir()
      .wrap_err("Failed to determine the working directory")?;
    collect_markdown_files(&cwd)
  } else {
    cli.files.clone()
  };

  if files.is_empty() {
    info!("No Markdown files to convert.");
    return Ok(());
  }

  if cli.output.is_some() && files.len() > 1 {
    bail!("--output can only be used with a single input file");
  }

  let engine: Box<dyn PdfEngine> = if cli.html {
    Box::new(HtmlEngine)
  } else {
    Box::new(ChromeEngine::new())
  };

  let summary = Converter::new(&config, engine.as_ref())
    .with_output(cli.output.clone())
    .convert_batch(&files);

  if !summary.is_success() {
    bail!(
      "{} of {} file(s) failed to convert",
      summary.failed.len(),
      files.len()
    );
  }
  Ok(())
}

#[allow(clippy::print_stdout, reason = "Template listing is the command's output")]
fn run_command(cli: &Cli, command: &Commands) -> Result<()> {
  match command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!("Failed to generate configuration file: {}", output.display())
      })?;

      info!(
        "Configuration file created successfully. Edit it to customize your \
         conversions."
      );
    },

    Commands::ListTemplates => {
      let config = Config::load(&cli.config_files, &cli.config_overrides)?;
      println!("default (built-in)");
      for (root, names) in config.list_templates() {
        println!("\n{} ({}):", root.origin.label(), root.path.display());
        if names.is_empty() {
          println!("  (none)");
        }
        for name in names {
          println!("  {name}");
        }
      }
    },

    Commands::ExportTemplate { output_dir, force } => {
      let written: Vec<PathBuf> = Config::export_templates(output_dir, *force)
        .wrap_err_with(|| {
          format!("Failed to export templates to {}", output_dir.display())
        })?;
      info!(
        "Exported {} file(s) to {}",
        written.len(),
        output_dir.display()
      );
    },
  }
  Ok(())
}
