use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::{CsharpFactory, emit_class},
    converter::AttributeSpec,
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
  },
  spec::{ParsedSpec, loader::SpecLoader},
  ui::{Colors, GenerateCommand},
};

const DEFAULT_USINGS: &[&str] = &["Newtonsoft.Json"];

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub namespace: String,
  pub attributes: Option<AttributeSpec>,
  pub usings: Vec<String>,
  pub docs: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      namespace,
      attributes,
      usings,
      docs,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      namespace,
      attributes: attributes
        .map(|entries| AttributeSpec::parse(&entries))
        .filter(|spec| !spec.is_empty()),
      usings: usings.unwrap_or_else(|| DEFAULT_USINGS.iter().map(ToString::to_string).collect()),
      docs,
      verbose,
      quiet,
    }
  }

  async fn load_spec(&self) -> anyhow::Result<ParsedSpec> {
    SpecLoader::open(&self.input).await?.parse()
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_diagnostics(&self, parsed: &ParsedSpec) {
    let version = parsed.version.as_deref().unwrap_or("unknown");
    self.info(
      &format!("Document read with spec version: {version}")
        .with(self.colors.primary())
        .to_string(),
    );

    if parsed.diagnostics.is_empty() {
      return;
    }

    let errors = parsed.diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = parsed.diagnostics.len() - errors;
    if warnings > 0 {
      self.stat("Reader warnings:", warnings.to_string());
    }
    if errors > 0 {
      self.stat("Reader errors:", errors.to_string());
    }

    if self.config.verbose && !self.config.quiet {
      for diagnostic in &parsed.diagnostics {
        let label = if diagnostic.is_error() { "Error:" } else { "Warning:" };
        eprintln!(
          "{} {}",
          label.with(self.colors.accent()),
          format!("{diagnostic}").with(self.colors.primary())
        );
      }
    }
  }

  fn log_generating(&self) {
    self.info(&"Generating C# model classes...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Classes generated:", stats.classes_generated.to_string());
    self.stat("", format!("{} properties", stats.properties_generated));
    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() {
      return;
    }

    self.stat("Warnings:", stats.warnings.len().to_string());

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, written: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {written} C# model files").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let parsed = config.load_spec().await?;
  logger.log_diagnostics(&parsed);

  logger.log_generating();
  let orchestrator = Orchestrator::new(parsed.document, config.attributes.clone(), config.docs);
  let GeneratedOutput { classes, stats } = orchestrator.generate()?;
  logger.print_statistics(&stats);

  logger.log_writing();
  let factory = CsharpFactory::new(&config.namespace, config.usings.clone());
  tokio::fs::create_dir_all(&config.output).await?;

  let mut written = 0usize;
  for class in &classes {
    // Empty class names were already recorded as warnings; there is no file
    // to name them after.
    if class.name.is_empty() {
      continue;
    }
    let code = emit_class(&factory, class);
    tokio::fs::write(config.output.join(class.file_name()), code).await?;
    written += 1;
  }

  logger.log_success(written);
  Ok(())
}
