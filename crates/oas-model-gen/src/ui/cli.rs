use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas-model-gen")]
#[command(author, version, about = "OpenAPI to C# model generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate C# model classes from OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI specification file (JSON or YAML)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where one .cs file per class will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Namespace for the generated classes
  #[arg(short, long, value_name = "NAMESPACE", default_value = "CodeGen")]
  pub namespace: String,

  /// Attributes applied to every property, comma-separated `Name` or
  /// `Name=Value` entries. A bare serialization-name attribute such as
  /// JsonProperty receives the original schema key as its argument
  #[arg(short, long, value_name = "ATTRS", value_delimiter = ',')]
  pub attributes: Option<Vec<String>>,

  /// Using directives for the generated files (comma-separated dotted paths)
  #[arg(short, long, value_name = "USINGS", value_delimiter = ',')]
  pub usings: Option<Vec<String>>,

  /// Emit XML documentation comments from schema descriptions
  #[arg(short, long, default_value_t = false)]
  pub docs: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all schemas defined in the OpenAPI specification
  Schemas {
    /// Path to the OpenAPI specification file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
