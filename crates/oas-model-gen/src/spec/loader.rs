use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::ParsedSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<ParsedSpec> {
    let root: serde_json::Value = match self.format {
      SpecFormat::Json => serde_json::from_slice(self.file.as_slice())?,
      SpecFormat::Yaml => serde_yaml::from_slice(self.file.as_slice())?,
    };
    Ok(ParsedSpec::from_value(&root))
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[tokio::test]
  async fn loads_json_document() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
      file,
      r#"{{ "openapi": "3.0.0", "components": {{ "schemas": {{ "Thing": {{ "type": "object" }} }} }} }}"#
    )
    .unwrap();

    let parsed = SpecLoader::open(file.path()).await.unwrap().parse().unwrap();
    assert!(parsed.document.contains("Thing"));
  }

  #[tokio::test]
  async fn loads_yaml_document() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
      file,
      "openapi: 3.0.0\ncomponents:\n  schemas:\n    Thing:\n      type: object\n"
    )
    .unwrap();

    let parsed = SpecLoader::open(file.path()).await.unwrap().parse().unwrap();
    assert!(parsed.document.contains("Thing"));
  }

  #[tokio::test]
  async fn invalid_json_is_an_error() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "not json").unwrap();

    let loader = SpecLoader::open(file.path()).await.unwrap();
    assert!(loader.parse().is_err());
  }
}
