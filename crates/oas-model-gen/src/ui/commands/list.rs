use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::naming::identifiers::to_pascal_identifier,
  spec::loader::SpecLoader,
  ui::{Colors, colors::IntoComfyColor, term_width},
};

pub async fn list_schemas(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let parsed = SpecLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("SCHEMA").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("CLASS NAME").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("PROPERTIES").fg(IntoComfyColor::into(colors.label())));
  table.set_header(row);

  for (name, node) in parsed.document.schemas() {
    let class_name = to_pascal_identifier(name);

    let mut row = Row::new();
    row.add_cell(Cell::new(name).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(if class_name.is_empty() { "(empty)" } else { class_name.as_str() })
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(node.properties.len())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
