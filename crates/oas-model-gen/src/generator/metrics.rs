use strum::Display;

use crate::generator::ast::ClassDecl;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub classes_generated: usize,
  pub properties_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_class(&mut self, class: &ClassDecl) {
    self.classes_generated += 1;
    self.properties_generated += class.properties.len();
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

/// Non-fatal conditions found while generating. Empty identifiers are legal
/// in the class model; whether they are acceptable is the writer's call.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}' produced an empty class name; no file will be written")]
  EmptyClassName { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}', field '{field}' produced an empty property name")]
  EmptyPropertyName { schema_name: String, field: String },
}
