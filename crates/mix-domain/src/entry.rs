//! Entrada química tal como la produce el recolector de la UI.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::tag::FormulationTag;

/// Un producto a mezclar. El motor de secuenciación recibe listas de estas
/// entradas ya validadas, no las muta ni las retiene más allá de la llamada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalEntry {
    pub name: String,
    /// Código de formulación o alias heredado (string plano en el alambre).
    #[serde(rename = "type")]
    pub form: FormulationTag,
    pub quantity: f64,
    pub unit: String,
    /// Clasificación informativa de la UI; el motor no la usa.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_type: Option<String>,
    /// Etapa sugerida por la UI; informativa, el motor la ignora.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

impl ChemicalEntry {
    /// Constructor del límite de entrada: valida nombre no vacío y cantidad
    /// positiva. Pasado este punto los secuenciadores confían en la entrada
    /// y no re-validan.
    pub fn new(name: &str, form: &str, quantity: f64, unit: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("el nombre del producto no puede estar vacío".to_string()));
        }
        if !(quantity > 0.0) {
            return Err(DomainError::ValidationError(format!("cantidad inválida: {quantity}")));
        }
        Ok(ChemicalEntry { name: name.to_string(),
                           form: FormulationTag::parse(form),
                           quantity,
                           unit: unit.to_string(),
                           formula_type: None,
                           step: None })
    }
}

impl fmt::Display for ChemicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} {} ({})>", self.name, self.quantity, self.unit, self.form)
    }
}
