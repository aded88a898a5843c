//! Formas producidas por los secuenciadores.
//!
//! Estas estructuras son neutrales: la capa de presentación las consume en
//! JSON camelCase y el motor no conserva referencias a ellas. La igualdad
//! estructural (`PartialEq`) permite verificar determinismo en tests.
use mix_domain::ChemicalEntry;
use serde::{Deserialize, Serialize};

/// Fila de la tabla genérica: etapa ordinal + descripción canónica +
/// productos asignados (posiblemente ninguno).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRow {
    pub step: u8,
    pub description: String,
    pub chemicals: Vec<ChemicalEntry>,
}

/// Procedimiento de mezcla genérico (volumen arbitrario).
///
/// `steps` tiene siempre exactamente 8 filas (0..7) y `total_steps` es la
/// constante 8, independiente de cuántas filas llevan productos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixingResult {
    pub steps: Vec<StageRow>,
    pub warnings: Vec<String>,
    pub total_steps: usize,
    pub estimated_time: String,
    pub water_amount: f64,
}

/// Paso de la variante compacta: conserva la identidad de la etapa original
/// junto al número renumerado que ve el operador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactStage {
    pub original_step: u8,
    pub display_step: u8,
    pub description: String,
    pub chemicals: Vec<ChemicalEntry>,
}

/// Procedimiento compacto para el lote fijo de 200 litros: sin etapas
/// vacías, renumerado secuencialmente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactMixingResult {
    pub steps: Vec<CompactStage>,
    pub total_steps: usize,
    pub warnings: Vec<String>,
    pub water_volume: u32,
}
