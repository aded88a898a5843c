//! Secuenciador genérico (volumen total arbitrario).
//!
//! Recibe entradas ya validadas por el recolector de la UI y produce la
//! tabla fija de 8 filas con advertencias y métricas heurísticas. Replay
//! determinista: misma lista de entradas, mismo resultado.
use std::cmp::Ordering;
use std::collections::BTreeMap;

use mix_domain::{ChemicalEntry, FormulationCode, FormulationTag, LegacyAlias};

use crate::classify::classify;
use crate::constants::{FERTILIZER_WARNING, MINUTES_PER_ROW, MIN_MIX_MINUTES, MIX_TABLE_ROWS,
                       POWDER_WARNING, WATER_PER_QUANTITY_UNIT};
use crate::model::{MixStage, MixingResult, StageRow};

/// Construye el procedimiento de mezcla genérico.
///
/// La tabla resultante tiene siempre 8 filas: la fila 0 es el placeholder
/// de preparación de agua (sin productos) y las filas 1..7 llevan el grupo
/// de cada etapa, posiblemente vacío.
pub fn sequence(entries: &[ChemicalEntry]) -> MixingResult {
    let mut buckets: BTreeMap<MixStage, Vec<ChemicalEntry>> = BTreeMap::new();
    for entry in entries {
        buckets.entry(classify(&entry.form)).or_default().push(entry.clone());
    }

    // Regla de dominio: en la etapa de polvos se disuelven primero las
    // cantidades pequeñas para evitar grumos. Sort estable; NaN compara
    // como igual y conserva el orden de entrada.
    if let Some(powders) = buckets.get_mut(&MixStage::Powders) {
        powders.sort_by(|a, b| a.quantity.partial_cmp(&b.quantity).unwrap_or(Ordering::Equal));
    }

    let mut steps = Vec::with_capacity(MIX_TABLE_ROWS);
    steps.push(StageRow { step: MixStage::WaterPreparation.index(),
                          description: MixStage::WaterPreparation.description().to_string(),
                          chemicals: Vec::new() });
    for stage in MixStage::CHEMICAL_STAGES {
        steps.push(StageRow { step: stage.index(),
                              description: stage.description().to_string(),
                              chemicals: buckets.remove(&stage).unwrap_or_default() });
    }

    // `total_steps` cuenta las filas de la tabla, no las filas pobladas, y
    // por eso la estimación de tiempo colapsa a un valor fijo. Comportamiento
    // heredado que la presentación ya asume; no "corregir".
    let total_steps = MIX_TABLE_ROWS;
    let minutes = (total_steps * MINUTES_PER_ROW).max(MIN_MIX_MINUTES);

    MixingResult { steps,
                   warnings: collect_warnings(entries),
                   total_steps,
                   estimated_time: format!("{minutes} นาที"),
                   water_amount: entries.iter().map(|e| e.quantity).sum::<f64>()
                                 * WATER_PER_QUANTITY_UNIT }
}

/// Advertencias deduplicadas en orden fijo: polvos antes que fertilizante.
pub(crate) fn collect_warnings(entries: &[ChemicalEntry]) -> Vec<String> {
    let mut warnings = Vec::with_capacity(2);
    if entries.iter().any(|e| triggers_powder_warning(&e.form)) {
        warnings.push(POWDER_WARNING.to_string());
    }
    if entries.iter().any(|e| triggers_fertilizer_warning(&e.form)) {
        warnings.push(FERTILIZER_WARNING.to_string());
    }
    warnings
}

fn triggers_powder_warning(tag: &FormulationTag) -> bool {
    matches!(tag,
             FormulationTag::Code(FormulationCode::WP
                                  | FormulationCode::WDG
                                  | FormulationCode::DF
                                  | FormulationCode::FDF
                                  | FormulationCode::WG)
             | FormulationTag::Legacy(LegacyAlias::Suspended))
}

fn triggers_fertilizer_warning(tag: &FormulationTag) -> bool {
    matches!(tag,
             FormulationTag::Code(FormulationCode::FERT
                                  | FormulationCode::ORG
                                  | FormulationCode::GR)
             | FormulationTag::Legacy(LegacyAlias::Fertilizer))
}
