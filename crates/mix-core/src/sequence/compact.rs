//! Variante compacta para el lote fijo de 200 litros.
//!
//! Misma clasificación, mismo orden dentro de etapa y mismas advertencias
//! que el secuenciador genérico; después descarta la etapa 0 y toda etapa
//! sin productos, renumerando las restantes en secuencia. La identidad de
//! la etapa original (y con ella la descripción correcta) se conserva en
//! `original_step`.
use mix_domain::ChemicalEntry;

use crate::constants::COMPACT_TANK_LITERS;
use crate::model::{CompactMixingResult, CompactStage};
use crate::sequence::generic;

/// Construye el procedimiento compacto.
///
/// Lista vacía produce `steps = []`, `total_steps = 0` y sin advertencias;
/// `water_volume` es 200 siempre.
pub fn sequence_compact(entries: &[ChemicalEntry]) -> CompactMixingResult {
    let full = generic::sequence(entries);

    let steps: Vec<CompactStage> =
        full.steps
            .into_iter()
            .filter(|row| row.step != 0 && !row.chemicals.is_empty())
            .enumerate()
            .map(|(ix, row)| CompactStage { original_step: row.step,
                                            display_step: (ix + 1) as u8,
                                            description: row.description,
                                            chemicals: row.chemicals })
            .collect();

    CompactMixingResult { total_steps: steps.len(),
                          steps,
                          warnings: full.warnings,
                          water_volume: COMPACT_TANK_LITERS }
}
