//! Alias heredados de categorías de producto.
//!
//! Antes de adoptar códigos de formulación estandarizados, la aplicación
//! guardaba categorías de texto libre. Se conservan exactamente 7 alias por
//! compatibilidad con datos ya guardados. La tabla `migrate` traduce cada
//! alias a su código moderno y se usa únicamente para etiquetado y
//! migración de datos; el clasificador de etapas tiene su propia tabla
//! directa y NO pasa por aquí.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::code::FormulationCode;

/// Alias heredado (conjunto cerrado de 7 strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyAlias {
    /// Quelatos / correctores orgánicos.
    Chelator,
    /// Suspensiones y polvos mojables.
    Suspended,
    /// Líquidos solubles.
    Liquid,
    /// Fertilizantes.
    Fertilizer,
    /// Coadyuvantes.
    Adjuvant,
    /// Concentrados en aceite.
    OilConcentrate,
    /// Aceites y emulsiones.
    Oil,
}

impl LegacyAlias {
    pub const ALL: [LegacyAlias; 7] = [LegacyAlias::Chelator,
                                       LegacyAlias::Suspended,
                                       LegacyAlias::Liquid,
                                       LegacyAlias::Fertilizer,
                                       LegacyAlias::Adjuvant,
                                       LegacyAlias::OilConcentrate,
                                       LegacyAlias::Oil];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyAlias::Chelator => "chelator",
            LegacyAlias::Suspended => "suspended",
            LegacyAlias::Liquid => "liquid",
            LegacyAlias::Fertilizer => "fertilizer",
            LegacyAlias::Adjuvant => "adjuvant",
            LegacyAlias::OilConcentrate => "oil_concentrate",
            LegacyAlias::Oil => "oil",
        }
    }

    pub fn parse(raw: &str) -> Option<LegacyAlias> {
        LegacyAlias::ALL.iter().find(|alias| alias.as_str() == raw).copied()
    }

    /// Código moderno equivalente, para etiquetado y migración de datos
    /// guardados. `suspended` migra a `SC` (concentrado en suspensión)
    /// aunque la tabla directa del clasificador lo fije en la etapa de
    /// polvos; ambas tablas conviven hasta que producto decida unificarlas.
    pub fn migrate(&self) -> FormulationCode {
        match self {
            LegacyAlias::Chelator => FormulationCode::SC,
            LegacyAlias::Suspended => FormulationCode::SC,
            LegacyAlias::Liquid => FormulationCode::SL,
            LegacyAlias::Fertilizer => FormulationCode::FERT,
            LegacyAlias::Adjuvant => FormulationCode::SURF,
            LegacyAlias::OilConcentrate => FormulationCode::EC,
            LegacyAlias::Oil => FormulationCode::EW,
        }
    }
}

impl fmt::Display for LegacyAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` exactamente para los 7 alias heredados.
pub fn is_legacy(raw: &str) -> bool {
    LegacyAlias::parse(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_seven_aliases() {
        assert_eq!(LegacyAlias::ALL.len(), 7);
        for alias in LegacyAlias::ALL {
            assert!(is_legacy(alias.as_str()));
            assert_eq!(LegacyAlias::parse(alias.as_str()), Some(alias));
        }
    }

    #[test]
    fn non_aliases_are_rejected() {
        assert!(!is_legacy("WP"));
        assert!(!is_legacy(""));
        assert!(!is_legacy("Suspended")); // sensible a mayúsculas
        assert!(!is_legacy("emulsion"));
    }

    #[test]
    fn migration_table_for_labeling() {
        assert_eq!(LegacyAlias::Chelator.migrate(), FormulationCode::SC);
        assert_eq!(LegacyAlias::Suspended.migrate(), FormulationCode::SC);
        assert_eq!(LegacyAlias::Liquid.migrate(), FormulationCode::SL);
        assert_eq!(LegacyAlias::Fertilizer.migrate(), FormulationCode::FERT);
        assert_eq!(LegacyAlias::Adjuvant.migrate(), FormulationCode::SURF);
        assert_eq!(LegacyAlias::OilConcentrate.migrate(), FormulationCode::EC);
        assert_eq!(LegacyAlias::Oil.migrate(), FormulationCode::EW);
    }
}
