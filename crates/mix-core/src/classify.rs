//! Clasificador de etapa de mezcla.
//!
//! Función pura y total de la etiqueta de formulación: sin estado, sin
//! efectos secundarios, nunca entra en pánico. Los alias heredados se
//! clasifican con una tabla directa propia, NO vía `LegacyAlias::migrate`
//! (las dos tablas divergen a propósito para `suspended`; ver tests).
use mix_domain::{FormulationCode, FormulationTag, LegacyAlias};

use crate::errors::UnknownCode;
use crate::model::MixStage;

/// Variante estricta: `Err(UnknownCode)` cuando la etiqueta cae fuera de
/// los dos conjuntos cerrados, para que un llamador pueda validar en duro.
/// El pipeline por defecto usa `classify`, que absorbe el caso.
pub fn try_classify(tag: &FormulationTag) -> Result<MixStage, UnknownCode> {
    match tag {
        FormulationTag::Code(code) => Ok(classify_code(*code)),
        FormulationTag::Legacy(alias) => Ok(classify_legacy(*alias)),
        FormulationTag::Unknown(raw) => Err(UnknownCode(raw.clone())),
    }
}

/// Variante total: etiquetas desconocidas caen a la etapa 7. Política de
/// disponibilidad sobre rigidez: una entrada mal etiquetada entra al plan
/// en la última etapa en lugar de rechazar toda la mezcla.
pub fn classify(tag: &FormulationTag) -> MixStage {
    try_classify(tag).unwrap_or(MixStage::Oils)
}

/// Tabla directa para los alias heredados.
fn classify_legacy(alias: LegacyAlias) -> MixStage {
    match alias {
        LegacyAlias::Chelator => MixStage::Chelates,
        LegacyAlias::Suspended => MixStage::Powders,
        LegacyAlias::Liquid => MixStage::Solutions,
        LegacyAlias::Fertilizer => MixStage::Fertilizers,
        LegacyAlias::Adjuvant => MixStage::Adjuvants,
        LegacyAlias::OilConcentrate => MixStage::OilConcentrates,
        LegacyAlias::Oil => MixStage::Oils,
    }
}

/// Clasificación por forma de manejo físico-químico. Los códigos del
/// catálogo sin grupo explícito caen al default de la etapa 7.
fn classify_code(code: FormulationCode) -> MixStage {
    match code {
        FormulationCode::SC => MixStage::Chelates,
        FormulationCode::WP
        | FormulationCode::WDG
        | FormulationCode::DF
        | FormulationCode::FDF
        | FormulationCode::WG => MixStage::Powders,
        FormulationCode::SL | FormulationCode::LiqFert => MixStage::Solutions,
        FormulationCode::FERT | FormulationCode::ORG | FormulationCode::GR => MixStage::Fertilizers,
        FormulationCode::SURF
        | FormulationCode::STICK
        | FormulationCode::SPREAD
        | FormulationCode::SE => MixStage::Adjuvants,
        FormulationCode::EC => MixStage::OilConcentrates,
        _ => MixStage::Oils,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mix_domain::FORMULATION_CATALOG;

    fn tag(raw: &str) -> FormulationTag {
        FormulationTag::parse(raw)
    }

    #[test]
    fn legacy_direct_table() {
        let expected: [(&str, u8); 7] = [("chelator", 1),
                                         ("suspended", 2),
                                         ("liquid", 3),
                                         ("fertilizer", 4),
                                         ("adjuvant", 5),
                                         ("oil_concentrate", 6),
                                         ("oil", 7)];
        for (alias, stage) in expected {
            assert_eq!(classify(&tag(alias)).index(), stage, "alias {alias}");
        }
    }

    #[test]
    fn legacy_direct_table_beats_migration() {
        // Las dos tablas divergen para `suspended`: directo va a polvos
        // (etapa 2), pero su código migrado SC clasifica a quelatos
        // (etapa 1). Ambos comportamientos se conservan hasta que haya
        // decisión de producto; este test impide una "corrección" muda.
        let direct = classify(&FormulationTag::Legacy(LegacyAlias::Suspended));
        let migrated = classify(&FormulationTag::Code(LegacyAlias::Suspended.migrate()));
        assert_eq!(direct, MixStage::Powders);
        assert_eq!(migrated, MixStage::Chelates);
        assert_ne!(direct, migrated);
    }

    #[test]
    fn code_groups() {
        assert_eq!(classify(&tag("SC")), MixStage::Chelates);
        for code in ["WP", "WDG", "DF", "FDF", "WG"] {
            assert_eq!(classify(&tag(code)), MixStage::Powders, "código {code}");
        }
        assert_eq!(classify(&tag("SL")), MixStage::Solutions);
        assert_eq!(classify(&tag("LIQ_FERT")), MixStage::Solutions);
        for code in ["FERT", "ORG", "GR"] {
            assert_eq!(classify(&tag(code)), MixStage::Fertilizers, "código {code}");
        }
        for code in ["SURF", "STICK", "SPREAD", "SE"] {
            assert_eq!(classify(&tag(code)), MixStage::Adjuvants, "código {code}");
        }
        assert_eq!(classify(&tag("EC")), MixStage::OilConcentrates);
        for code in ["ME", "EW", "FS", "CS"] {
            assert_eq!(classify(&tag(code)), MixStage::Oils, "código {code}");
        }
    }

    #[test]
    fn catalog_codes_without_group_default_to_stage_seven() {
        for code in ["DP", "SP", "OD", "HUM", "NPK", "TC"] {
            assert_eq!(classify(&tag(code)), MixStage::Oils, "código {code}");
        }
    }

    #[test]
    fn classification_is_total_over_arbitrary_input() {
        for raw in ["", "???", "wp", "SUSPENDED", "น้ำ", "123", "oil-concentrate"] {
            let stage = classify(&tag(raw));
            assert!((1..=7).contains(&stage.index()), "entrada {raw:?}");
            assert_eq!(stage, MixStage::Oils);
        }
    }

    #[test]
    fn every_catalog_code_lands_in_a_chemical_stage() {
        for code in FORMULATION_CATALOG.keys() {
            let stage = classify(&FormulationTag::Code(*code));
            assert!((1..=7).contains(&stage.index()), "código {code}");
        }
    }

    #[test]
    fn strict_variant_flags_unknown_codes_only() {
        assert_eq!(try_classify(&tag("WP")), Ok(MixStage::Powders));
        assert_eq!(try_classify(&tag("suspended")), Ok(MixStage::Powders));
        // DP es un código conocido del catálogo: cae al default, no a error
        assert_eq!(try_classify(&tag("DP")), Ok(MixStage::Oils));
        assert_eq!(try_classify(&tag("XYZ")), Err(UnknownCode("XYZ".to_string())));
    }
}
