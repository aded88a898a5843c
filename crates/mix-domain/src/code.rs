//! Catálogo estático de códigos de formulación.
//!
//! El catálogo es global, de sólo lectura y se construye una única vez
//! (`Lazy`). Cada código lleva una descripción en inglés y una categoría
//! comercial usada por UIs externas para búsqueda/filtrado; la categoría no
//! interviene en la asignación de etapas de mezcla.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categoría comercial de un código de formulación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Powder,
    Liquid,
    Special,
    Fertilizer,
    Adjuvant,
    Additional,
}

/// Código de formulación moderno. Conjunto cerrado: todo string fuera de
/// esta lista se modela como `FormulationTag::Unknown`, nunca se mezcla con
/// este espacio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulationCode {
    WP,
    WDG,
    WG,
    DF,
    FDF,
    SP,
    DP,
    SG,
    MG,
    SL,
    EC,
    EW,
    ME,
    CS,
    FS,
    OD,
    ZC,
    EO,
    ES,
    SC,
    UL,
    TC,
    TK,
    AL,
    AE,
    FU,
    GE,
    FERT,
    ORG,
    GR,
    #[serde(rename = "LIQ_FERT")]
    LiqFert,
    CAL,
    MICRO,
    NPK,
    FOL,
    SURF,
    STICK,
    SPREAD,
    SE,
    PEN,
    WET,
    DRIFT,
    BUF,
    HUM,
    AMINO,
    SEA,
    HORM,
    ENZ,
    VIT,
    BIO,
}

/// Entrada del catálogo para un código.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulationInfo {
    pub code: FormulationCode,
    pub description: &'static str,
    pub category: Category,
}

/// Tabla fuente del catálogo (50 códigos). El orden de declaración es el
/// orden de listado que ven las UIs.
const CATALOG: &[(FormulationCode, &str, Category)] = &[
    (FormulationCode::WP, "Wettable powder", Category::Powder),
    (FormulationCode::WDG, "Water dispersible granule", Category::Powder),
    (FormulationCode::WG, "Wettable granule", Category::Powder),
    (FormulationCode::DF, "Dry flowable", Category::Powder),
    (FormulationCode::FDF, "Fine dry flowable", Category::Powder),
    (FormulationCode::SP, "Water soluble powder", Category::Powder),
    (FormulationCode::DP, "Dustable powder", Category::Powder),
    (FormulationCode::SG, "Water soluble granule", Category::Powder),
    (FormulationCode::MG, "Microgranule", Category::Powder),
    (FormulationCode::SL, "Soluble concentrate", Category::Liquid),
    (FormulationCode::EC, "Emulsifiable concentrate", Category::Liquid),
    (FormulationCode::EW, "Emulsion, oil in water", Category::Liquid),
    (FormulationCode::ME, "Micro-emulsion", Category::Liquid),
    (FormulationCode::CS, "Capsule suspension", Category::Liquid),
    (FormulationCode::FS, "Flowable concentrate for seed treatment", Category::Liquid),
    (FormulationCode::OD, "Oil dispersion", Category::Liquid),
    (FormulationCode::ZC, "Mixed formulation of CS and SC", Category::Liquid),
    (FormulationCode::EO, "Emulsion, water in oil", Category::Liquid),
    (FormulationCode::ES, "Emulsion for seed treatment", Category::Liquid),
    (FormulationCode::SC, "Suspension concentrate", Category::Special),
    (FormulationCode::UL, "Ultra low volume liquid", Category::Special),
    (FormulationCode::TC, "Technical material", Category::Special),
    (FormulationCode::TK, "Technical concentrate", Category::Special),
    (FormulationCode::AL, "Liquid, applied undiluted", Category::Special),
    (FormulationCode::AE, "Aerosol dispenser", Category::Special),
    (FormulationCode::FU, "Smoke generator", Category::Special),
    (FormulationCode::GE, "Gas generating product", Category::Special),
    (FormulationCode::FERT, "Water soluble fertilizer", Category::Fertilizer),
    (FormulationCode::ORG, "Organic fertilizer", Category::Fertilizer),
    (FormulationCode::GR, "Granule", Category::Fertilizer),
    (FormulationCode::LiqFert, "Liquid fertilizer", Category::Fertilizer),
    (FormulationCode::CAL, "Calcium supplement", Category::Fertilizer),
    (FormulationCode::MICRO, "Micronutrient blend", Category::Fertilizer),
    (FormulationCode::NPK, "Compound NPK fertilizer", Category::Fertilizer),
    (FormulationCode::FOL, "Foliar fertilizer", Category::Fertilizer),
    (FormulationCode::SURF, "Surfactant", Category::Adjuvant),
    (FormulationCode::STICK, "Sticker", Category::Adjuvant),
    (FormulationCode::SPREAD, "Spreader", Category::Adjuvant),
    (FormulationCode::SE, "Suspo-emulsion", Category::Adjuvant),
    (FormulationCode::PEN, "Penetrant", Category::Adjuvant),
    (FormulationCode::WET, "Wetting agent", Category::Adjuvant),
    (FormulationCode::DRIFT, "Drift control agent", Category::Adjuvant),
    (FormulationCode::BUF, "Buffering agent", Category::Adjuvant),
    (FormulationCode::HUM, "Humic acid extract", Category::Additional),
    (FormulationCode::AMINO, "Amino acid solution", Category::Additional),
    (FormulationCode::SEA, "Seaweed extract", Category::Additional),
    (FormulationCode::HORM, "Plant growth regulator", Category::Additional),
    (FormulationCode::ENZ, "Enzyme preparation", Category::Additional),
    (FormulationCode::VIT, "Vitamin supplement", Category::Additional),
    (FormulationCode::BIO, "Biostimulant", Category::Additional),
];

/// Catálogo global inmutable, evaluado una sola vez. Conserva el orden de
/// declaración de `CATALOG`.
pub static FORMULATION_CATALOG: Lazy<IndexMap<FormulationCode, FormulationInfo>> =
    Lazy::new(|| {
        CATALOG.iter()
               .map(|&(code, description, category)| {
                   (code, FormulationInfo { code, description, category })
               })
               .collect()
    });

/// Índice string -> código para parsear el campo `type` de la UI.
static PARSE_INDEX: Lazy<HashMap<&'static str, FormulationCode>> =
    Lazy::new(|| FORMULATION_CATALOG.keys().map(|c| (c.as_str(), *c)).collect());

impl FormulationCode {
    /// Representación de alambre del código (la que viaja en `type`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulationCode::WP => "WP",
            FormulationCode::WDG => "WDG",
            FormulationCode::WG => "WG",
            FormulationCode::DF => "DF",
            FormulationCode::FDF => "FDF",
            FormulationCode::SP => "SP",
            FormulationCode::DP => "DP",
            FormulationCode::SG => "SG",
            FormulationCode::MG => "MG",
            FormulationCode::SL => "SL",
            FormulationCode::EC => "EC",
            FormulationCode::EW => "EW",
            FormulationCode::ME => "ME",
            FormulationCode::CS => "CS",
            FormulationCode::FS => "FS",
            FormulationCode::OD => "OD",
            FormulationCode::ZC => "ZC",
            FormulationCode::EO => "EO",
            FormulationCode::ES => "ES",
            FormulationCode::SC => "SC",
            FormulationCode::UL => "UL",
            FormulationCode::TC => "TC",
            FormulationCode::TK => "TK",
            FormulationCode::AL => "AL",
            FormulationCode::AE => "AE",
            FormulationCode::FU => "FU",
            FormulationCode::GE => "GE",
            FormulationCode::FERT => "FERT",
            FormulationCode::ORG => "ORG",
            FormulationCode::GR => "GR",
            FormulationCode::LiqFert => "LIQ_FERT",
            FormulationCode::CAL => "CAL",
            FormulationCode::MICRO => "MICRO",
            FormulationCode::NPK => "NPK",
            FormulationCode::FOL => "FOL",
            FormulationCode::SURF => "SURF",
            FormulationCode::STICK => "STICK",
            FormulationCode::SPREAD => "SPREAD",
            FormulationCode::SE => "SE",
            FormulationCode::PEN => "PEN",
            FormulationCode::WET => "WET",
            FormulationCode::DRIFT => "DRIFT",
            FormulationCode::BUF => "BUF",
            FormulationCode::HUM => "HUM",
            FormulationCode::AMINO => "AMINO",
            FormulationCode::SEA => "SEA",
            FormulationCode::HORM => "HORM",
            FormulationCode::ENZ => "ENZ",
            FormulationCode::VIT => "VIT",
            FormulationCode::BIO => "BIO",
        }
    }

    /// Parseo estricto contra el catálogo; `None` para cualquier string
    /// fuera del conjunto cerrado (incluidos los alias heredados).
    pub fn parse(raw: &str) -> Option<FormulationCode> {
        PARSE_INDEX.get(raw).copied()
    }

    /// Entrada del catálogo para este código. Todo variante figura en
    /// `CATALOG`, así que el acceso es infalible por construcción.
    pub fn info(&self) -> &'static FormulationInfo {
        FORMULATION_CATALOG.get(self)
                           .expect("todo código figura en el catálogo")
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    pub fn category(&self) -> Category {
        self.info().category
    }
}

impl fmt::Display for FormulationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consulta de sólo lectura sobre el catálogo, sin efectos secundarios.
/// Devuelve `None` para códigos desconocidos y también para los alias
/// heredados (esos se resuelven vía `legacy`).
pub fn lookup(raw: &str) -> Option<&'static FormulationInfo> {
    FormulationCode::parse(raw).map(|code| code.info())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifty_unique_codes() {
        assert_eq!(FORMULATION_CATALOG.len(), 50);
        assert_eq!(CATALOG.len(), FORMULATION_CATALOG.len(), "códigos duplicados en CATALOG");
    }

    #[test]
    fn every_catalog_entry_round_trips_through_parse() {
        for info in FORMULATION_CATALOG.values() {
            let parsed = FormulationCode::parse(info.code.as_str());
            assert_eq!(parsed, Some(info.code));
        }
    }

    #[test]
    fn lookup_known_code() {
        let info = lookup("WP").expect("WP está en el catálogo");
        assert_eq!(info.description, "Wettable powder");
        assert_eq!(info.category, Category::Powder);
    }

    #[test]
    fn lookup_rejects_aliases_and_garbage() {
        assert!(lookup("suspended").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("XYZ").is_none());
        // sensible a mayúsculas: el alambre siempre llega en mayúsculas
        assert!(lookup("wp").is_none());
    }

    #[test]
    fn liq_fert_wire_string_keeps_underscore() {
        assert_eq!(FormulationCode::LiqFert.as_str(), "LIQ_FERT");
        assert_eq!(FormulationCode::parse("LIQ_FERT"), Some(FormulationCode::LiqFert));
    }

    #[test]
    fn catalog_iteration_keeps_declaration_order() {
        let first: Vec<FormulationCode> = FORMULATION_CATALOG.keys().take(3).copied().collect();
        assert_eq!(first,
                   vec![FormulationCode::WP, FormulationCode::WDG, FormulationCode::WG]);
    }
}
