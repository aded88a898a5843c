//! Etiqueta de formulación en el límite de entrada.
//!
//! El recolector de entrada de la UI envía `type` como string plano. Aquí
//! ese string se traduce a un dominio cerrado con tres espacios separados:
//! código moderno, alias heredado o desconocido. Los espacios nunca se
//! funden en un dominio implícito de strings: el resto del sistema opera
//! sobre esta etiqueta, no sobre texto.
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::code::FormulationCode;
use crate::legacy::LegacyAlias;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormulationTag {
    /// Código de formulación del catálogo.
    Code(FormulationCode),
    /// Alias heredado (datos guardados antes de la migración).
    Legacy(LegacyAlias),
    /// String fuera de ambos conjuntos cerrados. Se conserva el texto
    /// original para diagnóstico y re-serialización fiel.
    Unknown(String),
}

impl FormulationTag {
    /// Parseo total: primero catálogo, luego alias, si no `Unknown`.
    pub fn parse(raw: &str) -> Self {
        if let Some(code) = FormulationCode::parse(raw) {
            return FormulationTag::Code(code);
        }
        if let Some(alias) = LegacyAlias::parse(raw) {
            return FormulationTag::Legacy(alias);
        }
        FormulationTag::Unknown(raw.to_string())
    }

    /// Texto original de la etiqueta tal como llegó de la UI.
    pub fn as_str(&self) -> &str {
        match self {
            FormulationTag::Code(code) => code.as_str(),
            FormulationTag::Legacy(alias) => alias.as_str(),
            FormulationTag::Unknown(raw) => raw,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, FormulationTag::Legacy(_))
    }
}

impl From<String> for FormulationTag {
    fn from(raw: String) -> Self {
        FormulationTag::parse(&raw)
    }
}

impl From<&str> for FormulationTag {
    fn from(raw: &str) -> Self {
        FormulationTag::parse(raw)
    }
}

impl From<FormulationTag> for String {
    fn from(tag: FormulationTag) -> Self {
        match tag {
            FormulationTag::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for FormulationTag {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(FormulationTag::parse(raw))
    }
}

impl fmt::Display for FormulationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
