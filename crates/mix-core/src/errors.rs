//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Etiqueta fuera de los dos conjuntos cerrados (códigos y alias). Sólo lo
/// produce la variante estricta del clasificador; la variante total absorbe
/// el caso con el fallback a la etapa 7.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[error("unrecognized formulation code: {0}")]
pub struct UnknownCode(pub String);
