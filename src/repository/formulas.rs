//! Repositorio de fórmulas guardadas.
//!
//! Almacenamiento en memoria (rápido para tests y prototipos), detrás de un
//! handle clonable y seguro para llamadores concurrentes.
//!
//! Responsabilidades clave:
//! - Guardar la lista de entradas de una fórmula con su huella de contenido
//!   (SHA-256 del JSON canónico) para trazabilidad.
//! - Listar las fórmulas de un propietario, más recientes primero.
//! - Registrar usos: cada incremento representa un registro de actividad de
//!   aplicación que refiere la fórmula.
//! - Rechazar el borrado mientras existan registros dependientes, con un
//!   error distinguible de "no encontrada" para que la capa de presentación
//!   pueda renderizar el mensaje específico.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use mix_domain::ChemicalEntry;

use crate::config::CONFIG;
use crate::hashing;

/// Fórmula guardada por un propietario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFormula {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub entries: Vec<ChemicalEntry>,
    /// Huella SHA-256 del JSON canónico de `entries`.
    pub entries_hash: String,
    /// Registros de actividad que refieren esta fórmula.
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Errores del límite del repositorio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Fórmula no encontrada: {0}")]
    NotFound(Uuid),

    /// Distinguible de `NotFound`: la fórmula existe pero tiene registros
    /// de actividad dependientes.
    #[error("{count} registros de actividad refieren esta fórmula")]
    HasDependents { id: Uuid, count: u64 },

    #[error("Límite de fórmulas guardadas alcanzado ({0})")]
    CapacityExceeded(usize),

    #[error("Error de serialización: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Serialization(e.to_string())
    }
}

/// Contrato del colaborador de almacenamiento de fórmulas. El secuenciador
/// no lo invoca nunca; lo consumen la UI y el binario de validación.
#[async_trait]
pub trait FormulaRepository: Send + Sync {
    /// Guarda una fórmula y devuelve su id.
    async fn store(&self,
                   owner: &str,
                   name: &str,
                   description: Option<String>,
                   entries: Vec<ChemicalEntry>)
                   -> Result<Uuid, RepositoryError>;

    /// Fórmulas del propietario, más recientes primero.
    async fn list_by_owner(&self, owner: &str) -> Vec<SavedFormula>;

    /// Registra un uso (actividad de aplicación) y devuelve el contador.
    async fn increment_usage(&self, id: Uuid) -> Result<u64, RepositoryError>;

    /// Elimina una fórmula sin registros de actividad dependientes.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Implementación en memoria con vida de proceso.
#[derive(Clone)]
pub struct InMemoryFormulaRepository {
    formulas: Arc<DashMap<Uuid, SavedFormula>>,
    max_per_owner: usize,
}

impl InMemoryFormulaRepository {
    pub fn new() -> Self {
        Self::with_capacity(CONFIG.repository.max_saved_formulas)
    }

    pub fn with_capacity(max_per_owner: usize) -> Self {
        Self { formulas: Arc::new(DashMap::new()),
               max_per_owner }
    }
}

impl Default for InMemoryFormulaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormulaRepository for InMemoryFormulaRepository {
    async fn store(&self,
                   owner: &str,
                   name: &str,
                   description: Option<String>,
                   entries: Vec<ChemicalEntry>)
                   -> Result<Uuid, RepositoryError> {
        let owned = self.formulas.iter().filter(|f| f.owner == owner).count();
        if owned >= self.max_per_owner {
            return Err(RepositoryError::CapacityExceeded(self.max_per_owner));
        }
        let entries_hash = hashing::hash_value(&serde_json::to_value(&entries)?);
        let formula = SavedFormula { id: Uuid::new_v4(),
                                     owner: owner.to_string(),
                                     name: name.to_string(),
                                     description,
                                     entries,
                                     entries_hash,
                                     usage_count: 0,
                                     created_at: Utc::now() };
        let id = formula.id;
        self.formulas.insert(id, formula);
        Ok(id)
    }

    async fn list_by_owner(&self, owner: &str) -> Vec<SavedFormula> {
        let mut list: Vec<SavedFormula> = self.formulas
                                              .iter()
                                              .filter(|f| f.owner == owner)
                                              .map(|f| f.value().clone())
                                              .collect();
        // más recientes primero; desempate por id para un orden estable
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        list
    }

    async fn increment_usage(&self, id: Uuid) -> Result<u64, RepositoryError> {
        match self.formulas.get_mut(&id) {
            Some(mut formula) => {
                formula.usage_count += 1;
                Ok(formula.usage_count)
            }
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // remove_if cierra la carrera entre verificación y borrado
        if self.formulas.remove_if(&id, |_, f| f.usage_count == 0).is_some() {
            return Ok(());
        }
        match self.formulas.get(&id) {
            Some(formula) => Err(RepositoryError::HasDependents { id,
                                                                  count: formula.usage_count }),
            None => Err(RepositoryError::NotFound(id)),
        }
    }
}
