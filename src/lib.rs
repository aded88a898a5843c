//! SprayMix Rust Library
//!
//! Este crate actúa como la capa de aplicación de SprayMix:
//! - Expone `config` para la configuración global inmutable.
//! - Expone `errors` para los errores de aplicación.
//! - Expone `hashing` para serializar JSON en forma canónica y calcular
//!   huellas de contenido.
//! - Expone `repository` para el almacenamiento en memoria de fórmulas.
//!
//! Los motores puros viven en `mix-core` y el modelo de dominio en
//! `mix-domain`.

pub mod config;
pub mod errors;
pub mod hashing;
pub mod repository;

#[cfg(test)]
mod tests {
    use super::errors::CoreError;
    use super::repository::RepositoryError;
    use uuid::Uuid;

    #[test]
    fn core_error_tests() {
        let i = CoreError::Internal("fallo".into()).to_string();
        assert_eq!(i, "Error interno: fallo");
    }

    #[test]
    fn repository_error_variants_stay_distinguishable() {
        let id = Uuid::nil();
        let dependents = RepositoryError::HasDependents { id, count: 3 };
        assert_eq!(dependents.to_string(), "3 registros de actividad refieren esta fórmula");
        assert_ne!(dependents, RepositoryError::NotFound(id));
    }
}
