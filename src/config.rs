//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Todos los valores tienen default, así que los tests no requieren entorno.
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones).
pub struct AppConfig {
    /// Límites del repositorio de fórmulas guardadas.
    pub repository: RepositoryConfig,
}

/// Parámetros del repositorio de fórmulas.
pub struct RepositoryConfig {
    /// Máximo de fórmulas guardadas por propietario.
    pub max_saved_formulas: usize,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    let max_saved = env::var("SPRAYMIX_MAX_SAVED_FORMULAS").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(50);
    AppConfig {
        repository: RepositoryConfig { max_saved_formulas: max_saved },
    }
});

#[cfg(test)]
mod tests {
    use super::CONFIG;

    #[test]
    fn config_loads_with_usable_defaults() {
        assert!(CONFIG.repository.max_saved_formulas >= 1);
    }
}
