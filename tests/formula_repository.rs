//! Ciclo de vida del repositorio de fórmulas a través de la API pública.
use mix_domain::ChemicalEntry;
use spraymix_rust::repository::{FormulaRepository, InMemoryFormulaRepository, RepositoryError};
use uuid::Uuid;

fn sample_entries() -> Vec<ChemicalEntry> {
    vec![ChemicalEntry::new("mancozeb", "WP", 500.0, "g").expect("entrada válida"),
         ChemicalEntry::new("aceite blanco", "oil", 200.0, "ml").expect("entrada válida")]
}

#[tokio::test]
async fn full_lifecycle_with_dependent_usage() {
    let repo = InMemoryFormulaRepository::with_capacity(10);

    let id = repo.store("granja-1", "mezcla de temporada", Some("mango".into()), sample_entries())
                 .await
                 .expect("guardado");

    let listed = repo.list_by_owner("granja-1").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "mezcla de temporada");
    assert_eq!(listed[0].description.as_deref(), Some("mango"));
    assert_eq!(listed[0].usage_count, 0);

    // cada uso registra una actividad dependiente
    assert_eq!(repo.increment_usage(id).await.expect("uso"), 1);

    let err = repo.delete(id).await.unwrap_err();
    match err {
        RepositoryError::HasDependents { id: blocked, count } => {
            assert_eq!(blocked, id);
            assert_eq!(count, 1);
        }
        other => panic!("se esperaba HasDependents, se obtuvo {other:?}"),
    }

    // la fórmula sigue listada tras el intento de borrado
    assert_eq!(repo.list_by_owner("granja-1").await.len(), 1);
}

#[tokio::test]
async fn delete_without_usage_succeeds() {
    let repo = InMemoryFormulaRepository::with_capacity(10);
    let id = repo.store("granja-2", "borrador", None, sample_entries()).await.expect("guardado");
    repo.delete(id).await.expect("borrado limpio");
    assert!(repo.list_by_owner("granja-2").await.is_empty());
    assert_eq!(repo.delete(id).await.unwrap_err(), RepositoryError::NotFound(id));
}

#[tokio::test]
async fn not_found_is_not_a_dependency_error() {
    let repo = InMemoryFormulaRepository::with_capacity(10);
    let ghost = Uuid::new_v4();
    let err = repo.delete(ghost).await.unwrap_err();
    assert_eq!(err, RepositoryError::NotFound(ghost));
    assert!(!matches!(err, RepositoryError::HasDependents { .. }));
}

#[tokio::test]
async fn concurrent_stores_are_all_visible() {
    let repo = InMemoryFormulaRepository::with_capacity(50);
    let mut handles = Vec::new();
    for ix in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.store("granja-paralela", &format!("mezcla {ix}"), None, sample_entries()).await
        }));
    }
    for handle in handles {
        handle.await.expect("join").expect("guardado");
    }
    assert_eq!(repo.list_by_owner("granja-paralela").await.len(), 8);
}
