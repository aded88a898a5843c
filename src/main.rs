//! Binario de validación manual de SprayMix.
//!
//! Recorre el clasificador, el secuenciador genérico, la variante compacta
//! de 200 litros y el repositorio de fórmulas en memoria, imprimiendo una
//! línea OK por sección. Sirve como humo manual sin levantar la aplicación
//! web que consume estos motores.
use mix_core::constants::{FERTILIZER_WARNING, POWDER_WARNING};
use mix_core::{classify, sequence, sequence_compact, try_classify, MixStage};
use mix_domain::{lookup, ChemicalEntry, FormulationTag, LegacyAlias};
use spraymix_rust::errors::CoreError;
use spraymix_rust::repository::{FormulaRepository, InMemoryFormulaRepository, RepositoryError};

/// Mezcla de demostración: cubre polvos, legado, fertilizante y un código
/// desconocido.
fn sample_order() -> Vec<ChemicalEntry> {
    [("EDTA", "chelator", 100.0),
     ("Mancozeb", "WP", 500.0),
     ("Azufre", "WDG", 120.0),
     ("Calcio-Boro", "SL", 250.0),
     ("Urea", "FERT", 1000.0),
     ("Adherente", "STICK", 30.0),
     ("Aceite blanco", "oil", 200.0),
     ("Producto misterioso", "XYZ-1", 40.0)].iter()
                                            .map(|(name, form, quantity)| {
                                                ChemicalEntry::new(name, form, *quantity, "g")
                                                    .expect("entrada de demostración válida")
                                            })
                                            .collect()
}

/// Validación del clasificador: totalidad, fallback y la divergencia
/// documentada entre tabla directa y tabla de migración.
fn run_classifier_validation() {
    assert_eq!(classify(&FormulationTag::parse("garbage")), MixStage::Oils);
    assert!(try_classify(&FormulationTag::parse("garbage")).is_err());
    assert!(try_classify(&FormulationTag::parse("WP")).is_ok());

    let direct = classify(&FormulationTag::Legacy(LegacyAlias::Suspended));
    let migrated = classify(&FormulationTag::Code(LegacyAlias::Suspended.migrate()));
    assert_eq!(direct, MixStage::Powders);
    assert_eq!(migrated, MixStage::Chelates);

    let info = lookup("WP").expect("WP en el catálogo");
    assert_eq!(info.description, "Wettable powder");
    assert!(lookup("suspended").is_none());

    println!("Validación clasificador: OK (fallback etapa 7, divergencia legado conservada)");
}

fn run_sequencer_validation() {
    let plan = sequence(&sample_order());
    assert_eq!(plan.steps.len(), 8, "la tabla genérica siempre tiene 8 filas");
    assert!(plan.steps[0].chemicals.is_empty(), "la fila de agua no lleva productos");
    assert_eq!(plan.total_steps, 8);
    assert_eq!(plan.estimated_time, "16 นาที");

    let powders: Vec<f64> = plan.steps[2].chemicals.iter().map(|e| e.quantity).collect();
    assert_eq!(powders, vec![120.0, 500.0], "polvos de menor a mayor cantidad");
    assert_eq!(plan.warnings,
               vec![POWDER_WARNING.to_string(), FERTILIZER_WARNING.to_string()]);

    for row in &plan.steps {
        let tags: Vec<String> =
            row.chemicals.iter().map(|e| format!("{} ({})", e.name, e.form)).collect();
        println!("  etapa {} {}: {}", row.step, row.description, tags.join(", "));
    }
    println!("Validación secuenciador genérico: OK (8 filas, advertencias en orden)");
}

fn run_compact_validation() -> Result<(), CoreError> {
    let plan = sequence_compact(&sample_order());
    assert_eq!(plan.water_volume, 200);
    assert_eq!(plan.total_steps, plan.steps.len());
    assert!(plan.steps.iter().all(|s| !s.chemicals.is_empty()));
    for (ix, step) in plan.steps.iter().enumerate() {
        assert_eq!(usize::from(step.display_step), ix + 1);
    }

    let empty = sequence_compact(&[]);
    assert_eq!(empty.total_steps, 0);
    assert!(empty.steps.is_empty() && empty.warnings.is_empty());
    assert_eq!(empty.water_volume, 200);

    let rendered = serde_json::to_string_pretty(&plan)
        .map_err(|e| CoreError::Internal(e.to_string()))?;
    println!("{rendered}");
    println!("Validación variante compacta: OK (200 L, sin etapas vacías)");
    Ok(())
}

async fn run_repository_validation() -> Result<(), CoreError> {
    let repo = InMemoryFormulaRepository::new();
    let id = repo.store("granja-demo", "mezcla durian", Some("plan quincenal".into()), sample_order())
                 .await?;

    let listed = repo.list_by_owner("granja-demo").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].entries_hash.len(), 64);

    repo.increment_usage(id).await?;
    match repo.delete(id).await {
        Err(RepositoryError::HasDependents { count, .. }) => {
            println!("  borrado rechazado como se esperaba: {count} registro(s) dependiente(s)");
        }
        other => panic!("se esperaba HasDependents, se obtuvo {other:?}"),
    }

    let disposable = repo.store("granja-demo", "borrador", None, sample_order()).await?;
    repo.delete(disposable).await?;
    println!("Validación repositorio de fórmulas: OK (uso bloquea borrado)");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    run_classifier_validation();
    run_sequencer_validation();
    run_compact_validation()?;
    run_repository_validation().await?;
    println!("Validación completa: OK");
    Ok(())
}
