// mix-domain library entry point
pub mod code;
pub mod entry;
pub mod error;
pub mod legacy;
pub mod tag;
pub use code::{lookup, Category, FormulationCode, FormulationInfo, FORMULATION_CATALOG};
pub use entry::ChemicalEntry;
pub use error::DomainError;
pub use legacy::{is_legacy, LegacyAlias};
pub use tag::FormulationTag;
