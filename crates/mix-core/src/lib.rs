//! mix-core: secuenciador determinista de orden de mezcla.
pub mod classify;
pub mod constants;
pub mod errors;
pub mod model;
pub mod sequence;

pub use classify::{classify, try_classify};
pub use errors::UnknownCode;
pub use model::{CompactMixingResult, CompactStage, MixStage, MixingResult, StageRow};
pub use sequence::{sequence, sequence_compact};
