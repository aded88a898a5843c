pub mod result;
pub mod stage;
pub use result::{CompactMixingResult, CompactStage, MixingResult, StageRow};
pub use stage::MixStage;
