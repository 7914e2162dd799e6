mod athlete;
mod attempt;
mod category;
mod masters;
mod rulebook;
mod sinclair;

pub use athlete::Athlete;
pub use attempt::{AttemptRecord, LiftSlot, Movement};
pub use category::{Category, Gender};
pub use masters::MastersAgeTable;
pub use rulebook::Rulebook;
pub use sinclair::{FormulaConstants, SinclairCoefficients};
