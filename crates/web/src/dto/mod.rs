pub mod athlete;
pub mod attempt;
pub mod category;
pub mod ranking;
