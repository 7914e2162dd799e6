pub mod ranking;
pub mod rules;
pub mod scoring;
