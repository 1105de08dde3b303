//! Burnout barometer questionnaire.

pub mod assessment;

pub use assessment::{Assessment, BurnoutLevel, Frequency, MAX_SCORE, QUESTIONS};
