pub mod answers;
pub mod norms;
pub mod patient;
pub mod result;
pub mod rule;
pub mod score;
