// Service exports
pub mod classifier;
pub mod grammar;

pub use classifier::{feature_vector, CategoryClassifier, ModelError, FEATURE_DIM};
pub use grammar::{GrammarClient, GrammarError};
