pub mod markup;
pub mod matching;

// Re-export key types for easier usage
pub use markup::*;
pub use matching::*;
