pub mod candidate;
pub mod logger;

pub use candidate::*;
pub use logger::*;
