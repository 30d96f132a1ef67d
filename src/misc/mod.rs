pub mod exact;

pub use exact::*;
