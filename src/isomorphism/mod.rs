pub mod arithmetic;
pub mod generic;
pub mod of_i32;
pub mod of_i64;
pub use generic::*;
pub use of_i32::*;
pub use of_i64::*;
