mod bijective;
mod isomorphism;
mod misc;

pub mod prelude {
    pub use crate::bijective::*;
    pub use crate::isomorphism::*;
    pub use crate::misc::*;
}
