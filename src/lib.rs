#![allow(clippy::needless_range_loop)]

mod curve;
mod error;
mod export;
mod knot;
mod misc;
mod profile;
mod revolution;
mod viewer;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::error::*;
    pub use crate::export::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::profile::*;
    pub use crate::revolution::*;
    pub use crate::viewer::*;
}
