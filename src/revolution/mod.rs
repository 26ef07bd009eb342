pub mod axis;
pub mod generation;
pub mod revolution_config;
pub mod revolution_mesh;
pub use axis::*;
pub use generation::*;
pub use revolution_config::*;
pub use revolution_mesh::*;
