pub mod bezier;
pub mod de_boor;
pub use bezier::*;
pub use de_boor::*;
