pub mod control_point;
pub mod curve_config;
pub mod profile_sampler;
pub use control_point::*;
pub use curve_config::*;
pub use profile_sampler::*;

#[cfg(test)]
mod tests;
