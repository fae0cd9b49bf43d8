//! Shared types used throughout the library.

mod depth;
mod slope;
mod state;

pub use depth::DepthLevel;
pub use slope::Slope;
pub use state::FluidState;
