//! Ambient particle background.
//!
//! Renders a field of faint drifting particles on a full-viewport canvas:
//! - Hover drift gives every particle a slow wandering motion
//! - The pointer and close neighbours push particles away
//! - Particles wrap around the viewport edges
//! - The population follows the viewport area, adjusted a little each frame
//! - The draw color follows the page theme's foreground color
//!
//! # Example
//!
//! ```ignore
//! use ambient_particles::{ParticleConfig, ParticleField};
//!
//! view! { <ParticleField config=ParticleConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod population;
pub mod render;
pub mod state;
pub mod theme;

pub use component::ParticleField;
pub use config::ParticleConfig;
pub use state::{Simulation, Viewport};
