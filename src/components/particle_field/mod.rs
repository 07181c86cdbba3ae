//! Ambient particle background.
//!
//! A fixed population of softly colored circles drifts across a fullscreen
//! canvas, bouncing off the viewport edges. A translucent overlay painted
//! every frame leaves short fading trails behind each particle.
//!
//! # Example
//!
//! ```ignore
//! use valentine_card::components::particle_field::ParticleCanvas;
//!
//! view! { <ParticleCanvas /> }
//! ```

mod component;
mod particles;
mod render;
pub mod theme;

pub use component::ParticleCanvas;
pub use particles::{Particle, ParticleField};
pub use theme::{Color, FieldStyle};
