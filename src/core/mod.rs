pub mod color;
pub mod config;
pub mod constants;
pub mod features;
pub mod field;
pub mod pointer;
pub mod track;

pub use config::FieldParams;
pub use features::AudioFeatures;
pub use field::ParticleField;
pub use pointer::{PointerState, SharedPointer};
pub use track::TrackKind;

pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
