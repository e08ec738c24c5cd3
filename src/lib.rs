pub mod camera;
pub mod film;
pub mod geometry;
pub mod light;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod tracer;

pub use renderer::{render, RenderSettings};
pub use scene::Scene;
pub use tracer::trace_ray;
