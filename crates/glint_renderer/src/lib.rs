//! Glint Renderer - recursive Phong ray tracing
//!
//! Casts rays from a pinhole camera into a small scene of spheres and
//! triangles and computes Phong-shaded colors with hard shadows and
//! mirror reflection.
//!
//! Colors are on a 0-255 scale throughout, not normalized to [0, 1].

mod camera;
mod error;
mod light;
mod material;
mod primitive;
mod renderer;
mod scene;
mod sphere;
mod tracer;
mod triangle;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use light::Light;
pub use material::{Color, Material, MAX_COLOR};
pub use primitive::{Hit, Primitive};
pub use renderer::{color_to_rgb, render, ImageBuffer};
pub use scene::Scene;
pub use sphere::Sphere;
pub use tracer::{RenderConfig, TraceStats, Tracer};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
