//! Startup demonstration
//!
//! Builds a handful of vectors in both precisions, combines them with the
//! binary and compound operators, and logs every intermediate value.

use vector4_math::{Vector4d, Vector4f};

/// Final vectors produced by [`run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSummary {
    pub single: Vector4f,
    pub double: Vector4d,
}

/// Run the demonstration and return the accumulated vectors
pub fn run() -> DemoSummary {
    let vec1 = Vector4f::new(1.0, 1.0, 1.0, 0.0);
    let vec2 = Vector4f::new(2.0, 3.0, 4.0, 5.0);
    let mut vec3 = vec1 + vec2;
    log::debug!("f32: {} + {} = {}", vec1, vec2, vec3);
    vec3 += vec2;
    log::info!("f32 result: {}", vec3);

    // Anomalies worth seeing next to the arithmetic
    log::info!(
        "f32 {}: length {}, normalize {}, cross {}",
        vec1,
        vec1.length(),
        vec1.normalize(),
        vec1.cross(vec2)
    );

    let vec1g = Vector4d::new(1.0, 1.0, 1.0, 2.0);
    let vec2g = Vector4d::new(2.0, 3.0, 4.5, 6.25);
    let mut vec3g = vec1g + vec2g;
    log::debug!("f64: {} + {} = {}", vec1g, vec2g, vec3g);
    vec3g += vec2g;
    log::info!("f64 result: {}", vec3g);

    DemoSummary {
        single: vec3,
        double: vec3g,
    }
}
