use super::Vec3;

/// Mirrors `v` about `normal`: `2(n·v)n - v`.
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    normal * (2.0 * (normal * v)) - v
}
