// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene files consumed by `kestrel probe` and the report it prints.

use anyhow::{Context, Result};
use kestrel_collide::{NarrowPhase, NarrowPhaseConfig, RigidTransform, Shape, Sphere, Triangle};
use kestrel_math::{Mat3, Scalar, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const IDENTITY_ROWS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// World placement of one shape. Orientation rows are written row-major.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub position: [f32; 3],
    pub orientation: [[f32; 3]; 3],
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            orientation: IDENTITY_ROWS,
        }
    }
}

impl Placement {
    fn to_transform<S: Scalar>(self) -> RigidTransform<S> {
        let [x, y, z] = self.position;
        RigidTransform::new(Mat3::from_rows_f32(self.orientation), Vec3::from_f32(x, y, z))
    }
}

/// Sphere collider with its local center offset and world placement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SphereSpec {
    #[serde(default)]
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(flatten)]
    pub placement: Placement,
}

/// `{ "triangle": [[x,y,z];3], "sphere": { "radius": r, .. } }` plus optional
/// `triangle_placement`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub triangle: [[f32; 3]; 3],
    #[serde(default)]
    pub triangle_placement: Placement,
    pub sphere: SphereSpec,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("invalid scene {}", path.display()))
    }
}

/// Output of one probe. A miss reports `hit: false` with every field zeroed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub lane: &'static str,
    pub hit: bool,
    pub point: [f32; 3],
    pub point_on_triangle: [f32; 3],
    pub point_on_sphere: [f32; 3],
    pub normal: [f32; 3],
    pub penetration: f32,
}

/// Runs the scene's triangle/sphere pair through the narrow phase in lane `S`.
pub fn probe<S: Scalar>(
    lane: &'static str,
    scene: &Scene,
    config: NarrowPhaseConfig,
) -> Result<Report> {
    let [cx, cy, cz] = scene.sphere.center;
    let sphere: Sphere<S> =
        Sphere::with_center(Vec3::from_f32(cx, cy, cz), S::from_f32(scene.sphere.radius))?;
    let triangle: Triangle<S> = Triangle::from_f32(scene.triangle);

    let contact = NarrowPhase::new(config).collide(
        &Shape::from(triangle),
        &scene.triangle_placement.to_transform(),
        &Shape::from(sphere),
        &scene.sphere.placement.to_transform(),
    )?;
    info!(lane, hit = contact.is_some(), "probe finished");

    Ok(match contact {
        Some(c) => Report {
            lane,
            hit: true,
            point: c.point.to_f32_array(),
            point_on_triangle: c.point_a.to_f32_array(),
            point_on_sphere: c.point_b.to_f32_array(),
            normal: c.normal.to_f32_array(),
            penetration: c.penetration.to_f32(),
        },
        None => Report {
            lane,
            hit: false,
            point: [0.0; 3],
            point_on_triangle: [0.0; 3],
            point_on_sphere: [0.0; 3],
            normal: [0.0; 3],
            penetration: 0.0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_math::{DFix64, F32Scalar};

    fn scene(json: &str) -> Scene {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn placements_default_to_identity() {
        let s = scene(r#"{ "triangle": [[0,0,0],[1,0,0],[0,1,0]], "sphere": { "radius": 1 } }"#);
        assert_eq!(s.triangle_placement, Placement::default());
        assert_eq!(s.sphere.placement, Placement::default());
        assert_eq!(s.sphere.center, [0.0; 3]);
    }

    #[test]
    fn miss_reports_zeroed_fields() {
        let s = scene(
            r#"{ "triangle": [[0,0,0],[1,0,0],[0,1,0]],
                 "sphere": { "radius": 0.5, "position": [0.25, 0.25, 2] } }"#,
        );
        let r = probe::<DFix64>("fixed", &s, NarrowPhaseConfig::default()).unwrap();
        assert!(!r.hit);
        assert_eq!(r.normal, [0.0; 3]);
        assert_eq!(r.penetration, 0.0);
    }

    #[test]
    fn hit_reports_triangle_normal() {
        let s = scene(
            r#"{ "triangle": [[0,0,0],[1,0,0],[0,1,0]],
                 "sphere": { "radius": 0.5, "position": [0.25, 0.25, 0.25] } }"#,
        );
        let r = probe::<F32Scalar>("f32", &s, NarrowPhaseConfig::default()).unwrap();
        assert!(r.hit);
        assert_eq!(r.point, [0.25, 0.25, 0.0]);
        assert_eq!(r.normal, [0.0, 0.0, 1.0]);
        assert_eq!(r.penetration, 0.25);
    }

    #[test]
    fn negative_radius_is_an_error() {
        let s = scene(r#"{ "triangle": [[0,0,0],[1,0,0],[0,1,0]], "sphere": { "radius": -1 } }"#);
        assert!(probe::<F32Scalar>("f32", &s, NarrowPhaseConfig::default()).is_err());
    }
}
