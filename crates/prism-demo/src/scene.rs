use prism_engine::render::mesh::FlatMesh;

const SQRT_3: f32 = 1.732_050_8;

/// Equilateral triangle with unit side length, centred on the origin in clip space.
pub fn triangle_positions() -> [[f32; 3]; 3] {
    [
        [-0.5, -SQRT_3 / 6.0, 0.0],
        [0.5, -SQRT_3 / 6.0, 0.0],
        [0.0, SQRT_3 / 3.0, 0.0],
    ]
}

pub fn triangle() -> FlatMesh {
    FlatMesh::from_positions(&triangle_positions())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: [f32; 3], b: [f32; 3]) -> f32 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    #[test]
    fn triangle_is_equilateral_with_unit_sides() {
        let [a, b, c] = triangle_positions();
        for side in [dist(a, b), dist(b, c), dist(c, a)] {
            assert!((side - 1.0).abs() < 1e-5, "side {side}");
        }
    }

    #[test]
    fn centroid_is_origin() {
        let p = triangle_positions();
        let cx: f32 = p.iter().map(|v| v[0]).sum::<f32>() / 3.0;
        let cy: f32 = p.iter().map(|v| v[1]).sum::<f32>() / 3.0;
        assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6);
    }

    #[test]
    fn mesh_has_three_vertices() {
        assert_eq!(triangle().vertex_count(), 3);
    }
}
