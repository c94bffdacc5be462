//! Shape generation for 2D primitives

use super::scene::Scene;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Triangle list for a whole scene, in draw order
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.rects.len() * 6);
    for item in &scene.rects {
        vertices.extend_from_slice(&rect(&item.rect, item.color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_rect_corners() {
        let v = rect(&Rect::new(10.0, 20.0, 30.0, 5.0), [1.0; 4]);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 25.0);
    }

    #[test]
    fn test_scene_vertex_count() {
        let state = GameState::new(Tuning::default(), 1);
        let scene = Scene::from_state(&state);
        assert_eq!(scene_vertices(&scene).len(), scene.rects.len() * 6);
    }
}
