//! Headless pipeline check: build the terrain demo scene, run a few
//! animation steps, and report height/radiance statistics.

use glam::Vec3;
use relief::Scene;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::terrain_demo(42)?;

    let vertex_count = {
        let mesh = &scene.objects[0].mesh;
        let min = mesh
            .vertices()
            .iter()
            .map(|v| v.height)
            .fold(f32::INFINITY, f32::min);
        let max = mesh
            .vertices()
            .iter()
            .map(|v| v.height)
            .fold(f32::NEG_INFINITY, f32::max);
        let mean: f32 =
            mesh.vertices().iter().map(|v| v.height).sum::<f32>() / mesh.vertices().len() as f32;

        println!("Mesh stats:");
        println!("  Vertices: {}", mesh.vertices().len());
        println!("  Strips: {} x {} verts", mesh.strips(), mesh.verts_per_strip());
        println!("  Upload size: {} bytes", mesh.as_bytes().len());
        println!("  Height attr: min {:.4}, max {:.4}, mean {:.4}", min, max, mean);
        mesh.vertices().len()
    };

    // a few simulated frames at 60 fps
    let frame_dt = 1.0 / 60.0;
    let mut t = 0.0;
    for frame in 0..5 {
        let states = scene.frame_states();
        let state = &states[0];

        let vertices = scene.objects[0].mesh.vertices();
        let probes = [vertices[0], vertices[vertex_count / 2]];
        let radiance: Vec<Vec3> = probes.iter().map(|v| state.shade_vertex(v)).collect();

        println!(
            "Frame {}: angle {:.4} rad, corner radiance ({:.3}, {:.3}, {:.3}), center radiance ({:.3}, {:.3}, {:.3})",
            frame,
            scene.objects[0].rotation_angle,
            radiance[0].x,
            radiance[0].y,
            radiance[0].z,
            radiance[1].x,
            radiance[1].y,
            radiance[1].z,
        );

        scene.advance(t, t + frame_dt);
        t += frame_dt;
    }

    Ok(())
}
