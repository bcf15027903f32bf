//! Built-in scenes.

use clap::ValueEnum;
use glint_math::Vec3;
use glint_renderer::{Color, Light, Material, Scene, Sphere, Triangle};

/// Which built-in scene to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Two red triangles
    Triangles,
    /// Two overlapping red spheres
    Spheres,
    /// A mirror sphere resting above a triangle floor
    Mixed,
}

impl Preset {
    pub fn build(self) -> Scene {
        let mut scene = match self {
            Preset::Triangles => triangles(),
            Preset::Spheres => spheres(),
            Preset::Mixed => mixed(),
        };
        add_default_lights(&mut scene);
        scene
    }
}

fn add_default_lights(scene: &mut Scene) {
    scene.add_light(Light::new(Vec3::new(5.0, 5.0, 0.0), Color::ONE));
    scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), Color::splat(0.5)));
}

fn red_plastic() -> Material {
    Material::new(
        Color::new(200.0, 0.0, 0.0),
        Color::splat(100.0),
        100.0,
        Color::ZERO,
    )
}

fn triangles() -> Scene {
    let mut scene = Scene::new();
    scene.add(Triangle::new(
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(4.0, 0.0, -4.0),
        Vec3::new(-4.0, 0.0, -4.0),
        red_plastic(),
    ));
    scene.add(Triangle::new(
        Vec3::new(2.0, 3.0, 4.0),
        Vec3::new(2.0, 3.0, -4.0),
        Vec3::new(1.0, 0.0, 0.0),
        red_plastic(),
    ));
    scene
}

fn spheres() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 3.0, red_plastic()));
    scene.add(Sphere::new(Vec3::new(3.0, 0.0, 0.0), 3.0, red_plastic()));
    scene
}

fn mixed() -> Scene {
    let floor = Material::new(Color::new(60.0, 60.0, 180.0), Color::splat(20.0), 10.0, Color::ZERO);
    let chrome = Material::new(Color::splat(40.0), Color::splat(150.0), 200.0, Color::splat(0.8));

    let mut scene = Scene::new();
    // Floor quad in the y = 0 plane, facing +Y
    scene.add(Triangle::new(
        Vec3::new(-4.0, 0.0, -4.0),
        Vec3::new(-4.0, 0.0, 4.0),
        Vec3::new(4.0, 0.0, 4.0),
        floor,
    ));
    scene.add(Triangle::new(
        Vec3::new(-4.0, 0.0, -4.0),
        Vec3::new(4.0, 0.0, 4.0),
        Vec3::new(4.0, 0.0, -4.0),
        floor,
    ));
    scene.add(Sphere::new(Vec3::new(-0.8, 1.0, 0.0), 0.9, chrome));
    scene.add(Sphere::new(Vec3::new(1.2, 0.6, 0.8), 0.5, red_plastic()));
    scene
}
