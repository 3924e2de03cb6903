use std::time::Instant;

use log::info;
use nalgebra::{Point3, Vector3};

use crate::camera::Camera;
use crate::error::Result;
use crate::tracer::scene::{Light, Scene, Sphere};
use crate::tracer::texture::Image;
use crate::tracer::{Settings, Tracer};
use crate::util::{clamp_color, Color};

pub mod camera;
pub mod error;
pub mod tracer;
pub mod util;

pub const OUTPUT_PATH: &str = "o.png";

// 채널을 [0, 255]로 자르고 알파는 언제나 0xFF.
// 바이트 순서가 R, G, B, A가 되도록 native endian으로 묶음
pub fn color_to_rgba(color: &Color) -> u32 {
    let clamped = clamp_color(color);
    u32::from_ne_bytes([
        clamped.x as u8,
        clamped.y as u8,
        clamped.z as u8,
        0xFF,
    ])
}

/// 구 네 개 (바닥 포함)와 주변광, 점광, 방향광 하나씩.
pub fn demo_scene() -> Result<Scene> {
    Ok(Scene::new()
        // 빨강
        .with_sphere(
            Sphere::new(Point3::new(0.0, -1.0, 3.0), 1.0, Color::new(255.0, 0.0, 0.0))?
                .with_specular(500),
        )
        // 파랑
        .with_sphere(
            Sphere::new(Point3::new(2.0, 0.0, 4.0), 1.0, Color::new(0.0, 0.0, 255.0))?
                .with_specular(500),
        )
        // 초록
        .with_sphere(
            Sphere::new(Point3::new(-2.0, 0.0, 4.0), 1.0, Color::new(0.0, 255.0, 0.0))?
                .with_specular(10),
        )
        // 노란 바닥
        .with_sphere(
            Sphere::new(Point3::new(0.0, -5001.0, 0.0), 5000.0, Color::new(255.0, 255.0, 0.0))?
                .with_specular(1000),
        )
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.6, Point3::new(2.0, 1.0, 0.0)))
        .with_light(Light::directional(0.2, Vector3::new(1.0, 4.0, 4.0))?))
}

pub fn run() -> Result<()> {
    // 로거 초기화
    env_logger::init();

    let scene = demo_scene()?;
    let camera = Camera::default();
    let (width, height) = camera.screen_size();

    let tracer = Tracer::new(Settings::default());
    let mut image = Image::new(width, height);

    info!("{}x{} 렌더링 중...", width, height);
    let started = Instant::now();
    tracer.render(&scene, &camera, &mut image)?;
    info!("렌더링 끝: {:?}", started.elapsed());

    image.save(OUTPUT_PATH)?;
    info!("{} 저장 완료", OUTPUT_PATH);

    Ok(())
}
