use std::time::Instant;

use log::{debug, warn};
use nalgebra::{Point3, Unit, Vector3};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color_to_rgba;
use crate::error::{Result, TracerError};
use crate::tracer::intersection::intersect_sphere;
use crate::tracer::lighting::compute_lighting;
use crate::tracer::scene::{Scene, Sphere};
use crate::tracer::texture::Image;
use crate::util::{clamp_color, Color};

pub mod intersection;
pub mod lighting;
pub mod ray;
pub mod scene;
pub mod texture;

pub struct Settings {
    // 후보 근은 t_min < t < t_max (양쪽 다 열린 구간)
    pub t_min: f32,
    pub t_max: f32,
    // 행 단위로 rayon 스레드에 나눠서 렌더링
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            t_min: 1.0,
            t_max: f32::INFINITY,
            parallel: true,
        }
    }
}

#[derive(Default)]
pub struct Tracer {
    pub settings: Settings,
}

impl Tracer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// 프레임 전체를 계산해 `image`에 씀. 장면은 읽기만 하므로 행끼리 잠금이 필요 없음.
    pub fn render(&self, scene: &Scene, camera: &Camera, image: &mut Image) -> Result<()> {
        let (width, height) = camera.screen_size();
        if image.size() != (width, height) {
            return Err(TracerError::SizeMismatch {
                expected: (width, height),
                actual: image.size(),
            });
        }

        if scene.lights.is_empty() {
            warn!("장면에 조명이 없음, 모든 구가 검게 그려짐");
        }

        debug!(
            "{}x{} 렌더링 시작: 구 {}개, 조명 {}개, 병렬 {}",
            width,
            height,
            scene.spheres.len(),
            scene.lights.len(),
            self.settings.parallel
        );
        let started = Instant::now();

        let shade_row = |(row, line): (usize, &mut [u32])| {
            for (column, pixel) in line.iter_mut().enumerate() {
                let color = self.per_pixel(scene, camera, column as u32, row as u32);
                *pixel = color_to_rgba(&color);
            }
        };

        if self.settings.parallel {
            image
                .data_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(shade_row);
        } else {
            image
                .data_mut()
                .chunks_mut(width as usize)
                .enumerate()
                .for_each(shade_row);
        }

        debug!("렌더링 완료: {:?}", started.elapsed());
        Ok(())
    }

    // DirectX의 RayGen 쉐이더와 같음
    pub fn per_pixel(&self, scene: &Scene, camera: &Camera, column: u32, row: u32) -> Color {
        let (x, y) = camera.to_centered(column, row);
        let ray = camera.pixel_ray(x, y);

        trace_ray(
            &ray.origin,
            &ray.direction,
            self.settings.t_min,
            self.settings.t_max,
            scene,
        )
    }
}

/// 레이 하나의 색상. 아무것도 맞지 않으면 배경색을 그대로 돌려줌.
///
/// `direction`은 0 벡터가 아니어야 함 (`Ray::new`, `Camera`가 보장).
pub fn trace_ray(
    origin: &Point3<f32>,
    direction: &Vector3<f32>,
    t_min: f32,
    t_max: f32,
    scene: &Scene,
) -> Color {
    debug_assert!(direction.magnitude_squared() > 0.0);

    let Some(HitPayload {
        position,
        normal,
        sphere,
        ..
    }) = closest_intersection(origin, direction, t_min, t_max, scene)
    else {
        return scene.background;
    };

    let to_camera = -direction;
    let intensity = compute_lighting(&position, &normal, &scene.lights, &to_camera, sphere.specular);

    clamp_color(&(sphere.color * intensity))
}

/// 모든 구 중에서 (t_min, t_max) 안에 있는 가장 가까운 교점.
/// 거리가 같으면 먼저 나온 구, 먼저 나온 근이 이김.
pub fn closest_intersection<'a>(
    origin: &Point3<f32>,
    direction: &Vector3<f32>,
    t_min: f32,
    t_max: f32,
    scene: &'a Scene,
) -> Option<HitPayload<'a>> {
    let mut closest: Option<(&Sphere, f32)> = None;
    for sphere in &scene.spheres {
        let (t1, t2) = intersect_sphere(origin, direction, sphere);

        for distance in [t1, t2] {
            if !(t_min < distance && distance < t_max) {
                continue;
            }

            match closest {
                Some((_, previous_distance)) if previous_distance <= distance => {}
                _ => closest = Some((sphere, distance)),
            }
        }
    }

    closest.map(|(sphere, distance)| closest_hit(origin, direction, distance, sphere))
}

fn closest_hit<'a>(
    origin: &Point3<f32>,
    direction: &Vector3<f32>,
    distance: f32,
    sphere: &'a Sphere,
) -> HitPayload<'a> {
    let position = origin + direction * distance;
    // 표면 위의 점이니 반지름 > 0 이면 0 벡터가 아님
    let normal = Unit::new_normalize(position - sphere.center);

    HitPayload {
        distance,
        position,
        normal,
        sphere,
    }
}

// 충돌 정보만 담고, 색상은 나중에 조명 계산으로 구함
#[derive(Debug)]
pub struct HitPayload<'a> {
    pub distance: f32,
    pub position: Point3<f32>,
    pub normal: Unit<Vector3<f32>>,
    pub sphere: &'a Sphere,
}
