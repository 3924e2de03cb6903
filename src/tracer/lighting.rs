use nalgebra::{Point3, Unit, Vector3};

use crate::tracer::scene::Light;

/// 표면 위 한 점이 받는 빛의 세기. 상한이 없음 (색을 자르는 건 마지막에 함).
///
/// `normal`은 단위 벡터여야 하고, `to_camera`와 조명 방향은 정규화하지 않아도 됨.
pub fn compute_lighting(
    point: &Point3<f32>,
    normal: &Unit<Vector3<f32>>,
    lights: &[Light],
    to_camera: &Vector3<f32>,
    specular: Option<i32>,
) -> f32 {
    let mut intensity = 0.0;

    for light in lights {
        let Some(light_direction) = light.direction_from(point) else {
            // 주변광
            intensity += light.intensity();
            continue;
        };

        // 난반사. normal은 이미 단위 벡터라서 light_direction 크기만 나눔
        let normal_dot_light = normal.dot(&light_direction);
        if normal_dot_light > 0.0 {
            intensity += light.intensity() * normal_dot_light / light_direction.magnitude();
        }

        // 정반사. light_direction을 normal 기준으로 반사시킴
        if let Some(exponent) = specular {
            let reflected = normal.as_ref() * (2.0 * normal_dot_light) - light_direction;
            let reflected_dot_camera = reflected.dot(to_camera);
            if reflected_dot_camera > 0.0 {
                let cos = reflected_dot_camera / (reflected.magnitude() * to_camera.magnitude());
                intensity += light.intensity() * cos.powi(exponent);
            }
        }
    }

    intensity
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::util::random_vec;

    fn up() -> Unit<Vector3<f32>> {
        Vector3::y_axis()
    }

    #[test]
    fn ambient_only_ignores_geometry() {
        let lights = [Light::ambient(0.3)];
        for _ in 0..100 {
            let point = Point3::from(random_vec(-10.0f32..10.0));
            let normal = Unit::new_normalize(random_vec(0.1f32..1.0));
            let to_camera = random_vec(0.1f32..1.0);

            assert_eq!(compute_lighting(&point, &normal, &lights, &to_camera, Some(500)), 0.3);
        }
    }

    #[test]
    fn diffuse_divides_out_light_distance() {
        let point = Point3::origin();
        let to_camera = Vector3::new(1.0, 0.0, 0.0);

        // 법선과 같은 방향, 거리와 상관없이 세기 그대로
        let overhead = [Light::point(0.6, Point3::new(0.0, 7.0, 0.0))];
        assert_relative_eq!(compute_lighting(&point, &up(), &overhead, &to_camera, None), 0.6);

        // 45도
        let slanted = [Light::directional(0.5, Vector3::new(3.0, 3.0, 0.0)).unwrap()];
        assert_relative_eq!(
            compute_lighting(&point, &up(), &slanted, &to_camera, None),
            0.5 * std::f32::consts::FRAC_1_SQRT_2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn light_behind_surface_adds_nothing() {
        let lights = [Light::directional(0.8, Vector3::new(0.0, -1.0, 0.0)).unwrap()];
        let to_camera = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(compute_lighting(&Point3::origin(), &up(), &lights, &to_camera, None), 0.0);
    }

    #[test]
    fn specular_counts_even_when_light_is_behind() {
        // n·L = -1 이라 난반사는 없지만 r = (-1, -1, 0) 방향에서 보면 정반사는 더해짐
        let lights = [Light::directional(0.5, Vector3::new(1.0, -1.0, 0.0)).unwrap()];
        let along_reflection = Vector3::new(-1.0, -1.0, 0.0);

        assert_relative_eq!(
            compute_lighting(&Point3::origin(), &up(), &lights, &along_reflection, Some(10)),
            0.5,
            epsilon = 1e-5
        );
        assert_eq!(
            compute_lighting(&Point3::origin(), &up(), &lights, &along_reflection, None),
            0.0
        );
    }

    #[test]
    fn specular_peaks_along_mirror_direction() {
        let lights = [Light::directional(0.5, Vector3::new(1.0, 1.0, 0.0)).unwrap()];
        let point = Point3::origin();

        // 반사 방향에서 보면 난반사 + 정반사
        let mirror = Vector3::new(-1.0, 1.0, 0.0);
        let diffuse = 0.5 * std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(
            compute_lighting(&point, &up(), &lights, &mirror, Some(10)),
            diffuse + 0.5,
            epsilon = 1e-5
        );

        // 정반사 비활성화
        assert_relative_eq!(
            compute_lighting(&point, &up(), &lights, &mirror, None),
            diffuse,
            epsilon = 1e-6
        );

        // 반사 방향과 반대편에서 보면 정반사 없음
        let away = Vector3::new(1.0, -1.0, 0.0);
        assert_relative_eq!(
            compute_lighting(&point, &up(), &lights, &away, Some(10)),
            diffuse,
            epsilon = 1e-6
        );
    }

    #[test]
    fn intensities_accumulate_without_clamp() {
        let lights = [
            Light::ambient(0.7),
            Light::point(0.9, Point3::new(0.0, 2.0, 0.0)),
        ];
        let to_camera = Vector3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(
            compute_lighting(&Point3::origin(), &up(), &lights, &to_camera, None),
            1.6,
            epsilon = 1e-6
        );
    }
}
