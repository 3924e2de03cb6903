use nalgebra::{Point3, Vector3};

use crate::tracer::scene::Sphere;

/// 실근이 없을 때 두 근 모두 이 값. `t < t_max` 검사를 절대 통과하지 못함.
pub const NO_HIT: f32 = f32::INFINITY;

// 빔 origin + t * direction 이 구 표면 |p - center| = r 위에 있을 조건:
// (d·d) t^2 + 2 (co·d) t + (co·co - r^2) = 0, co = origin - center
// 범위 검사는 호출하는 쪽에서 각 근마다 따로 함
pub fn intersect_sphere(
    origin: &Point3<f32>,
    direction: &Vector3<f32>,
    sphere: &Sphere,
) -> (f32, f32) {
    let center_to_origin = origin - sphere.center;

    let a = direction.magnitude_squared();
    let b = 2.0 * center_to_origin.dot(direction);
    let c = center_to_origin.magnitude_squared() - sphere.radius().powi(2);

    // 판별식
    let discriminant = b.powi(2) - 4.0 * a * c;
    if discriminant < 0.0 {
        return (NO_HIT, NO_HIT);
    }

    let root = discriminant.sqrt();
    ((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::util::{random_vec, Color};

    #[test]
    fn ray_toward_center_hits_twice_in_front() {
        for _ in 0..100 {
            let center = Point3::from(random_vec(-20.0f32..20.0));
            let radius = rand::random::<f32>() * 4.0 + 0.5;
            let sphere = Sphere::new(center, radius, Color::zeros()).unwrap();

            // 구 바깥에서 중심을 향해 쏨
            let mut axis = random_vec(-1.0f32..1.0);
            while axis.magnitude() < 1e-3 {
                axis = random_vec(-1.0f32..1.0);
            }
            let offset = axis.normalize() * (radius + 1.0 + rand::random::<f32>() * 10.0);
            let origin = center + offset;
            let direction = -offset * 0.37;

            let (t1, t2) = intersect_sphere(&origin, &direction, &sphere);
            assert!(t1 >= t2);
            assert!(t2 > 0.0);

            let hit = origin + direction * t2;
            assert_relative_eq!((hit - center).magnitude(), radius, epsilon = 1e-3);
        }
    }

    #[test]
    fn ray_passing_beside_sphere_misses() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0, Color::zeros()).unwrap();
        // 가장 가까운 거리가 2로 반지름보다 큼
        let roots = intersect_sphere(
            &Point3::new(2.0, 0.0, 0.0),
            &Vector3::new(0.0, 0.0, 1.0),
            &sphere,
        );
        assert_eq!(roots, (NO_HIT, NO_HIT));
    }

    #[test]
    fn roots_are_returned_without_range_filtering() {
        // 구 안에서 쏘면 근 하나는 뒤쪽에 있음
        let sphere = Sphere::new(Point3::origin(), 2.0, Color::zeros()).unwrap();
        let (t1, t2) = intersect_sphere(&Point3::origin(), &Vector3::new(0.0, 0.0, 1.0), &sphere);
        assert_relative_eq!(t1, 2.0);
        assert_relative_eq!(t2, -2.0);
    }

    #[test]
    fn roots_scale_with_direction_length() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 4.0), 1.0, Color::zeros()).unwrap();
        let origin = Point3::origin();
        let (t1, t2) = intersect_sphere(&origin, &Vector3::new(0.0, 0.0, 1.0), &sphere);
        let (s1, s2) = intersect_sphere(&origin, &Vector3::new(0.0, 0.0, 2.0), &sphere);

        assert_relative_eq!(t1, 5.0);
        assert_relative_eq!(t2, 3.0);
        assert_relative_eq!(s1 * 2.0, t1);
        assert_relative_eq!(s2 * 2.0, t2);
    }
}
