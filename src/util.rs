use nalgebra::Vector3;

// 점, 방향, 색상 모두 Vector3로 표현함. 색상은 채널마다 [0, 255]
pub type Color = Vector3<f32>;

// 덧셈, 뺄셈, 부호 반전, 상수배, 내적, 크기는 nalgebra 연산자를 그대로 씀
// (a + b, a - b, -a, a * k, a.dot(&b), a.magnitude_squared(), a.magnitude())

/// 두 벡터 사이 각의 코사인. 둘 다 0 벡터가 아니어야 함.
pub fn cos_angle(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.dot(b) / (a.magnitude() * b.magnitude())
}

/// 채널마다 따로 [0, 255]로 자름. 최종 픽셀 색상에 한 번만 적용할 것.
pub fn clamp_color(color: &Color) -> Color {
    color.map(|channel| channel.clamp(0.0, 255.0))
}

#[cfg(test)]
pub fn random_vec<T, R>(range: R) -> Vector3<T>
where
    T: rand::distributions::uniform::SampleUniform + nalgebra::Scalar,
    R: rand::distributions::uniform::SampleRange<T> + Clone,
{
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    Vector3::new(
        rng.gen_range(range.clone()),
        rng.gen_range(range.clone()),
        rng.gen_range(range),
    )
}
