use nalgebra::{Point3, Vector3};

use crate::error::{Result, TracerError};
use crate::util::Color;

/// 렌더링 동안 바뀌지 않는 장면. 구와 조명은 순서대로만 의미가 있음.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    // 아무것도 맞지 않은 레이의 색상
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: vec![],
            lights: vec![],
            background: Color::new(255.0, 255.0, 255.0),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point3<f32>,
    radius: f32,
    pub color: Color,
    // None이면 정반사 없음
    pub specular: Option<i32>,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
            color: Color::new(255.0, 255.0, 255.0),
            specular: None,
        }
    }
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, color: Color) -> Result<Self> {
        // NaN도 여기서 걸러짐
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(TracerError::InvalidRadius { radius });
        }

        Ok(Self {
            center,
            radius,
            color,
            specular: None,
        })
    }

    pub fn with_specular(mut self, exponent: i32) -> Self {
        self.specular = Some(exponent);
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    Point {
        intensity: f32,
        position: Point3<f32>,
    },
    Directional {
        intensity: f32,
        direction: Vector3<f32>,
    },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Self::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Point3<f32>) -> Self {
        Self::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vector3<f32>) -> Result<Self> {
        if direction.magnitude_squared() == 0.0 {
            return Err(TracerError::ZeroDirection);
        }

        Ok(Self::Directional {
            intensity,
            direction,
        })
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Self::Ambient { intensity }
            | Self::Point { intensity, .. }
            | Self::Directional { intensity, .. } => intensity,
        }
    }

    /// 표면 위 한 점에서 조명을 향하는 방향. 정규화하지 않음.
    pub fn direction_from(&self, point: &Point3<f32>) -> Option<Vector3<f32>> {
        match self {
            Self::Ambient { .. } => None,
            Self::Point { position, .. } => Some(position - point),
            Self::Directional { direction, .. } => Some(*direction),
        }
    }
}
