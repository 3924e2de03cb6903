use nalgebra::{Point3, Vector3};

use crate::error::{Result, TracerError};

/// 레이는 한 픽셀을 계산하는 동안만 존재함. 픽셀끼리 공유하지 않음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    // 정규화하지 않음. 교차 계산은 방향 크기와 무관함
    pub direction: Vector3<f32>,
    // 레이 위의 특정 지점을 가리킬 때만 씀 (예: 카메라에서 뷰포트까지)
    pub t: Option<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Result<Self> {
        if direction.magnitude_squared() == 0.0 {
            return Err(TracerError::ZeroDirection);
        }

        Ok(Self {
            origin,
            direction,
            t: None,
        })
    }

    pub fn with_t(mut self, t: f32) -> Self {
        self.t = Some(t);
        self
    }

    // origin + t * direction
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }

    pub fn point(&self) -> Option<Point3<f32>> {
        self.t.map(|t| self.at(t))
    }
}
