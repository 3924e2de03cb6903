use nalgebra::{Point3, Vector2, Vector3};

use crate::error::{Result, TracerError};
use crate::tracer::ray::Ray;

/// 화면 픽셀을 카메라 공간의 뷰포트로 옮기는 카메라. 언제나 +z를 바라봄.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,

    screen_width: u32,
    screen_height: u32,

    viewport_size: Vector2<f32>,
    viewport_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            screen_width: 1920,
            screen_height: 1080,
            viewport_size: Vector2::new(1.0, 1.0),
            viewport_distance: 1.0,
        }
    }
}

impl Camera {
    pub fn new(
        screen_width: u32,
        screen_height: u32,
        viewport_width: f32,
        viewport_height: f32,
        viewport_distance: f32,
    ) -> Result<Self> {
        if screen_width == 0 || screen_height == 0 {
            return Err(TracerError::InvalidScreen {
                width: screen_width,
                height: screen_height,
            });
        }

        // 거리가 양수면 모든 레이의 z 성분이 0이 아니므로 방향이 0 벡터가 될 수 없음
        if !(viewport_width > 0.0 && viewport_height > 0.0 && viewport_distance > 0.0) {
            return Err(TracerError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
                distance: viewport_distance,
            });
        }

        Ok(Self {
            position: Point3::origin(),
            screen_width,
            screen_height,
            viewport_size: Vector2::new(viewport_width, viewport_height),
            viewport_distance,
        })
    }

    pub fn with_position(mut self, position: Point3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    pub fn viewport_distance(&self) -> f32 {
        self.viewport_distance
    }

    // 이미지 좌표 (왼쪽 위가 0,0, y는 아래로) -> 화면 중앙이 0,0이고 y가 위로 가는 좌표
    pub fn to_centered(&self, column: u32, row: u32) -> (i32, i32) {
        let x = column as i32 - (self.screen_width / 2) as i32;
        let y = (self.screen_height / 2) as i32 - row as i32;
        (x, y)
    }

    pub fn project_pixel(&self, x: i32, y: i32) -> Vector3<f32> {
        project_pixel(
            x,
            y,
            self.screen_width,
            self.screen_height,
            self.viewport_size.x,
            self.viewport_size.y,
            self.viewport_distance,
        )
    }

    /// 카메라에서 뷰포트 위 픽셀까지의 레이. t = 1 이 뷰포트 위의 점.
    pub fn pixel_ray(&self, x: i32, y: i32) -> Ray {
        Ray {
            origin: self.position,
            direction: self.project_pixel(x, y),
            t: Some(1.0),
        }
    }
}

/// 중앙 기준 픽셀 좌표를 카메라 공간 방향으로 바꿈.
///
/// 결과는 정규화하지 않음. 교차 계산의 t는 이 방향의 크기를 기준으로 함.
pub fn project_pixel(
    screen_x: i32,
    screen_y: i32,
    screen_width: u32,
    screen_height: u32,
    viewport_width: f32,
    viewport_height: f32,
    viewport_distance: f32,
) -> Vector3<f32> {
    Vector3::new(
        screen_x as f32 * viewport_width / screen_width as f32,
        screen_y as f32 * viewport_height / screen_height as f32,
        viewport_distance,
    )
}
