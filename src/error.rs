use thiserror::Error;

pub type Result<T> = std::result::Result<T, TracerError>;

// 모든 검사는 장면/카메라/레이를 만들 때 한 번만 함. 픽셀 단위 추적 중에는 실패하지 않음
#[derive(Error, Debug)]
pub enum TracerError {
    #[error("구의 반지름은 양수여야 함: {radius}")]
    InvalidRadius { radius: f32 },

    #[error("방향 벡터의 길이가 0임")]
    ZeroDirection,

    #[error("화면 크기가 잘못됨: {width}x{height}")]
    InvalidScreen { width: u32, height: u32 },

    #[error("뷰포트 설정이 잘못됨: {width}x{height}, 거리 {distance}")]
    InvalidViewport {
        width: f32,
        height: f32,
        distance: f32,
    },

    #[error("이미지 크기가 카메라 화면과 다름: {expected:?} != {actual:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("지원하지 않는 이미지 형식: {path}")]
    UnsupportedFormat { path: String },

    #[error("이미지 인코딩 실패: {0}")]
    Image(#[from] image::ImageError),
}
