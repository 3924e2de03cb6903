use std::path::Path;

use bytemuck::cast_slice;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::color_to_rgba;
use crate::error::{Result, TracerError};
use crate::util::Color;

/// 렌더링 결과를 담는 픽셀 버퍼. 픽셀 하나가 RGBA 바이트 4개를 묶은 u32 하나.
pub struct Image {
    data: Vec<u32>,
    width: u32,
    height: u32,
}

// u32끼리 곱하면 큰 이미지에서 넘침
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Image {
    pub fn new(width: u32, height: u32) -> Image {
        Self {
            data: vec![0; pixel_count(width, height)],
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    // 길이는 바꾸지 못하게 슬라이스로만 내줌
    pub(crate) fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: &Color) {
        let index = self.index(x, y);
        self.data[index] = color_to_rgba(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.data[self.index(x, y)].to_ne_bytes()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        let format = match extension.as_deref() {
            Some("png") => ImageFormat::Png,
            Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
            _ => {
                return Err(TracerError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        // data의 길이는 언제나 width * height
        let bytes: &[u8] = cast_slice(&self.data);
        let buffer = RgbaImage::from_raw(self.width, self.height, bytes.to_vec()).ok_or(
            TracerError::SizeMismatch {
                expected: (self.width, self.height),
                actual: (self.data.len() as u32, 1),
            },
        )?;

        match format {
            // JPEG은 알파를 못 씀
            ImageFormat::Jpeg => DynamicImage::ImageRgba8(buffer)
                .into_rgb8()
                .save_with_format(path, format)?,
            _ => buffer.save_with_format(path, format)?,
        }

        Ok(())
    }
}
