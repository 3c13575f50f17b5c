//! # 像素缓冲区模块
//!
//! `RasterBuffer` 是隐写核心唯一接受的载体类型：按行优先排列的 RGBA8 像素，
//! 构造时保证 `len == width * height * 4`。

use crate::constants::CHANNELS;
use crate::error::{Error, Result};
use image::RgbaImage;

/// 独占所有权的 RGBA8 像素缓冲区。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// 由原始字节构造缓冲区。
    ///
    /// # Errors
    ///
    /// 当 `data.len()` 不等于 `width * height * 4` (或该乘积溢出) 时返回
    /// [`Error::InvalidRaster`]。
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .unwrap_or(usize::MAX);

        if data.len() != expected {
            return Err(Error::InvalidRaster {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// 所有像素都取同一颜色的缓冲区。
    pub fn from_pixel(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(count),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// 坐标 `(x, y)` 处的像素，越界时返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.data[start..start + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// 行优先顺序遍历所有像素。
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// 转换为 `image` 的 RGBA 图像，以便由调用方编码为 PNG 等无损格式。
    pub fn into_image(self) -> Result<RgbaImage> {
        let (width, height) = (self.width, self.height);
        let actual = self.data.len();
        RgbaImage::from_raw(width, height, self.data).ok_or(Error::InvalidRaster {
            width,
            height,
            expected: width as usize * height as usize * CHANNELS,
            actual,
        })
    }
}

impl From<RgbaImage> for RasterBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}
