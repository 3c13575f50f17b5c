//! # lsb_shield 库
//!
//! 本库包含带签名的 LSB 文本隐写编解码器，以及围绕它的命令行工具逻辑。
//!
//! ```text
//! 内容检查 → 签名 → 容量校验 → 比特打包 → 写入红色通道最低位
//! ```

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod raster;
pub mod sanitizer;
pub mod signature;
pub mod steganography;

pub use error::{Error, Result, Violation};
pub use raster::RasterBuffer;
pub use signature::WireFormat;
pub use steganography::{decode, decode_with_format, encode, encode_with};
