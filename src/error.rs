//! # 错误类型模块
//!
//! 隐写核心的所有失败都是同步且确定的，不存在可重试的错误类别。

use std::fmt;
use thiserror::Error;

/// 隐写核心操作的结果类型。
pub type Result<T> = std::result::Result<T, Error>;

/// 内容检查拒绝文本的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// 文本包含 `<script>…</script>` 元素。
    ScriptElement,
    /// 文本包含 `javascript:` 协议前缀。
    JavascriptScheme,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ScriptElement => f.write_str("embedded <script> element"),
            Violation::JavascriptScheme => f.write_str("javascript: URL scheme"),
        }
    }
}

/// 隐写核心可能返回的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 待嵌入的文本或恢复出的文本包含被禁止的内容。
    #[error("Security violation: text contains a disallowed pattern ({0})")]
    SecurityViolation(Violation),

    /// 签名、消息与结束符的总长度超出载体容量。
    #[error("Message too long for this image: need {required} bytes, capacity is {capacity} bytes")]
    CapacityExceeded { required: usize, capacity: usize },

    /// 未找到有效签名。
    #[error(
        "This image carries no payload produced by this codec, or it has been corrupted or transcoded"
    )]
    Integrity,

    /// 像素缓冲区长度与宽高不符。
    #[error("Invalid raster: {width}x{height} RGBA8 needs {expected} bytes, got {actual}")]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
