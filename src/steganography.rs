//! # 隐写核心模块
//!
//! 在红色通道的最低有效位中嵌入与提取带签名的文本。每个像素承载一个比特，
//! 像素按行优先顺序访问，绿色、蓝色与 alpha 通道始终保持不变。
//!
//! 线格式：`签名 (12 字节) ++ 载荷 ++ 0x00`，高位在前。
//!
//! 载体必须保持无损：对结果做 JPEG 等有损重编码会破坏嵌入的最低位。

use crate::bits::{pack, unpack};
use crate::capacity::{capacity, validate};
use crate::constants::{RED_CHANNEL, TERMINATOR};
use crate::error::Result;
use crate::raster::RasterBuffer;
use crate::sanitizer::check;
use crate::signature::{WireFormat, sign, verify};
use log::{debug, warn};

/// 以默认线格式 (UTF-8) 将 `message` 嵌入载体，返回新的缓冲区。
///
/// # Errors
///
/// 见 [`encode_with`]。
pub fn encode(carrier: &RasterBuffer, message: &str) -> Result<RasterBuffer> {
    encode_with(carrier, message, WireFormat::default())
}

/// 以指定线格式将 `message` 嵌入载体。
///
/// 输入缓冲区不会被修改。所有校验都在写入像素之前完成，因此要么返回完整的新缓冲区，
/// 要么返回错误。
///
/// # Errors
///
/// * [`Error::SecurityViolation`](crate::error::Error::SecurityViolation)：文本包含被禁止的内容。
/// * [`Error::CapacityExceeded`](crate::error::Error::CapacityExceeded)：载体容量不足。
pub fn encode_with(
    carrier: &RasterBuffer,
    message: &str,
    format: WireFormat,
) -> Result<RasterBuffer> {
    check(message)?;

    let payload = format.encode_text(message);
    // 旧版截断可能把无害字符变成 `<` 等标记，因此再检查实际写入的文本
    check(&format.decode_text(&payload)?)?;
    if payload.contains(&TERMINATOR) {
        warn!("payload contains a NUL byte; decoding will stop there and drop the rest");
    }

    let signature = format.signature();
    validate(
        capacity(carrier.width(), carrier.height()),
        signature.len(),
        payload.len(),
    )?;

    let bits = pack(&sign(format, &payload));
    debug!(
        "embedding {} bits into {}x{} carrier ({format:?})",
        bits.len(),
        carrier.width(),
        carrier.height()
    );

    let mut stego = carrier.clone();
    stego
        .pixels_mut()
        .zip(&bits)
        .for_each(|(pixel, &bit)| {
            pixel[RED_CHANNEL] = (pixel[RED_CHANNEL] & 0xFE) | bit;
        });

    Ok(stego)
}

/// 从载体中提取并校验隐藏的文本。
///
/// # Errors
///
/// 见 [`decode_with_format`]。
pub fn decode(carrier: &RasterBuffer) -> Result<String> {
    decode_with_format(carrier).map(|(_, text)| text)
}

/// 提取隐藏文本，同时返回载体使用的线格式。
///
/// 解码方不知道消息长度，因此逐像素读取红色通道最低位，直到遇到结束符或读完整幅图像。
///
/// # Errors
///
/// * [`Error::Integrity`](crate::error::Error::Integrity)：没有有效签名，或 UTF-8 载荷已损坏。
/// * [`Error::SecurityViolation`](crate::error::Error::SecurityViolation)：恢复出的文本包含被禁止的内容。
pub fn decode_with_format(carrier: &RasterBuffer) -> Result<(WireFormat, String)> {
    let extracted = unpack(carrier.pixels().map(|pixel| pixel[RED_CHANNEL] & 1));
    debug!("extracted {} bytes before terminator", extracted.len());

    let (format, payload) = verify(&extracted)?;
    let text = format.decode_text(payload)?;
    check(&text)?;

    Ok((format, text))
}
