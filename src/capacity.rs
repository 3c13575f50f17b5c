//! # 容量模块
//!
//! 每个像素只在红色通道的最低位承载一个比特，因此容量为 `floor(W * H / 8)` 字节。

use crate::constants::{BITS_PER_BYTE, SIGNATURE_LEN};
use crate::error::{Error, Result};
use log::debug;

/// 宽高为 `width` x `height` 的载体可容纳的字节数。
pub fn capacity(width: u32, height: u32) -> usize {
    (width as usize * height as usize) / BITS_PER_BYTE
}

/// 该载体可容纳的最长消息 (字节)，已扣除签名与结束符。
pub fn max_message_len(width: u32, height: u32) -> usize {
    capacity(width, height).saturating_sub(SIGNATURE_LEN + 1)
}

/// 检查签名、消息与结束符能否放入载体。
///
/// # Errors
///
/// 当 `signature_len + payload_len + 1 > capacity` 时返回 [`Error::CapacityExceeded`]。
pub fn validate(capacity: usize, signature_len: usize, payload_len: usize) -> Result<()> {
    let required = signature_len.saturating_add(payload_len).saturating_add(1);
    debug!("capacity check: required {required} bytes, available {capacity} bytes");

    if required > capacity {
        return Err(Error::CapacityExceeded { required, capacity });
    }
    Ok(())
}
