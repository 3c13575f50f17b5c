//! # 签名模块
//!
//! 在载荷前添加固定的魔数前缀，解码时以此区分“没有载荷”与“存在载荷”。
//! 签名同时标识线格式：文本如何映射为字节。签名只是完整性判据，不提供任何密码学认证。

use crate::constants::{SIGNATURE_LEGACY, SIGNATURE_UTF8};
use crate::error::{Error, Result};

/// 文本与载荷字节之间的映射约定。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WireFormat {
    /// 每个字符截断为码点的低 8 位，解码时按 Latin-1 还原。
    /// 码点大于 255 的字符会被破坏；仅用于与旧图像逐位兼容。
    Legacy,
    /// UTF-8 编码。
    #[default]
    Utf8,
}

impl WireFormat {
    pub fn signature(self) -> &'static [u8] {
        match self {
            WireFormat::Legacy => SIGNATURE_LEGACY,
            WireFormat::Utf8 => SIGNATURE_UTF8,
        }
    }

    /// 将文本转换为载荷字节。
    pub fn encode_text(self, text: &str) -> Vec<u8> {
        match self {
            WireFormat::Legacy => text.chars().map(|c| (c as u32 & 0xFF) as u8).collect(),
            WireFormat::Utf8 => text.as_bytes().to_vec(),
        }
    }

    /// 将载荷字节还原为文本。
    ///
    /// # Errors
    ///
    /// UTF-8 格式下字节不是合法 UTF-8 时返回 [`Error::Integrity`]。
    pub fn decode_text(self, bytes: &[u8]) -> Result<String> {
        match self {
            WireFormat::Legacy => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            WireFormat::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| Error::Integrity),
        }
    }
}

/// 返回 `签名 ++ payload`。
pub fn sign(format: WireFormat, payload: &[u8]) -> Vec<u8> {
    let signature = format.signature();
    let mut signed = Vec::with_capacity(signature.len() + payload.len());
    signed.extend_from_slice(signature);
    signed.extend_from_slice(payload);
    signed
}

/// 校验提取出的字节以已知签名开头，返回对应线格式与去掉签名后的载荷。
///
/// # Errors
///
/// 没有任何已知签名匹配时返回 [`Error::Integrity`]。
pub fn verify(extracted: &[u8]) -> Result<(WireFormat, &[u8])> {
    [WireFormat::Utf8, WireFormat::Legacy]
        .into_iter()
        .find_map(|format| {
            extracted
                .strip_prefix(format.signature())
                .map(|payload| (format, payload))
        })
        .ok_or(Error::Integrity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_detects_format() {
        let signed = sign(WireFormat::Legacy, b"payload");
        assert!(signed.starts_with(b"CSH_SEC_v1::"));
        assert_eq!(verify(&signed), Ok((WireFormat::Legacy, &b"payload"[..])));

        let signed = sign(WireFormat::Utf8, b"payload");
        assert!(signed.starts_with(b"CSH_SEC_v2::"));
        assert_eq!(verify(&signed), Ok((WireFormat::Utf8, &b"payload"[..])));
    }

    #[test]
    fn verify_rejects_missing_or_partial_signature() {
        assert_eq!(verify(b"hello world"), Err(Error::Integrity));
        assert_eq!(verify(b"CSH_SEC_v1:"), Err(Error::Integrity));
        assert_eq!(verify(b""), Err(Error::Integrity));
    }

    #[test]
    fn verify_accepts_empty_payload() {
        assert_eq!(verify(b"CSH_SEC_v2::"), Ok((WireFormat::Utf8, &b""[..])));
    }

    #[test]
    fn legacy_truncates_code_points() {
        // 'é' (U+00E9) 能原样保存，'中' (U+4E2D) 被截断为 0x2D ('-')
        let bytes = WireFormat::Legacy.encode_text("é中");
        assert_eq!(bytes, vec![0xE9, 0x2D]);
        assert_eq!(WireFormat::Legacy.decode_text(&bytes).unwrap(), "é-");
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        assert_eq!(
            WireFormat::Utf8.decode_text(&[0xFF, 0xFE]),
            Err(Error::Integrity)
        );
        assert_eq!(WireFormat::Utf8.decode_text("中文".as_bytes()).unwrap(), "中文");
    }
}
