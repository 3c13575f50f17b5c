//! # 比特打包模块
//!
//! 字节序列与比特序列之间的转换。比特以 `u8` 表示 (取值 0 或 1)，
//! 每个字节高位在前展开，末尾追加一个全零的结束字节。

use crate::constants::{BITS_PER_BYTE, TERMINATOR};

/// 将字节展开为比特流，并追加结束符。
///
/// 返回的比特数恒为 `(bytes.len() + 1) * 8`。
pub fn pack(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .chain(std::iter::once(&TERMINATOR))
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// 将比特流按 8 位一组还原为字节，遇到第一个全零字节即停止 (结束符不计入结果)。
///
/// 只使用每个输入元素的最低位。若比特在结束符出现前耗尽，返回已解出的全部字节，
/// 末尾不足 8 位的残余比特被丢弃。调用方仍需校验签名与内容。
pub fn unpack<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let mut bits = bits.into_iter();
    let mut bytes = Vec::new();

    loop {
        let mut byte = 0u8;
        for _ in 0..BITS_PER_BYTE {
            match bits.next() {
                Some(bit) => byte = (byte << 1) | (bit & 1),
                None => return bytes,
            }
        }
        if byte == TERMINATOR {
            return bytes;
        }
        bytes.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_msb_first_with_terminator() {
        let bits = pack(&[0b1010_0001]);
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn pack_empty_is_just_terminator() {
        assert_eq!(pack(&[]), vec![0; 8]);
    }

    #[test]
    fn unpack_stops_at_terminator() {
        let mut bits = pack(b"Hi");
        bits.extend(pack(b"ignored"));
        assert_eq!(unpack(bits), b"Hi");
    }

    #[test]
    fn unpack_without_terminator_is_best_effort() {
        let mut bits = pack(b"abc");
        bits.truncate(8 * 3 + 5);
        assert_eq!(unpack(bits), b"abc");
    }

    #[test]
    fn unpack_uses_only_lowest_bit() {
        // 0x41 ('A') 的比特，每个元素高位都带有杂质
        let noisy = [0xFE, 0x01, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0x03];
        assert_eq!(unpack(noisy), b"A");
    }

    #[test]
    fn embedded_nul_truncates_payload() {
        // 已知限制：消息内部的 NUL 与结束符无法区分
        assert_eq!(unpack(pack(b"ab\0cd")), b"ab");
    }
}
