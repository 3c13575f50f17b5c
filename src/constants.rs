/// 旧版线格式的签名前缀 (12 字节 ASCII)。
/// 字符按码点截断为单字节，与已有的隐写图像逐位兼容。
pub const SIGNATURE_LEGACY: &[u8; 12] = b"CSH_SEC_v1::";

/// UTF-8 线格式的签名前缀，长度与旧版相同。
pub const SIGNATURE_UTF8: &[u8; 12] = b"CSH_SEC_v2::";

/// 签名长度 (字节)。两种线格式共用。
pub const SIGNATURE_LEN: usize = 12;

/// 结束符：一个全零字节。
pub const TERMINATOR: u8 = 0x00;

/// 每个字节展开成的比特数。
/// 每个像素只承载一个比特，因此也是每字节消耗的像素数。
pub const BITS_PER_BYTE: usize = 8;

/// RGBA8 每个像素的通道数。
pub const CHANNELS: usize = 4;

/// 承载数据的通道下标 (红色)。
pub const RED_CHANNEL: usize = 0;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";
