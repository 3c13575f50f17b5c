//! # 内容检查模块
//!
//! 拒绝包含脚本标记的文本。嵌入前与提取后各检查一次，两次检查相互独立：
//! 图像在编码与解码之间可能被篡改。匹配均不区分 ASCII 大小写。

use crate::error::{Error, Result, Violation};
use log::warn;

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";
const JAVASCRIPT_SCHEME: &str = "javascript:";

/// 检查文本是否包含被禁止的模式。
///
/// # Errors
///
/// 匹配到 `<script …>…</script>` 元素或 `javascript:` 前缀时返回
/// [`Error::SecurityViolation`]。
pub fn check(text: &str) -> Result<()> {
    // ASCII 小写化不改变字节偏移
    let lower = text.to_ascii_lowercase();

    let violation = if contains_script_element(&lower) {
        Some(Violation::ScriptElement)
    } else if lower.contains(JAVASCRIPT_SCHEME) {
        Some(Violation::JavascriptScheme)
    } else {
        None
    };

    match violation {
        Some(violation) => {
            warn!("rejected text: {violation}");
            Err(Error::SecurityViolation(violation))
        }
        None => Ok(()),
    }
}

/// `<script` 之后须是非单词字符，随后是任意属性直到 `>`，再往后任意位置出现 `</script>`。
fn contains_script_element(lower: &str) -> bool {
    lower.match_indices(SCRIPT_OPEN).any(|(start, _)| {
        let rest = &lower[start + SCRIPT_OPEN.len()..];
        let boundary = rest
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphanumeric() || c == '_'));
        if !boundary {
            return false;
        }
        rest.find('>')
            .is_some_and(|end| rest[end + 1..].contains(SCRIPT_CLOSE))
    })
}
