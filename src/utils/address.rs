//! 地址输入规范化
//!
//! 只做空白处理与非空校验，不校验地址格式/校验和（raw、bounceable、
//! non-bounceable 形式都原样交给上游解析）。

use crate::domain::InspectError;

/// 去除首尾空白后拒绝空输入，再移除内部所有空白字符
pub fn normalize_address(input: &str) -> Result<String, InspectError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InspectError::EmptyAddress);
    }
    Ok(trimmed.chars().filter(|c| !c.is_whitespace()).collect())
}

/// 区块浏览器链接：`{base}/{address}`
pub fn explorer_url(base_url: &str, address: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address("  EQD4FPq-PRDieyQKkizFTRtSDyucUIqrj0v_zXJmqaDp6_0t \n").unwrap(),
            "EQD4FPq-PRDieyQKkizFTRtSDyucUIqrj0v_zXJmqaDp6_0t"
        );
        // 复制粘贴时夹带的内部空白
        assert_eq!(normalize_address("EQD4 FPq\t-PRD").unwrap(), "EQD4FPq-PRD");
        assert_eq!(normalize_address("0:abc").unwrap(), "0:abc");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(normalize_address(""), Err(InspectError::EmptyAddress)));
        assert!(matches!(
            normalize_address(" \t\n "),
            Err(InspectError::EmptyAddress)
        ));
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            explorer_url("https://tonviewer.com", "EQabc"),
            "https://tonviewer.com/EQabc"
        );
        assert_eq!(
            explorer_url("https://tonviewer.com/", "EQabc"),
            "https://tonviewer.com/EQabc"
        );
    }
}
