use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static INTERNATIONAL_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{6,15}$").expect("valid phone regex"));

/// 验证国际手机号格式 (+ 可选，6-15 位数字)
pub fn validate_international_phone(phone: &str) -> AppResult<()> {
    if !INTERNATIONAL_PHONE.is_match(phone) {
        return Err(AppError::ValidationError(format!(
            "Invalid phone number {phone:?}, expected international format like +237600000000"
        )));
    }
    Ok(())
}

/// wa.me 链接里的号码不能带 +
pub fn wa_me_number(phone: &str) -> String {
    phone.replace('+', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_international_phone() {
        assert!(validate_international_phone("+237680371957").is_ok());
        assert!(validate_international_phone("33612345678").is_ok());
        assert!(validate_international_phone("+1234").is_err());
        assert!(validate_international_phone("+237 680 371 957").is_err());
        assert!(validate_international_phone("").is_err());
    }

    #[test]
    fn test_wa_me_number() {
        assert_eq!(wa_me_number("+237680371957"), "237680371957");
        assert_eq!(wa_me_number("237680371957"), "237680371957");
    }
}
