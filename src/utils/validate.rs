use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

const FULL_NAME_MAX_LEN: usize = 100;

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwerty123",
    "azerty123",
    "admin123",
    "abcd1234",
    "motdepasse1",
];

/// 邮箱统一去空白并转小写后再存储和比较
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), &'static str> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err("Full name is required");
    }
    if trimmed.chars().count() > FULL_NAME_MAX_LEN {
        return Err("Full name must be at most 100 characters");
    }
    Ok(())
}

/// 去掉首尾空白，结果为空时报错
pub fn trim_required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(message);
    }
    Ok(trimmed.to_string())
}

/// 可选文本，空白视为未填写
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 密码策略：至少 8 个字符，同时包含大小写字母和数字，且不是常见弱密码
///
/// 返回全部未满足的条目。
pub fn validate_password(password: &str) -> Result<(), Vec<&'static str>> {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }
    if COMMON_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_ok());
        assert!(validate_password("Apprendre2025").is_ok());
    }

    #[test]
    fn test_password_reports_every_failure() {
        let errors = validate_password("abc").unwrap_err();
        assert!(errors.contains(&"Password must be at least 8 characters long"));
        assert!(errors.contains(&"Password must contain at least one uppercase letter"));
        assert!(errors.contains(&"Password must contain at least one digit"));
        assert!(!errors.contains(&"Password must contain at least one lowercase letter"));
    }

    #[test]
    fn test_common_password() {
        let errors = validate_password("Password1").unwrap_err();
        assert_eq!(
            errors,
            vec!["Password is too common, please choose a stronger password"]
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ada@skillflow.io").is_ok());
        assert!(validate_email("first.last+tag@uni.example.fr").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("a@b").is_err());
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn test_trim_helpers() {
        assert_eq!(trim_required("  Algebra ", "required"), Ok("Algebra".to_string()));
        assert_eq!(trim_required(" \t", "required"), Err("required"));
        assert_eq!(trim_optional(Some("  ".into())), None);
        assert_eq!(trim_optional(Some(" x ".into())), Some("x".into()));
        assert_eq!(trim_optional(None), None);
    }

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name(&"x".repeat(101)).is_err());
    }
}
