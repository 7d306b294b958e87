//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_skillflow_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SkillFlowError {
            $($variant(String),)*
        }

        impl SkillFlowError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SkillFlowError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SkillFlowError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SkillFlowError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SkillFlowError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SkillFlowError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_skillflow_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Io("E006", "IO Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Conflict"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    InvalidState("E014", "Invalid State"),
}

impl SkillFlowError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SkillFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SkillFlowError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SkillFlowError {
    fn from(err: sea_orm::DbErr) -> Self {
        SkillFlowError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SkillFlowError {
    fn from(err: std::io::Error) -> Self {
        SkillFlowError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SkillFlowError {
    fn from(err: serde_json::Error) -> Self {
        SkillFlowError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SkillFlowError {
    fn from(err: chrono::ParseError) -> Self {
        SkillFlowError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SkillFlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SkillFlowError::cache_connection("test").code(), "E001");
        assert_eq!(SkillFlowError::database_config("test").code(), "E003");
        assert_eq!(SkillFlowError::validation("test").code(), "E007");
        assert_eq!(SkillFlowError::authentication("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SkillFlowError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SkillFlowError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SkillFlowError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_state_and_conflict_codes() {
        assert_eq!(SkillFlowError::conflict("dup").code(), "E010");
        assert_eq!(SkillFlowError::invalid_state("draft").code(), "E014");
        assert_eq!(
            SkillFlowError::invalid_state("draft").error_type(),
            "Invalid State"
        );
    }

    #[test]
    fn test_db_error_conversion() {
        let err: SkillFlowError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = SkillFlowError::validation("Invalid option list");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid option list"));
    }
}
