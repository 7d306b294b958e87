//! 以字符串存库的枚举
//!
//! 数据库与 JSON 中统一使用 snake_case 字符串；反序列化时忽略大小写，
//! 兼容 `"BLOOM"`、`"Published"` 这类写法。

/// 生成字符串枚举及其 `as_str` / `Display` / `FromStr` / `Deserialize` 实现
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $ts_file:literal {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, ts_rs::TS)]
        #[serde(rename_all = "snake_case")]
        #[ts(export, export_to = $ts_file)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!(
                        "Invalid {}: '{}'. Supported: {}",
                        stringify!($name),
                        s,
                        [$($value),+].join(", ")
                    )),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_string_enum;

#[cfg(test)]
mod tests {
    define_string_enum! {
        Colour, "test_colour.ts" {
            Red => "red",
            DarkBlue => "dark_blue",
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("RED".parse::<Colour>(), Ok(Colour::Red));
        assert_eq!(" dark_blue ".parse::<Colour>(), Ok(Colour::DarkBlue));
    }

    #[test]
    fn test_parse_error_lists_values() {
        let err = "green".parse::<Colour>().unwrap_err();
        assert!(err.contains("red, dark_blue"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Colour::DarkBlue).unwrap(),
            "\"dark_blue\""
        );
        let parsed: Colour = serde_json::from_str("\"DARK_BLUE\"").unwrap();
        assert_eq!(parsed, Colour::DarkBlue);
        assert_eq!(Colour::ALL.len(), 2);
    }
}
