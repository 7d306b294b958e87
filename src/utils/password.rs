use crate::config::{AppConfig, Argon2Config};
use crate::errors::SkillFlowError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn hasher(config: &Argon2Config) -> Result<Argon2<'static>, SkillFlowError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| SkillFlowError::validation(format!("Argon2 参数错误: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// 按指定参数生成 Argon2id 哈希（PHC 字符串）
pub fn hash_password_with(password: &str, config: &Argon2Config) -> Result<String, SkillFlowError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(config)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SkillFlowError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 使用全局配置的参数
pub fn hash_password(password: &str) -> Result<String, SkillFlowError> {
    hash_password_with(password, &AppConfig::get().argon2)
}

/// 参数取自哈希串本身
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Argon2Config {
        Argon2Config {
            memory_cost: 8192,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password_with("Str0ngPass", &light()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Str0ngPass", &hash));
        assert!(!verify_password("str0ngpass", &hash));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let bad = Argon2Config {
            memory_cost: 1,
            time_cost: 0,
            parallelism: 0,
        };
        assert!(hash_password_with("x", &bad).is_err());
    }
}
