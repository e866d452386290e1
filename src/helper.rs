use dotenv::dotenv;

/// Reads a value from the process environment (or `.env`), falling back to
/// the given default.
pub fn get_env_value_or(key: &str, default: &str) -> String {
    dotenv().ok();

    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let value = get_env_value_or("CONTACTCTL_DOES_NOT_EXIST", "fallback");
        assert_eq!(value, "fallback");
    }
}
