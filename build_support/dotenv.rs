//! Lectura de `.env` para build.rs. Se compila también en los tests de la
//! librería para cubrir el parser.

/// Claves que lee `config.rs` con `option_env!`
pub const KNOWN_KEYS: [&str; 5] = [
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "MESSAGE_DISMISS_MS",
    "PASSWORD_CHANGE_LOGOUT_DELAY_MS",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Blank,
    Entry { key: String, value: String },
    Invalid(String),
}

/// `KEY=VALUE`, `export KEY=VALUE`, valores entre comillas simples o dobles
/// y comentarios `#` al final de valores sin comillas.
pub fn parse_line(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Blank;
    }
    let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);

    let Some((key, value)) = line.split_once('=') else {
        return Line::Invalid(line.to_string());
    };
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Line::Invalid(line.to_string());
    }

    Line::Entry {
        key: key.to_string(),
        value: unquote(value.trim()),
    }
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote) {
            if let Some(end) = inner.find(quote) {
                return inner[..end].to_string();
            }
        }
    }
    match value.find(" #") {
        Some(comment) => value[..comment].trim_end().to_string(),
        None => value.to_string(),
    }
}

/// Avisos de valores que `config.rs` descartaría en silencio
pub fn check_value(key: &str, value: &str) -> Option<String> {
    if key.ends_with("_MS") && value.parse::<u32>().is_err() {
        return Some(format!("{} debe ser un número de milisegundos (\"{}\")", key, value));
    }
    if key == "ENABLE_LOGGING" && !matches!(value, "true" | "false") {
        return Some(format!("ENABLE_LOGGING debe ser true o false (\"{}\")", value));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Line {
        Line::Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn plain_exported_and_quoted_entries() {
        assert_eq!(parse_line("API_BASE_URL=/api"), entry("API_BASE_URL", "/api"));
        assert_eq!(parse_line("export ENVIRONMENT = production"), entry("ENVIRONMENT", "production"));
        assert_eq!(
            parse_line(r#"API_BASE_URL="https://api.beatpass.es/api" # prod"#),
            entry("API_BASE_URL", "https://api.beatpass.es/api")
        );
        assert_eq!(parse_line("ENVIRONMENT='staging'"), entry("ENVIRONMENT", "staging"));
        assert_eq!(parse_line("MESSAGE_DISMISS_MS=4000 # ms"), entry("MESSAGE_DISMISS_MS", "4000"));
    }

    #[test]
    fn comments_blanks_and_garbage() {
        assert_eq!(parse_line("   "), Line::Blank);
        assert_eq!(parse_line("# API_BASE_URL=/x"), Line::Blank);
        assert!(matches!(parse_line("sin igual"), Line::Invalid(_)));
        assert!(matches!(parse_line("MAL CLAVE=1"), Line::Invalid(_)));
    }

    #[test]
    fn suspicious_values_are_reported() {
        assert!(check_value("MESSAGE_DISMISS_MS", "5s").is_some());
        assert!(check_value("ENABLE_LOGGING", "yes").is_some());
        assert_eq!(check_value("PASSWORD_CHANGE_LOGOUT_DELAY_MS", "3000"), None);
        assert_eq!(check_value("API_BASE_URL", "/api"), None);
    }

    #[test]
    fn example_file_only_uses_known_keys() {
        for raw in include_str!("../.env.example").lines() {
            match parse_line(raw) {
                Line::Blank => {}
                Line::Entry { key, value } => {
                    assert!(KNOWN_KEYS.contains(&key.as_str()), "clave desconocida {}", key);
                    assert_eq!(check_value(&key, &value), None);
                }
                Line::Invalid(line) => panic!("línea inválida en .env.example: {}", line),
            }
        }
    }
}
