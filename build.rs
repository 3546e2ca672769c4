// Inyecta la configuración de `.env` como variables de compilación
// (`option_env!` en src/config.rs). El entorno real manda sobre el fichero.

use std::env;
use std::fs;
use std::path::Path;

#[path = "build_support/dotenv.rs"]
mod dotenv;

use dotenv::{check_value, parse_line, Line, KNOWN_KEYS};

fn forward(key: &str, value: &str) {
    if env::var(key).is_ok() {
        return;
    }
    if let Some(warning) = check_value(key, value) {
        println!("cargo:warning=.env: {}", warning);
    }
    println!("cargo:rustc-env={}={}", key, value);
}

fn load(env_file: &Path) {
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer {}: {}", env_file.display(), e);
            return;
        }
    };

    for (number, raw) in contents.lines().enumerate() {
        match parse_line(raw) {
            Line::Blank => {}
            Line::Invalid(line) => {
                println!("cargo:warning=.env:{}: línea ignorada: {}", number + 1, line);
            }
            Line::Entry { key, value } if KNOWN_KEYS.contains(&key.as_str()) => forward(&key, &value),
            Line::Entry { key, .. } => {
                println!("cargo:warning=.env:{}: clave desconocida {}", number + 1, key);
            }
        }
    }
}

fn main() {
    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        load(env_file);
    } else {
        println!("cargo:warning=Sin .env: API_BASE_URL=/api por defecto (copia .env.example a .env para cambiarlo).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support/dotenv.rs");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
