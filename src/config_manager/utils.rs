use std::fs;
use std::path::Path;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

/// Read a configuration file as text with `${VAR}` environment substitution.
///
/// Unset variables are replaced with an empty string, so an unset
/// credential reads as "not configured".
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    substitute_env_vars(&content)
}

/// Replace `${VAR_NAME}` placeholders with environment values
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let substituted = pattern.replace_all(content, |caps: &regex::Captures| {
        let var_name = caps.get(1).map_or("", |m| m.as_str());
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                debug!("Environment variable {} is not set", var_name);
                String::new()
            }
        }
    });
    Ok(substituted.into_owned())
}

/// Load a text file, stripping a UTF-8 BOM and falling back to a
/// lossy Windows-1252 decode for legacy files
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;

    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(&bytes) {
        let (cow, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Ok(cow.into_owned());
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding as Windows-1252", file_path);
            let (cow, _, _) = encoding_rs::WINDOWS_1252.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}
