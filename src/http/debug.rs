use reqwest::Url;
use reqwest::header::HeaderValue;
use serde_json::Value;

const REDACTION: &str = "***REDACTED***";

// Tavily takes its key in the JSON body, ModelScope in the Authorization header.
const SENSITIVE_KEYS: [&str; 8] = [
    "key",
    "api_key",
    "apikey",
    "token",
    "access_token",
    "authorization",
    "secret",
    "x-api-key",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpDebugConfig {
    pub enabled: bool,
    pub redact_secrets: bool,
    pub max_body_chars: usize,
}

impl HttpDebugConfig {
    pub fn from_verbose(verbose: bool) -> Self {
        Self {
            enabled: verbose,
            redact_secrets: true,
            max_body_chars: 4_000,
        }
    }

    pub fn disabled() -> Self {
        Self::from_verbose(false)
    }
}

pub fn redact_url(url: &Url, enable_redaction: bool) -> String {
    if !enable_redaction || url.query().is_none() {
        return url.as_str().to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let shown = if is_sensitive_key(&k) {
                REDACTION.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), shown)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.as_str().to_string()
}

pub fn redact_header_value(name: &str, value: &HeaderValue, enable_redaction: bool) -> String {
    if enable_redaction && is_sensitive_key(name) {
        return REDACTION.to_string();
    }

    value
        .to_str()
        .map(std::string::ToString::to_string)
        .unwrap_or_else(|_| "<non-utf8>".to_string())
}

/// Masks sensitive keys anywhere inside a JSON body. Non-JSON bodies are
/// returned unchanged.
pub fn redact_text_body(raw: &str, enable_redaction: bool) -> String {
    if !enable_redaction {
        return raw.to_string();
    }

    let Ok(mut json) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };
    redact_json_value(&mut json);
    serde_json::to_string(&json).unwrap_or_else(|_| raw.to_string())
}

pub fn truncate_for_log(input: &str, max_chars: usize) -> String {
    let count = input.chars().count();
    if count <= max_chars {
        return input.to_string();
    }

    let kept = input.chars().take(max_chars).collect::<String>();
    format!("{kept}... <truncated {} chars>", count - max_chars)
}

fn redact_json_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, item) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *item = Value::String(REDACTION.to_string());
                } else {
                    redact_json_value(item);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json_value),
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| sensitive.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::{HttpDebugConfig, redact_header_value, redact_text_body, redact_url, truncate_for_log};
    use reqwest::Url;
    use reqwest::header::HeaderValue;

    #[test]
    fn from_verbose_defaults_to_redaction() {
        let cfg = HttpDebugConfig::from_verbose(true);
        assert!(cfg.enabled);
        assert!(cfg.redact_secrets);
        assert_eq!(cfg.max_body_chars, 4_000);
        assert!(!HttpDebugConfig::disabled().enabled);
    }

    #[test]
    fn redact_url_masks_sensitive_query_params_only() {
        let url = Url::parse("https://wttr.in/Rome?format=j1&key=super-secret").expect("url");
        let redacted = redact_url(&url, true);
        assert!(
            redacted.contains("key=%2A%2A%2AREDACTED%2A%2A%2A")
                || redacted.contains("key=***REDACTED***")
        );
        assert!(redacted.contains("format=j1"));
        assert!(!redacted.contains("super-secret"));
    }

    #[test]
    fn redact_url_leaves_query_free_urls_alone() {
        let url = Url::parse("https://api.tavily.com/search").expect("url");
        assert_eq!(redact_url(&url, true), "https://api.tavily.com/search");
    }

    #[test]
    fn redact_header_value_masks_authorization() {
        let value = HeaderValue::from_static("Bearer ms-secret");
        assert_eq!(
            redact_header_value("Authorization", &value, true),
            "***REDACTED***"
        );
        assert_eq!(
            redact_header_value("Authorization", &value, false),
            "Bearer ms-secret"
        );
    }

    #[test]
    fn redact_text_body_masks_tavily_key_in_json() {
        let raw = r#"{"api_key":"tvly-secret","query":"Rome tickets","include_answer":true}"#;
        let redacted = redact_text_body(raw, true);
        assert!(redacted.contains("\"api_key\":\"***REDACTED***\""));
        assert!(redacted.contains("\"query\":\"Rome tickets\""));
        assert!(!redacted.contains("tvly-secret"));
    }

    #[test]
    fn redact_text_body_keeps_plain_text() {
        assert_eq!(redact_text_body("not json", true), "not json");
    }

    #[test]
    fn truncate_for_log_appends_marker() {
        let out = truncate_for_log("abcdefghijklmnopqrstuvwxyz", 5);
        assert!(out.starts_with("abcde"));
        assert!(out.contains("<truncated 21 chars>"));
    }
}
