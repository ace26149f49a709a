//! Typed-value validation for option values.

use std::net::IpAddr;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Permissive URL shape: scheme, then a plausible host (domain with TLD,
/// `localhost`, IPv4 or bracketed IPv6), optional port, optional path/query.
/// Intentionally looser than a full grammar; tests pin the boundaries.
const URL_PATTERN: &str = r"(?i)^(?:http|ftp)s?://(?:(?:[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]*[A-Z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|\[?[A-F0-9]*:[A-F0-9:]+\]?)(?::\d+)?(?:/?|[/?]\S+)$";

/// Minimal email shape: something before one `@`, at least one `.` after it.
const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+";

/// The declared type of an option value.
///
/// Each variant carries its own validation rule; extending the set means
/// adding a variant here and an arm in [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Base-10 integer
    Int,
    /// Decimal number
    Float,
    /// Non-empty string
    Str,
    /// http/https/ftp/ftps URL
    Url,
    /// IPv4 or IPv6 literal
    Ip,
    /// Integer in 1-65535
    Port,
    /// Existing regular file
    File,
    /// Existing directory
    Dir,
    /// Email address
    Email,
}

impl ArgKind {
    /// Human-readable description of what the kind expects, shown in
    /// interactive prompts.
    pub fn hint(self) -> &'static str {
        match self {
            ArgKind::Int => "integer (e.g., 123)",
            ArgKind::Float => "floating point number (e.g., 12.34)",
            ArgKind::Str => "a string of text",
            ArgKind::Url => "a valid URL (e.g., https://example.com)",
            ArgKind::Ip => "a valid IP address (e.g., 192.168.1.1)",
            ArgKind::Port => "a valid port number (1-65535)",
            ArgKind::File => "a valid file path (e.g., /path/to/file)",
            ArgKind::Dir => "a valid directory path (e.g., /path/to/directory)",
            ArgKind::Email => "a valid email address (e.g., user@example.com)",
        }
    }
}

/// Check a raw token against the rule for `kind`.
///
/// `file` and `dir` touch the filesystem; everything else is pure.
pub fn validate(kind: ArgKind, raw: &str) -> bool {
    match kind {
        ArgKind::Int => raw.parse::<i64>().is_ok(),
        ArgKind::Float => raw.parse::<f64>().is_ok(),
        ArgKind::Str => !raw.is_empty(),
        ArgKind::Url => url_pattern().is_match(raw),
        ArgKind::Ip => raw.parse::<IpAddr>().is_ok(),
        ArgKind::Port => is_valid_port(raw),
        ArgKind::File => Path::new(raw).is_file(),
        ArgKind::Dir => Path::new(raw).is_dir(),
        ArgKind::Email => email_pattern().is_match(raw),
    }
}

/// Error text for a failed check, naming the option and the offending value.
pub(crate) fn invalid_value_message(kind: ArgKind, option: &str, value: &str) -> String {
    match kind {
        ArgKind::Int => format!("invalid integer value for '--{option}': {value}"),
        ArgKind::Float => format!("invalid float value for '--{option}': {value}"),
        ArgKind::Str => format!("invalid string value for '--{option}': {value}"),
        ArgKind::Url => format!("invalid URL provided for '--{option}': {value}"),
        ArgKind::Ip => format!("invalid IP address for '--{option}': {value}"),
        ArgKind::Port => format!("invalid port for '--{option}': {value}"),
        ArgKind::File => format!("file does not exist or cannot be read: {value}"),
        ArgKind::Dir => format!("directory does not exist: {value}"),
        ArgKind::Email => format!("invalid email address for '--{option}': {value}"),
    }
}

fn is_valid_port(raw: &str) -> bool {
    raw.parse::<u32>()
        .map(|port| (1..=65535).contains(&port))
        .unwrap_or(false)
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern compiles"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_accepts_base_10() {
        assert!(validate(ArgKind::Int, "123"));
        assert!(validate(ArgKind::Int, "-45"));
        assert!(validate(ArgKind::Int, "0"));
    }

    #[test]
    fn test_int_rejects_non_integers() {
        assert!(!validate(ArgKind::Int, "12.5"));
        assert!(!validate(ArgKind::Int, "abc"));
        assert!(!validate(ArgKind::Int, ""));
    }

    #[test]
    fn test_float_accepts_decimals() {
        assert!(validate(ArgKind::Float, "12.34"));
        assert!(validate(ArgKind::Float, "-0.5"));
        assert!(validate(ArgKind::Float, "7"));
    }

    #[test]
    fn test_float_rejects_garbage() {
        assert!(!validate(ArgKind::Float, "1.2.3"));
        assert!(!validate(ArgKind::Float, "twelve"));
    }

    #[test]
    fn test_str_requires_non_empty() {
        assert!(validate(ArgKind::Str, "x"));
        assert!(!validate(ArgKind::Str, ""));
    }

    #[test]
    fn test_port_range_is_inclusive() {
        assert!(validate(ArgKind::Port, "1"));
        assert!(validate(ArgKind::Port, "8080"));
        assert!(validate(ArgKind::Port, "65535"));
    }

    #[test]
    fn test_port_rejects_out_of_range() {
        assert!(!validate(ArgKind::Port, "0"));
        assert!(!validate(ArgKind::Port, "65536"));
        assert!(!validate(ArgKind::Port, "-1"));
        assert!(!validate(ArgKind::Port, "http"));
    }

    #[test]
    fn test_ip_accepts_v4_and_v6() {
        assert!(validate(ArgKind::Ip, "192.168.1.1"));
        assert!(validate(ArgKind::Ip, "127.0.0.1"));
        assert!(validate(ArgKind::Ip, "::1"));
        assert!(validate(ArgKind::Ip, "2001:db8::8a2e:370:7334"));
    }

    #[test]
    fn test_ip_rejects_invalid_literals() {
        assert!(!validate(ArgKind::Ip, "not_an_ip"));
        assert!(!validate(ArgKind::Ip, "256.1.1.1"));
        assert!(!validate(ArgKind::Ip, "1.2.3"));
    }

    #[test]
    fn test_url_requires_scheme() {
        assert!(validate(ArgKind::Url, "https://example.com"));
        assert!(!validate(ArgKind::Url, "google.com"));
    }

    #[test]
    fn test_url_accepts_common_shapes() {
        assert!(validate(ArgKind::Url, "http://localhost:8000/path"));
        assert!(validate(ArgKind::Url, "ftp://10.0.0.1/pub"));
        assert!(validate(ArgKind::Url, "HTTPS://EXAMPLE.COM/a?b=c"));
    }

    #[test]
    fn test_url_rejects_unknown_scheme() {
        assert!(!validate(ArgKind::Url, "gopher://example.com"));
    }

    #[test]
    fn test_email_needs_dot_after_at() {
        assert!(validate(ArgKind::Email, "user@example.com"));
        assert!(!validate(ArgKind::Email, "notvalid@email"));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(!validate(ArgKind::Email, "user.example.com"));
    }

    #[test]
    fn test_file_checks_the_filesystem() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate(ArgKind::File, file.path().to_str().unwrap()));
        assert!(!validate(ArgKind::File, "/no/such/file/anywhere"));
    }

    #[test]
    fn test_dir_checks_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(ArgKind::Dir, dir.path().to_str().unwrap()));
        // a file is not a directory
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(!validate(ArgKind::Dir, file.path().to_str().unwrap()));
    }

    #[test]
    fn test_invalid_value_message_names_option_and_value() {
        let msg = invalid_value_message(ArgKind::Port, "port", "0");
        assert!(msg.contains("--port"));
        assert!(msg.contains('0'));
    }
}
