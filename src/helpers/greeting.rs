//! Greeting Formatter

/// Name used when the caller does not supply one.
pub const DEFAULT_USER: &str = "Anonymous";

/// Fixed salutation placed in front of every name.
pub const SALUTATION: &str = "Hello";

/// Formats a greeting for `name`.
///
/// The name is used verbatim, including empty text.
///
/// # Example
///
/// ```
/// use workflow_helpers::helpers::greet;
///
/// assert_eq!(greet("Sam"), "Hello, Sam!");
/// ```
pub fn greet(name: &str) -> String {
    format!("{}, {}!", SALUTATION, name)
}

/// Greets `name`, falling back to [`DEFAULT_USER`] when absent.
pub fn greet_or_default(name: Option<&str>) -> String {
    greet(name.unwrap_or(DEFAULT_USER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("Sam"), "Hello, Sam!");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn test_greet_keeps_name_verbatim() {
        for name in ["  padded  ", "Ünïcödé", "with, comma", "{braces}"] {
            let greeting = greet(name);
            assert!(greeting.starts_with("Hello, "));
            assert!(greeting.contains(name));
        }
    }

    #[test]
    fn test_greet_or_default() {
        assert_eq!(greet_or_default(None), "Hello, Anonymous!");
        assert_eq!(greet_or_default(Some("Ada")), "Hello, Ada!");
    }
}
