//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secrets before they reach `Debug` output.
///
/// - Empty input prints `EMPTY`.
/// - Text shorter than 12 characters, and any raw bytes, print `***`.
/// - Longer text keeps the first and last three characters, so that two
///   access ids can still be told apart in logs.
pub struct Redact<'a>(Secret<'a>);

#[derive(Clone, Copy)]
enum Secret<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Secret::Text(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Secret::Text(value.as_str()))
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact(Secret::Bytes(value))
    }
}

impl<'a> From<&'a Vec<u8>> for Redact<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Redact(Secret::Bytes(value.as_slice()))
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Secret::Text("") | Secret::Bytes([]) => f.write_str("EMPTY"),
            Secret::Bytes(_) => f.write_str("***"),
            Secret::Text(v) if v.chars().count() < 12 => f.write_str("***"),
            Secret::Text(v) => {
                let head: String = v.chars().take(3).collect();
                let tail: String = v.chars().skip(v.chars().count() - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_text() {
        let cases = vec![
            ("xxxx", "***"),
            ("Hello World!", "Hel***ld!"),
            ("ACCESS-ID-0001-norsk", "ACC***rsk"),
            ("", "EMPTY"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_redact_bytes() {
        assert_eq!("EMPTY", format!("{:?}", Redact::from(&Vec::new())));
        assert_eq!(
            "***",
            format!("{:?}", Redact::from(b"a very long signing key".as_slice()))
        );
    }
}
