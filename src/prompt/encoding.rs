//! Decoding of raw terminal input.
//!
//! ASCII input is used as-is. Anything else is decoded with the charset the
//! locale declares, or, when the locale says nothing useful, as UTF-8 with a
//! Latin-1 fallback.

use super::validators::ValidationError;

/// Locale variables consulted for the terminal charset, highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Character encoding declared for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEncoding {
    Utf8,
    Latin1,
    Unknown,
}

impl TermEncoding {
    /// Read the charset from the first non-empty locale variable.
    pub fn from_env() -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|locale| Self::from_locale(&locale))
            .unwrap_or(TermEncoding::Unknown)
    }

    /// Parse a locale string such as `sv_SE.ISO-8859-1@euro`.
    pub fn from_locale(locale: &str) -> Self {
        let Some((_, charset)) = locale.split_once('.') else {
            return TermEncoding::Unknown;
        };
        let charset = charset.split('@').next().unwrap_or_default();
        let normalized: String = charset
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "utf8" => TermEncoding::Utf8,
            "iso88591" | "latin1" => TermEncoding::Latin1,
            _ => TermEncoding::Unknown,
        }
    }
}

/// A decoded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// The encoding had to be guessed because the terminal's is unknown.
    pub guessed: bool,
}

/// Decode one line of raw input.
pub fn decode_input(raw: &[u8], encoding: TermEncoding) -> Result<Decoded, ValidationError> {
    if raw.is_ascii() {
        return Ok(Decoded {
            text: latin1(raw),
            guessed: false,
        });
    }

    match encoding {
        TermEncoding::Utf8 => String::from_utf8(raw.to_vec())
            .map(|text| Decoded {
                text,
                guessed: false,
            })
            .map_err(|_| {
                ValidationError::new("Input is not valid UTF-8, please enter it again.")
            }),
        TermEncoding::Latin1 => Ok(Decoded {
            text: latin1(raw),
            guessed: false,
        }),
        TermEncoding::Unknown => {
            let text = match std::str::from_utf8(raw) {
                Ok(text) => text.to_string(),
                Err(_) => latin1(raw),
            };
            Ok(Decoded {
                text,
                guessed: true,
            })
        }
    }
}

/// Latin-1 maps every byte to the code point of the same value.
fn latin1(raw: &[u8]) -> String {
    raw.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_from_locale() {
        assert_eq!(TermEncoding::from_locale("en_US.UTF-8"), TermEncoding::Utf8);
        assert_eq!(TermEncoding::from_locale("sv_SE.utf8"), TermEncoding::Utf8);
        assert_eq!(
            TermEncoding::from_locale("sv_SE.ISO-8859-1@euro"),
            TermEncoding::Latin1
        );
        assert_eq!(TermEncoding::from_locale("de_DE.latin1"), TermEncoding::Latin1);
        assert_eq!(TermEncoding::from_locale("C"), TermEncoding::Unknown);
        assert_eq!(TermEncoding::from_locale("POSIX"), TermEncoding::Unknown);
        assert_eq!(TermEncoding::from_locale("ja_JP.eucJP"), TermEncoding::Unknown);
    }

    #[test]
    #[serial]
    fn test_from_env_priority() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("LC_ALL", "");
            std::env::set_var("LC_CTYPE", "sv_SE.ISO-8859-1");
            std::env::set_var("LANG", "en_US.UTF-8");
        }
        let encoding = TermEncoding::from_env();
        unsafe {
            std::env::remove_var("LC_ALL");
            std::env::remove_var("LC_CTYPE");
            std::env::remove_var("LANG");
        }
        assert_eq!(encoding, TermEncoding::Latin1);
    }

    #[test]
    fn test_ascii_passes_through() {
        for encoding in [TermEncoding::Utf8, TermEncoding::Latin1, TermEncoding::Unknown] {
            let decoded = decode_input(b"doe@example.org", encoding).unwrap();
            assert_eq!(decoded.text, "doe@example.org");
            assert!(!decoded.guessed);
        }
    }

    #[test]
    fn test_declared_utf8() {
        let decoded = decode_input("åsa".as_bytes(), TermEncoding::Utf8).unwrap();
        assert_eq!(decoded.text, "åsa");
        assert!(!decoded.guessed);

        assert!(decode_input(&[b'a', 0xe5], TermEncoding::Utf8).is_err());
    }

    #[test]
    fn test_declared_latin1() {
        let decoded = decode_input(&[0xe5, b's', b'a'], TermEncoding::Latin1).unwrap();
        assert_eq!(decoded.text, "åsa");
    }

    #[test]
    fn test_unknown_tries_utf8_first() {
        let decoded = decode_input("åsa".as_bytes(), TermEncoding::Unknown).unwrap();
        assert_eq!(decoded.text, "åsa");
        assert!(decoded.guessed);
    }

    #[test]
    fn test_unknown_falls_back_to_latin1() {
        let decoded = decode_input(&[0xe5, b's', b'a'], TermEncoding::Unknown).unwrap();
        assert_eq!(decoded.text, "åsa");
        assert!(decoded.guessed);
    }
}
