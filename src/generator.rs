use rand::TryRngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::{Builder, Uuid};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("entropy source exhausted: {0}")]
    EntropyExhausted(String),
}

/// Source of fresh version-4 identifiers.
pub trait UuidService {
    fn generate(&mut self) -> Result<Uuid, GenerateError>;
}

/// Pulls 16 bytes from the operating system RNG and stamps the RFC 4122
/// version and variant bits on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUuidService;

impl UuidService for RandomUuidService {
    fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GenerateError::EntropyExhausted(e.to_string()))?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UuidFormat {
    #[default]
    Hyphenated,
    Simple,
    Urn,
    Braced,
}

impl UuidFormat {
    pub fn render(self, uuid: &Uuid, uppercase: bool) -> String {
        let text = match self {
            UuidFormat::Hyphenated => uuid.hyphenated().to_string(),
            UuidFormat::Simple => uuid.simple().to_string(),
            UuidFormat::Urn => uuid.urn().to_string(),
            UuidFormat::Braced => uuid.braced().to_string(),
        };
        if uppercase {
            // Keep the "urn:uuid:" prefix lowercase
            match self {
                UuidFormat::Urn => {
                    format!("urn:uuid:{}", uuid.hyphenated().to_string().to_uppercase())
                }
                _ => text.to_uppercase(),
            }
        } else {
            text
        }
    }
}

impl fmt::Display for UuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UuidFormat::Hyphenated => "hyphenated",
            UuidFormat::Simple => "simple",
            UuidFormat::Urn => "urn",
            UuidFormat::Braced => "braced",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UuidFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hyphenated" => Ok(UuidFormat::Hyphenated),
            "simple" => Ok(UuidFormat::Simple),
            "urn" => Ok(UuidFormat::Urn),
            "braced" => Ok(UuidFormat::Braced),
            other => Err(format!(
                "Unknown format '{}' (expected hyphenated, simple, urn or braced)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::{Variant, Version};

    fn is_v4_string(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 36 {
            return false;
        }
        for (i, b) in bytes.iter().enumerate() {
            let ok = match i {
                8 | 13 | 18 | 23 => *b == b'-',
                14 => *b == b'4',
                19 => matches!(*b, b'8' | b'9' | b'a' | b'b'),
                _ => b.is_ascii_hexdigit() && !b.is_ascii_uppercase(),
            };
            if !ok {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_generate_is_version_4() {
        let uuid = RandomUuidService.generate().unwrap();
        assert_eq!(uuid.get_version(), Some(Version::Random));
        assert_eq!(uuid.get_variant(), Variant::RFC4122);
    }

    #[test]
    fn test_two_generations_are_distinct_and_valid() {
        let mut service = RandomUuidService;
        let a = UuidFormat::Hyphenated.render(&service.generate().unwrap(), false);
        let b = UuidFormat::Hyphenated.render(&service.generate().unwrap(), false);

        assert!(is_v4_string(&a), "not a v4 string: {a}");
        assert!(is_v4_string(&b), "not a v4 string: {b}");
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_formats() {
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

        assert_eq!(
            UuidFormat::Hyphenated.render(&uuid, false),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
        assert_eq!(
            UuidFormat::Simple.render(&uuid, false),
            "67e5504410b1426f9247bb680e5fe0c8"
        );
        assert_eq!(
            UuidFormat::Urn.render(&uuid, false),
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
        assert_eq!(
            UuidFormat::Braced.render(&uuid, false),
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}"
        );
    }

    #[test]
    fn test_render_uppercase() {
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

        assert_eq!(
            UuidFormat::Hyphenated.render(&uuid, true),
            "67E55044-10B1-426F-9247-BB680E5FE0C8"
        );
        assert_eq!(
            UuidFormat::Urn.render(&uuid, true),
            "urn:uuid:67E55044-10B1-426F-9247-BB680E5FE0C8"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("simple".parse::<UuidFormat>(), Ok(UuidFormat::Simple));
        assert_eq!("URN".parse::<UuidFormat>(), Ok(UuidFormat::Urn));
        assert!("base64".parse::<UuidFormat>().is_err());
    }

    #[test]
    fn test_entropy_error_message() {
        let err = GenerateError::EntropyExhausted("no bytes".to_string());
        assert_eq!(err.to_string(), "entropy source exhausted: no bytes");
    }
}
