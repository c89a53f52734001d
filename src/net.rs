//! IPv6 text adapter.
//!
//! # Responsibilities
//! - Parse `address/length` prefix notation into an [`AddressPrefix`]
//! - Formatting goes the other way via `AddressPrefix`'s `Display`
//!
//! # Design Decisions
//! - Leans on `std::net::Ipv6Addr` for address syntax; this module only
//!   adds the `/length` split and range check
//! - Errors carry the offending text so load failures point at the row

use std::net::Ipv6Addr;

use thiserror::Error;

use crate::routing::AddressPrefix;

/// Errors from parsing textual prefix notation.
#[derive(Debug, Error)]
pub enum PrefixParseError {
    /// No `/` separator between address and length.
    #[error("bad prefix format (expected address/length): {0:?}")]
    MissingSlash(String),

    /// The address part is not a valid IPv6 address.
    #[error("bad IPv6 address {text:?}: {source}")]
    BadAddress {
        text: String,
        source: std::net::AddrParseError,
    },

    /// The length part is not an integer in [0, 128].
    #[error("bad prefix length {0:?}")]
    BadLength(String),
}

/// Parse `"<ipv6>/<length>"` into an [`AddressPrefix`].
pub fn parse_prefix(text: &str) -> Result<AddressPrefix, PrefixParseError> {
    let (addr_text, len_text) = text
        .split_once('/')
        .ok_or_else(|| PrefixParseError::MissingSlash(text.to_string()))?;

    let address: Ipv6Addr = addr_text
        .parse()
        .map_err(|source| PrefixParseError::BadAddress {
            text: addr_text.to_string(),
            source,
        })?;

    let length: u8 = len_text
        .parse()
        .ok()
        .filter(|len| *len <= AddressPrefix::MAX_LENGTH)
        .ok_or_else(|| PrefixParseError::BadLength(len_text.to_string()))?;

    Ok(AddressPrefix::new(u128::from(address), length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        let p = parse_prefix("2001:db8::/32").unwrap();
        assert_eq!(p.length(), 32);
        assert_eq!(p.address() >> 96, 0x2001_0db8);
    }

    #[test]
    fn test_parse_full_and_zero_lengths() {
        assert_eq!(parse_prefix("::/0").unwrap().length(), 0);
        assert_eq!(parse_prefix("::1/128").unwrap().length(), 128);
    }

    #[test]
    fn test_missing_slash() {
        assert!(matches!(
            parse_prefix("2001:db8::"),
            Err(PrefixParseError::MissingSlash(_))
        ));
    }

    #[test]
    fn test_bad_address() {
        assert!(matches!(
            parse_prefix("2001:zz8::/32"),
            Err(PrefixParseError::BadAddress { .. })
        ));
        // IPv4 is not routed here.
        assert!(matches!(
            parse_prefix("10.0.0.0/8"),
            Err(PrefixParseError::BadAddress { .. })
        ));
    }

    #[test]
    fn test_bad_length() {
        assert!(matches!(
            parse_prefix("::/129"),
            Err(PrefixParseError::BadLength(_))
        ));
        assert!(matches!(
            parse_prefix("::/abc"),
            Err(PrefixParseError::BadLength(_))
        ));
        assert!(matches!(
            parse_prefix("::/-1"),
            Err(PrefixParseError::BadLength(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["2001:db8::/32", "::/0", "::1/128", "fe80::1/64"] {
            assert_eq!(parse_prefix(text).unwrap().to_string(), text);
        }
    }
}
