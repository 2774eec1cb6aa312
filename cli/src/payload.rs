use crate::config::Encoding;
use crate::error::CliError;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Parses one payload as captured from the network server or a serial log.
///
/// Hex may carry a `0x` prefix and `:`/whitespace separators between bytes.
pub fn parse_payload(payload: &str, encoding: Encoding) -> Result<Vec<u8>, CliError> {
    let trimmed = payload.trim();

    match encoding {
        Encoding::Hex => {
            let digits = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
                .unwrap_or(trimmed);
            let digits: String = digits
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ':')
                .collect();

            hex::decode(&digits).map_err(|source| CliError::InvalidHex {
                payload: payload.to_string(),
                source,
            })
        }
        Encoding::Base64 => STANDARD
            .decode(trimmed)
            .map_err(|source| CliError::InvalidBase64 {
                payload: payload.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE_A: [u8; 11] = [
        0x00, 0x05, 0xC8, 0x80, 0x07, 0x00, 0x39, 0x87, 0x38, 0x0C, 0x1C,
    ];

    #[test]
    fn test_parse_hex_variants() {
        for payload in [
            "0005c88007003987380c1c",
            "0005C88007003987380C1C",
            "0x0005c88007003987380c1c",
            "00 05 C8 80 07 00 39 87 38 0C 1C",
            "00:05:c8:80:07:00:39:87:38:0c:1c\n",
        ] {
            assert_eq!(parse_payload(payload, Encoding::Hex).unwrap(), CASE_A);
        }
    }

    #[test]
    fn test_parse_base64() {
        assert_eq!(
            parse_payload("AAXIgAcAOYc4DBw=", Encoding::Base64).unwrap(),
            CASE_A
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        let err = parse_payload("zz", Encoding::Hex).unwrap_err();
        assert!(matches!(err, CliError::InvalidHex { .. }));
        assert!(err.to_string().contains("\"zz\""));
    }

    #[test]
    fn test_parse_invalid_base64() {
        assert!(matches!(
            parse_payload("!!!", Encoding::Base64),
            Err(CliError::InvalidBase64 { .. })
        ));
    }
}
