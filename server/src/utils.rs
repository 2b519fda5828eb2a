use regex::Regex;

use crate::routes::AddressPayload;

/// Strip characters that have no business in an address field, then
/// collapse runs of whitespace. Case and accents stay, the geocoder
/// matches better with them.
pub fn sanitize(input: &str) -> String {
    let clean = Regex::new(r#"[<>{}\[\]\\|^~`"*_]"#).unwrap();
    let s = clean.replace_all(input, "").into_owned();

    let collapse = Regex::new(r"\s+").unwrap();
    collapse.replace_all(s.trim(), " ").into_owned()
}

/// Single line fed to the geocoder and printed in the WhatsApp message:
/// "street, number - neighborhood, postal code". Empty optional fields
/// are skipped.
pub fn format_address(address: &AddressPayload) -> String {
    let mut line = format!(
        "{}, {}",
        sanitize(&address.street),
        sanitize(&address.number)
    );

    let neighborhood = sanitize(&address.neighborhood);
    if !neighborhood.is_empty() {
        line.push_str(" - ");
        line.push_str(&neighborhood);
    }

    let postal_code = sanitize(&address.postal_code);
    if !postal_code.is_empty() {
        line.push_str(", ");
        line.push_str(&postal_code);
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize("Rua das Flores"), "Rua das Flores");
        assert_eq!(sanitize("  Rua   das   Flores  "), "Rua das Flores");
        assert_eq!(sanitize("Rua <b>das</b> Flores"), "Rua bdas/b Flores");
    }

    #[test]
    fn test_sanitize_keeps_accents_and_case() {
        assert_eq!(sanitize("Av. São João, 439"), "Av. São João, 439");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("~^`"), "");
    }

    #[test]
    fn test_format_address_full() {
        let address = AddressPayload {
            street: "Rua das Laranjeiras".to_string(),
            number: "1200".to_string(),
            neighborhood: "Laranjeiras".to_string(),
            postal_code: "22240-006".to_string(),
        };

        assert_eq!(
            format_address(&address),
            "Rua das Laranjeiras, 1200 - Laranjeiras, 22240-006"
        );
    }

    #[test]
    fn test_format_address_minimal() {
        let address = AddressPayload {
            street: "Rua Augusta".to_string(),
            number: "300".to_string(),
            neighborhood: String::new(),
            postal_code: String::new(),
        };

        assert_eq!(format_address(&address), "Rua Augusta, 300");
    }
}
