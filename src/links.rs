use std::fmt::Write;

/// Fixed chat link with the site's pre-filled greeting; not derived
/// from any directory record.
pub static WHATSAPP_URI: &str =
    "https://wa.me/5564999999999?text=Olá!%20Gostaria%20de%20mais%20informações%20sobre%20as%20aulas.";

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            // Writing into a String cannot fail
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

/// Embedded-map URL for the selected unit's card.
pub fn embed_map_url(map_query: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=15&ie=UTF8&iwloc=&output=embed",
        encode_component(map_query)
    )
}

/// "Get directions" deep link for the selected unit.
pub fn directions_url(map_query: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode_component(map_query)
    )
}

/// Dialable link straight from the record's phone field.
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{}", phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_reserved_bytes_are_percent_encoded() {
        assert_eq!(encode_component("Itumbiara Goias"), "Itumbiara%20Goias");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn multibyte_input_encodes_per_byte() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn directions_url_targets_the_search_api() {
        assert_eq!(
            directions_url("Itumbiara Goias"),
            "https://www.google.com/maps/search/?api=1&query=Itumbiara%20Goias"
        );
    }

    #[test]
    fn embed_url_requests_embed_output() {
        let url = embed_map_url("Bom Jesus Goias");
        assert!(url.starts_with("https://maps.google.com/maps?q=Bom%20Jesus%20Goias"));
        assert!(url.ends_with("&output=embed"));
    }

    #[test]
    fn tel_uri_keeps_the_display_formatting() {
        assert_eq!(tel_uri("(64) 99999-9999"), "tel:(64) 99999-9999");
    }
}
