//! Slug derivation for station names.

/// Derive the URL-safe slug of a display name.
///
/// `/` and `.` become separators, the text is transliterated to ASCII and
/// lowercased, and every run of non-alphanumeric characters collapses into a
/// single `-` with none at either end.
///
/// ```
/// use stations_validate::slug::normalize;
///
/// assert_eq!(
///     normalize("Figueras/Figueres Vilafant Esp."),
///     "figueras-figueres-vilafant-esp"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let separated: String = text
        .chars()
        .map(|c| if c == '/' || c == '.' { '-' } else { c })
        .collect();
    let ascii = deunicode::deunicode(&separated);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_collapse() {
        assert_eq!(normalize("Paris  Gare--de Lyon"), "paris-gare-de-lyon");
        assert_eq!(normalize(" -Lille. "), "lille");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize("Zürich HB"), "zurich-hb");
        assert_eq!(normalize("Nîmes Pont-du-Gard"), "nimes-pont-du-gard");
        assert_eq!(normalize("L'Isle-sur-la-Sorgue"), "l-isle-sur-la-sorgue");
    }

    #[test]
    fn non_latin_is_transliterated() {
        assert_eq!(normalize("Москва"), "moskva");
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("./ - /."), "");
    }
}
