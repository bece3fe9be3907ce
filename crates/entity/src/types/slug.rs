use unicode_normalization::UnicodeNormalization as _;

/// Converts the provided text to a URL-safe slug.
///
/// The text is decomposed (NFKD) so accented letters keep their base letter, then lowercased.
/// Every character other than ASCII letters, digits, underscores, hyphens and whitespace is
/// dropped, and runs of hyphens and whitespace collapse into a single hyphen. Leading and
/// trailing hyphens and underscores are removed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_sep = false;

    for c in value.nfkd().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_sep = true;
        }
    }

    slug.trim_matches(['-', '_']).to_owned()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn words_are_joined_with_hyphens() {
        assert_eq!(slugify("International Trips"), "international-trips");
        assert_eq!(slugify("  Nacional  "), "nacional");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(slugify("Rock & Roll!"), "rock-roll");
        assert_eq!(slugify("Safety, Insurance"), "safety-insurance");
    }

    #[test]
    fn separators_collapse() {
        assert_eq!(slugify("a -- b\t\tc"), "a-b-c");
        assert_eq!(slugify("--edge--"), "edge");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn accents_keep_base_letter() {
        assert_eq!(slugify("São Paulo Café"), "sao-paulo-cafe");
        assert_eq!(slugify("Excursión Nacional"), "excursion-nacional");
        assert_eq!(slugify("Ação Educativa"), "acao-educativa");
        assert_eq!(slugify("Ｆｕｌｌｗｉｄｔｈ"), "fullwidth");
    }

    #[test]
    fn non_latin_is_dropped() {
        assert_eq!(slugify("Tokyo 東京"), "tokyo");
        assert_eq!(slugify("_private_"), "private");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
