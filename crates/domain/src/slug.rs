/// Single-consonant Thai to Latin transliteration table.
///
/// Vowels and tone marks have no entry and are dropped by [`slugify`].
const THAI_CONSONANTS: [(char, &str); 44] = [
    ('ก', "k"),
    ('ข', "kh"),
    ('ฃ', "kh"),
    ('ค', "kh"),
    ('ฅ', "kh"),
    ('ฆ', "kh"),
    ('ง', "ng"),
    ('จ', "ch"),
    ('ฉ', "ch"),
    ('ช', "ch"),
    ('ซ', "s"),
    ('ฌ', "ch"),
    ('ญ', "y"),
    ('ฎ', "d"),
    ('ฏ', "t"),
    ('ฐ', "th"),
    ('ฑ', "th"),
    ('ฒ', "th"),
    ('ณ', "n"),
    ('ด', "d"),
    ('ต', "t"),
    ('ถ', "th"),
    ('ท', "th"),
    ('ธ', "th"),
    ('น', "n"),
    ('บ', "b"),
    ('ป', "p"),
    ('ผ', "ph"),
    ('ฝ', "f"),
    ('พ', "ph"),
    ('ฟ', "f"),
    ('ภ', "ph"),
    ('ม', "m"),
    ('ย', "y"),
    ('ร', "r"),
    ('ล', "l"),
    ('ว', "w"),
    ('ศ', "s"),
    ('ษ', "s"),
    ('ส', "s"),
    ('ห', "h"),
    ('ฬ', "l"),
    ('อ', "o"),
    ('ฮ', "h"),
];

fn transliterate(character: char) -> Option<&'static str> {
    THAI_CONSONANTS
        .iter()
        .find(|(thai, _)| *thai == character)
        .map(|(_, latin)| *latin)
}

/// Builds a URL slug.
///
/// Thai consonants are transliterated, ASCII letters lowercased, runs of
/// whitespace, `_` and `-` collapse to a single hyphen, and every other
/// character is removed. The result only contains `[a-z0-9-]` and never
/// starts or ends with a hyphen.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for character in value.chars() {
        if character.is_whitespace() || character == '-' || character == '_' {
            pending_separator = true;
            continue;
        }

        let latin = match transliterate(character) {
            Some(latin) => latin.to_owned(),
            None if character.is_ascii_alphanumeric() => {
                character.to_ascii_lowercase().to_string()
            }
            None => continue,
        };

        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.push_str(&latin);
    }

    slug
}
