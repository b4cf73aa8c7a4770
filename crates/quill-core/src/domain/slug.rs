//! URL-safe identifiers derived from post titles.

/// Derive a URL-safe slug from a title.
///
/// Lowercases, drops apostrophes and combining marks, folds common Latin
/// diacritics and transliterates Cyrillic to ASCII, then collapses every
/// other run of characters outside `[a-z0-9]` into a single hyphen. Leading
/// and trailing hyphens are trimmed. The result is always ASCII.
///
/// Uniqueness is not handled here; callers check the collection.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if is_apostrophe(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if is_combining_mark(lower) {
                continue;
            }
            if let Some(folded) = fold_diacritic(lower).or_else(|| transliterate(lower)) {
                for c in folded.chars() {
                    push_char(&mut slug, c, &mut pending_hyphen);
                }
            } else if lower.is_ascii_alphanumeric() {
                push_char(&mut slug, lower, &mut pending_hyphen);
            } else {
                pending_hyphen = true;
            }
        }
    }

    slug
}

fn push_char(slug: &mut String, c: char, pending_hyphen: &mut bool) {
    if *pending_hyphen && !slug.is_empty() {
        slug.push('-');
    }
    *pending_hyphen = false;
    slug.push(c);
}

fn is_apostrophe(ch: char) -> bool {
    matches!(
        ch,
        '\'' | '`' | '\u{2018}' | '\u{2019}' | '\u{02BB}' | '\u{02BC}'
    )
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ғ' => "g",
        'д' => "d",
        'е' | 'э' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'й' | 'ы' => "y",
        'к' => "k",
        'қ' => "q",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' | 'ў' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ҳ' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ģ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ķ' => "k",
        'ł' | 'ľ' | 'ļ' | 'ĺ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        'þ' => "th",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_english_title() {
        assert_eq!(
            slugify("Why Businesses Need Juniors: How to Prove You're the One?"),
            "why-businesses-need-juniors-how-to-prove-youre-the-one"
        );
    }

    #[test]
    fn test_slugify_uzbek_title() {
        assert_eq!(
            slugify("Nega biznesga juniorlar kerak: nega aynan siz ekaningizni qanday isbotlash mumkin?"),
            "nega-biznesga-juniorlar-kerak-nega-aynan-siz-ekaningizni-qanday-isbotlash-mumkin"
        );
        assert_eq!(slugify("Oʻzbekiston gʻalabasi"), "ozbekiston-galabasi");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Hello,   World!! -- again  "), "hello-world-again");
        assert_eq!(slugify("snake_case and/or slashes"), "snake-case-and-or-slashes");
    }

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Crème Brûlée à la Straße"), "creme-brulee-a-la-strasse");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for title in [
            "Why Businesses Need Juniors: How to Prove You're the One?",
            "Crème Brûlée",
            "Привет, мир",
            "already-a-slug-42",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_slugify_output_is_ascii() {
        assert_eq!(slugify("Привет, мир"), "privet-mir");
        assert_eq!(slugify("Ўзбекистон ғалабаси"), "ozbekiston-galabasi");
        assert_eq!(slugify("İstanbul"), "istanbul");
        assert_eq!(slugify("日本語 guide"), "guide");
        assert!(slugify("Объём ёлки: 100%").is_ascii());
    }

    #[test]
    fn test_slugify_punctuation_only() {
        assert_eq!(slugify("?!..."), "");
    }
}
