//! Character normalization shared by the compiler and the match engine
//!
//! Every input character is reduced to one of three [`Unit`]s:
//! a canonical letter, a word separator, or nothing at all. Only ASCII
//! characters can separate words; non-ASCII characters either fold to a
//! letter or are dropped without ending the current word.

/// Classification of one input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A canonical, lowercase letter or digit
    Letter(char),
    /// Ends the current word
    Separator,
    /// Ignored entirely, state is left untouched
    Skip,
}

/// Classify a single ASCII byte
#[inline]
pub fn classify_ascii(byte: u8) -> Unit {
    match byte {
        b'a'..=b'z' | b'0'..=b'9' => Unit::Letter(byte as char),
        b'A'..=b'Z' => Unit::Letter(byte.to_ascii_lowercase() as char),
        0 => Unit::Skip,
        _ => Unit::Separator,
    }
}

/// Classify any character, ASCII or not
#[inline]
pub fn classify(c: char) -> Unit {
    if c.is_ascii() {
        return classify_ascii(c as u8);
    }
    match fold(c) {
        Some(letter) => Unit::Letter(letter),
        None => Unit::Skip,
    }
}

/// Fold a non-ASCII character to its canonical letter.
///
/// Returns `None` for marks, exotic spaces, typographic quotes and any other
/// non-alphanumeric character. Alphanumerics without a Latin base letter are
/// kept (lowercased when that maps to a single character).
pub fn fold(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'À' | 'á' | 'Á' | 'â' | 'Â' | 'ã' | 'Ã' | 'ä' | 'Ä' | 'å' | 'Å' | 'æ' | 'Æ' | 'ą'
        | 'Ą' => 'a',
        'ç' | 'Ç' | 'ć' | 'Ć' | 'č' | 'Č' | '©' => 'c',
        'ď' | 'Ď' | 'đ' | 'Đ' => 'd',
        'è' | 'È' | 'é' | 'É' | 'ê' | 'Ê' | 'ë' | 'Ë' | 'ę' | 'Ę' | 'ě' | 'Ě' => 'e',
        'ğ' | 'Ğ' => 'g',
        'ì' | 'Ì' | 'í' | 'Í' | 'î' | 'Î' | 'ï' | 'Ï' | 'ı' | 'İ' => 'i',
        'ł' | 'Ł' => 'l',
        'ñ' | 'Ñ' | 'ń' | 'Ń' | 'ň' | 'Ň' => 'n',
        'ò' | 'Ò' | 'ó' | 'Ó' | 'ô' | 'Ô' | 'õ' | 'Õ' | 'ö' | 'Ö' | 'ð' | 'Ð' | 'ø' | 'Ø' | 'œ'
        | 'Œ' => 'o',
        'ř' | 'Ř' | '®' => 'r',
        'ß' | 'ś' | 'Ś' | 'š' | 'Š' | 'ş' | 'Ş' => 's',
        'ť' | 'Ť' => 't',
        'ù' | 'Ù' | 'ú' | 'Ú' | 'û' | 'Û' | 'ü' | 'Ü' | 'ů' | 'Ů' => 'u',
        'ý' | 'Ý' | 'ÿ' | 'Ÿ' => 'y',
        'ź' | 'Ź' | 'ż' | 'Ż' | 'ž' | 'Ž' => 'z',

        // Combining diacritical marks
        '\u{0300}'..='\u{036F}' => return None,
        '¿' | '¡' => return None,
        // En space through zero width space
        '\u{2002}'..='\u{200B}' => return None,
        '\u{202F}' | '\u{205F}' | '\u{3000}' => return None,
        '“' | '”' | '’' | '‵' | '‹' | '›' | '»' | '«' => return None,
        char::REPLACEMENT_CHARACTER => return None,

        _ if c.is_alphanumeric() => return Some(lowercase(c)),
        _ => return None,
    };
    Some(folded)
}

fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
