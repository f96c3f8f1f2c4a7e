//! Character-level Unicode classification and normalization for kana text.

/// Yen sign, the one non-ASCII character a Japanese keyboard types directly.
pub const YEN: &str = "¥";

const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Hiragana as typed in practice sentences: ぁ (U+3041) through ゔ (U+3094).
pub fn is_hiragana(c: char) -> bool {
    ('ぁ'..='ゔ').contains(&c)
}

/// Katakana letters ァ (U+30A1) through ヶ (U+30F6). The prolonged sound
/// mark ー is punctuation here and is left out.
pub fn is_katakana(c: char) -> bool {
    ('ァ'..='ヶ').contains(&c)
}

/// Convert katakana letters to hiragana.
/// Non-katakana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_katakana(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Map full-width ASCII (Ｆ, ！, ０ …), the ideographic space and the
/// full-width yen sign to their half-width forms.
pub fn to_halfwidth(s: &str) -> String {
    s.chars().map(halfwidth_char).collect()
}

fn halfwidth_char(c: char) -> char {
    let code = c as u32;
    match c {
        '\u{3000}' => ' ',
        '￥' => '¥',
        _ if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) => {
            char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

/// Japanese punctuation and the ASCII key that produces it.
static PUNCTUATION: &[(char, char)] = &[
    ('、', ','),
    ('。', '.'),
    ('・', '/'),
    ('「', '['),
    ('」', ']'),
    ('ー', '-'),
];

pub fn normalize_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| {
            PUNCTUATION
                .iter()
                .find(|&&(jp, _)| jp == c)
                .map_or(c, |&(_, ascii)| ascii)
        })
        .collect()
}

/// Full normalization applied to a typing unit before lookup.
pub fn normalize_unit(s: &str) -> String {
    normalize_punctuation(&to_halfwidth(s))
}

/// Printable ASCII (space included) or exactly the yen sign.
pub fn is_typeable(s: &str) -> bool {
    s == YEN || (!s.is_empty() && s.bytes().all(|b| (0x20..=0x7E).contains(&b)))
}

/// Remove a single space (half- or full-width) sitting between two hiragana.
///
/// Kanji-to-kana services sometimes insert word breaks ("こ んに ち は");
/// a space between two Latin words is left alone.
pub fn strip_spaces_between_kana(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        let is_space = c == ' ' || c == '\u{3000}';
        if is_space
            && i > 0
            && i + 1 < chars.len()
            && is_hiragana(chars[i - 1])
            && is_hiragana(chars[i + 1])
        {
            continue;
        }
        out.push(c);
    }
    out
}
