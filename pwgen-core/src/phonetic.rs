//! NATO-style spelling of passwords for reading them aloud.

/// Returns the spoken word for `c`, if it has one.
///
/// Uppercase letters map to a titlecased word, lowercase letters to a
/// lowercase one. Digits and symbols map to uppercase names.
pub fn phonetic_word(c: char) -> Option<&'static str> {
    let word = match c {
        'a' => "alfa",
        'A' => "Alpha",
        'b' => "bravo",
        'B' => "Bravo",
        'c' => "charlie",
        'C' => "Charlie",
        'd' => "delta",
        'D' => "Delta",
        'e' => "echo",
        'E' => "Echo",
        'f' => "foxtrot",
        'F' => "Foxtrot",
        'g' => "golf",
        'G' => "Golf",
        'h' => "hotel",
        'H' => "Hotel",
        'i' => "india",
        'I' => "India",
        'j' => "juliett",
        'J' => "Juliett",
        'k' => "kilo",
        'K' => "Kilo",
        'l' => "lima",
        'L' => "Lima",
        'm' => "mike",
        'M' => "Mike",
        'n' => "november",
        'N' => "November",
        'o' => "oscar",
        'O' => "Oscar",
        'p' => "papa",
        'P' => "Papa",
        'q' => "quebec",
        'Q' => "Quebec",
        'r' => "romeo",
        'R' => "Romeo",
        's' => "sierra",
        'S' => "Sierra",
        't' => "tango",
        'T' => "Tango",
        'u' => "uniform",
        'U' => "Uniform",
        'v' => "victor",
        'V' => "Victor",
        'w' => "whiskey",
        'W' => "Whiskey",
        'x' => "x-ray",
        'X' => "X-ray",
        'y' => "yankee",
        'Y' => "Yankee",
        'z' => "zulu",
        'Z' => "Zulu",
        '0' => "ZERO",
        '1' => "ONE",
        '2' => "TWO",
        '3' => "THREE",
        '4' => "FOUR",
        '5' => "FIVE",
        '6' => "SIX",
        '7' => "SEVEN",
        '8' => "EIGHT",
        '9' => "NINE",
        '!' => "EXCLAMATION",
        '@' => "AT",
        '#' => "HASH",
        '$' => "DOLLAR",
        '%' => "PERCENT",
        '^' => "CARET",
        '&' => "AMPERSAND",
        '*' => "ASTERISK",
        '(' => "LEFT_PARENTHESIS",
        ')' => "RIGHT_PARENTHESIS",
        '-' => "HYPHEN",
        '_' => "UNDERSCORE",
        '=' => "EQUAL",
        '+' => "PLUS",
        '[' => "LEFT_BRACKET",
        ']' => "RIGHT_BRACKET",
        '{' => "LEFT_CURLY_BRACE",
        '}' => "RIGHT_CURLY_BRACE",
        '|' => "PIPE",
        ';' => "SEMICOLON",
        ':' => "COLON",
        ',' => "COMMA",
        '.' => "PERIOD",
        '<' => "LESS_THAN",
        '>' => "GREATER_THAN",
        '/' => "SLASH",
        '?' => "QUESTION_MARK",
        _ => return None,
    };
    Some(word)
}

/// Spells `password` word by word, joined with hyphens.
///
/// Characters without a word are passed through as they are.
pub fn spell(password: &str) -> String {
    let mut out = String::with_capacity(password.len() * 6);
    for (i, c) in password.chars().enumerate() {
        if i > 0 {
            out.push('-');
        }
        match phonetic_word(c) {
            Some(word) => out.push_str(word),
            None => out.push(c),
        }
    }
    out
}
