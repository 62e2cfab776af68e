#![forbid(unsafe_code)]

//! NATO phonetic lookup table and character classification
//!
//! The table is split into three partitions (letters, symbols, digits) that
//! drive output styling. A character belongs to at most one partition.

/// Partition a recognized character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Letter,
    Digit,
    Symbol,
}

/// A single row of the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticEntry {
    /// Uppercase form of the character
    pub character: char,
    /// Phonetic word spoken for the character
    pub word: &'static str,
    pub category: Category,
}

/// Letters A-Z, indexed by `c - 'A'`
static LETTERS: [&str; 26] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// Digits 0-9, indexed by `c - '0'`
static DIGITS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Printable ASCII punctuation
static SYMBOLS: [(char, &str); 32] = [
    ('!', "Exclamation Mark"),
    ('"', "Double Quote"),
    ('#', "Hash"),
    ('$', "Dollar"),
    ('%', "Percent"),
    ('&', "Ampersand"),
    ('\'', "Apostrophe"),
    ('(', "Open Parenthesis"),
    (')', "Close Parenthesis"),
    ('*', "Asterisk"),
    ('+', "Plus"),
    (',', "Comma"),
    ('-', "Dash"),
    ('.', "Dot"),
    ('/', "Slash"),
    (':', "Colon"),
    (';', "Semicolon"),
    ('<', "Less Than"),
    ('=', "Equals"),
    ('>', "Greater Than"),
    ('?', "Question Mark"),
    ('@', "At"),
    ('[', "Open Bracket"),
    ('\\', "Backslash"),
    (']', "Close Bracket"),
    ('^', "Caret"),
    ('_', "Underscore"),
    ('`', "Backtick"),
    ('{', "Open Brace"),
    ('|', "Pipe"),
    ('}', "Close Brace"),
    ('~', "Tilde"),
];

/// Look up the phonetic entry for a character
///
/// Matching is case-insensitive. The partitions are searched in the order
/// letters, symbols, digits. Returns `None` for anything outside the table,
/// including whitespace and non-ASCII characters.
pub fn classify(c: char) -> Option<PhoneticEntry> {
    let upper = c.to_ascii_uppercase();

    lookup_letter(upper)
        .or_else(|| lookup_symbol(upper))
        .or_else(|| lookup_digit(upper))
}

fn lookup_letter(c: char) -> Option<PhoneticEntry> {
    if !c.is_ascii_uppercase() {
        return None;
    }
    let word = LETTERS[(c as u8 - b'A') as usize];
    Some(PhoneticEntry {
        character: c,
        word,
        category: Category::Letter,
    })
}

fn lookup_symbol(c: char) -> Option<PhoneticEntry> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|&(character, word)| PhoneticEntry {
            character,
            word,
            category: Category::Symbol,
        })
}

fn lookup_digit(c: char) -> Option<PhoneticEntry> {
    if !c.is_ascii_digit() {
        return None;
    }
    let word = DIGITS[(c as u8 - b'0') as usize];
    Some(PhoneticEntry {
        character: c,
        word,
        category: Category::Digit,
    })
}

/// Iterate over every entry of the table in lookup order
pub fn entries() -> impl Iterator<Item = PhoneticEntry> {
    let letters = ('A'..='Z').filter_map(lookup_letter);
    let symbols = SYMBOLS.iter().map(|&(character, word)| PhoneticEntry {
        character,
        word,
        category: Category::Symbol,
    });
    let digits = ('0'..='9').filter_map(lookup_digit);

    letters.chain(symbols).chain(digits)
}
