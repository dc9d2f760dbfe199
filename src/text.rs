use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_GUESS_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

/// Converts HTML character entities (`&quot;`, `&#039;`, `&eacute;`...) to literal text.
/// Text without entities comes back unchanged.
pub fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Reduces user input to lowercase ascii alphanumerics so that
/// `Pokémon!` and `pokemon` compare equal.
pub fn sanitize(text: &str) -> String {
    let text = unidecode(text);
    FORBIDDEN_GUESS_CHARACTERS_REGEX
        .replace_all(&text.to_lowercase(), "")
        .into()
}
