use alloc::borrow::Cow;
use alloc::string::String;

use crate::naming::upper_first;

// -----------------------------------------------------------------------------
// Inflector

/// Turns a plural word into its singular form.
pub trait Inflector: Send + Sync {
    /// Returns the singular of `word`, or `word` itself when it has none.
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

// -----------------------------------------------------------------------------
// EnglishInflector

/// Rule-based English singularization.
///
/// Only the last camel-case segment is inflected, so compound property
/// names keep their prefix: `blogPosts` becomes `blogPost` and
/// `teamPeople` becomes `teamPerson`.
///
/// # Examples
///
/// ```
/// use vc_access::naming::{EnglishInflector, Inflector};
///
/// let inflector = EnglishInflector;
///
/// assert_eq!(inflector.singularize("items"), "item");
/// assert_eq!(inflector.singularize("categories"), "category");
/// assert_eq!(inflector.singularize("addresses"), "address");
/// assert_eq!(inflector.singularize("children"), "child");
/// assert_eq!(inflector.singularize("blogPosts"), "blogPost");
/// assert_eq!(inflector.singularize("news"), "news");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

/// Words whose plural equals their singular.
const UNINFLECTED: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "status",
];

/// `(plural, singular)`, lower case.
const IRREGULAR: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("analyses", "analysis"),
    ("buses", "bus"),
    ("causes", "cause"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("houses", "house"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("quizzes", "quiz"),
    ("shoes", "shoe"),
    ("statuses", "status"),
    ("teeth", "tooth"),
    ("toes", "toe"),
    ("uses", "use"),
    ("vertices", "vertex"),
    ("viruses", "virus"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// `(suffix, replacement)`, first match wins; `None` keeps the word.
const RULES: &[(&str, Option<&str>)] = &[
    ("ies", Some("y")),
    ("sses", Some("ss")),
    ("shes", Some("sh")),
    ("ches", Some("ch")),
    ("xes", Some("x")),
    ("zzes", Some("zz")),
    ("oes", Some("o")),
    ("ss", None),
    ("us", None),
    ("is", None),
    ("s", Some("")),
];

/// Splits `word` before its last upper-case letter.
fn split_last_segment(word: &str) -> (&str, &str) {
    let index = word
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(index, _)| index)
        .last()
        .unwrap_or(0);
    word.split_at(index)
}

impl Inflector for EnglishInflector {
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let (head, tail) = split_last_segment(word);
        let lower = tail.to_ascii_lowercase();

        if UNINFLECTED.contains(&lower.as_str()) {
            return Cow::Borrowed(word);
        }

        if let Some(&(_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
            let capitalized = tail.chars().next().is_some_and(char::is_uppercase);
            let mut out = String::from(head);
            if capitalized {
                out.push_str(&upper_first(singular));
            } else {
                out.push_str(singular);
            }
            return Cow::Owned(out);
        }

        for &(suffix, replacement) in RULES {
            if lower.len() > suffix.len() && lower.ends_with(suffix) {
                let Some(replacement) = replacement else {
                    return Cow::Borrowed(word);
                };
                // ASCII lowering keeps byte offsets, and the matched suffix is ASCII.
                let keep = word.len() - suffix.len();
                let mut out = String::with_capacity(keep + replacement.len());
                out.push_str(&word[..keep]);
                out.push_str(replacement);
                return Cow::Owned(out);
            }
        }

        Cow::Borrowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::{EnglishInflector, Inflector};

    #[test]
    fn suffix_rules() {
        let i = EnglishInflector;
        assert_eq!(i.singularize("boxes"), "box");
        assert_eq!(i.singularize("branches"), "branch");
        assert_eq!(i.singularize("wishes"), "wish");
        assert_eq!(i.singularize("heroes"), "hero");
        assert_eq!(i.singularize("buzzes"), "buzz");
        assert_eq!(i.singularize("tags"), "tag");
    }

    #[test]
    fn words_left_alone() {
        let i = EnglishInflector;
        assert_eq!(i.singularize("address"), "address");
        assert_eq!(i.singularize("status"), "status");
        assert_eq!(i.singularize("analysis"), "analysis");
        assert_eq!(i.singularize("s"), "s");
        assert_eq!(i.singularize(""), "");
        assert_eq!(i.singularize("species"), "species");
    }

    #[test]
    fn camel_case_segments() {
        let i = EnglishInflector;
        assert_eq!(i.singularize("relatedCategories"), "relatedCategory");
        assert_eq!(i.singularize("teamPeople"), "teamPerson");
        assert_eq!(i.singularize("People"), "Person");
        assert_eq!(i.singularize("shoppingBoxes"), "shoppingBox");
        assert_eq!(i.singularize("latestNews"), "latestNews");
    }
}
