use std::{fmt, str::FromStr};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';
const APOSTROPHE: char = '\u{2019}';

/// Number symbols per language or language-region tag.
const SEPARATORS: &[(&str, char, char)] = &[
    ("en", '.', ','),
    ("en-ZA", ',', NBSP),
    ("ja", '.', ','),
    ("ko", '.', ','),
    ("zh", '.', ','),
    ("he", '.', ','),
    ("hi", '.', ','),
    ("th", '.', ','),
    ("de", ',', '.'),
    ("de-AT", ',', NBSP),
    ("de-CH", '.', APOSTROPHE),
    ("da", ',', '.'),
    ("el", ',', '.'),
    ("es", ',', '.'),
    ("es-MX", '.', ','),
    ("es-US", '.', ','),
    ("id", ',', '.'),
    ("it", ',', '.'),
    ("it-CH", '.', APOSTROPHE),
    ("nl", ',', '.'),
    ("pt", ',', '.'),
    ("pt-PT", ',', NBSP),
    ("ro", ',', '.'),
    ("tr", ',', '.'),
    ("fr", ',', NARROW_NBSP),
    ("fr-CH", ',', NARROW_NBSP),
    ("cs", ',', NBSP),
    ("fi", ',', NBSP),
    ("nb", ',', NBSP),
    ("no", ',', NBSP),
    ("pl", ',', NBSP),
    ("ru", ',', NBSP),
    ("sk", ',', NBSP),
    ("sv", ',', NBSP),
    ("uk", ',', NBSP),
];

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lang>[A-Za-z]{2,3})(?:[-_](?P<rest>[A-Za-z0-9]{1,8}(?:[-_][A-Za-z0-9]{1,8})*))?$")
        .expect("locale tag regex is valid")
});

/// The number symbols of a locale.
///
/// Tags are read in BCP-47 (`de-CH`) or POSIX (`de_CH.UTF-8@euro`) form.
/// Lookup tries language and region first, then the language alone, and
/// falls back to the root symbols (`.` and `,`) for languages it does not
/// know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    decimal_separator: char,
    grouping_separator: char,
    minus_sign: char,
}

impl Locale {
    pub const ROOT_TAG: &'static str = "root";

    pub fn root() -> Self {
        Self::with_symbols(Self::ROOT_TAG, '.', ',')
    }

    /// A locale with explicit separators, bypassing the built-in table.
    pub fn with_symbols(tag: impl Into<String>, decimal: char, grouping: char) -> Self {
        Self {
            tag: tag.into(),
            decimal_separator: decimal,
            grouping_separator: grouping,
            minus_sign: '-',
        }
    }

    pub fn new(tag: &str) -> Result<Self> {
        let bare = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if bare.eq_ignore_ascii_case("c")
            || bare.eq_ignore_ascii_case("posix")
            || bare.eq_ignore_ascii_case(Self::ROOT_TAG)
        {
            return Ok(Self::root());
        }

        let caps = TAG
            .captures(bare)
            .ok_or_else(|| Error::invalid_argument(format!("malformed locale tag '{tag}'")))?;

        let language = caps["lang"].to_ascii_lowercase();
        let region = caps.name("rest").and_then(|rest| {
            rest.as_str()
                .split(['-', '_'])
                .find(|s| {
                    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
                })
                .map(|s| s.to_ascii_uppercase())
        });
        let normalized = match &region {
            Some(region) => format!("{language}-{region}"),
            None => language.clone(),
        };

        let lookup = |key: &str| SEPARATORS.iter().find(|(tag, _, _)| *tag == key);
        match lookup(&normalized).or_else(|| lookup(&language)) {
            Some(&(_, decimal, grouping)) => Ok(Self::with_symbols(normalized, decimal, grouping)),
            None => {
                debug!("no number symbols for locale '{normalized}'; using root symbols");
                Ok(Self::with_symbols(normalized, '.', ','))
            }
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn minus_sign(&self) -> char {
        self.minus_sign
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
