use log::trace;

use crate::error::{Error, Result};

const DIGIT: char = '#';
const ZERO_DIGIT: char = '0';
const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';
const PATTERN_SEPARATOR: char = ';';
const QUOTE: char = '\'';

/// Characters with a meaning this pattern subset does not implement.
const UNSUPPORTED: [char; 3] = ['%', '\u{2030}', '\u{a4}'];

/// A parsed decimal-format pattern such as `"0.00"` or `"#,##0.0 'units'"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalPattern {
    pub(crate) positive_prefix: String,
    pub(crate) positive_suffix: String,
    pub(crate) negative_affixes: Option<(String, String)>,
    pub(crate) min_integer_digits: usize,
    pub(crate) grouping_size: usize,
    pub(crate) min_fraction_digits: usize,
    pub(crate) max_fraction_digits: usize,
    pub(crate) decimal_separator_always_shown: bool,
}

impl Default for DecimalPattern {
    /// The `"0.00"` pattern.
    fn default() -> Self {
        Self {
            positive_prefix: String::new(),
            positive_suffix: String::new(),
            negative_affixes: None,
            min_integer_digits: 1,
            grouping_size: 0,
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            decimal_separator_always_shown: false,
        }
    }
}

struct SubPattern {
    prefix: String,
    number: String,
    suffix: String,
}

impl DecimalPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::invalid_pattern(pattern, "empty pattern"));
        }

        let subpatterns = split_subpatterns(pattern)?;
        let (positive, negative) = match subpatterns.as_slice() {
            [positive] => (positive, None),
            [positive, negative] => (positive, Some(negative)),
            _ => {
                return Err(Error::invalid_pattern(
                    pattern,
                    "more than one negative subpattern",
                ))
            }
        };

        let mut parsed = Self::parse_number(pattern, &positive.number)?;
        parsed.positive_prefix = positive.prefix.clone();
        parsed.positive_suffix = positive.suffix.clone();
        parsed.negative_affixes = negative.map(|n| (n.prefix.clone(), n.suffix.clone()));

        trace!("parsed format pattern '{pattern}': {parsed:?}");
        Ok(parsed)
    }

    fn parse_number(pattern: &str, number: &str) -> Result<Self> {
        if !number.contains([DIGIT, ZERO_DIGIT]) {
            return Err(Error::invalid_pattern(pattern, "pattern has no digits"));
        }

        let mut parts = number.split(DECIMAL_SEPARATOR);
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next();
        if parts.next().is_some() {
            return Err(Error::invalid_pattern(
                pattern,
                "multiple decimal separators",
            ));
        }

        let mut min_integer_digits = 0;
        let mut digits_since_grouping = None;
        for c in integer.chars() {
            match c {
                DIGIT if min_integer_digits > 0 => {
                    return Err(Error::invalid_pattern(pattern, "unexpected '#' after '0'"));
                }
                DIGIT => {}
                ZERO_DIGIT => min_integer_digits += 1,
                GROUPING_SEPARATOR => {
                    digits_since_grouping = Some(0);
                    continue;
                }
                _ => unreachable!("number part only holds pattern digits"),
            }
            digits_since_grouping = digits_since_grouping.map(|n| n + 1);
        }

        let grouping_size = match digits_since_grouping {
            Some(0) => {
                return Err(Error::invalid_pattern(
                    pattern,
                    "grouping separator at end of integer part",
                ))
            }
            Some(n) => n,
            None => 0,
        };

        let mut min_fraction_digits = 0;
        let mut max_fraction_digits = 0;
        for c in fraction.unwrap_or_default().chars() {
            match c {
                ZERO_DIGIT if max_fraction_digits > min_fraction_digits => {
                    return Err(Error::invalid_pattern(pattern, "unexpected '0' after '#'"));
                }
                ZERO_DIGIT => {
                    min_fraction_digits += 1;
                    max_fraction_digits += 1;
                }
                DIGIT => max_fraction_digits += 1,
                GROUPING_SEPARATOR => {
                    return Err(Error::invalid_pattern(
                        pattern,
                        "grouping separator in fraction part",
                    ))
                }
                _ => unreachable!("number part only holds pattern digits"),
            }
        }

        Ok(Self {
            min_integer_digits,
            grouping_size,
            min_fraction_digits,
            max_fraction_digits,
            decimal_separator_always_shown: fraction.is_some() && max_fraction_digits == 0,
            ..Self::default()
        })
    }

    pub fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    pub fn grouping_size(&self) -> usize {
        self.grouping_size
    }

    pub fn min_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }
}

fn is_number_char(c: char) -> bool {
    matches!(
        c,
        DIGIT | ZERO_DIGIT | GROUPING_SEPARATOR | DECIMAL_SEPARATOR
    )
}

/// Splits on unquoted `;` and separates each subpattern into literal prefix,
/// number part and literal suffix.
fn split_subpatterns(pattern: &str) -> Result<Vec<SubPattern>> {
    #[derive(PartialEq)]
    enum Phase {
        Prefix,
        Number,
        Suffix,
    }

    let mut subpatterns = Vec::new();
    let mut current = SubPattern {
        prefix: String::new(),
        number: String::new(),
        suffix: String::new(),
    };
    let mut phase = Phase::Prefix;
    let mut quoted = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if chars.peek() == Some(&QUOTE) {
                chars.next();
                let literal = if phase == Phase::Prefix {
                    &mut current.prefix
                } else {
                    phase = Phase::Suffix;
                    &mut current.suffix
                };
                literal.push(QUOTE);
            } else {
                quoted = !quoted;
                if phase == Phase::Number {
                    phase = Phase::Suffix;
                }
            }
            continue;
        }

        if quoted {
            match phase {
                Phase::Prefix => current.prefix.push(c),
                Phase::Number | Phase::Suffix => {
                    phase = Phase::Suffix;
                    current.suffix.push(c);
                }
            }
            continue;
        }

        if c == PATTERN_SEPARATOR {
            if phase == Phase::Prefix {
                return Err(Error::invalid_pattern(pattern, "subpattern has no digits"));
            }
            subpatterns.push(current);
            current = SubPattern {
                prefix: String::new(),
                number: String::new(),
                suffix: String::new(),
            };
            phase = Phase::Prefix;
            continue;
        }

        if UNSUPPORTED.contains(&c) {
            return Err(Error::invalid_pattern(
                pattern,
                format!("unsupported special character '{c}'"),
            ));
        }

        match phase {
            Phase::Prefix if is_number_char(c) => {
                phase = Phase::Number;
                current.number.push(c);
            }
            Phase::Prefix => current.prefix.push(c),
            Phase::Number if is_number_char(c) => current.number.push(c),
            Phase::Number if c == 'E' => {
                return Err(Error::invalid_pattern(
                    pattern,
                    "exponent notation is not supported",
                ))
            }
            Phase::Number => {
                phase = Phase::Suffix;
                current.suffix.push(c);
            }
            Phase::Suffix if is_number_char(c) => {
                return Err(Error::invalid_pattern(
                    pattern,
                    format!("unquoted '{c}' in suffix"),
                ))
            }
            Phase::Suffix => current.suffix.push(c),
        }
    }

    if quoted {
        return Err(Error::invalid_pattern(pattern, "unterminated quote"));
    }
    if phase == Phase::Prefix {
        return Err(Error::invalid_pattern(pattern, "pattern has no digits"));
    }
    subpatterns.push(current);
    Ok(subpatterns)
}
