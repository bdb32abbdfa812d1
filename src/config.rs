use storage_units::{Locale, StorageUnit, Unit, UnitFamily, UnitFormat};

pub struct Config {
    pub quantities: Vec<String>,
    pub input_family: UnitFamily,
    pub target: Target,
    pub format: UnitFormat,
    pub table: bool,
    pub total: bool,
    pub no_errors: bool,
}

/// What each parsed quantity is converted to before printing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Best match within the family the quantity was written in
    OwnFamily,
    Family(UnitFamily),
    Unit(Unit),
}

impl Target {
    pub fn apply(&self, quantity: &StorageUnit) -> StorageUnit {
        match self {
            Target::OwnFamily => quantity.as_best_matching_unit(),
            Target::Family(family) => quantity.as_best_matching(*family),
            Target::Unit(unit) => quantity.as_unit(*unit),
        }
    }

    /// Family whose ladder `--table` prints.
    pub fn family_of(&self, quantity: &StorageUnit) -> UnitFamily {
        match self {
            Target::OwnFamily => quantity.family(),
            Target::Family(family) => *family,
            Target::Unit(unit) => unit.family(),
        }
    }
}

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// An explicit `--locale` wins, then the first non-empty locale variable,
/// then the root locale.
pub fn resolve_locale<F>(flag: Option<&str>, env: F) -> anyhow::Result<Locale>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(tag) = flag {
        return Ok(Locale::new(tag)?);
    }

    for var in LOCALE_VARS {
        if let Some(tag) = env(var).filter(|tag| !tag.is_empty()) {
            return match Locale::new(&tag) {
                Ok(locale) => Ok(locale),
                Err(err) => {
                    log::warn!("ignoring {var}={tag}: {err}");
                    Ok(Locale::root())
                }
            };
        }
    }

    Ok(Locale::root())
}
