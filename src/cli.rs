use clap::Parser;
use storage_units::{format::DEFAULT_FORMAT_PATTERN, Unit, UnitFamily, UnitFormat};

use crate::config::{resolve_locale, Config, Target};

#[derive(Debug, Parser)]
#[command(author, version, about = "Convert and pretty-print storage quantities", long_about = None)]
pub struct Args {
    /// Quantities such as 1536, "5 MiB" or 1.5GB
    #[arg(required = true)]
    pub quantities: Vec<String>,

    #[arg(name = "binary", long = "binary", alias = "bin", conflicts_with_all = vec!["si", "common", "to"])]
    pub binary: bool,
    #[arg(name = "si", long = "si", alias = "decimal", conflicts_with_all = vec!["binary", "common", "to"])]
    pub si: bool,
    /// Binary magnitudes with SI-style symbols; also reads kB, MB, ... as powers of 1024
    #[arg(name = "common", long = "common", conflicts_with_all = vec!["binary", "si", "to"])]
    pub common: bool,
    /// Express every quantity in exactly this unit, e.g. MiB or gigabyte
    #[arg(name = "to", long = "to", short = 't')]
    pub to: Option<String>,

    #[arg(name = "pattern", long = "pattern", short = 'p', default_value = DEFAULT_FORMAT_PATTERN)]
    pub pattern: String,
    /// Locale for number symbols; defaults to LC_ALL, LC_NUMERIC or LANG
    #[arg(name = "locale", long = "locale", short = 'l')]
    pub locale: Option<String>,
    /// up, down, ceiling, floor, half-up, half-down or half-even
    #[arg(name = "rounding", long = "rounding", short = 'r', default_value = "ceiling")]
    pub rounding: String,

    /// Print every unit of the family for each quantity
    #[arg(name = "table", long = "table")]
    pub table: bool,
    /// Print the sum of all quantities
    #[arg(name = "total", long = "total", alias = "sum")]
    pub total: bool,
    #[arg(
        name = "no-errors",
        long = "no-errors",
        aliases = vec![
            "no-error",
            "no-errs",
            "no-err",
            "noerrors",
            "noerror",
            "noerrs",
            "noerr"
        ]
    )]
    pub no_errors: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let input_family = if self.common {
            UnitFamily::Common
        } else {
            UnitFamily::Decimal
        };

        let target = if let Some(unit) = &self.to {
            Target::Unit(Unit::from_symbol(unit, input_family)?)
        } else if self.binary {
            Target::Family(UnitFamily::Binary)
        } else if self.si {
            Target::Family(UnitFamily::Decimal)
        } else if self.common {
            Target::Family(UnitFamily::Common)
        } else {
            Target::OwnFamily
        };

        let locale = resolve_locale(self.locale.as_deref(), |key| std::env::var(key).ok())?;
        let format = UnitFormat::new(&self.pattern, &locale)?.with_rounding(self.rounding.parse()?);

        Ok(Config {
            quantities: self.quantities,
            input_family,
            target,
            format,
            table: self.table,
            total: self.total,
            no_errors: self.no_errors,
        })
    }
}
