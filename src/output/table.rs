use std::collections::HashMap;

use console;
use once_cell::sync::Lazy;
use storage_units::{StorageUnit, UnitFamily, UnitFormat};

use crate::config::Target;

pub fn print_lines(inputs: &[(String, StorageUnit)], target: &Target, format: &UnitFormat) {
    print!("{}", make_lines(inputs, target, format));
}

/// One `input = converted` line per quantity, with the `=` signs lined up.
pub fn make_lines(inputs: &[(String, StorageUnit)], target: &Target, format: &UnitFormat) -> String {
    let max_input_len = inputs.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut lines = String::new();
    for (input, quantity) in inputs {
        let input = console::pad_str(input, max_input_len, console::Alignment::Left, None);
        lines.push_str(&format!("{input} = {}\n", target.apply(quantity).format(format)));
    }

    lines
}

pub fn print_table(input: &str, quantity: &StorageUnit, family: UnitFamily, format: &UnitFormat) {
    print!("{}", make_table(input, quantity, family, format));
}

/// `quantity` expressed in every unit of `family`, the best match marked with `*`.
pub fn make_table(
    input: &str,
    quantity: &StorageUnit,
    family: UnitFamily,
    format: &UnitFormat,
) -> String {
    static NAME_WIDTHS: Lazy<HashMap<UnitFamily, usize>> = Lazy::new(|| {
        UnitFamily::ALL
            .iter()
            .map(|family| {
                let width = family.units().iter().map(|u| u.name().len()).max().unwrap_or(0);
                (*family, width)
            })
            .collect()
    });

    let best = family.best_match(quantity.bytes());
    let rows: Vec<(String, String)> = family
        .units()
        .iter()
        .map(|unit| {
            let marker = if *unit == best { "*" } else { " " };
            let amount = format.format(&quantity.in_unit(*unit));
            (format!("{marker} {}", unit.name()), format!("{amount} {}", unit.symbol()))
        })
        .collect();

    let name_width = NAME_WIDTHS.get(&family).copied().unwrap_or(0) + 2;
    let amount_width = rows.iter().map(|(_, a)| console::measure_text_width(a)).max().unwrap_or(0);

    let mut table = format!("{input} ({family})\n");
    for (name, amount) in rows {
        table.push_str(&format!(
            "{}   {}\n",
            console::pad_str(&name, name_width, console::Alignment::Left, None),
            console::pad_str(&amount, amount_width, console::Alignment::Right, None),
        ));
    }

    table
}

#[cfg(test)]
mod tests {
    use storage_units::{storage_units::kibibyte, Locale, Unit};

    use super::*;

    #[test]
    fn test_make_lines_aligns_inputs() {
        let inputs = vec![
            ("1536".to_string(), StorageUnit::from_bytes(1536)),
            ("5 MiB".to_string(), "5 MiB".parse().unwrap()),
        ];
        let lines = make_lines(&inputs, &Target::OwnFamily, &UnitFormat::default());
        assert_eq!(lines, "1536  = 1.50 KiB\n5 MiB = 5.00 MiB\n");
    }

    #[test]
    fn test_make_lines_with_unit_target() {
        let inputs: Vec<(String, StorageUnit)> = vec![("1 GiB".to_string(), "1 GiB".parse().unwrap())];
        let format = UnitFormat::new("#,##0", &Locale::new("de-DE").unwrap()).unwrap();
        let lines = make_lines(&inputs, &Target::Unit(Unit::Kibibyte), &format);
        assert_eq!(lines, "1 GiB = 1.048.576 KiB\n");
    }

    #[test]
    fn test_make_table_lists_every_unit() {
        let table = make_table("1.5 MiB", &kibibyte(1536), UnitFamily::Binary, &UnitFormat::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "1.5 MiB (binary)");
        assert_eq!(lines.len(), 1 + UnitFamily::Binary.units().len());
        assert!(lines[1].starts_with("  byte"));
        assert!(lines[1].ends_with("1572864.00 B"));
        assert!(lines[3].starts_with("* mebibyte"));
        assert!(lines[3].ends_with("1.50 MiB"));

        let widths: Vec<usize> = lines[1..].iter().map(|l| l.len()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
