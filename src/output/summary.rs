use storage_units::{StorageUnit, UnitFormat};

use crate::config::Target;

pub fn make_summary(
    total: &StorageUnit,
    target: &Target,
    format: &UnitFormat,
    results_len: usize,
    errors_len: usize,
) -> String {
    let mut summary = String::new();
    let mut max_len = 0;
    let mut push = |s: &str| {
        if s.len() > max_len {
            max_len = s.len();
        }
        summary.push_str(s);
    };

    push(&format!("Total: {}\n", target.apply(total).format(format)));
    push(&format!("Bytes: {}\n", total.bytes()));
    push(&format!("Items: {}\n", results_len));
    push(&format!("Errors: {}\n", errors_len));

    let sep = "=".repeat(max_len.saturating_sub(1));
    format!("{}\n{}{}\n", sep, summary, sep)
}
