pub fn print_errors<I>(errors: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    eprint!("{}", make_errors(errors));
}

pub fn make_errors<I>(errors: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut report = String::from("\n=== ERRORS ===\n");
    for err in errors {
        report.push_str(&format!("{:#}\n", err));
    }
    report
}
