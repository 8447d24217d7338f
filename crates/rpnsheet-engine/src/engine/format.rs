/// Format a computed value for output.
///
/// Plain decimal with at least one fractional digit for magnitudes in
/// `[1e-3, 1e7)`, scientific notation with an explicit fraction otherwise
/// (`1.0E7`, `2.5E-4`). Non-finite values print as `NaN`, `Infinity` and
/// `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 || (1e-3..1e7).contains(&n.abs()) {
        format!("{:?}", n)
    } else {
        let sci = format!("{:E}", n);
        match sci.split_once('E') {
            Some((mantissa, exp)) if !mantissa.contains('.') => {
                format!("{}.0E{}", mantissa, exp)
            }
            _ => sci,
        }
    }
}
