/// Formats an amount in pence as pounds sterling, e.g. `600` -> `£6.0`,
/// `605` -> `£6.05`, `-150` -> `-£1.5`.
///
/// At least one fractional digit is always printed; a trailing zero in the
/// pence column is dropped.
pub fn format_pence_to_gbp(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let pounds = magnitude / 100;
    let pence = magnitude % 100;

    if pence % 10 == 0 {
        format!("{sign}£{pounds}.{}", pence / 10)
    } else {
        format!("{sign}£{pounds}.{pence:02}")
    }
}
