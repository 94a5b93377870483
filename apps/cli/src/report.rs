//! Human-readable stdout report over the enriched deal collection.

use dforge::domain::models::EnrichedDeal;
use std::io::Write;

const SEPARATOR_WIDTH: usize = 50;

/// Prints the first `sample` enriched deals to `out`.
///
/// Each record shows the deal identifier, name, formatted currency amount,
/// and stage, followed by the resolved contact's name/email/company or the
/// literal "No associated contact" line.
pub(crate) fn print_sample<W: Write>(
    out: &mut W,
    enriched: &[EnrichedDeal],
    sample: usize,
) -> std::io::Result<()> {
    writeln!(out, "Sample Synced Deals (first {}):", sample.min(enriched.len()))?;

    for item in enriched.iter().take(sample) {
        writeln!(out)?;
        writeln!(out, "Deal ID: {}", item.deal.deal_id)?;
        writeln!(out, "Deal Name: {}", item.deal.deal_name)?;
        writeln!(out, "Amount: {}", format_currency(item.deal.amount))?;
        writeln!(out, "Stage: {}", item.deal.stage)?;
        match &item.contact {
            Some(contact) => {
                writeln!(out, "Contact: {}", contact.full_name())?;
                writeln!(out, "Email: {}", contact.email)?;
                writeln!(out, "Company: {}", contact.company)?;
            }
            None => writeln!(out, "Contact: No associated contact")?,
        }
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}

/// Formats a non-negative amount as `$12,345.67`.
#[allow(clippy::cast_possible_truncation)]
fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
