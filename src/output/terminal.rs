//! Terminal rendering of the calculator report.
//!
//! Prints the rows from [`build_rows`] as aligned columns. In binary
//! mode the class annotation and the class-defining leading bits of the
//! network's binary form are highlighted, matching classic ipcalc
//! output.

use crate::models::Ipv4Address;
use crate::output::table::{build_rows, NOT_APPLICABLE};
use colored::Colorize;

/// Format a value as a left-aligned field of at least `width` chars.
pub fn pad_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();

    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Print the report for `ip` to stdout.
pub fn render(ip: &Ipv4Address, show_binary: bool) {
    log::debug!("render() address={ip} binary={show_binary}");
    let rows = build_rows(ip, show_binary);

    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0) + 3;
    let value_width = rows.iter().map(|r| r.value.len()).max().unwrap_or(0) + 3;
    let class_bits = ip
        .network_class()
        .map(|class| class.leading_bits())
        .unwrap_or(0);

    for row in rows {
        let label = pad_field(row.label, label_width);
        match row.binary {
            Some(binary) => {
                // Pad before colorizing so ANSI escapes don't skew widths.
                let mut value = pad_field(&row.value, value_width);
                if row.label == "Network" {
                    value = colorize_class(&value);
                }
                let binary = if row.label == "Network" {
                    colorize_leading_bits(&binary, class_bits)
                } else {
                    binary
                };
                println!("{label}{value}{binary}");
            }
            None => println!("{label}{}", row.value),
        }
    }
}

/// Highlight the `Class X` annotation inside a padded value.
fn colorize_class(value: &str) -> String {
    match value.find("Class ") {
        Some(pos) if value.len() >= pos + 7 => {
            let class = &value[pos..pos + 7];
            format!("{}{}{}", &value[..pos], class.green(), &value[pos + 7..])
        }
        _ => value.to_string(),
    }
}

/// Highlight the first `bits` characters of a binary rendering. The
/// class prefix is at most 4 bits, well inside the first octet group.
fn colorize_leading_bits(binary: &str, bits: usize) -> String {
    if bits == 0 || binary == NOT_APPLICABLE || binary.len() < bits {
        return binary.to_string();
    }
    format!("{}{}", binary[..bits].green(), &binary[bits..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_field_short() {
        assert_eq!(pad_field("test", 10), "test      ");
    }

    #[test]
    fn test_pad_field_exact() {
        assert_eq!(pad_field("test", 4), "test");
    }

    #[test]
    fn test_pad_field_long() {
        assert_eq!(pad_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_pad_field_number() {
        assert_eq!(pad_field(42, 6), "42    ");
    }

    #[test]
    fn test_colorize_class_plain_text_survives() {
        colored::control::set_override(false);
        assert_eq!(
            colorize_class("192.168.1.0/24 Class C  "),
            "192.168.1.0/24 Class C  "
        );
        assert_eq!(colorize_class("N/A/N/A N/A"), "N/A/N/A N/A");
    }

    #[test]
    fn test_colorize_leading_bits_plain_text_survives() {
        colored::control::set_override(false);
        let bin = "11000000.10101000.00000001.00000000";
        assert_eq!(colorize_leading_bits(bin, 3), bin);
        assert_eq!(colorize_leading_bits(NOT_APPLICABLE, 3), NOT_APPLICABLE);
        assert_eq!(colorize_leading_bits(bin, 0), bin);
    }
}
