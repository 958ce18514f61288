//! Text tables for signrep output

use anyhow::Result;
use colored::Colorize;
use signrep_core::{Comparison, SignKind, SignedEncodings, SpecialPattern, TwosComplementSteps};
use std::fmt::Write;

/// Header line, bold when color is enabled
fn header(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// `--- title ---` section heading
pub fn section(title: &str, color: bool) -> String {
    let line = format!("--- {} ---", title);
    if color {
        line.bright_cyan().to_string()
    } else {
        line
    }
}

/// `Binary | Unsigned | Signed Mag | Two's Comp`
pub fn comparison_table(rows: &[Comparison], color: bool) -> String {
    let bin_w = rows
        .iter()
        .map(|r| r.binary.width())
        .max()
        .unwrap_or(0)
        .max("Binary".len());

    let mut out = String::new();
    let mut head = format!("{:<bin_w$}", "Binary", bin_w = bin_w);
    let mut rule = "-".repeat(bin_w);
    for kind in SignKind::ALL {
        let _ = write!(head, " | {:>10}", kind.label());
        rule.push_str("-|-");
        rule.push_str(&"-".repeat(10));
    }
    let _ = writeln!(out, "{}", header(&head, color));
    let _ = writeln!(out, "{}", rule);

    for row in rows {
        let _ = write!(out, "{:<bin_w$}", row.binary, bin_w = bin_w);
        for kind in SignKind::ALL {
            let _ = write!(out, " | {:>10}", row.value(kind).to_string());
        }
        out.push('\n');
    }
    out
}

/// Signed magnitude and two's complement of one value
pub fn encodings(enc: &SignedEncodings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number: {} ({}-bit)", enc.value, enc.width);
    match &enc.signed_magnitude {
        Some(sm) => {
            let _ = writeln!(out, "Signed Magnitude:    {}", sm);
        },
        None => {
            let _ = writeln!(out, "Signed Magnitude:    (not representable)");
        },
    }
    let _ = writeln!(out, "Two's Complement:    {}", enc.twos_complement);
    out
}

/// Invert-and-add-one derivation
pub fn steps(steps: &TwosComplementSteps) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Steps:");
    let _ = writeln!(out, "    {} = {}", steps.value.magnitude(), steps.positive);
    let _ = writeln!(out, "    One's complement: {}", steps.ones_complement);
    let _ = writeln!(out, "    Add 1:            {}", steps.result);
    out
}

/// Representable range of every kind at `width`
pub fn range_table(width: usize, color: bool) -> Result<String> {
    let mut out = String::new();
    let head = format!(
        "{:<16} | {:>12} | {:>12} | {}",
        "Encoding", "Min", "Max", "Zero patterns"
    );
    let _ = writeln!(out, "{}", header(&head, color));
    let _ = writeln!(out, "{}", "-".repeat(head.len()));

    for kind in SignKind::ALL {
        let range = kind.range(width)?;
        let zeros: Vec<String> = kind
            .zero_patterns(width)?
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(
            out,
            "{:<16} | {:>12} | {:>12} | {}",
            kind.label(),
            range.min.to_string(),
            range.max.to_string(),
            zeros.join(", ")
        );
    }
    Ok(out)
}

/// `Binary | Description | Signed Mag | Two's Comp`
pub fn special_table(rows: &[SpecialPattern], color: bool) -> String {
    let bin_w = rows
        .iter()
        .map(|r| r.bits.width())
        .max()
        .unwrap_or(0)
        .max("Binary".len());
    let desc_w = rows
        .iter()
        .map(|r| r.description.len())
        .max()
        .unwrap_or(0)
        .max("Description".len());

    let mut out = String::new();
    let head = format!(
        "{:<bin_w$} | {:<desc_w$} | {:>10} | {:>10}",
        "Binary",
        "Description",
        SignKind::SignedMagnitude.label(),
        SignKind::SignedTwosComplement.label(),
        bin_w = bin_w,
        desc_w = desc_w
    );
    let _ = writeln!(out, "{}", header(&head, color));
    let _ = writeln!(
        out,
        "{}-|-{}-|-{}-|-{}",
        "-".repeat(bin_w),
        "-".repeat(desc_w),
        "-".repeat(10),
        "-".repeat(10)
    );

    for row in rows {
        let _ = writeln!(
            out,
            "{:<bin_w$} | {:<desc_w$} | {:>10} | {:>10}",
            row.bits,
            row.description,
            row.signed_magnitude.to_string(),
            row.twos_complement.to_string(),
            bin_w = bin_w,
            desc_w = desc_w
        );
    }
    out
}
