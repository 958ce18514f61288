//! Walk-through of the three encodings
//!
//! Six sections: interpretations of the same patterns, -5 at 4 bits with the
//! derivation, -23 at 8 bits, the role of the MSB, ranges, and landmark
//! patterns. Range and landmark sections use the configured width.

use crate::render;
use anyhow::{Context, Result};
use serde::Serialize;
use signrep_core::{
    compare_representations, encode_signed_representations, encode_unsigned, special_patterns,
    twos_complement_steps, Comparison, SignKind, SignedEncodings, SpecialPattern,
    TwosComplementSteps, ValueRange,
};
use std::fmt::Write;

const SAMPLE_PATTERNS: [&str; 3] = ["0101", "1101", "1000"];

/// Every value the walk-through prints
#[derive(Debug, Serialize)]
pub struct Demo {
    pub interpretations: Vec<Comparison>,
    pub minus_five: SignedEncodings,
    pub minus_five_steps: TwosComplementSteps,
    pub minus_twenty_three: SignedEncodings,
    pub width: usize,
    pub ranges: Vec<(SignKind, ValueRange)>,
    pub special: Vec<SpecialPattern>,
}

impl Demo {
    pub fn build(width: usize) -> Result<Self> {
        let interpretations = SAMPLE_PATTERNS
            .iter()
            .map(|bits| compare_representations(bits))
            .collect::<signrep_core::Result<Vec<_>>>()?;

        let ranges = SignKind::ALL
            .iter()
            .map(|&kind| kind.range(width).map(|range| (kind, range)))
            .collect::<signrep_core::Result<Vec<_>>>()?;

        Ok(Self {
            interpretations,
            minus_five: encode_signed_representations(-5, 4)?,
            minus_five_steps: twos_complement_steps(-5, 4)?
                .context("No two's complement derivation for -5")?,
            minus_twenty_three: encode_signed_representations(-23, 8)?,
            width,
            ranges,
            special: special_patterns(width.max(2))?,
        })
    }

    pub fn render(&self, color: bool) -> Result<String> {
        let banner = "=".repeat(60);
        let mut out = String::new();

        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(
            out,
            "Unsigned, Signed Magnitude, and Signed Two's Complement"
        );
        let _ = writeln!(out, "{}", banner);

        let _ = writeln!(out, "\n{}", render::section("Example 1: Different Interpretations", color));
        out.push_str(&render::comparison_table(&self.interpretations, color));

        let _ = writeln!(out, "\n{}", render::section("Example 2: Representing -5 (4-bit)", color));
        out.push_str(&render::encodings(&self.minus_five));
        out.push_str(&render::steps(&self.minus_five_steps));
        let _ = writeln!(out, "\nVerification:");
        if let Some(sm) = &self.minus_five.signed_magnitude {
            let _ = writeln!(out, "  Signed magnitude {} = {}", sm, sm.to_signed_magnitude());
        }
        let tc = &self.minus_five.twos_complement;
        let _ = writeln!(out, "  Two's complement {} = {}", tc, tc.to_twos_complement());

        let _ = writeln!(out, "\n{}", render::section("Example 3: Representing -23 (8-bit)", color));
        let _ = writeln!(out, "Positive 23:         {}", encode_unsigned(23, 8)?);
        out.push_str(&render::encodings(&self.minus_twenty_three));

        let _ = writeln!(out, "\n{}", render::section("Example 4: Most Significant Bit (MSB)", color));
        let _ = writeln!(out, "In signed representations, MSB indicates sign:");
        let _ = writeln!(out, "  MSB = 0 -> Positive number");
        let _ = writeln!(out, "  MSB = 1 -> Negative number");
        let _ = writeln!(out, "In unsigned, MSB is just another bit:");
        let _ = writeln!(out, "  MSB can be 0 or 1, represents magnitude only");

        let _ = writeln!(
            out,
            "\n{}",
            render::section(&format!("Example 5: Range for {}-bit Numbers", self.width), color)
        );
        out.push_str(&render::range_table(self.width, color)?);

        let _ = writeln!(
            out,
            "\n{}",
            render::section(
                &format!("Example 6: Special Cases ({}-bit)", self.special_width()),
                color
            )
        );
        out.push_str(&render::special_table(&self.special, color));

        let _ = writeln!(out, "\n{}", banner);
        let _ = writeln!(out, "Key Concepts:");
        let _ = writeln!(out, "- Unsigned: All bits represent magnitude");
        let _ = writeln!(out, "- Signed Magnitude: MSB=sign, rest=magnitude");
        let _ = writeln!(out, "- Two's Complement: Standard for signed integers");
        let _ = writeln!(out, "- MSB=0 -> positive, MSB=1 -> negative (signed)");
        let _ = writeln!(out, "- Two's complement has only one zero");
        let _ = writeln!(out, "{}", banner);

        Ok(out)
    }

    fn special_width(&self) -> usize {
        self.special.first().map_or(self.width, |p| p.bits.width())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_demo_text() {
        let text = Demo::build(4).unwrap().render(false).unwrap();

        assert!(text.contains("--- Example 1: Different Interpretations ---"));
        assert!(text.contains("1101   |         13 |         -5 |         -3"));
        assert!(text.contains("Signed Magnitude:    1101"));
        assert!(text.contains("Two's Complement:    1011"));
        assert!(text.contains("  Signed magnitude 1101 = -5"));
        assert!(text.contains("  Two's complement 1011 = -5"));
        assert!(text.contains("Positive 23:         00010111"));
        assert!(text.contains("Two's Complement:    11101001"));
        assert!(text.contains("--- Example 5: Range for 4-bit Numbers ---"));
        assert!(text.contains("1000   | Minimum (signed mag: -0, twos: -8)"));
        assert!(text.contains("Key Concepts:"));
    }

    #[test]
    fn test_demo_follows_width() {
        let demo = Demo::build(8).unwrap();
        assert_eq!(demo.special[1].bits.as_str(), "01111111");
        let text = demo.render(false).unwrap();
        assert!(text.contains("Range for 8-bit Numbers"));
        assert!(text.contains("Special Cases (8-bit)"));
    }

    #[test]
    fn test_demo_one_bit_width() {
        // Landmarks need two bits; the range table does not
        let demo = Demo::build(1).unwrap();
        assert_eq!(demo.special[0].bits.width(), 2);
        assert!(demo.render(false).unwrap().contains("Range for 1-bit Numbers"));
    }

    #[test]
    fn test_demo_json() {
        let demo = Demo::build(4).unwrap();
        let value = serde_json::to_value(&demo).unwrap();
        assert_eq!(value["interpretations"][2]["twos_complement"], -8);
        assert_eq!(value["minus_twenty_three"]["signed_magnitude"], "10010111");
        assert_eq!(value["ranges"][2][0], "twos-complement");
        assert_eq!(value["ranges"][2][1]["min"], -8);
    }
}
