//! Display-side formatting of a selected cost value
//!
//! A thin boundary layer: it decides *whether* to substitute the zero label
//! or to hand the value to a currency collaborator, and otherwise passes the
//! value through untouched. Currency placement rules, localization of the
//! zero label, and output escaping all belong to the injected collaborators.

use crate::cost::separators::SeparatorSet;

/// Renders a purely numeric amount with currency decoration.
pub trait CurrencyFormatter {
    fn render(&self, amount: &str) -> String;
}

/// Escapes final display text for the output medium.
pub trait DisplayEscaper {
    fn escape(&self, text: &str) -> String;
}

/// Pass-through escaper, the default when no output medium is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEscaper;

impl DisplayEscaper for IdentityEscaper {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Escaper for HTML output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl DisplayEscaper for HtmlEscaper {
    fn escape(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#039;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

/// Format one value for display: zero becomes the label, numeric values are
/// optionally currency-decorated, everything else passes through.
///
/// The zero test is on canonical text, not a float comparison: only the
/// exact text `"0"` counts, which is what the neutral aggregation result and
/// a literal zero cost both look like.
pub fn format(
    value: &str,
    zero_label: &str,
    separators: &SeparatorSet,
    currency: Option<&dyn CurrencyFormatter>,
) -> String {
    if value == "0" {
        return zero_label.to_string();
    }

    if let Some(currency) = currency {
        // Strip separators first so european decimal and thousands notation
        // still counts as numeric.
        if is_purely_numeric(&separators.strip(value)) {
            return currency.render(value);
        }
    }

    value.to_string()
}

fn is_purely_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DollarPrefix;

    impl CurrencyFormatter for DollarPrefix {
        fn render(&self, amount: &str) -> String {
            format!("${}", amount)
        }
    }

    #[test]
    fn test_zero_becomes_label() {
        let seps = SeparatorSet::default();
        assert_eq!(format("0", "Free", &seps, None), "Free");
    }

    #[test]
    fn test_zero_point_zero_is_not_the_zero_text() {
        let seps = SeparatorSet::default();
        assert_eq!(format("0.0", "Free", &seps, None), "0.0");
    }

    #[test]
    fn test_numeric_value_is_currency_decorated() {
        let seps = SeparatorSet::default();
        assert_eq!(format("1,234.56", "Free", &seps, Some(&DollarPrefix)), "$1,234.56");
        assert_eq!(format("-5", "Free", &seps, Some(&DollarPrefix)), "$-5");
    }

    #[test]
    fn test_non_numeric_value_passes_through_despite_currency() {
        let seps = SeparatorSet::default();
        assert_eq!(format("10 USD", "Free", &seps, Some(&DollarPrefix)), "10 USD");
    }

    #[test]
    fn test_value_passes_through_without_currency() {
        let seps = SeparatorSet::default();
        assert_eq!(format("10.25", "Free", &seps, None), "10.25");
    }

    #[test]
    fn test_html_escaper() {
        assert_eq!(HtmlEscaper.escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_identity_escaper() {
        assert_eq!(IdentityEscaper.escape("<b>10</b>"), "<b>10</b>");
    }
}
