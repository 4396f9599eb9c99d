use std::fmt::Write;

use crate::lib::suggestion::{Suggestion, total_impact};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Render ranked suggestions as the plain text report.
///
/// Suggestions are printed in the order given; ranking is the caller's job.
pub fn render_report(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();

    if suggestions.is_empty() {
        out.push_str("✅ No cost savings suggestions found. Your cluster looks efficient!\n");
        return out;
    }

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "🚀 KUBE-SUGGEST - TOP {} COST SAVINGS ACTIONS\n",
        suggestions.len()
    );

    for (i, suggestion) in suggestions.iter().enumerate() {
        match MEDALS.get(i) {
            Some(medal) => {
                let _ = writeln!(out, "{} {}", medal, suggestion.action);
            }
            None => {
                let _ = writeln!(out, "   {}", suggestion.action);
            }
        }
        let _ = writeln!(out, "   💰 Impact: ~${:.0}/month", suggestion.impact);
        let _ = writeln!(out, "   📝 Reason: {}", suggestion.reason);
        if let Some(confidence) = suggestion.confidence {
            let _ = writeln!(out, "   🎯 Confidence: {}%", confidence);
        }
        let _ = writeln!(out, "   ⚡ Command: {}\n", suggestion.command);
    }

    let _ = writeln!(
        out,
        "💡 Total potential savings: ~${:.0}/month",
        total_impact(suggestions)
    );
    out.push_str("🎯 Start with the highest impact items first!\n");

    out
}
