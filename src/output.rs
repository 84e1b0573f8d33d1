//! Formatting of delivery decisions.

/// Renders decisions as a single line of `true`/`false` tokens.
pub fn format_decisions(decisions: &[bool]) -> String {
    let mut line = decisions
        .iter()
        .map(|delivered| if *delivered { "true" } else { "false" })
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}
