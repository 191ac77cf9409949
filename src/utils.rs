use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

use crate::eligibility::AwardTier;

/// Colour a result line by award tier.
pub fn colorize_tier(text: &str, tier: Option<AwardTier>) -> ColoredString {
    match tier {
        Some(AwardTier::Top) => text.green(),
        Some(AwardTier::Reduced) => text.yellow(),
        Some(AwardTier::None) => text.red(),
        None => text.dimmed(),
    }
}

/// Pad `text` to `width` terminal columns. Emoji count as two columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

/// Cut `text` to at most `width` columns, marking the cut with `...`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Prompt and read one trimmed line from `input`. `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt user for yes/no confirmation
pub fn confirm_action(prompt: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let answer = prompt_line(&mut input, &mut output, &format!("{} (y/N): ", prompt))?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}

/// Render a table row with columns padded to `widths`.
pub fn table_row(columns: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(widths)
        .map(|(col, width)| pad_to_width(&truncate_to_width(col, *width), *width))
        .collect();
    format!("| {} |", cells.join(" | "))
}
