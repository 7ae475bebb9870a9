//! Text (terminal) reporter with colors and usage bars

use crate::models::TopLangData;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const BAR_WIDTH: usize = 30;

/// ANSI truecolor foreground for a `#rrggbb` color, plain text otherwise
fn swatch(color: Option<&str>) -> String {
    let Some(hex) = color
        .and_then(|c| c.strip_prefix('#'))
        .filter(|h| h.len() == 6 && h.is_ascii())
    else {
        return String::new();
    };
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{r};{g};{b}m"),
        _ => String::new(),
    }
}

fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render ranked languages as formatted terminal output
pub fn render(username: &str, data: &TopLangData) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Most Used Languages{RESET} {DIM}({username}){RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    if data.is_empty() {
        out.push_str("No languages found.\n");
        return Ok(out);
    }

    let name_width = data.names().map(|n| n.chars().count()).max().unwrap_or(0);
    for (rank, (stat, pct)) in data.percentages().into_iter().enumerate() {
        let color = swatch(stat.color.as_deref());
        let repos = if stat.count == 1 { "repo" } else { "repos" };
        out.push_str(&format!(
            "{:>2}. {color}●{RESET} {:<width$}  {color}{}{RESET} {:>6.2}%  {DIM}{} {}{RESET}\n",
            rank + 1,
            stat.name,
            bar(pct),
            pct,
            stat.count,
            repos,
            width = name_width,
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_data;

    #[test]
    fn test_text_render_lists_languages_in_rank_order() {
        let out = render("octocat", &test_data()).unwrap();
        let rust = out.find("Rust").unwrap();
        let ts = out.find("TypeScript").unwrap();
        let shell = out.find("Shell").unwrap();
        assert!(rust < ts && ts < shell);
        assert!(out.contains("75.00%"));
        assert!(out.contains("20.00%"));
        assert!(out.contains("1 repo"));
    }

    #[test]
    fn test_text_render_empty() {
        let out = render("octocat", &TopLangData::default()).unwrap();
        assert!(out.contains("No languages found."));
    }

    #[test]
    fn test_swatch() {
        assert_eq!(swatch(Some("#ff0080")), "\x1b[38;2;255;0;128m");
        assert_eq!(swatch(Some("red")), "");
        assert_eq!(swatch(None), "");
        assert_eq!(swatch(Some("#zzzzzz")), "");
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(bar(100.0).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(50.0).chars().count(), BAR_WIDTH);
    }
}
