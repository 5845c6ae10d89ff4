//! Traffic usage bar.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::domain::TrafficUsage;
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR, WARNING_COLOR};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Builds `█████░░░░░ 42.5% Used` for a bar `width` cells wide.
///
/// The bar fills at most `width` cells even when usage is over quota; the
/// label still reports the real percentage.
#[must_use]
pub fn usage_bar_line(usage: &TrafficUsage, width: u16) -> Line<'static> {
    let filled = (usage.bar_ratio() * f64::from(width)).round() as usize;
    let filled = filled.min(usize::from(width));
    let empty = usize::from(width) - filled;
    let color = usage_color(usage.percent());

    Line::from(vec![
        Span::styled(FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(EMPTY.repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(usage.percent_label(), Style::default().fg(color)),
    ])
}

fn usage_color(percent: f64) -> Color {
    if percent >= 90.0 {
        ERROR_COLOR
    } else if percent >= 70.0 {
        WARNING_COLOR
    } else {
        SUCCESS_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cells(line: &Line<'_>) -> (usize, usize) {
        (
            line.spans[0].content.chars().count(),
            line.spans[1].content.chars().count(),
        )
    }

    #[rstest]
    #[case::empty(0, 100, (0, 10))]
    #[case::quarter(25, 100, (3, 7))]
    #[case::full(100, 100, (10, 0))]
    #[case::over_quota(250, 100, (10, 0))]
    #[case::zero_quota(5, 0, (0, 10))]
    fn test_bar_is_capped(#[case] used: u64, #[case] total: u64, #[case] expected: (usize, usize)) {
        let line = usage_bar_line(&TrafficUsage { used, total }, 10);
        assert_eq!(cells(&line), expected);
    }

    #[test]
    fn test_label_reports_real_percentage() {
        let line = usage_bar_line(&TrafficUsage { used: 250, total: 100 }, 10);
        assert_eq!(line.spans[3].content, "250.0% Used");
        assert_eq!(line.spans[3].style.fg, Some(ERROR_COLOR));
    }

    #[rstest]
    #[case(10.0, SUCCESS_COLOR)]
    #[case(75.0, WARNING_COLOR)]
    #[case(95.0, ERROR_COLOR)]
    fn test_usage_color(#[case] percent: f64, #[case] expected: Color) {
        assert_eq!(usage_color(percent), expected);
    }
}
