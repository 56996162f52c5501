//! Ivan's structured decision-making template.

// Line for line, including the two trailing spaces after the second factor.
const ANALYSIS_BODY: &str = concat!(
    "1. ФАКТОРЫ:\n",
    "   - Техническая сложность\n",
    "   - Временные ограничения  \n",
    "   - Ресурсные требования\n",
    "   - Бизнес-приоритеты\n",
    "\n",
    "2. ВЗВЕШИВАНИЕ:\n",
    "   - Критичность для продукта\n",
    "   - Влияние на команду\n",
    "   - ROI оценка\n",
    "\n",
    "3. РЕШЕНИЕ:\n",
    "   Требуется дополнительный анализ для конкретных рекомендаций.\n",
    "\n",
    "Это мой стандартный подход к принятию решений.",
);

/// Builds the fixed analysis for `problem`.
///
/// The problem text is inserted verbatim, in double quotes, on the first line.
pub fn structured_analysis(problem: &str) -> String {
    format!("Структурированный анализ проблемы: \"{problem}\"\n\n{ANALYSIS_BODY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_is_quoted_on_first_line() {
        let text = structured_analysis("X");
        let first = text.lines().next().expect("line");
        assert!(first.contains("\"X\""));
    }

    #[test]
    fn full_text_is_fixed() {
        let expected = [
            "Структурированный анализ проблемы: \"hire or build\"",
            "",
            "1. ФАКТОРЫ:",
            "   - Техническая сложность",
            "   - Временные ограничения  ",
            "   - Ресурсные требования",
            "   - Бизнес-приоритеты",
            "",
            "2. ВЗВЕШИВАНИЕ:",
            "   - Критичность для продукта",
            "   - Влияние на команду",
            "   - ROI оценка",
            "",
            "3. РЕШЕНИЕ:",
            "   Требуется дополнительный анализ для конкретных рекомендаций.",
            "",
            "Это мой стандартный подход к принятию решений.",
        ]
        .join("\n");
        assert_eq!(structured_analysis("hire or build"), expected);
    }

    #[test]
    fn problem_is_not_escaped() {
        let text = structured_analysis("a \"quoted\" <b>");
        assert!(text.contains("\"a \"quoted\" <b>\""));
    }

    #[test]
    fn empty_problem_still_renders_sections() {
        let text = structured_analysis("");
        assert!(text.starts_with("Структурированный анализ проблемы: \"\""));
        assert!(text.contains("1. ФАКТОРЫ:"));
        assert!(text.contains("2. ВЗВЕШИВАНИЕ:"));
        assert!(text.contains("3. РЕШЕНИЕ:"));
    }
}
