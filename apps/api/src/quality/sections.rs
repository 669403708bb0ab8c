//! Section Parser: splits raw generated text into the four report sections.
//!
//! Headings are detected by substring containment of a trigger word, not by
//! heading syntax. A content line containing a trigger word is treated as a
//! heading too; this matches how generated reports have always been scored.

use serde::{Deserialize, Serialize};

/// One of the four fixed report sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Introduction,
    ProblemStatement,
    Solution,
    Conclusion,
}

impl Section {
    /// Canonical key order. Also the order completeness remarks are emitted in.
    pub const ALL: [Section; 4] = [
        Section::Introduction,
        Section::ProblemStatement,
        Section::Solution,
        Section::Conclusion,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::ProblemStatement => "problem_statement",
            Section::Solution => "solution",
            Section::Conclusion => "conclusion",
        }
    }

    /// Word that marks a heading line for this section.
    fn trigger(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::ProblemStatement => "problem",
            Section::Solution => "solution",
            Section::Conclusion => "conclusion",
        }
    }

    /// First section whose trigger occurs in `line_lower`, checked in `ALL` order.
    fn detect(line_lower: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|s| line_lower.contains(s.trigger()))
    }
}

/// Accumulated text per section. All four sections are always present;
/// a section with no content holds the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub introduction: String,
    pub problem_statement: String,
    pub solution: String,
    pub conclusion: String,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Introduction => &self.introduction,
            Section::ProblemStatement => &self.problem_statement,
            Section::Solution => &self.solution,
            Section::Conclusion => &self.conclusion,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Introduction => &mut self.introduction,
            Section::ProblemStatement => &mut self.problem_statement,
            Section::Solution => &mut self.solution,
            Section::Conclusion => &mut self.conclusion,
        }
    }

    /// Iterates `(section, text)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// All section texts joined with a single space, in canonical order.
    pub fn combined(&self) -> String {
        self.iter().map(|(_, text)| text).collect::<Vec<_>>().join(" ")
    }
}

/// Parses raw model output into a `SectionMap`.
///
/// Lines before the first recognised heading are dropped. Heading lines
/// themselves are never appended. Each content line is appended with a
/// trailing space, original casing preserved.
pub fn parse_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();
    let mut current: Option<Section> = None;

    for line in text.split('\n') {
        let lower = line.to_lowercase();
        if let Some(heading) = Section::detect(&lower) {
            current = Some(heading);
        } else if let Some(section) = current {
            let buf = sections.get_mut(section);
            buf.push_str(line);
            buf.push(' ');
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_four_empty_sections() {
        let sections = parse_sections("");
        assert_eq!(sections, SectionMap::default());
        assert_eq!(sections.iter().count(), 4);
        assert!(sections.iter().all(|(_, text)| text.is_empty()));
    }

    #[test]
    fn test_worked_example() {
        let text = "Introduction\nThis system provides design and analysis.\nConclusion\nDone.";
        let sections = parse_sections(text);
        assert_eq!(
            sections.introduction,
            "This system provides design and analysis. "
        );
        assert_eq!(sections.conclusion, "Done. ");
        assert_eq!(sections.problem_statement, "");
        assert_eq!(sections.solution, "");
    }

    #[test]
    fn test_lines_before_first_heading_are_dropped() {
        let text = "Preamble the model added\nAnother stray line\nIntroduction\nKept line";
        let sections = parse_sections(text);
        assert_eq!(sections.introduction, "Kept line ");
        assert!(!sections.combined().contains("Preamble"));
    }

    #[test]
    fn test_heading_priority_ignores_position_in_line() {
        // "conclusion" appears first in the line but introduction has priority
        let text = "Conclusion of the introduction\nbody";
        let sections = parse_sections(text);
        assert_eq!(sections.introduction, "body ");
        assert_eq!(sections.conclusion, "");
    }

    #[test]
    fn test_problem_beats_solution_and_conclusion() {
        let sections = parse_sections("Solution to the problem, in conclusion\nbody");
        assert_eq!(sections.problem_statement, "body ");
        assert_eq!(sections.solution, "");
    }

    #[test]
    fn test_heading_detection_is_case_insensitive() {
        let sections = parse_sections("## PROBLEM STATEMENT\nUsers wait too long.");
        assert_eq!(sections.problem_statement, "Users wait too long. ");
    }

    #[test]
    fn test_content_line_with_trigger_word_switches_section() {
        let text = "Introduction\nFirst line.\nOur solution is simple.\nSecond line.";
        let sections = parse_sections(text);
        assert_eq!(sections.introduction, "First line. ");
        assert_eq!(sections.solution, "Second line. ");
    }

    #[test]
    fn test_original_case_preserved_and_blank_lines_kept() {
        let sections = parse_sections("Solution\nUse RUST.\n\nShip It.");
        assert_eq!(sections.solution, "Use RUST.  Ship It. ");
    }

    #[test]
    fn test_repeated_heading_keeps_accumulating() {
        let text = "Introduction\na\nConclusion\nb\nIntroduction again\nc";
        let sections = parse_sections(text);
        assert_eq!(sections.introduction, "a c ");
        assert_eq!(sections.conclusion, "b ");
    }

    #[test]
    fn test_combined_joins_in_canonical_order() {
        let sections = SectionMap {
            introduction: "i".to_string(),
            problem_statement: "p".to_string(),
            solution: "s".to_string(),
            conclusion: "c".to_string(),
        };
        assert_eq!(sections.combined(), "i p s c");
        assert_eq!(SectionMap::default().combined(), "   ");
    }

    #[test]
    fn test_section_map_serializes_with_snake_case_keys() {
        let value = serde_json::to_value(SectionMap::default()).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(obj.len(), 4);
        for s in Section::ALL {
            assert!(keys.iter().any(|k| k == s.key()));
        }
    }
}
