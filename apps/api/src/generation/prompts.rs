// Prompt templates for report generation, one per format.
// Placeholder: `{topic}`. Bump the version constant whenever a template changes;
// the version is stored with every report.

use crate::generation::formats::ReportFormat;

/// Heading contract shared by every template. The section parser keys off these words.
const STRUCTURE_INSTRUCTION: &str = "\
Structure the report under exactly these four headings, each on its own line and in this order:
Introduction
Problem Statement
Solution
Conclusion

Write at least 60 words of complete sentences under every heading. \
Do not repeat the heading words inside the body text. \
Do not add any text before the first heading.";

pub const ACADEMIC_VERSION: &str = "academic_v1";
pub const ACADEMIC_TEMPLATE: &str = "\
You are writing a college-level academic report on the topic: {topic}.

Use a formal academic register. Explain the background of the topic, analyse the \
underlying issue, describe the design and implementation of a proposed approach, \
and close with a reflective summary.

{structure}";

pub const TECHNICAL_VERSION: &str = "technical_v1";
pub const TECHNICAL_TEMPLATE: &str = "\
You are writing an IEEE-style technical report on the topic: {topic}.

Be precise and engineering-focused. Describe the system context, give a technical \
analysis of the issue, present the system design and implementation details of the \
proposed approach, and summarise results and future work.

{structure}";

pub const BUSINESS_VERSION: &str = "business_v1";
pub const BUSINESS_TEMPLATE: &str = "\
You are writing a concise business report on the topic: {topic}.

Use plain language suitable for decision makers. Summarise the context, state the \
business issue and its impact, describe the proposed approach with its design and \
implementation plan, and end with clear recommendations.

{structure}";

/// Fills the template for `format` with `topic`.
/// Returns `(prompt, prompt_version)`.
pub fn load_prompt(format: ReportFormat, topic: &str) -> (String, &'static str) {
    let (template, version) = match format {
        ReportFormat::College => (ACADEMIC_TEMPLATE, ACADEMIC_VERSION),
        ReportFormat::Ieee => (TECHNICAL_TEMPLATE, TECHNICAL_VERSION),
        ReportFormat::Simple => (BUSINESS_TEMPLATE, BUSINESS_VERSION),
    };

    let prompt = template
        .replace("{structure}", STRUCTURE_INSTRUCTION)
        .replace("{topic}", topic.trim());

    (prompt, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_per_format() {
        assert_eq!(load_prompt(ReportFormat::College, "x").1, "academic_v1");
        assert_eq!(load_prompt(ReportFormat::Ieee, "x").1, "technical_v1");
        assert_eq!(load_prompt(ReportFormat::Simple, "x").1, "business_v1");
    }

    #[test]
    fn test_topic_and_structure_substituted() {
        for format in ReportFormat::ALL {
            let (prompt, _) = load_prompt(format, "  Urban Water Reuse ");
            assert!(prompt.contains("topic: Urban Water Reuse."));
            assert!(prompt.contains("Problem Statement"));
            assert!(!prompt.contains("{topic}"));
            assert!(!prompt.contains("{structure}"));
        }
    }

    #[test]
    fn test_braces_in_topic_are_kept_verbatim() {
        // `{structure}` is replaced before the topic goes in
        let (prompt, _) = load_prompt(ReportFormat::Simple, "{structure}");
        assert!(prompt.contains("topic: {structure}."));
    }
}
