// Document templates, one per report format.
// Placeholders: `{{title}}` and `{{content}}`.

use crate::generation::formats::ReportFormat;

pub const COLLEGE_TEMPLATE: &str = "\
# {{title}}

*Academic Report*

---

{{content}}
";

pub const IEEE_TEMPLATE: &str = "\
# {{title}}

*Technical Report (IEEE format)*

**Abstract.** This report was produced by an automated generation pipeline and \
scored for structural completeness before delivery.

---

{{content}}
";

pub const SIMPLE_TEMPLATE: &str = "\
# {{title}}

{{content}}
";

pub fn template_for(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::College => COLLEGE_TEMPLATE,
        ReportFormat::Ieee => IEEE_TEMPLATE,
        ReportFormat::Simple => SIMPLE_TEMPLATE,
    }
}
