use mockgen_core::{Content, Group};

use crate::RenderResult;

/// Separator between top-level declarations in the body.
const BODY_SEPARATOR: &str = "\n\n";

/// Composes a header, support declarations and rendered units into the
/// content tree of one file.
///
/// The resulting tree is a group of header, body and optional footer,
/// separated by single newlines and terminated by a trailing newline. The
/// body is omitted entirely (support declarations included) when there are
/// no rendered units.
///
/// # Example
///
/// ```
/// use mockgen_codegen::{DocumentAssembler, RenderResult};
///
/// let results = vec![
///     RenderResult { position: 0, text: "MockA".into() },
///     RenderResult { position: 1, text: "MockB".into() },
/// ];
/// let document = DocumentAssembler::new("// header\n").assemble(results);
///
/// assert_eq!(document.to_string(), "// header\n\nMockA\n\nMockB\n");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    header: Content,
    support: Vec<Content>,
    footer: Option<Content>,
}

impl DocumentAssembler {
    pub fn new(header: impl Into<Content>) -> Self {
        Self {
            header: header.into(),
            support: Vec::new(),
            footer: None,
        }
    }

    /// Add declarations emitted before the rendered units.
    pub fn support(mut self, leaves: impl IntoIterator<Item = Content>) -> Self {
        self.support.extend(leaves);
        self
    }

    /// Close a conditional compilation block opened by the header.
    pub fn close_guard(mut self, guarded: bool) -> Self {
        self.footer = guarded.then(|| Content::leaf("\n#endif"));
        self
    }

    /// Build the document from results ordered by position.
    pub fn assemble(self, mut results: Vec<RenderResult>) -> Content {
        // Results normally arrive ordered; sorting keeps the output
        // independent of how the caller collected them.
        results.sort_by_key(|result| result.position);

        let body: Content = if results.is_empty() {
            Content::empty()
        } else {
            self.support
                .into_iter()
                .chain(results.into_iter().map(|result| Content::leaf(result.text)))
                .collect::<Group>()
                .separator(BODY_SEPARATOR)
                .into()
        };

        Group::new([self.header, body, self.footer.unwrap_or_else(Content::empty)])
            .separator("\n")
            .footer("\n")
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(texts: &[&str]) -> Vec<RenderResult> {
        texts
            .iter()
            .enumerate()
            .map(|(position, text)| RenderResult {
                position,
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_whole_document() {
        let document =
            DocumentAssembler::new("// header\n").assemble(results(&["MockA", "MockB", "MockC"]));
        assert_eq!(
            document.to_string(),
            "// header\n\nMockA\n\nMockB\n\nMockC\n"
        );
    }

    #[test]
    fn test_zero_units_reduces_to_header() {
        let document = DocumentAssembler::new("// header\n")
            .support([Content::leaf("SUPPORT")])
            .assemble(Vec::new());
        assert_eq!(document.to_string(), "// header\n\n");
    }

    #[test]
    fn test_support_precedes_units() {
        let document = DocumentAssembler::new("// h\n")
            .support([Content::leaf("S1"), Content::leaf("S2")])
            .assemble(results(&["M"]));
        assert_eq!(document.to_string(), "// h\n\nS1\n\nS2\n\nM\n");
    }

    #[test]
    fn test_guard_footer() {
        let document = DocumentAssembler::new("#if DEBUG\n")
            .close_guard(true)
            .assemble(results(&["M"]));
        assert_eq!(document.to_string(), "#if DEBUG\n\nM\n\n#endif\n");

        let empty = DocumentAssembler::new("#if DEBUG\n")
            .close_guard(true)
            .assemble(Vec::new());
        assert_eq!(empty.to_string(), "#if DEBUG\n\n\n#endif\n");
    }

    #[test]
    fn test_results_sorted_by_position() {
        let shuffled = vec![
            RenderResult {
                position: 2,
                text: "C".into(),
            },
            RenderResult {
                position: 0,
                text: "A".into(),
            },
            RenderResult {
                position: 1,
                text: "B".into(),
            },
        ];
        let document = DocumentAssembler::new("h").assemble(shuffled);
        assert_eq!(document.to_string(), "h\nA\n\nB\n\nC\n");
    }

    #[test]
    fn test_empty_rendered_unit_is_elided() {
        let document = DocumentAssembler::new("h").assemble(results(&["A", "", "B"]));
        assert_eq!(document.to_string(), "h\nA\n\nB\n");
    }
}
