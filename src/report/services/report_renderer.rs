use crate::report::domain::{Edge, Identifier};
use std::convert::Infallible;

/// Heading that opens the identifiers section
const IDENTIFIERS_HEADING: &str = "## Identifiers\n";

/// Heading that opens the edges section
const EDGES_HEADING: &str = "## edges\n";

/// Separator between an identifier's name and value
const IDENTIFIER_SEPARATOR: &str = " - ";

/// Separator between an edge's source and target
const EDGE_SEPARATOR: &str = " ";

/// ReportRenderer - renders identifiers and edges into the fixed report layout
///
/// ```text
/// ## Identifiers
/// <name> - <value>
///
/// ## edges
/// <source> <target>
/// ```
///
/// Every line, headings included, ends with `\n`. Records are written in the
/// order the sequences yield them and field values are copied verbatim.
///
/// The renderer holds no state: each sequence is pulled exactly once, the
/// identifiers to exhaustion before the edges are touched, and nothing but
/// the output buffer is retained between records. It performs no I/O.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Renders two infallible sequences into a report.
    ///
    /// # Examples
    /// ```
    /// use depgraph_report::report::services::ReportRenderer;
    ///
    /// let report = ReportRenderer::render(
    ///     [("MIT", "Permissive")],
    ///     [("fileA.c", "MIT")],
    /// );
    /// assert_eq!(report, "## Identifiers\nMIT - Permissive\n\n## edges\nfileA.c MIT\n");
    /// ```
    pub fn render<I, E>(identifiers: I, edges: E) -> String
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let result = Self::try_render(
            identifiers.into_iter().map(Ok::<_, Infallible>),
            edges.into_iter().map(Ok::<_, Infallible>),
        );
        match result {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Renders two fallible sequences into a report.
    ///
    /// # Errors
    /// Returns the first error yielded by either sequence, unchanged.
    pub fn try_render<I, E, T, U, Err>(identifiers: I, edges: E) -> Result<String, Err>
    where
        I: IntoIterator<Item = Result<T, Err>>,
        T: Into<Identifier>,
        E: IntoIterator<Item = Result<U, Err>>,
        U: Into<Edge>,
    {
        let mut output = String::new();
        Self::render_into(&mut output, identifiers, edges)?;
        Ok(output)
    }

    /// Appends the report to `output`.
    ///
    /// If a sequence fails part way, the text rendered before the failure is
    /// left in `output` and the error is returned unchanged.
    pub fn render_into<I, E, T, U, Err>(
        output: &mut String,
        identifiers: I,
        edges: E,
    ) -> Result<(), Err>
    where
        I: IntoIterator<Item = Result<T, Err>>,
        T: Into<Identifier>,
        E: IntoIterator<Item = Result<U, Err>>,
        U: Into<Edge>,
    {
        output.push_str(IDENTIFIERS_HEADING);
        for identifier in identifiers {
            Self::render_identifier(output, &identifier?.into());
        }

        output.push('\n');

        output.push_str(EDGES_HEADING);
        for edge in edges {
            Self::render_edge(output, &edge?.into());
        }

        Ok(())
    }

    fn render_identifier(output: &mut String, identifier: &Identifier) {
        output.push_str(&identifier.name);
        output.push_str(IDENTIFIER_SEPARATOR);
        output.push_str(&identifier.value);
        output.push('\n');
    }

    fn render_edge(output: &mut String, edge: &Edge) {
        output.push_str(&edge.source);
        output.push_str(EDGE_SEPARATOR);
        output.push_str(&edge.target);
        output.push('\n');
    }
}
