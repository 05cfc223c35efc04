/// Engine core type and entrypoint.
///
/// This chunk defines the [`GrammarEngine`] type and its top-level `run()`
/// entrypoint; the grammar productions are implemented on it across the other
/// engine chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::engine` to keep all engine methods
///   in a single module while avoiding a single "god file".

/// Grammar engine state for one compilation unit.
///
/// ## Notes
/// - Parsing is single-pass with a hard stop at the first violation; the
///   engine never produces a partial node sequence.
/// - The class registry is complete and read-only by the time an engine is
///   constructed; the forward-declaration pass is a hard ordering barrier.
pub struct GrammarEngine<'a> {
    cursor: TokenCursor<'a>,
    classes: &'a ClassRegistry,
    nodes: Vec<String>,
}

impl<'a> GrammarEngine<'a> {
    /// Create a new engine over a unit's token sequence.
    pub fn new(tokens: &'a [Token], classes: &'a ClassRegistry) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            classes,
            nodes: Vec::new(),
        }
    }

    /// Parse the entire token sequence as one `class` production.
    ///
    /// ## Errors
    /// [`AnalyzeError::Syntax`] at the first grammar violation, or
    /// [`AnalyzeError::Cursor`] on a cursor contract violation (an engine bug).
    pub fn run(mut self) -> Result<Vec<String>, AnalyzeError> {
        self.class()?;

        // The class production is the outermost wrapper; anything after its
        // closing brace is an error.
        if let Some(token) = self.cursor.peek() {
            return Err(SyntaxError::TrailingTokens {
                found: token.kind.to_string(),
                span: token.span,
            }
            .into());
        }

        Ok(self.nodes)
    }
}
