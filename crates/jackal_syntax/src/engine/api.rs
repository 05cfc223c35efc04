/// Parse one compilation unit's token sequence into its node sequence.
///
/// This is the main public entrypoint for body parsing. The class registry
/// must already cover every unit of the run; see
/// [`ClassRegistry::from_units`](crate::registry::ClassRegistry::from_units).
///
/// ## Errors
/// Returns the first [`AnalyzeError`] encountered; a failed unit has no
/// usable (partial) node sequence.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn compile_unit(tokens: &[Token], classes: &ClassRegistry) -> Result<Vec<String>, AnalyzeError> {
    GrammarEngine::new(tokens, classes).run()
}
