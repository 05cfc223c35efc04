/// Cursor-driving helpers and node emission.
///
/// This chunk contains the low-level primitives used throughout the grammar:
/// - Emitting tag and token node lines (`open`, `close`, `emit`)
/// - Peeking at the next token (`peek_keyword`, `peek_symbol`)
/// - Consuming with expectations (`take`, `expect_keyword`, `expect_symbol`,
///   `expect_identifier`)
///
/// Most functions in this file are internal (`fn`) and are documented
/// primarily to aid maintenance and onboarding.
impl<'a> GrammarEngine<'a> {
    // ========================================================================
    // Node emission
    // ========================================================================

    /// Emit the opening tag line for a production.
    fn open(&mut self, tag: &str) {
        self.nodes.push(format!("<{tag}>"));
    }

    /// Emit the closing tag line for a production.
    fn close(&mut self, tag: &str) {
        self.nodes.push(format!("</{tag}>"));
    }

    /// Emit a consumed token as a node line.
    fn emit(&mut self, token: &Token) {
        self.nodes.push(token.xml_line());
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    fn peek_keyword(&self, id: KeywordId) -> bool {
        self.cursor.peek().is_some_and(|t| t.kind.is_keyword(id))
    }

    fn peek_symbol(&self, id: SymbolId) -> bool {
        self.cursor.peek().is_some_and(|t| t.kind.is_symbol(id))
    }

    // ========================================================================
    // Consuming with expectations
    // ========================================================================

    /// Consume the next token, failing with a syntax error (not a cursor
    /// error) if the sequence is exhausted.
    fn take(&mut self, production: &'static str, expected: &str) -> Result<&'a Token, AnalyzeError> {
        if self.cursor.has_next() {
            Ok(self.cursor.advance()?)
        } else {
            Err(SyntaxError::UnexpectedEnd {
                production,
                expected: expected.to_string(),
            }
            .into())
        }
    }

    fn unexpected(&self, production: &'static str, expected: impl Into<String>, found: &Token) -> AnalyzeError {
        SyntaxError::UnexpectedToken {
            production,
            expected: expected.into(),
            found: found.kind.to_string(),
            span: found.span,
        }
        .into()
    }

    /// Consume and emit the given keyword, or fail.
    fn expect_keyword(&mut self, id: KeywordId, production: &'static str) -> Result<(), AnalyzeError> {
        let expected = format!("`{}`", keywords::as_str(id));
        let token = self.take(production, &expected)?;
        if token.kind.is_keyword(id) {
            self.emit(token);
            Ok(())
        } else {
            Err(self.unexpected(production, expected, token))
        }
    }

    /// Consume and emit the given symbol, or fail.
    fn expect_symbol(&mut self, id: SymbolId, production: &'static str) -> Result<(), AnalyzeError> {
        let expected = format!("`{}`", symbols::as_char(id));
        let token = self.take(production, &expected)?;
        if token.kind.is_symbol(id) {
            self.emit(token);
            Ok(())
        } else {
            Err(self.unexpected(production, expected, token))
        }
    }

    /// Consume and emit an identifier, or fail.
    fn expect_identifier(&mut self, production: &'static str) -> Result<&'a str, AnalyzeError> {
        let token = self.take(production, "an identifier")?;
        match token.kind.ident() {
            Some(name) => {
                self.emit(token);
                Ok(name)
            }
            None => Err(self.unexpected(production, "an identifier", token)),
        }
    }
}
