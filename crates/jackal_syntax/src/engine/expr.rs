/// Expression productions: `expression`, `term`, `expressionList`, and the
/// token shape of `subroutineCall`.
///
/// Operator policy: a binary chain `term (op term)*` is parsed flat, left to
/// right, with no precedence levels. The node sequence encodes only the
/// order in which operators and terms appear.
impl<'a> GrammarEngine<'a> {
    /// `expression := term (binaryOp term)*`
    fn expression(&mut self) -> Result<(), AnalyzeError> {
        self.open("expression");
        self.term()?;

        // Speculatively consume one token to test for a continuation
        // operator; push it back when the chain ends.
        while self.cursor.has_next() {
            let token = self.cursor.advance()?;
            match token.symbol_id() {
                Some(id) if symbols::is_binary(id) => {
                    self.emit(token);
                    self.term()?;
                }
                _ => {
                    self.cursor.retreat()?;
                    break;
                }
            }
        }

        self.close("expression");
        Ok(())
    }

    /// `term := integerConstant | stringConstant | keywordConstant
    ///        | identifier (arrayAccess | subroutineCallTail)?
    ///        | '(' expression ')' | unaryOp term`
    fn term(&mut self) -> Result<(), AnalyzeError> {
        self.open("term");
        let token = self.take("term", "a term")?;
        match &token.kind {
            TokenKind::Int(_) | TokenKind::Str(_) => self.emit(token),

            TokenKind::Keyword(KeywordId::True | KeywordId::False | KeywordId::Null | KeywordId::This) => {
                self.emit(token);
            }

            TokenKind::Ident(_) => {
                self.emit(token);
                self.identifier_tail()?;
            }

            TokenKind::Symbol(SymbolId::LParen) => {
                self.emit(token);
                self.expression()?;
                self.expect_symbol(SymbolId::RParen, "term")?;
            }

            TokenKind::Symbol(id) if symbols::is_unary(*id) => {
                self.emit(token);
                self.term()?;
            }

            _ => return Err(self.unexpected("term", "a term", token)),
        }
        self.close("term");
        Ok(())
    }

    /// Optional tail after an identifier term: array access, a direct call, or
    /// a dotted call. A bare identifier is a variable reference.
    fn identifier_tail(&mut self) -> Result<(), AnalyzeError> {
        if self.peek_symbol(SymbolId::LBracket) {
            self.expect_symbol(SymbolId::LBracket, "term")?;
            self.expression()?;
            self.expect_symbol(SymbolId::RBracket, "term")?;
        } else if self.peek_symbol(SymbolId::LParen) {
            self.call_arguments("term")?;
        } else if self.peek_symbol(SymbolId::Dot) {
            self.expect_symbol(SymbolId::Dot, "term")?;
            self.expect_identifier("term")?;
            self.call_arguments("term")?;
        }
        Ok(())
    }

    /// `subroutineCall := identifier ('.' identifier)? '(' expressionList ')'`
    ///
    /// Emits its tokens inline into the enclosing production.
    fn subroutine_call(&mut self, production: &'static str) -> Result<(), AnalyzeError> {
        self.expect_identifier(production)?;
        if self.peek_symbol(SymbolId::Dot) {
            self.expect_symbol(SymbolId::Dot, production)?;
            self.expect_identifier(production)?;
        }
        self.call_arguments(production)
    }

    /// `'(' expressionList ')'` argument tail shared by both call forms.
    fn call_arguments(&mut self, production: &'static str) -> Result<(), AnalyzeError> {
        self.expect_symbol(SymbolId::LParen, production)?;
        self.expression_list()?;
        self.expect_symbol(SymbolId::RParen, production)?;
        Ok(())
    }

    /// `expressionList := ( expression (',' expression)* )?`
    ///
    /// The enclosing parentheses belong to the call; an empty list still emits
    /// its tag pair.
    fn expression_list(&mut self) -> Result<(), AnalyzeError> {
        self.open("expressionList");
        if !self.peek_symbol(SymbolId::RParen) {
            loop {
                self.expression()?;

                if !self.cursor.has_next() {
                    break;
                }
                let token = self.cursor.advance()?;
                if token.kind.is_symbol(SymbolId::Comma) {
                    self.emit(token);
                } else {
                    self.cursor.retreat()?;
                    break;
                }
            }
        }
        self.close("expressionList");
        Ok(())
    }
}
