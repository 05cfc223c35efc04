/// Statement productions: `statements`, `letStatement`, `ifStatement`,
/// `whileStatement`, `doStatement`, `returnStatement`.
impl<'a> GrammarEngine<'a> {
    /// `statements := statement*`
    ///
    /// The loop ends at the first token that cannot start a statement, without
    /// consuming it; the enclosing production owns whatever follows.
    fn statements(&mut self) -> Result<(), AnalyzeError> {
        self.open("statements");
        loop {
            match self.cursor.peek().and_then(|t| t.kind.keyword_id()) {
                Some(KeywordId::Let) => self.let_statement()?,
                Some(KeywordId::If) => self.if_statement()?,
                Some(KeywordId::While) => self.while_statement()?,
                Some(KeywordId::Do) => self.do_statement()?,
                Some(KeywordId::Return) => self.return_statement()?,
                _ => break,
            }
        }
        self.close("statements");
        Ok(())
    }

    /// `letStatement := 'let' identifier ('[' expression ']')? '=' expression ';'`
    fn let_statement(&mut self) -> Result<(), AnalyzeError> {
        self.open("letStatement");
        self.expect_keyword(KeywordId::Let, "letStatement")?;
        self.expect_identifier("letStatement")?;

        if self.peek_symbol(SymbolId::LBracket) {
            self.expect_symbol(SymbolId::LBracket, "letStatement")?;
            self.expression()?;
            self.expect_symbol(SymbolId::RBracket, "letStatement")?;
        }

        self.expect_symbol(SymbolId::Eq, "letStatement")?;
        self.expression()?;
        self.expect_symbol(SymbolId::Semicolon, "letStatement")?;
        self.close("letStatement");
        Ok(())
    }

    /// `ifStatement := 'if' '(' expression ')' '{' statements '}'
    ///                  ('else' '{' statements '}')?`
    fn if_statement(&mut self) -> Result<(), AnalyzeError> {
        self.open("ifStatement");
        self.expect_keyword(KeywordId::If, "ifStatement")?;
        self.expect_symbol(SymbolId::LParen, "ifStatement")?;
        self.expression()?;
        self.expect_symbol(SymbolId::RParen, "ifStatement")?;
        self.expect_symbol(SymbolId::LBrace, "ifStatement")?;
        self.statements()?;
        self.expect_symbol(SymbolId::RBrace, "ifStatement")?;

        if self.peek_keyword(KeywordId::Else) {
            self.expect_keyword(KeywordId::Else, "ifStatement")?;
            self.expect_symbol(SymbolId::LBrace, "ifStatement")?;
            self.statements()?;
            self.expect_symbol(SymbolId::RBrace, "ifStatement")?;
        }

        self.close("ifStatement");
        Ok(())
    }

    /// `whileStatement := 'while' '(' expression ')' '{' statements '}'`
    fn while_statement(&mut self) -> Result<(), AnalyzeError> {
        self.open("whileStatement");
        self.expect_keyword(KeywordId::While, "whileStatement")?;
        self.expect_symbol(SymbolId::LParen, "whileStatement")?;
        self.expression()?;
        self.expect_symbol(SymbolId::RParen, "whileStatement")?;
        self.expect_symbol(SymbolId::LBrace, "whileStatement")?;
        self.statements()?;
        self.expect_symbol(SymbolId::RBrace, "whileStatement")?;
        self.close("whileStatement");
        Ok(())
    }

    /// `doStatement := 'do' subroutineCall ';'`
    fn do_statement(&mut self) -> Result<(), AnalyzeError> {
        self.open("doStatement");
        self.expect_keyword(KeywordId::Do, "doStatement")?;
        self.subroutine_call("doStatement")?;
        self.expect_symbol(SymbolId::Semicolon, "doStatement")?;
        self.close("doStatement");
        Ok(())
    }

    /// `returnStatement := 'return' expression? ';'`
    fn return_statement(&mut self) -> Result<(), AnalyzeError> {
        self.open("returnStatement");
        self.expect_keyword(KeywordId::Return, "returnStatement")?;
        if !self.peek_symbol(SymbolId::Semicolon) {
            self.expression()?;
        }
        self.expect_symbol(SymbolId::Semicolon, "returnStatement")?;
        self.close("returnStatement");
        Ok(())
    }
}
