/// Declaration productions: `class`, `classVarDec`, `subroutineDec`,
/// `parameterList`, `subroutineBody`, `varDec`, and the shared `type` rule.
///
/// Declaration alternatives decide by peeking: a `classVarDec`/`subroutineDec`
/// /`varDec` that does not match at the current position consumes zero tokens,
/// so sibling alternatives in a `*` loop can try next or the loop can end.
impl<'a> GrammarEngine<'a> {
    /// `class := 'class' identifier '{' classVarDec* subroutineDec* '}'`
    fn class(&mut self) -> Result<(), AnalyzeError> {
        self.open("class");
        self.expect_keyword(KeywordId::Class, "class")?;
        self.expect_identifier("class")?;
        self.expect_symbol(SymbolId::LBrace, "class")?;

        while self.peek_keyword(KeywordId::Static) || self.peek_keyword(KeywordId::Field) {
            self.class_var_dec()?;
        }
        while self.peek_keyword(KeywordId::Constructor)
            || self.peek_keyword(KeywordId::Function)
            || self.peek_keyword(KeywordId::Method)
        {
            self.subroutine_dec()?;
        }

        self.expect_symbol(SymbolId::RBrace, "class")?;
        self.close("class");
        Ok(())
    }

    /// `classVarDec := ('static'|'field') type varName (',' varName)* ';'`
    fn class_var_dec(&mut self) -> Result<(), AnalyzeError> {
        self.open("classVarDec");
        // Caller peeked `static`/`field`.
        let keyword = self.take("classVarDec", "`static` or `field`")?;
        self.emit(keyword);
        self.var_name_list("classVarDec")?;
        self.close("classVarDec");
        Ok(())
    }

    /// `varDec := 'var' type varName (',' varName)* ';'`
    fn var_dec(&mut self) -> Result<(), AnalyzeError> {
        self.open("varDec");
        self.expect_keyword(KeywordId::Var, "varDec")?;
        self.var_name_list("varDec")?;
        self.close("varDec");
        Ok(())
    }

    /// Shared tail of `classVarDec` and `varDec`: a type followed by one or
    /// more comma-separated names and a terminating `;`.
    ///
    /// Iterative on purpose: recursion depth must not scale with the length of
    /// a name list.
    fn var_name_list(&mut self, production: &'static str) -> Result<(), AnalyzeError> {
        self.type_token(production)?;
        self.expect_identifier(production)?;
        while self.peek_symbol(SymbolId::Comma) {
            self.expect_symbol(SymbolId::Comma, production)?;
            self.expect_identifier(production)?;
        }
        self.expect_symbol(SymbolId::Semicolon, production)?;
        Ok(())
    }

    /// `type := 'int' | 'char' | 'boolean' | className`
    ///
    /// An identifier is a valid type only if it names a class declared
    /// somewhere in the run; an unknown identifier here is a hard error, never
    /// silently reinterpreted.
    fn type_token(&mut self, production: &'static str) -> Result<(), AnalyzeError> {
        let token = self.take(production, "a type")?;
        match &token.kind {
            TokenKind::Keyword(KeywordId::Int | KeywordId::Char | KeywordId::Boolean) => {
                self.emit(token);
                Ok(())
            }
            TokenKind::Ident(name) => {
                if self.classes.contains(name) {
                    self.emit(token);
                    Ok(())
                } else {
                    Err(SyntaxError::UnknownType {
                        production,
                        name: name.clone(),
                        span: token.span,
                    }
                    .into())
                }
            }
            _ => Err(self.unexpected(production, "a type", token)),
        }
    }

    /// `subroutineDec := ('constructor'|'function'|'method') ('void'|type)
    ///                    identifier '(' parameterList ')' subroutineBody`
    fn subroutine_dec(&mut self) -> Result<(), AnalyzeError> {
        self.open("subroutineDec");
        // Caller peeked `constructor`/`function`/`method`.
        let keyword = self.take("subroutineDec", "`constructor`, `function` or `method`")?;
        self.emit(keyword);

        if self.peek_keyword(KeywordId::Void) {
            self.expect_keyword(KeywordId::Void, "subroutineDec")?;
        } else {
            self.type_token("subroutineDec")?;
        }

        self.expect_identifier("subroutineDec")?;
        self.expect_symbol(SymbolId::LParen, "subroutineDec")?;
        self.parameter_list()?;
        self.expect_symbol(SymbolId::RParen, "subroutineDec")?;
        self.subroutine_body()?;
        self.close("subroutineDec");
        Ok(())
    }

    /// `parameterList := ( type identifier (',' type identifier)* )?`
    ///
    /// The enclosing parentheses belong to `subroutineDec`; an empty list
    /// still emits its tag pair.
    fn parameter_list(&mut self) -> Result<(), AnalyzeError> {
        self.open("parameterList");
        if !self.peek_symbol(SymbolId::RParen) {
            loop {
                self.type_token("parameterList")?;
                self.expect_identifier("parameterList")?;

                // Speculatively consume one token to test for a continuation
                // comma; push it back if the list ends here.
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
        self.close("parameterList");
        Ok(())
    }

    /// `subroutineBody := '{' varDec* statements '}'`
    fn subroutine_body(&mut self) -> Result<(), AnalyzeError> {
        self.open("subroutineBody");
        self.expect_symbol(SymbolId::LBrace, "subroutineBody")?;
        while self.peek_keyword(KeywordId::Var) {
            self.var_dec()?;
        }
        self.statements()?;
        self.expect_symbol(SymbolId::RBrace, "subroutineBody")?;
        self.close("subroutineBody");
        Ok(())
    }
}
