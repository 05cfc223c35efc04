//! Lexer for the Jack language.
//!
//! Handles tokenization including:
//! - Keywords (class, function, let, while, etc.)
//! - Single-character symbols
//! - Identifiers, integer constants, and string constants
//! - Comment stripping (`//` line comments, `/* ... */` block comments)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! The lexer is a pure function of its input text: the same source always
//! yields the same token sequence, and no token is ever re-lexed.

pub mod tokens;

pub use tokens::{Token, TokenKind, xml_escape};

use crate::diagnostics::LexError;
use crate::span::Span;
use jackal_core::lang::{keywords, symbols};

/// Largest value an integer constant may carry.
const INT_MAX: u32 = 32767;

/// Lexer for Jack source code.
///
/// Converts the source text of one compilation unit into a token sequence,
/// stripping comments and whitespace along the way. The first malformed
/// construct aborts the unit; there is no error recovery.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace();

            let start = self.current_pos;
            let Some(c) = self.advance() else {
                break;
            };

            match c {
                // Comments, or the division symbol
                '/' => {
                    if self.match_char('/') {
                        self.skip_line_comment();
                    } else if self.match_char('*') {
                        self.skip_block_comment(start)?;
                    } else {
                        self.add_symbol(symbols::SymbolId::Slash, start);
                    }
                }

                // String constants
                '"' => self.scan_string(start)?,

                // Integer constants
                '0'..='9' => self.scan_number(start)?,

                // Identifiers and keywords
                _ if is_ident_start(c) => self.scan_identifier(start),

                _ => match symbols::from_char(c) {
                    Some(id) => self.add_symbol(id, start),
                    None => {
                        return Err(LexError::UnexpectedChar {
                            ch: c,
                            span: Span::new(start, self.current_pos),
                        });
                    }
                },
            }
        }

        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment. Block comments do not nest.
    fn skip_block_comment(&mut self, start: usize) -> Result<(), LexError> {
        while let Some(c) = self.advance() {
            if c == '*' && self.match_char('/') {
                return Ok(());
            }
        }
        Err(LexError::UnterminatedComment {
            span: Span::new(start, start + 2),
        })
    }

    // ========================================================================
    // Token scanning
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_symbol(&mut self, id: symbols::SymbolId, start: usize) {
        self.add_token(TokenKind::Symbol(id), start);
    }

    /// Scan a double-quoted string constant. The quotes are not part of the
    /// token text; an embedded newline or end of input is an error.
    fn scan_string(&mut self, start: usize) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some('"') => {
                    let text = self.source[start + 1..self.current_pos].to_string();
                    self.advance();
                    self.add_token(TokenKind::Str(text), start);
                    return Ok(());
                }
                Some('\n') | None => {
                    return Err(LexError::UnterminatedString {
                        span: Span::new(start, self.current_pos),
                    });
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Scan an unsigned decimal integer constant and range-check it.
    fn scan_number(&mut self, start: usize) -> Result<(), LexError> {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.current_pos];
        let span = Span::new(start, self.current_pos);
        match text.parse::<u32>() {
            Ok(value) if value <= INT_MAX => {
                self.add_token(TokenKind::Int(value as u16), start);
                Ok(())
            }
            _ => Err(LexError::IntOutOfRange {
                text: text.to_string(),
                span,
            }),
        }
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Look up the spelling in the reserved-word registry (no allocation for keywords).
        if let Some(id) = keywords::from_str(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jackal_core::lang::keywords::KeywordId;
    use jackal_core::lang::symbols::SymbolId;

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|err| panic!("lex({:?}) failed: {:?}", k.canonical, err));
            assert_eq!(
                tokens.len(),
                1,
                "expected a single token for keyword {:?}, got {:?}",
                k.id,
                tokens
            );
            assert!(tokens[0].kind.is_keyword(k.id));
        }
    }

    #[test]
    fn test_symbol_registry_parity() {
        for s in symbols::SYMBOLS {
            let source = s.canonical.to_string();
            let tokens = lex(&source).unwrap_or_else(|err| panic!("lex({:?}) failed: {:?}", source, err));
            assert_eq!(
                tokens.len(),
                1,
                "expected a single token for symbol {:?}, got {:?}",
                s.id,
                tokens
            );
            assert!(tokens[0].kind.is_symbol(s.id));
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = lex("class Main field x classy").unwrap();
        assert!(tokens[0].kind.is_keyword(KeywordId::Class));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "Main"));
        assert!(tokens[2].kind.is_keyword(KeywordId::Field));
        assert!(matches!(&tokens[3].kind, TokenKind::Ident(s) if s == "x"));
        // Prefix of a keyword is still an identifier
        assert!(matches!(&tokens[4].kind, TokenKind::Ident(s) if s == "classy"));
    }

    #[test]
    fn test_symbols_without_whitespace() {
        let tokens = lex("x[i]=-1;").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("x".to_string()),
                TokenKind::Symbol(SymbolId::LBracket),
                TokenKind::Ident("i".to_string()),
                TokenKind::Symbol(SymbolId::RBracket),
                TokenKind::Symbol(SymbolId::Eq),
                TokenKind::Symbol(SymbolId::Minus),
                TokenKind::Int(1),
                TokenKind::Symbol(SymbolId::Semicolon),
            ]
        );
    }

    #[test]
    fn test_integer_bounds() {
        let tokens = lex("0 42 32767").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::Int(0)));
        assert!(matches!(tokens[1].kind, TokenKind::Int(42)));
        assert!(matches!(tokens[2].kind, TokenKind::Int(32767)));

        assert!(matches!(lex("32768"), Err(LexError::IntOutOfRange { .. })));
        // Far past u32 as well
        assert!(matches!(lex("99999999999999999999"), Err(LexError::IntOutOfRange { .. })));
    }

    #[test]
    fn test_string_constant() {
        let tokens = lex(r#"let s = "hello, world";"#).unwrap();
        assert!(matches!(&tokens[3].kind, TokenKind::Str(s) if s == "hello, world"));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(lex(r#""no closing quote"#), Err(LexError::UnterminatedString { .. })));
        assert!(matches!(
            lex("\"split\nacross lines\""),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_line_comment() {
        let tokens = lex("let x; // trailing comment\nlet y;").unwrap();
        assert_eq!(tokens.len(), 6);
        assert!(tokens[0].kind.is_keyword(KeywordId::Let));
        assert!(matches!(&tokens[4].kind, TokenKind::Ident(s) if s == "y"));
    }

    #[test]
    fn test_block_comment() {
        let tokens = lex("let /* inline */ x /* spans\nlines */ ;").unwrap();
        assert_eq!(tokens.len(), 3);
        // Block comments do not nest: the first `*/` closes
        let tokens = lex("/* outer /* inner */ x").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "x"));
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert!(matches!(lex("/* never closed"), Err(LexError::UnterminatedComment { .. })));
    }

    #[test]
    fn test_slash_is_still_division() {
        let tokens = lex("a / b").unwrap();
        assert!(tokens[1].kind.is_symbol(SymbolId::Slash));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("let x = 1 # 2;").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '#', .. }));
    }

    #[test]
    fn test_spans_cover_source() {
        let source = r#"class Main"#;
        let tokens = lex(source).unwrap();
        assert_eq!(&source[tokens[0].span.start..tokens[0].span.end], "class");
        assert_eq!(&source[tokens[1].span.start..tokens[1].span.end], "Main");
    }

    #[test]
    fn test_lexing_is_deterministic() {
        let source = r#"class Main { function void run() { do Output.printString("hi"); return; } }"#;
        assert_eq!(lex(source), lex(source));
    }

    #[test]
    fn test_empty_and_comment_only_input() {
        assert_eq!(lex("").unwrap(), vec![]);
        assert_eq!(lex("   \n\t ").unwrap(), vec![]);
        assert_eq!(lex("// only a comment").unwrap(), vec![]);
        assert_eq!(lex("/* only a comment */").unwrap(), vec![]);
    }
}
