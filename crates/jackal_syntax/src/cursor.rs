//! Bidirectional single-step cursor over a token sequence.
//!
//! Recursive-descent productions frequently need one token of lookahead to
//! decide which alternative to take. The grammar engine models this as
//! "consume, test, possibly undo": a production speculatively consumes a token
//! with [`TokenCursor::advance`] and, when the alternative does not match,
//! restores it with [`TokenCursor::retreat`]. Exactly one level of pushback is
//! supported; a second retreat without an intervening advance is a contract
//! violation, not a recoverable condition.

use crate::diagnostics::CursorError;
use crate::lexer::Token;

/// Cursor over one compilation unit's token sequence.
///
/// The cursor is exclusively owned by one parse; it never mutates the
/// underlying sequence.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    /// Number of tokens consumed so far.
    pos: usize,
    /// True only immediately after an `advance`, cleared by `retreat`.
    retreat_armed: bool,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor positioned before the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            retreat_armed: false,
        }
    }

    /// Return `true` iff a token remains to be consumed.
    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Return the next token without moving, or `None` at end of sequence.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Result<&'a Token, CursorError> {
        let token = self.tokens.get(self.pos).ok_or(CursorError::AdvancePastEnd)?;
        self.pos += 1;
        self.retreat_armed = true;
        Ok(token)
    }

    /// Undo the most recent [`advance`](Self::advance).
    ///
    /// Valid only immediately after an advance; a double retreat, or a retreat
    /// before the first advance, fails with
    /// [`CursorError::RetreatWithoutAdvance`].
    pub fn retreat(&mut self) -> Result<(), CursorError> {
        if !self.retreat_armed {
            return Err(CursorError::RetreatWithoutAdvance);
        }
        debug_assert!(self.pos > 0);
        self.pos -= 1;
        self.retreat_armed = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn test_advance_walks_the_sequence() {
        let tokens = lex("class Main {").unwrap();
        let mut cursor = TokenCursor::new(&tokens);

        assert!(cursor.has_next());
        assert_eq!(cursor.advance().unwrap(), &tokens[0]);
        assert_eq!(cursor.advance().unwrap(), &tokens[1]);
        assert_eq!(cursor.advance().unwrap(), &tokens[2]);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_peek_does_not_move() {
        let tokens = lex("let x;").unwrap();
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(cursor.peek(), Some(&tokens[0]));
        assert_eq!(cursor.peek(), Some(&tokens[0]));
        cursor.advance().unwrap();
        assert_eq!(cursor.peek(), Some(&tokens[1]));
    }

    #[test]
    fn test_peek_none_at_end() {
        let tokens = lex("x").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance().unwrap();
        assert_eq!(cursor.peek(), None);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_advance_past_end_fails() {
        let tokens = lex("x").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance().unwrap();
        assert_eq!(cursor.advance(), Err(CursorError::AdvancePastEnd));
    }

    #[test]
    fn test_retreat_undoes_one_advance() {
        let tokens = lex("let x;").unwrap();
        let mut cursor = TokenCursor::new(&tokens);

        cursor.advance().unwrap();
        let second = cursor.advance().unwrap();
        cursor.retreat().unwrap();
        // The pushed-back token comes out again
        assert_eq!(cursor.advance().unwrap(), second);
    }

    #[test]
    fn test_retreat_before_any_advance_fails() {
        let tokens = lex("x").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.retreat(), Err(CursorError::RetreatWithoutAdvance));
    }

    #[test]
    fn test_double_retreat_fails() {
        let tokens = lex("let x;").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        cursor.retreat().unwrap();
        assert_eq!(cursor.retreat(), Err(CursorError::RetreatWithoutAdvance));
    }

    #[test]
    fn test_retreat_at_end_then_advance() {
        let tokens = lex("x").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        let only = cursor.advance().unwrap();
        assert!(!cursor.has_next());
        cursor.retreat().unwrap();
        assert!(cursor.has_next());
        assert_eq!(cursor.advance().unwrap(), only);
    }
}
