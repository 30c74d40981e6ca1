#![forbid(unsafe_code)]

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

const SYMBOLS: &str = "+-*/=()<>,;";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unexpected character {ch:?} at byte offset {offset}")]
pub struct TokenizeError {
    pub ch: char,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
    Symbol(char),
}

////////////////////////////////////////////////////////////////////////////////

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    // Consumes the run of characters satisfying `keep` and returns it as one
    // slice of the input.
    fn take_run<F>(&mut self, keep: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, ch)| !keep(ch))
            .map(|(offset, _)| offset)
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();
        let ch = self.rest().chars().next()?;
        if ch.is_alphabetic() {
            return Some(Ok(Token::Word(self.take_run(char::is_alphabetic))));
        }
        if ch.is_ascii_digit() {
            return Some(Ok(Token::Number(
                self.take_run(|ch| ch.is_ascii_digit()),
            )));
        }
        if SYMBOLS.contains(ch) {
            self.pos += ch.len_utf8();
            return Some(Ok(Token::Symbol(ch)));
        }
        self.failed = true;
        Some(Err(TokenizeError {
            ch,
            offset: self.pos,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////

pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, TokenizeError> {
    Tokenizer::new(input).collect()
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_numbers_and_symbols() {
        assert_eq!(
            tokenize("sum = alpha + 42").unwrap(),
            vec![
                Token::Word("sum"),
                Token::Symbol('='),
                Token::Word("alpha"),
                Token::Symbol('+'),
                Token::Number("42"),
            ]
        );
    }

    #[test]
    fn adjacent_tokens_need_no_whitespace() {
        assert_eq!(
            tokenize("f(x,10)").unwrap(),
            vec![
                Token::Word("f"),
                Token::Symbol('('),
                Token::Word("x"),
                Token::Symbol(','),
                Token::Number("10"),
                Token::Symbol(')'),
            ]
        );
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(tokenize("").unwrap(), Vec::new());
        assert_eq!(tokenize("  \t\n ").unwrap(), Vec::new());
    }

    #[test]
    fn reports_unexpected_character_with_offset() {
        let err = tokenize("ab @cd").unwrap_err();
        assert_eq!(err, TokenizeError { ch: '@', offset: 3 });
    }

    #[test]
    fn stops_after_first_error() {
        let mut tokenizer = Tokenizer::new("x # y");
        assert_eq!(tokenizer.next(), Some(Ok(Token::Word("x"))));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn digit_run_is_one_number() {
        assert_eq!(
            tokenize("007 12345").unwrap(),
            vec![Token::Number("007"), Token::Number("12345")]
        );
    }
}
