use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Str(String),
    Number(f32),
    /// Straight-alpha bytes from `#rrggbb` (alpha 255) or `#rrggbbaa`.
    Color([u8; 4]),
    Colon,
    Comma,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Import,
    As,
    Eof,
}

/// A token and the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    rest: std::iter::Peekable<std::str::Chars<'s>>,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { rest: src.chars().peekable(), line: 1, col: 1 }
    }

    /// Lexes the whole source. The last token is always [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut out = Vec::new();
        loop {
            self.skip_trivia()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token(line, col)?;
            let done = token == Token::Eof;
            out.push(Spanned { token, line, col });
            if done {
                return Ok(out);
            }
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.rest.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.rest.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.bump();
        }
        s
    }

    /// Skips whitespace, `// line` and `/* block */` comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            self.bump_while(char::is_whitespace);
            if self.peek() != Some('/') {
                return Ok(());
            }
            let (line, col) = (self.line, self.col);
            self.bump();
            match self.bump() {
                Some('/') => {
                    self.bump_while(|c| c != '\n');
                }
                Some('*') => {
                    let mut prev = '\0';
                    loop {
                        match self.bump() {
                            Some('/') if prev == '*' => break,
                            Some(c) => prev = c,
                            None => return Err(ParseError::new("unterminated block comment", line, col)),
                        }
                    }
                }
                _ => return Err(ParseError::new("stray '/'", line, col)),
            }
        }
    }

    fn next_token(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        let Some(c) = self.peek() else {
            return Ok(Token::Eof);
        };

        let punct = match c {
            ':' => Some(Token::Colon),
            ',' => Some(Token::Comma),
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            '[' => Some(Token::LBracket),
            ']' => Some(Token::RBracket),
            _ => None,
        };
        if let Some(tok) = punct {
            self.bump();
            return Ok(tok);
        }

        match c {
            '"' => self.string(line, col),
            '#' => self.color(line, col),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.number(line, col),
            c if c.is_alphabetic() || c == '_' => Ok(self.word()),
            other => Err(ParseError::new(format!("unexpected character {other:?}"), line, col)),
        }
    }

    fn string(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        self.bump();
        let mut s = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(s)),
                Some('\\') => match self.bump() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c @ ('"' | '\\')) => s.push(c),
                    Some(c) => {
                        return Err(ParseError::new(format!("unknown escape \\{c}"), self.line, self.col));
                    }
                    None => break,
                },
                Some(c) => s.push(c),
                None => break,
            }
        }
        Err(ParseError::new("unterminated string literal", line, col))
    }

    fn color(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        self.bump();
        let hex = self.bump_while(|c| c.is_ascii_alphanumeric());
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::new(
                format!("color literal must be #rrggbb or #rrggbbaa, got #{hex}"),
                line,
                col,
            ));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let a = if hex.len() == 8 { byte(6) } else { 255 };
        Ok(Token::Color([byte(0), byte(2), byte(4), a]))
    }

    fn number(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }
        text.push_str(&self.bump_while(|c| c.is_ascii_digit() || c == '.'));
        text.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {text:?}"), line, col))
    }

    fn word(&mut self) -> Token {
        let w = self.bump_while(|c| c.is_alphanumeric() || c == '_');
        match w.as_str() {
            "import" => Token::Import,
            "as" => Token::As,
            _ => Token::Ident(w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn punctuation_and_literals() {
        assert_eq!(
            kinds(r#"Diamond { width: 10.5 tints: [#ff0000, #00000080] }"#),
            vec![
                Token::Ident("Diamond".into()),
                Token::LBrace,
                Token::Ident("width".into()),
                Token::Colon,
                Token::Number(10.5),
                Token::Ident("tints".into()),
                Token::Colon,
                Token::LBracket,
                Token::Color([255, 0, 0, 255]),
                Token::Comma,
                Token::Color([0, 0, 0, 128]),
                Token::RBracket,
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_one_based_and_track_newlines() {
        let toks = Lexer::new("Column {\n  gap: 4\n}").tokenize().unwrap();
        assert_eq!((toks[0].line, toks[0].col), (1, 1));
        assert_eq!((toks[2].line, toks[2].col), (2, 3)); // `gap`
        assert_eq!((toks[5].line, toks[5].col), (3, 1)); // `}`
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("// head\nTriangle /* inline */ { }"),
            vec![Token::Ident("Triangle".into()), Token::LBrace, Token::RBrace, Token::Eof]
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(
            kinds(r#"import "a.kml" as A"#),
            vec![Token::Import, Token::Str("a.kml".into()), Token::As, Token::Ident("A".into()), Token::Eof]
        );
    }

    #[test]
    fn bad_color_reports_position() {
        let err = Lexer::new("X {\n c: #12345 }").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (2, 5));
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        assert!(Lexer::new("/* never closed").tokenize().is_err());
    }
}
