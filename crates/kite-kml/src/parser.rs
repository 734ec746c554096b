use crate::ast::{Document, Import, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Spanned, Token};

/// Recursive-descent parser over a token vector.
///
/// Grammar:
/// ```text
/// document := import* node EOF
/// import   := "import" STR "as" IDENT
/// node     := IDENT block?
/// block    := "{" (prop | node)* "}"
/// prop     := IDENT ":" value
/// value    := STR | NUMBER | COLOR | IDENT | "[" (value ("," value)* ","?)? "]"
/// ```
///
/// Blocks and lists may nest at most [`MAX_NESTING`] deep.
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

/// Deepest allowed combination of nested `{ }` blocks and `[ ]` lists.
pub const MAX_NESTING: usize = 64;

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map_or(&Token::Eof, |t| &t.token)
    }

    fn here(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or((1, 1), |t| (t.line, t.col))
    }

    fn bump(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn error(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.here();
        ParseError::new(msg, line, col)
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(format!("nesting too deep (limit {MAX_NESTING})")));
        }
        self.depth += 1;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if *self.peek() == expected {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected {expected:?}, found {:?}", self.peek())))
        }
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(_) => match self.bump() {
                Token::Ident(s) => Ok(s),
                _ => unreachable!(),
            },
            other => Err(self.error(format!("expected identifier, found {other:?}"))),
        }
    }

    // ── document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut imports = Vec::new();
        while *self.peek() == Token::Import {
            imports.push(self.import()?);
        }

        let root = self.node()?;

        if *self.peek() != Token::Eof {
            return Err(self.error(format!(
                "expected end of document after the root node, found {:?}",
                self.peek()
            )));
        }

        Ok(Document { imports, root })
    }

    fn import(&mut self) -> Result<Import, ParseError> {
        self.expect(Token::Import)?;
        let path = match self.bump() {
            Token::Str(s) => s,
            other => return Err(self.error(format!("expected import path string, found {other:?}"))),
        };
        self.expect(Token::As)?;
        let alias = self.ident()?;
        Ok(Import { path, alias })
    }

    // ── node ──────────────────────────────────────────────────────────────

    fn node(&mut self) -> Result<Node, ParseError> {
        let (line, col) = self.here();
        let widget = self.ident()?;

        if let Token::Str(_) = self.peek() {
            return Err(self.error(format!(
                "`{widget}` takes no inline text; use a `key: value` property"
            )));
        }

        let mut node = Node { widget, props: Vec::new(), children: Vec::new(), line, col };
        if *self.peek() == Token::LBrace {
            self.block(&mut node)?;
        }
        Ok(node)
    }

    /// `Ident ":"` starts a property; any other `Ident` starts a child node.
    fn block(&mut self, node: &mut Node) -> Result<(), ParseError> {
        let (open_line, open_col) = self.here();
        self.descend()?;
        self.expect(Token::LBrace)?;

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.bump();
                    self.depth -= 1;
                    return Ok(());
                }
                Token::Eof => {
                    return Err(ParseError::new(
                        format!("'{{' opened for {} is never closed", node.widget),
                        open_line,
                        open_col,
                    ));
                }
                Token::Ident(_) if *self.peek_at(1) == Token::Colon => {
                    let prop = self.prop()?;
                    if node.find_prop(&prop.key).is_some() {
                        return Err(ParseError::new(
                            format!("duplicate property `{}` on {}", prop.key, node.widget),
                            prop.line,
                            prop.col,
                        ));
                    }
                    node.props.push(prop);
                }
                Token::Ident(_) => node.children.push(self.node()?),
                other => {
                    return Err(self.error(format!(
                        "unexpected {other:?} in block; expected `key: value` or a widget name"
                    )));
                }
            }
        }
    }

    fn prop(&mut self) -> Result<Prop, ParseError> {
        let (line, col) = self.here();
        let key = self.ident()?;
        self.expect(Token::Colon)?;
        let value = self.value()?;
        Ok(Prop { key, value, line, col })
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Token::LBracket => self.list(),
            Token::Str(_) | Token::Number(_) | Token::Color(_) | Token::Ident(_) => {
                Ok(match self.bump() {
                    Token::Str(s) => Value::Str(s),
                    Token::Number(n) => Value::Number(n),
                    Token::Color(c) => Value::Color(c),
                    Token::Ident(s) => Value::Ident(s),
                    _ => unreachable!(),
                })
            }
            other => Err(self.error(format!("expected a value, found {other:?}"))),
        }
    }

    fn list(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.expect(Token::LBracket)?;
        let mut items = Vec::new();
        loop {
            if *self.peek() == Token::RBracket {
                self.bump();
                self.depth -= 1;
                return Ok(Value::List(items));
            }
            items.push(self.value()?);
            match self.peek() {
                Token::Comma => {
                    self.bump();
                }
                Token::RBracket => {}
                other => return Err(self.error(format!("expected ',' or ']' in list, found {other:?}"))),
            }
        }
    }
}

// ── entry point ───────────────────────────────────────────────────────────

/// Parses a `.kml` source string into a [`Document`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
