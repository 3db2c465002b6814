use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Select,
    From,
    Where,
    And,
    Or,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Create,
    Table,
    Drop,

    // Operators
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Punctuation
    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    Dot,

    // Literals
    Identifier,
    String,
    Number,

    Eof,
    Unknown,
}

impl TokenKind {
    fn keyword(word: &str) -> Option<Self> {
        Some(match word.to_ascii_uppercase().as_str() {
            "SELECT" => Self::Select,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "AND" => Self::And,
            "OR" => Self::Or,
            "INSERT" => Self::Insert,
            "INTO" => Self::Into,
            "VALUES" => Self::Values,
            "UPDATE" => Self::Update,
            "SET" => Self::Set,
            "DELETE" => Self::Delete,
            "CREATE" => Self::Create,
            "TABLE" => Self::Table,
            "DROP" => Self::Drop,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Table => "TABLE",
            Self::Drop => "DROP",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::Less => "LESS",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::LessEqual => "LESS_EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Dot => "DOT",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Eof => "EOF",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token with the 1-based line and column of its first character.
///
/// `value` is the exact source text of the token, so string literals keep
/// their quotes here; the parser strips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind, value: value.into(), line, column }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "{} '{}'", self.kind, self.value)
        }
    }
}

/// Turns query text into tokens.
///
/// Tokenizing never fails: a character that starts no token becomes a
/// `TokenKind::Unknown` token and scanning resumes after it. Whitespace and
/// comments (`-- ...` to end of line, `/* ... */`) are skipped.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Tokenizer { input, pos: 0, line: 1, column: 1 }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes `len` bytes, tracking line breaks, and returns the consumed slice.
    fn bump(&mut self, len: usize) -> &'a str {
        let input = self.input;
        let text = &input[self.pos..self.pos + len];
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += len;
        text
    }

    // Length of the leading whitespace or comment, if the input starts with one.
    fn trivia_len(&self) -> Option<usize> {
        let rest = self.rest();
        let whitespace: usize =
            rest.chars().take_while(|c| c.is_whitespace()).map(char::len_utf8).sum();
        if whitespace > 0 {
            return Some(whitespace);
        }
        if rest.starts_with("--") {
            return Some(rest.find('\n').unwrap_or(rest.len()));
        }
        if rest.starts_with("/*") {
            // An unterminated block comment is not a comment.
            return rest[2..].find("*/").map(|end| end + 4);
        }
        None
    }

    fn identifier_len(rest: &str) -> usize {
        rest.char_indices()
            .find(|&(i, c)| {
                !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit()))
            })
            .map_or(rest.len(), |(i, _)| i)
    }

    fn number_len(rest: &str) -> usize {
        let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();
        let whole = digits(rest);
        let after = &rest[whole..];
        if after.starts_with('.') {
            let fraction = digits(&after[1..]);
            if fraction > 0 {
                return whole + 1 + fraction;
            }
        }
        whole
    }

    // Two-character operators are tried before their one-character prefixes.
    fn operator(rest: &str) -> Option<(TokenKind, usize)> {
        let two = match rest.get(..2) {
            Some("!=" | "<>") => Some(TokenKind::NotEqual),
            Some(">=") => Some(TokenKind::GreaterEqual),
            Some("<=") => Some(TokenKind::LessEqual),
            _ => None,
        };
        if let Some(kind) = two {
            return Some((kind, 2));
        }
        let kind = match rest.chars().next()? {
            '=' => TokenKind::Equal,
            '>' => TokenKind::Greater,
            '<' => TokenKind::Less,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '.' => TokenKind::Dot,
            _ => return None,
        };
        Some((kind, 1))
    }

    fn next_token(&mut self) -> Option<Token> {
        while let Some(len) = self.trivia_len() {
            self.bump(len);
        }

        let ch = self.peek_char()?;
        let (line, column) = (self.line, self.column);
        let rest = self.rest();

        let (kind, len) = if ch == '_' || ch.is_ascii_alphabetic() {
            let len = Self::identifier_len(rest);
            (TokenKind::keyword(&rest[..len]).unwrap_or(TokenKind::Identifier), len)
        } else if ch.is_ascii_digit() {
            (TokenKind::Number, Self::number_len(rest))
        } else if ch == '\'' || ch == '"' {
            match rest[1..].find(ch) {
                Some(end) => (TokenKind::String, end + 2),
                None => (TokenKind::Unknown, 1),
            }
        } else {
            Self::operator(rest).unwrap_or((TokenKind::Unknown, ch.len_utf8()))
        };

        let text = self.bump(len);
        Some(Token::new(kind, text, line, column))
    }

    /// Produces the full token sequence, always ending in exactly one EOF token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::Eof, "", self.line, self.column));
        tracing::trace!(count = tokens.len(), "tokenized input");
        tokens
    }
}
