//! Lexical scanning of JavaScript source text.
//!
//! The scanner is deliberately shallow: it splits the text into tokens,
//! tracks bracket balance, and produces a masked copy of every line in which
//! string, template, regex and comment contents are blanked out. Rules work
//! from tokens or masked lines, so quoted text never triggers them.
//!
//! A source that cannot be scanned (unterminated string, comment, template
//! or regex, or unbalanced brackets) yields a [`ParseError`], which the
//! engine turns into a single fatal finding.

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifiers and keywords.
    Identifier,
    /// Numeric literals.
    Number,
    /// Single- or double-quoted string literals.
    String,
    /// A template literal chunk. A template with `${...}` expressions is
    /// split into chunks ending in `${` or starting with `}`.
    Template,
    /// Regular expression literals, flags included.
    Regex,
    /// Operators and punctuation.
    Punct,
}

/// A scanned token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-indexed line of the first character.
    pub line: usize,
    /// 1-indexed column of the first character.
    pub column: usize,
    /// Line just past the last character.
    pub end_line: usize,
    /// Column just past the last character.
    pub end_column: usize,
}

impl Token {
    /// Whether this token is the given punctuator.
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == punct
    }

    /// Whether this token is the given identifier or keyword.
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }
}

/// A source that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}

/// A scanned source file.
#[derive(Debug)]
pub struct SourceFile<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
    code_lines: Vec<String>,
    tokens: Vec<Token>,
}

impl<'a> SourceFile<'a> {
    /// Scan `text`, failing on the first lexical error.
    pub fn parse(text: &'a str) -> Result<Self, ParseError> {
        let (tokens, masked) = Scanner::new(text).run()?;
        let masked: String = masked.into_iter().collect();
        let code_lines = masked
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        let lines = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        Ok(Self {
            text,
            lines,
            code_lines,
            tokens,
        })
    }

    /// The original text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Raw lines without their terminators.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Lines with string, template, regex and comment contents blanked.
    pub fn code_lines(&self) -> &[String] {
        &self.code_lines
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Multi-character punctuators, longest first.
const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>",
];

/// Keywords after which a `/` starts a regular expression.
const REGEX_AFTER_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct Scanner {
    chars: Vec<char>,
    masked: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    /// Open brackets with their positions. `$` marks a template expression.
    brackets: Vec<(char, usize, usize)>,
}

impl Scanner {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self {
            masked: chars.clone(),
            chars,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            brackets: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = *self.chars.get(self.pos)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Blank the current character in the masked copy, then advance.
    fn blank_bump(&mut self) {
        if let Some(c) = self.masked.get_mut(self.pos) {
            if *c != '\n' && *c != '\r' {
                *c = ' ';
            }
        }
        self.bump();
    }

    fn push_token(&mut self, kind: TokenKind, start: usize, line: usize, column: usize) {
        self.tokens.push(Token {
            kind,
            text: self.chars[start..self.pos].iter().collect(),
            line,
            column,
            end_line: self.line,
            end_column: self.column,
        });
    }

    fn run(mut self) -> Result<(Vec<Token>, Vec<char>), ParseError> {
        if self.peek(0) == Some('#') && self.peek(1) == Some('!') {
            self.skip_line_comment();
        }

        while let Some(c) = self.peek(0) {
            let (start, line, column) = (self.pos, self.line, self.column);
            match c {
                c if c.is_whitespace() || c == '\u{feff}' => {
                    self.bump();
                }
                '/' if self.peek(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek(1) == Some('*') => self.skip_block_comment()?,
                '\'' | '"' => self.scan_string(c)?,
                '`' => {
                    self.bump();
                    self.scan_template(start, line, column)?;
                }
                '/' if self.regex_allowed() => self.scan_regex()?,
                c if c.is_ascii_digit()
                    || (c == '.' && self.peek(1).is_some_and(|n| n.is_ascii_digit())) =>
                {
                    self.scan_number()
                }
                c if is_ident_start(c) => self.scan_identifier(),
                _ => self.scan_punct()?,
            }
        }

        if !self.brackets.is_empty() {
            return Err(ParseError::new(
                "Unexpected end of input",
                self.line,
                self.column,
            ));
        }

        Ok((self.tokens, self.masked))
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.blank_bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let (line, column) = (self.line, self.column);
        self.blank_bump();
        self.blank_bump();
        loop {
            match self.peek(0) {
                None => return Err(ParseError::new("Unterminated comment", line, column)),
                Some('*') if self.peek(1) == Some('/') => {
                    self.blank_bump();
                    self.blank_bump();
                    return Ok(());
                }
                Some(_) => self.blank_bump(),
            }
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<(), ParseError> {
        let (start, line, column) = (self.pos, self.line, self.column);
        self.bump();
        loop {
            match self.peek(0) {
                None | Some('\n') => {
                    return Err(ParseError::new(
                        "Unterminated string constant",
                        line,
                        column,
                    ))
                }
                Some('\\') => {
                    self.blank_bump();
                    let escaped = self.peek(0);
                    if escaped.is_some() {
                        self.blank_bump();
                    }
                    // A CRLF line continuation escapes both characters.
                    if escaped == Some('\r') && self.peek(0) == Some('\n') {
                        self.blank_bump();
                    }
                }
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some(_) => self.blank_bump(),
            }
        }
        self.push_token(TokenKind::String, start, line, column);
        Ok(())
    }

    /// Scan a template chunk whose opening `` ` `` or `}` is already consumed.
    fn scan_template(&mut self, start: usize, line: usize, column: usize) -> Result<(), ParseError> {
        loop {
            match self.peek(0) {
                None => return Err(ParseError::new("Unterminated template", line, column)),
                Some('\\') => {
                    self.blank_bump();
                    if self.peek(0).is_some() {
                        self.blank_bump();
                    }
                }
                Some('`') => {
                    self.bump();
                    self.push_token(TokenKind::Template, start, line, column);
                    return Ok(());
                }
                Some('$') if self.peek(1) == Some('{') => {
                    self.bump();
                    self.bump();
                    self.push_token(TokenKind::Template, start, line, column);
                    self.brackets.push(('$', line, column));
                    return Ok(());
                }
                Some(_) => self.blank_bump(),
            }
        }
    }

    fn regex_allowed(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(token) => match token.kind {
                TokenKind::Identifier => REGEX_AFTER_KEYWORDS.contains(&token.text.as_str()),
                TokenKind::Number | TokenKind::String | TokenKind::Regex => false,
                TokenKind::Template => token.text.ends_with("${"),
                TokenKind::Punct => !matches!(token.text.as_str(), ")" | "]" | "}" | "++" | "--"),
            },
        }
    }

    fn scan_regex(&mut self) -> Result<(), ParseError> {
        let (start, line, column) = (self.pos, self.line, self.column);
        self.bump();
        let mut in_class = false;
        loop {
            match self.peek(0) {
                None | Some('\n') => {
                    return Err(ParseError::new(
                        "Invalid regular expression: missing /",
                        line,
                        column,
                    ))
                }
                Some('\\') => {
                    self.blank_bump();
                    if self.peek(0).is_some_and(|c| c != '\n') {
                        self.blank_bump();
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.blank_bump();
                }
                Some(']') => {
                    in_class = false;
                    self.blank_bump();
                }
                Some('/') if !in_class => {
                    self.bump();
                    break;
                }
                Some(_) => self.blank_bump(),
            }
        }
        while self.peek(0).is_some_and(|c| c.is_ascii_alphabetic()) {
            self.bump();
        }
        self.push_token(TokenKind::Regex, start, line, column);
        Ok(())
    }

    fn scan_number(&mut self) {
        let (start, line, column) = (self.pos, self.line, self.column);
        while self
            .peek(0)
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.bump();
        }
        self.push_token(TokenKind::Number, start, line, column);
    }

    fn scan_identifier(&mut self) {
        let (start, line, column) = (self.pos, self.line, self.column);
        while self.peek(0).is_some_and(is_ident_part) {
            self.bump();
        }
        self.push_token(TokenKind::Identifier, start, line, column);
    }

    fn scan_punct(&mut self) -> Result<(), ParseError> {
        let (start, line, column) = (self.pos, self.line, self.column);
        let c = self.peek(0).unwrap_or_default();

        match c {
            '(' | '[' | '{' => self.brackets.push((c, line, column)),
            '}' if self.brackets.last().map(|b| b.0) == Some('$') => {
                self.brackets.pop();
                self.bump();
                return self.scan_template(start, line, column);
            }
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if self.brackets.last().map(|b| b.0) != Some(expected) {
                    return Err(ParseError::new(
                        format!("Unexpected token {}", c),
                        line,
                        column,
                    ));
                }
                self.brackets.pop();
            }
            _ => {}
        }

        let rest: String = self.chars[self.pos..(self.pos + 4).min(self.chars.len())]
            .iter()
            .collect();
        let mut len = PUNCTUATORS
            .iter()
            .find(|p| rest.starts_with(**p))
            .map(|p| p.len())
            .unwrap_or(1);
        // `a?.5:b` is a conditional, not optional chaining
        if rest.starts_with("?.") && rest[2..].starts_with(|n: char| n.is_ascii_digit()) {
            len = 1;
        }
        for _ in 0..len {
            self.bump();
        }
        self.push_token(TokenKind::Punct, start, line, column);
        Ok(())
    }
}
