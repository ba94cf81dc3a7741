//! Semicolon usage.
//!
//! With the default `"always"` option every statement that relies on
//! automatic semicolon insertion is reported. With `"never"` every
//! semicolon that ends a line, the file, or a block is reported instead,
//! unless the following line starts with a token that would join the two
//! statements.
//!
//! Statement boundaries are found from tokens alone: the rule tracks which
//! bracket the current token sits in and only checks tokens directly inside
//! a block or at the top level.

use serde_json::Value;

use crate::lint::rules::option_str;
use crate::lint::source::{SourceFile, Token, TokenKind};
use crate::lint::{Finding, LintRule, RuleId};

/// Requires (or forbids) semicolons at the end of statements.
pub struct SemiRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Paren {
        /// `if (...)`, `for (...)` and friends.
        control: bool,
        /// Parameter list of a `function`.
        fn_params: bool,
        /// Parameter list of a `function` used as an expression.
        fn_expr: bool,
        /// Condition of a `do ... while`, which ends the statement.
        do_while: bool,
    },
    Bracket,
    /// A statement block. `value` is set for function and arrow bodies
    /// that are part of an expression, whose closing brace ends a value.
    /// `after_do` marks the body of a `do` loop.
    Block {
        value: bool,
        after_do: bool,
    },
    /// Object literal.
    Object,
    /// Class body.
    Class,
    Template,
}

/// Keywords that never end a statement.
const NON_TERMINAL: &[&str] = &[
    "var",
    "let",
    "const",
    "if",
    "for",
    "while",
    "do",
    "else",
    "switch",
    "case",
    "default",
    "try",
    "catch",
    "finally",
    "function",
    "class",
    "extends",
    "new",
    "typeof",
    "void",
    "delete",
    "in",
    "instanceof",
    "import",
    "export",
    "await",
    "yield",
    "throw",
    "with",
];

/// Keywords after which a line break always ends the statement.
const RESTRICTED: &[&str] = &["return", "break", "continue"];

const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "with", "switch", "catch"];

/// Keywords after which `{` opens an object literal.
const OBJECT_AFTER_KEYWORDS: &[&str] = &["return", "typeof", "yield", "await", "in", "of", "void", "delete"];

/// Punctuators that continue the previous line's statement.
const CONTINUATION: &[&str] = &[
    ".", "?.", ",", "?", ":", "=", "==", "===", "!=", "!==", "+", "-", "*", "/", "%", "**", "&&",
    "||", "??", "<", ">", "<=", ">=", "<<", ">>", ">>>", "&", "|", "^", "(", "[", "=>", "+=",
    "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=", "||=", "??=",
];

/// Punctuators that start an expression.
const EXPRESSION_START: &[&str] = &["=", "(", ",", ":", "?", "||", "&&", "??", "!", "[", "=>"];

impl LintRule for SemiRule {
    fn id(&self) -> RuleId {
        RuleId::new("semi")
    }

    fn description(&self) -> &str {
        "Require or disallow semicolons instead of automatic semicolon insertion"
    }

    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding> {
        let never = match option_str(options, 0) {
            None | Some("always") => false,
            Some("never") => true,
            Some(other) => {
                tracing::warn!("semi: unknown option '{}', using \"always\"", other);
                false
            }
        };

        let tokens = source.tokens();
        let mut findings = Vec::new();
        let mut stack: Vec<Container> = Vec::new();
        let mut last_paren: Option<Container> = None;
        let mut pending_class = false;
        let mut do_body_closed_at: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| &tokens[p]);
            let mut ends_value = false;

            match token.kind {
                TokenKind::Punct => match token.text.as_str() {
                    "(" => {
                        let mut kind = paren_kind(tokens, i);
                        if let Container::Paren { do_while, .. } = &mut kind {
                            *do_while = prev.is_some_and(|t| t.is_ident("while"))
                                && do_body_closed_at.is_some_and(|at| at + 2 == i);
                        }
                        stack.push(kind);
                    }
                    "[" => stack.push(Container::Bracket),
                    "{" => {
                        let kind = if pending_class {
                            pending_class = false;
                            Container::Class
                        } else if prev.is_some_and(|t| t.is_ident("do")) {
                            Container::Block { value: false, after_do: true }
                        } else {
                            brace_kind(prev, last_paren)
                        };
                        stack.push(kind);
                    }
                    ")" => {
                        if let Some(
                            paren @ Container::Paren { control, fn_params, do_while, .. },
                        ) = stack.pop()
                        {
                            ends_value = do_while || (!control && !fn_params);
                            last_paren = Some(paren);
                        }
                    }
                    "]" => {
                        stack.pop();
                        ends_value = true;
                    }
                    "}" => match stack.pop() {
                        Some(Container::Object) => ends_value = true,
                        Some(Container::Block { value, after_do }) => {
                            ends_value = value;
                            if after_do {
                                do_body_closed_at = Some(i);
                            }
                        }
                        _ => {}
                    },
                    "++" | "--" => ends_value = true,
                    _ => {}
                },
                TokenKind::Identifier => {
                    if token.text == "class" {
                        pending_class = true;
                    }
                    ends_value = !NON_TERMINAL.contains(&token.text.as_str());
                }
                TokenKind::Number | TokenKind::String | TokenKind::Regex => ends_value = true,
                TokenKind::Template => {
                    if token.text.starts_with('}') {
                        stack.pop();
                    }
                    if token.text.ends_with("${") {
                        stack.push(Container::Template);
                    } else {
                        ends_value = true;
                    }
                }
            }

            if !matches!(stack.last(), None | Some(Container::Block { .. })) {
                continue;
            }

            if never {
                if token.is_punct(";") && is_removable(tokens, i) {
                    findings.push(
                        Finding::new(self.id(), "Extra semicolon.").at(token.line, token.column),
                    );
                }
            } else if ends_value && needs_semicolon(tokens, i) {
                findings.push(
                    Finding::new(self.id(), "Missing semicolon.")
                        .at(token.end_line, token.end_column),
                );
            }
        }

        findings
    }
}

/// Classify the parenthesis at `index`.
fn paren_kind(tokens: &[Token], index: usize) -> Container {
    let prev = index.checked_sub(1).map(|p| &tokens[p]);
    let control = prev.is_some_and(|t| {
        t.kind == TokenKind::Identifier && CONTROL_KEYWORDS.contains(&t.text.as_str())
    });

    let function_at = match prev {
        Some(t) if t.is_ident("function") => Some(index - 1),
        Some(t) if t.kind == TokenKind::Identifier || t.is_punct("*") => index
            .checked_sub(2)
            .filter(|&p| tokens[p].is_ident("function") || tokens[p].is_punct("*"))
            .map(|p| {
                if tokens[p].is_punct("*") && p > 0 {
                    p - 1
                } else {
                    p
                }
            })
            .filter(|&p| tokens[p].is_ident("function")),
        _ => None,
    };

    let fn_expr = function_at.is_some_and(|f| {
        let mut before = f.checked_sub(1).map(|p| &tokens[p]);
        if before.is_some_and(|t| t.is_ident("async")) {
            before = f.checked_sub(2).map(|p| &tokens[p]);
        }
        before.is_some_and(|t| {
            (t.kind == TokenKind::Punct && EXPRESSION_START.contains(&t.text.as_str()))
                || t.is_ident("return")
        })
    });

    Container::Paren {
        control,
        fn_params: function_at.is_some(),
        fn_expr,
        do_while: false,
    }
}

/// Classify a `{` from the token before it.
fn brace_kind(prev: Option<&Token>, last_paren: Option<Container>) -> Container {
    let Some(prev) = prev else {
        return Container::Block { value: false, after_do: false };
    };
    match prev.kind {
        TokenKind::Punct => match prev.text.as_str() {
            ")" => Container::Block {
                value: matches!(last_paren, Some(Container::Paren { fn_expr: true, .. })),
                after_do: false,
            },
            "=>" => Container::Block { value: true, after_do: false },
            "{" | "}" | ";" => Container::Block { value: false, after_do: false },
            _ => Container::Object,
        },
        TokenKind::Identifier if OBJECT_AFTER_KEYWORDS.contains(&prev.text.as_str()) => {
            Container::Object
        }
        TokenKind::Template if prev.text.ends_with("${") => Container::Object,
        _ => Container::Block { value: false, after_do: false },
    }
}

fn continues_statement(next: &Token) -> bool {
    match next.kind {
        TokenKind::Punct => CONTINUATION.contains(&next.text.as_str()),
        TokenKind::Template => next.text.starts_with('`'),
        TokenKind::Identifier => next.text == "instanceof" || next.text == "in",
        _ => false,
    }
}

/// Whether the value-ending token at `index` finishes a statement without
/// a semicolon.
fn needs_semicolon(tokens: &[Token], index: usize) -> bool {
    let token = &tokens[index];
    let Some(next) = tokens.get(index + 1) else {
        return true;
    };
    if next.is_punct(";") {
        return false;
    }
    if next.line > token.end_line {
        if token.kind == TokenKind::Identifier && RESTRICTED.contains(&token.text.as_str()) {
            return true;
        }
        return !continues_statement(next);
    }
    next.is_punct("}")
}

/// Whether the semicolon at `index` could be dropped without joining it to
/// the next statement.
fn is_removable(tokens: &[Token], index: usize) -> bool {
    let token = &tokens[index];
    let Some(next) = tokens.get(index + 1) else {
        return true;
    };
    let at_boundary = next.line > token.end_line || next.is_punct("}");
    let joins = next.kind == TokenKind::Regex
        || next.text.starts_with('`')
        || matches!(next.text.as_str(), "(" | "[" | "+" | "-" | "/");
    at_boundary && !joins
}
