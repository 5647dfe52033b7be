use logos::Logos;
use tracing::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        token::{Operator, Token},
        variables::VariableStore,
    },
};

/// Turns accumulated source text into typed operand values.
///
/// Numbers, big integers, quoted text and booleans are recognized from their
/// spelling; anything else is looked up as a variable.
pub mod literal;

pub use literal::interpret_literal;

/// Character classes the scanner distinguishes.
///
/// Logos groups runs of ordinary characters and runs of whitespace into single
/// lexemes; everything that changes the scanner state is one character wide.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One of `^ * / % + -`.
    #[token("^", |_| Operator::Power)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("%", |_| Operator::Remainder)]
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    Operator(Operator),
    /// One of the three text delimiters.
    #[token("'", |_| '\'')]
    #[token("\"", |_| '"')]
    #[token("`", |_| '`')]
    Quote(char),
    /// Spaces, tabs, line and form feeds.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    /// Any run of characters not covered above.
    #[regex(r#"[^()^*/%+\-'"` \t\r\n\f]+"#)]
    Word,
}

/// Whether the scanner is inside a quoted text literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Bare,
    /// Inside a literal opened with the given delimiter.
    InQuote(char),
}

/// Scanner state threaded through the lexemes of one expression.
struct Scan<'v> {
    variables:   &'v VariableStore,
    state:       QuoteState,
    accumulator: String,
    tokens:      Vec<Token>,
}

impl<'v> Scan<'v> {
    const fn new(variables: &'v VariableStore) -> Self {
        Self { variables,
               state: QuoteState::Bare,
               accumulator: String::new(),
               tokens: Vec::new() }
    }

    /// Advances the scanner by one lexeme whose source text is `slice`.
    fn feed(&mut self, lexeme: Lexeme, slice: &str) -> EvalResult<()> {
        match (self.state, lexeme) {
            (QuoteState::Bare, Lexeme::Quote(q)) => {
                self.state = QuoteState::InQuote(q);
                self.accumulator.push(q);
            },
            (QuoteState::InQuote(open), Lexeme::Quote(q)) if q == open => {
                self.state = QuoteState::Bare;
                self.accumulator.push(q);
                self.flush()?;
            },
            (QuoteState::InQuote(_), _) | (QuoteState::Bare, Lexeme::Word) => {
                self.accumulator.push_str(slice);
            },
            (QuoteState::Bare, Lexeme::Whitespace) => self.flush()?,
            (QuoteState::Bare, Lexeme::Operator(op)) => {
                self.flush()?;
                self.tokens.push(Token::Operator(op));
            },
            (QuoteState::Bare, Lexeme::LParen) => {
                self.flush()?;
                self.tokens.push(Token::LParen);
            },
            (QuoteState::Bare, Lexeme::RParen) => {
                self.flush()?;
                self.tokens.push(Token::RParen);
            },
        }
        Ok(())
    }

    /// Interprets and emits the accumulated text, if there is any.
    fn flush(&mut self) -> EvalResult<()> {
        if self.accumulator.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.accumulator);
        let value = interpret_literal(&text, self.variables)?;
        self.tokens.push(Token::Operand(value));
        Ok(())
    }

    fn finish(mut self, expr: &str) -> EvalResult<Vec<Token>> {
        if let QuoteState::InQuote(_) = self.state {
            return Err(EvalError::UnclosedQuote { expression: expr.to_string() });
        }
        self.flush()?;
        Ok(self.tokens)
    }
}

/// Splits an expression into typed tokens.
///
/// Operators and parentheses always stand alone. Whitespace separates operands
/// and is otherwise dropped. Text between matching `'`, `"` or `` ` `` quotes
/// is kept verbatim, including operators and whitespace. Every other run of
/// characters is interpreted by [`interpret_literal`], resolving identifiers
/// against `variables`.
///
/// # Errors
/// - `EvalError::UnclosedQuote` if a quote is still open at the end.
/// - Any error from [`interpret_literal`] for an operand.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
///     value::Value,
///     variables::VariableStore,
/// };
///
/// let tokens = tokenize("2 * 'a b'", &VariableStore::new()).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operand(Value::Number(2.0)),
///                 Token::Operator(Operator::Multiply),
///                 Token::Operand(Value::from("a b"))]);
/// ```
pub fn tokenize(expr: &str, variables: &VariableStore) -> EvalResult<Vec<Token>> {
    let mut scan = Scan::new(variables);
    let mut lexer = Lexeme::lexer(expr);

    while let Some(lexeme) = lexer.next() {
        // Every character falls into some lexeme class, but an unmatched one
        // is still ordinary content.
        scan.feed(lexeme.unwrap_or(Lexeme::Word), lexer.slice())?;
    }

    let tokens = scan.finish(expr)?;
    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::ErrorKind, interpreter::value::Value};

    fn num(n: f64) -> Token {
        Token::Operand(Value::Number(n))
    }

    fn lex(expr: &str) -> EvalResult<Vec<Token>> {
        tokenize(expr, &VariableStore::new())
    }

    #[test]
    fn splits_operators_without_spaces() {
        assert_eq!(lex("5+7*2").unwrap(),
                   vec![num(5.0),
                        Token::Operator(Operator::Add),
                        num(7.0),
                        Token::Operator(Operator::Multiply),
                        num(2.0)]);
    }

    #[test]
    fn parentheses_are_tokens() {
        assert_eq!(lex("(1)").unwrap(), vec![Token::LParen, num(1.0), Token::RParen]);
    }

    #[test]
    fn quoted_text_keeps_operators_and_spaces() {
        assert_eq!(lex("'1 + (2)'").unwrap(), vec![Token::Operand(Value::from("1 + (2)"))]);
    }

    #[test]
    fn other_delimiters_are_content_inside_quotes() {
        assert_eq!(lex(r#""it's `here`""#).unwrap(),
                   vec![Token::Operand(Value::from("it's `here`"))]);
    }

    #[test]
    fn quoted_text_ends_the_operand() {
        let mut vars = VariableStore::new();
        vars.register("x", Some(Value::Boolean(true))).unwrap();
        assert_eq!(tokenize("\"a\"x", &vars).unwrap(),
                   vec![Token::Operand(Value::from("a")), Token::Operand(Value::Boolean(true))]);
    }

    #[test]
    fn empty_quotes_are_empty_text() {
        assert_eq!(lex("``").unwrap(), vec![Token::Operand(Value::from(""))]);
    }

    #[test]
    fn big_integer_suffix() {
        assert_eq!(lex("10n").unwrap(), vec![Token::Operand(Value::Integer(BigInt::from(10)))]);
    }

    #[test]
    fn tabs_and_newlines_separate_operands() {
        assert_eq!(lex("1\t+\n2").unwrap(),
                   vec![num(1.0), Token::Operator(Operator::Add), num(2.0)]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("   ").unwrap().is_empty());
    }

    #[test]
    fn unclosed_quote_fails() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnterminatedString);
        assert!(matches!(err, EvalError::UnclosedQuote { .. }));
    }

    #[test]
    fn mismatched_closing_quote_leaves_block_open() {
        assert_eq!(lex("'abc\"").unwrap_err().kind(), ErrorKind::UnterminatedString);
    }

    #[test]
    fn unknown_identifier_fails() {
        assert_eq!(lex("1 + y").unwrap_err(), EvalError::UndefinedVariable { name: "y".into() });
    }

    #[test]
    fn identifier_glued_to_quote_is_one_operand() {
        assert_eq!(lex("ab\"c d\"").unwrap_err(),
                   EvalError::UndefinedVariable { name: "ab\"c d\"".into() });
    }
}
