use tracing::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::token::Token,
};

/// Rank of the operator on top of `stack`, or 0 for `(` or an empty stack.
fn top_rank(stack: &[Token]) -> u8 {
    match stack.last() {
        Some(Token::Operator(op)) => op.precedence(),
        _ => 0,
    }
}

/// Reorders an infix token sequence into postfix order (shunting-yard).
///
/// Operands pass straight through. An operator first moves every stacked
/// operator of equal or higher rank to the output, so equal ranks associate
/// left to right. Parentheses only group: they never reach the output.
///
/// # Errors
/// - `EvalError::UnmatchedRightParen` for a `)` with no open `(`.
/// - `EvalError::UnclosedLeftParen` for a `(` still open at the end.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     converter::convert,
///     token::{Operator, Token},
///     value::Value,
/// };
///
/// let n = |x: f64| Token::Operand(Value::Number(x));
/// // (1 + 2) * 3  =>  1 2 + 3 *
/// let infix = vec![Token::LParen,
///                  n(1.0),
///                  Token::Operator(Operator::Add),
///                  n(2.0),
///                  Token::RParen,
///                  Token::Operator(Operator::Multiply),
///                  n(3.0)];
/// let postfix = convert(infix).unwrap();
/// assert_eq!(postfix,
///            vec![n(1.0),
///                 n(2.0),
///                 Token::Operator(Operator::Add),
///                 n(3.0),
///                 Token::Operator(Operator::Multiply)]);
/// ```
pub fn convert(tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Operator(op) => {
                while !stack.is_empty() && op.precedence() <= top_rank(&stack) {
                    output.extend(stack.pop());
                }
                stack.push(token);
            },
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(EvalError::UnmatchedRightParen),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LParen {
            return Err(EvalError::UnclosedLeftParen);
        }
        output.push(top);
    }

    trace!(count = output.len(), "converted to postfix");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{
        token::{Operator, tokens_to_string},
        value::Value,
    };

    fn n(x: f64) -> Token {
        Token::Operand(Value::Number(x))
    }

    fn op(c: char) -> Token {
        Token::Operator(Operator::from_char(c).unwrap())
    }

    fn postfix(tokens: Vec<Token>) -> String {
        tokens_to_string(&convert(tokens).unwrap())
    }

    #[test]
    fn multiplication_outranks_division() {
        // 2 * 6 / 3
        assert_eq!(postfix(vec![n(2.0), op('*'), n(6.0), op('/'), n(3.0)]), "2 6 * 3 /");
        // 2 / 6 * 3: `*` binds first.
        assert_eq!(postfix(vec![n(2.0), op('/'), n(6.0), op('*'), n(3.0)]), "2 6 3 * /");
    }

    #[test]
    fn equal_rank_is_left_to_right() {
        assert_eq!(postfix(vec![n(1.0), op('-'), n(2.0), op('+'), n(3.0)]), "1 2 - 3 +");
        assert_eq!(postfix(vec![n(2.0), op('^'), n(3.0), op('^'), n(2.0)]), "2 3 ^ 2 ^");
    }

    #[test]
    fn parentheses_are_consumed() {
        let tokens = vec![n(5.0),
                          op('*'),
                          Token::LParen,
                          Token::LParen,
                          n(1.0),
                          op('+'),
                          n(2.0),
                          Token::RParen,
                          op('^'),
                          n(2.0),
                          Token::RParen];
        assert_eq!(postfix(tokens), "5 1 2 + 2 ^ *");
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(convert(vec![n(1.0), Token::RParen]).unwrap_err(),
                   EvalError::UnmatchedRightParen);
        assert_eq!(convert(vec![Token::LParen, n(1.0)]).unwrap_err(),
                   EvalError::UnclosedLeftParen);
    }

    #[test]
    fn empty_input() {
        assert!(convert(Vec::new()).unwrap().is_empty());
    }
}
