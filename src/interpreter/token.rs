use crate::interpreter::value::Value;

/// One of the six binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`
    Power,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Returns the operator's precedence rank.
    ///
    /// `*` deliberately ranks above `/` and `%`, so that in a mixed chain the
    /// products are formed before dividing. `+` and `-` share the lowest rank.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::Operator;
    ///
    /// assert!(Operator::Multiply.precedence() > Operator::Divide.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Power => 4,
            Self::Multiply => 3,
            Self::Divide | Self::Remainder => 2,
            Self::Add | Self::Subtract => 1,
        }
    }

    /// Returns the character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Power => '^',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Looks up the operator written as `c`, if any.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(Self::Power),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            _ => None,
        }
    }

    /// Describes which operand types the operator accepts, for type errors.
    #[must_use]
    pub const fn operand_requirement(self) -> &'static str {
        match self {
            Self::Power => "Power operator (^) requires both operands to be either numbers or bigints.",
            Self::Multiply => {
                "Multiplication operator (*) requires both operands to be either numbers or bigints."
            },
            Self::Divide => {
                "Division operator (/) requires both operands to be either numbers or bigints."
            },
            Self::Remainder => {
                "Modulus operator (%) requires both operands to be either numbers or bigints."
            },
            Self::Add => {
                "Addition operator (+) requires both operands to be either numbers or bigints, or \
                 both to be strings for concatenation."
            },
            Self::Subtract => {
                "Subtraction operator (-) requires both operands to be either numbers or bigints."
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single unit of an expression after tokenization.
///
/// Operands are already typed values: identifiers are resolved and literals
/// interpreted by the lexer, so later stages never see raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A resolved operand.
    Operand(Value),
    /// A binary operator.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl From<Value> for Token {
    fn from(v: Value) -> Self {
        Self::Operand(v)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(Value::Text(s)) => write!(f, "{s:?}"),
            Self::Operand(Value::Integer(n)) => write!(f, "{n}n"),
            Self::Operand(v) => write!(f, "{v}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Renders a token sequence as space separated source text.
///
/// Useful for showing the postfix form of an expression.
///
/// # Example
/// ```
/// use shunt::interpreter::token::{Operator, Token, tokens_to_string};
///
/// let tokens = [Token::from(shunt::Value::Number(1.0)),
///               Token::from(shunt::Value::Number(2.0)),
///               Token::from(Operator::Add)];
/// assert_eq!(tokens_to_string(&tokens), "1 2 +");
/// ```
#[must_use]
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
