use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shunt::{Evaluator, Operator, Token, Value, convert, evaluate, evaluate_postfix};

fn operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('*'), Just('/'), Just('%'), Just('+'), Just('-')]
}

/// Expressions mixing numbers, big integers, text and a variable. Many are
/// ill-typed on purpose; both paths must then fail the same way.
fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..100).prop_map(|n| n.to_string()),
                           (0u32..100).prop_map(|n| format!("{n}n")),
                           Just("x".to_string()),
                           "[a-z ]{0,3}".prop_map(|s| format!("'{s}'"))];

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), operator(), inner.clone()).prop_map(|(l, op, r)| {
                                                                      format!("{l} {op} {r}")
                                                                  }),
                        inner.prop_map(|e| format!("({e})"))]
        })
}

fn evaluator() -> Evaluator {
    Evaluator::with_variables([("x", 4.0)]).expect("valid variable")
}

/// A flat chain `n0 op n1 op n2 ...` over `+ - *` with its value under
/// conventional precedence.
fn chain_strategy() -> impl Strategy<Value = (String, i64)> {
    (0i64..50, prop::collection::vec((prop_oneof![Just('+'), Just('-'), Just('*')], 0i64..50), 0..8))
        .prop_map(|(first, rest)| {
            let mut source = first.to_string();
            let mut sum = 0;
            let mut term = first;
            for (op, n) in rest {
                source.push_str(&format!(" {op} {n}"));
                match op {
                    '*' => term *= n,
                    '+' => {
                        sum += term;
                        term = n;
                    },
                    _ => {
                        sum += term;
                        term = -n;
                    },
                }
            }
            (source, sum + term)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Running the three stages by hand gives exactly what `evaluate` gives.
    #[test]
    fn stages_compose_to_evaluate(expr in expr_strategy()) {
        let evaluator = evaluator();
        let staged = evaluator.tokenize(&expr)
                              .and_then(convert)
                              .and_then(evaluate_postfix);
        let direct = evaluator.evaluate(&expr);
        // Debug output compares NaN results as equal.
        prop_assert_eq!(format!("{staged:?}"), format!("{direct:?}"));
    }

    /// Integer chains agree with ordinary arithmetic.
    #[test]
    fn chains_follow_conventional_precedence((expr, expected) in chain_strategy()) {
        prop_assert_eq!(evaluate(&expr).unwrap(), Value::Number(expected as f64));
    }

    /// Operands followed by operators of non-increasing rank are already in
    /// postfix order, and converting them changes nothing.
    #[test]
    fn convert_keeps_postfix_sequences(
        operands in prop::collection::vec(0u32..100, 1..8),
        ops in prop::collection::vec(operator(), 7),
    ) {
        let mut ops: Vec<Operator> = ops.into_iter()
                                        .take(operands.len() - 1)
                                        .filter_map(Operator::from_char)
                                        .collect();
        ops.sort_by_key(|op| std::cmp::Reverse(op.precedence()));

        let postfix: Vec<Token> = operands.iter()
                                          .map(|&n| Token::Operand(Value::Number(f64::from(n))))
                                          .chain(ops.into_iter().map(Token::Operator))
                                          .collect();

        prop_assert_eq!(convert(postfix.clone()).unwrap(), postfix);
    }
}

#[test]
fn postfix_identity_example() {
    let postfix = vec![Token::Operand(Value::Number(1.0)),
                       Token::Operand(Value::Number(2.0)),
                       Token::Operator(Operator::Add)];
    assert_eq!(convert(postfix.clone()).unwrap(), postfix);
}
