use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::binary::scalar::{eval_integer_op, eval_scalar_op},
        token::Operator,
        value::Value,
    },
};

impl Operator {
    /// Applies the operator to `first` and `second`, in that order.
    ///
    /// Both operands must be `Number`s or both must be `Integer`s; `+` also
    /// accepts two `Text`s and concatenates them. A `Number` never combines
    /// with an `Integer`, and booleans are rejected by every operator.
    ///
    /// # Errors
    /// - `EvalError::OperandTypeMismatch` if the operand types do not fit.
    /// - A range error from integer division, remainder or power.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{token::Operator, value::Value};
    ///
    /// let sum = Operator::Add.apply(Value::from("foo"), Value::from("bar")).unwrap();
    /// assert_eq!(sum, Value::from("foobar"));
    ///
    /// let mixed = Operator::Multiply.apply(Value::Number(2.0), Value::from(2_i64));
    /// assert!(mixed.is_err());
    /// ```
    pub fn apply(self, first: Value, second: Value) -> EvalResult<Value> {
        use Value::{Integer, Number, Text};

        match (self, first, second) {
            (op, Number(a), Number(b)) => Ok(Number(eval_scalar_op(op, a, b))),
            (op, Integer(a), Integer(b)) => eval_integer_op(op, a, &b).map(Integer),
            (Self::Add, Text(mut a), Text(b)) => {
                a.push_str(&b);
                Ok(Text(a))
            },
            (operator, left, right) => {
                Err(EvalError::OperandTypeMismatch { operator, left, right })
            },
        }
    }
}
