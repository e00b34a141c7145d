use std::io::Write;

use crate::{
    environment::prelude::{ArithmeticError, Number, Operator, Primitive, Value},
    utils::prelude::SrcSpan,
};

use super::{error::{Arity, EvalError}, EvalResult, Interpreter};

impl<W: Write> Interpreter<W> {
    pub(super) fn apply_primitive(&mut self, primitive: Primitive, args: Vec<Value>, location: SrcSpan) -> EvalResult {
        let name = primitive.name();

        match primitive {
            Primitive::Plus => fold(name, Number::Int(0), Operator::Addition, &args, 0, location),
            Primitive::Multiply => fold(name, Number::Int(1), Operator::Multiplication, &args, 0, location),
            Primitive::Minus => {
                let (first, rest) = match args.split_first() {
                    Some(split) => split,
                    None => return Err(arity(name, Arity::AtLeast(1), 0, location)),
                };

                let first = number(name, 0, first, location)?;

                if rest.is_empty() {
                    return first.negate()
                        .map(|value| Some(Value::Number { value }))
                        .map_err(|err| arithmetic(name, err, location));
                }

                fold(name, first, Operator::Subtraction, rest, 1, location)
            },
            Primitive::Divide => {
                let [dividend, divisor] = args.as_slice() else {
                    return Err(arity(name, Arity::Exactly(2), args.len(), location));
                };

                let dividend = number(name, 0, dividend, location)?;
                let divisor = number(name, 1, divisor, location)?;

                dividend.apply(Operator::Division, divisor)
                    .map(|value| Some(Value::Number { value }))
                    .map_err(|err| arithmetic(name, err, location))
            },
            Primitive::Display | Primitive::Displayln => {
                let [value] = args.as_slice() else {
                    return Err(arity(name, Arity::Exactly(1), args.len(), location));
                };

                write!(self.out, "{value}")?;

                if primitive == Primitive::Displayln {
                    writeln!(self.out)?;
                }

                Ok(None)
            },
            Primitive::Newline => {
                if !args.is_empty() {
                    return Err(arity(name, Arity::Exactly(0), args.len(), location));
                }

                writeln!(self.out)?;

                Ok(None)
            },
        }
    }
}

// `offset` is the position of `args[0]` in the full argument list
fn fold(
    name: &'static str,
    init: Number,
    operator: Operator,
    args: &[Value],
    offset: usize,
    location: SrcSpan,
) -> EvalResult {
    let mut accumulator = init;

    for (index, arg) in args.iter().enumerate() {
        let operand = number(name, offset + index, arg, location)?;

        accumulator = accumulator.apply(operator, operand)
            .map_err(|err| arithmetic(name, err, location))?;
    }

    Ok(Some(Value::Number { value: accumulator }))
}

// `index` is 0-based, errors report it 1-based
fn number(name: &'static str, index: usize, value: &Value, location: SrcSpan) -> Result<Number, EvalError> {
    value.as_number().ok_or(EvalError::NotANumber {
        name,
        index: index + 1,
        found: value._type(),
        location,
    })
}

fn arity(name: &'static str, expected: Arity, got: usize, location: SrcSpan) -> EvalError {
    EvalError::PrimitiveArity { name, expected, got, location }
}

fn arithmetic(name: &'static str, err: ArithmeticError, location: SrcSpan) -> EvalError {
    match err {
        ArithmeticError::DivisionByZero => EvalError::DivisionByZero { name, location },
        ArithmeticError::Overflow => EvalError::IntegerOverflow { name, location },
    }
}
