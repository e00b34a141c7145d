use std::fmt::Display;
use std::rc::Rc;

use crate::parser::prelude::Node;

use super::environment::ScopeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number {
        value: Number
    },
    String {
        value: String,
    },
    Callable {
        value: Callable
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { value } => write!(f, "{value}"),
            Value::String { value } => write!(f, "{value}"),
            Value::Callable { value } => write!(f, "{value}"),
        }
    }
}

impl Value {
    pub fn int(value: i64) -> Self {
        Value::Number { value: Number::Int(value) }
    }

    pub fn float(value: f64) -> Self {
        Value::Number { value: Number::Float(value) }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String { value: value.into() }
    }

    pub fn _type(&self) -> ValueType {
        match self {
            Self::Number { value: Number::Int(_) } => ValueType::Integer,
            Self::Number { value: Number::Float(_) } => ValueType::Float,
            Self::String { .. } => ValueType::String,
            Self::Callable { .. } => ValueType::Callable,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number { value } => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Float,
    String,
    Callable,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Callable => "procedure",
        };

        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero,
    Overflow,
}

impl Number {
    /// Int with Int stays Int; anything involving a Float is a Float.
    pub fn apply(self, operator: Operator, rhs: Number) -> Result<Number, ArithmeticError> {
        match (self, rhs) {
            (Number::Int(left), Number::Int(right)) => {
                let result = match operator {
                    Operator::Addition => left.checked_add(right),
                    Operator::Subtraction => left.checked_sub(right),
                    Operator::Multiplication => left.checked_mul(right),
                    Operator::Division => {
                        if right == 0 {
                            return Err(ArithmeticError::DivisionByZero);
                        }

                        left.checked_div(right)
                    },
                };

                result.map(Number::Int).ok_or(ArithmeticError::Overflow)
            },
            (left, right) => {
                let (left, right) = (left.to_float(), right.to_float());

                Ok(Number::Float(match operator {
                    Operator::Addition => left + right,
                    Operator::Subtraction => left - right,
                    Operator::Multiplication => left * right,
                    Operator::Division => left / right,
                }))
            }
        }
    }

    pub fn negate(self) -> Result<Number, ArithmeticError> {
        match self {
            Number::Int(value) => value.checked_neg()
                .map(Number::Int)
                .ok_or(ArithmeticError::Overflow),
            Number::Float(value) => Ok(Number::Float(-value)),
        }
    }

    pub fn to_float(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Callable {
    Primitive(Primitive),
    Function(Rc<UserFunction>),
}

impl Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callable::Primitive(primitive) => write!(f, "#<primitive {}>", primitive.name()),
            Callable::Function(function) => write!(f, "#<lambda {}>", function.name),
        }
    }
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::Primitive(primitive) => primitive.name(),
            Callable::Function(function) => &function.name,
        }
    }
}

/// Procedures implemented by the interpreter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Plus,
    Minus,
    Multiply,
    Divide,
    Display,
    Displayln,
    Newline,
}

impl Primitive {
    pub const ALL: [Primitive; 7] = [
        Primitive::Plus,
        Primitive::Minus,
        Primitive::Multiply,
        Primitive::Divide,
        Primitive::Display,
        Primitive::Displayln,
        Primitive::Newline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Plus => "+",
            Primitive::Minus => "-",
            Primitive::Multiply => "*",
            Primitive::Divide => "/",
            Primitive::Display => "display",
            Primitive::Displayln => "displayln",
            Primitive::Newline => "newline",
        }
    }
}

/// A closure: parameters, a `Function` body node and the scope spawned
/// when it was defined.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: Node,
    pub scope: ScopeId,
}

/// The default global table.
pub fn builtins() -> super::environment::Bindings {
    Primitive::ALL.into_iter()
        .map(|primitive| (
            primitive.name().to_string(),
            Value::Callable { value: Callable::Primitive(primitive) },
        ))
        .collect()
}
