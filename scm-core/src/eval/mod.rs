pub mod error;
mod primitives;

pub mod prelude {
    pub use super::{
        error::*,
        Interpreter,
    };
}


use std::io::Write;
use std::rc::Rc;

use crate::{
    environment::prelude::{Bindings, Callable, ScopeId, Scopes, UserFunction, Value},
    lexer::prelude::TokenKind,
    parser::prelude::{Node, NodeKind},
    utils::prelude::SrcSpan,
};

use error::EvalError;

pub type EvalResult = Result<Option<Value>, EvalError>;

/// Tree-walking evaluator.
///
/// Owns every environment created during a run and the sink that
/// `display` and friends write to. Definitions made by one `evaluate`
/// call stay visible to the next one.
pub struct Interpreter<W: Write> {
    scopes: Scopes,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(globals: Bindings, out: W) -> Self {
        Self {
            scopes: Scopes::new(globals),
            out,
        }
    }

    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    pub fn global_scope(&self) -> ScopeId {
        self.scopes.global()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs a whole program; the result is the value of the last top-level form.
    #[tracing::instrument(level = "debug", skip_all, fields(forms = root.children.len()))]
    pub fn evaluate(&mut self, root: &Node) -> EvalResult {
        if root.kind != NodeKind::Root {
            return Err(EvalError::NotRoot { kind: root.kind });
        }

        let global = self.scopes.global();
        let result = self.evaluate_node(root, global)?;

        self.out.flush()?;

        Ok(result)
    }

    pub fn evaluate_node(&mut self, node: &Node, scope: ScopeId) -> EvalResult {
        match node.kind {
            NodeKind::Root | NodeKind::Function => self.eval_sequence(&node.children, scope),
            NodeKind::Literal => self.eval_literal(node).map(Some),
            NodeKind::VariableRef => self.eval_variable(node, scope).map(Some),
            NodeKind::Call => self.eval_call(node, scope),
            NodeKind::Define => self.eval_define(node, scope),
        }
    }

    fn eval_sequence(&mut self, nodes: &[Node], scope: ScopeId) -> EvalResult {
        let mut result = None;

        for node in nodes {
            result = self.evaluate_node(node, scope)?;
        }

        Ok(result)
    }

    /// Evaluates `node` where a value is required.
    fn expect_value(&mut self, node: &Node, scope: ScopeId) -> Result<Value, EvalError> {
        self.evaluate_node(node, scope)?
            .ok_or_else(|| EvalError::NoValue {
                expression: node.to_string(),
                location: node.location,
            })
    }

    fn eval_literal(&self, node: &Node) -> Result<Value, EvalError> {
        let Some(token) = &node.token else {
            return Err(EvalError::NoValue { expression: node.to_string(), location: node.location });
        };

        let invalid = || EvalError::InvalidLiteral {
            text: token.text.clone(),
            kind: token.kind,
            location: node.location,
        };

        match token.kind {
            TokenKind::Integer => token.text.parse::<i64>()
                .map(Value::int)
                .map_err(|_| invalid()),
            TokenKind::Float => token.text.parse::<f64>()
                .map(Value::float)
                .map_err(|_| invalid()),
            TokenKind::String => Ok(Value::string(token.text.clone())),
            TokenKind::Syntax | TokenKind::Identifier | TokenKind::Quote => Err(invalid()),
        }
    }

    fn eval_variable(&self, node: &Node, scope: ScopeId) -> Result<Value, EvalError> {
        let name = node.identifier().unwrap_or_default();

        self.scopes.find(scope, name)
            .cloned()
            .ok_or_else(|| EvalError::NotDefined {
                name: name.to_string(),
                location: node.location,
            })
    }

    fn eval_call(&mut self, node: &Node, scope: ScopeId) -> EvalResult {
        let Some((head, arguments)) = node.children.split_first() else {
            return Err(EvalError::NotCallable { name: node.to_string(), location: node.location });
        };

        let callable = match self.expect_value(head, scope)? {
            Value::Callable { value } => value,
            _ => return Err(EvalError::NotCallable {
                name: head.to_string(),
                location: head.location,
            }),
        };

        // strictly left to right, the order is observable through `display`
        let args = arguments.iter()
            .map(|argument| self.expect_value(argument, scope))
            .collect::<Result<Vec<Value>, EvalError>>()?;

        self.apply(callable, args, node.location)
    }

    pub fn apply(&mut self, callable: Callable, args: Vec<Value>, location: SrcSpan) -> EvalResult {
        match callable {
            Callable::Primitive(primitive) => self.apply_primitive(primitive, args, location),
            Callable::Function(function) => self.call_function(&function, args, location),
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(name = %function.name))]
    fn call_function(&mut self, function: &UserFunction, args: Vec<Value>, location: SrcSpan) -> EvalResult {
        if args.len() != function.params.len() {
            return Err(EvalError::ArityMismatch {
                name: function.name.clone(),
                expected: function.params.len(),
                got: args.len(),
                location,
            });
        }

        let call_scope = self.scopes.spawn(function.scope);

        for (param, arg) in function.params.iter().zip(args) {
            self.scopes.bind(call_scope, param.clone(), arg);
        }

        self.evaluate_node(&function.body, call_scope)
    }

    fn eval_define(&mut self, node: &Node, scope: ScopeId) -> EvalResult {
        let Some((target, rest)) = node.children.split_first() else {
            return Err(EvalError::MalformedDefine {
                reason: "expected a name and an expression",
                location: node.location,
            });
        };

        match target.kind {
            NodeKind::VariableRef => {
                let [expression] = rest else {
                    return Err(EvalError::MalformedDefine {
                        reason: "expected exactly one expression after the name",
                        location: node.location,
                    });
                };

                let value = self.expect_value(expression, scope)?;
                let name = target.identifier().unwrap_or_default().to_string();

                self.scopes.bind(scope, name, value);

                Ok(None)
            },
            NodeKind::Call => {
                if rest.is_empty() {
                    return Err(EvalError::MalformedDefine {
                        reason: "missing function body",
                        location: node.location,
                    });
                }

                let mut names = target.children.iter()
                    .map(|param| param.identifier()
                        .map(str::to_string)
                        .ok_or_else(|| EvalError::InvalidParameter {
                            found: param.to_string(),
                            location: param.location,
                        }))
                    .collect::<Result<Vec<String>, EvalError>>()?;

                if names.is_empty() {
                    return Err(EvalError::MalformedDefine {
                        reason: "missing function name",
                        location: target.location,
                    });
                }

                let name = names.remove(0);
                let function = UserFunction {
                    name: name.clone(),
                    params: names,
                    body: Node::function(rest.to_vec()),
                    scope: self.scopes.spawn(scope),
                };

                self.scopes.bind(scope, name, Value::Callable {
                    value: Callable::Function(Rc::new(function)),
                });

                Ok(None)
            },
            _ => Err(EvalError::MalformedDefine {
                reason: "expected an identifier or a (name param...) head",
                location: target.location,
            }),
        }
    }
}
