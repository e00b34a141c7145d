use std::fmt::Display;

use serde::Serialize;

use crate::{lexer::prelude::{Token, TokenKind}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    // sequence of top-level forms
    Root,
    // (operator arg...)
    Call,
    // Integer, Float or String token
    Literal,
    VariableRef,
    // (define name expr) | (define (name param...) body...)
    Define,
    // body of a user-defined function, built at definition time
    Function,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Root => "Root",
            NodeKind::Call => "Call",
            NodeKind::Literal => "Literal",
            NodeKind::VariableRef => "VariableRef",
            NodeKind::Define => "Define",
            NodeKind::Function => "Function",
        };

        write!(f, "{name}")
    }
}

/// One unit of program structure.
///
/// Leaves keep the token they were built from. `Call` keeps its opening
/// parenthesis and `Define` keeps the `define` keyword, so every node can
/// point back into the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub token: Option<Token>,
    pub children: Vec<Node>,
    pub location: SrcSpan,
}

impl Node {
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            token: None,
            children: vec![],
            location: SrcSpan::default(),
        }
    }

    pub fn new(kind: NodeKind, token: Token) -> Self {
        let location = token.location;

        Self {
            kind,
            token: Some(token),
            children: vec![],
            location,
        }
    }

    /// Classifies a non-syntax token into a leaf.
    pub fn leaf(token: Token) -> Self {
        let kind = match token.kind {
            TokenKind::Identifier => NodeKind::VariableRef,
            _ => NodeKind::Literal,
        };

        Self::new(kind, token)
    }

    pub fn function(body: Vec<Node>) -> Self {
        let location = match (body.first(), body.last()) {
            (Some(first), Some(last)) => first.location.merge(last.location),
            _ => SrcSpan::default(),
        };

        Self {
            kind: NodeKind::Function,
            token: None,
            children: body,
            location,
        }
    }

    /// Name of a `VariableRef` node.
    pub fn identifier(&self) -> Option<&str> {
        match (self.kind, &self.token) {
            (NodeKind::VariableRef, Some(token)) => Some(token.text.as_str()),
            _ => None,
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }
}

fn join(nodes: &[Node], separator: &str) -> String {
    nodes.iter()
        .map(|node| node.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Root => write!(f, "{}", join(&self.children, "\n")),
            NodeKind::Call => write!(f, "({})", join(&self.children, " ")),
            NodeKind::Define if self.children.is_empty() => write!(f, "(define)"),
            NodeKind::Define => write!(f, "(define {})", join(&self.children, " ")),
            NodeKind::Function => write!(f, "{}", join(&self.children, " ")),
            NodeKind::Literal | NodeKind::VariableRef => match &self.token {
                Some(token) => write!(f, "{token}"),
                None => Ok(()),
            },
        }
    }
}
