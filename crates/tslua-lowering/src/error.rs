//! Errors returned at the lowering pass boundary.
//!
//! User-facing problems are diagnostics on the `TransformationContext`; these
//! errors mean the frontend handed over a tree that breaks its own contract.

use thiserror::Error;
use tslua_program::{NodeIndex, SyntaxKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoweringError {
    #[error("{0:?} is not part of the program tree")]
    MissingNode(NodeIndex),

    #[error("{node:?} is a {kind:?}, expected an identifier")]
    NotAnIdentifier { node: NodeIndex, kind: SyntaxKind },

    #[error("{node:?} is a {kind:?}, expected a source file")]
    NotASourceFile { node: NodeIndex, kind: SyntaxKind },
}

pub type LoweringResult<T> = Result<T, LoweringError>;
