pub mod ast;
pub mod codegen;
pub mod config;
pub mod debug;
pub mod error;
pub mod evaluator;
pub mod resolver;
pub mod visitor;

pub use ast::*;
pub use codegen::{CodeGenerator, CodegenError};
pub use config::Config;
pub use error::{CalcError, ErrorKind};
pub use evaluator::{EvalError, Evaluator};
pub use resolver::{NameResolver, ResolveError};
pub use visitor::{walk_program, Accept, Visitor};
