//! tslua: identifier and language-extension lowering for a TypeScript-to-Lua compiler.
//!
//! This crate re-exports the workspace crates:
//! - `common` - diagnostics, Lua target, compiler options, Lua tables
//! - `program` - the typed program contract (`Frontend`, `Program`)
//! - `lowering` - identifier lowering, language extensions, export rewriting

pub use tslua_common as common;
pub use tslua_lowering as lowering;
pub use tslua_program as program;

pub use tslua_common::{CompilerOptions, Diagnostic, DiagnosticCategory, LuaTarget};
pub use tslua_lowering::{
    LoweredFile, LoweringError, LuaExpression, LuaIdentifier, TransformationContext,
    lower_identifiers, transform_identifier, transform_identifier_expression,
};
pub use tslua_program::{Frontend, Program};

pub mod tracing_config;

/// Lower every identifier of `program`'s source file.
pub fn lower_program(
    program: &Program,
    options: CompilerOptions,
) -> Result<LoweredFile, LoweringError> {
    tracing::debug!(
        file = program.file_name(),
        target = options.lua_target.as_str(),
        "lowering program"
    );
    lower_identifiers(program, options, program.root())
}
