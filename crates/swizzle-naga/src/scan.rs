//! Find swizzle expressions in WGSL source.

use anyhow::{anyhow, Context, Result};
use naga::valid::{Capabilities, FunctionInfo, ModuleInfo, ValidationFlags, Validator};
use naga::{Expression, Function, Module, TypeInner};
use swizzle_core::Swizzle;
use tracing::debug;

use crate::convert::{from_naga, vector_len};

/// A swizzle expression found in a shader function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwizzleUse {
    /// Name of the enclosing function or entry point.
    pub function: String,
    pub swizzle: Swizzle,
    /// Component count of the vector being swizzled, when validation
    /// resolved it to a vector type.
    pub source_size: Option<usize>,
}

impl SwizzleUse {
    /// Check the swizzle against its source vector. Unknown sources pass.
    pub fn check(&self) -> swizzle_core::Result<()> {
        match self.source_size {
            Some(size) => self.swizzle.fits(size),
            None => Ok(()),
        }
    }
}

/// Parse and validate WGSL, then list every swizzle expression in it.
///
/// Functions are scanned before entry points; within a function the order is
/// naga's expression order.
pub fn scan_wgsl(source: &str) -> Result<Vec<SwizzleUse>> {
    let module = parse(source)?;
    let info = validate(source, &module, ValidationFlags::all())?;
    Ok(scan_module(&module, &info))
}

/// Scan WGSL and fail on the first swizzle that reads past its source vector.
///
/// The source sizes come from a validation pass with expression checks
/// disabled, so an out-of-range swizzle is reported as
/// [`SwizzleError::SourceTooSmall`](swizzle_core::SwizzleError) before full
/// validation runs.
pub fn check_wgsl(source: &str) -> Result<Vec<SwizzleUse>> {
    let module = parse(source)?;
    let typed = validate(source, &module, ValidationFlags::empty())?;

    let uses = scan_module(&module, &typed);
    for swizzle_use in &uses {
        swizzle_use
            .check()
            .with_context(|| format!("in function `{}`", swizzle_use.function))?;
    }

    validate(source, &module, ValidationFlags::all())?;
    Ok(uses)
}

fn parse(source: &str) -> Result<Module> {
    naga::front::wgsl::parse_str(source)
        .map_err(|e| anyhow!("{}", e.emit_to_string(source)))
        .context("Failed to parse WGSL")
}

fn validate(source: &str, module: &Module, flags: ValidationFlags) -> Result<ModuleInfo> {
    Validator::new(flags, Capabilities::all())
        .validate(module)
        .map_err(|e| anyhow!("{}", e.emit_to_string(source)))
        .context("WGSL validation failed")
}

/// List swizzles in a module, using `info` from validating it to size the
/// source vectors.
pub fn scan_module(module: &Module, info: &ModuleInfo) -> Vec<SwizzleUse> {
    let mut uses = Vec::new();

    for (handle, function) in module.functions.iter() {
        let name = function.name.clone().unwrap_or_default();
        collect_function(module, function, &info[handle], &name, &mut uses);
    }

    for (index, entry_point) in module.entry_points.iter().enumerate() {
        collect_function(
            module,
            &entry_point.function,
            info.get_entry_point(index),
            &entry_point.name,
            &mut uses,
        );
    }

    debug!(
        functions = module.functions.len(),
        entry_points = module.entry_points.len(),
        swizzles = uses.len(),
        "scanned shader module"
    );
    uses
}

fn collect_function(
    module: &Module,
    function: &Function,
    function_info: &FunctionInfo,
    name: &str,
    uses: &mut Vec<SwizzleUse>,
) {
    for (_, expression) in function.expressions.iter() {
        let Expression::Swizzle {
            size,
            vector,
            pattern,
        } = *expression
        else {
            continue;
        };

        let source_size = match *function_info[vector].ty.inner_with(&module.types) {
            TypeInner::Vector { size, .. } => Some(vector_len(size)),
            TypeInner::ValuePointer {
                size: Some(size), ..
            } => Some(vector_len(size)),
            _ => None,
        };

        uses.push(SwizzleUse {
            function: name.to_string(),
            swizzle: from_naga(size, pattern),
            source_size,
        });
    }
}
