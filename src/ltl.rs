//! LTL specification file with environment assumptions and system guarantees.
//!
//! # LTL File Format (.ltl)
//!
//! ```text
//! -- LTL specification file
//! -- (Generated by topo-spec)
//!
//! LTLSPEC -- Assumptions
//! 	(
//! 	<filler> &
//! (<assumptions>)
//! 	);
//!
//! LTLSPEC -- Guarantees
//! 	(
//! 	<filler> &
//! (<guarantees>)
//! 	);
//! ```
//!
//! The filler is the placeholder conjunction computed by
//! [`filler_formula`][crate::completion::filler_formula]. When no filler is needed
//! the block holds only the original fragment; when the fragment is blank it holds
//! only the filler.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::completion::filler_formula;
use crate::config::WriterConfig;
use crate::error::Result;
use crate::fragment::SpecFragment;
use crate::utils::ensure_extension;

/// Extension of the formula file, appended unless already present.
pub const LTL_EXTENSION: &str = "ltl";

/// Combines a flattened fragment with the filler it needs.
///
/// Yields `filler`, `original`, or `filler & \n(original)`.
pub fn complete_fragment(spec_part: &str) -> Result<String> {
    let filler = filler_formula(spec_part)?;
    let original = spec_part.trim();
    let body = match (filler.is_empty(), original.is_empty()) {
        (_, true) => filler,
        (true, false) => original.to_string(),
        (false, false) => format!("{} & \n({})", filler, original),
    };
    Ok(body)
}

fn push_block(out: &mut String, label: &str, body: &str) {
    out.push_str(&format!("LTLSPEC -- {}\n", label));
    out.push_str("\t(\n");
    out.push('\t');
    out.push_str(body);
    out.push_str("\n\t);\n");
}

/// Renders the LTL file text for the given assumptions and guarantees.
pub fn render_ltl(spec_env: &SpecFragment, spec_sys: &SpecFragment, config: &WriterConfig) -> Result<String> {
    let env = complete_fragment(&spec_env.flatten()?)?;
    let sys = complete_fragment(&spec_sys.flatten()?)?;

    let mut out = String::new();
    out.push_str("\n-- LTL specification file\n");
    out.push_str(&format!("-- (Generated by {})\n\n", config.generator));
    push_block(&mut out, "Assumptions", &env);
    out.push('\n');
    push_block(&mut out, "Guarantees", &sys);
    Ok(out)
}

/// Writes `<name>.ltl` with the completed assumptions and guarantees.
///
/// Returns the path written. Nothing is written if either fragment fails to
/// flatten or parse.
pub fn write_ltl(
    name: impl AsRef<Path>,
    spec_env: impl Into<SpecFragment>,
    spec_sys: impl Into<SpecFragment>,
) -> Result<PathBuf> {
    write_ltl_with_config(name, &spec_env.into(), &spec_sys.into(), &WriterConfig::default())
}

/// Like [`write_ltl`], with custom naming.
pub fn write_ltl_with_config(
    name: impl AsRef<Path>,
    spec_env: &SpecFragment,
    spec_sys: &SpecFragment,
    config: &WriterConfig,
) -> Result<PathBuf> {
    let path = ensure_extension(name.as_ref(), LTL_EXTENSION);
    let text = render_ltl(spec_env, spec_sys, config)?;
    debug!("write_ltl({}, {} bytes)", path.display(), text.len());
    fs::write(&path, text)?;
    Ok(path)
}
