//! Skeleton SMV file with the variable declarations of both players.
//!
//! # SMV File Format (.smv)
//!
//! ```text
//! -- Skeleton SMV file
//! -- (Generated by topo-spec)
//!
//!
//! MODULE main
//!     VAR
//!         e : env();
//!         s : sys();
//!
//! MODULE env -- inputs
//!     VAR
//! 		<sensor> : boolean;
//!
//! MODULE sys -- outputs
//!     VAR
//! 		<prop> : boolean;
//! ```
//!
//! Proposition lines are indented with two tabs. Names are written as given:
//! no uniqueness or identifier checks are made.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::WriterConfig;
use crate::error::Result;
use crate::utils::append_extension;

/// Extension of the declaration file, always appended to the given name.
pub const SMV_EXTENSION: &str = "smv";

/// Renders the SMV declaration text.
pub fn render_smv<S: AsRef<str>>(sensors: &[S], robot_props: &[S], config: &WriterConfig) -> String {
    let mut out = String::new();

    out.push_str("\n-- Skeleton SMV file\n");
    out.push_str(&format!("-- (Generated by {})\n", config.generator));
    out.push_str("\n\nMODULE main\n");
    out.push_str("    VAR\n");
    out.push_str(&format!("        {} : env();\n", config.env_instance));
    out.push_str(&format!("        {} : sys();\n", config.sys_instance));

    out.push_str("\nMODULE env -- inputs\n");
    out.push_str("    VAR\n");
    for sensor in sensors {
        out.push_str(&format!("\t\t{} : boolean;\n", sensor.as_ref()));
    }

    out.push_str("\nMODULE sys -- outputs\n");
    out.push_str("    VAR\n");
    for prop in robot_props {
        out.push_str(&format!("\t\t{} : boolean;\n", prop.as_ref()));
    }

    out
}

/// Writes `<name>.smv` declaring the sensor and robot propositions.
///
/// Region-encoding propositions (see [`crate::encoding::region_propositions`])
/// must already be among `robot_props`. Returns the path written.
pub fn write_smv<S: AsRef<str>>(name: impl AsRef<Path>, sensors: &[S], robot_props: &[S]) -> Result<PathBuf> {
    write_smv_with_config(name, sensors, robot_props, &WriterConfig::default())
}

/// Like [`write_smv`], with custom naming.
pub fn write_smv_with_config<S: AsRef<str>>(
    name: impl AsRef<Path>,
    sensors: &[S],
    robot_props: &[S],
    config: &WriterConfig,
) -> Result<PathBuf> {
    let path = append_extension(name.as_ref(), SMV_EXTENSION);
    debug!(
        "write_smv({}, sensors = {}, props = {})",
        path.display(),
        sensors.len(),
        robot_props.len()
    );
    fs::write(&path, render_smv(sensors, robot_props, config))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var_lines(text: &str, module: &str) -> Vec<String> {
        text.split("\nMODULE ")
            .find(|section| section.starts_with(module))
            .map(|section| {
                section
                    .lines()
                    .filter(|l| l.starts_with("\t\t"))
                    .map(|l| l.trim().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_render_modules() {
        let text = render_smv(&["s1", "s2"], &["r1"], &WriterConfig::default());
        assert_eq!(var_lines(&text, "env"), vec!["s1 : boolean;", "s2 : boolean;"]);
        assert_eq!(var_lines(&text, "sys"), vec!["r1 : boolean;"]);
        assert!(var_lines(&text, "main").is_empty());
    }

    #[test]
    fn test_render_exact() {
        let text = render_smv(&["person"], &["bit0", "pick_up"], &WriterConfig::default());
        let expected = "\n-- Skeleton SMV file\n\
                        -- (Generated by topo-spec)\n\
                        \n\
                        \n\
                        MODULE main\n    VAR\n        e : env();\n        s : sys();\n\
                        \n\
                        MODULE env -- inputs\n    VAR\n\t\tperson : boolean;\n\
                        \n\
                        MODULE sys -- outputs\n    VAR\n\t\tbit0 : boolean;\n\t\tpick_up : boolean;\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_lists() {
        let none: [&str; 0] = [];
        let text = render_smv(&none, &none, &WriterConfig::default());
        assert!(text.ends_with("MODULE sys -- outputs\n    VAR\n"));
        assert!(!text.contains("boolean"));
    }

    #[test]
    fn test_custom_instances() {
        let config = WriterConfig {
            env_instance: "env_i",
            sys_instance: "sys_i",
            ..WriterConfig::default()
        };
        let text = render_smv(&["a"], &["b"], &config);
        assert!(text.contains("        env_i : env();\n        sys_i : sys();\n"));
    }
}
