//! Naming and layout options for the generated files.

/// Naming options shared by topology compilation and file generation.
///
/// Use `WriterConfig::default()` for the standard naming.
///
/// # Examples
///
/// ```
/// use topo_spec::config::WriterConfig;
///
/// let config = WriterConfig {
///     bit_prefix: "reg",
///     ..WriterConfig::default()
/// };
/// assert_eq!(config.sys_var(&config.bit_name(1)), "s.reg1");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WriterConfig {
    /// Instance name of the environment module (default: "e")
    pub env_instance: &'static str,
    /// Instance name of the system module (default: "s")
    pub sys_instance: &'static str,
    /// Prefix of region-encoding bit propositions (default: "bit")
    pub bit_prefix: &'static str,
    /// Tool name written in file headers (default: "topo-spec")
    pub generator: &'static str,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            env_instance: "e",
            sys_instance: "s",
            bit_prefix: "bit",
            generator: "topo-spec",
        }
    }
}

impl WriterConfig {
    /// Name of the `k`-th region-encoding bit proposition, without instance.
    pub fn bit_name(&self, k: usize) -> String {
        format!("{}{}", self.bit_prefix, k)
    }

    /// Fully qualified system variable, e.g. `s.bit0`.
    pub fn sys_var(&self, name: &str) -> String {
        format!("{}.{}", self.sys_instance, name)
    }

    /// Fully qualified environment variable, e.g. `e.person`.
    pub fn env_var(&self, name: &str) -> String {
        format!("{}.{}", self.env_instance, name)
    }
}
