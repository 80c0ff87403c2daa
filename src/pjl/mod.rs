//! Job-language environment consulted for default font selection.
//!
//! The bootstrap reads `FONTSOURCE`, `FONTNUMBER`, `PITCH`, `PTSIZE` and
//! `SYMSET`, and walks the font-source enumeration with
//! [`JobEnvironment::advance_to_next_source`].

use std::collections::HashMap;

use crate::config::PjlConfig;
use crate::params;

pub const FONTSOURCE: &str = "FONTSOURCE";
pub const FONTNUMBER: &str = "FONTNUMBER";
pub const PITCH: &str = "PITCH";
pub const PTSIZE: &str = "PTSIZE";
pub const SYMSET: &str = "SYMSET";

/// Host job-language variables and font-source enumeration.
pub trait JobEnvironment {
    /// Current value of a variable; names are case-insensitive.
    fn get_var(&self, name: &str) -> Option<String>;

    /// Move `FONTSOURCE` to the next source in the enumeration.
    ///
    /// Returns `false` once the enumeration has wrapped back to the source
    /// the walk started from.
    fn advance_to_next_source(&mut self) -> bool;

    /// Restart the enumeration at the configured initial source.
    fn rewind_sources(&mut self);

    /// Where the named source's fonts live, if configured.
    fn source_path(&self, source: &str) -> Option<String>;

    fn var_to_int(&self, name: &str) -> Option<i64> {
        self.get_var(name)?.trim().parse().ok()
    }

    fn var_to_float(&self, name: &str) -> Option<f64> {
        self.get_var(name)?.trim().parse().ok()
    }

    /// PCL symbol-set value of a `SYMSET` string.
    fn map_symset(&self, value: &str) -> Option<u16> {
        params::pjl_symbol_set(value)
    }
}

/// In-memory job-language environment seeded from configuration.
#[derive(Debug, Clone)]
pub struct PjlEnvironment {
    vars: HashMap<String, String>,
    sources: Vec<String>,
    initial: usize,
    current: usize,
    source_paths: HashMap<String, String>,
}

impl PjlEnvironment {
    pub fn from_config(config: &PjlConfig) -> Self {
        let mut sources: Vec<String> = config
            .sources
            .iter()
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        let first = config.fontsource.trim().to_ascii_uppercase();
        let initial = match sources.iter().position(|s| *s == first) {
            Some(i) => i,
            None => {
                sources.insert(0, first);
                0
            }
        };

        let mut vars = HashMap::new();
        vars.insert(FONTNUMBER.to_owned(), config.fontnumber.to_string());
        vars.insert(PITCH.to_owned(), config.pitch.to_string());
        vars.insert(PTSIZE.to_owned(), config.ptsize.to_string());
        vars.insert(SYMSET.to_owned(), config.symset.clone());

        let source_paths = config
            .source_paths
            .iter()
            .map(|(k, v)| (k.trim().to_ascii_uppercase(), v.clone()))
            .collect();

        Self {
            vars,
            sources,
            initial,
            current: initial,
            source_paths,
        }
    }

    /// Set a variable, as a job-language `SET` command would.
    ///
    /// Setting `FONTSOURCE` moves the enumeration to that source, appending
    /// it if it is not listed.
    pub fn set_var(&mut self, name: &str, value: &str) {
        let name = name.trim().to_ascii_uppercase();
        if name == FONTSOURCE {
            let value = value.trim().to_ascii_uppercase();
            self.current = match self.sources.iter().position(|s| *s == value) {
                Some(i) => i,
                None => {
                    self.sources.push(value);
                    self.sources.len() - 1
                }
            };
            self.initial = self.current;
        } else {
            self.vars.insert(name, value.to_owned());
        }
    }

    /// The enumeration order of sources.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

impl Default for PjlEnvironment {
    fn default() -> Self {
        Self::from_config(&PjlConfig::default())
    }
}

impl JobEnvironment for PjlEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        let name = name.trim().to_ascii_uppercase();
        if name == FONTSOURCE {
            return self.sources.get(self.current).cloned();
        }
        self.vars.get(&name).cloned()
    }

    fn advance_to_next_source(&mut self) -> bool {
        if self.sources.is_empty() {
            return false;
        }
        self.current = (self.current + 1) % self.sources.len();
        self.current != self.initial
    }

    fn rewind_sources(&mut self) {
        self.current = self.initial;
    }

    fn source_path(&self, source: &str) -> Option<String> {
        let source = source.trim().to_ascii_uppercase();
        self.source_paths.get(&source).cloned().or_else(|| {
            let family = source.get(..1)?;
            self.source_paths.get(family).cloned()
        })
    }
}

#[cfg(test)]
mod tests;
