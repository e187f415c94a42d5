//! Literal text substitution for captured child output.

use crate::config::RewriteRule;
use crate::error::{LauncherError, Result};
use regex::{NoExpand, Regex, RegexBuilder};

/// A compiled [`RewriteRule`].
#[derive(Debug, Clone)]
pub struct OutputRewrite {
    pattern: Regex,
    replacement: String,
    include_stderr: bool,
}

impl OutputRewrite {
    /// Compile a rule. The rule's `from` text is escaped, so it always matches literally.
    pub fn from_rule(rule: &RewriteRule) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(&rule.from))
            .case_insensitive(rule.case_insensitive)
            .build()
            .map_err(|e| {
                LauncherError::Config(format!(
                    "invalid rewrite pattern '{}': {}",
                    rule.from, e
                ))
            })?;

        Ok(Self {
            pattern,
            replacement: rule.to.clone(),
            include_stderr: rule.include_stderr,
        })
    }

    /// Replace every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }

    /// Rewrite captured stdout.
    pub fn apply_stdout(&self, text: &str) -> String {
        self.apply(text)
    }

    /// Rewrite captured stderr, if the rule covers it.
    pub fn apply_stderr(&self, text: &str) -> String {
        if self.include_stderr {
            self.apply(text)
        } else {
            text.to_string()
        }
    }
}
