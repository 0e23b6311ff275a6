use crate::artifacts::branch::INVALID_REF_NAME_REGEX;
use anyhow::Context;

/// A validated reference name (branch, tag, or `HEAD`)
///
/// Validation follows git's ref-name rules: no leading dot or slash, no
/// `..`, no control characters or glob metacharacters, no `.lock` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("ref name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
            .with_context(|| format!("invalid ref name regex: {INVALID_REF_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("invalid ref name: {}", name);
        }

        Ok(Self(name))
    }

    pub fn is_head(&self) -> bool {
        self.0 == "HEAD"
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
