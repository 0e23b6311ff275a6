use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::core::DepthError;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;

/// A revision expression identifying the commit the depth walk starts from.
///
/// Supported forms:
/// - Ref names: `main`, `feature/new-feature`, `HEAD`
/// - Aliases: `@` (resolves to `HEAD`)
/// - Full OIDs: 40-character hexadecimal strings
/// - Abbreviated OIDs: 4-40 character hexadecimal strings
/// - Parent notation: `<revision>^`
/// - Ancestor notation: `<revision>~<n>`
///
/// OID-like strings parse as `Ref` variants first; during resolution, if no
/// ref with that name exists, they fall back to object-ID lookup. That
/// matches git's preference for refs when a name is ambiguous.
#[derive(Debug, Clone)]
pub enum Revision {
    /// A ref name, or an OID-like string resolved as a fallback
    Ref(RefName),
    /// The Nth first-parent ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
    /// The first parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_re = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_re = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_re.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;
            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_re.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;
            let base_revision = Self::try_parse(&caps[1])?;
            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            let ref_name = RefName::try_parse(resolved_name.to_string())?;
            Ok(Revision::Ref(ref_name))
        }
    }

    /// Resolve the expression to a commit object ID
    ///
    /// Returns `Ok(None)` when a ref exists in form but points nowhere (an
    /// unborn branch); unknown names and non-commit targets are errors.
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<Option<ObjectId>> {
        match self {
            Revision::Ref(ref_name) => {
                if let Some(oid) = repository.refs().read_ref(ref_name)? {
                    return Ok(Some(oid));
                }

                // No such ref - fall back to OID lookup if the name looks
                // like one
                if Self::looks_like_oid(ref_name.as_ref()) {
                    Ok(Some(Self::resolve_oid(ref_name.as_ref(), repository)?))
                } else if ref_name.is_head() {
                    // HEAD exists but points at an unborn branch
                    Ok(None)
                } else {
                    Err(anyhow::anyhow!("revision not found: {}", ref_name))
                }
            }
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(
        oid: Option<ObjectId>,
        repository: &Repository,
    ) -> anyhow::Result<Option<ObjectId>> {
        match oid {
            Some(oid) => {
                let commit = repository
                    .database()
                    .parse_object_as_commit(&oid)?
                    .ok_or(DepthError::NotACommit)
                    .with_context(|| format!("object {} is not a commit", oid.to_short_oid()))?;

                Ok(commit.parent().cloned())
            }
            None => Ok(None),
        }
    }

    fn resolve_oid(oid_str: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        if oid_str.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(oid_str.to_string())?;
            Self::validate_oid_is_commit(&oid, repository)?;
            return Ok(oid);
        }

        // Abbreviated OID - find matching objects
        let matches = repository.database().find_objects_by_prefix(oid_str)?;

        match matches.len() {
            0 => anyhow::bail!(
                "ambiguous argument '{}': unknown revision or path not in the working tree",
                oid_str
            ),
            1 => {
                let oid = matches[0].clone();
                Self::validate_oid_is_commit(&oid, repository)?;
                Ok(oid)
            }
            _ => {
                // Multiple matches - only commits are valid candidates
                let commit_matches: Vec<_> = matches
                    .iter()
                    .filter(|oid| {
                        repository
                            .database()
                            .get_object_type(oid)
                            .map(|t| t == ObjectType::Commit)
                            .unwrap_or(false)
                    })
                    .collect();

                match commit_matches.as_slice() {
                    [] => anyhow::bail!(
                        "ambiguous argument '{}': unknown revision or path not in the working tree",
                        oid_str
                    ),
                    [only] => Ok((*only).clone()),
                    _ => {
                        let mut error_msg = format!(
                            "short SHA1 {} is ambiguous\nhint: The candidates are:",
                            oid_str
                        );
                        for oid in &commit_matches {
                            error_msg.push_str(&format!("\nhint:   {} commit", oid.to_short_oid()));
                        }
                        anyhow::bail!(error_msg)
                    }
                }
            }
        }
    }

    fn validate_oid_is_commit(oid: &ObjectId, repository: &Repository) -> anyhow::Result<()> {
        let object_type = repository
            .database()
            .get_object_type(oid)
            .with_context(|| format!("object {} not found", oid))?;

        if object_type != ObjectType::Commit {
            return Err(DepthError::NotACommit).with_context(|| {
                format!(
                    "object {} is a {}, not a commit",
                    oid.to_short_oid(),
                    object_type
                )
            });
        }

        Ok(())
    }

    fn looks_like_oid(s: &str) -> bool {
        // Git resolves hex strings of 4 or more characters as abbreviations
        s.len() >= 4 && s.len() <= OBJECT_ID_LENGTH && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}
