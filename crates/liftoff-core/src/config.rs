//! Run configuration: filter resolution and bump specifiers

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Directory-name filter applied at every level of the walk.
///
/// Resolution merges the implicit always-excluded names (the dependency
/// cache) into `exclude` up front, so the walk itself evaluates a fixed
/// two-branch rule: include-mode when `include` is non-empty, exclude-mode
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    include: HashSet<String>,
    exclude: HashSet<String>,
}

impl FilterSet {
    /// Build a filter from the CLI lists plus the implicit exclusions.
    pub fn resolve(
        include: Vec<String>,
        exclude: Vec<String>,
        implicit_excludes: &[&str],
    ) -> Self {
        let mut exclude: HashSet<String> = exclude.into_iter().collect();
        exclude.extend(implicit_excludes.iter().map(|s| s.to_string()));

        Self {
            include: include.into_iter().collect(),
            exclude,
        }
    }

    /// Whether a directory with this base name is kept by the filter.
    ///
    /// A non-empty include list overrides the exclude list entirely,
    /// implicit exclusions included.
    pub fn allows(&self, name: &str) -> bool {
        if !self.include.is_empty() {
            self.include.contains(name)
        } else {
            !self.exclude.contains(name)
        }
    }
}

/// Bump specifier forwarded to the version collaborator.
///
/// Mirrors what `npm version` accepts: a release keyword or an exact
/// semver version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpSpec {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
    FromGit,
    Exact(semver::Version),
}

impl FromStr for BumpSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "premajor" => Ok(Self::Premajor),
            "preminor" => Ok(Self::Preminor),
            "prepatch" => Ok(Self::Prepatch),
            "prerelease" => Ok(Self::Prerelease),
            "from-git" => Ok(Self::FromGit),
            other => semver::Version::parse(other)
                .map(Self::Exact)
                .map_err(|_| ConfigError::InvalidBumpType(other.to_string())),
        }
    }
}

impl std::fmt::Display for BumpSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::Premajor => write!(f, "premajor"),
            Self::Preminor => write!(f, "preminor"),
            Self::Prepatch => write!(f, "prepatch"),
            Self::Prerelease => write!(f, "prerelease"),
            Self::FromGit => write!(f, "from-git"),
            Self::Exact(v) => write!(f, "{}", v),
        }
    }
}

/// Split an opaque pass-through argument string into argv entries.
///
/// Arguments go to the collaborator via `Command::args`, not a shell, so
/// quoting is not interpreted.
pub fn split_extra_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Resolve the `--context` sub-directory against the invocation directory.
///
/// Applied once, before any traversal starts; the working directory is
/// never changed again during the walk.
pub fn resolve_context(root: &Path, context: &Path) -> std::result::Result<PathBuf, ConfigError> {
    let target = root.join(context);
    if !target.exists() {
        return Err(ConfigError::ContextNotFound(target));
    }
    if !target.is_dir() {
        return Err(ConfigError::ContextNotADirectory(target));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE_MODULES: &[&str] = &["node_modules"];

    #[test]
    fn test_exclude_mode_allows_unlisted() {
        let filter = FilterSet::resolve(vec![], vec!["bin".into()], NODE_MODULES);

        assert!(filter.allows("packages"));
        assert!(!filter.allows("bin"));
    }

    #[test]
    fn test_implicit_exclude_merged() {
        let filter = FilterSet::resolve(vec![], vec![], NODE_MODULES);

        assert!(!filter.allows("node_modules"));
    }

    #[test]
    fn test_include_mode_drops_everything_else() {
        let filter = FilterSet::resolve(vec!["react".into()], vec![], NODE_MODULES);

        assert!(filter.allows("react"));
        assert!(!filter.allows("webpack"));
    }

    #[test]
    fn test_include_overrides_implicit_exclude() {
        let filter = FilterSet::resolve(vec!["node_modules".into()], vec![], NODE_MODULES);

        assert!(filter.allows("node_modules"));
    }

    #[test]
    fn test_include_wins_over_explicit_exclude() {
        let filter =
            FilterSet::resolve(vec!["app".into()], vec!["app".into()], NODE_MODULES);

        assert!(filter.allows("app"));
    }

    #[test]
    fn test_bump_spec_keywords() {
        assert_eq!("patch".parse::<BumpSpec>().unwrap(), BumpSpec::Patch);
        assert_eq!("from-git".parse::<BumpSpec>().unwrap(), BumpSpec::FromGit);
        assert_eq!("premajor".parse::<BumpSpec>().unwrap(), BumpSpec::Premajor);
    }

    #[test]
    fn test_bump_spec_exact_version() {
        let spec = "2.0.0".parse::<BumpSpec>().unwrap();
        assert_eq!(spec.to_string(), "2.0.0");

        let pre = "1.0.0-beta.1".parse::<BumpSpec>().unwrap();
        assert!(matches!(pre, BumpSpec::Exact(_)));
    }

    #[test]
    fn test_bump_spec_rejects_garbage() {
        assert!("biggest".parse::<BumpSpec>().is_err());
        assert!("1.2".parse::<BumpSpec>().is_err());
    }

    #[test]
    fn test_split_extra_args() {
        assert_eq!(
            split_extra_args("--tag alpha --access public"),
            vec!["--tag", "alpha", "--access", "public"]
        );
        assert!(split_extra_args("").is_empty());
        assert!(split_extra_args("   ").is_empty());
    }

    #[test]
    fn test_resolve_context_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = resolve_context(temp.path(), Path::new("missing")).unwrap_err();

        assert!(matches!(err, ConfigError::ContextNotFound(_)));
    }

    #[test]
    fn test_resolve_context_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("sub"), "not a dir").unwrap();

        let err = resolve_context(temp.path(), Path::new("sub")).unwrap_err();
        assert!(matches!(err, ConfigError::ContextNotADirectory(_)));
    }

    #[test]
    fn test_resolve_context_ok() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();

        let target = resolve_context(temp.path(), Path::new("sub")).unwrap();
        assert_eq!(target, temp.path().join("sub"));
    }
}
