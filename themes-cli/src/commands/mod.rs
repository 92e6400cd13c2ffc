//! CLI command implementations

pub mod list;

pub use list::ListArgs;

use themes_github::parse_repo_slug;

/// Resolve `--org` and `--repo` into a tracker target
///
/// `--repo` may be a bare repository name or an `owner/repo` slug or URL;
/// a slug supplies the organization too and must agree with `--org`.
pub fn resolve_target(
    org: Option<String>,
    repo: Option<String>,
) -> anyhow::Result<(Option<String>, Option<String>)> {
    let Some(repo) = repo else {
        return Ok((org, None));
    };

    if !repo.contains('/') && !repo.contains(':') {
        return Ok((org, Some(repo)));
    }

    let (slug_org, slug_repo) = parse_repo_slug(&repo)?;
    if let Some(org) = org.as_deref() {
        if org != slug_org {
            anyhow::bail!(
                "--org {} conflicts with organization {} in --repo {}",
                org,
                slug_org,
                repo
            );
        }
    }

    Ok((Some(slug_org), Some(slug_repo)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_repo_keeps_org() {
        let (org, repo) = resolve_target(Some("example".into()), Some("keps".into())).unwrap();
        assert_eq!(org.as_deref(), Some("example"));
        assert_eq!(repo.as_deref(), Some("keps"));
    }

    #[test]
    fn test_slug_sets_org() {
        let (org, repo) = resolve_target(None, Some("example/keps".into())).unwrap();
        assert_eq!(org.as_deref(), Some("example"));
        assert_eq!(repo.as_deref(), Some("keps"));
    }

    #[test]
    fn test_url_sets_org() {
        let (org, repo) =
            resolve_target(None, Some("https://github.com/kubernetes/enhancements".into()))
                .unwrap();
        assert_eq!(org.as_deref(), Some("kubernetes"));
        assert_eq!(repo.as_deref(), Some("enhancements"));
    }

    #[test]
    fn test_conflicting_org_rejected() {
        assert!(resolve_target(Some("other".into()), Some("example/keps".into())).is_err());
    }

    #[test]
    fn test_nothing_given() {
        assert_eq!(resolve_target(None, None).unwrap(), (None, None));
    }
}
