use indexmap::IndexMap;

use crate::dataset::{Project, Release};

/// Releases keyed by project group, in dataset traversal order.
pub type ReleasesByGroup<'a> = IndexMap<Option<String>, Vec<&'a Release>>;

pub fn group_releases(projects: &[Project]) -> ReleasesByGroup<'_> {
    projects
        .iter()
        .filter(|project| !project.releases.is_empty())
        .fold(ReleasesByGroup::new(), |mut groups, project| {
            groups
                .entry(project.project_group.clone())
                .or_default()
                .extend(project.releases.iter());
            groups
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{project, release};

    #[test]
    fn test_projects_sharing_a_group_are_concatenated() {
        let projects = vec![
            project(Some("Athens"), vec![release("1", vec![]), release("2", vec![])]),
            project(Some("Sparta"), vec![release("3", vec![])]),
            project(Some("Athens"), vec![release("4", vec![])]),
        ];

        let groups = group_releases(&projects);

        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Some("Athens".to_string()), Some("Sparta".to_string())]
        );

        let athens: Vec<_> = groups[&Some("Athens".to_string())]
            .iter()
            .map(|r| r.version.as_str())
            .collect();
        assert_eq!(athens, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_null_group_is_its_own_bucket() {
        let projects = vec![
            project(None, vec![release("1", vec![])]),
            project(Some("Athens"), vec![release("2", vec![])]),
            project(None, vec![release("3", vec![])]),
        ];

        let groups = group_releases(&projects);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&None::<String>].len(), 2);
        assert_eq!(groups.get_index(0).map(|(k, _)| k.clone()), Some(None));
    }

    #[test]
    fn test_project_without_releases_creates_no_group() {
        let projects = vec![
            project(Some("Empty"), vec![]),
            project(Some("Athens"), vec![release("1", vec![])]),
        ];

        let groups = group_releases(&projects);

        assert_eq!(groups.len(), 1);
        assert!(!groups.contains_key(&Some("Empty".to_string())));
    }

    #[test]
    fn test_no_projects() {
        assert!(group_releases(&[]).is_empty());
    }
}
