//! Property tests for cross-scope dependency attribution.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use packagr::domain::ports::{PackageManager, PackageManagerError};
use packagr::domain::services::{DependencyCollector, IncludePatterns};

struct CannedNpm {
    listings: HashMap<PathBuf, Vec<PathBuf>>,
}

impl PackageManager for CannedNpm {
    fn production_dependencies(&self, scope: &Path) -> Result<Vec<PathBuf>, PackageManagerError> {
        self.listings
            .get(scope)
            .cloned()
            .ok_or_else(|| PackageManagerError::MissingScope(scope.to_path_buf()))
    }
}

/// Small name pool so scopes overlap often
fn package_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("uuid".to_string()),
        Just("axios".to_string()),
        Just("lodash".to_string()),
        Just("@aws-sdk/client-s3".to_string()),
        Just("@aws-sdk/types".to_string()),
        "[a-z]{1,6}",
    ]
}

/// Installed package, relative to the scope's `node_modules`: hoisted, or
/// nested under a parent package
fn installed_package() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => package_name(),
        1 => (package_name(), package_name())
            .prop_map(|(parent, name)| format!("{}/node_modules/{}", parent, name)),
    ]
}

fn scope_listing() -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::weighted(0.85, proptest::collection::vec(installed_package(), 0..8))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every identity is kept exactly once, by the first scope
    /// (in query order) that reports it, and every package the project
    /// reports gets its own include pattern.
    #[test]
    fn property_first_scope_wins(
        listings in proptest::collection::vec(scope_listing(), 1..5)
    ) {
        let root = PathBuf::from("/work/api");
        let services: Vec<PathBuf> = (1..listings.len())
            .map(|i| PathBuf::from(format!("../svc{}", i)))
            .collect();
        let scopes: Vec<PathBuf> = std::iter::once(root.clone())
            .chain(services.iter().map(|s| root.join(s)))
            .collect();

        let npm = CannedNpm {
            listings: scopes
                .iter()
                .zip(&listings)
                .filter_map(|(scope, installed)| {
                    installed.as_ref().map(|installed| {
                        let mut paths = vec![scope.clone()];
                        paths.extend(installed.iter().map(|rel| scope.join("node_modules").join(rel)));
                        (scope.clone(), paths)
                    })
                })
                .collect(),
        };

        let collected = DependencyCollector::new(&npm).collect(&root, &services);

        prop_assert_eq!(collected.scopes.len(), scopes.len());

        let mut expected_owner: HashMap<String, usize> = HashMap::new();
        for (index, installed) in listings.iter().enumerate() {
            for rel in installed.iter().flatten() {
                expected_owner.entry(rel.clone()).or_insert(index);
            }
        }

        let mut seen = HashSet::new();
        for (index, scope) in collected.scopes.iter().enumerate() {
            prop_assert_eq!(&scope.scope, &scopes[index]);
            for dep in &scope.kept {
                let identity = dep.identity().as_str().to_string();
                prop_assert!(seen.insert(identity.clone()), "{} kept twice", identity);
                prop_assert_eq!(expected_owner.get(&identity), Some(&index));
            }
        }
        prop_assert_eq!(seen.len(), expected_owner.len());
        prop_assert_eq!(collected.len(), expected_owner.len());

        let patterns = IncludePatterns::build(
            &root,
            "lib/**/*",
            collected.paths(),
            std::iter::empty::<&str>(),
        );
        for rel in listings[0].iter().flatten() {
            let pattern = format!("node_modules/{}/**", rel);
            prop_assert!(
                patterns.as_slice().contains(&pattern),
                "project package {} has no pattern in {:?}",
                rel,
                patterns.as_slice()
            );
        }
    }
}
