//! Property tests for path classification and planning.

use proptest::prelude::*;

use packagr::domain::services::{ArchivePlanner, PathClassifier};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}")
        .unwrap()
        .prop_filter("plain segment", |s| {
            s != "." && s != ".." && s != "node_modules"
        })
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification never panics on arbitrary input.
    #[test]
    fn property_destination_never_panics(
        pattern in "(?s).{0,64}",
        path in "(?s).{0,128}"
    ) {
        let classifier = PathClassifier::for_compiled_sources(&pattern);
        let _ = classifier.destination(&path);
    }

    /// PROPERTY: Files under the compiled root lose exactly that prefix.
    #[test]
    fn property_compiled_root_is_stripped(rest in relative_path()) {
        let classifier = PathClassifier::for_compiled_sources("lib/**/*");
        let destination = classifier.destination(&format!("lib/{}", rest));
        prop_assert_eq!(destination, rest);
    }

    /// PROPERTY: Dependencies of sibling services re-enter at `node_modules`.
    #[test]
    fn property_external_dependency_reenters_at_node_modules(
        sibling in relative_path(),
        rest in relative_path()
    ) {
        let classifier = PathClassifier::for_compiled_sources("lib/**/*");
        let path = format!("../{}/node_modules/{}", sibling, rest);
        prop_assert_eq!(classifier.destination(&path), format!("node_modules/{}", rest));
    }

    /// PROPERTY: Paths that are neither compiled nor external are kept verbatim.
    #[test]
    fn property_other_paths_are_verbatim(rest in relative_path()) {
        let classifier = PathClassifier::for_compiled_sources("lib/**/*");
        let path = format!("node_modules/{}", rest);
        prop_assert_eq!(classifier.destination(&path), path);
    }

    /// PROPERTY: A plan never holds more entries than files, and never two
    /// entries with the same destination.
    #[test]
    fn property_plan_destinations_are_unique(
        files in proptest::collection::vec(
            prop_oneof![
                relative_path().prop_map(|p| format!("lib/{}", p)),
                relative_path().prop_map(|p| format!("node_modules/{}", p)),
                (relative_path(), relative_path())
                    .prop_map(|(s, p)| format!("../{}/node_modules/{}", s, p)),
            ],
            0..24
        )
    ) {
        let classifier = PathClassifier::for_compiled_sources("lib/**/*");
        let plan = ArchivePlanner::new(&classifier).plan(&files);

        prop_assert!(plan.len() <= files.len());
        let mut destinations: Vec<&str> = plan.iter().map(|(_, d)| d).collect();
        let total = destinations.len();
        destinations.sort_unstable();
        destinations.dedup();
        prop_assert_eq!(destinations.len(), total);

        // Last write wins for every destination
        for (source, destination) in plan.iter() {
            let last = files
                .iter()
                .rev()
                .find(|f| classifier.destination(f) == destination)
                .unwrap();
            prop_assert_eq!(source, last.as_str());
        }
    }
}
