//! Archive planning service
//!
//! Pure domain logic: classifies each resolved file and upserts it into the
//! destination-keyed plan. No filesystem access.

use crate::domain::entities::ArchivePlan;

use super::classifier::PathClassifier;

pub struct ArchivePlanner<'a> {
    classifier: &'a PathClassifier,
}

impl<'a> ArchivePlanner<'a> {
    pub fn new(classifier: &'a PathClassifier) -> Self {
        Self { classifier }
    }

    /// Build the plan for `files`, in order.
    ///
    /// When two files share a destination the later one wins.
    pub fn plan<I, S>(&self, files: I) -> ArchivePlan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = ArchivePlan::new();
        for file in files {
            let source = file.as_ref();
            let destination = self.classifier.destination(source);
            if let Some(previous) = plan.insert(source, destination.as_str()) {
                if previous != source {
                    tracing::debug!(
                        destination = %destination,
                        replaced = %previous,
                        by = %source,
                        "destination planned twice, keeping the later source"
                    );
                }
            }
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(files: &[&str]) -> ArchivePlan {
        let classifier = PathClassifier::for_compiled_sources("lib/**/*");
        ArchivePlanner::new(&classifier).plan(files)
    }

    #[test]
    fn plan_maps_every_shape() {
        let plan = plan(&[
            "lib/handlers/foo.js",
            "node_modules/uuid/index.js",
            "../users/node_modules/axios/index.js",
        ]);

        assert_eq!(
            plan.iter().collect::<Vec<_>>(),
            vec![
                ("lib/handlers/foo.js", "handlers/foo.js"),
                ("node_modules/uuid/index.js", "node_modules/uuid/index.js"),
                (
                    "../users/node_modules/axios/index.js",
                    "node_modules/axios/index.js"
                ),
            ]
        );
    }

    #[test]
    fn later_source_wins_for_shared_destination() {
        let plan = plan(&[
            "../a/node_modules/ms/index.js",
            "lib/other.js",
            "../b/node_modules/ms/index.js",
        ]);

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.source_for("node_modules/ms/index.js"),
            Some("../b/node_modules/ms/index.js")
        );
        // Position of the first sighting is kept
        assert_eq!(plan.iter().next().unwrap().1, "node_modules/ms/index.js");
    }

    #[test]
    fn repeated_file_collapses() {
        let plan = plan(&["lib/a.js", "lib/a.js"]);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_plan() {
        assert!(plan(&[]).is_empty());
    }
}
