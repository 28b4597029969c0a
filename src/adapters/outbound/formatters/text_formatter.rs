use crate::application::dto::FetchResult;
use crate::fetching::domain::FetchedArtifact;
use crate::ports::outbound::FetchResultFormatter;
use crate::shared::Result;
use std::fmt::Write;

const INDENT: &str = "   ";

/// TextTreeFormatter adapter rendering the fetched artifacts as an indented tree
///
/// Each line shows the coordinates and the local path of one artifact;
/// errors are listed after the tree.
pub struct TextTreeFormatter;

impl TextTreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_artifact(output: &mut String, artifact: &FetchedArtifact, depth: usize) -> Result<()> {
        let marker = if depth == 0 { "" } else { "+- " };
        writeln!(
            output,
            "{}{}{}  ({})",
            INDENT.repeat(depth.saturating_sub(1)),
            marker,
            artifact,
            artifact.path().display()
        )?;
        for dependency in artifact.dependencies() {
            Self::write_artifact(output, dependency, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for TextTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchResultFormatter for TextTreeFormatter {
    fn format(&self, result: &FetchResult) -> Result<String> {
        let mut output = String::new();

        if result.artifacts().next().is_none() {
            writeln!(output, "No artifacts fetched")?;
        }
        for artifact in result.artifacts() {
            Self::write_artifact(&mut output, artifact, 0)?;
        }

        if result.has_errors() {
            writeln!(output)?;
            writeln!(output, "Errors:")?;
            for error in result.errors() {
                for (i, line) in error.to_string().lines().enumerate() {
                    let prefix = if i == 0 { "  - " } else { "    " };
                    writeln!(output, "{}{}", prefix, line)?;
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::RootOutcome;
    use crate::fetching::domain::Coordinate;
    use crate::shared::error::FetchError;
    use std::path::PathBuf;

    fn artifact(artifact_id: &str, dependencies: Vec<FetchedArtifact>) -> FetchedArtifact {
        FetchedArtifact::new(
            &Coordinate::new("g", artifact_id, "1.0"),
            PathBuf::from(format!("/repo/{}-1.0.jar", artifact_id)),
            dependencies,
        )
    }

    #[test]
    fn test_format_tree() {
        let tree = artifact(
            "root",
            vec![artifact("a", vec![artifact("a1", vec![])]), artifact("b", vec![])],
        );
        let result =
            FetchResult::new(vec![RootOutcome::new("g:root:1.0").with_artifacts(vec![tree])]);

        let text = TextTreeFormatter::new().format(&result).unwrap();

        assert_eq!(
            text,
            "g:root:1.0  (/repo/root-1.0.jar)\n\
             +- g:a:1.0  (/repo/a-1.0.jar)\n\
             \x20  +- g:a1:1.0  (/repo/a1-1.0.jar)\n\
             +- g:b:1.0  (/repo/b-1.0.jar)\n"
        );
    }

    #[test]
    fn test_format_errors_only() {
        let mut outcome = RootOutcome::new("a:b:1.0");
        outcome.push_error(FetchError::ArtifactRetrieval {
            file: "b-1.0.jar".to_string(),
        });

        let text = TextTreeFormatter::new()
            .format(&FetchResult::new(vec![outcome]))
            .unwrap();

        assert!(text.starts_with("No artifacts fetched\n"));
        assert!(text.contains("Errors:\n  - Could not fetch artifact b-1.0.jar\n"));
    }
}
