use clap::Parser;

use maven_fetcher::application::dto::OutputFormat;

/// Fetch Maven artifacts and their transitive dependencies into a local repository
#[derive(Parser, Debug)]
#[command(name = "maven-fetcher")]
#[command(version)]
#[command(
    about = "Fetch Maven artifacts and their transitive dependencies into a local repository",
    long_about = None
)]
pub struct Args {
    /// Artifacts to fetch: <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>
    /// or <groupId>:<artifactId> for the latest version
    #[arg(value_name = "COORDINATES", required = true)]
    pub coordinates: Vec<String>,

    /// Dependency scope to follow (repeatable, defaults to compile and provided)
    #[arg(short, long = "scope", value_name = "SCOPE")]
    pub scopes: Vec<String>,

    /// Also fetch optional dependencies
    #[arg(long)]
    pub optional: bool,

    /// Exclude an artifact and its dependencies: <groupId>:<artifactId>
    /// Can be specified multiple times: -e "g:a" -e "g:b"
    #[arg(short, long = "exclude", value_name = "GROUP:ARTIFACT")]
    pub exclude: Vec<String>,

    /// Additional remote repository: id=url or 'id=url [user:pwd]'
    #[arg(short, long = "repository", value_name = "REPOSITORY")]
    pub repositories: Vec<String>,

    /// Do not use Maven Central
    #[arg(long)]
    pub no_default_repository: bool,

    /// Local repository directory (defaults to ~/.m2/repository)
    #[arg(short, long, value_name = "DIR")]
    pub local_repository: Option<String>,

    /// Configuration property as key=value (e.g. proxy.url=http://proxy:3128)
    #[arg(short = 'D', long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Path to config file (defaults to maven-fetcher.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log transfers and skipped dependencies
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_property(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), val.trim().to_string()))
        }
        _ => Err(format!("Invalid property: {}. Expected key=value", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_arguments() {
        let args = Args::try_parse_from(["maven-fetcher", "g:a:1.0"]).unwrap();
        assert_eq!(args.coordinates, vec!["g:a:1.0"]);
        assert!(args.scopes.is_empty());
        assert!(!args.optional);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_repeatable_options() {
        let args = Args::try_parse_from([
            "maven-fetcher",
            "g:a:1.0",
            "g:b",
            "-s",
            "compile",
            "--scope",
            "runtime",
            "-e",
            "g:c",
            "-r",
            "internal=https://repo.example.com",
            "--no-default-repository",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(args.coordinates, vec!["g:a:1.0", "g:b"]);
        assert_eq!(args.scopes, vec!["compile", "runtime"]);
        assert_eq!(args.exclude, vec!["g:c"]);
        assert_eq!(args.repositories, vec!["internal=https://repo.example.com"]);
        assert!(args.no_default_repository);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_property_parsing() {
        let args = Args::try_parse_from([
            "maven-fetcher",
            "g:a:1.0",
            "-D",
            "proxy.url=http://proxy:3128",
        ])
        .unwrap();
        assert_eq!(
            args.properties,
            vec![("proxy.url".to_string(), "http://proxy:3128".to_string())]
        );

        assert!(Args::try_parse_from(["maven-fetcher", "g:a:1.0", "-D", "novalue"]).is_err());
    }

    #[test]
    fn test_coordinates_are_required() {
        assert!(Args::try_parse_from(["maven-fetcher"]).is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Args::try_parse_from(["maven-fetcher", "g:a:1.0", "-f", "yaml"]).is_err());
    }
}
