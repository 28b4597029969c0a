mod cli;

use cli::Args;
use maven_fetcher::adapters::outbound::console::StderrProgressReporter;
use maven_fetcher::adapters::outbound::network::RepositoryClient;
use maven_fetcher::adapters::outbound::repository::{Maven2LocalRepository, Maven2RepositoryBackend};
use maven_fetcher::application::dto::FetchRequest;
use maven_fetcher::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use maven_fetcher::application::use_cases::FetchArtifactsUseCase;
use maven_fetcher::config::{self, properties, ConfigFile, FetcherConfig};
use maven_fetcher::shared::error::ExitCode;
use maven_fetcher::shared::Result;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = build_config(&args)?;

    let client = RepositoryClient::new(config.get_proxy())?;
    let local_repository = Maven2LocalRepository::new(config.local_repository());
    let backend = Maven2RepositoryBackend::new(
        client,
        config.remote_repositories().to_vec(),
        local_repository.clone(),
    );
    let use_case =
        FetchArtifactsUseCase::new(backend, local_repository, StderrProgressReporter::new());

    let mut request = FetchRequest::new(args.coordinates)
        .excluding_artifacts(args.exclude)
        .retrieving_optionals(args.optional);
    if !args.scopes.is_empty() {
        request = request.scopes(args.scopes);
    }

    let result = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatted_output = FormatterFactory::create(args.format).format(&result)?;

    let presenter_type = match args.output {
        Some(path) => PresenterType::File(PathBuf::from(path)),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(if result.has_errors() {
        ExitCode::FetchErrors
    } else {
        ExitCode::Success
    })
}

/// Merges, in increasing precedence: defaults, config file, `-D` properties,
/// then the dedicated command-line options
fn build_config(args: &Args) -> Result<FetcherConfig> {
    let mut config = FetcherConfig::new();
    if let Some(file) = load_config_file(args.config.as_deref())? {
        config = config.with_config_file(&file)?;
    }

    let mut props: HashMap<String, String> = args.properties.iter().cloned().collect();
    if args.no_default_repository {
        props.insert(
            properties::USE_DEFAULT_REMOTE_REPOSITORY.to_string(),
            "false".to_string(),
        );
    }
    if !args.repositories.is_empty() {
        let entry = props
            .entry(properties::REMOTE_REPOSITORIES.to_string())
            .or_default();
        for repository in &args.repositories {
            if !entry.is_empty() {
                entry.push(';');
            }
            entry.push_str(repository);
        }
    }
    if let Some(local_repository) = &args.local_repository {
        props.insert(
            properties::LOCAL_REPOSITORY.to_string(),
            local_repository.clone(),
        );
    }

    Ok(config.with_properties(&props)?)
}

fn load_config_file(explicit: Option<&str>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        let file = config::load_config_from_path(Path::new(path))?;
        eprintln!("📄 Loaded config from: {}", path);
        return Ok(Some(file));
    }

    let current_dir = std::env::current_dir()?;
    let discovered = config::discover_config(&current_dir)?;
    if discovered.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            current_dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}
