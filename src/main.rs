use anyhow::{Context, Result};
use archmap::cli::{Cli, Commands, OutputArgs, RequirementArgs};
use archmap::config::{self, ArchmapConfig, RankingConfig, CONFIG_FILE_NAME};
use archmap::core::ArchitectureKind;
use archmap::feedback::{Feedback, JsonlFeedbackStore};
use archmap::io::{create_writer, load_requirements, OutputFormat, OutputWriter};
use archmap::observability::{init_logging, install_panic_hook, set_phase, PipelinePhase};
use archmap::{RawRequirements, RecommendationEngine, RecommendationRef};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = {
        let _phase = set_phase(PipelinePhase::ConfigLoading);
        load_configuration(cli.config.as_deref())?
    };

    match cli.command {
        Commands::Recommend {
            requirements,
            output,
            top,
        } => {
            let config = with_top_n(config, top);
            let raw = resolve_requirements(&requirements)?;
            let engine = RecommendationEngine::from_config(&config);
            let response = engine.generate_recommendation(&raw);
            emit(&config, &output, |w| w.write_recommendation(&response))?;
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Evaluate {
            requirements,
            output,
        } => {
            let raw = resolve_requirements(&requirements)?;
            let report = RecommendationEngine::from_config(&config).evaluate(&raw);
            emit(&config, &output, |w| w.write_evaluation(&report))?;
        }
        Commands::Architectures { output } => {
            let engine = RecommendationEngine::from_config(&config);
            emit(&config, &output, |w| {
                w.write_architectures(engine.list_architectures())
            })?;
        }
        Commands::Patterns {
            architecture,
            output,
        } => {
            let engine = RecommendationEngine::from_config(&config);
            let patterns: Vec<_> = match architecture.as_deref() {
                Some(id) => {
                    let kind = ArchitectureKind::from_id(id)
                        .with_context(|| format!("Unknown architecture '{}'", id))?;
                    engine.catalog().patterns_for(kind).collect()
                }
                None => engine.list_design_patterns().iter().collect(),
            };
            emit(&config, &output, |w| w.write_patterns(&patterns))?;
        }
        Commands::Feedback {
            store,
            id,
            architecture,
            confidence,
            satisfaction,
            comment,
            output,
        } => {
            let engine = open_feedback_engine(&config, &store)?;
            let reference = RecommendationRef {
                id,
                architecture_id: architecture,
                confidence,
            };
            let feedback = Feedback {
                satisfaction,
                comment,
            };
            let ack = engine
                .record_feedback(&reference, feedback)
                .context("Failed to record feedback")?;
            log::info!("Recorded feedback ({} accuracy)", ack.accuracy);
            emit(&config, &output, |w| w.write_metrics(&ack.metrics))?;
        }
        Commands::Metrics { store, output } => {
            let engine = open_feedback_engine(&config, &store)?;
            let metrics = engine.get_performance_metrics();
            emit(&config, &output, |w| w.write_metrics(&metrics))?;
        }
        Commands::Init { force } => init_config(force)?,
    }

    Ok(())
}

fn load_configuration(path: Option<&Path>) -> Result<ArchmapConfig> {
    match path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

fn with_top_n(mut config: ArchmapConfig, top: Option<usize>) -> ArchmapConfig {
    if let Some(top_n) = top {
        let ranking = config.ranking.unwrap_or_default();
        config.ranking = Some(RankingConfig { top_n, ..ranking });
    }
    config
}

fn resolve_requirements(args: &RequirementArgs) -> Result<RawRequirements> {
    let base = match &args.requirements {
        Some(path) => load_requirements(path)
            .with_context(|| format!("Failed to read requirements from {}", path.display()))?,
        None => RawRequirements::default(),
    };
    Ok(base.with_overrides(args.flag_overrides()))
}

fn open_feedback_engine(
    config: &ArchmapConfig,
    store: &Path,
) -> Result<RecommendationEngine<JsonlFeedbackStore>> {
    let store = JsonlFeedbackStore::open(store)
        .with_context(|| format!("Failed to open feedback log {}", store.display()))?;
    Ok(RecommendationEngine::with_store(config, store))
}

fn output_format(config: &ArchmapConfig, args: &OutputArgs) -> OutputFormat {
    if let Some(format) = args.format {
        return format.into();
    }
    config
        .output
        .as_ref()
        .and_then(|output| output.default_format.as_deref())
        .and_then(|format| match format.parse() {
            Ok(format) => Some(format),
            Err(e) => {
                log::warn!("{} in config. Using terminal output.", e);
                None
            }
        })
        .unwrap_or_default()
}

fn emit(
    config: &ArchmapConfig,
    args: &OutputArgs,
    write: impl FnOnce(&mut dyn OutputWriter) -> Result<()>,
) -> Result<()> {
    let _phase = set_phase(PipelinePhase::OutputGeneration);
    let format = output_format(config, args);

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = create_writer(format, sink);
    write(writer.as_mut())?;
    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            CONFIG_FILE_NAME
        );
    }
    std::fs::write(&path, config::default_config_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
