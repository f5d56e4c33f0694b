use crate::core::requirements::RawRequirements;
use crate::io::output::OutputFormat as IoOutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archmap")]
#[command(about = "Architecture style recommendation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to .archmap.toml discovered upwards)
    #[arg(long, global = true, env = "ARCHMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend the best-fitting architecture styles
    Recommend {
        #[command(flatten)]
        requirements: RequirementArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Number of recommendations to return (overrides config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Score every architecture without ranking
    Evaluate {
        #[command(flatten)]
        requirements: RequirementArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the architecture catalog
    Architectures {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List design patterns
    Patterns {
        /// Only patterns applicable to this architecture id
        #[arg(long)]
        architecture: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Record satisfaction with a past recommendation
    Feedback {
        /// JSON-lines feedback log
        #[arg(long, default_value = "archmap-feedback.jsonl")]
        store: PathBuf,

        /// Caller-assigned recommendation id
        #[arg(long)]
        id: String,

        /// Architecture id that was recommended
        #[arg(long)]
        architecture: String,

        /// Confidence reported with the recommendation
        #[arg(long, default_value = "0")]
        confidence: f64,

        /// Satisfaction from 1 (poor) to 5 (excellent)
        #[arg(long)]
        satisfaction: u8,

        #[arg(long)]
        comment: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show rolling performance metrics from a feedback log
    Metrics {
        /// JSON-lines feedback log
        #[arg(long, default_value = "archmap-feedback.jsonl")]
        store: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .archmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct RequirementArgs {
    /// Requirements file (.json or .toml); flags below override its values
    #[arg(short, long)]
    pub requirements: Option<PathBuf>,

    /// Expected user traffic (low, medium, high, variable)
    #[arg(long)]
    pub traffic: Option<String>,

    /// Domain complexity (low, medium, high)
    #[arg(long)]
    pub complexity: Option<String>,

    /// Team size (small, medium, large)
    #[arg(long)]
    pub team_size: Option<String>,

    /// Scalability needs (low, medium, high)
    #[arg(long)]
    pub scalability: Option<String>,

    /// Budget (low, medium, high)
    #[arg(long)]
    pub budget: Option<String>,

    #[arg(long)]
    pub security: Option<String>,

    #[arg(long)]
    pub maintenance: Option<String>,

    #[arg(long)]
    pub performance: Option<String>,

    /// Regulatory compliance required (yes, no)
    #[arg(long)]
    pub compliance: Option<String>,
}

impl RequirementArgs {
    /// Requirements given directly as flags.
    pub fn flag_overrides(&self) -> RawRequirements {
        RawRequirements {
            user_traffic: self.traffic.clone(),
            complexity: self.complexity.clone(),
            team_size: self.team_size.clone(),
            scalability: self.scalability.clone(),
            budget: self.budget.clone(),
            security: self.security.clone(),
            maintenance: self.maintenance.clone(),
            performance: self.performance.clone(),
            compliance: self.compliance.clone(),
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for IoOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => IoOutputFormat::Json,
            OutputFormat::Terminal => IoOutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend_flags() {
        let cli = Cli::try_parse_from([
            "archmap",
            "recommend",
            "--traffic",
            "high",
            "--team-size",
            "large",
            "--format",
            "json",
            "--top",
            "2",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        let Commands::Recommend {
            requirements,
            output,
            top,
        } = cli.command
        else {
            panic!("expected recommend");
        };
        assert_eq!(top, Some(2));
        assert_eq!(output.format, Some(OutputFormat::Json));
        let raw = requirements.flag_overrides();
        assert_eq!(raw.user_traffic.as_deref(), Some("high"));
        assert_eq!(raw.team_size.as_deref(), Some("large"));
        assert_eq!(raw.budget, None);
    }

    #[test]
    fn test_parse_feedback() {
        let cli = Cli::try_parse_from([
            "archmap",
            "feedback",
            "--id",
            "rec-1",
            "--architecture",
            "soa",
            "--satisfaction",
            "4",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Feedback { satisfaction: 4, .. }
        ));
    }
}
