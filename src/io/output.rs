use crate::core::analysis::{Recommendation, RiskLevel};
use crate::core::profiles::{ArchitectureProfile, DesignPatternProfile};
use crate::engine::{EvaluationReport, RecommendationResponse, RecommendationSet};
use crate::feedback::PerformanceMetrics;
use crate::priority::StrengthLabel;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "terminal" | "text" => Ok(Self::Terminal),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

pub trait OutputWriter {
    fn write_recommendation(&mut self, response: &RecommendationResponse) -> anyhow::Result<()>;
    fn write_evaluation(&mut self, report: &EvaluationReport) -> anyhow::Result<()>;
    fn write_architectures(&mut self, profiles: &[ArchitectureProfile]) -> anyhow::Result<()>;
    fn write_patterns(&mut self, patterns: &[&DesignPatternProfile]) -> anyhow::Result<()>;
    fn write_metrics(&mut self, metrics: &PerformanceMetrics) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_recommendation(&mut self, response: &RecommendationResponse) -> anyhow::Result<()> {
        self.write_json(response)
    }

    fn write_evaluation(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_architectures(&mut self, profiles: &[ArchitectureProfile]) -> anyhow::Result<()> {
        self.write_json(profiles)
    }

    fn write_patterns(&mut self, patterns: &[&DesignPatternProfile]) -> anyhow::Result<()> {
        self.write_json(patterns)
    }

    fn write_metrics(&mut self, metrics: &PerformanceMetrics) -> anyhow::Result<()> {
        self.write_json(metrics)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_banner(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = "═══════════════════════════════════════════";
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer, "{}", format!("  {}", title).bold().cyan())?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_set(&mut self, set: &RecommendationSet) -> anyhow::Result<()> {
        self.write_banner("ARCHITECTURE RECOMMENDATION")?;

        let strength = &set.analysis.recommendation_strength;
        writeln!(
            self.writer,
            "Strength: {} (gap {:.1}, confidence {})",
            color_strength(strength.strength),
            strength.score_gap,
            strength.confidence
        )?;
        writeln!(
            self.writer,
            "Evaluated {} architectures, top score {:.1}, average {:.1}",
            set.analysis.total_evaluated, set.analysis.top_score, set.analysis.average_score
        )?;

        for gap in &set.engine_meta.validation_gaps {
            writeln!(self.writer, "{} {}", "warning:".yellow().bold(), gap)?;
        }

        for recommendation in &set.recommendations {
            self.write_entry(recommendation)?;
        }

        let mut table = new_table(vec!["Architecture", "Score"]);
        for entry in &set.analysis.score_distribution {
            table.add_row(vec![entry.name.to_string(), format!("{:.1}", entry.score)]);
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Score distribution".bold())?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_entry(&mut self, recommendation: &Recommendation) -> anyhow::Result<()> {
        let analysis = &recommendation.analysis;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "#{} {} {}",
            recommendation.rank,
            recommendation.architecture.name.bold(),
            format!("({:.1})", analysis.score).dimmed()
        )?;
        writeln!(self.writer, "   {}", recommendation.architecture.description)?;
        writeln!(
            self.writer,
            "   Confidence {:.0}% | Risk {} ({:.2}) | Cost efficiency {:.0}% | Total cost {:.2}",
            analysis.confidence,
            color_risk(analysis.risk_assessment.risk_level),
            analysis.risk_assessment.overall_risk,
            analysis.cost_analysis.cost_efficiency,
            analysis.cost_analysis.total_cost
        )?;

        for reason in &recommendation.reasoning {
            writeln!(self.writer, "   {} {}", "•".green(), reason)?;
        }
        for (factor, mitigation) in analysis
            .risk_assessment
            .risk_factors
            .iter()
            .zip(&analysis.risk_assessment.mitigations)
        {
            writeln!(self.writer, "   {} {}: {}", "!".yellow(), factor, mitigation)?;
        }

        if !recommendation.design_patterns.is_empty() {
            let mut table = new_table(vec!["Pattern", "Context", "Recommendation"]);
            for scored in &recommendation.design_patterns {
                table.add_row(vec![
                    scored.pattern.name.to_string(),
                    format!("{:.0}", scored.context_score),
                    scored.recommendation.to_string(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_recommendation(&mut self, response: &RecommendationResponse) -> anyhow::Result<()> {
        match response {
            RecommendationResponse::Success(set) => self.write_set(set),
            RecommendationResponse::Failure(failure) => {
                writeln!(
                    self.writer,
                    "{} [{}] {}",
                    "Recommendation failed:".red().bold(),
                    failure.error,
                    failure.message
                )?;
                Ok(())
            }
        }
    }

    fn write_evaluation(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        self.write_banner("ARCHITECTURE EVALUATION")?;
        let mut table = new_table(vec![
            "Architecture",
            "Score",
            "Complexity",
            "Scalability",
            "Cost",
            "Maintenance",
            "Risk",
            "Efficiency",
        ]);
        for (id, result) in &report.detailed_analysis {
            let c = &result.component_scores;
            table.add_row(vec![
                id.clone(),
                format!("{:.1}", result.score),
                format!("{:.0}", c.complexity),
                format!("{:.0}", c.scalability),
                format!("{:.0}", c.cost),
                format!("{:.0}", c.maintenance),
                result.risk_assessment.risk_level.to_string(),
                format!("{:.0}%", result.cost_analysis.cost_efficiency),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        for gap in &report.validation_gaps {
            writeln!(self.writer, "{} {}", "warning:".yellow().bold(), gap)?;
        }
        Ok(())
    }

    fn write_architectures(&mut self, profiles: &[ArchitectureProfile]) -> anyhow::Result<()> {
        self.write_banner("ARCHITECTURE CATALOG")?;
        for profile in profiles {
            writeln!(
                self.writer,
                "{} {}",
                profile.name.bold(),
                format!("[{}]", profile.id).dimmed()
            )?;
            writeln!(self.writer, "   {}", profile.description)?;
            writeln!(self.writer, "   Best for: {}", profile.best_for.join(", "))?;
            writeln!(self.writer, "   {} {}", "+".green(), profile.advantages.join(", "))?;
            writeln!(self.writer, "   {} {}", "-".red(), profile.disadvantages.join(", "))?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_patterns(&mut self, patterns: &[&DesignPatternProfile]) -> anyhow::Result<()> {
        self.write_banner("DESIGN PATTERNS")?;
        let mut table = new_table(vec!["Pattern", "Use case", "Applies to"]);
        for pattern in patterns {
            let kinds: Vec<&str> = pattern
                .applicable_architectures
                .iter()
                .map(|kind| kind.id())
                .collect();
            table.add_row(vec![
                pattern.name.to_string(),
                pattern.use_case.to_string(),
                kinds.join(", "),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_metrics(&mut self, metrics: &PerformanceMetrics) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Feedback: {} total, {:.0}% recent accuracy, {:.0}% average confidence ({} in window)",
            metrics.total_recommendations,
            metrics.recent_accuracy,
            metrics.average_confidence,
            metrics.window_size
        )?;
        Ok(())
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn color_risk(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => "Low".green(),
        RiskLevel::Medium => "Medium".yellow(),
        RiskLevel::High => "High".red(),
    }
}

fn color_strength(strength: StrengthLabel) -> ColoredString {
    match strength {
        StrengthLabel::Strong => "Strong".green().bold(),
        StrengthLabel::Moderate => "Moderate".yellow(),
        StrengthLabel::Weak => "Weak".red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::requirements::RawRequirements;
    use crate::engine::RecommendationEngine;
    use crate::engine::RecommendationFailure;

    fn raw() -> RawRequirements {
        RawRequirements {
            user_traffic: Some("high".into()),
            complexity: Some("high".into()),
            team_size: Some("large".into()),
            scalability: Some("high".into()),
            budget: Some("high".into()),
            ..Default::default()
        }
    }

    fn render(format: OutputFormat, f: impl FnOnce(&mut dyn OutputWriter)) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, &mut buffer);
            f(writer.as_mut());
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_recommendation_is_valid_json() {
        let response = RecommendationEngine::default().generate_recommendation(&raw());
        let out = render(OutputFormat::Json, |w| w.write_recommendation(&response).unwrap());

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(
            value["recommendations"][0]["architecture"]["id"],
            "microservices"
        );
        assert_eq!(
            value["analysis"]["recommendationStrength"]["strength"],
            "Moderate"
        );
        assert!(value["recommendations"][0]["designPatterns"][0]["contextScore"].is_number());
    }

    #[test]
    fn test_json_failure_shape() {
        let response =
            RecommendationResponse::Failure(RecommendationFailure::new("internal_error", "boom"));
        let out = render(OutputFormat::Json, |w| w.write_recommendation(&response).unwrap());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "internal_error");
        assert_eq!(value["message"], "boom");
    }

    #[test]
    fn test_terminal_recommendation_mentions_top_choice() {
        let response = RecommendationEngine::default().generate_recommendation(&raw());
        let out = render(OutputFormat::Terminal, |w| {
            w.write_recommendation(&response).unwrap()
        });
        assert!(out.contains("Microservices"));
        assert!(out.contains("Score distribution"));
        assert!(out.contains("API Gateway"));
    }

    #[test]
    fn test_terminal_catalog_listing() {
        let engine = RecommendationEngine::default();
        let out = render(OutputFormat::Terminal, |w| {
            w.write_architectures(engine.list_architectures()).unwrap()
        });
        for profile in engine.list_architectures() {
            assert!(out.contains(profile.name));
        }
    }
}
