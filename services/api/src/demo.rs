use crate::infra::InMemoryAssessmentRepository;
use clap::Args;
use endoguard::assessment::{
    Assessment, AssessmentForm, AssessmentOrchestrator, AssessmentService, ExerciseFrequency,
    ExposureProfile, PlasticUseFrequency, ProcessedFoodFrequency, QualityRating,
    TestRecommendationCatalog, WaterSource,
};
use endoguard::config::AppConfig;
use endoguard::error::AppError;
use endoguard::telemetry::{self, LogSink};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Questionnaire JSON file, or `-` to read from stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only print the summary line for each sample questionnaire
    #[arg(long)]
    pub(crate) brief: bool,
}

fn init_cli_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read(path)?)
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let raw = read_input(&args.input)?;
    let form = AssessmentForm::from_slice(&raw)?;
    let assessment = AssessmentOrchestrator::default().assess(form)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&assessment, false);
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = TestRecommendationCatalog::standard();

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.groups())?);
        return Ok(());
    }

    println!("EndoGuard lab panels");
    for group in catalog.groups() {
        println!(
            "\n{} [{}] essential {} | all {}",
            group.name, group.key, group.total_cost_essential, group.total_cost_all
        );
        for test in group.tests {
            println!(
                "  - {} ({}, {}) PMID {}",
                test.name,
                test.priority.label(),
                test.cost_range,
                test.reference_pmid
            );
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = AssessmentService::new(repository);

    println!("EndoGuard assessment demo");
    for (label, form) in sample_questionnaires() {
        println!("\n== {label}");
        match service.submit(form) {
            Ok(assessment) => render_assessment(&assessment, args.brief),
            Err(err) => println!("  Assessment rejected: {err}"),
        }
    }

    match service.recent(10) {
        Ok(records) => println!("\nStored {} assessments this session", records.len()),
        Err(err) => println!("\nStorage unavailable: {err}"),
    }
    Ok(())
}

fn render_assessment(assessment: &Assessment, brief: bool) {
    let exposure = &assessment.edc_exposure;
    let overall = &assessment.overall_risk;
    println!(
        "Assessment {} | overall {} ({}) | exposure {} ({})",
        assessment.assessment_id,
        overall.level.label(),
        overall.score,
        exposure.risk_level.label(),
        exposure.risk_score
    );
    if brief {
        return;
    }

    println!("Risk factors:");
    if exposure.risk_factors.is_empty() {
        println!("  - none identified");
    }
    for factor in &exposure.risk_factors {
        println!("  - {} [{}]: {}", factor.factor, factor.impact, factor.recommendation);
    }

    let health = &assessment.hormone_health;
    let systems: Vec<_> = health
        .systems_affected
        .iter()
        .map(|system| system.label())
        .collect();
    println!(
        "Hormone health: {} symptoms at severity {} | systems: {}",
        health.symptom_count,
        health.symptom_severity,
        if systems.is_empty() {
            "none".to_string()
        } else {
            systems.join(", ")
        }
    );

    println!("Recommendations:");
    for recommendation in &assessment.recommendations {
        println!(
            "  - [{}/{}] {}",
            recommendation.priority.label(),
            recommendation.category.label(),
            recommendation.text
        );
    }

    if !assessment.test_recommendations.is_empty() {
        println!("Suggested lab panels:");
        for group in &assessment.test_recommendations {
            println!(
                "  - {} (essential {}, full panel {})",
                group.name, group.total_cost_essential, group.total_cost_all
            );
        }
    }

    println!("Next steps:");
    for step in &assessment.next_steps {
        println!("  {}. {} ({})", step.step, step.title, step.timeframe);
        println!("     {}", step.description);
    }
}

fn sample_questionnaires() -> Vec<(&'static str, AssessmentForm)> {
    let low = AssessmentForm {
        profile: ExposureProfile {
            plastic_use_frequency: Some(PlasticUseFrequency::Minimal),
            processed_food_frequency: Some(ProcessedFoodFrequency::Rarely),
            water_source: Some(WaterSource::ReverseOsmosis),
            occupational_exposure: false,
            diet_quality: Some(QualityRating::Excellent),
            sleep_quality: Some(QualityRating::Good),
            stress_level: Some(3),
            exercise_frequency: Some(ExerciseFrequency::Daily),
        },
        symptoms: Some(Vec::new()),
        symptom_severity: Some(1),
    };

    let moderate = AssessmentForm {
        profile: ExposureProfile {
            plastic_use_frequency: Some(PlasticUseFrequency::Moderate),
            processed_food_frequency: Some(ProcessedFoodFrequency::Occasionally),
            water_source: Some(WaterSource::TapFiltered),
            occupational_exposure: false,
            diet_quality: Some(QualityRating::Fair),
            sleep_quality: Some(QualityRating::Fair),
            stress_level: Some(6),
            exercise_frequency: Some(ExerciseFrequency::Regular),
        },
        symptoms: Some(vec![
            "Chronic stress or anxiety".to_string(),
            "Afternoon energy crashes".to_string(),
            "Sleep problems".to_string(),
        ]),
        symptom_severity: Some(5),
    };

    let high = AssessmentForm {
        profile: ExposureProfile {
            plastic_use_frequency: Some(PlasticUseFrequency::High),
            processed_food_frequency: Some(ProcessedFoodFrequency::Daily),
            water_source: Some(WaterSource::TapUnfiltered),
            occupational_exposure: true,
            diet_quality: Some(QualityRating::Poor),
            sleep_quality: Some(QualityRating::Poor),
            stress_level: Some(8),
            exercise_frequency: Some(ExerciseFrequency::Rarely),
        },
        symptoms: Some(vec![
            "Unexplained weight gain or loss".to_string(),
            "Fatigue or low energy".to_string(),
        ]),
        symptom_severity: Some(9),
    };

    vec![
        ("Low exposure, no symptoms", low),
        ("Moderate exposure with stress symptoms", moderate),
        ("High exposure with thyroid symptoms", high),
    ]
}
