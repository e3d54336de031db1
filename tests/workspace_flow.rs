//! End-to-end workspace scenarios driven through the mock generator.

use std::sync::Arc;
use std::time::Duration;

use business_os::adapters::ai::MockGenerator;
use business_os::application::{
    BrandingWorkflow, IdeaAnalysisWorkflow, PitchDeckWorkflow, SimulationWorkflow,
    StrategyWorkflow, VentureWorkspace, WebsiteWorkflow,
};
use business_os::domain::foundation::ModuleType;
use business_os::domain::venture::{
    BusinessPatch, MonthlyProjection, PitchSlide, SwotAnalysis, PITCH_DECK_SLIDES,
    SIMULATION_MONTHS,
};
use business_os::ports::{BrandingAssets, GeneratorError, IdeaAnalysis};

fn analysis() -> IdeaAnalysis {
    IdeaAnalysis {
        name: "PupTreat Co".to_string(),
        description: "Subscription organic dog treats".to_string(),
        swot: SwotAnalysis::new(
            vec!["recurring revenue".to_string()],
            vec!["shipping costs".to_string()],
            vec!["pet spending growth".to_string()],
            vec!["big-box competitors".to_string()],
        ),
    }
}

fn assets(slogan: &str) -> BrandingAssets {
    BrandingAssets {
        slogan: slogan.to_string(),
        colors: vec!["#111".to_string(), "#222".to_string(), "#333".to_string()],
    }
}

fn twelve_months() -> Vec<MonthlyProjection> {
    (1..=12)
        .map(|m| {
            MonthlyProjection::new(
                format!("Month {m}"),
                i64::from(m) * 1_000,
                3_000,
                i64::from(m) * 1_000 - 3_000,
                "Steady growth",
            )
        })
        .collect()
}

fn seven_slides() -> Vec<PitchSlide> {
    [
        "Title Slide",
        "The Problem",
        "The Solution",
        "Market Opportunity",
        "Business Model",
        "Go-To-Market",
        "The Ask",
    ]
    .iter()
    .map(|title| PitchSlide::new(*title, "Content", "Notes"))
    .collect()
}

#[tokio::test]
async fn full_session_builds_every_artifact() {
    let workspace = Arc::new(VentureWorkspace::new());
    let generator = Arc::new(
        MockGenerator::new()
            .with_analysis(analysis())
            .with_branding(assets("Treats Done Right"))
            .with_logo(Some("data:image/png;base64,AA".to_string()))
            .with_website_code("export default function App() { return null; }")
            .with_strategy("## Step 1\n- Launch a waitlist")
            .with_simulation(twelve_months())
            .with_pitch_deck(seven_slides()),
    );

    // Idea analysis unlocks the workspace and auto-advances.
    let ideas = IdeaAnalysisWorkflow::new(workspace.clone(), generator.clone());
    ideas.analyze("organic dog treats").await.unwrap();
    assert_eq!(workspace.active_module(), ModuleType::Dashboard);

    let overview = workspace.dashboard();
    assert_eq!(overview.completed, 1);
    assert_eq!(overview.percent, 17);
    assert!(workspace.module_view().iter().all(|s| s.enabled));

    // Branding: identity then logo, both surviving in the final record.
    let branding = BrandingWorkflow::new(workspace.clone(), generator.clone());
    branding.generate_identity().await.unwrap();
    branding.generate_logo().await.unwrap();

    // Website picks up the palette.
    let website = WebsiteWorkflow::new(workspace.clone(), generator.clone());
    website.generate().await.unwrap();

    // Strategy generates itself on first entry.
    let strategy = StrategyWorkflow::new(workspace.clone(), generator.clone());
    let generated = strategy.ensure_generated().await.unwrap();
    assert!(generated.is_some());

    // Simulation and pitch deck run concurrently; their merges are
    // independent and commute.
    let simulation = SimulationWorkflow::new(workspace.clone(), generator.clone());
    let pitch = PitchDeckWorkflow::new(workspace.clone(), generator.clone());
    let (rows, slides) = futures::join!(simulation.run(), pitch.generate());
    rows.unwrap();
    slides.unwrap();

    let record = workspace.record();
    let brand = record.branding().unwrap();
    assert_eq!(brand.slogan, "Treats Done Right");
    assert_eq!(brand.logo_url.as_deref(), Some("data:image/png;base64,AA"));
    assert!(record.website_code().is_some());
    assert!(record.strategy().is_some());
    assert_eq!(record.simulation().unwrap().len(), SIMULATION_MONTHS);
    assert_eq!(record.pitch_deck().unwrap().len(), PITCH_DECK_SLIDES);

    let overview = workspace.dashboard();
    assert_eq!(overview.completed, 6);
    assert_eq!(overview.percent, 100);
    // 1000 * (1 + ... + 12)
    assert_eq!(overview.projected_annual_revenue, Some(78_000));
}

#[tokio::test]
async fn gated_modules_stay_unreachable_before_analysis() {
    let workspace = VentureWorkspace::new();

    for module in ModuleType::all() {
        if *module == ModuleType::IdeaAnalyzer {
            continue;
        }
        assert!(!workspace.select_module(*module));
        assert_eq!(workspace.active_module(), ModuleType::IdeaAnalyzer);
    }

    let view = workspace.module_view();
    assert_eq!(view.iter().filter(|s| s.enabled).count(), 1);
}

#[tokio::test]
async fn re_analysis_away_from_the_analyzer_does_not_navigate() {
    let workspace = Arc::new(VentureWorkspace::new());
    let generator = Arc::new(
        MockGenerator::new()
            .with_analysis(analysis())
            .with_analysis(IdeaAnalysis {
                name: "Rebrand Inc".to_string(),
                description: "Second pass".to_string(),
                swot: SwotAnalysis::default(),
            }),
    );
    let ideas = IdeaAnalysisWorkflow::new(workspace.clone(), generator);

    ideas.analyze("organic dog treats").await.unwrap();
    assert_eq!(workspace.active_module(), ModuleType::Dashboard);

    workspace.select_module(ModuleType::Simulation);
    ideas.analyze("organic dog treats, but premium").await.unwrap();

    assert_eq!(workspace.record().name(), "Rebrand Inc");
    assert_eq!(workspace.active_module(), ModuleType::Simulation);
}

#[tokio::test(start_paused = true)]
async fn overlapping_regenerations_resolve_last_applied_wins() {
    let workspace = Arc::new(VentureWorkspace::new());
    workspace.apply(
        BusinessPatch::new()
            .with_name("PupTreat Co")
            .with_idea("organic dog treats"),
    );

    // Call A is issued first but resolves last; call B is issued second and
    // resolves immediately.
    let generator = Arc::new(
        MockGenerator::new()
            .with_branding_after(assets("From call A"), Duration::from_millis(50))
            .with_branding(assets("From call B")),
    );

    // Two workflow instances model two overlapping in-flight generations
    // (the second one started after the first view was superseded).
    let first = Arc::new(BrandingWorkflow::new(workspace.clone(), generator.clone()));
    let second = Arc::new(BrandingWorkflow::new(workspace.clone(), generator.clone()));

    let call_a = tokio::spawn({
        let first = first.clone();
        async move { first.generate_identity().await }
    });
    tokio::task::yield_now().await;

    let call_b = tokio::spawn({
        let second = second.clone();
        async move { second.generate_identity().await }
    });
    call_b.await.unwrap().unwrap();

    // B has landed while A is still in flight.
    assert_eq!(workspace.record().branding().unwrap().slogan, "From call B");

    call_a.await.unwrap().unwrap();

    // The stale, earlier-issued call overwrites on arrival: merges apply in
    // completion order with no staleness check. Intentional.
    assert_eq!(workspace.record().branding().unwrap().slogan, "From call A");
}

#[tokio::test]
async fn failed_generation_changes_nothing() {
    let workspace = Arc::new(VentureWorkspace::new());
    let generator = Arc::new(
        MockGenerator::new()
            .with_analysis(analysis())
            .with_simulation_error(GeneratorError::unavailable("model overloaded")),
    );

    let ideas = IdeaAnalysisWorkflow::new(workspace.clone(), generator.clone());
    ideas.analyze("organic dog treats").await.unwrap();

    let before = workspace.record();
    let simulation = SimulationWorkflow::new(workspace.clone(), generator);
    assert!(simulation.run().await.is_err());

    assert_eq!(workspace.record(), before);
    assert!(!simulation.is_loading());
    assert_eq!(workspace.dashboard().projected_annual_revenue, None);
}

#[tokio::test]
async fn snapshot_reads_are_idempotent() {
    let workspace = Arc::new(VentureWorkspace::new());
    let generator = Arc::new(MockGenerator::new().with_analysis(analysis()));
    IdeaAnalysisWorkflow::new(workspace.clone(), generator)
        .analyze("organic dog treats")
        .await
        .unwrap();

    assert_eq!(workspace.record(), workspace.record());
    assert_eq!(workspace.dashboard(), workspace.dashboard());
}
