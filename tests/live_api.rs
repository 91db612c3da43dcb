#![cfg(feature = "live_api")]
//! Calls the real Messages API. Needs ANTHROPIC_API_KEY.
//!
//! cargo test --features live_api --test live_api

use landing_forge::config::Config;
use landing_forge::{FormData, GenerationMode, PageGenerator, Tone};

#[tokio::test]
async fn test_live_generation_returns_page() {
    let config = Config::load().expect("config");
    if !config.generative_enabled() {
        eprintln!("ANTHROPIC_API_KEY not set, skipping");
        return;
    }

    let generator = PageGenerator::from_config(&config).expect("client");
    assert_eq!(generator.mode(), GenerationMode::Generative);

    let data = FormData {
        business_name: "Harbour Plumbing".into(),
        industry: "Plumbing".into(),
        target_audience: "Homeowners in Wellington".into(),
        problem_solved: "Leaks fixed the same day".into(),
        key_benefits: "24/7 callouts, Upfront pricing, Licensed team".into(),
        call_to_action: "Call now".into(),
        tone: Tone::Casual,
    };

    let page = generator.generate(&data).await.expect("generated page");
    assert!(!page.html.trim().is_empty());
    assert!(!page.css.trim().is_empty());
}
