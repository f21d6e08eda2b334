use ml_gateway::model::{ModelHandle, ModelRegistry};
use ml_gateway::providers::{FixedSentimentProvider, ProviderRegistry};
use ml_gateway::{
    AnalysisResult, AnalysisType, ContentOptimizationRequest, Gateway, GatewayError, Language,
    Platform, SentimentLabel, TextAnalysisRequest, TextGateway,
};
use std::sync::Arc;

fn optimize_request(content: &str, platform: &str) -> ContentOptimizationRequest {
    ContentOptimizationRequest {
        content: content.to_string(),
        target_audience: "PME".to_string(),
        platform: Platform::from(platform),
        language: "fr".to_string(),
    }
}

#[test]
fn test_builder_defaults_to_placeholders() {
    let gateway = Gateway::builder().build();
    assert!(gateway.is_ok());
}

#[test]
fn test_builder_rejects_partial_registry() {
    let mut providers = ProviderRegistry::new();
    providers.add_sentiment(Arc::new(FixedSentimentProvider::new()));

    let result = Gateway::builder().providers(providers).build();
    let err = result.err().expect("partial registry should be rejected");
    assert!(matches!(err, GatewayError::Configuration(_)));
    assert!(err.to_string().contains("classification, keywords"));
}

#[test]
fn test_builder_allow_partial() {
    let providers = ProviderRegistry::new();
    let gateway = Gateway::builder().providers(providers).allow_partial().build();
    assert!(gateway.is_ok());
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn sentiment_has_fixed_shape() {
    let gateway = Gateway::builder().build().unwrap();
    let response = gateway
        .analyze_text(TextAnalysisRequest::new(
            "J'adore ce produit",
            Language::Fr,
            AnalysisType::Sentiment,
        ))
        .await
        .unwrap();

    assert_eq!(response.confidence, 0.85);
    let AnalysisResult::Sentiment(result) = response.result else {
        panic!("expected sentiment result");
    };
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert_eq!(result.score, 0.85);
    let sum = result.emotions.joy + result.emotions.confidence + result.emotions.surprise;
    assert!((sum - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn every_analysis_type_has_its_literal_keys() {
    let gateway = Gateway::builder().build().unwrap();
    let expected: [(AnalysisType, &[&str]); 3] = [
        (AnalysisType::Sentiment, &["emotions", "score", "sentiment"]),
        (AnalysisType::Classification, &["category", "subcategory", "topics"]),
        (AnalysisType::Keywords, &["entities", "keywords"]),
    ];

    for language in Language::ALL {
        for (kind, keys) in expected {
            let response = gateway
                .analyze_text(TextAnalysisRequest::new("texte", language, kind))
                .await
                .unwrap();
            let json = serde_json::to_value(&response.result).unwrap();
            let mut actual: Vec<&str> = json
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            actual.sort();
            assert_eq!(actual, keys, "keys for {kind} / {language}");
            assert_eq!(response.confidence, 0.85);
            assert!(response.processing_time.is_finite() && response.processing_time >= 0.0);
        }
    }
}

#[tokio::test]
async fn keywords_entities_have_fixed_content() {
    let gateway = Gateway::builder().build().unwrap();
    let response = gateway
        .analyze_text(TextAnalysisRequest::new("", Language::Mg, AnalysisType::Keywords))
        .await
        .unwrap();
    let json = serde_json::to_value(&response.result).unwrap();
    assert_eq!(
        json["keywords"],
        serde_json::json!(["marketing", "digital", "madagascar", "PME"])
    );
    assert_eq!(json["entities"]["organizations"], serde_json::json!(["AI4Local"]));
    assert_eq!(json["entities"]["locations"], serde_json::json!(["Madagascar"]));
    assert_eq!(json["entities"]["products"], serde_json::json!([]));
}

// ============================================================================
// Optimization
// ============================================================================

#[tokio::test]
async fn facebook_suggestions_start_with_call_to_action() {
    let gateway = Gateway::builder().build().unwrap();
    let response = gateway
        .optimize_content(optimize_request("Soldes !", "facebook"))
        .await
        .unwrap();
    assert_eq!(
        response.suggestions,
        vec![
            "Ajouter un call-to-action",
            "Utiliser des hashtags pertinents",
            "Réduire la longueur du texte",
        ]
    );
}

#[tokio::test]
async fn instagram_suggestions_start_with_emojis() {
    let gateway = Gateway::builder().build().unwrap();
    let response = gateway
        .optimize_content(optimize_request("Soldes !", "instagram"))
        .await
        .unwrap();
    assert_eq!(response.suggestions.len(), 3);
    assert_eq!(response.suggestions[0], "Ajouter plus d'émojis");
}

#[tokio::test]
async fn other_platforms_get_generic_suggestion() {
    let gateway = Gateway::builder().build().unwrap();
    for platform in ["email", "sms", "twitter", ""] {
        let response = gateway
            .optimize_content(optimize_request("Bonjour", platform))
            .await
            .unwrap();
        assert_eq!(response.suggestions, vec!["Contenu optimisé pour email"]);
    }
}

#[tokio::test]
async fn optimization_is_identity_with_constant_scores() {
    let gateway = Gateway::builder().build().unwrap();
    for content in ["", "Salama tompoko", "  espaces  ", "🎉 Promo"] {
        let response = gateway
            .optimize_content(optimize_request(content, "facebook"))
            .await
            .unwrap();
        assert_eq!(response.original_content, content);
        assert_eq!(response.optimized_content, content);
        assert_eq!(response.seo_score, 75.5);
        assert_eq!(response.readability_score, 82.3);
    }
}

// ============================================================================
// Introspection
// ============================================================================

#[test]
fn health_and_models_before_any_loading() {
    let gateway = Gateway::builder().build().unwrap();

    let health = gateway.health();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, ml_gateway::PKG_VERSION);
    assert!(health.models_loaded.is_empty());

    let models = gateway.list_models();
    assert!(models.models.is_empty());
    assert_eq!(models.languages_supported, vec!["fr", "mg"]);
    assert_eq!(
        models.analysis_types,
        vec!["sentiment", "classification", "keywords"]
    );
}

#[test]
fn models_listing_is_independent_of_registry() {
    let registry = ModelRegistry::builder()
        .insert(ModelHandle::new("sentiment_fr", AnalysisType::Sentiment, Some(Language::Fr)))
        .build();
    let gateway = Gateway::builder().models(registry).build().unwrap();

    let models = gateway.list_models();
    assert_eq!(models.models, vec!["sentiment_fr"]);
    assert_eq!(models.languages_supported, vec!["fr", "mg"]);
    assert_eq!(
        models.analysis_types,
        vec!["sentiment", "classification", "keywords"]
    );
    assert_eq!(gateway.health().models_loaded, vec!["sentiment_fr"]);
}
