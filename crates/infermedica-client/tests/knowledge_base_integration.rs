//! Knowledge base, search and lookup integration tests.

mod common;

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::TestApi;
use infermedica_client::{
    Acuteness, Age, ConceptType, ConceptsQuery, Evidence, LabTestsRequest, Prevalence,
    SearchRequest, SearchType, Seriousness, Severity, Sex, SexFilter, TriageRequest,
};

// ─────────────────────────────────────────────────────────────────────────────
// Concepts
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_concepts_list() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/concepts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c_1",
                "type": "condition",
                "name": "Abdominal aortic aneurysm",
                "common_name": "Abdominal aortic aneurysm"
            },
            {"id": "s_21", "type": "symptom", "name": "Headache", "common_name": "Headache"}
        ])))
        .expect(1)
        .mount(&api.server)
        .await;

    let concepts = api.client.concepts().list().await?;
    assert_eq!(concepts.len(), 2);
    assert_eq!(concepts[0].kind, ConceptType::Condition);
    assert_eq!(concepts[1].kind, ConceptType::Symptom);

    // No filters means no query string
    assert_eq!(api.requests().await[0].url.query(), None);

    Ok(())
}

#[tokio::test]
async fn test_concepts_filtered() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/concepts"))
        .and(query_param("ids", "s_21,p_28"))
        .and(query_param("types", "symptom,risk_factor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&api.server)
        .await;

    let query = ConceptsQuery {
        ids: vec!["s_21".to_string(), "p_28".to_string()],
        types: vec![ConceptType::Symptom, ConceptType::RiskFactor],
    };
    let concepts = api.client.concepts().list_with_query(&query).await?;
    assert!(concepts.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_concept_by_id() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/concepts/lt_81"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "lt_81", "type": "lab_test", "name": "Hemoglobin", "common_name": "Hemoglobin"
        })))
        .mount(&api.server)
        .await;

    let concept = api.client.concepts().get("lt_81").await?;
    assert_eq!(concept.kind, ConceptType::LabTest);
    assert_eq!(concept.name, "Hemoglobin");

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Conditions, symptoms, risk factors
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_conditions_list_sends_age_query() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/conditions"))
        .and(query_param("age.value", "30"))
        .and(query_param("age.unit", "year"))
        .and(query_param("enable_triage_3", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c_49",
            "name": "Migraine",
            "common_name": "Migraine",
            "sex_filter": "both",
            "categories": ["Neurology"],
            "prevalence": "common",
            "acuteness": "chronic_with_exacerbations",
            "severity": "moderate",
            "extras": {"icd10_code": "G43", "hint": "Please consult a neurologist."},
            "triage_level": "consultation"
        }])))
        .expect(1)
        .mount(&api.server)
        .await;

    let conditions = api.client.conditions().list(&Age::years(30), true).await?;

    let migraine = &conditions[0];
    assert_eq!(migraine.sex_filter, Some(SexFilter::Both));
    assert_eq!(migraine.prevalence, Some(Prevalence::Common));
    assert_eq!(migraine.acuteness, Some(Acuteness::ChronicWithExacerbations));
    assert_eq!(migraine.severity, Some(Severity::Moderate));
    assert_eq!(migraine.extras.icd10_code.as_deref(), Some("G43"));

    Ok(())
}

#[tokio::test]
async fn test_condition_by_id() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/conditions/c_49"))
        .and(query_param("age.value", "8"))
        .and(query_param("age.unit", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c_49", "name": "Migraine"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let condition = api
        .client
        .conditions()
        .get("c_49", &Age::months(8), false)
        .await?;
    assert_eq!(condition.id, "c_49");
    assert!(condition.categories.is_empty());

    // Disabled flags are left out of the query
    let url = &api.requests().await[0].url;
    assert!(!url.query().unwrap_or_default().contains("enable_triage_3"));

    Ok(())
}

#[tokio::test]
async fn test_symptoms_list_and_get() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/symptoms"))
        .and(query_param("age.value", "45"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "s_1193",
            "name": "Chest pain, lasting more than 30 minutes",
            "category": "Chest",
            "seriousness": "emergency_ambulance",
            "children": [{"id": "s_1194", "parent_relation": "duration"}],
            "parent_id": "s_50",
            "parent_relation": "duration",
            "sex_filter": "both",
            "extras": {}
        }])))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/symptoms/s_21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s_21", "name": "Headache", "seriousness": "normal"
        })))
        .mount(&api.server)
        .await;

    let symptoms = api.client.symptoms().list(&Age::years(45), false).await?;
    assert_eq!(symptoms[0].seriousness, Some(Seriousness::EmergencyAmbulance));
    assert_eq!(symptoms[0].children[0].id, "s_1194");

    let symptom = api.client.symptoms().get("s_21", &Age::years(45), false).await?;
    assert_eq!(symptom.seriousness, Some(Seriousness::Normal));

    Ok(())
}

#[tokio::test]
async fn test_risk_factors() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/risk_factors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "p_28",
            "name": "Smoking cigarettes",
            "question": "Do you smoke cigarettes?",
            "sex_filter": "both",
            "category": "Risk factors",
            "extras": {}
        }])))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/risk_factors/p_28"))
        .and(query_param("age.value", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p_28", "name": "Smoking cigarettes"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let factors = api.client.risk_factors().list(&Age::years(30), false).await?;
    assert_eq!(factors[0].question.as_deref(), Some("Do you smoke cigarettes?"));

    let factor = api.client.risk_factors().get("p_28", &Age::years(30)).await?;
    assert_eq!(factor.name, "Smoking cigarettes");

    Ok(())
}

#[tokio::test]
async fn test_get_by_empty_id_fails_locally() -> Result<()> {
    let api = TestApi::start().await;

    let err = api
        .client
        .symptoms()
        .get("", &Age::years(30), false)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(api.requests().await.is_empty());

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Lab tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_lab_tests() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/lab_tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "lt_81",
            "name": "Hemoglobin",
            "category": "Blood count",
            "results": [{"id": "lt_81_1", "type": "very_low"}]
        }])))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/lab_tests/lt_81"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "lt_81", "name": "Hemoglobin"
        })))
        .mount(&api.server)
        .await;

    let tests = api.client.lab_tests().list(&Age::years(30), false).await?;
    assert_eq!(tests[0].results[0].kind, "very_low");

    let test = api.client.lab_tests().get("lt_81", &Age::years(30), false).await?;
    assert_eq!(test.name, "Hemoglobin");

    Ok(())
}

#[tokio::test]
async fn test_lab_tests_recommend() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/lab_tests/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended": [{
                "panel_id": "ltp_1",
                "name": "Complete blood count",
                "position": 1,
                "lab_tests": [{"id": "lt_81"}, {"id": "lt_82"}]
            }],
            "obligatory": []
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let request = LabTestsRequest::new(Sex::Female, Age::years(30))
        .with_evidence([Evidence::present("s_98")]);
    let recommendation = api.client.lab_tests().recommend(&request).await?;

    assert_eq!(recommendation.recommended[0].lab_tests.len(), 2);
    assert!(recommendation.obligatory.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_lab_tests_recommend_checks_status() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/lab_tests/recommend"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "lab tests not enabled"})),
        )
        .mount(&api.server)
        .await;

    let err = api
        .client
        .lab_tests()
        .recommend(&LabTestsRequest::new(Sex::Female, Age::years(30)))
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("lab tests not enabled"));

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Search and lookup
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/search"))
        .and(query_param("phrase", "chest pain"))
        .and(query_param("sex", "male"))
        .and(query_param("max_results", "5"))
        .and(query_param("types", "symptom,risk_factor"))
        .and(query_param("age.value", "50"))
        .and(query_param("age.unit", "year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s_1193", "label": "Chest pain, lasting more than 30 minutes"},
            {"id": "s_50", "label": "Chest pain"}
        ])))
        .expect(1)
        .mount(&api.server)
        .await;

    let request = SearchRequest::new("chest pain", Sex::Male, Age::years(50))
        .max_results(5)
        .with_types([SearchType::Symptom, SearchType::RiskFactor]);
    let results = api.client.search().search(&request).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].label, "Chest pain");

    Ok(())
}

#[tokio::test]
async fn test_search_zero_max_results_never_hits_network() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&api.server)
        .await;

    let request = SearchRequest::new("headache", Sex::Female, Age::years(30)).max_results(0);
    let err = api.client.search().search(&request).await.unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("max_results"));
    assert!(api.requests().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_caller_supplied_sex_is_validated_before_lookup() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/lookup"))
        .and(query_param("sex", "male"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s_21", "label": "Headache"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    // Out-of-set values never become a request
    let err = serde_json::from_value::<TriageRequest>(json!({
        "sex": "unspecified",
        "age": {"value": 30, "unit": "year"},
        "evidence": []
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unexpected value for Sex: \"unspecified\""));

    let err = "unspecified".parse::<Sex>().unwrap_err();
    assert!(err.is_validation());

    // Any casing of a valid token goes out canonical
    let sex: Sex = "MALE".parse()?;
    let result = api.client.search().lookup("headache", sex, None).await?;
    assert_eq!(result.id, "s_21");
    assert_eq!(api.requests().await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_lookup_escapes_phrase() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/lookup"))
        .and(query_param("phrase", "pain & fever"))
        .and(query_param("sex", "female"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s_98", "label": "Fever"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let result = api
        .client
        .search()
        .lookup("pain & fever", Sex::Female, None)
        .await?;
    assert_eq!(result.id, "s_98");

    Ok(())
}

#[tokio::test]
async fn test_lookup_with_age() -> Result<()> {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/lookup"))
        .and(query_param("age.value", "3"))
        .and(query_param("age.unit", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s_98", "label": "Fever"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    api.client
        .search()
        .lookup("fever", Sex::Male, Some(&Age::months(3)))
        .await?;

    Ok(())
}
