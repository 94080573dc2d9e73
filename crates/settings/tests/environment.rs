use roost_settings::RuntimeEnv;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
}

#[test]
fn well_known_names_parse_case_insensitively() {
    assert_eq!(RuntimeEnv::parse("development"), RuntimeEnv::Development);
    assert_eq!(RuntimeEnv::parse("DEVELOPMENT"), RuntimeEnv::Development);
    assert_eq!(RuntimeEnv::parse("Staging"), RuntimeEnv::Staging);
    assert_eq!(RuntimeEnv::parse("pRoDuCtIoN"), RuntimeEnv::Production);
}

#[test]
fn unknown_names_round_trip_verbatim() {
    let qa = RuntimeEnv::parse("Qa");
    assert_eq!(qa, RuntimeEnv::Custom("Qa".to_owned()));
    assert_eq!(qa.to_string(), "Qa");
}

#[test]
fn canonical_display_forms() {
    assert_eq!(RuntimeEnv::parse("development").to_string(), "Development");
    assert_eq!(RuntimeEnv::parse("staging").to_string(), "Staging");
    assert_eq!(RuntimeEnv::parse("production").to_string(), "Production");
}

#[test]
fn default_is_production() {
    assert_eq!(RuntimeEnv::default(), RuntimeEnv::Production);
    assert!(RuntimeEnv::default().is_production());
    assert_eq!(RuntimeEnv::parse("   "), RuntimeEnv::Production);
}

#[test]
fn detect_reads_the_control_variable() {
    let vars = env(&[("ROOST_ENVIRONMENT", "Development")]);
    let detected = RuntimeEnv::detect(&vars);
    assert!(detected.is_development());
}

#[test]
fn detect_falls_back_when_unset() {
    assert_eq!(RuntimeEnv::detect(&env(&[])), RuntimeEnv::Production);
}

#[test]
fn serializes_as_its_name() {
    let json = serde_json::to_string(&RuntimeEnv::Development).expect("serialize");
    assert_eq!(json, "\"Development\"");

    let back: RuntimeEnv = serde_json::from_str("\"staging\"").expect("deserialize");
    assert_eq!(back, RuntimeEnv::Staging);

    let custom: RuntimeEnv = serde_json::from_str("\"EdgeCanary\"").expect("deserialize");
    assert_eq!(custom, RuntimeEnv::Custom("EdgeCanary".to_owned()));
}
