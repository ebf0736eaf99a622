use petdor_species::catalog::{load_catalog, parse_catalog, save_catalog, CURRENT_VERSION};
use petdor_species::error::{CatalogError, ScaleError};
use petdor_species::species::builtin_profiles;
use petdor_species::{Scale, SpeciesRegistry};

#[test]
fn parses_current_version() {
    let json = r#"{
        "catalog_version": 1,
        "species": [{
            "species_id": "furao",
            "display_name": "Furão",
            "categories": [{ "id": "geral", "name": "Geral" }],
            "questions": [
                { "id": "apatia", "text": "Está apático?", "scale": { "low": 0, "high": 7 }, "category_id": "geral" },
                { "id": "brinca", "text": "Brincou?", "scale": { "low": 0, "high": 7 }, "inverted": true, "weight": 2.0 }
            ]
        }]
    }"#;

    let species = parse_catalog(json).unwrap();
    assert_eq!(species.len(), 1);
    let furao = &species[0];
    assert!(furao.available);
    assert_eq!(furao.questions[0].weight, 1.0);
    assert!(!furao.questions[0].inverted);
    assert_eq!(furao.questions[1].weight, 2.0);
    assert!(furao.questions[1].inverted);
    assert_eq!(furao.questions[0].category_id.as_deref(), Some("geral"));
}

#[test]
fn migrates_legacy_catalog() {
    let json = r#"{
        "species": [{
            "species_id": "aves",
            "display_name": "Aves",
            "questions": [
                { "text": "Come menos", "scale": "0-7" },
                { "text": "Voou?", "scale": "sim-nao", "inverted": true },
                { "id": "kept", "text": "Já tinha id", "scale": " 0 - 7 " }
            ]
        }]
    }"#;

    let species = parse_catalog(json).unwrap();
    let questions = &species[0].questions;
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[0].scale, Scale::ZERO_TO_SEVEN);
    assert_eq!(questions[1].id, "q2");
    assert_eq!(questions[1].scale, Scale::YES_NO);
    assert_eq!(questions[2].id, "kept");
    assert_eq!(questions[2].scale, Scale::ZERO_TO_SEVEN);
}

#[test]
fn legacy_catalog_with_bad_scale_fails() {
    let json = r#"{ "species": [{ "species_id": "x", "display_name": "X",
        "questions": [{ "text": "?", "scale": "muito" }] }] }"#;
    match parse_catalog(json) {
        Err(CatalogError::Scale(ScaleError::Unrecognised(raw))) => assert_eq!(raw, "muito"),
        other => panic!("expected scale error, got {other:?}"),
    }
}

#[test]
fn newer_version_is_rejected() {
    let json = r#"{ "catalog_version": 99, "species": [] }"#;
    match parse_catalog(json) {
        Err(CatalogError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, CURRENT_VERSION);
        }
        other => panic!("expected version error, got {other:?}"),
    }
}

#[test]
fn non_object_catalog_is_malformed() {
    assert!(matches!(parse_catalog("[]"), Err(CatalogError::Malformed(_))));
    assert!(matches!(parse_catalog("not json"), Err(CatalogError::Json(_))));
}

#[test]
fn save_then_load_reproduces_builtin_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("species.json");

    let profiles = builtin_profiles();
    save_catalog(&path, &profiles).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, profiles);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["catalog_version"], CURRENT_VERSION);

    let registry = SpeciesRegistry::from_profiles(loaded).unwrap();
    assert_eq!(registry.len(), profiles.len());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match load_catalog(&path) {
        Err(CatalogError::Io { path: reported, .. }) => assert!(reported.ends_with("absent.json")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn scale_parsing() {
    assert_eq!(Scale::parse("0-7").unwrap(), Scale::ZERO_TO_SEVEN);
    assert_eq!(Scale::parse("Sim-Nao").unwrap(), Scale::YES_NO);
    assert_eq!(Scale::parse("0-0").unwrap(), Scale::new(0, 0));
    assert_eq!(
        Scale::parse("7-0").unwrap_err(),
        ScaleError::Reversed { low: 7, high: 0 }
    );
    assert!(matches!(Scale::parse("zero"), Err(ScaleError::Unrecognised(_))));
}

#[test]
fn scale_labels() {
    assert_eq!(Scale::YES_NO.labels(), vec!["Não", "Sim"]);
    assert_eq!(Scale::ZERO_TO_SEVEN.labels().len(), 8);
    assert_eq!(Scale::new(2, 4).labels(), vec!["2", "3", "4"]);
}

#[test]
fn registry_from_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("species.json");
    std::fs::write(
        &path,
        r#"{ "catalog_version": 1, "species": [
            { "species_id": "Furao", "display_name": "Furão",
              "questions": [{ "id": "a", "text": "?", "scale": { "low": 0, "high": 7 } }] }
        ] }"#,
    )
    .unwrap();

    let registry = SpeciesRegistry::from_catalog(&path).unwrap();
    assert_eq!(registry.lookup("furao").unwrap().display_name, "Furão");
}

#[test]
fn registry_from_catalog_rejects_invalid_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("species.json");
    std::fs::write(
        &path,
        r#"{ "catalog_version": 1, "species": [
            { "species_id": "x", "display_name": "X",
              "questions": [{ "id": "a", "text": "?", "scale": { "low": 0, "high": 7 }, "weight": -2.0 }] }
        ] }"#,
    )
    .unwrap();

    assert!(matches!(
        SpeciesRegistry::from_catalog(&path),
        Err(petdor_species::SpeciesError::InvalidProfile { .. })
    ));
}
