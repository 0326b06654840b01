use super::*;

use assert_matches::assert_matches;
use rstest::rstest;

use crate::{error::Error, generator::Catalog};

#[test]
fn test_default_settings() {
    let test = |settings: &Settings| {
        assert_eq!(settings.multiplier, Multiplier::ONE);
        assert_eq!(settings.count, 1);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.generator, None);
    };

    let settings: &'static Settings = Default::default();
    test(settings);
    test(&Settings::default());
}

#[test]
fn test_default_catalog() {
    let settings = Settings::default();
    assert_eq!(
        settings.generators.first(),
        Some(&GeneratorSpec {
            name: "function_2".into(),
            multiplier: Multiplier::new(4).unwrap(),
            description: Some("Refactored for better performance".into()),
        })
    );

    // every multiplier of the original scripts is represented
    for m in Multiplier::all() {
        assert!(settings.generators.iter().any(|g| g.multiplier == m), "{m}");
    }

    let catalog = Catalog::new(&settings.generators).unwrap();
    assert_eq!(catalog.len(), settings.generators.len());
}

#[test]
fn test_load_str() {
    let settings = Settings::load([Source::Str("multiplier: 0\ngenerator: zero\n", FileFormat::Yaml)]).unwrap();
    assert_eq!(settings.multiplier, Multiplier::MIN);
    assert_eq!(settings.generator.as_deref(), Some("zero"));
    assert_eq!(settings.count, 1);
    assert!(settings.generators.is_empty());
}

#[test]
fn test_load_toml() {
    let settings = Settings::load([SourceFile::new("src/testing/assets/configs/duplicate.toml").into()]).unwrap();
    let names = settings.generators.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["twice", "twice"]);
}

#[test]
fn test_load_optional_missing_file() {
    let file = SourceFile::new("src/testing/assets/configs/missing").required(false);
    assert!(!file.required);
    let settings = Settings::load([Settings::default_source(), file.into()]).unwrap();
    assert_eq!(settings, Settings::default());
}

#[rstest]
#[case("multiplier: 12", "12")] // 1
#[case("multiplier: -1", "-1")] // 2
#[case("multiplier: nine", "nine")] // 3
#[case("generators: [{name: a, multiplier: 1}, {name: b, multiplier: 10}]", "10")] // 4
fn test_load_invalid_multiplier(#[case] yaml: &'static str, #[case] value: &str) {
    let result = Settings::load([Source::Str(yaml, FileFormat::Yaml)]);
    assert_matches!(result, Err(Error::InvalidMultiplier(e)) if e.value == value);
}

#[test]
fn test_load_invalid_multiplier_overridden() {
    let settings = Settings::load([
        Source::Str("multiplier: 12", FileFormat::Yaml),
        Source::Str("multiplier: 2", FileFormat::Yaml),
    ])
    .unwrap();
    assert_eq!(settings.multiplier.get(), 2);
}
