use super::*;

use assert_matches::assert_matches;

use crate::error::Error;

fn isolated<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    at(paths).with_dirs(Some(AppDirs::at("src/testing/assets/no-such-dir")))
}

#[test]
fn test_default() {
    let settings = default();
    assert_eq!(settings.multiplier.get(), 1);
    assert_eq!(settings.count, 1);
    assert_eq!(settings.generator, None);
    assert_eq!(settings.seed, None);
    assert_eq!(settings.generators.len(), 57);
}

#[test]
fn test_load_without_custom_files() {
    let settings = isolated(Vec::<PathBuf>::new()).load().unwrap();
    assert_eq!(&settings, default());
}

#[test]
fn test_load_overlay() {
    let settings = isolated(["src/testing/assets/configs/seeded.yaml"]).load().unwrap();
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.multiplier.get(), 9);
    assert_eq!(settings.count, 3);
    // catalog is inherited from the defaults
    assert_eq!(settings.generators.len(), 57);
}

#[test]
fn test_load_no_default() {
    let settings = isolated(["src/testing/assets/configs/seeded.yaml"])
        .no_default(true)
        .load()
        .unwrap();
    assert_eq!(settings.seed, Some(42));
    assert!(settings.generators.is_empty());
}

#[test]
fn test_load_user_config() {
    let settings = at(Vec::<PathBuf>::new())
        .with_dirs(Some(AppDirs::at("src/testing/assets/user")))
        .load()
        .unwrap();
    assert_eq!(settings.generator.as_deref(), Some("function_432"));
}

#[test]
fn test_load_missing_required_file() {
    let result = isolated(["src/testing/assets/configs/missing.yaml"]).load();
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_load_invalid_multiplier() {
    let result = isolated(["src/testing/assets/configs/invalid-multiplier.yaml"]).load();
    assert_matches!(result, Err(Error::InvalidMultiplier(e)) if e.value == "10");
}
