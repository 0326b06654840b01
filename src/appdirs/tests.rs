use super::*;

#[test]
fn test_config_file() {
    let dirs = AppDirs::at("/home/user/.config/samplegen");
    assert_eq!(dirs.config_file("config"), PathBuf::from("/home/user/.config/samplegen/config"));
}

#[test]
fn test_new() {
    if let Some(dirs) = AppDirs::new("samplegen") {
        assert!(dirs.config_dir.ends_with("samplegen"));
        assert_eq!(dirs.config_file("config").parent(), Some(dirs.config_dir.as_path()));
    }
}
