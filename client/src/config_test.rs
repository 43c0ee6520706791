use super::*;

#[test]
fn default_matches_build_env() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_build_env());
}

#[test]
fn build_env_base_has_no_trailing_path_segment() {
    let config = ApiConfig::from_build_env();
    assert!(!config.base_url.ends_with("/poems"));
}
