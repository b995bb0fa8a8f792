use std::{env, fs};

#[test]
fn autoload_env_reads_file_selected_by_go_env() {
    let tempdir = tempfile::tempdir().unwrap();
    fs::write(tempdir.path().join(".env"), "AUTOLOAD_ENV_FOO=bar\n").unwrap();
    fs::write(tempdir.path().join(".env.staging"), "AUTOLOAD_ENV_FOO=baz\n").unwrap();
    env::set_current_dir(tempdir.path()).unwrap();

    temp_env::with_var("GO_ENV", Some("staging"), || {
        dotenv_autoload::autoload_env();
    });
    assert_eq!(env::var("AUTOLOAD_ENV_FOO").unwrap(), "baz");
}

#[test]
fn missing_env_file_is_reported_as_not_found() {
    temp_env::with_var("GO_ENV", Some("nowhere"), || {
        let err = dotenv_autoload::load_env().unwrap_err();
        assert!(err.is_not_found());
    });
}
