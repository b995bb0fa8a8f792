use std::{env, fs};

#[test]
fn autoload_populates_environment_once() {
    let tempdir = tempfile::tempdir().unwrap();
    fs::write(tempdir.path().join(".env"), "AUTOLOAD_FOO=bar\n").unwrap();
    env::set_current_dir(tempdir.path()).unwrap();

    dotenv_autoload::autoload();
    assert_eq!(env::var("AUTOLOAD_FOO").unwrap(), "bar");

    // A second call must not re-read the file
    fs::write(tempdir.path().join(".env"), "AUTOLOAD_BAR=baz\n").unwrap();
    dotenv_autoload::autoload();
    assert!(env::var("AUTOLOAD_BAR").is_err());

    // The fallible variant always reads
    let path = dotenv_autoload::load().unwrap();
    assert!(path.ends_with(".env"));
    assert_eq!(env::var("AUTOLOAD_BAR").unwrap(), "baz");
}
