use crate::common::CommandTestcacheExt;
use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use std::process::Command;

// Nothing listens here: the manifests below never make the fixture download anything.
static UNREACHABLE_REMOTE: &str = "http://127.0.0.1:9/";

fn site_root() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("islets.json5"),
        r#"[{name: "ghost", emoji: "👻"}, {name: "moon", bitcrafter: null}]"#,
    )
    .unwrap();
    fs::write(root.join("index.html"), "<html>site</html>").unwrap();
    fs::create_dir(root.join("pkg")).unwrap();
    fs::create_dir(root.join("assets")).unwrap();
    fs::write(root.join("assets/style.css"), "body {}").unwrap();
    fs::write(root.join("assets/main.cfg.json5"), "{base_url: 'https://prod'}").unwrap();
    tmp
}

#[cfg(unix)]
#[test]
fn test_setup_without_downloads() {
    let root = site_root();
    let www = root.path().join("test-www");
    fs::create_dir(&www).unwrap();
    fs::write(www.join("stale.txt"), "from an older run").unwrap();

    Command::testcache()
        .arg("--root")
        .arg(root.path())
        .args(["setup", "--remote", UNREACHABLE_REMOTE])
        .assert()
        .success()
        .stdout(concat!(
            "LNK index.html\n",
            "LNK pkg\n",
            "LNK assets/style.css\n",
            "CFG assets/main.cfg.json5\n",
        ));

    assert!(!www.join("stale.txt").exists());
    assert_eq!(fs::read_dir(www.join("game")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(www.join("screenshot")).unwrap().count(), 0);
    assert_eq!(
        fs::read_link(www.join("assets/style.css")).unwrap(),
        Path::new("../../assets/style.css")
    );
    assert_eq!(
        fs::read_to_string(www.join("assets/main.cfg.json5")).unwrap(),
        r#"{"base_url": "http://localhost:8000", "border_px": 1.0}"#
    );
}

#[cfg(unix)]
#[test]
fn test_setup_is_the_default_command() {
    let root = site_root();
    fs::write(
        root.path().join("testcache.toml"),
        format!("[remote]\nbase-url = \"{}\"\n", UNREACHABLE_REMOTE),
    )
    .unwrap();

    Command::testcache()
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(contains("CFG assets/main.cfg.json5"));

    assert!(root.path().join("test-www/index.html").exists());
}

#[test]
fn test_setup_missing_manifest() {
    let root = site_root();
    fs::remove_file(root.path().join("islets.json5")).unwrap();

    Command::testcache()
        .arg("--root")
        .arg(root.path())
        .args(["setup", "--remote", UNREACHABLE_REMOTE])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("failed to read manifest"));

    assert!(!root.path().join("test-www").exists());
}

#[test]
fn test_setup_bad_remote() {
    let root = site_root();

    Command::testcache()
        .arg("--root")
        .arg(root.path())
        .args(["setup", "--remote", "not a url"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid --remote"))
        .stderr(contains("invalid remote base url `not a url`"));

    assert!(!root.path().join("test-www").exists());
}
