use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn bundler() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_android").unwrap();
    cmd.env_remove("JDK8PATH").env_remove("ANDROIDTOOLSPATH");
    cmd
}

fn write_settings(dir: &Path, host: &str) -> PathBuf {
    let path = dir.join("app.json");
    let settings = serde_json::json!({
        "packageId": "com.example.twa",
        "host": host,
        "name": "Example App",
        "launcherName": "Example",
        "webManifestUrl": "https://example.com/manifest.json",
        "shortcuts": [],
        "signingMode": "none"
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&settings).unwrap()).unwrap();
    path
}

/// Lays out an SDK, JDK and generator that are only located, never run.
fn fake_toolchain(dir: &Path) -> Vec<String> {
    let sdk = dir.join("sdk");
    std::fs::create_dir_all(sdk.join("build-tools/34.0.0")).unwrap();
    let jdk = dir.join("jdk");
    std::fs::create_dir_all(jdk.join("bin")).unwrap();

    vec![
        "--android-sdk".into(),
        sdk.display().to_string(),
        "--jdk-path".into(),
        jdk.display().to_string(),
        "--generator".into(),
        dir.join("bubblewrap").display().to_string(),
    ]
}

#[test]
fn help_describes_the_tool() {
    bundler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--settings"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn missing_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--settings")
        .arg(dir.path().join("missing.json"))
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("Settings file not found"));
}

#[test]
fn malformed_settings_fail() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("app.json");
    std::fs::write(&settings, "{ not json").unwrap();

    bundler()
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing package settings"));
}

#[test]
fn relative_host_fails_before_any_tool_runs() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(dir.path(), "example.com");
    let out = dir.path().join("out");

    bundler()
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(&out)
        .args(fake_toolchain(dir.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL `example.com`"));

    assert!(!out.join("twa-manifest.json").exists());
}

#[test]
fn clean_keeps_existing_key_store_in_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();
    let key_store = out.join("signing.keystore");
    std::fs::write(&key_store, b"keystore").unwrap();

    let settings = dir.path().join("app.json");
    let package = serde_json::json!({
        "packageId": "com.example.twa",
        "host": "https://example.com",
        "name": "Example App",
        "signingMode": "existing"
    });
    std::fs::write(&settings, serde_json::to_vec(&package).unwrap()).unwrap();
    let key = dir.path().join("key.json");
    let key_info = serde_json::json!({
        "keyFilePath": key_store,
        "storePassword": "store",
        "keyPassword": "key",
        "alias": "my-key-alias"
    });
    std::fs::write(&key, serde_json::to_vec(&key_info).unwrap()).unwrap();

    bundler()
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(&out)
        .arg("--signing-key")
        .arg(&key)
        .arg("--clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--clean would delete the key store"));

    assert_eq!(std::fs::read(&key_store).unwrap(), b"keystore");
}

#[cfg(unix)]
#[test]
fn unsigned_build_with_stub_tools() {
    use std::os::unix::fs::PermissionsExt;

    fn script(path: &Path, body: &str) {
        std::fs::write(path, format!("#!/bin/sh\nset -e\n{body}\n")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(dir.path(), "https://example.com/app");
    let out = dir.path().join("out");
    let args = fake_toolchain(dir.path());

    // The generator drops a Gradle wrapper that produces the unsigned APK.
    script(
        &dir.path().join("bubblewrap"),
        r#"cat > gradlew <<'GRADLE'
#!/bin/sh
mkdir -p app/build/outputs/apk/release
printf 'apk' > app/build/outputs/apk/release/app-release-unsigned.apk
GRADLE
chmod 755 gradlew"#,
    );
    script(
        &dir.path().join("sdk/build-tools/34.0.0/zipalign"),
        r#"cp "$5" "$6""#,
    );

    let assert = bundler()
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(&out)
        .args(args)
        .assert()
        .success();

    let result: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        result["artifactPath"],
        out.join("app-release-unsigned-aligned.apk").display().to_string()
    );
    assert!(result["signingInfo"].is_null());
    assert!(result["assetLinksPath"].is_null());
    assert_eq!(result["size"], 3);

    let manifest: serde_json::Value =
        serde_json::from_slice(&std::fs::read(out.join("twa-manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["host"], "example.com");
    assert_eq!(manifest["packageId"], "com.example.twa");
}
