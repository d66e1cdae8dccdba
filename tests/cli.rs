// CLI tests for the `aliasfix` binary, using assert_cmd and predicates.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn aliasfix() -> Command {
    Command::cargo_bin("aliasfix").expect("binary builds")
}

#[test]
fn reports_each_change_and_the_file_count() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("app/foo/bar.ts")
        .write_str("import { h } from \"@/utils/helpers\"\n")?;
    temp.child("src/a.ts").write_str("export { x } from \"@/a\"\n")?;
    temp.child("src/react.ts").write_str("import React from \"react\"\n")?;

    aliasfix()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  app/foo/bar.ts: @/utils/helpers -> ../../src/utils/helpers"))
        .stdout(predicate::str::contains("  src/a.ts: @/a -> ./a"))
        .stdout(predicate::str::contains("Fixed imports in 2 files"));

    temp.child("app/foo/bar.ts")
        .assert("import { h } from \"../../src/utils/helpers\"\n");
    temp.child("src/a.ts").assert("export { x } from \"./a\"\n");
    temp.child("src/react.ts").assert("import React from \"react\"\n");
    Ok(())
}

#[test]
fn empty_project_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aliasfix()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed imports in 0 files"));
    Ok(())
}

#[test]
fn dry_run_leaves_files_alone() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("src/hooks/use-api.ts")
        .write_str("import { api } from '@/lib/api/client'\n")?;

    aliasfix()
        .args(["--dry-run", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("@/lib/api/client -> ../lib/api/client"))
        .stdout(predicate::str::contains("Would fix imports in 1 files"));

    temp.child("src/hooks/use-api.ts")
        .assert("import { api } from '@/lib/api/client'\n");
    Ok(())
}

#[test]
fn flags_override_the_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.child("aliasfix.toml");
    config.write_str("alias = \"~/\"\nalias_root = \"lib\"\ndirs = [\"pages\"]\n")?;
    temp.child("pages/index.ts").write_str("import a from '~/a'\n")?;
    temp.child("pages/index.mjs").write_str("import a from '~/a'\n")?;

    aliasfix()
        .arg("--root")
        .arg(temp.path())
        .arg("--config")
        .arg(config.path())
        .args(["--ext", "mjs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed imports in 1 files"));

    temp.child("pages/index.mjs").assert("import a from '../lib/a'\n");
    temp.child("pages/index.ts").assert("import a from '~/a'\n");
    Ok(())
}

#[test]
fn invalid_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.child("aliasfix.toml");
    config.write_str("extensions = []\n")?;

    aliasfix()
        .arg("--root")
        .arg(temp.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_source_aborts_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("src/bin.ts").write_binary(&[0xff, 0xfe, 0x00])?;

    aliasfix()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
    Ok(())
}
