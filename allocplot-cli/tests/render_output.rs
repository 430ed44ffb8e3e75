#![forbid(unsafe_code)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const RUN: &str = "\
# two worker configurations
0 0 0 0 100 2 3 0 0 2
0 5 0 0 10 50 20
0 1 0 0 12 40 30
0 0 0 0 100 4 8 0 0 1
0 4 0 0 15 90 60
";

fn allocplot(dir: &std::path::Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("allocplot")?;
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("ALLOCPLOT_CONFIG")
        .env_remove("ALLOCPLOT_LOG")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

fn svg_text(svg: &str, text: &str) -> bool { svg.contains(&format!(">\n{text}\n</text>")) }

#[test]
fn five_files_share_the_four_colour_palette() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let labels = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut args = vec!["-o".to_string(), "fig.svg".into(), "five runs".into()];
    for (i, label) in labels.iter().enumerate() {
        let file = format!("run{i}.dat");
        fs::write(dir.path().join(&file), RUN)?;
        args.push(file);
        args.push(label.to_string());
    }
    allocplot(dir.path())?
        .args(&args)
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote fig.svg"));

    let svg = fs::read_to_string(dir.path().join("fig.svg"))?.to_lowercase();
    let count = |hex: &str| svg.matches(hex).count();
    let green = count("#008000");
    for other in ["#ff0000", "#bfbf00", "#0000ff"] {
        assert!(count(other) > 0, "{other} missing");
        assert_eq!(green, 2 * count(other), "{other}");
    }
    for label in labels {
        assert!(svg_text(&svg, label), "legend entry {label} missing");
    }
    assert!(svg_text(&svg, "five runs"));
    Ok(())
}

#[test]
fn single_file_draws_without_legend() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("run.dat"), RUN)?;
    allocplot(dir.path())?.args(["-o", "one.svg", "solo", "run.dat"]).assert().success();

    let svg = fs::read_to_string(dir.path().join("one.svg"))?.to_lowercase();
    assert!(svg.contains("#008000"));
    assert!(!svg.contains("#ff0000"));
    assert!(!svg_text(&svg, "0"), "placeholder label leaked into a legend");
    assert!(svg_text(&svg, "solo"));
    Ok(())
}

#[test]
fn png_output_follows_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("run.dat"), RUN)?;
    fs::write(dir.path().join("allocplot.toml"), "dpi = 40\n")?;
    allocplot(dir.path())?
        .args(["-o", "fig.png", "cmp", "run.dat", "new", "run.dat", "old"])
        .assert()
        .success();

    let png = fs::read(dir.path().join("fig.png"))?;
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    Ok(())
}

#[test]
fn file_without_blocks_still_gets_axes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("empty.dat"), "# no runs yet\n")?;
    allocplot(dir.path())?
        .args(["-o", "fig.svg", "pending", "empty.dat", "todo"])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("fig.svg"))?;
    assert!(svg_text(&svg, "pending"));
    assert!(svg_text(&svg, "todo"));
    assert!(svg.contains("workers"));
    assert!(svg.contains("cycles"));
    Ok(())
}

#[test]
fn zero_worker_block_still_gets_axes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("zero.dat"), "0 0 0 0 1 0 32 0 0 1\n0 5 0 0 10 50 20\n")?;
    allocplot(dir.path())?.args(["-o", "fig.svg", "idle", "zero.dat"]).assert().success();
    assert!(svg_text(&fs::read_to_string(dir.path().join("fig.svg"))?, "idle"));
    Ok(())
}

#[test]
fn default_output_is_kept_without_force() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("run.dat"), RUN)?;
    fs::write(dir.path().join("notes.svg"), "precious")?;
    allocplot(dir.path())?
        .args(["notes", "run.dat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(dir.path().join("notes.svg"))?, "precious");

    allocplot(dir.path())?.args(["--force", "notes", "run.dat"]).assert().success();
    assert!(fs::read_to_string(dir.path().join("notes.svg"))?.starts_with("<svg"));
    Ok(())
}

#[test]
fn default_output_is_created_when_free() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("run.dat"), RUN)?;
    allocplot(dir.path())?
        .args(["Fresh Run", "run.dat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote fresh-run.svg"));
    assert!(dir.path().join("fresh-run.svg").is_file());
    Ok(())
}

#[test]
fn hyphenated_title_and_labels_are_positionals() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("run.dat"), RUN)?;
    allocplot(dir.path())?
        .args(["--no-render", "--summary", "json", "-5 workers", "run.dat", "-O2", "run.dat", "-O0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"-O2\"").and(predicate::str::contains("\"label\": \"-O0\"")));
    Ok(())
}
