use std::fs;
use std::path::Path;
use std::process::Command;

use fontface::{run, Config, FontDirectory, Generator};
use tempfile::{tempdir, TempDir};

fn inter_fixture() -> TempDir {
    let dir = tempdir().unwrap();
    let fonts = dir.path().join("Inter/static");
    fs::create_dir_all(&fonts).unwrap();
    for name in ["Inter-Regular.woff2", "Inter-Bold.woff2", "Inter-Italic.woff2", "readme.txt"] {
        fs::write(fonts.join(name), b"").unwrap();
    }
    dir
}

fn block_for<'a>(output: &'a str, file_name: &str) -> &'a str {
    output
        .split("\n\n")
        .find(|block| block.contains(file_name))
        .unwrap_or_else(|| panic!("no block for {}", file_name))
}

#[test]
fn three_fonts_and_a_readme() {
    let dir = inter_fixture();
    let config = Config::new(dir.path().join("Inter/static"), "Inter");
    let generator = Generator::with_base_dir(&config, dir.path());

    let output = generator.generate(FontDirectory::new(&config.font_dir, &config));

    assert_eq!(output.split("\n\n").count(), 3);
    assert_eq!(output.matches("@font-face {").count(), 3);
    assert!(!output.contains("readme.txt"));
    assert!(!output.ends_with('\n'));

    assert_eq!(
        block_for(&output, "Inter-Regular.woff2"),
        "@font-face {
  font-family: 'Inter';
  src: url('Inter/static/Inter-Regular.woff2') format('woff2');
  font-weight: 400;
  font-style: normal;
}"
    );

    let bold = block_for(&output, "Inter-Bold.woff2");
    assert!(bold.contains("font-weight: 700;"));
    assert!(bold.contains("font-style: normal;"));

    let italic = block_for(&output, "Inter-Italic.woff2");
    assert!(italic.contains("font-weight: 400;"));
    assert!(italic.contains("font-style: italic;"));
    assert!(italic.contains("format('woff2')"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = inter_fixture();
    let config = Config::new(dir.path().join("Inter/static"), "Inter");
    let generator = Generator::with_base_dir(&config, dir.path());

    let first = generator.generate(FontDirectory::new(&config.font_dir, &config));
    let second = generator.generate(FontDirectory::new(&config.font_dir, &config));
    assert_eq!(first, second);
}

#[test]
fn empty_or_missing_root_gives_empty_output() {
    let dir = tempdir().unwrap();

    let empty = Config::new(dir.path(), "Inter");
    assert_eq!(run(&empty).unwrap(), "");

    let missing = Config::new(dir.path().join("nope"), "Inter");
    assert_eq!(run(&missing).unwrap(), "");
}

#[test]
fn in_memory_listing_keeps_order() {
    let config = Config::default();
    let generator = Generator::with_base_dir(&config, "/srv/site");
    let paths = vec![
        Path::new("/srv/site/fonts/b/Inter-Black.ttf").to_path_buf(),
        Path::new("/srv/site/fonts/a/Inter-Thin.woff").to_path_buf(),
    ];

    let output = generator.generate(paths);
    let black = output.find("Inter-Black.ttf").unwrap();
    let thin = output.find("Inter-Thin.woff").unwrap();
    assert!(black < thin);
    assert!(output.contains(
        "url('fonts/b/Inter-Black.ttf') format('truetype');\n  font-weight: 900;"
    ));
}

#[test]
fn binary_scans_default_directory() {
    let dir = inter_fixture();

    let output = Command::new(env!("CARGO_BIN_EXE_fontface"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("@font-face {").count(), 3);
    assert!(stdout.contains("src: url('Inter/static/Inter-Bold.woff2') format('woff2');"));
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn binary_succeeds_with_nothing_to_scan() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fontface"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let dir = inter_fixture();

    let output = Command::new(env!("CARGO_BIN_EXE_fontface"))
        .arg("--debug")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stderr.contains("Scanning"));
    assert!(!stdout.contains("Scanning"));
    assert_eq!(stdout.matches("@font-face {").count(), 3);
}

#[test]
fn debug_output_is_off_by_default() {
    let dir = inter_fixture();

    let output = Command::new(env!("CARGO_BIN_EXE_fontface"))
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!String::from_utf8(output.stderr).unwrap().contains("Scanning"));
}
