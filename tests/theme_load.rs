use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use twtheme::backend::{BackendSelector, TermBackend, TermBackendPref};
use twtheme::config::ThemeSource;
use twtheme::error::ThemeError;
use twtheme::theme::{
    load_theme_file, load_theme_from_reader, load_theme_source, ChromeTarget, ColorAttr,
    ColorTarget, ColorValue, Hue, ThemeState,
};

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(tag: &str) -> Self {
        let n = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "twtheme-it-{tag}-{}-{n}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("create scratch dir");
        Self(path)
    }

    fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

const SAMPLE_THEME: &str = "\
# sample theme
Chrome ScrollBarX \"\u{2591}\u{25c4}\u{25ba}\"   # light shade bar
DefaultColors Gadgets High Yellow On Blue
DefaultColors Bogus Red
chrome taby \"|\"
";

#[test]
fn sample_theme_applies_valid_lines_and_reports_the_rest() {
    let dir = ScratchDir::new("sample");
    let path = dir.write("twtheme", SAMPLE_THEME.as_bytes());
    let mut state = ThemeState::default();

    let report = load_theme_file(&mut state, &path).expect("load");

    assert_eq!(report.path.as_deref(), Some(path.as_path()));
    assert_eq!(report.lines, 5);
    assert_eq!(report.applied, 3);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].line, 4);
    assert!(report.warnings[0]
        .to_string()
        .ends_with(":4: unknown DefaultColors target 'Bogus'"));

    assert_eq!(
        state.glyphs(ChromeTarget::ScrollBarX),
        &['\u{2591}', '\u{25c4}', '\u{25ba}']
    );
    assert_eq!(state.glyphs(ChromeTarget::TabY), &['|']);
    assert_eq!(
        state.color(ColorTarget::Gadgets),
        ColorAttr::new(ColorValue::bright(Hue::Yellow), ColorValue::normal(Hue::Blue))
    );
    let defaults = ThemeState::default();
    assert_eq!(
        state.color(ColorTarget::Arrows),
        defaults.color(ColorTarget::Arrows)
    );
}

#[test]
fn loading_twice_gives_the_same_state() {
    let dir = ScratchDir::new("twice");
    let path = dir.write("twtheme", SAMPLE_THEME.as_bytes());
    let mut state = ThemeState::default();

    load_theme_file(&mut state, &path).expect("first load");
    let after_first = state.clone();
    load_theme_file(&mut state, &path).expect("second load");

    assert_eq!(state, after_first);
}

#[test]
fn absent_theme_keeps_defaults() {
    let mut state = ThemeState::default();
    let report = load_theme_source(&mut state, &ThemeSource::NotFound).expect("no-op");
    assert!(report.path.is_none());
    assert!(report.is_clean());
    assert_eq!(state, ThemeState::default());
}

#[test]
fn explicit_path_that_cannot_be_opened_fails_without_mutation() {
    let dir = ScratchDir::new("missing");
    let missing = dir.0.join("nope");
    let mut state = ThemeState::default();

    let err = load_theme_source(&mut state, &ThemeSource::Explicit(missing.clone()))
        .expect_err("must fail");

    match &err {
        ThemeError::Open { path, .. } => assert_eq!(path, &missing),
    }
    assert_eq!(state, ThemeState::default());
}

#[test]
fn legacy_encoded_glyphs_fall_back_to_code_page_437() {
    let mut bytes = b"Chrome ScreenBack \"".to_vec();
    bytes.extend_from_slice(&[0xB0, 0xB1]);
    bytes.extend_from_slice(b"\"\n");
    let mut state = ThemeState::default();

    let report = load_theme_from_reader(&mut state, Path::new("cp437"), Cursor::new(bytes));

    assert!(report.is_clean());
    assert_eq!(state.glyphs(ChromeTarget::ScreenBack), &['\u{2591}', '\u{2592}']);
}

#[test]
fn backend_selection_end_to_end() {
    let mut selector = BackendSelector::default();
    selector.apply_env_if_unset(|name: &str| {
        (name == "NTWIN_TERM_BACKEND").then(|| "linux".to_string())
    });
    assert_eq!(selector.pref(), TermBackendPref::Legacy);
    assert_eq!(selector.decide(5000), TermBackend::Legacy);

    let mut selector = BackendSelector::default();
    selector.apply_arg("auto").expect("known alias");
    selector.apply_env_if_unset(|_: &str| Some("legacy".to_string()));
    assert_eq!(selector.decide(5000), TermBackend::Vterm);
    assert_eq!(selector.decide(0), TermBackend::Legacy);
}
