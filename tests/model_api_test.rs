//! Integration tests for the configuration model's public API.

use gosdk::config::Settings;
use gosdk::environment::EnvSnapshot;
use gosdk::model::{FieldId, SdkConfigModel};
use gosdk::toolchain::DerivedTool;
use gosdk::validation::Level;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn settings(compilers: &[&str]) -> Settings {
    let mut settings = Settings::default();
    settings.candidates.set(
        DerivedTool::Compiler,
        compilers.iter().map(|s| s.to_string()).collect(),
    );
    settings
}

fn make_root(bins: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    for name in bins {
        fs::write(bin.join(name), "").unwrap();
    }
    temp
}

fn s(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

const DERIVED: [FieldId; 3] = [FieldId::Compiler, FieldId::Formatter, FieldId::Documentor];

#[test]
fn compiler_resolves_to_first_candidate() {
    let root = make_root(&["compilerA"]);
    let mut model =
        SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["compilerA", "compilerB"]));

    model.edit(FieldId::Root, &s(root.path())).unwrap();

    assert_eq!(
        model.field_value(FieldId::Compiler),
        s(&root.path().join("bin").join("compilerA"))
    );
}

#[test]
fn compiler_is_empty_when_no_candidate_matches() {
    let root = make_root(&["something-else"]);
    let mut model =
        SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["compilerA", "compilerB"]));

    model.edit(FieldId::Root, &s(root.path())).unwrap();
    assert_eq!(model.field_value(FieldId::Compiler), "");
}

#[test]
fn empty_required_root_is_error_and_clears_tools() {
    let root = make_root(&["go", "gofmt", "godoc"]);
    let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["go"]));
    model.edit(FieldId::Root, &s(root.path())).unwrap();

    model.edit(FieldId::Root, "").unwrap();

    assert_eq!(
        model.field_state(FieldId::Root).unwrap().level(),
        Level::Error
    );
    for field in DERIVED {
        assert_eq!(model.field_value(field), "", "{} should be cleared", field);
    }
    assert_eq!(model.overall_status(), Level::Error);
    assert!(!model.can_apply());
}

#[test]
fn nonexistent_roots_clear_every_derived_field() {
    let base = TempDir::new().unwrap();
    for missing in ["a", "nested/b", "c.d"] {
        let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &Settings::default());
        model.edit(FieldId::Compiler, "/stale/go").unwrap();

        model.edit(FieldId::Root, &s(&base.path().join(missing))).unwrap();

        assert_eq!(
            model.field_state(FieldId::Root).unwrap().level(),
            Level::Error
        );
        for field in DERIVED {
            assert_eq!(model.field_value(field), "");
        }
    }
}

#[test]
fn root_change_always_resets_target() {
    let root = make_root(&["go"]);
    let missing = root.path().join("missing");

    for new_root in [s(root.path()), s(&missing), String::new()] {
        let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &Settings::default());
        model.edit(FieldId::Os, "freebsd").unwrap();
        model.edit(FieldId::Arch, "amd64").unwrap();

        model.edit(FieldId::Root, &new_root).unwrap();

        assert_eq!(model.field_value(FieldId::Os), "");
        assert_eq!(model.field_value(FieldId::Arch), "");
    }
}

#[test]
fn repeated_cascade_does_not_drift() {
    let root = make_root(&["go", "gofmt"]);
    let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["go"]));

    model.edit(FieldId::Root, &s(root.path())).unwrap();
    let values = model.to_field_map();
    let states: Vec<_> = model.field_states().into_iter().cloned().collect();

    model.edit(FieldId::Root, &s(root.path())).unwrap();
    assert_eq!(model.to_field_map(), values);
    let after: Vec<_> = model.field_states().into_iter().cloned().collect();
    assert_eq!(after, states);
}

#[test]
fn overall_status_tracks_worst_field() {
    let root = make_root(&["go"]);
    let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["go"]));
    model.edit(FieldId::Root, &s(root.path())).unwrap();
    assert_eq!(model.overall_status(), Level::Ok);

    model.edit(FieldId::Formatter, "/no/such/gofmt").unwrap();
    assert_eq!(model.overall_status(), Level::Error);

    model.edit(FieldId::Formatter, "").unwrap();
    assert_eq!(model.overall_status(), Level::Ok);

    fs::remove_dir_all(root.path().join("src")).unwrap();
    model.revalidate_all();
    assert_eq!(model.overall_status(), Level::Warning);
    assert!(model.can_apply());
}

#[test]
fn search_path_defaults_from_env_and_appends_with_separator() {
    let env = EnvSnapshot::from_iter([("GOPATH", "/home/me/go")]);
    let mut model = SdkConfigModel::new(env, &Settings::default());
    assert_eq!(model.field_value(FieldId::SearchPath), "/home/me/go");

    let sep = gosdk::environment::LIST_SEPARATOR;
    let appended = model.append_search_path("/extra").to_string();
    assert_eq!(appended, format!("/home/me/go{}/extra", sep));
}

#[test]
fn append_from_empty_yields_leading_separator() {
    let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &Settings::default());
    let sep = gosdk::environment::LIST_SEPARATOR;
    assert_eq!(model.append_search_path("X"), format!("{}X", sep));
}

#[test]
fn field_map_round_trips_without_cascade() {
    let root = make_root(&["go"]);
    let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["go"]));
    model.edit(FieldId::Root, &s(root.path())).unwrap();
    model.edit(FieldId::Arch, "arm").unwrap();
    let saved = model.to_field_map();

    let mut restored = SdkConfigModel::new(EnvSnapshot::empty(), &settings(&["go"]));
    restored.load_field_map(&saved).unwrap();

    assert_eq!(restored.to_field_map(), saved);
    assert_eq!(restored.field_value(FieldId::Arch), "arm");
    assert_eq!(restored.overall_status(), model.overall_status());
}
