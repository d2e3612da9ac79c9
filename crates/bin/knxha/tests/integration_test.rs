//! End-to-end tests for the full knxha pipeline.
//!
//! Each test writes a project dump to a temporary file and runs it through
//! the real JSON source, conversion service and YAML renderer. The last
//! tests drive the compiled binary itself.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use knxha_adapter_project_json::JsonProjectSource;
use knxha_adapter_yaml::{from_yaml, to_annotated_yaml, to_yaml};
use knxha_app::diagnostics::Diagnostic;
use knxha_app::services::conversion_service::ConversionService;
use knxha_app::settings::Settings;
use knxha_domain::address::GroupAddressId;
use knxha_domain::ha_config::HaConfig;
use knxha_domain::registry::Registry;
use tempfile::NamedTempFile;

const HOUSE: &str = r#"{
    "info": {"name": "Haus", "language_code": "de-DE"},
    "communication_objects": {
        "1/1/1/O-0_R-1": {"name": "Schalten", "group_address_links": ["1/0/1", "1/0/2"]},
        "1/1/2/O-0_R-1": {"name": "Fahren", "group_address_links": ["2/0/1", "2/0/9"]},
        "1/1/3/O-1_R-2": {"name": "Status", "group_address_links": ["5/5/13"]}
    },
    "group_addresses": {
        "1/0/1": {"name": "Steckdose Küche", "address": "1/0/1", "dpt": {"main": 1, "sub": 1}},
        "1/0/2": {"name": "Steckdose Küche Zentral", "address": "1/0/2", "dpt": {"main": 1, "sub": 1}},
        "1/0/3": {"name": "Fenster Bad", "address": "1/0/3", "dpt": {"main": 1, "sub": 2}},
        "1/0/4": {"name": "Rauchmelder", "address": "1/0/4", "dpt": {"main": 1, "sub": 5}},
        "1/1/5": {"name": "Wohnen Temperatur", "address": "1/1/5", "dpt": {"main": 9, "sub": 1}},
        "2/0/1": {"name": "Rollladen Küche (Auf/Ab)", "address": "2/0/1", "dpt": {"main": 1, "sub": 8}},
        "2/0/9": {"name": "Rollladen Zentral", "address": "2/0/9", "dpt": {"main": 1, "sub": 8}},
        "2/1/1": {"name": "Rollladen Küche (Stop)", "address": "2/1/1", "dpt": {"main": 1, "sub": 7}},
        "2/2/1": {"name": "Rollladen Küche (Position)", "address": "2/2/1", "dpt": {"main": 5, "sub": 1}},
        "3/1/1": {"name": "Bad", "address": "3/1/1", "dpt": {"main": 9, "sub": 1}},
        "3/2/1": {"name": "Bad", "address": "3/2/1", "dpt": {"main": 20, "sub": 102}},
        "3/2/2": {"name": "Flur", "address": "3/2/2", "dpt": {"main": 20, "sub": 102}},
        "3/3/1": {"name": "Bad", "address": "3/3/1", "dpt": {"main": 1, "sub": 2}},
        "3/3/2": {"name": "Flur", "address": "3/3/2", "dpt": {"main": 1, "sub": 2}},
        "3/4/1": {"name": "Bad", "address": "3/4/1", "dpt": {"main": 9, "sub": 1}},
        "5/3/12": {"name": "Living Room", "address": "5/3/12", "dpt": {"main": 1, "sub": 1}},
        "5/5/12": {"name": "Living Room Helligkeit", "address": "5/5/12", "dpt": {"main": 5, "sub": 1}},
        "5/5/13": {"name": "Living Room Status", "address": "5/5/13", "dpt": {"main": 1, "sub": 11}},
        "7/0/1": {"name": "Szene Wohnen", "address": "7/0/1", "dpt": {"main": 17, "sub": 1}},
        "8/0/1": {"name": "Reserve", "address": "8/0/1", "dpt": null}
    },
    "group_ranges": {
        "1/0/0-1/7/255": {"name": "Zentral", "group_addresses": [], "group_ranges": {
            "1/0/0-1/0/255": {"name": "Schalten", "group_addresses": ["1/0/1", "1/0/2", "1/0/3", "1/0/4"], "group_ranges": {}},
            "1/1/0-1/1/255": {"name": "Sensoren", "group_addresses": ["1/1/5"], "group_ranges": {}}
        }},
        "2/0/0-2/7/255": {"name": "Jalousien", "group_addresses": [], "group_ranges": {
            "2/0/0-2/0/255": {"name": "Fahren", "group_addresses": ["2/0/1", "2/0/9"], "group_ranges": {}},
            "2/1/0-2/1/255": {"name": "Stop", "group_addresses": ["2/1/1"], "group_ranges": {}},
            "2/2/0-2/2/255": {"name": "Position", "group_addresses": ["2/2/1"], "group_ranges": {}}
        }},
        "3/0/0-3/7/255": {"name": "Heizung", "group_addresses": [], "group_ranges": {
            "3/1/0-3/1/255": {"name": "Soll-Temperaturen", "group_addresses": ["3/1/1"], "group_ranges": {}},
            "3/2/0-3/2/255": {"name": "Betriebsmodi", "group_addresses": ["3/2/1", "3/2/2"], "group_ranges": {}},
            "3/3/0-3/3/255": {"name": "Meldung Heizen", "group_addresses": ["3/3/1", "3/3/2"], "group_ranges": {}},
            "3/4/0-3/4/255": {"name": "Ist-Temperaturen", "group_addresses": ["3/4/1"], "group_ranges": {}}
        }},
        "5/0/0-5/7/255": {"name": "Beleuchtung", "group_addresses": [], "group_ranges": {
            "5/3/0-5/3/255": {"name": "Schalten", "group_addresses": ["5/3/12"], "group_ranges": {}},
            "5/5/0-5/5/255": {"name": "Status", "group_addresses": ["5/5/12", "5/5/13"], "group_ranges": {}}
        }},
        "7/0/0-7/7/255": {"name": "Szenen", "group_addresses": [], "group_ranges": {
            "7/0/0-7/0/255": {"name": "Wohnen", "group_addresses": ["7/0/1"], "group_ranges": {}}
        }},
        "8/0/0-8/7/255": {"name": "Sonstiges", "group_addresses": [], "group_ranges": {
            "8/0/0-8/0/255": {"name": "Reserve", "group_addresses": ["8/0/1"], "group_ranges": {}}
        }}
    }
}"#;

fn id(s: &str) -> GroupAddressId {
    s.parse().unwrap()
}

fn ids(list: &[&str]) -> Vec<GroupAddressId> {
    list.iter().map(|s| id(s)).collect()
}

fn project_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HOUSE.as_bytes()).unwrap();
    file
}

fn service() -> ConversionService<JsonProjectSource> {
    ConversionService::new(JsonProjectSource::new(), Settings::default())
}

fn load(service: &ConversionService<JsonProjectSource>, path: &Path) -> Registry {
    service
        .load(path, "de-DE")
        .expect("fixture project should load")
}

fn convert() -> HaConfig {
    let file = project_file();
    let service = service();
    let registry = load(&service, file.path());
    service.convert(&registry).config
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn should_build_living_room_light_from_switch_and_brightness_state() {
    let config = convert();

    assert_eq!(config.light.len(), 1);
    let light = &config.light[0];
    assert_eq!(light.name, "Living Room");
    assert_eq!(light.address, ids(&["5/3/12"]));
    assert_eq!(light.brightness_state_address, ids(&["5/5/12"]));
    assert_eq!(config.occurrences(&id("5/3/12")).len(), 1);
    assert_eq!(config.occurrences(&id("5/5/12")).len(), 1);
}

#[test]
fn should_prefer_light_state_over_binary_sensor() {
    let config = convert();

    assert_eq!(config.light[0].state_address, ids(&["5/5/13"]));
    assert!(config.binary_sensor.iter().all(|b| b.name != "Living Room Status"));
}

#[test]
fn should_create_temperature_sensor_for_remaining_address() {
    let config = convert();

    assert_eq!(config.sensor.len(), 1);
    let sensor = &config.sensor[0];
    assert_eq!(sensor.name, "Wohnen Temperatur");
    assert_eq!(sensor.state_address, ids(&["1/1/5"]));
    assert_eq!(sensor.value_type, "temperature");
    assert_eq!(sensor.device_class.as_deref(), Some("temperature"));
}

#[test]
fn should_widen_cover_with_listening_address() {
    let config = convert();

    assert_eq!(config.cover.len(), 1);
    let cover = &config.cover[0];
    assert_eq!(cover.name, "Rollladen Küche");
    assert_eq!(cover.move_long_address, ids(&["2/0/1", "2/0/9"]));
    assert_eq!(cover.stop_address, ids(&["2/1/1"]));
    assert_eq!(cover.position_address, ids(&["2/2/1"]));
}

#[test]
fn should_widen_switch_with_listening_address() {
    let config = convert();

    assert_eq!(config.switch.len(), 1);
    assert_eq!(config.switch[0].address, ids(&["1/0/1", "1/0/2"]));
    assert_eq!(config.switch[0].state_address, ids(&["1/0/1", "1/0/2"]));
}

#[test]
fn should_classify_binary_sensors_and_scene() {
    let config = convert();

    let names: Vec<&str> = config.binary_sensor.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Fenster Bad", "Rauchmelder"]);
    assert_eq!(config.binary_sensor[1].device_class.as_deref(), Some("problem"));
    assert_eq!(config.number.len(), 1);
    assert_eq!(config.number[0].value_type, "scene_number");
}

#[test]
fn should_keep_complete_climate_and_drop_incomplete_one() {
    let file = project_file();
    let service = service();
    let registry = load(&service, file.path());
    let conversion = service.convert(&registry);

    let names: Vec<&str> = conversion.config.climate.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bad"]);
    let bad = &conversion.config.climate[0];
    assert_eq!(bad.temperature_address, ids(&["3/4/1"]));
    assert_eq!(bad.target_temperature_state_address, ids(&["3/1/1"]));

    let diagnostics: Vec<&Diagnostic> = conversion.diagnostics.iter().collect();
    assert!(diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::Dropped(err) if err.name == "Flur" && err.role == "temperature_address"
    )));
    assert!(diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::TargetStateAliased { name } if name == "Bad"
    )));
}

#[test]
fn should_report_only_unconvertible_addresses() {
    let file = project_file();
    let service = service();
    let registry = load(&service, file.path());
    let conversion = service.convert(&registry);
    let coverage = conversion.coverage();

    assert_eq!(coverage.total, 20);
    assert_eq!(coverage.unclaimed.len(), 1);
    assert_eq!(
        coverage.unclaimed[0].to_string(),
        "8/0/1: Sonstiges/Reserve/Reserve DPT unspecified"
    );
}

// ---------------------------------------------------------------------------
// Stability
// ---------------------------------------------------------------------------

#[test]
fn should_produce_identical_output_on_rerun() {
    let first = to_yaml(&convert()).unwrap();
    let second = to_yaml(&convert()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn should_read_back_rendered_document() {
    let config = convert();
    let yaml = to_yaml(&config).unwrap();
    assert_eq!(from_yaml(&yaml).unwrap(), config);
}

#[test]
fn should_annotate_addresses_with_range_paths() {
    let file = project_file();
    let service = service();
    let registry = load(&service, file.path());
    let conversion = service.convert(&registry);

    let yaml = to_annotated_yaml(&conversion.config, |id| conversion.index.path_of(id)).unwrap();

    assert!(
        yaml.lines()
            .any(|line| line.trim_start() == "- 5/3/12  # Beleuchtung/Schalten/Living Room")
    );
    assert_eq!(from_yaml(&yaml).unwrap(), conversion.config);
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

fn knxha(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knxha"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("KNXHA_LOG")
        .env_remove("KNXHA_LANGUAGE")
        .env_remove("KNXHA_LIGHTING_RANGE")
        .output()
        .expect("binary should run")
}

#[test]
fn should_print_configuration_to_stdout() {
    let file = project_file();
    let dir = tempfile::tempdir().unwrap();
    let input = file.path().to_str().unwrap();

    let output = knxha(&["-i", input, "-c"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("knx:"));
    assert!(stdout.contains("# Beleuchtung/Schalten/Living Room"));
    assert_eq!(from_yaml(&stdout).unwrap(), convert());
}

#[test]
fn should_write_configuration_to_output_file() {
    let file = project_file();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("knx.yaml");

    let output = knxha(
        &["-i", file.path().to_str().unwrap(), "-o", out.to_str().unwrap()],
        dir.path(),
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let yaml = std::fs::read_to_string(&out).unwrap();
    assert_eq!(from_yaml(&yaml).unwrap(), convert());
}

#[test]
fn should_fail_for_missing_project() {
    let dir = tempfile::tempdir().unwrap();

    let output = knxha(&["-i", "missing.json"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load project"));
}

#[test]
fn should_honour_ranges_from_config_file() {
    let file = project_file();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("knxha.toml"),
        "[ranges]\nlighting_range = 'Nicht vorhanden'\n",
    )
    .unwrap();

    let output = knxha(&["-i", file.path().to_str().unwrap()], dir.path());

    assert!(output.status.success());
    let config = from_yaml(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert!(config.light.is_empty());
}
