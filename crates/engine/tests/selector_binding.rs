use std::sync::Arc;

use catsel_engine::{BindingState, ControlsSnapshot, SelectorBinding, SelectorView, format_entry};
use catsel_types::{Catalog, NOT_SET_LABEL, SelectorConfig, Variant};
use serde_json::json;

fn assay_catalog() -> Arc<Catalog> {
    let catalog = Catalog::from_value(json!({
        "Assay1": {
            "reference": "RefX",
            "v1": {"scores": [1, 2, 3]},
            "v2": {"scores": [4, 5]}
        },
        "Assay2": {
            "reference_for_species": "Mus musculus",
            "beta": {"workflows": {"bwa": "1.2", "star": ["2.7", "2.8"]}},
            "alpha": "plain text"
        }
    }))
    .expect("fixture catalog is valid");
    Arc::new(catalog)
}

fn bind(variant: Variant) -> SelectorBinding<ControlsSnapshot> {
    SelectorBinding::initialize(assay_catalog(), SelectorConfig::for_variant(variant), ControlsSnapshot::new())
        .expect("bind fixture catalog")
}

#[test]
fn initialize_selects_first_section_and_first_eligible_version() {
    let binding = bind(Variant::Annotated);
    assert_eq!(binding.selection().section, "Assay1");
    assert_eq!(binding.selection().version.as_deref(), Some("reference"));
    assert_eq!(binding.state(), BindingState::VersionSelected);

    let view = binding.view();
    assert_eq!(view.section_options, vec!["Assay1", "Assay2"]);
    assert_eq!(view.selected_section.as_deref(), Some("Assay1"));
    assert_eq!(view.selected_section_index(), Some(0));
    assert_eq!(view.selected_version_index(), Some(0));
}

#[test]
fn annotated_scenario_keeps_reference_selectable() {
    let mut binding = bind(Variant::Annotated);
    let view = binding.view();
    assert_eq!(view.reference_label.as_deref(), Some("RefX"));
    assert_eq!(view.version_options, vec!["reference", "v1", "v2"]);
    assert_eq!(view.selected_version.as_deref(), Some("reference"));
    assert_eq!(view.output, "\"RefX\"");

    binding.select_version("v1").unwrap();
    assert_eq!(binding.view().output, "{\n  \"scores\": [1,2,3]\n}");
    binding.select_version("v2").unwrap();
    assert_eq!(binding.view().output, "{\n  \"scores\": [4,5]\n}");
}

#[test]
fn reference_for_species_is_never_offered_when_excluded() {
    let mut binding = bind(Variant::Annotated);
    binding.select_section("Assay2").unwrap();
    let view = binding.view();
    assert_eq!(view.version_options, vec!["beta", "alpha"]);
    assert!(!view.version_options.iter().any(|option| option == "reference_for_species"));
    assert_eq!(view.reference_label.as_deref(), Some(NOT_SET_LABEL));
    assert_eq!(view.selected_version.as_deref(), Some("beta"));
}

#[test]
fn plain_variant_offers_every_key_and_prints_raw_json() {
    let mut binding = bind(Variant::Plain);
    binding.select_section("Assay2").unwrap();
    assert_eq!(binding.view().version_options, vec!["reference_for_species", "beta", "alpha"]);
    assert_eq!(binding.view().reference_label, None);

    binding.select_version("beta").unwrap();
    let expected = format_entry(&json!({"workflows": {"bwa": "1.2", "star": ["2.7", "2.8"]}}), false).unwrap();
    assert_eq!(binding.view().output, expected);
    assert!(binding.view().output.contains("\"star\": [\n"));
}

#[test]
fn output_matches_formatted_entry_for_every_reachable_pair() {
    for variant in Variant::ALL {
        let config = SelectorConfig::for_variant(variant);
        let mut binding = bind(variant);
        let catalog = Arc::clone(binding.catalog());
        for (section_name, section) in catalog.iter() {
            binding.select_section(section_name).unwrap();
            for version in section.eligible_versions(&config.excluded_version_keys) {
                binding.select_version(version).unwrap();
                let entry = catalog.entry(section_name, version).unwrap();
                let expected = format_entry(entry, config.compact_array_output).unwrap();
                assert_eq!(binding.output(), expected, "{variant}: {section_name}/{version}");
                assert_eq!(binding.view().output, expected);
            }
        }
    }
}

#[test]
fn rerunning_version_change_is_idempotent() {
    let mut binding = bind(Variant::Annotated);
    binding.select_section("Assay2").unwrap();
    let first = binding.output().to_string();
    let writes = binding.view().output_writes;

    binding.on_version_change().unwrap();
    assert_eq!(binding.output(), first);
    assert_eq!(binding.view().output, first);
    assert_eq!(binding.view().output_writes, writes + 1);
}

#[test]
fn custom_exclusions_can_hide_the_reference_key() {
    let config = SelectorConfig::default().with_excluded_keys(["reference", "reference_for_species"]);
    let binding = SelectorBinding::initialize(assay_catalog(), config, ControlsSnapshot::new()).unwrap();
    assert_eq!(binding.view().version_options, vec!["v1", "v2"]);
    assert_eq!(binding.view().reference_label.as_deref(), Some("RefX"));
    assert_eq!(binding.selection().version.as_deref(), Some("v1"));
}

/// Records the order of calls to check that each transition completes before returning.
#[derive(Default)]
struct CallLog(Vec<String>);

impl SelectorView for CallLog {
    fn set_section_options(&mut self, options: &[String]) {
        self.0.push(format!("sections={}", options.join(",")));
    }
    fn set_selected_section(&mut self, section: &str) {
        self.0.push(format!("section={section}"));
    }
    fn set_version_options(&mut self, options: &[String]) {
        self.0.push(format!("versions={}", options.join(",")));
    }
    fn set_selected_version(&mut self, version: Option<&str>) {
        self.0.push(format!("version={}", version.unwrap_or("-")));
    }
    fn set_reference_label(&mut self, label: &str) {
        self.0.push(format!("reference={label}"));
    }
    fn set_output(&mut self, output: &str) {
        self.0.push(format!("output={output}"));
    }
}

#[test]
fn section_change_pushes_controls_in_display_order() {
    let mut binding = SelectorBinding::initialize(assay_catalog(), SelectorConfig::default(), CallLog::default()).unwrap();
    binding.view_mut().0.clear();

    binding.select_section("Assay2").unwrap();
    let calls = binding.into_view().0;
    assert_eq!(
        calls,
        vec![
            "section=Assay2".to_string(),
            "reference=Not set".to_string(),
            "versions=beta,alpha".to_string(),
            "version=beta".to_string(),
            format!(
                "output={}",
                format_entry(&json!({"workflows": {"bwa": "1.2", "star": ["2.7", "2.8"]}}), true).unwrap()
            ),
        ]
    );
}

#[test]
fn empty_catalog_fails_before_binding() {
    let err = Catalog::from_json_str("{}").unwrap_err();
    assert_eq!(err.to_string(), "catalog is empty; at least one section is required");
    let binding = SelectorBinding::initialize(Arc::new(Catalog::default()), SelectorConfig::default(), ControlsSnapshot::new());
    assert!(binding.is_err());
}
