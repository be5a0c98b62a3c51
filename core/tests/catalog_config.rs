//! Catalog and config construction, loading and validation.

use farm_core::{
    catalog::{CropCatalog, CropSpec},
    config::FarmConfig,
    error::FarmError,
    farm::FarmState,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn spec(id: &str, seed_cost: u32, sell_price: u32, grow_time: u32) -> CropSpec {
    CropSpec { id: id.into(), seed_cost, sell_price, grow_time }
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("farm-core-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn standard_catalog_matches_the_price_table() {
    let catalog = CropCatalog::standard();

    assert_eq!(catalog.len(), 16);
    assert_eq!(catalog.iter().next().unwrap().id, "pepper");
    assert_eq!(catalog.iter().last().unwrap().id, "pumpkin");
    assert_eq!(catalog.lookup("pepper").unwrap(), &spec("pepper", 2, 5, 5));
    assert_eq!(catalog.lookup("Watermelon").unwrap(), &spec("watermelon", 5, 10, 8));
    assert_eq!(catalog.lookup("pine").unwrap().grow_time, 10);
    assert!(catalog.iter().all(|c| c.grow_time >= 1));
}

#[test]
fn lookup_normalizes_case_and_whitespace() {
    let catalog = CropCatalog::standard();

    assert_eq!(catalog.normalize(" CaRRoT\n").unwrap(), "carrot");
    assert!(catalog.contains("HOPS"));
    assert!(matches!(
        catalog.lookup("turnip"),
        Err(FarmError::UnknownCrop { ref crop }) if crop == "turnip"
    ));
}

#[test]
fn custom_catalog_rejects_bad_tables() {
    assert!(matches!(CropCatalog::from_specs(vec![]), Err(FarmError::InvalidCatalog(_))));
    assert!(matches!(
        CropCatalog::from_specs(vec![spec("kale", 1, 2, 0)]),
        Err(FarmError::InvalidCatalog(_))
    ));
    assert!(matches!(
        CropCatalog::from_specs(vec![spec("kale", 1, 2, 3), spec(" KALE", 1, 2, 3)]),
        Err(FarmError::InvalidCatalog(_))
    ));
    assert!(matches!(
        CropCatalog::from_specs(vec![spec("  ", 1, 2, 3)]),
        Err(FarmError::InvalidCatalog(_))
    ));
}

#[test]
fn custom_catalog_keys_are_lowercased() {
    let catalog = CropCatalog::from_specs(vec![spec("Kale", 1, 2, 3), spec("yam", 0, 1, 1)]).unwrap();

    assert_eq!(catalog.lookup("KALE").unwrap().id, "kale");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn catalog_loads_from_json() {
    let path = temp_file(
        "catalog.json",
        r#"{ "crops": [
            { "id": "kale", "seed_cost": 1, "sell_price": 4, "grow_time": 2 },
            { "id": "yam",  "seed_cost": 2, "sell_price": 6, "grow_time": 4 }
        ] }"#,
    );

    let catalog = CropCatalog::load(path.to_str().unwrap()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.lookup("yam").unwrap().sell_price, 6);
    std::fs::remove_file(path).ok();
}

#[test]
fn catalog_load_reports_missing_file() {
    let err = CropCatalog::load("/definitely/not/here.json").unwrap_err();

    assert!(err.to_string().contains("Cannot read"), "got: {err}");
}

#[test]
fn config_file_overrides_only_named_fields() {
    let path = temp_file("config.json", r#"{ "starting_gold": 75, "plot_base_cost": 10 }"#);

    let config = FarmConfig::load(path.to_str().unwrap()).unwrap();

    assert_eq!(config.starting_gold, 75);
    assert_eq!(config.plot_base_cost, 10);
    assert_eq!(config.plot_cost_increment, FarmConfig::default().plot_cost_increment);
    assert_eq!(config.starting_seeds.get("pepper"), Some(&3));
    std::fs::remove_file(path).ok();
}

#[test]
fn config_with_unknown_starting_seeds_is_rejected() {
    let config = FarmConfig {
        starting_seeds: BTreeMap::from([("mandrake".to_string(), 1)]),
        ..FarmConfig::default()
    };

    let err = FarmState::new(CropCatalog::standard(), config).unwrap_err();

    assert!(matches!(err, FarmError::InvalidConfig(_)));
    assert!(!err.is_rejection());
}

#[test]
fn config_with_zero_per_crop_limit_is_rejected() {
    let config = FarmConfig { max_plots_per_crop: 0, ..FarmConfig::default() };

    assert!(matches!(
        FarmState::new(CropCatalog::standard(), config),
        Err(FarmError::InvalidConfig(_))
    ));
}

#[test]
fn starting_seed_ids_are_normalized() {
    let config = FarmConfig {
        starting_seeds: BTreeMap::from([("Corn".to_string(), 2)]),
        ..FarmConfig::default()
    };

    let farm = FarmState::new(CropCatalog::standard(), config).unwrap();

    assert_eq!(farm.seeds("corn"), 2);
}

#[test]
fn custom_per_crop_limit_is_enforced() {
    let config = FarmConfig {
        max_plots_per_crop: 2,
        starting_seeds: BTreeMap::from([("pea".to_string(), 3)]),
        ..FarmConfig::default()
    };
    let mut farm = FarmState::new(CropCatalog::standard(), config).unwrap();

    farm.plant("pea").unwrap();
    farm.plant("pea").unwrap();

    assert!(matches!(
        farm.plant("pea"),
        Err(FarmError::PerCropLimitReached { limit: 2, .. })
    ));
}

#[test]
fn starting_seeds_naming_a_crop_twice_in_different_case_are_rejected() {
    for (first, second) in [(3, 3), (u32::MAX, 1)] {
        let config = FarmConfig {
            starting_seeds: BTreeMap::from([
                ("Pepper".to_string(), first),
                ("pepper".to_string(), second),
            ]),
            ..FarmConfig::default()
        };

        let err = FarmState::new(CropCatalog::standard(), config).unwrap_err();

        assert!(
            matches!(err, FarmError::InvalidConfig(ref msg) if msg.contains("'pepper'")),
            "got: {err}"
        );
    }
}
