//! Model files assembled into managers end to end.

use std::fs;

use eptools::{
    ArgumentGroup, AssemblyOrder, ConfigError, ManagerError, ModelConfig, PotentialKind,
    PotentialManager,
};

use crate::common::five_with_suffix;

const REGRESSION_MODEL: &str = r#"
[model]
ordering = "strict"

[[potential]]
kind = "Gaussian"
params = [1.5, 0.25]

[[potential]]
kind = "QuantRegress"
params = [0.9, 3.0, 1.0]

[[potential]]
kind = "Heaviside"

[[potential]]
kind = "SpikeSlab"
params = [0.2, 4.0]
"#;

#[test]
fn file_builds_both_manager_flavours() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regression.toml");
    fs::write(&path, REGRESSION_MODEL).unwrap();

    let config = ModelConfig::load(&path).unwrap();
    let mut list = config.build_list().unwrap();
    let mut staged = config.build_staged().unwrap();

    let managers: [&mut dyn PotentialManager; 2] = [&mut list, &mut staged];
    for manager in managers {
        assert_eq!(manager.size(), 4);
        assert_eq!(manager.bivariate_start(), 3);
        assert_eq!(
            manager.potential(1).unwrap().kind(),
            PotentialKind::QuantileRegression
        );
        assert_eq!(manager.potential(2).unwrap().params(), [1.0, 0.0]);
    }
}

#[test]
fn reordered_file_needs_grouped_ordering() {
    let interleaved = REGRESSION_MODEL.replace(
        "[[potential]]\nkind = \"Heaviside\"\n",
        "[[potential]]\nkind = \"SpikeSlab\"\n\n[[potential]]\nkind = \"Heaviside\"\n",
    );
    let mut config = ModelConfig::from_toml_str(&interleaved).unwrap();
    assert_eq!(config.potentials.len(), 5);
    assert!(matches!(
        config.build_list(),
        Err(ConfigError::Manager(ManagerError::InvariantViolation { .. }))
    ));

    config.model.ordering = AssemblyOrder::Grouped;
    let list = config.build_list().unwrap();
    assert_eq!(list.count_in_group(ArgumentGroup::BivariatePrecision), 2);
    assert_eq!(list.bivariate_start(), 3);
}

#[test]
fn managers_can_be_written_back_by_name() {
    let potentials = five_with_suffix();
    let text = ModelConfig::from_potentials(&potentials, AssemblyOrder::Strict)
        .to_toml_string()
        .unwrap();
    assert!(text.contains("kind = \"GaussMixture\""));
    assert!(text.contains("kind = \"SpikeSlab\""));

    let reread = ModelConfig::from_toml_str(&text).unwrap();
    let list = reread.build_list().unwrap();
    assert_eq!(list.into_inner(), potentials);
}
