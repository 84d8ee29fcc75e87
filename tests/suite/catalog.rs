//! Catalog behaviour across the whole kind table.

use eptools::{CatalogError, EpPotential, ParameterError, PotentialId, PotentialKind, catalog};

use crate::common::{construction_params, valid_params};

#[test]
fn every_valid_kind_builds_and_reports_itself() {
    for kind in PotentialKind::all() {
        assert!(catalog::is_valid_kind(kind.id()));
        let pot = catalog::create(kind.id(), &valid_params(*kind)).unwrap();
        assert_eq!(pot.kind(), *kind);
        assert_eq!(pot.argument_group(), kind.argument_group());
    }
}

#[test]
fn ids_outside_the_range_fail_everywhere() {
    for raw in [-7, -1, PotentialId::MAX + 1, 1_000] {
        assert!(!catalog::is_valid_kind(raw));
        assert!(matches!(
            catalog::create(raw, &[1.0]),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            catalog::create_default(raw, &[1.0]),
            Err(CatalogError::InvalidArgument(_))
        ));
    }
}

#[test]
fn max_kind_scenario() {
    assert_eq!(PotentialId::MAX, 7);

    let gaussian = catalog::create(0, &[0.0, 1.0]).unwrap();
    assert!(matches!(gaussian, EpPotential::Gaussian(_)));

    let err = catalog::create(8, &[0.0, 1.0]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument: unknown potential id 8; valid ids are 0..=7"
    );

    let err = catalog::create(1, &[-1.0]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidParameter {
            kind: PotentialKind::Laplace,
            source: ParameterError::NotPositive { name: "scale", .. },
        }
    ));
}

#[test]
fn construction_parameters_are_enforced_and_idempotent() {
    for kind in PotentialKind::all() {
        if kind.requires_construction_params() {
            assert!(matches!(
                catalog::create_default(kind.id(), &[]),
                Err(CatalogError::MissingConstructionParameter { .. })
            ));
        } else {
            assert_eq!(
                catalog::create_default(kind.id(), &[]).unwrap().kind(),
                *kind
            );
        }

        let construction = construction_params(*kind);
        let first = catalog::create_default(kind.id(), &construction).unwrap();
        let second = catalog::create_default(kind.id(), &construction).unwrap();
        assert_eq!(first.params(), second.params());
        assert_eq!(first, second);
    }
}

#[test]
fn defaults_are_valid_explicit_vectors() {
    for kind in PotentialKind::all() {
        let default = catalog::create_default(kind.id(), &construction_params(*kind)).unwrap();
        let rebuilt = catalog::create(kind.id(), &default.params()).unwrap();
        assert_eq!(rebuilt, default);
    }
}

#[test]
fn malformed_vectors_are_never_coerced() {
    let cases: &[(PotentialKind, &[f64])] = &[
        (PotentialKind::Gaussian, &[0.0, -1.0]),
        (PotentialKind::Gaussian, &[0.0, 1.0, 2.0]),
        (PotentialKind::Probit, &[2.0, 0.0]),
        (PotentialKind::Heaviside, &[1.0]),
        (PotentialKind::Exponential, &[0.0]),
        (PotentialKind::QuantileRegression, &[0.0, 0.0, 1.0]),
        (PotentialKind::GaussianMixture, &[2.0, 0.9, 0.9, 0.0, 0.0, 1.0, 1.0]),
        (PotentialKind::GaussianMixture, &[1.5, 1.0, 0.0, 1.0]),
        (PotentialKind::SpikeAndSlab, &[1.0, 1.0]),
        (PotentialKind::Laplace, &[f64::NAN]),
    ];
    for (kind, params) in cases {
        let err = catalog::create_kind(*kind, params).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidParameter { kind: k, .. } if k == *kind),
            "{kind} {params:?} gave {err}"
        );
    }
}

#[test]
fn names_resolve_to_the_same_constructor() {
    for (name, kind) in eptools::KIND_NAMES {
        let by_name = catalog::create_by_name(name, &valid_params(*kind)).unwrap();
        let by_id = catalog::create(kind.id(), &valid_params(*kind)).unwrap();
        assert_eq!(by_name, by_id);
    }
    assert!(catalog::create_by_name("Gauss", &[0.0, 1.0])
        .unwrap_err()
        .is_invalid_argument());
}
