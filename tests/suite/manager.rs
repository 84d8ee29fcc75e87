//! Manager contract checks that every assembler must pass.

use std::thread;

use eptools::{
    ArgumentGroup, EpPotential, ManagerError, PotentialList, PotentialManager,
    StagedPotentialManager,
};

use crate::common::{five_interleaved, five_with_suffix};

fn assert_contiguous_suffix(manager: &mut impl PotentialManager) {
    let bivariate = manager.count_in_group(ArgumentGroup::BivariatePrecision);
    let start = manager.size() - bivariate;
    assert_eq!(manager.bivariate_start(), start);
    assert_eq!(
        manager.count_in_group(ArgumentGroup::Univariate) + bivariate,
        manager.size()
    );
    for index in 0..manager.size() {
        let view = manager.potential(index).unwrap();
        assert_eq!(
            index >= start,
            view.argument_group() == ArgumentGroup::BivariatePrecision,
            "index {index} ({}) on the wrong side of {start}",
            view.kind()
        );
    }
}

fn assert_bounds(manager: &mut impl PotentialManager) {
    let size = manager.size();
    for index in [-1_i64, i64::MIN, i64::try_from(size).unwrap(), i64::MAX] {
        assert_eq!(
            manager.potential_at(index).unwrap_err(),
            ManagerError::IndexOutOfRange { index, size }
        );
    }
    assert!(matches!(
        manager.potential(size),
        Err(ManagerError::IndexOutOfRange { .. })
    ));
}

#[test]
fn list_reports_the_five_potential_scenario() {
    let mut list = PotentialList::new(five_with_suffix()).unwrap();
    assert_eq!(list.size(), 5);
    assert_eq!(list.count_in_group(ArgumentGroup::BivariatePrecision), 2);
    assert_eq!(list.bivariate_start(), 3);
    assert_contiguous_suffix(&mut list);
    assert_bounds(&mut list);
}

#[test]
fn staged_reports_the_five_potential_scenario() {
    let mut staged = StagedPotentialManager::new(&five_with_suffix()).unwrap();
    assert_eq!(staged.size(), 5);
    assert_eq!(staged.group_counts().get(ArgumentGroup::BivariatePrecision), 2);
    assert_eq!(staged.bivariate_start(), 3);
    assert_contiguous_suffix(&mut staged);
    assert_bounds(&mut staged);
}

#[test]
fn interleaved_assembly_fails_at_construction() {
    let expected = ManagerError::InvariantViolation {
        group: ArgumentGroup::BivariatePrecision,
        index: 1,
        offender: 2,
    };
    assert_eq!(
        PotentialList::new(five_interleaved()).unwrap_err(),
        expected
    );
    assert_eq!(
        StagedPotentialManager::new(&five_interleaved()).unwrap_err(),
        expected
    );
}

#[test]
fn grouped_assemblers_repair_the_order() {
    let mut list = PotentialList::grouped(five_interleaved()).unwrap();
    let mut staged = StagedPotentialManager::grouped(&five_interleaved()).unwrap();
    assert_contiguous_suffix(&mut list);
    assert_contiguous_suffix(&mut staged);
    for index in 0..list.size() {
        let from_list = list.potential(index).unwrap().to_owned_potential();
        assert_eq!(staged.potential(index).unwrap().potential(), &from_list);
    }
}

#[test]
fn both_assemblers_serve_the_same_sweep() {
    let potentials = five_with_suffix();
    let mut list = PotentialList::new(potentials.clone()).unwrap();
    let mut staged = StagedPotentialManager::new(&potentials).unwrap();

    let mut from_list: Vec<EpPotential> = Vec::new();
    list.for_each_potential(|view| from_list.push(view.to_owned_potential()))
        .unwrap();
    let mut from_staged: Vec<EpPotential> = Vec::new();
    staged
        .for_each_potential(|view| from_staged.push(view.to_owned_potential()))
        .unwrap();

    assert_eq!(from_list, potentials);
    assert_eq!(from_staged, potentials);
}

#[test]
fn inference_loop_slices_prefix_and_suffix() {
    let mut list = PotentialList::new(five_with_suffix()).unwrap();
    let start = list.bivariate_start();

    let mut prefix = Vec::new();
    for index in 0..start {
        prefix.push(list.potential(index).unwrap().argument_group());
    }
    let mut suffix = Vec::new();
    for index in start..list.size() {
        suffix.push(list.potential(index).unwrap().argument_group());
    }

    assert!(prefix.iter().all(|g| *g == ArgumentGroup::Univariate));
    assert!(suffix.iter().all(|g| *g == ArgumentGroup::BivariatePrecision));
}

#[test]
fn managers_can_be_handed_to_separate_workers() {
    let lists: Vec<PotentialList> = (0..2)
        .map(|_| PotentialList::new(five_with_suffix()).unwrap())
        .collect();
    let handles: Vec<_> = lists
        .into_iter()
        .map(|mut list| {
            thread::spawn(move || {
                let mut kinds = Vec::new();
                list.for_each_potential(|view| kinds.push(view.kind()))
                    .unwrap();
                kinds
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], results[1]);
}

#[test]
fn trait_objects_are_supported() {
    let mut managers: Vec<Box<dyn PotentialManager>> = vec![
        Box::new(PotentialList::new(five_with_suffix()).unwrap()),
        Box::new(StagedPotentialManager::new(&five_with_suffix()).unwrap()),
    ];
    for manager in &mut managers {
        assert_eq!(manager.size(), 5);
        assert_eq!(manager.bivariate_start(), 3);
        assert!(manager.potential_at(-1).is_err());
        assert_eq!(manager.potential(0).unwrap().index(), 0);
    }
}
