//! # Registry Property Tests
//!
//! Property-based checks of the registry contract over arbitrary operation
//! sequences:
//! - Successful appends grow the history by exactly one and never alter
//!   earlier entries.
//! - Mutations from anyone but the authority fail and change nothing.
//! - Resolution always picks the highest-index version whose inclusive
//!   window contains the height.
//! - `verify` returns exactly what the resolved verifier returns.

use cdef_core::{HeightWindow, Identity, MetadataHash, ParamsRoot};
use cdef_registry::{ComplianceVersion, Registry, RegistryError};
use cdef_zkp::BuiltinVerifier;
use proptest::prelude::*;

fn regulator() -> Identity {
    Identity::new("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").expect("test identity")
}

fn intruder() -> Identity {
    Identity::new("0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc").expect("test identity")
}

#[derive(Debug, Clone)]
enum Op {
    Add {
        by_authority: bool,
        verifier: BuiltinVerifier,
        root: u8,
        window: HeightWindow,
    },
    Update {
        by_authority: bool,
        height: u64,
        root: u8,
        window: HeightWindow,
    },
}

fn verifier_strategy() -> impl Strategy<Value = BuiltinVerifier> {
    prop_oneof![
        Just(BuiltinVerifier::AcceptAll),
        Just(BuiltinVerifier::RejectAll),
        Just(BuiltinVerifier::Sha256Commitment),
    ]
}

/// Small heights so windows overlap often; occasionally inverted.
fn window_strategy() -> impl Strategy<Value = HeightWindow> {
    (0u64..60, 0u64..60).prop_map(|(a, b)| HeightWindow::new(a, b))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), verifier_strategy(), any::<u8>(), window_strategy()).prop_map(
            |(by_authority, verifier, root, window)| Op::Add {
                by_authority,
                verifier,
                root,
                window,
            }
        ),
        (any::<bool>(), 0u64..60, any::<u8>(), window_strategy()).prop_map(
            |(by_authority, height, root, window)| Op::Update {
                by_authority,
                height,
                root,
                window,
            }
        ),
    ]
}

fn apply(reg: &mut Registry<BuiltinVerifier>, op: &Op) -> Result<usize, RegistryError> {
    match op {
        Op::Add {
            by_authority,
            verifier,
            root,
            window,
        } => {
            let caller = if *by_authority { regulator() } else { intruder() };
            reg.add_version(
                &caller,
                *verifier,
                ParamsRoot::from_bytes([*root; 32]),
                *window,
                MetadataHash::new(format!("root-{root}")),
            )
        }
        Op::Update {
            by_authority,
            height,
            root,
            window,
        } => {
            let caller = if *by_authority { regulator() } else { intruder() };
            reg.update_parameters(
                &caller,
                *height,
                ParamsRoot::from_bytes([*root; 32]),
                *window,
                MetadataHash::new(format!("root-{root}")),
            )
        }
    }
}

/// Reference model: highest index whose window contains `h`.
fn expected_index(history: &[ComplianceVersion<BuiltinVerifier>], h: u64) -> Option<usize> {
    (0..history.len())
        .filter(|&i| history[i].t_start() <= h && h <= history[i].t_end())
        .max()
}

proptest! {
    #[test]
    fn history_is_append_only(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut reg = Registry::new(regulator());
        let mut seen: Vec<ComplianceVersion<BuiltinVerifier>> = Vec::new();

        for op in &ops {
            let before = reg.version_count();
            match apply(&mut reg, op) {
                Ok(index) => {
                    prop_assert_eq!(index, before);
                    prop_assert_eq!(reg.version_count(), before + 1);
                }
                Err(_) => prop_assert_eq!(reg.version_count(), before),
            }
            prop_assert_eq!(&reg.history()[..seen.len()], seen.as_slice());
            seen = reg.history().to_vec();
        }
    }

    #[test]
    fn non_authority_mutations_never_succeed(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut reg = Registry::new(regulator());
        for op in &ops {
            let by_authority = match op {
                Op::Add { by_authority, .. } | Op::Update { by_authority, .. } => *by_authority,
            };
            let before = reg.history().to_vec();
            let result = apply(&mut reg, op);
            if !by_authority {
                prop_assert_eq!(result, Err(RegistryError::NotAuthority { caller: intruder() }));
                prop_assert_eq!(reg.history(), before.as_slice());
            }
        }
    }

    #[test]
    fn resolution_matches_reference_model(
        ops in prop::collection::vec(op_strategy(), 0..40),
        h in 0u64..70,
    ) {
        let mut reg = Registry::new(regulator());
        for op in &ops {
            let _ = apply(&mut reg, op);
        }

        match expected_index(reg.history(), h) {
            Some(i) => {
                prop_assert_eq!(reg.resolve_at(h).map(|v| v.index()), Ok(i));
                prop_assert_eq!(reg.resolve_active(h).map(|v| v.index()), Ok(i));
            }
            None => {
                prop_assert_eq!(reg.resolve_at(h).map(|v| v.index()), Err(RegistryError::NoVersionAtHeight(h)));
                prop_assert_eq!(
                    reg.resolve_active(h).map(|v| v.index()),
                    Err(RegistryError::NoActiveVersion { height: h })
                );
            }
        }
    }

    #[test]
    fn update_parameters_inherits_verifier_of_resolved_version(
        ops in prop::collection::vec(op_strategy(), 1..30),
        h in 0u64..60,
    ) {
        let mut reg = Registry::new(regulator());
        for op in &ops {
            let _ = apply(&mut reg, op);
        }
        let expected = reg.resolve_active(h).map(|v| *v.verifier());
        let result = reg.update_parameters(
            &regulator(),
            h,
            ParamsRoot::ZERO,
            HeightWindow::from(0),
            MetadataHash::default(),
        );
        match expected {
            Ok(verifier) => {
                let index = result.expect("active version exists");
                prop_assert_eq!(reg.version(index).map(|v| *v.verifier()), Some(verifier));
            }
            Err(err) => prop_assert_eq!(result, Err(err)),
        }
    }

    #[test]
    fn verify_mirrors_resolved_verifier(
        ops in prop::collection::vec(op_strategy(), 0..30),
        h in 0u64..60,
        proof in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        use cdef_zkp::Verifier;

        let mut reg = Registry::new(regulator());
        for op in &ops {
            let _ = apply(&mut reg, op);
        }
        let expected = reg
            .resolve_active(h)
            .map(|v| v.verifier().verify(&proof, &[]));
        prop_assert_eq!(reg.verify(&proof, &[], h), expected);
    }
}

#[test]
fn later_narrow_window_beats_earlier_wide_window() {
    let mut reg = Registry::new(regulator());
    reg.add_version(
        &regulator(),
        BuiltinVerifier::AcceptAll,
        ParamsRoot::ZERO,
        HeightWindow::new(0, 100),
        MetadataHash::new("V1"),
    )
    .unwrap();
    reg.add_version(
        &regulator(),
        BuiltinVerifier::RejectAll,
        ParamsRoot::ZERO,
        HeightWindow::new(0, 50),
        MetadataHash::new("V2"),
    )
    .unwrap();

    assert_eq!(reg.resolve_at(30).unwrap().metadata_hash().as_str(), "V2");
    assert_eq!(reg.verify(b"", &[], 30), Ok(false));
    assert_eq!(reg.verify(b"", &[], 60), Ok(true));
}

#[test]
fn open_ended_window_boundary() {
    let mut reg = Registry::new(regulator());
    reg.add_version(
        &regulator(),
        BuiltinVerifier::AcceptAll,
        ParamsRoot::ZERO,
        HeightWindow::new(200, u64::MAX),
        MetadataHash::default(),
    )
    .unwrap();
    assert_eq!(
        reg.resolve_at(199).map(|v| v.index()),
        Err(RegistryError::NoVersionAtHeight(199))
    );
    assert_eq!(reg.resolve_at(200).map(|v| v.index()), Ok(0));
}
