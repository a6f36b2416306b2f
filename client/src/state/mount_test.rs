use super::*;

#[test]
fn gate_starts_unmounted() {
    let owner = Owner::new();
    owner.with(|| {
        let gate = MountGate::new();
        assert!(!gate.is_mounted_untracked());
        assert_eq!(gate.select("server", "client"), "server");
    });
}

#[test]
fn gate_switches_after_mark_mounted() {
    let owner = Owner::new();
    owner.with(|| {
        let gate = MountGate::default();
        gate.mark_mounted();
        assert!(gate.is_mounted());
        assert_eq!(gate.select("server", "client"), "client");
    });
}

#[test]
fn mark_mounted_is_idempotent() {
    let owner = Owner::new();
    owner.with(|| {
        let gate = MountGate::new();
        gate.mark_mounted();
        gate.mark_mounted();
        assert!(gate.is_mounted_untracked());
    });
}

#[test]
fn copies_share_the_flag() {
    let owner = Owner::new();
    owner.with(|| {
        let gate = MountGate::new();
        let copy = gate;
        copy.mark_mounted();
        assert!(gate.is_mounted_untracked());
    });
}
