//! Reconciliation of probed state into a provisioning decision
//!
//! All guard probes are collected into a [`Probe`] first, then mapped to a
//! [`Decision`] by [`reconcile`], a pure function with no side effects. The
//! probes are not atomic with the actions that follow: two invocations on the
//! same identity can both pass the guards.

use crate::RemoteRepository;

/// What the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Create the remote, then clone it
    Create,
    /// Clone a remote that already exists
    Clone,
    /// Delete the remote and the local copy
    Remove,
}

impl Intent {
    /// Whether the local guard must pass before the remote is probed
    pub fn guards_local_first(&self) -> bool {
        matches!(self, Intent::Create | Intent::Clone)
    }
}

/// Remote side of a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState {
    Present(RemoteRepository),
    Absent,
    /// Skipped because an earlier guard already failed
    Unprobed,
}

impl RemoteState {
    pub fn is_present(&self) -> bool {
        matches!(self, RemoteState::Present(_))
    }
}

impl From<Option<RemoteRepository>> for RemoteState {
    fn from(repo: Option<RemoteRepository>) -> Self {
        match repo {
            Some(r) => RemoteState::Present(r),
            None => RemoteState::Absent,
        }
    }
}

/// Existence snapshot taken right before acting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub local_exists: bool,
    pub remote: RemoteState,
}

/// Why a flow must stop without side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    LocalPathExists,
    RemoteExists,
    RemoteMissing,
}

/// Action the orchestrator should take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Create the remote, then clone it
    CreateAndClone,
    /// Clone the existing remote
    Clone(RemoteRepository),
    /// Delete whichever sides exist; both false means nothing to do
    Remove { remote: bool, local: bool },
    /// Abort before any side effect
    Conflict(Conflict),
}

/// Which sides a remove flow should delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovePlan {
    pub remote: bool,
    pub local: bool,
}

/// Create guard: proceed with create-and-clone, or stop on a conflict
///
/// `Unprobed` with an absent local path is treated like `Absent`; the
/// orchestrator never produces that combination.
pub fn reconcile_create(probe: &Probe) -> std::result::Result<(), Conflict> {
    if probe.local_exists {
        return Err(Conflict::LocalPathExists);
    }

    match probe.remote {
        RemoteState::Present(_) => Err(Conflict::RemoteExists),
        RemoteState::Absent | RemoteState::Unprobed => Ok(()),
    }
}

/// Clone guard: the remote to clone from, or the conflict that stops it
pub fn reconcile_clone(probe: &Probe) -> std::result::Result<RemoteRepository, Conflict> {
    if probe.local_exists {
        return Err(Conflict::LocalPathExists);
    }

    match &probe.remote {
        RemoteState::Present(repo) => Ok(repo.clone()),
        RemoteState::Absent | RemoteState::Unprobed => Err(Conflict::RemoteMissing),
    }
}

/// Remove never conflicts; it deletes whatever exists
pub fn reconcile_remove(probe: &Probe) -> RemovePlan {
    RemovePlan {
        remote: probe.remote.is_present(),
        local: probe.local_exists,
    }
}

/// Decide what to do for `intent` given `probe`
///
/// | intent | local | remote  | decision |
/// |--------|-------|---------|----------|
/// | create | yes   | any     | conflict: local exists |
/// | create | no    | present | conflict: remote exists |
/// | create | no    | absent  | create and clone |
/// | clone  | yes   | any     | conflict: local exists |
/// | clone  | no    | present | clone |
/// | clone  | no    | absent  | conflict: remote missing |
/// | remove | any   | any     | remove what exists |
pub fn reconcile(intent: Intent, probe: &Probe) -> Decision {
    match intent {
        Intent::Create => match reconcile_create(probe) {
            Ok(()) => Decision::CreateAndClone,
            Err(conflict) => Decision::Conflict(conflict),
        },
        Intent::Clone => match reconcile_clone(probe) {
            Ok(repo) => Decision::Clone(repo),
            Err(conflict) => Decision::Conflict(conflict),
        },
        Intent::Remove => {
            let plan = reconcile_remove(probe);
            Decision::Remove {
                remote: plan.remote,
                local: plan.local,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepoIdentity;
    use url::Url;

    fn remote() -> RemoteRepository {
        RemoteRepository {
            identity: RepoIdentity::new("octo", "demo"),
            clone_url: Url::parse("https://github.com/octo/demo.git").unwrap(),
            html_url: Url::parse("https://github.com/octo/demo").unwrap(),
        }
    }

    fn probe(local_exists: bool, remote: RemoteState) -> Probe {
        Probe {
            local_exists,
            remote,
        }
    }

    #[test]
    fn test_create_local_conflict_regardless_of_remote() {
        for state in [
            RemoteState::Present(remote()),
            RemoteState::Absent,
            RemoteState::Unprobed,
        ] {
            assert_eq!(
                reconcile(Intent::Create, &probe(true, state)),
                Decision::Conflict(Conflict::LocalPathExists)
            );
        }
    }

    #[test]
    fn test_create_remote_conflict() {
        assert_eq!(
            reconcile(Intent::Create, &probe(false, RemoteState::Present(remote()))),
            Decision::Conflict(Conflict::RemoteExists)
        );
    }

    #[test]
    fn test_create_when_both_absent() {
        assert_eq!(
            reconcile(Intent::Create, &probe(false, RemoteState::Absent)),
            Decision::CreateAndClone
        );
    }

    #[test]
    fn test_clone_table() {
        assert_eq!(
            reconcile(Intent::Clone, &probe(true, RemoteState::Present(remote()))),
            Decision::Conflict(Conflict::LocalPathExists)
        );
        assert_eq!(
            reconcile(Intent::Clone, &probe(false, RemoteState::Present(remote()))),
            Decision::Clone(remote())
        );
        assert_eq!(
            reconcile(Intent::Clone, &probe(false, RemoteState::Absent)),
            Decision::Conflict(Conflict::RemoteMissing)
        );
    }

    #[test]
    fn test_remove_table() {
        let cases = [
            (true, RemoteState::Present(remote()), true, true),
            (true, RemoteState::Absent, false, true),
            (false, RemoteState::Present(remote()), true, false),
            (false, RemoteState::Absent, false, false),
        ];

        for (local_exists, state, want_remote, want_local) in cases {
            assert_eq!(
                reconcile(Intent::Remove, &probe(local_exists, state)),
                Decision::Remove {
                    remote: want_remote,
                    local: want_local
                }
            );
        }
    }

    #[test]
    fn test_per_intent_guards_match_table() {
        let present = probe(false, RemoteState::Present(remote()));
        assert_eq!(reconcile_create(&present), Err(Conflict::RemoteExists));
        assert_eq!(reconcile_clone(&present), Ok(remote()));
        assert_eq!(
            reconcile_remove(&present),
            RemovePlan {
                remote: true,
                local: false
            }
        );

        let local = probe(true, RemoteState::Unprobed);
        assert_eq!(reconcile_create(&local), Err(Conflict::LocalPathExists));
        assert_eq!(reconcile_clone(&local), Err(Conflict::LocalPathExists));
    }

    #[test]
    fn test_guards_local_first() {
        assert!(Intent::Create.guards_local_first());
        assert!(Intent::Clone.guards_local_first());
        assert!(!Intent::Remove.guards_local_first());
    }

    #[test]
    fn test_remote_state_from_option() {
        assert_eq!(RemoteState::from(None), RemoteState::Absent);
        assert!(RemoteState::from(Some(remote())).is_present());
    }
}
