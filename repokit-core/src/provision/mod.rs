//! Provisioning state machine
//!
//! [`plan`] turns probed existence into a decision; [`orchestrator`] probes,
//! decides and acts.

pub mod orchestrator;
pub mod plan;

pub use orchestrator::{Provisioned, Provisioner, Removed, Target};
pub use plan::{
    reconcile, reconcile_clone, reconcile_create, reconcile_remove, Conflict, Decision, Intent,
    Probe, RemovePlan, RemoteState,
};
