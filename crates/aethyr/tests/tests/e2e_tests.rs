#[path = "e2e/dispatch_contract.rs"]
mod dispatch_contract;

#[path = "e2e/evolution_lifecycle.rs"]
mod evolution_lifecycle;

#[path = "e2e/shared_access.rs"]
mod shared_access;
