#[path = "property/dispatch_totality.rs"]
mod dispatch_totality;

#[path = "property/evolution_invariants.rs"]
mod evolution_invariants;
