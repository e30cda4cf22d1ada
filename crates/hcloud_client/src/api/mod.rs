//! Per-resource operation surfaces.

mod firewalls;
mod isos;
mod networks;
mod placement_groups;
mod servers;

pub use firewalls::Firewalls;
pub use isos::Isos;
pub use networks::Networks;
pub use placement_groups::PlacementGroups;
pub use servers::Servers;
