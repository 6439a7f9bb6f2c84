//! Squad members.
//!
//! A `Soldier` is immutable once parsed.  The per-member duty quota the
//! allocation algorithm consumes lives in a separate table owned by the
//! roster builder, not on the soldier itself, so squad storage order never
//! doubles as algorithm state.

/// One squad member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Soldier {
    /// Output label; unique within a squad.
    pub name: String,
    /// Drivers must receive an uninterrupted rest block before the window
    /// ends.
    pub is_driver: bool,
}

impl Soldier {
    pub fn new(name: impl Into<String>, is_driver: bool) -> Self {
        Self { name: name.into(), is_driver }
    }
}

/// An ordered squad of soldiers.
///
/// The order is the input order and is never reshuffled; selection priority
/// is computed from driver flags and remaining quotas instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Squad {
    members: Vec<Soldier>,
}

impl Squad {
    pub fn new(members: Vec<Soldier>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Soldier] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members flagged as drivers.
    pub fn driver_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_driver).count()
    }
}
