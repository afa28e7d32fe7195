//! Slab storage for every organism referenced by either field buffer.

use reef_core::{Organism, OrganismId};

/// Organism arena indexed by [`OrganismId`].
///
/// Ids are dense indices into the arena. They are stable for the duration
/// of a tick; [`PingPongField::publish`](crate::PingPongField::publish)
/// renumbers the survivors.
#[derive(Clone, Debug, Default)]
pub struct Population {
    organisms: Vec<Organism>,
}

impl Population {
    /// Create an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organism and return its id.
    pub fn spawn(&mut self, organism: Organism) -> OrganismId {
        let id = OrganismId(self.organisms.len() as u32);
        self.organisms.push(organism);
        id
    }

    /// Look up an organism.
    pub fn get(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.get(id.index())
    }

    /// Look up an organism mutably.
    pub fn get_mut(&mut self, id: OrganismId) -> Option<&mut Organism> {
        self.organisms.get_mut(id.index())
    }

    /// Whether `id` refers to a living organism.
    pub fn is_alive(&self, id: OrganismId) -> bool {
        self.get(id).is_some_and(Organism::is_alive)
    }

    /// Number of stored organisms, dead ones included.
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    /// Whether the arena holds no organisms.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// All stored organisms with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (OrganismId, &Organism)> {
        self.organisms
            .iter()
            .enumerate()
            .map(|(i, o)| (OrganismId(i as u32), o))
    }

    /// Drop every organism.
    pub fn clear(&mut self) {
        self.organisms.clear();
    }

    /// Move all organisms out, leaving the arena empty.
    pub(crate) fn take_all(&mut self) -> Vec<Organism> {
        std::mem::take(&mut self.organisms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reef_core::{Location, Species};

    #[test]
    fn spawn_assigns_dense_ids() {
        let mut pop = Population::new();
        let a = pop.spawn(Organism::plant(Species::Algae, Location::new(0, 0)));
        let b = pop.spawn(Organism::plant(Species::Seaweed, Location::new(0, 1)));
        assert_eq!(a, OrganismId(0));
        assert_eq!(b, OrganismId(1));
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.get(b).map(Organism::species), Some(Species::Seaweed));
        assert!(pop.get(OrganismId(2)).is_none());
    }

    #[test]
    fn is_alive_tracks_death() {
        let mut pop = Population::new();
        let a = pop.spawn(Organism::plant(Species::Algae, Location::new(0, 0)));
        assert!(pop.is_alive(a));
        pop.get_mut(a).unwrap().set_dead();
        assert!(!pop.is_alive(a));
        assert!(!pop.is_alive(OrganismId(9)));
    }
}
