//! Event counts accumulated while organisms act.

use std::fmt;

/// Why an organism died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Death {
    /// Killed by a hunter or grazed by a herbivore.
    Eaten,
    /// Food level reached zero.
    Starved,
    /// Age exceeded the species maximum.
    AgedOut,
    /// No cell to move to or stay in.
    Overcrowded,
}

impl fmt::Display for Death {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Death::Eaten => "eaten",
            Death::Starved => "starved",
            Death::AgedOut => "aged out",
            Death::Overcrowded => "overcrowded",
        })
    }
}

/// Per-tick event counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Newborn animals placed.
    pub births: u32,
    /// Organisms killed for food.
    pub eaten: u32,
    /// Hunters that starved.
    pub starved: u32,
    /// Animals that died of old age.
    pub aged_out: u32,
    /// Animals with nowhere to go.
    pub overcrowded: u32,
    /// Living occupants overwritten in the next buffer.
    pub evicted: u32,
    /// Animals that became infected.
    pub new_infections: u32,
    /// Plants created by global growth.
    pub plants_grown: u32,
}

impl Tally {
    /// Count one death.
    pub fn record(&mut self, death: Death) {
        match death {
            Death::Eaten => self.eaten += 1,
            Death::Starved => self.starved += 1,
            Death::AgedOut => self.aged_out += 1,
            Death::Overcrowded => self.overcrowded += 1,
        }
    }

    /// Deaths of every cause. Evictions are not deaths.
    pub fn deaths(&self) -> u32 {
        self.eaten + self.starved + self.aged_out + self.overcrowded
    }
}
