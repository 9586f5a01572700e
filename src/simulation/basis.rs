/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! The atomic basis of the unit cell
//!
//! An ordered list of atom slots. Slot 0 is the origin atom, always present
//! and pinned at fractional (0, 0, 0); slots 1..N are user-added atoms.
//! Atoms are added to the end and removed from the end, a stack discipline
//! rather than arbitrary deletion, matching the add/remove controls of the
//! reference UI. Display size and color ride along for the 3D rendering
//! collaborator and never influence the computed pattern.

use serde::{Deserialize, Serialize};

use super::errors::{Result, SimulationError};
use crate::scattering::AtomSite;
use crate::utils::constants::MAX_BASIS_ATOMS;

/// One basis atom slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisAtom {
    /// Element symbol
    pub element: String,
    /// Fractional position within the unit cell
    pub position: [f64; 3],
    /// Display marker size for the 3D view
    #[serde(default = "default_display_size")]
    pub display_size: f64,
    /// Display color for the 3D view, `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_display_size() -> f64 {
    300.0
}

fn default_color() -> String {
    "#d62728".to_string()
}

impl BasisAtom {
    /// Create an atom slot
    pub fn new(element: &str, position: [f64; 3]) -> Self {
        Self {
            element: element.to_string(),
            position,
            display_size: default_display_size(),
            color: default_color(),
        }
    }
}

/// The ordered basis with the origin-slot discipline
#[derive(Debug, Clone)]
pub struct Basis {
    atoms: Vec<BasisAtom>,
}

impl Basis {
    /// Create a basis holding only the origin atom of the given element
    pub fn new(origin_element: &str) -> Self {
        Self {
            atoms: vec![BasisAtom::new(origin_element, [0.0, 0.0, 0.0])],
        }
    }

    /// All slots in order, the origin atom first
    pub fn atoms(&self) -> &[BasisAtom] {
        &self.atoms
    }

    /// Number of occupied slots (origin included)
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Always false: the origin atom cannot be removed
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The slot at `index`
    pub fn get(&self, slot: usize) -> Option<&BasisAtom> {
        self.atoms.get(slot)
    }

    /// Append an atom into the next free slot
    pub fn push(&mut self, atom: BasisAtom) -> Result<usize> {
        if self.atoms.len() >= MAX_BASIS_ATOMS {
            return Err(SimulationError::BasisFull {
                capacity: MAX_BASIS_ATOMS,
            });
        }
        self.atoms.push(atom);
        Ok(self.atoms.len() - 1)
    }

    /// Remove and return the highest-index atom; the origin atom stays
    pub fn pop(&mut self) -> Result<BasisAtom> {
        if self.atoms.len() == 1 {
            return Err(SimulationError::OriginImmutable);
        }
        self.atoms.pop().ok_or(SimulationError::OriginImmutable)
    }

    /// Change the element of a slot
    pub fn set_element(&mut self, slot: usize, element: &str) -> Result<()> {
        let atom = self
            .atoms
            .get_mut(slot)
            .ok_or(SimulationError::UnknownSlot(slot))?;
        atom.element = element.to_string();
        Ok(())
    }

    /// Move a non-origin slot to a new fractional position
    pub fn set_position(&mut self, slot: usize, position: [f64; 3]) -> Result<()> {
        if slot == 0 {
            return Err(SimulationError::OriginImmutable);
        }
        let atom = self
            .atoms
            .get_mut(slot)
            .ok_or(SimulationError::UnknownSlot(slot))?;
        atom.position = position;
        Ok(())
    }

    /// The slots as structure-factor sites
    pub fn sites(&self) -> Vec<AtomSite<'_>> {
        self.atoms
            .iter()
            .map(|atom| AtomSite {
                element: &atom.element,
                position: atom.position,
            })
            .collect()
    }
}
