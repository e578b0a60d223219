//! Element and modality compatibility matrices.
//!
//! Both matrices are symmetric; rows and columns follow the canonical
//! enumeration order of [`Element`] and [`Modality`].

use crate::reference::signs::{Element, Modality};

/// fire, earth, air, water
const ELEMENT_MATRIX: [[u8; 4]; 4] = [
    [85, 50, 90, 40],
    [50, 80, 45, 90],
    [90, 45, 80, 50],
    [40, 90, 50, 85],
];

/// cardinal, fixed, mutable
const MODALITY_MATRIX: [[u8; 3]; 3] = [
    [60, 75, 80],
    [75, 65, 70],
    [80, 70, 85],
];

pub fn element_compatibility(a: Element, b: Element) -> u8 {
    ELEMENT_MATRIX[a.index()][b.index()]
}

pub fn modality_compatibility(a: Modality, b: Modality) -> u8 {
    MODALITY_MATRIX[a.index()][b.index()]
}

/// How two elements relate for narrative purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    Same,
    /// fire/air, earth/water
    Complementary,
    /// fire/water, earth/air
    Clashing,
    /// fire/earth, air/water
    Neutral,
}

pub fn element_relation(a: Element, b: Element) -> ElementRelation {
    use Element::*;
    match (a, b) {
        _ if a == b => ElementRelation::Same,
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => ElementRelation::Complementary,
        (Fire, Water) | (Water, Fire) | (Earth, Air) | (Air, Earth) => ElementRelation::Clashing,
        _ => ElementRelation::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_symmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert_eq!(element_compatibility(a, b), element_compatibility(b, a));
            }
        }
        for a in Modality::ALL {
            for b in Modality::ALL {
                assert_eq!(modality_compatibility(a, b), modality_compatibility(b, a));
            }
        }
    }

    #[test]
    fn test_matrix_ranges() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert!((40..=90).contains(&element_compatibility(a, b)));
            }
        }
        for a in Modality::ALL {
            for b in Modality::ALL {
                assert!((60..=85).contains(&modality_compatibility(a, b)));
            }
        }
    }

    #[test]
    fn test_element_relation() {
        assert_eq!(element_relation(Element::Water, Element::Earth), ElementRelation::Complementary);
        assert_eq!(element_relation(Element::Fire, Element::Water), ElementRelation::Clashing);
        assert_eq!(element_relation(Element::Air, Element::Water), ElementRelation::Neutral);
        assert_eq!(element_relation(Element::Air, Element::Air), ElementRelation::Same);
    }
}
