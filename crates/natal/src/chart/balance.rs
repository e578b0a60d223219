//! Element and modality balance of a chart.

use crate::ephemeris::types::BodyPosition;
use crate::reference::{Element, Modality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBalance {
    /// Counts in fire, earth, air, water order
    pub elements: [u8; 4],
    /// Counts in cardinal, fixed, mutable order
    pub modalities: [u8; 3],
    pub dominant_element: Element,
    pub dominant_modality: Modality,
    pub lacking_element: Option<Element>,
    pub lacking_modality: Option<Modality>,
}

impl ChartBalance {
    pub fn element_count(&self, element: Element) -> u8 {
        self.elements[element.index()]
    }

    pub fn modality_count(&self, modality: Modality) -> u8 {
        self.modalities[modality.index()]
    }
}

/// Leader of a histogram. Only a strictly greater count replaces the
/// current leader, so ties go to the earliest bucket.
fn dominant<T: Copy>(buckets: &[T], counts: &[u8]) -> T {
    let mut leader = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[leader] {
            leader = i;
        }
    }
    buckets[leader]
}

fn lacking<T: Copy>(buckets: &[T], counts: &[u8]) -> Option<T> {
    counts.iter().position(|&c| c == 0).map(|i| buckets[i])
}

pub fn compute_balance(positions: &[BodyPosition]) -> ChartBalance {
    let mut elements = [0u8; 4];
    let mut modalities = [0u8; 3];
    for position in positions {
        elements[position.sign.element().index()] += 1;
        modalities[position.sign.modality().index()] += 1;
    }

    ChartBalance {
        elements,
        modalities,
        dominant_element: dominant(&Element::ALL, &elements),
        dominant_modality: dominant(&Modality::ALL, &modalities),
        lacking_element: lacking(&Element::ALL, &elements),
        lacking_modality: lacking(&Modality::ALL, &modalities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{CelestialBody, House, ZodiacSign};

    fn at(sign: ZodiacSign) -> BodyPosition {
        BodyPosition {
            body: CelestialBody::Sun,
            sign,
            degree: 0.0,
            minute: 0,
            house: House::new(1).unwrap(),
            retrograde: false,
        }
    }

    #[test]
    fn test_tie_goes_to_first_bucket() {
        // one earth, one water: earth comes first
        let balance = compute_balance(&[at(ZodiacSign::Cancer), at(ZodiacSign::Taurus)]);
        assert_eq!(balance.dominant_element, Element::Earth);
        assert_eq!(balance.lacking_element, Some(Element::Fire));
        // cardinal (cancer) and fixed (taurus) tie: cardinal wins
        assert_eq!(balance.dominant_modality, Modality::Cardinal);
        assert_eq!(balance.lacking_modality, Some(Modality::Mutable));
    }

    #[test]
    fn test_empty_positions() {
        let balance = compute_balance(&[]);
        assert_eq!(balance.dominant_element, Element::Fire);
        assert_eq!(balance.dominant_modality, Modality::Cardinal);
        assert_eq!(balance.lacking_element, Some(Element::Fire));
    }
}
