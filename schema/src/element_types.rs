use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The six elemental categories a creature may belong to.
///
/// Only fire, water, grass and electric take part in the effectiveness
/// relation. Dark and neutral are always neutral, both attacking and defending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementType {
    Fire,
    Water,
    Grass,
    Electric,
    Dark,
    Neutral,
}

/// Outcome of looking an attacking/defending element pair up in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    SuperEffective,
    Normal,
    NotVeryEffective,
}

impl Effectiveness {
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::SuperEffective => 1.5,
            Effectiveness::Normal => 1.0,
            Effectiveness::NotVeryEffective => 0.5,
        }
    }
}

impl ElementType {
    /// Look up the effectiveness of an attack from `attacking` onto `defending`.
    ///
    /// The relation is asymmetric and deliberately incomplete: electric has no
    /// weakness and nothing resists it, and grass is not weak to water.
    pub fn type_effectiveness(attacking: ElementType, defending: ElementType) -> Effectiveness {
        use ElementType::*;

        match (attacking, defending) {
            (Fire, Grass) | (Water, Fire) | (Grass, Water) | (Electric, Water) => {
                Effectiveness::SuperEffective
            }
            (Grass, Fire) | (Fire, Water) | (Water, Grass) => Effectiveness::NotVeryEffective,
            _ => Effectiveness::Normal,
        }
    }

    /// Same as [`ElementType::type_effectiveness`], treating a missing category
    /// on either side as neutral.
    pub fn effectiveness_between(
        attacking: Option<ElementType>,
        defending: Option<ElementType>,
    ) -> Effectiveness {
        match (attacking, defending) {
            (Some(a), Some(d)) => Self::type_effectiveness(a, d),
            _ => Effectiveness::Normal,
        }
    }
}
