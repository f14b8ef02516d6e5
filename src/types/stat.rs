//! Equipment stats.

use serde::{Deserialize, Serialize};

/// Stat type as it appears on the wire (`FIGHT_PROP_*`).
///
/// The wire string doubles as the text-map key for the stat's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    #[serde(rename = "FIGHT_PROP_BASE_ATTACK")]
    BaseAttack,
    #[serde(rename = "FIGHT_PROP_HP")]
    Hp,
    #[serde(rename = "FIGHT_PROP_ATTACK")]
    Attack,
    #[serde(rename = "FIGHT_PROP_DEFENSE")]
    Defense,
    #[serde(rename = "FIGHT_PROP_HP_PERCENT")]
    HpPercent,
    #[serde(rename = "FIGHT_PROP_ATTACK_PERCENT")]
    AttackPercent,
    #[serde(rename = "FIGHT_PROP_DEFENSE_PERCENT")]
    DefensePercent,
    #[serde(rename = "FIGHT_PROP_CRITICAL")]
    CritRate,
    #[serde(rename = "FIGHT_PROP_CRITICAL_HURT")]
    CritDamage,
    #[serde(rename = "FIGHT_PROP_CHARGE_EFFICIENCY")]
    EnergyRecharge,
    #[serde(rename = "FIGHT_PROP_HEAL_ADD")]
    HealingBonus,
    #[serde(rename = "FIGHT_PROP_ELEMENT_MASTERY")]
    ElementalMastery,
    #[serde(rename = "FIGHT_PROP_PHYSICAL_ADD_HURT")]
    PhysicalDmgBonus,
    #[serde(rename = "FIGHT_PROP_FIRE_ADD_HURT")]
    PyroDmgBonus,
    #[serde(rename = "FIGHT_PROP_ELEC_ADD_HURT")]
    ElectroDmgBonus,
    #[serde(rename = "FIGHT_PROP_WATER_ADD_HURT")]
    HydroDmgBonus,
    #[serde(rename = "FIGHT_PROP_WIND_ADD_HURT")]
    AnemoDmgBonus,
    #[serde(rename = "FIGHT_PROP_ICE_ADD_HURT")]
    CryoDmgBonus,
    #[serde(rename = "FIGHT_PROP_ROCK_ADD_HURT")]
    GeoDmgBonus,
    #[serde(rename = "FIGHT_PROP_GRASS_ADD_HURT")]
    DendroDmgBonus,
}

impl StatType {
    /// Wire name, also the text-map key of the stat's display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatType::BaseAttack => "FIGHT_PROP_BASE_ATTACK",
            StatType::Hp => "FIGHT_PROP_HP",
            StatType::Attack => "FIGHT_PROP_ATTACK",
            StatType::Defense => "FIGHT_PROP_DEFENSE",
            StatType::HpPercent => "FIGHT_PROP_HP_PERCENT",
            StatType::AttackPercent => "FIGHT_PROP_ATTACK_PERCENT",
            StatType::DefensePercent => "FIGHT_PROP_DEFENSE_PERCENT",
            StatType::CritRate => "FIGHT_PROP_CRITICAL",
            StatType::CritDamage => "FIGHT_PROP_CRITICAL_HURT",
            StatType::EnergyRecharge => "FIGHT_PROP_CHARGE_EFFICIENCY",
            StatType::HealingBonus => "FIGHT_PROP_HEAL_ADD",
            StatType::ElementalMastery => "FIGHT_PROP_ELEMENT_MASTERY",
            StatType::PhysicalDmgBonus => "FIGHT_PROP_PHYSICAL_ADD_HURT",
            StatType::PyroDmgBonus => "FIGHT_PROP_FIRE_ADD_HURT",
            StatType::ElectroDmgBonus => "FIGHT_PROP_ELEC_ADD_HURT",
            StatType::HydroDmgBonus => "FIGHT_PROP_WATER_ADD_HURT",
            StatType::AnemoDmgBonus => "FIGHT_PROP_WIND_ADD_HURT",
            StatType::CryoDmgBonus => "FIGHT_PROP_ICE_ADD_HURT",
            StatType::GeoDmgBonus => "FIGHT_PROP_ROCK_ADD_HURT",
            StatType::DendroDmgBonus => "FIGHT_PROP_GRASS_ADD_HURT",
        }
    }

    /// Whether values of this type are percentages.
    pub fn is_percentage(&self) -> bool {
        !matches!(
            self,
            StatType::BaseAttack
                | StatType::Hp
                | StatType::Attack
                | StatType::Defense
                | StatType::ElementalMastery
        )
    }
}

/// A weapon or artifact stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub stat_type: StatType,
    pub value: f64,
    /// Localized name, set by enrichment.
    pub name: Option<String>,
}

impl Stat {
    pub fn new(stat_type: StatType, value: f64) -> Self {
        Self {
            stat_type,
            value,
            name: None,
        }
    }

    /// Value as shown in game: `46.6%` for percentages, `311` otherwise.
    pub fn formatted_value(&self) -> String {
        if self.stat_type.is_percentage() {
            format!("{:.1}%", self.value)
        } else {
            format!("{}", self.value.round() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_name() {
        let json = serde_json::to_string(&StatType::CritDamage).unwrap();
        assert_eq!(json, format!("\"{}\"", StatType::CritDamage.as_str()));

        let parsed: StatType = serde_json::from_str("\"FIGHT_PROP_GRASS_ADD_HURT\"").unwrap();
        assert_eq!(parsed, StatType::DendroDmgBonus);
    }

    #[test]
    fn formatted_values() {
        assert_eq!(Stat::new(StatType::CritRate, 46.6).formatted_value(), "46.6%");
        assert_eq!(Stat::new(StatType::Hp, 4780.4).formatted_value(), "4780");
        assert_eq!(Stat::new(StatType::ElementalMastery, 187.0).formatted_value(), "187");
    }

    #[test]
    fn unknown_stat_type_is_rejected() {
        assert!(serde_json::from_str::<StatType>("\"FIGHT_PROP_NOPE\"").is_err());
    }
}
