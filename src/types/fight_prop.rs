//! Character combat properties.
//!
//! The service reports a character's computed stats as a map from numeric
//! fight prop ID to value (`fightPropMap`). Percent-like values arrive as
//! fractions (`0.745` for 74.5% crit rate).

use serde::Serialize;

/// Fight prop type, keyed by its numeric ID on the wire.
///
/// IDs this crate does not know are kept as [`FightPropType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FightPropType {
    BaseHp,
    Hp,
    HpPercent,
    BaseAttack,
    Attack,
    AttackPercent,
    BaseDefense,
    Defense,
    DefensePercent,
    BaseSpeed,
    SpeedPercent,
    CritRate,
    CritDamage,
    EnergyRecharge,
    HealingBonus,
    IncomingHealingBonus,
    ElementalMastery,
    PhysicalRes,
    PhysicalDmgBonus,
    PyroDmgBonus,
    ElectroDmgBonus,
    HydroDmgBonus,
    DendroDmgBonus,
    AnemoDmgBonus,
    GeoDmgBonus,
    CryoDmgBonus,
    PyroRes,
    ElectroRes,
    HydroRes,
    DendroRes,
    AnemoRes,
    GeoRes,
    CryoRes,
    PyroEnergyCost,
    ElectroEnergyCost,
    HydroEnergyCost,
    DendroEnergyCost,
    AnemoEnergyCost,
    CryoEnergyCost,
    GeoEnergyCost,
    CooldownReduction,
    ShieldStrength,
    CurrentPyroEnergy,
    CurrentElectroEnergy,
    CurrentHydroEnergy,
    CurrentDendroEnergy,
    CurrentAnemoEnergy,
    CurrentCryoEnergy,
    CurrentGeoEnergy,
    CurrentHp,
    MaxHp,
    CurrentAttack,
    CurrentDefense,
    CurrentSpeed,
    Other(u32),
}

/// `(type, wire ID, text-map key)` for every known fight prop.
const KNOWN: [(FightPropType, u32, &str); 54] = [
    (FightPropType::BaseHp, 1, "FIGHT_PROP_BASE_HP"),
    (FightPropType::Hp, 2, "FIGHT_PROP_HP"),
    (FightPropType::HpPercent, 3, "FIGHT_PROP_HP_PERCENT"),
    (FightPropType::BaseAttack, 4, "FIGHT_PROP_BASE_ATTACK"),
    (FightPropType::Attack, 5, "FIGHT_PROP_ATTACK"),
    (FightPropType::AttackPercent, 6, "FIGHT_PROP_ATTACK_PERCENT"),
    (FightPropType::BaseDefense, 7, "FIGHT_PROP_BASE_DEFENSE"),
    (FightPropType::Defense, 8, "FIGHT_PROP_DEFENSE"),
    (FightPropType::DefensePercent, 9, "FIGHT_PROP_DEFENSE_PERCENT"),
    (FightPropType::BaseSpeed, 10, "FIGHT_PROP_BASE_SPEED"),
    (FightPropType::SpeedPercent, 11, "FIGHT_PROP_SPEED_PERCENT"),
    (FightPropType::CritRate, 20, "FIGHT_PROP_CRITICAL"),
    (FightPropType::CritDamage, 22, "FIGHT_PROP_CRITICAL_HURT"),
    (FightPropType::EnergyRecharge, 23, "FIGHT_PROP_CHARGE_EFFICIENCY"),
    (FightPropType::HealingBonus, 26, "FIGHT_PROP_HEAL_ADD"),
    (FightPropType::IncomingHealingBonus, 27, "FIGHT_PROP_HEALED_ADD"),
    (FightPropType::ElementalMastery, 28, "FIGHT_PROP_ELEMENT_MASTERY"),
    (FightPropType::PhysicalRes, 29, "FIGHT_PROP_PHYSICAL_SUB_HURT"),
    (FightPropType::PhysicalDmgBonus, 30, "FIGHT_PROP_PHYSICAL_ADD_HURT"),
    (FightPropType::PyroDmgBonus, 40, "FIGHT_PROP_FIRE_ADD_HURT"),
    (FightPropType::ElectroDmgBonus, 41, "FIGHT_PROP_ELEC_ADD_HURT"),
    (FightPropType::HydroDmgBonus, 42, "FIGHT_PROP_WATER_ADD_HURT"),
    (FightPropType::DendroDmgBonus, 43, "FIGHT_PROP_GRASS_ADD_HURT"),
    (FightPropType::AnemoDmgBonus, 44, "FIGHT_PROP_WIND_ADD_HURT"),
    (FightPropType::GeoDmgBonus, 45, "FIGHT_PROP_ROCK_ADD_HURT"),
    (FightPropType::CryoDmgBonus, 46, "FIGHT_PROP_ICE_ADD_HURT"),
    (FightPropType::PyroRes, 50, "FIGHT_PROP_FIRE_SUB_HURT"),
    (FightPropType::ElectroRes, 51, "FIGHT_PROP_ELEC_SUB_HURT"),
    (FightPropType::HydroRes, 52, "FIGHT_PROP_WATER_SUB_HURT"),
    (FightPropType::DendroRes, 53, "FIGHT_PROP_GRASS_SUB_HURT"),
    (FightPropType::AnemoRes, 54, "FIGHT_PROP_WIND_SUB_HURT"),
    (FightPropType::GeoRes, 55, "FIGHT_PROP_ROCK_SUB_HURT"),
    (FightPropType::CryoRes, 56, "FIGHT_PROP_ICE_SUB_HURT"),
    (FightPropType::PyroEnergyCost, 70, "FIGHT_PROP_FIRE_ENERGY_COST"),
    (FightPropType::ElectroEnergyCost, 71, "FIGHT_PROP_ELEC_ENERGY_COST"),
    (FightPropType::HydroEnergyCost, 72, "FIGHT_PROP_WATER_ENERGY_COST"),
    (FightPropType::DendroEnergyCost, 73, "FIGHT_PROP_GRASS_ENERGY_COST"),
    (FightPropType::AnemoEnergyCost, 74, "FIGHT_PROP_WIND_ENERGY_COST"),
    (FightPropType::CryoEnergyCost, 75, "FIGHT_PROP_ICE_ENERGY_COST"),
    (FightPropType::GeoEnergyCost, 76, "FIGHT_PROP_ROCK_ENERGY_COST"),
    (FightPropType::CooldownReduction, 80, "FIGHT_PROP_SKILL_CD_MINUS_RATIO"),
    (FightPropType::ShieldStrength, 81, "FIGHT_PROP_SHIELD_COST_MINUS_RATIO"),
    (FightPropType::CurrentPyroEnergy, 1000, "FIGHT_PROP_CUR_FIRE_ENERGY"),
    (FightPropType::CurrentElectroEnergy, 1001, "FIGHT_PROP_CUR_ELEC_ENERGY"),
    (FightPropType::CurrentHydroEnergy, 1002, "FIGHT_PROP_CUR_WATER_ENERGY"),
    (FightPropType::CurrentDendroEnergy, 1003, "FIGHT_PROP_CUR_GRASS_ENERGY"),
    (FightPropType::CurrentAnemoEnergy, 1004, "FIGHT_PROP_CUR_WIND_ENERGY"),
    (FightPropType::CurrentCryoEnergy, 1005, "FIGHT_PROP_CUR_ICE_ENERGY"),
    (FightPropType::CurrentGeoEnergy, 1006, "FIGHT_PROP_CUR_ROCK_ENERGY"),
    (FightPropType::CurrentHp, 1010, "FIGHT_PROP_CUR_HP"),
    (FightPropType::MaxHp, 2000, "FIGHT_PROP_MAX_HP"),
    (FightPropType::CurrentAttack, 2001, "FIGHT_PROP_CUR_ATTACK"),
    (FightPropType::CurrentDefense, 2002, "FIGHT_PROP_CUR_DEFENSE"),
    (FightPropType::CurrentSpeed, 2003, "FIGHT_PROP_CUR_SPEED"),
];

impl FightPropType {
    pub fn from_id(id: u32) -> Self {
        KNOWN
            .iter()
            .find(|(_, known, _)| *known == id)
            .map_or(FightPropType::Other(id), |(prop, _, _)| *prop)
    }

    /// Numeric wire ID.
    pub fn id(&self) -> u32 {
        match self {
            FightPropType::Other(id) => *id,
            prop => KNOWN
                .iter()
                .find(|(known, _, _)| known == prop)
                .map_or(0, |(_, id, _)| *id),
        }
    }

    /// `FIGHT_PROP_*` name, also the text-map key of the display name.
    /// `None` for unknown IDs.
    pub fn key(&self) -> Option<&'static str> {
        KNOWN
            .iter()
            .find(|(known, _, _)| known == self)
            .map(|(_, _, key)| *key)
    }

    /// Whether values of this type are fractions shown as percentages.
    pub fn is_percentage(&self) -> bool {
        use FightPropType::*;
        matches!(
            self,
            HpPercent
                | AttackPercent
                | DefensePercent
                | SpeedPercent
                | CritRate
                | CritDamage
                | EnergyRecharge
                | HealingBonus
                | IncomingHealingBonus
                | PhysicalRes
                | PyroRes
                | ElectroRes
                | HydroRes
                | DendroRes
                | AnemoRes
                | GeoRes
                | CryoRes
                | CooldownReduction
                | ShieldStrength
        ) || self.is_dmg_bonus()
    }

    /// Physical or elemental damage bonus.
    pub fn is_dmg_bonus(&self) -> bool {
        use FightPropType::*;
        matches!(
            self,
            PhysicalDmgBonus
                | PyroDmgBonus
                | ElectroDmgBonus
                | HydroDmgBonus
                | DendroDmgBonus
                | AnemoDmgBonus
                | GeoDmgBonus
                | CryoDmgBonus
        )
    }
}

/// One combat property of a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FightProp {
    pub prop_type: FightPropType,
    pub value: f64,
    /// Localized name, set by enrichment when the text map has one.
    pub name: Option<String>,
}

impl FightProp {
    pub fn new(prop_type: FightPropType, value: f64) -> Self {
        Self {
            prop_type,
            value,
            name: None,
        }
    }

    /// Value as shown in game: `74.5%` for percentages, `36,000` otherwise.
    pub fn formatted_value(&self) -> String {
        if self.prop_type.is_percentage() {
            format!("{:.1}%", self.value * 100.0)
        } else {
            group_thousands(self.value.round() as i64)
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
