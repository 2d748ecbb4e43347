/// 物品表中常见的属性 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ItemBonusType {
    Strength = 1,
    Dexterity = 2,
    Vitality = 3,
    Intelligence = 4,
    Mind = 5,
    Piety = 6,
    Gp = 10,
    Cp = 11,
    PhysicalDamage = 12,
    MagicDamage = 13,
    BlockStrength = 17,
    BlockRate = 18,
    Tenacity = 19,
    Defense = 21,
    DirectHitRate = 22,
    MagicDefense = 24,
    CriticalHit = 27,
    Determination = 44,
    SkillSpeed = 45,
    SpellSpeed = 46,
    Craftsmanship = 70,
    Control = 71,
    Gathering = 72,
    Perception = 73,
}

impl ItemBonusType {
    const ALL: [ItemBonusType; 24] = [
        ItemBonusType::Strength,
        ItemBonusType::Dexterity,
        ItemBonusType::Vitality,
        ItemBonusType::Intelligence,
        ItemBonusType::Mind,
        ItemBonusType::Piety,
        ItemBonusType::Gp,
        ItemBonusType::Cp,
        ItemBonusType::PhysicalDamage,
        ItemBonusType::MagicDamage,
        ItemBonusType::BlockStrength,
        ItemBonusType::BlockRate,
        ItemBonusType::Tenacity,
        ItemBonusType::Defense,
        ItemBonusType::DirectHitRate,
        ItemBonusType::MagicDefense,
        ItemBonusType::CriticalHit,
        ItemBonusType::Determination,
        ItemBonusType::SkillSpeed,
        ItemBonusType::SpellSpeed,
        ItemBonusType::Craftsmanship,
        ItemBonusType::Control,
        ItemBonusType::Gathering,
        ItemBonusType::Perception,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemBonusType::Strength => "Strength",
            ItemBonusType::Dexterity => "Dexterity",
            ItemBonusType::Vitality => "Vitality",
            ItemBonusType::Intelligence => "Intelligence",
            ItemBonusType::Mind => "Mind",
            ItemBonusType::Piety => "Piety",
            ItemBonusType::Gp => "GP",
            ItemBonusType::Cp => "CP",
            ItemBonusType::PhysicalDamage => "Physical Damage",
            ItemBonusType::MagicDamage => "Magic Damage",
            ItemBonusType::BlockStrength => "Block Strength",
            ItemBonusType::BlockRate => "Block Rate",
            ItemBonusType::Tenacity => "Tenacity",
            ItemBonusType::Defense => "Defense",
            ItemBonusType::DirectHitRate => "Direct Hit Rate",
            ItemBonusType::MagicDefense => "Magic Defense",
            ItemBonusType::CriticalHit => "Critical Hit",
            ItemBonusType::Determination => "Determination",
            ItemBonusType::SkillSpeed => "Skill Speed",
            ItemBonusType::SpellSpeed => "Spell Speed",
            ItemBonusType::Craftsmanship => "Craftsmanship",
            ItemBonusType::Control => "Control",
            ItemBonusType::Gathering => "Gathering",
            ItemBonusType::Perception => "Perception",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for t in ItemBonusType::ALL {
            assert_eq!(ItemBonusType::from_id(t.id()), Some(t));
        }
        assert_eq!(ItemBonusType::from_id(0), None);
        assert_eq!(ItemBonusType::from_id(20), None);
    }

    #[test]
    fn pseudo_stats_use_catalog_ids() {
        assert_eq!(ItemBonusType::Defense.id(), 21);
        assert_eq!(ItemBonusType::MagicDefense.id(), 24);
        assert_eq!(ItemBonusType::PhysicalDamage.id(), 12);
        assert_eq!(ItemBonusType::MagicDamage.id(), 13);
        assert_eq!(ItemBonusType::BlockStrength.id(), 17);
        assert_eq!(ItemBonusType::BlockRate.id(), 18);
    }
}
