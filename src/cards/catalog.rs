//! The fixed 30-card deck.
//!
//! Client and server validate moves against the same card identities, so
//! the contents and order of this table are part of the wire contract:
//! 12 assets, 12 actions and 6 capital cards with ids 1 through 30.

use crate::effects::ActionEffect;

use super::definition::{AssetCategory, CardDefinition, CardId, CardType};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 30;

use AssetCategory::{Environment as E, Governance as G, Social as S, Wild};

static CATALOG: [CardDefinition; DECK_SIZE] = [
    // Assets
    CardDefinition::asset(1, "Solar Array", E, 2, "RenewableEnergy", "Renewable energy reduces Scope 2 emissions"),
    CardDefinition::asset(2, "Waste Recovery Unit", E, 2, "CircularEconomy", "Circular economy principles reduce waste"),
    CardDefinition::asset(3, "Reforestation Project", E, 1, "NatureBased", "Nature-based solutions for carbon capture"),
    CardDefinition::asset(4, "Diversity Board", S, 3, "InclusiveLeadership", "Diverse leadership improves decision-making"),
    CardDefinition::asset(5, "Fair Wage Factory", S, 3, "EthicalLabor", "Ethical labor practices reduce turnover and risk"),
    CardDefinition::asset(6, "Community Health Clinic", S, 1, "CSR", "Corporate Social Responsibility builds trust"),
    CardDefinition::asset(7, "Whistleblower Policy", G, 4, "Transparency", "Transparency mechanisms prevent corruption"),
    CardDefinition::asset(8, "Data Privacy Vault", G, 4, "DataGovernance", "Protecting stakeholder data is a governance duty"),
    CardDefinition::asset(9, "Anti-Bribery Protocol", G, 2, "Compliance", "Zero-tolerance for corruption ensures compliance"),
    CardDefinition::asset(10, "Greenwashing Asset", Wild, 0, "ANY", "Faking compliance works until you get caught"),
    CardDefinition::asset(11, "Greenwashing Asset", Wild, 0, "ANY", "Faking compliance works until you get caught"),
    CardDefinition::asset(12, "Impact Unicorn", Wild, 5, "ANY", "A truly perfect sustainable asset (very rare)"),
    // Actions
    CardDefinition::action(13, "Regulatory Fine", ActionEffect::ImposeFine { amount: 5 }, "Non-compliance is expensive"),
    CardDefinition::action(14, "Hostile Takeover", ActionEffect::StealCompleteSet, "Weak governance makes you vulnerable to acquisition"),
    CardDefinition::action(15, "External Audit", ActionEffect::DestroyTaggedAssets, "Transparency exposes false claims"),
    CardDefinition::action(16, "Sustainability Report", ActionEffect::CollectFromAll { amount: 2 }, "Publishing good reports attracts investment"),
    CardDefinition::action(17, "Stakeholder Revolt", ActionEffect::SwapAsset, "Ignoring stakeholders leads to loss of control"),
    CardDefinition::action(18, "Compliance Check", ActionEffect::BlockAny, "Strong internal controls prevent external damage"),
    CardDefinition::action(19, "Carbon Credit", ActionEffect::BlockEnvironment, "Offsets can mitigate environmental risks"),
    CardDefinition::action(20, "Supply Chain Disrupt", ActionEffect::DiscardOpponentAsset, "Unstable supply chains lead to operational failure"),
    CardDefinition::action(21, "Regulatory Fine", ActionEffect::ImposeFine { amount: 5 }, "Non-compliance is expensive"),
    CardDefinition::action(22, "Policy Change", ActionEffect::PassHandsLeft, "Regulations change quickly; you must adapt"),
    CardDefinition::action(23, "Grant Funding", ActionEffect::DrawExtra { count: 2 }, "Sustainable projects attract unique funding sources"),
    CardDefinition::action(24, "Policy Change", ActionEffect::PassHandsLeft, "Regulations change quickly; you must adapt"),
    // Capital
    CardDefinition::capital(25, "Green Bond", 10),
    CardDefinition::capital(26, "Impact Investment", 5),
    CardDefinition::capital(27, "Impact Investment", 5),
    CardDefinition::capital(28, "Government Subsidy", 3),
    CardDefinition::capital(29, "Government Subsidy", 3),
    CardDefinition::capital(30, "Micro-Loan", 1),
];

/// Look up a card definition by id.
#[must_use]
pub fn get(id: CardId) -> Option<&'static CardDefinition> {
    let index = (id.raw() as usize).checked_sub(1)?;
    CATALOG.get(index).filter(|card| card.id == id)
}

/// All definitions in catalog order.
#[must_use]
pub fn all() -> &'static [CardDefinition] {
    &CATALOG
}

/// Card ids in catalog order, the unshuffled deck.
pub fn ids() -> impl Iterator<Item = CardId> {
    CATALOG.iter().map(|card| card.id)
}

/// Find cards by type.
pub fn find_by_type(card_type: CardType) -> impl Iterator<Item = &'static CardDefinition> {
    CATALOG.iter().filter(move |card| card.card_type() == card_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_catalog_composition() {
        assert_eq!(all().len(), DECK_SIZE);
        assert_eq!(find_by_type(CardType::Asset).count(), 12);
        assert_eq!(find_by_type(CardType::Action).count(), 12);
        assert_eq!(find_by_type(CardType::Capital).count(), 6);
    }

    #[test]
    fn test_ids_are_sequential() {
        for (i, id) in ids().enumerate() {
            assert_eq!(id, CardId::new(i as u32 + 1));
            assert_eq!(get(id).map(|c| c.id), Some(id));
        }
    }

    #[test]
    fn test_get_out_of_range() {
        assert!(get(CardId::new(0)).is_none());
        assert!(get(CardId::new(31)).is_none());
    }

    #[test]
    fn test_capital_total() {
        let total: u32 = find_by_type(CardType::Capital)
            .filter_map(|c| c.capital_value())
            .sum();
        assert_eq!(total, 27);
    }

    #[test]
    fn test_greenwashing_cards() {
        let tagged: Vec<_> = all().iter().filter(|c| c.is_greenwashing()).map(|c| c.id.raw()).collect();
        assert_eq!(tagged, vec![10, 11]);
    }

    #[test]
    fn test_action_parameters() {
        assert_eq!(
            get(CardId::new(13)).and_then(|c| c.effect()),
            Some(ActionEffect::ImposeFine { amount: 5 })
        );
        assert_eq!(
            get(CardId::new(16)).and_then(|c| c.effect()),
            Some(ActionEffect::CollectFromAll { amount: 2 })
        );
        assert_eq!(
            get(CardId::new(23)).and_then(|c| c.effect()),
            Some(ActionEffect::DrawExtra { count: 2 })
        );
        let unicorn = get(CardId::new(12)).unwrap();
        assert!(matches!(
            unicorn.kind,
            CardKind::Asset { category: AssetCategory::Wild, value: 5, .. }
        ));
    }
}
