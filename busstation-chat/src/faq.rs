use busstation_shared::Language;

/// One question/answer pair shown on the help page and fed to the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQ_FR: &[FaqEntry] = &[
    FaqEntry {
        question: "Comment réserver un billet ?",
        answer: "Recherchez votre trajet, ouvrez le voyage, choisissez vos places sur le plan du bus puis cliquez sur « Réserver ». Renseignez ensuite le nom, le numéro de pièce d'identité et l'âge de chaque passager.",
    },
    FaqEntry {
        question: "Comment payer ma réservation ?",
        answer: "Après la réservation, saisissez votre numéro Mobile Money et le nom du titulaire du compte. Une fois le paiement confirmé, vos billets apparaissent dans « Mes billets ».",
    },
    FaqEntry {
        question: "Puis-je choisir ma place ?",
        answer: "Oui. Les places grises sont déjà réservées ; cliquez sur une place libre pour la sélectionner et cliquez à nouveau pour la libérer.",
    },
    FaqEntry {
        question: "Comment annuler une réservation ?",
        answer: "Depuis « Mes billets », ouvrez la réservation et choisissez « Annuler ». Le taux de remboursement dépend de la politique de l'agence et du délai avant le départ.",
    },
    FaqEntry {
        question: "Combien de bagages puis-je emporter ?",
        answer: "Le nombre de bagages se déclare pour chaque passager lors de la réservation. Les limites et suppléments sont fixés par l'agence de voyage.",
    },
    FaqEntry {
        question: "Je n'arrive pas à me connecter.",
        answer: "Vérifiez votre adresse e-mail et votre mot de passe. Si le problème persiste, contactez le support BusStation.",
    },
    FaqEntry {
        question: "Comment inscrire mon agence ?",
        answer: "Créez un compte organisation, puis ajoutez vos agences depuis le tableau de bord. Chaque agence est validée par le Bureau de Suivi Municipal de sa ville avant de publier des voyages.",
    },
];

const FAQ_EN: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I book a ticket?",
        answer: "Search for your route, open the trip, pick your seats on the bus map and click \"Book\". Then enter the name, identity document number and age of every passenger.",
    },
    FaqEntry {
        question: "How do I pay for my reservation?",
        answer: "After booking, enter your Mobile Money number and the account holder's name. Once the payment is confirmed your tickets appear under \"My tickets\".",
    },
    FaqEntry {
        question: "Can I choose my seat?",
        answer: "Yes. Grey seats are already taken; click a free seat to select it and click it again to release it.",
    },
    FaqEntry {
        question: "How do I cancel a reservation?",
        answer: "Open the reservation from \"My tickets\" and choose \"Cancel\". The refund rate depends on the agency's policy and how close the departure is.",
    },
    FaqEntry {
        question: "How much luggage can I bring?",
        answer: "The number of bags is declared per passenger when booking. Limits and extra fees are set by the travel agency.",
    },
    FaqEntry {
        question: "I cannot log in.",
        answer: "Check your email address and password. If the problem persists, contact BusStation support.",
    },
    FaqEntry {
        question: "How do I register my agency?",
        answer: "Create an organisation account, then add your agencies from the dashboard. Each agency is validated by its city's monitoring bureau before it can publish trips.",
    },
];

pub fn entries(language: Language) -> &'static [FaqEntry] {
    match language {
        Language::Fr => FAQ_FR,
        Language::En => FAQ_EN,
    }
}

/// Every question/answer pair of `language`, as one context block for the model.
pub fn context_block(language: Language) -> String {
    let (q, a) = match language {
        Language::Fr => ("Q", "R"),
        Language::En => ("Q", "A"),
    };

    entries(language)
        .iter()
        .map(|entry| format!("{}: {}\n{}: {}", q, entry.question, a, entry.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_cover_the_same_topics() {
        assert_eq!(entries(Language::Fr).len(), entries(Language::En).len());
    }

    #[test]
    fn test_context_block_contains_every_pair() {
        let block = context_block(Language::En);
        for entry in entries(Language::En) {
            assert!(block.contains(entry.question));
            assert!(block.contains(entry.answer));
        }
        assert!(context_block(Language::Fr).starts_with("Q: Comment réserver"));
    }
}
