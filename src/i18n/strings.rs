/// All localized strings used by the contact emails and the JSON response
///
/// Some strings deliberately contain `<br>` markup and are inserted into the
/// HTML templates as-is. They are authored here, never taken from user input.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Subjects ====================
    /// Subject of the notification sent to the site owner
    pub subject: &'static str,

    /// Subject of the confirmation sent to the submitter
    pub confirmation_subject: &'static str,

    // ==================== Confirmation Email ====================
    /// Heading of the confirmation email (rendered with a trailing "!")
    pub thank_you: &'static str,

    /// Returned as `message` in the success response
    pub received: &'static str,

    /// Salutation, followed by the submitter's name
    pub greeting: &'static str,

    pub intro: &'static str,

    pub received_text: &'static str,

    /// Heading above the echoed submission fields
    pub details: &'static str,

    pub name_label: &'static str,

    pub message_label: &'static str,

    /// Sign-off block (contains `<br>`)
    pub footer: &'static str,

    /// Contact hint block (contains `<br>`)
    pub contact: &'static str,
}

// ==================== German Strings ====================

/// German strings (default)
pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    subject: "Neue Anfrage: Atlas Copco QES80 KD Notstromaggregat",
    confirmation_subject: "Ihre Anfrage wurde erhalten - Baltic iHub",
    thank_you: "Vielen Dank",
    received: "Ihre Anfrage wurde erfolgreich übermittelt.",
    greeting: "Hallo",
    intro: "vielen Dank für Ihre Anfrage zum Atlas Copco QES80 KD Notstromaggregat.",
    received_text:
        "Wir haben Ihre Nachricht erhalten und werden uns schnellstmöglich bei Ihnen melden.",
    details: "Ihre Anfrage-Details:",
    name_label: "Name",
    message_label: "Ihre Nachricht",
    footer: "Mit freundlichen Grüßen,<br>Das Team der Baltic iHub GmbH",
    contact: "Bei Fragen erreichen Sie uns unter:<br>notstromaggregat@baltic-ihub.com",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    subject: "New Inquiry: Atlas Copco QES80 KD Backup Generator",
    confirmation_subject: "Your inquiry has been received - Baltic iHub",
    thank_you: "Thank You",
    received: "Your inquiry has been successfully submitted.",
    greeting: "Hello",
    intro: "thank you for your inquiry about the Atlas Copco QES80 KD Backup Generator.",
    received_text:
        "We have received your message and will get back to you as soon as possible.",
    details: "Your inquiry details:",
    name_label: "Name",
    message_label: "Your message",
    footer: "Best regards,<br>The Baltic iHub GmbH Team",
    contact: "If you have any questions, please contact us at:<br>notstromaggregat@baltic-ihub.com",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    subject: "Nouvelle demande: Groupe Électrogène Atlas Copco QES80 KD",
    confirmation_subject: "Votre demande a été reçue - Baltic iHub",
    thank_you: "Merci",
    received: "Votre demande a été envoyée avec succès.",
    greeting: "Bonjour",
    intro: "merci pour votre demande concernant le Groupe Électrogène Atlas Copco QES80 KD.",
    received_text:
        "Nous avons bien reçu votre message et vous répondrons dans les plus brefs délais.",
    details: "Détails de votre demande:",
    name_label: "Nom",
    message_label: "Votre message",
    footer: "Cordialement,<br>L'équipe de Baltic iHub GmbH",
    contact: "Pour toute question, contactez-nous à:<br>notstromaggregat@baltic-ihub.com",
};

// ==================== Dutch Strings ====================

pub const DUTCH_STRINGS: LanguageStrings = LanguageStrings {
    subject: "Nieuwe aanvraag: Atlas Copco QES80 KD Noodaggregaat",
    confirmation_subject: "Uw aanvraag is ontvangen - Baltic iHub",
    thank_you: "Bedankt",
    received: "Uw aanvraag is succesvol verzonden.",
    greeting: "Hallo",
    intro: "bedankt voor uw aanvraag over het Atlas Copco QES80 KD Noodaggregaat.",
    received_text:
        "We hebben uw bericht ontvangen en zullen zo spoedig mogelijk contact met u opnemen.",
    details: "Uw aanvraagdetails:",
    name_label: "Naam",
    message_label: "Uw bericht",
    footer: "Met vriendelijke groet,<br>Het Baltic iHub GmbH Team",
    contact: "Voor vragen kunt u ons bereiken op:<br>notstromaggregat@baltic-ihub.com",
};

// ==================== Polish Strings ====================

pub const POLISH_STRINGS: LanguageStrings = LanguageStrings {
    subject: "Nowe zapytanie: Agregat Prądotwórczy Atlas Copco QES80 KD",
    confirmation_subject: "Twoje zapytanie zostało otrzymane - Baltic iHub",
    thank_you: "Dziękujemy",
    received: "Twoje zapytanie zostało pomyślnie wysłane.",
    greeting: "Witam",
    intro: "dziękujemy za zapytanie dotyczące Agregatu Prądotwórczego Atlas Copco QES80 KD.",
    received_text: "Otrzymaliśmy Państwa wiadomość i skontaktujemy się z Państwem tak szybko, jak to możliwe.",
    details: "Szczegóły Państwa zapytania:",
    name_label: "Imię i nazwisko",
    message_label: "Państwa wiadomość",
    footer: "Z poważaniem,<br>Zespół Baltic iHub GmbH",
    contact: "W przypadku pytań prosimy o kontakt:<br>notstromaggregat@baltic-ihub.com",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&LanguageStrings; 5] = [
        &GERMAN_STRINGS,
        &ENGLISH_STRINGS,
        &FRENCH_STRINGS,
        &DUTCH_STRINGS,
        &POLISH_STRINGS,
    ];

    // ==================== Completeness Tests ====================

    #[test]
    fn test_no_string_is_empty() {
        for strings in ALL {
            let fields = [
                strings.subject,
                strings.confirmation_subject,
                strings.thank_you,
                strings.received,
                strings.greeting,
                strings.intro,
                strings.received_text,
                strings.details,
                strings.name_label,
                strings.message_label,
                strings.footer,
                strings.contact,
            ];
            assert!(fields.iter().all(|f| !f.is_empty()), "{:?}", strings);
        }
    }

    #[test]
    fn test_subjects_are_distinct_per_language() {
        for (i, a) in ALL.iter().enumerate() {
            for b in ALL.iter().skip(i + 1) {
                assert_ne!(a.subject, b.subject);
            }
        }
    }

    // ==================== Markup Tests ====================

    #[test]
    fn test_footer_and_contact_use_line_breaks() {
        for strings in ALL {
            assert!(strings.footer.contains("<br>"));
            assert!(strings.contact.contains("<br>"));
            assert!(strings.contact.contains("notstromaggregat@baltic-ihub.com"));
        }
    }

    #[test]
    fn test_german_default_strings() {
        assert_eq!(GERMAN_STRINGS.received, "Ihre Anfrage wurde erfolgreich übermittelt.");
        assert_eq!(GERMAN_STRINGS.thank_you, "Vielen Dank");
    }
}
