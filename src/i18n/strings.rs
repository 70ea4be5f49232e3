use crate::i18n::Locale;

/// All localized user-facing strings for a locale.
///
/// Strings are stored raw; callers escape them for HTML. Templates use
/// `{{var}}` placeholders filled by [`interpolate`].
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Home Page ====================
    /// Banner shown above the dinosaur list
    pub banner: &'static str,

    // ==================== Dinosaur Card ====================
    /// Placeholders: {{name}}
    pub card_name: &'static str,

    /// Placeholders: {{diet}}
    pub card_diet: &'static str,

    // ==================== Dinosaur Page ====================
    /// Placeholders: {{dinosaur}}
    pub my_name_is: &'static str,

    /// Label for the diet row (no placeholder)
    pub diet: &'static str,

    pub length: &'static str,

    pub weight: &'static str,

    // ==================== Common ====================
    /// Text of the home link in the header
    pub home: &'static str,

    /// Label of the language picker
    pub language: &'static str,

    /// Submit button of the language picker
    pub change: &'static str,

    // ==================== Errors ====================
    pub not_found: &'static str,

    pub internal_error: &'static str,
}

impl LocaleStrings {
    /// Strings for a locale.
    pub fn for_locale(locale: Locale) -> &'static LocaleStrings {
        match locale.code() {
            "de" => &GERMAN_STRINGS,
            "fr" => &FRENCH_STRINGS,
            "it" => &ITALIAN_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Look up a string by its namespaced key (e.g. `dinosaur:myNameIs`).
    ///
    /// Unknown keys are returned unchanged so a missing translation shows up
    /// on the page instead of failing the request.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match key {
            "homePage:banner" => self.banner,
            "dinosaurCard:name" => self.card_name,
            "dinosaurCard:diet" => self.card_diet,
            "dinosaur:myNameIs" => self.my_name_is,
            "dinosaur:diet" => self.diet,
            "dinosaur:length" => self.length,
            "dinosaur:weight" => self.weight,
            "common:home" => self.home,
            "common:language" => self.language,
            "common:change" => self.change,
            "error:notFound" => self.not_found,
            "error:internal" => self.internal_error,
            _ => key,
        }
    }
}

/// Replace `{{var}}` placeholders in a template.
///
/// Placeholders without a binding are left in place.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    banner: "Learn About Dinosaurs",
    card_name: "Name: {{name}}",
    card_diet: "Diet: {{diet}}",
    my_name_is: "My name is {{dinosaur}}",
    diet: "Diet",
    length: "Length",
    weight: "Weight",
    home: "Home",
    language: "Language",
    change: "Change",
    not_found: "This page could not be found.",
    internal_error: "An unexpected error has occurred.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LocaleStrings = LocaleStrings {
    banner: "Lerne Dinosaurier kennen",
    card_name: "Name: {{name}}",
    card_diet: "Ernährung: {{diet}}",
    my_name_is: "Mein Name ist {{dinosaur}}",
    diet: "Ernährung",
    length: "Länge",
    weight: "Gewicht",
    home: "Startseite",
    language: "Sprache",
    change: "Wechseln",
    not_found: "Diese Seite konnte nicht gefunden werden.",
    internal_error: "Ein unerwarteter Fehler ist aufgetreten.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LocaleStrings = LocaleStrings {
    banner: "Découvrez les dinosaures",
    card_name: "Nom : {{name}}",
    card_diet: "Régime : {{diet}}",
    my_name_is: "Je m'appelle {{dinosaur}}",
    diet: "Régime",
    length: "Longueur",
    weight: "Poids",
    home: "Accueil",
    language: "Langue",
    change: "Changer",
    not_found: "Cette page est introuvable.",
    internal_error: "Une erreur inattendue s'est produite.",
};

// ==================== Italian Strings ====================

pub const ITALIAN_STRINGS: LocaleStrings = LocaleStrings {
    banner: "Scopri i dinosauri",
    card_name: "Nome: {{name}}",
    card_diet: "Dieta: {{diet}}",
    my_name_is: "Mi chiamo {{dinosaur}}",
    diet: "Dieta",
    length: "Lunghezza",
    weight: "Peso",
    home: "Home",
    language: "Lingua",
    change: "Cambia",
    not_found: "Impossibile trovare questa pagina.",
    internal_error: "Si è verificato un errore imprevisto.",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&LocaleStrings; 4] = [
        &ENGLISH_STRINGS,
        &GERMAN_STRINGS,
        &FRENCH_STRINGS,
        &ITALIAN_STRINGS,
    ];

    // ==================== Lookup Tests ====================

    #[test]
    fn test_for_locale_selects_table() {
        assert_eq!(LocaleStrings::for_locale(Locale::GERMAN).banner, GERMAN_STRINGS.banner);
        assert_eq!(LocaleStrings::for_locale(Locale::ITALIAN).weight, "Peso");
        assert_eq!(LocaleStrings::for_locale(Locale::ENGLISH).home, "Home");
    }

    #[test]
    fn test_t_known_key() {
        assert_eq!(FRENCH_STRINGS.t("dinosaur:myNameIs"), "Je m'appelle {{dinosaur}}");
        assert_eq!(ENGLISH_STRINGS.t("homePage:banner"), "Learn About Dinosaurs");
    }

    #[test]
    fn test_t_unknown_key_returns_key() {
        assert_eq!(GERMAN_STRINGS.t("dinosaur:teeth"), "dinosaur:teeth");
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_templates_have_placeholders() {
        for strings in ALL {
            assert!(strings.card_name.contains("{{name}}"));
            assert!(strings.card_diet.contains("{{diet}}"));
            assert!(strings.my_name_is.contains("{{dinosaur}}"));
        }
    }

    #[test]
    fn test_no_string_is_empty() {
        for strings in ALL {
            assert!(!strings.banner.is_empty());
            assert!(!strings.not_found.is_empty());
            assert!(!strings.internal_error.is_empty());
            assert!(!strings.change.is_empty());
        }
    }

    // ==================== interpolate Tests ====================

    #[test]
    fn test_interpolate_replaces_binding() {
        let out = interpolate(GERMAN_STRINGS.my_name_is, &[("dinosaur", "Brachiosaurus")]);
        assert_eq!(out, "Mein Name ist Brachiosaurus");
    }

    #[test]
    fn test_interpolate_leaves_unbound_placeholder() {
        assert_eq!(interpolate("{{a}} and {{b}}", &[("a", "x")]), "x and {{b}}");
    }

    #[test]
    fn test_interpolate_repeated_placeholder() {
        assert_eq!(interpolate("{{a}}{{a}}", &[("a", "z")]), "zz");
    }
}
