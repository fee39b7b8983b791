//! Identifier form conversion tests

use doi_registry_sdk::models::{Identifier, Shoulder, from_resolver_url, to_resolver_url};

mod conversion_tests {
    use super::*;

    #[test]
    fn test_registry_and_resolver_forms_are_inverse() {
        let samples = [
            "doi:10.5072/FK2/OCEAN-RELEASE-2025",
            "doi:10.5072/FK2/OCEAN-RELEASE-2025-P1",
            "doi:10.1234/abc.def",
        ];
        for sample in samples {
            let url = to_resolver_url(sample);
            assert!(url.starts_with("https://doi.org/"));
            assert_eq!(from_resolver_url(&url), sample);
            assert_eq!(to_resolver_url(&from_resolver_url(&url)), url);
        }
    }

    #[test]
    fn test_parse_accepts_every_form() {
        let expected = Identifier::new("doi:10.5072/FK2/X");
        for input in [
            "doi:10.5072/FK2/X",
            "10.5072/FK2/X",
            "https://doi.org/10.5072/FK2/X",
            "  doi:10.5072/FK2/X\n",
        ] {
            assert_eq!(Identifier::parse(input).unwrap(), expected);
        }
    }

    #[test]
    fn test_parse_rejects_missing_suffix() {
        assert!(Identifier::parse("").is_err());
        assert!(Identifier::parse("doi:10.5072").is_err());
        assert!(Identifier::parse("doi:10.5072/").is_err());
    }
}

mod shoulder_tests {
    use super::*;

    #[test]
    fn test_mint_under_normalized_shoulder() {
        let shoulder = Shoulder::new("https://doi.org/10.5072/FK2/");
        let id = shoulder.mint("REL-2025");
        assert_eq!(id.as_str(), "doi:10.5072/FK2/REL-2025");
        assert_eq!(id.bare(), "10.5072/FK2/REL-2025");
        assert_eq!(id.resolver_url(), "https://doi.org/10.5072/FK2/REL-2025");
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn registry_identifier() -> impl Strategy<Value = String> {
        "10\\.[0-9]{4,5}/[A-Za-z0-9._-]{1,20}(/[A-Za-z0-9._-]{1,20})?"
            .prop_map(|bare| format!("doi:{}", bare))
    }

    proptest! {
        #[test]
        fn test_resolver_conversion_is_bijective(identifier in registry_identifier()) {
            let url = to_resolver_url(&identifier);
            prop_assert_eq!(from_resolver_url(&url), identifier.clone());
            prop_assert_eq!(to_resolver_url(&from_resolver_url(&url)), url);
        }

        #[test]
        fn test_parse_agrees_across_forms(identifier in registry_identifier()) {
            let parsed = Identifier::parse(&identifier).unwrap();
            prop_assert_eq!(parsed.as_str(), identifier.as_str());
            let from_url = Identifier::parse(&to_resolver_url(&identifier)).unwrap();
            prop_assert_eq!(from_url, parsed.clone());
            prop_assert_eq!(Identifier::parse(parsed.bare()).unwrap(), parsed);
        }
    }
}
