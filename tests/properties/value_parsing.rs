//! Case-insensitive parsing of the provider and application choices.

use clap::ValueEnum;
use proptest::prelude::*;

use pygrid_cli::{AppName, Provider, StatusApp};

/// `word` with each ASCII letter's case picked by `mask`
fn recase(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn provider_parses_in_any_case(
        index in 0usize..3,
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let provider = Provider::ALL[index];
        let typed = recase(provider.as_str(), &mask);

        prop_assert_eq!(typed.parse::<Provider>().unwrap(), provider);
        prop_assert_eq!(<Provider as ValueEnum>::from_str(&typed, true).unwrap(), provider);
    }

    #[test]
    fn app_parses_in_any_case(
        index in 0usize..3,
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let app = AppName::ALL[index];
        let typed = recase(app.as_str(), &mask);

        prop_assert_eq!(typed.parse::<AppName>().unwrap(), app);
        prop_assert_eq!(<AppName as ValueEnum>::from_str(&typed, true).unwrap(), app);
    }

    #[test]
    fn status_app_parses_in_any_case(
        index in 0usize..2,
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let app = StatusApp::ALL[index];
        let typed = recase(app.as_str(), &mask);

        prop_assert_eq!(<StatusApp as ValueEnum>::from_str(&typed, true).unwrap(), app);
    }

    #[test]
    fn unknown_provider_names_are_rejected(name in "[a-z]{1,12}") {
        prop_assume!(!["aws", "gcp", "azure"].contains(&name.as_str()));
        prop_assert!(name.parse::<Provider>().is_err());
    }

    #[test]
    fn stored_form_is_lowercase(index in 0usize..3) {
        let json = serde_json::to_string(&Provider::ALL[index]).unwrap();
        prop_assert_eq!(json.clone(), json.to_lowercase());
    }
}
