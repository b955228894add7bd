use proptest::prelude::*;
use stations_validate::slug::normalize;

fn is_slug(text: &str) -> bool {
    !text.starts_with('-')
        && !text.ends_with('-')
        && !text.contains("--")
        && text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[test]
fn published_names() {
    let cases = [
        ("Paris Gare de Lyon", "paris-gare-de-lyon"),
        ("St-Étienne Châteaucreux", "st-etienne-chateaucreux"),
        ("Aix-en-Provence TGV", "aix-en-provence-tgv"),
        ("Frankfurt (Main) Hbf", "frankfurt-main-hbf"),
        ("Roma Termini", "roma-termini"),
        ("  ", ""),
    ];
    for (name, slug) in cases {
        assert_eq!(normalize(name), slug, "slug of {name:?}");
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn normalize_yields_a_slug(text in "\\PC{0,40}") {
        let slug = normalize(&text);
        prop_assert!(is_slug(&slug), "not a slug: {:?}", slug);
    }
}
