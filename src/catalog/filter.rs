use super::{AccessLevel, FilterDimension, ResourceCard, ResourceType};
use icu_collator::{Collator, CollatorOptions};
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// Ordering applied to the visible cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep page order
    #[default]
    Relevance,
    Latest,
    Oldest,
    TitleAsc,
    TitleDesc,
    SizeAsc,
    SizeDesc,
}

impl SortKey {
    /// Map a sort dropdown value to a key. Unknown values mean relevance.
    pub fn parse(value: &str) -> SortKey {
        match value.trim() {
            "latest" => SortKey::Latest,
            "oldest" => SortKey::Oldest,
            "title_asc" => SortKey::TitleAsc,
            "title_desc" => SortKey::TitleDesc,
            "size_asc" => SortKey::SizeAsc,
            "size_desc" => SortKey::SizeDesc,
            _ => SortKey::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Latest => "latest",
            SortKey::Oldest => "oldest",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
            SortKey::SizeAsc => "size_asc",
            SortKey::SizeDesc => "size_desc",
        }
    }

    fn compare(&self, a: &ResourceCard, b: &ResourceCard, titles: &TitleOrder) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::Latest => b.published().cmp(&a.published()),
            SortKey::Oldest => a.published().cmp(&b.published()),
            SortKey::TitleAsc => titles.compare(&a.title, &b.title),
            SortKey::TitleDesc => titles.compare(&b.title, &a.title),
            SortKey::SizeAsc => a.size_kb().total_cmp(&b.size_kb()),
            SortKey::SizeDesc => b.size_kb().total_cmp(&a.size_kb()),
        }
    }
}

/// Case-insensitive title order under the root collation, so accented
/// letters sort with their base letter. The collator is built on first use.
#[derive(Default)]
struct TitleOrder {
    collator: OnceCell<Option<Collator>>,
}

impl TitleOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let (a, b) = (a.to_lowercase(), b.to_lowercase());
        let collator = self.collator.get_or_init(|| {
            match Collator::try_new(&Default::default(), CollatorOptions::new()) {
                Ok(collator) => Some(collator),
                Err(e) => {
                    warn!("Title collation unavailable, using code point order: {}", e);
                    None
                }
            }
        });

        match collator {
            Some(collator) => collator.compare(&a, &b),
            None => a.cmp(&b),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted values per filter dimension, plus the sort key and search term.
///
/// An empty set accepts every value of its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub resource_types: BTreeSet<ResourceType>,
    pub access: BTreeSet<AccessLevel>,
    pub sort: SortKey,
    pub search_term: String,
}

impl FilterState {
    /// Rebuild both accepted sets from the currently checked boxes.
    ///
    /// Each item is `(id, data-filter attribute, value)`. Boxes that classify
    /// into no dimension, or whose value is outside the dimension's fixed set,
    /// are skipped.
    pub fn set_checked<'a, I>(&mut self, checked: I)
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>, &'a str)>,
    {
        self.resource_types.clear();
        self.access.clear();

        for (id, explicit, value) in checked {
            match FilterDimension::classify(id, explicit) {
                Some(FilterDimension::ResourceType) => match value.parse() {
                    Ok(kind) => {
                        self.resource_types.insert(kind);
                    }
                    Err(e) => debug!("Checkbox '{}' ignored: {}", id, e),
                },
                Some(FilterDimension::Access) => match value.parse() {
                    Ok(level) => {
                        self.access.insert(level);
                    }
                    Err(e) => debug!("Checkbox '{}' ignored: {}", id, e),
                },
                None => debug!("Checkbox '{}' matches no filter dimension", id),
            }
        }
    }

    /// The conjunctive visibility predicate.
    pub fn accepts(&self, card: &ResourceCard) -> bool {
        let type_ok = self.resource_types.is_empty()
            || card
                .kind
                .is_some_and(|kind| self.resource_types.contains(&kind));
        let access_ok = self.access.is_empty()
            || card
                .access
                .is_some_and(|level| self.access.contains(&level));

        let term = self.search_term.trim();
        let search_ok = term.is_empty() || card.matches_lowercase(&term.to_lowercase());

        type_ok && access_ok && search_ok
    }
}

/// Result of a filter/sort pass, as indices into the evaluated cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Visible cards in display order
    pub visible: Vec<usize>,

    /// Hidden cards in their original relative order
    pub hidden: Vec<usize>,
}

/// Filter the cards and sort the survivors.
///
/// Hidden cards never take part in the sort. The sort is stable, so
/// `SortKey::Relevance` and ties keep page order.
pub fn evaluate<C: AsRef<ResourceCard>>(cards: &[C], state: &FilterState) -> Listing {
    let (mut visible, hidden): (Vec<usize>, Vec<usize>) =
        (0..cards.len()).partition(|&i| state.accepts(cards[i].as_ref()));

    let titles = TitleOrder::default();
    visible.sort_by(|&a, &b| {
        state
            .sort
            .compare(cards[a].as_ref(), cards[b].as_ref(), &titles)
    });

    Listing { visible, hidden }
}

impl AsRef<ResourceCard> for ResourceCard {
    fn as_ref(&self) -> &ResourceCard {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card(
        kind: ResourceType,
        access: AccessLevel,
        title: &str,
        published: &str,
        size: &str,
    ) -> ResourceCard {
        ResourceCard {
            kind: Some(kind),
            access: Some(access),
            title: title.to_string(),
            description: format!("{} description", title),
            published_text: format!("發布日期: {}", published),
            size_text: format!("大小: {}", size),
            link: None,
        }
    }

    fn sample_cards() -> Vec<ResourceCard> {
        vec![
            card(
                ResourceType::Database,
                AccessLevel::Open,
                "Taiwan Dementia Clinical Database",
                "2025-08-28",
                "2.5 MB",
            ),
            card(
                ResourceType::Software,
                AccessLevel::Restricted,
                "Neuroimaging Analysis Toolkit",
                "2024-03-01",
                "10 GB",
            ),
            card(
                ResourceType::Database,
                AccessLevel::Open,
                "brain Consciousness Database",
                "2023-11-15",
                "500 KB",
            ),
        ]
    }

    // ==================== SortKey Tests ====================

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("latest"), SortKey::Latest);
        assert_eq!(SortKey::parse("oldest"), SortKey::Oldest);
        assert_eq!(SortKey::parse("title_asc"), SortKey::TitleAsc);
        assert_eq!(SortKey::parse("title_desc"), SortKey::TitleDesc);
        assert_eq!(SortKey::parse("size_asc"), SortKey::SizeAsc);
        assert_eq!(SortKey::parse("size_desc"), SortKey::SizeDesc);
        assert_eq!(SortKey::parse("relevance"), SortKey::Relevance);
        assert_eq!(SortKey::parse("popularity"), SortKey::Relevance);
    }

    #[test]
    fn test_sort_key_round_trips_through_as_str() {
        for key in [
            SortKey::Relevance,
            SortKey::Latest,
            SortKey::Oldest,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
            SortKey::SizeAsc,
            SortKey::SizeDesc,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_empty_state_shows_everything_in_page_order() {
        let listing = evaluate(&sample_cards(), &FilterState::default());
        assert_eq!(listing.visible, vec![0, 1, 2]);
        assert!(listing.hidden.is_empty());
    }

    #[test]
    fn test_type_and_access_conjunction() {
        let mut state = FilterState::default();
        state.set_checked([
            ("databaseCheck", None, "database"),
            ("openCheck", None, "open"),
        ]);

        let listing = evaluate(&sample_cards(), &state);
        assert_eq!(listing.visible, vec![0, 2]);
        assert_eq!(listing.hidden, vec![1]);
    }

    #[test]
    fn test_filter_then_title_sort() {
        let mut state = FilterState::default();
        state.set_checked([
            ("databaseCheck", None, "database"),
            ("openCheck", None, "open"),
        ]);
        state.sort = SortKey::TitleAsc;

        let listing = evaluate(&sample_cards(), &state);
        // "brain ..." sorts before "Taiwan ..." once case is ignored
        assert_eq!(listing.visible, vec![2, 0]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let mut state = FilterState {
            search_term: "TOOLKIT".to_string(),
            ..Default::default()
        };
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![1]);

        state.search_term = "consciousness database description".to_string();
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![2]);
    }

    #[test]
    fn test_whitespace_search_imposes_no_restriction() {
        let state = FilterState {
            search_term: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_card_type_only_passes_empty_dimension() {
        let mut cards = sample_cards();
        cards[1].kind = None;

        let mut state = FilterState::default();
        assert_eq!(evaluate(&cards, &state).visible, vec![0, 1, 2]);

        state.set_checked([("softwareCheck", None, "software")]);
        assert!(evaluate(&cards, &state).visible.is_empty());
    }

    #[test]
    fn test_unclassified_checkbox_is_ignored() {
        let mut state = FilterState::default();
        state.set_checked([("newsletterCheck", None, "database")]);
        assert!(state.resource_types.is_empty());
        assert!(state.access.is_empty());
    }

    #[test]
    fn test_explicit_dimension_attribute() {
        let mut state = FilterState::default();
        state.set_checked([("freeCheck", Some("access"), "open")]);
        assert!(state.access.contains(&AccessLevel::Open));
        assert!(state.resource_types.is_empty());
    }

    #[test]
    fn test_set_checked_replaces_previous_selection() {
        let mut state = FilterState::default();
        state.set_checked([("databaseCheck", None, "database")]);
        state.set_checked([("softwareCheck", None, "software")]);
        assert_eq!(
            state.resource_types.iter().copied().collect::<Vec<_>>(),
            vec![ResourceType::Software]
        );
    }

    // ==================== Sort Tests ====================

    #[test]
    fn test_sort_by_date() {
        let mut state = FilterState {
            sort: SortKey::Latest,
            ..Default::default()
        };
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![0, 1, 2]);

        state.sort = SortKey::Oldest;
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![2, 1, 0]);
    }

    #[test]
    fn test_sort_by_size() {
        let mut state = FilterState {
            sort: SortKey::SizeAsc,
            ..Default::default()
        };
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![2, 0, 1]);

        state.sort = SortKey::SizeDesc;
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![1, 0, 2]);
    }

    #[test]
    fn test_sort_by_title_desc() {
        let state = FilterState {
            sort: SortKey::TitleDesc,
            ..Default::default()
        };
        assert_eq!(evaluate(&sample_cards(), &state).visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_title_sort_places_accented_letters_with_base_letter() {
        let mut cards = sample_cards();
        cards[0].title = "Zeta Sleep Study".to_string();
        cards[1].title = "Émile Cohort".to_string();
        cards[2].title = "eeg Archive".to_string();

        let mut state = FilterState {
            sort: SortKey::TitleAsc,
            ..Default::default()
        };
        // code point order would put "É" after "Z"
        assert_eq!(evaluate(&cards, &state).visible, vec![2, 1, 0]);

        state.sort = SortKey::TitleDesc;
        assert_eq!(evaluate(&cards, &state).visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_unparseable_date_sorts_as_earliest() {
        let mut cards = sample_cards();
        cards[0].published_text = "發布日期: 即將開放".to_string();

        let state = FilterState {
            sort: SortKey::Oldest,
            ..Default::default()
        };
        assert_eq!(evaluate(&cards, &state).visible, vec![0, 2, 1]);
    }

    #[test]
    fn test_hidden_cards_are_not_sorted() {
        let mut state = FilterState::default();
        state.set_checked([("softwareCheck", None, "software")]);
        state.sort = SortKey::SizeAsc;

        let listing = evaluate(&sample_cards(), &state);
        assert_eq!(listing.visible, vec![1]);
        assert_eq!(listing.hidden, vec![0, 2]);
    }

    // ==================== Property Tests ====================

    fn arb_card() -> impl Strategy<Value = ResourceCard> {
        (
            prop::sample::select(ResourceType::ALL.to_vec()),
            prop::sample::select(AccessLevel::ALL.to_vec()),
            "[a-zA-Z ]{0,12}",
        )
            .prop_map(|(kind, access, title)| ResourceCard {
                kind: Some(kind),
                access: Some(access),
                title,
                description: String::new(),
                published_text: String::new(),
                size_text: String::new(),
                link: None,
            })
    }

    proptest! {
        #[test]
        fn prop_visible_iff_predicate(
            cards in prop::collection::vec(arb_card(), 0..12),
            types in prop::collection::btree_set(prop::sample::select(ResourceType::ALL.to_vec()), 0..4),
            access in prop::collection::btree_set(prop::sample::select(AccessLevel::ALL.to_vec()), 0..2),
        ) {
            let state = FilterState { resource_types: types.clone(), access: access.clone(), ..Default::default() };
            let listing = evaluate(&cards, &state);

            prop_assert_eq!(listing.visible.len() + listing.hidden.len(), cards.len());
            for &i in &listing.visible {
                let card = &cards[i];
                prop_assert!(types.is_empty() || types.contains(&card.kind.unwrap()));
                prop_assert!(access.is_empty() || access.contains(&card.access.unwrap()));
            }
            for &i in &listing.hidden {
                let card = &cards[i];
                prop_assert!(
                    (!types.is_empty() && !types.contains(&card.kind.unwrap()))
                        || (!access.is_empty() && !access.contains(&card.access.unwrap()))
                );
            }
        }

        #[test]
        fn prop_empty_dimension_equals_all_values(cards in prop::collection::vec(arb_card(), 0..12)) {
            let empty = FilterState::default();
            let full = FilterState {
                resource_types: ResourceType::ALL.into_iter().collect(),
                access: AccessLevel::ALL.into_iter().collect(),
                ..Default::default()
            };
            prop_assert_eq!(evaluate(&cards, &empty), evaluate(&cards, &full));
        }
    }
}
