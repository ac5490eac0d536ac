use education_planner::workflows::discovery::domain::{
    BUDGET_STEP, LOCATION_OPTIONS, MAX_BUDGET, PRIORITY_VOCABULARY,
};
use education_planner::workflows::discovery::{
    filter_eligible, Catalog, FamilyProfile, LocationPreference, Selection, MAX_SELECTION,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::sync::OnceLock;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::builtin().expect("bundled catalog loads"))
}

fn ids(profile: &FamilyProfile) -> Vec<String> {
    filter_eligible(catalog().schools(), profile)
        .into_iter()
        .map(|school| school.id.clone())
        .collect()
}

fn profile_strategy() -> impl Strategy<Value = FamilyProfile> {
    (
        0_u8..=25,
        prop::sample::select(LOCATION_OPTIONS.to_vec()),
        (0_u32..=MAX_BUDGET / BUDGET_STEP).prop_map(|steps| steps * BUDGET_STEP),
        prop::sample::subsequence(PRIORITY_VOCABULARY.to_vec(), 0..=3),
    )
        .prop_map(|(age, location, budget, priorities)| {
            FamilyProfile::new(age)
                .with_location(LocationPreference::parse(location))
                .with_budget(budget)
                .with_priorities(priorities)
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn screening_is_deterministic(profile in profile_strategy()) {
        prop_assert_eq!(ids(&profile), ids(&profile));
    }

    #[test]
    fn raising_the_budget_never_removes_schools(
        profile in profile_strategy(),
        raise in 0_u32..=MAX_BUDGET,
    ) {
        let narrower = ids(&profile);
        let wider_budget = profile.budget.amount().saturating_add(raise);
        let wider = ids(&profile.clone().with_budget(wider_budget));
        prop_assert!(narrower.iter().all(|id| wider.contains(id)));
    }

    #[test]
    fn adding_a_priority_only_widens_a_non_empty_set(
        profile in profile_strategy(),
        extra in prop::sample::select(PRIORITY_VOCABULARY.to_vec()),
    ) {
        prop_assume!(!profile.priorities.is_empty());
        let before = ids(&profile);
        let after = ids(&profile.clone().with_priority(extra));
        prop_assert!(before.iter().all(|id| after.contains(id)));
    }

    #[test]
    fn eligible_schools_keep_catalog_order(profile in profile_strategy()) {
        let positions: Vec<usize> = ids(&profile)
            .iter()
            .map(|id| {
                catalog()
                    .schools()
                    .iter()
                    .position(|school| &school.id == id)
                    .expect("eligible school comes from catalog")
            })
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn selection_stays_bounded_and_distinct(
        picks in prop::collection::vec(0_usize..12, 0..40),
    ) {
        let selection = picks.iter().fold(Selection::new(), |selection, pick| {
            selection.toggle(&format!("school-{pick}"))
        });
        prop_assert!(selection.len() <= MAX_SELECTION);

        let mut distinct = selection.ids().to_vec();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), selection.len());
    }

    #[test]
    fn toggling_twice_restores_a_selection_with_room(
        picks in prop::collection::vec(0_usize..12, 0..4),
        id in 0_usize..12,
    ) {
        let selection = picks.iter().fold(Selection::new(), |selection, pick| {
            selection.toggle(&format!("school-{pick}"))
        });
        let id = format!("school-{id}");
        prop_assume!(!selection.contains(&id));
        prop_assert_eq!(selection.toggle(&id).toggle(&id), selection);
    }

    #[test]
    fn toggling_a_picked_school_twice_keeps_the_same_schools(
        picks in prop::collection::hash_set(0_usize..12, 1..=MAX_SELECTION),
        which in any::<prop::sample::Index>(),
    ) {
        let selection = picks.iter().fold(Selection::new(), |selection, pick| {
            selection.toggle(&format!("school-{pick}"))
        });
        let id = selection.ids()[which.index(selection.len())].clone();

        let restored = selection.toggle(&id).toggle(&id);
        prop_assert_eq!(restored.len(), selection.len());
        prop_assert_eq!(restored.ids().last(), Some(&id));

        let mut before = selection.ids().to_vec();
        let mut after = restored.ids().to_vec();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
