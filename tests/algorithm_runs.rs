//! Integration tests for the sorting and search helpers driven through timing.

#[cfg(test)]
mod tests {
    use keyed_buckets::algorithms::{
        linear_search, random_list, search_scenarios, SortAlgorithm, SCENARIO_TARGET,
    };
    use keyed_buckets::timing::time_call;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_algorithms_agree_on_random_input() {
        let mut rng = StdRng::seed_from_u64(99);
        let data = random_list(400, 1, 10_000, &mut rng).unwrap();
        let mut expected = data.clone();
        expected.sort();

        for algorithm in SortAlgorithm::ALL {
            let mut sorted = data.clone();
            algorithm.sort(&mut sorted);
            assert_eq!(sorted, expected, "{} disagrees with std sort", algorithm);
        }
    }

    #[test]
    fn test_timed_runs_do_not_mutate_shared_input() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = random_list(200, -100, 100, &mut rng).unwrap();
        let snapshot = data.clone();

        for algorithm in SortAlgorithm::ALL {
            time_call(|values: &mut [i64]| algorithm.sort(values), &data);
        }

        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_search_scenarios_outcomes() {
        let found: Vec<bool> = search_scenarios()
            .iter()
            .map(|scenario| linear_search(&scenario.values, &SCENARIO_TARGET).is_some())
            .collect();

        assert_eq!(found, vec![true, true, false, true]);
    }
}
