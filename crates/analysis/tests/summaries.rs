//! Summaries computed over real projections.

use agepop_analysis::{extinction_probability, growth_rates, summarize, total_trajectory};
use agepop_sim::simulation::SimulationBuilder;

#[test]
fn test_doomed_population_summary() {
    let mut sim = SimulationBuilder::new()
        .initial_population(vec![40, 0])
        .survival(&[0.0, 1.0], &[0.0, 0.0])
        .litter_size(&[0.0, 0.0], &[0.0, 0.0])
        .years(5)
        .runs(8)
        .seed(3)
        .build()
        .unwrap();
    let stats = sim.run();

    let extinction = extinction_probability(stats).unwrap();
    assert_eq!(extinction[0], 0.0);
    assert!(extinction[1..].iter().all(|&p| p == 1.0));

    let growth = growth_rates(stats).unwrap();
    assert_eq!(growth[0], Some(0.0));
    assert!(growth[1..].iter().all(Option::is_none));
}

#[test]
fn test_trajectory_bounds_hold() {
    let mut sim = SimulationBuilder::new()
        .initial_population(vec![50, 25, 10])
        .survival(&[0.5, 0.8, 0.7], &[0.1, 0.05, 0.1])
        .litter_size(&[0.0, 1.2, 1.6], &[0.0, 0.3, 0.4])
        .years(20)
        .runs(40)
        .seed(99)
        .build()
        .unwrap();
    let stats = sim.run();

    for year in total_trajectory(stats).unwrap() {
        assert!(year.min <= year.q025);
        assert!(year.q025 <= year.median);
        assert!(year.median <= year.q975);
        assert!(year.q975 <= year.max);
        assert!(year.mean >= year.min && year.mean <= year.max);
    }

    let summary = summarize(stats, Some(10.0)).unwrap();
    let quasi = summary.quasi_extinction.unwrap().probability;
    assert!(quasi.windows(2).all(|w| w[0] <= w[1]));
    for (q, e) in quasi.iter().zip(&summary.extinction) {
        assert!(q >= e);
    }
}
