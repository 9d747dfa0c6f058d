#[cfg(test)]
mod tests {
    use commission_engine::sampler::InputGenerator;
    use commission_engine::simulation::trial_rng;
    use commission_engine::*;

    fn standard_targets() -> (Vec<f64>, Vec<f64>) {
        (
            vec![75_000.0, 100_000.0, 200_000.0, 300_000.0, 400_000.0, 500_000.0],
            vec![0.3, 0.3, 0.2, 0.1, 0.05, 0.05],
        )
    }

    // ========== Output Shape ==========

    #[test]
    fn test_output_has_one_row_per_trial() {
        for trials in [1, 7, 250] {
            let config = SimulationConfig { unit_count: 20, trial_count: trials, ..Default::default() };
            let sim = CommissionSimulation::new(config).unwrap();
            assert_eq!(sim.run_seeded(0).len(), trials);
        }
    }

    #[test]
    fn test_totals_non_negative_for_non_negative_inputs() {
        // mean 1.0 / sd 0.1 makes a negative ratio a >10-sigma event
        let config = SimulationConfig { unit_count: 100, trial_count: 200, ..Default::default() };
        let sim = CommissionSimulation::new(config).unwrap();
        for t in sim.run_seeded(4).trials {
            assert!(t.total_realized_amount >= 0.0);
            assert!(t.total_payout_amount >= 0.0);
            assert!(t.total_assigned_target >= 0.0);
        }
    }

    // ========== Determinism ==========

    #[test]
    fn test_same_seed_bit_identical() {
        let sim = CommissionSimulation::new(SimulationConfig {
            trial_count: 100,
            ..Default::default()
        }).unwrap();
        let a = sim.run_seeded(2024);
        let b = sim.run_seeded(2024);
        for (x, y) in a.trials.iter().zip(&b.trials) {
            assert_eq!(x.total_payout_amount.to_bits(), y.total_payout_amount.to_bits());
            assert_eq!(x.total_realized_amount.to_bits(), y.total_realized_amount.to_bits());
            assert_eq!(x.total_assigned_target.to_bits(), y.total_assigned_target.to_bits());
        }
    }

    #[test]
    fn test_rebuilt_simulation_reproduces_run() {
        let config = SimulationConfig { trial_count: 50, ..Default::default() };
        let a = CommissionSimulation::new(config.clone()).unwrap().run_seeded(77);
        let b = CommissionSimulation::new(config).unwrap().run_seeded(77);
        assert_eq!(a, b);
    }

    // ========== Scaling Sanity ==========

    #[test]
    fn test_no_variance_single_target_on_plan() {
        let config = SimulationConfig {
            performance_mean: 1.0,
            performance_stddev: 0.0,
            unit_count: 500,
            trial_count: 25,
            target_values: vec![100_000.0],
            target_probabilities: vec![1.0],
        };
        let results = CommissionSimulation::new(config).unwrap().run_seeded(1);

        for t in &results.trials {
            assert_eq!(t.total_realized_amount, 50_000_000.0);
            assert_eq!(t.total_assigned_target, 50_000_000.0);
            // 1.00 is in the 4% tier
            assert_eq!(t.total_payout_amount, 2_000_000.0);
        }
        assert_eq!(results.summary().payout_amount.std_dev, 0.0);
    }

    #[test]
    fn test_no_variance_mean_is_rounded_before_tier_lookup() {
        // 0.904 rounds to 0.90, which is still the 2% tier
        let config = SimulationConfig {
            performance_mean: 0.904,
            performance_stddev: 0.0,
            unit_count: 10,
            trial_count: 3,
            target_values: vec![50_000.0],
            target_probabilities: vec![1.0],
        };
        let results = CommissionSimulation::new(config).unwrap().run_seeded(9);
        for t in &results.trials {
            assert_eq!(t.total_realized_amount, 450_000.0);
            assert_eq!(t.total_payout_amount, 9_000.0);
        }
    }

    #[test]
    fn test_no_variance_partial_tier() {
        let config = SimulationConfig {
            performance_mean: 0.95,
            performance_stddev: 0.0,
            unit_count: 200,
            trial_count: 5,
            target_values: vec![200_000.0],
            target_probabilities: vec![1.0],
        };
        let results = CommissionSimulation::new(config).unwrap().run_seeded(3);
        let first = results.trials[0];
        assert!(results.trials.iter().all(|t| *t == first));
        assert_eq!(first.total_realized_amount, 38_000_000.0);
        assert_eq!(first.total_payout_amount, 1_140_000.0);
    }

    // ========== Weighted Sampling ==========

    #[test]
    fn test_target_frequencies_converge() {
        let (values, probs) = standard_targets();
        let config = SimulationConfig { unit_count: 500, trial_count: 1000, ..Default::default() };
        let generator = InputGenerator::new(&config).unwrap();

        let mut counts = vec![0usize; values.len()];
        let mut total = 0usize;
        for i in 0..config.trial_count {
            for draw in generator.draw_trial(&mut trial_rng(123, i)) {
                let idx = values.iter().position(|v| *v == draw.assigned_target).unwrap();
                counts[idx] += 1;
                total += 1;
            }
        }

        assert_eq!(total, 500_000);
        for (i, &c) in counts.iter().enumerate() {
            let freq = c as f64 / total as f64;
            assert!(
                (freq - probs[i]).abs() < 0.01,
                "target {}: frequency {:.4} expected {:.2}", values[i], freq, probs[i]
            );
        }
    }

    // ========== End-to-End Scenario ==========

    #[test]
    fn test_reference_scenario_distribution() {
        let sim = CommissionSimulation::new(SimulationConfig::default()).unwrap();
        let results = sim.run_seeded(42);
        let summary = results.summary();
        let payout = &summary.payout_amount;

        assert_eq!(payout.n, 1000);
        assert!(payout.mean > 1.0e6 && payout.mean < 1.0e7, "mean payout {}", payout.mean);
        assert!(payout.std_dev > 0.0);
        assert!(payout.std_dev < payout.mean / 10.0, "std {} vs mean {}", payout.std_dev, payout.mean);
        assert!(payout.min <= payout.p25 && payout.p25 <= payout.p50);
        assert!(payout.p50 <= payout.p75 && payout.p75 <= payout.max);

        // Expected target per rep is 167,500, so 500 reps ~ 83.75M
        let target = &summary.assigned_target;
        assert!((target.mean - 83_750_000.0).abs() < 1_000_000.0, "target mean {}", target.mean);

        // Realized sales track targets at ~100% of plan
        let ratio = summary.realized_amount.mean / target.mean;
        assert!((ratio - 1.0).abs() < 0.01, "sales/target {}", ratio);
    }

    #[test]
    fn test_reference_scenario_seed_42_pinned() {
        let sim = CommissionSimulation::new(SimulationConfig::default()).unwrap();
        let results = sim.run_seeded(42);
        let summary = results.summary();

        assert_eq!(summary.payout_amount.mean, 2_853_902.688);
        assert_eq!(summary.payout_amount.std_dev, 99_720.50023535706);
        assert_eq!(summary.assigned_target.mean, 83_634_125.0);

        // Every row replays exactly from its own trial stream
        for i in [0, 499, 999] {
            assert_eq!(results.trials[i], sim.run_trial(&mut trial_rng(42, i)));
        }
    }

    // ========== Configuration Errors ==========

    #[test]
    fn test_invalid_configs_rejected_before_sampling() {
        let err = |config: SimulationConfig| CommissionSimulation::new(config).unwrap_err();

        assert!(matches!(
            err(SimulationConfig { unit_count: 0, ..Default::default() }),
            ConfigError::ZeroUnits
        ));
        assert!(matches!(
            err(SimulationConfig { trial_count: 0, ..Default::default() }),
            ConfigError::ZeroTrials
        ));
        assert!(matches!(
            err(SimulationConfig { performance_mean: f64::NAN, ..Default::default() }),
            ConfigError::NonFiniteMean(_)
        ));
        assert!(matches!(
            err(SimulationConfig { performance_stddev: f64::INFINITY, ..Default::default() }),
            ConfigError::InvalidStdDev(_)
        ));
        assert!(matches!(
            err(SimulationConfig { target_probabilities: vec![1.0], ..Default::default() }),
            ConfigError::LengthMismatch { values: 6, probabilities: 1 }
        ));
        assert!(matches!(
            err(SimulationConfig {
                target_probabilities: vec![0.2, 0.2, 0.2, 0.2, 0.2, 0.2],
                ..Default::default()
            }),
            ConfigError::ProbabilitySum { .. }
        ));
    }
}
