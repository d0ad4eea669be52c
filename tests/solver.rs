use spatialarm::{
    evaluate, Arm, CancellationToken, EvolutionEngine, Genome, Pose, SolverConfig, SolverState,
    Termination,
};

fn convergence_config(seed: u64) -> SolverConfig {
    SolverConfig {
        population_size: 50,
        generation_count: 200,
        convergence_tolerance: 0.1,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_converges_on_fully_extended_target() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
    let target = Pose::new(6.0, 0.0, 0.0);
    let mut engine = EvolutionEngine::new(arm, convergence_config(42)).unwrap();

    let report = engine.run(target, (), &CancellationToken::new());

    assert_eq!(report.termination, Termination::Converged);
    assert_eq!(engine.state(), SolverState::Converged);

    let best = report.best.unwrap();
    assert!(best.fitness < 0.1);
    assert_eq!(evaluate(&arm, &best.genome, &target), best.fitness);
    assert!(report.generations_run <= 200);
}

#[test]
fn test_solve_returns_genome_for_reachable_target() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let target = Pose::new(2.0, 1.0, 2.0);
    let config = SolverConfig {
        seed: Some(7),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();

    let genome = engine.solve(target).expect("target is reachable");
    assert!(evaluate(&arm, &genome, &target).is_finite());
}

#[test]
fn test_unreachable_target_rejected_before_any_generation() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
    let mut engine = EvolutionEngine::new(arm, convergence_config(1)).unwrap();

    let mut notified = 0;
    let report = engine.run(
        Pose::new(6.0 + 1e-6, 0.0, 0.0),
        |_: &Genome, _: f64, _: usize| notified += 1,
        &CancellationToken::new(),
    );

    assert_eq!(report.termination, Termination::Unreachable);
    assert!(report.best.is_none());
    assert_eq!(report.generations_run, 0);
    assert_eq!(notified, 0);
    assert_eq!(engine.state(), SolverState::Unreachable);
    assert!(engine.solve(Pose::new(0.0, 0.0, 10.0)).is_none());
}

#[test]
fn test_target_at_exact_reach_is_attempted() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
    let config = SolverConfig {
        generation_count: 3,
        seed: Some(2),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();

    assert!(engine.solve(Pose::new(0.0, 6.0, 0.0)).is_some());
}

#[test]
fn test_best_fitness_never_increases() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let config = SolverConfig {
        population_size: 40,
        generation_count: 60,
        elite_count: 1,
        mutation_rate: 0.5,
        convergence_tolerance: 0.0,
        seed: Some(3),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();

    let mut observed = Vec::new();
    let report = engine.run(
        Pose::new(-1.0, 4.0, 3.0),
        |_: &Genome, fitness: f64, _: usize| observed.push(fitness),
        &CancellationToken::new(),
    );

    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(report.generations_run, 60);
    assert_eq!(observed, report.best_fitness_history);
    for pair in observed.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert_eq!(report.best_fitness(), observed.last().copied());
}

#[test]
fn test_observer_sees_every_generation_in_order() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let config = SolverConfig {
        population_size: 20,
        generation_count: 15,
        elite_count: 2,
        convergence_tolerance: 0.0,
        seed: Some(4),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();

    let mut generations = Vec::new();
    engine.run(
        Pose::new(1.0, 1.0, 1.0),
        |_: &Genome, _: f64, generation: usize| generations.push(generation),
        &CancellationToken::new(),
    );

    assert_eq!(generations, (0..15).collect::<Vec<_>>());
}

#[test]
fn test_cancelled_run_returns_best_so_far() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let config = SolverConfig {
        population_size: 20,
        generation_count: 1000,
        elite_count: 2,
        convergence_tolerance: 0.0,
        seed: Some(5),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    let report = engine.run(
        Pose::new(1.0, 2.0, 1.0),
        move |_: &Genome, _: f64, generation: usize| {
            if generation == 9 {
                trigger.cancel();
            }
        },
        &cancel,
    );

    assert_eq!(report.termination, Termination::Cancelled);
    assert_eq!(report.generations_run, 10);
    assert!(report.best.is_some());
    assert_eq!(engine.state(), SolverState::Cancelled);
}

#[test]
fn test_cancelled_before_start_still_has_initial_best() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let config = SolverConfig {
        seed: Some(6),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = engine.run(Pose::new(1.0, 2.0, 1.0), (), &cancel);

    assert_eq!(report.termination, Termination::Cancelled);
    assert_eq!(report.generations_run, 0);
    assert!(report.best.is_some());
}

#[test]
fn test_same_seed_same_result() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let target = Pose::new(2.0, -1.0, 1.5);
    let config = SolverConfig {
        population_size: 30,
        generation_count: 40,
        seed: Some(99),
        ..Default::default()
    };

    let first = EvolutionEngine::new(arm, config.clone()).unwrap().solve(target);
    let second = EvolutionEngine::new(arm, config).unwrap().solve(target);

    assert_eq!(first, second);
}

#[test]
fn test_invalid_configuration_rejected_at_construction() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();

    let too_small = SolverConfig {
        population_size: 6,
        elite_count: 5,
        ..Default::default()
    };
    assert!(EvolutionEngine::new(arm, too_small).is_err());

    let no_generations = SolverConfig {
        generation_count: 0,
        ..Default::default()
    };
    assert!(EvolutionEngine::new(arm, no_generations).is_err());
}

#[test]
fn test_immigrants_do_not_break_elitism() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let config = SolverConfig {
        population_size: 30,
        generation_count: 30,
        elite_count: 2,
        immigrant_count: 5,
        convergence_tolerance: 0.0,
        seed: Some(8),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(arm, config).unwrap();

    let report = engine.run(Pose::new(0.0, 3.0, 3.0), (), &CancellationToken::new());

    assert_eq!(report.generations_run, 30);
    for pair in report.best_fitness_history.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert!(report.hall_of_fame.len() <= 5);
    assert_eq!(report.hall_of_fame.first(), report.best.as_ref());
}
