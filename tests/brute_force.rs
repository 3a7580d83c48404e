//! Random formulas, with satisfiability cross-checked against an exhaustive search over valuations.

use rand::{rngs::StdRng, Rng, SeedableRng};

use lookahead_sat::{
    config::{Config, DirectionHeuristic, LookAheadHeuristic, Preselection},
    context::Context,
    instance::Instance,
    procedures::look_ahead::LookAhead,
    reports::Report,
    structures::clause::{CClause, Clause},
};

const FORMULAS: u64 = 24;

fn random_formula(rng: &mut StdRng, atoms: i32) -> Vec<CClause> {
    let clause_count = rng.random_range(atoms..=(5 * atoms));

    (0..clause_count)
        .map(|_| {
            let size = match rng.random_bool(0.05) {
                true => 1,
                false => rng.random_range(2..=4),
            };

            (0..size)
                .map(|_| {
                    let atom = rng.random_range(1..=atoms);
                    match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

fn brute_force(atoms: i32, clauses: &[CClause]) -> bool {
    let mut valuation = vec![None; atoms as usize + 1];

    (0..(1_u32 << atoms)).any(|mask| {
        for atom in 1..=atoms {
            valuation[atom as usize] = Some((mask >> (atom - 1)) & 1 == 1);
        }
        clauses.iter().all(|clause| clause.satisfied_on(&valuation))
    })
}

fn context_with(config: &Config, clauses: &[CClause]) -> Option<Context> {
    let mut ctx = Context::from_config(config.clone());
    for clause in clauses {
        if ctx.add_clause(clause.clone()).is_err() {
            return None;
        }
    }
    Some(ctx)
}

/// Determines satisfiability by a search, and on a satisfiable formula checks the values given by the search satisfy each clause.
///
/// The result of a solve through the context is also checked to agree with the search.
fn search(config: &Config, clauses: &[CClause]) -> bool {
    let Some(mut ctx) = context_with(config, clauses) else {
        panic!("Failed to build a context");
    };

    let mut instance = ctx.instance();
    let satisfiable = instance.propagate_units().is_ok() && ctx.dpll(&mut instance, 0);

    if satisfiable {
        assert!(instance.is_satisfied());
        assert!(instance.partition_holds());
        for clause in clauses {
            assert!(clause.satisfied_on(instance.atom_db.valuation()), "{clause:?}");
        }
    }

    let Some(mut ctx) = context_with(config, clauses) else {
        panic!("Failed to build a context");
    };
    let report = match satisfiable {
        true => Report::Satisfiable,
        false => Report::Unsatisfiable,
    };
    assert_eq!(ctx.solve(), Ok(report));

    satisfiable
}

fn check_configs(configs: &[Config], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..FORMULAS {
        let atoms = rng.random_range(3..=9);
        let clauses = random_formula(&mut rng, atoms);
        let expected = brute_force(atoms, &clauses);

        for config in configs {
            assert_eq!(search(config, &clauses), expected, "{config:?}\n{clauses:?}");
        }
    }
}

#[test]
fn every_heuristic_and_direction() {
    let mut configs = Vec::default();

    for heuristic in [
        LookAheadHeuristic::CRH,
        LookAheadHeuristic::WBH,
        LookAheadHeuristic::BSH,
        LookAheadHeuristic::BSRH,
    ] {
        for direction in [
            DirectionHeuristic::KCNFS,
            DirectionHeuristic::MARCH,
            DirectionHeuristic::POSIT,
            DirectionHeuristic::FIXED,
        ] {
            let mut config = Config::default();
            config.look_ahead.value = heuristic;
            config.direction.value = direction;
            configs.push(config);
        }
    }

    check_configs(&configs, 0x1a);
}

#[test]
fn every_preselection() {
    let mut configs = Vec::default();

    for preselection in [Preselection::All, Preselection::Propz, Preselection::Cra] {
        for heuristic in [LookAheadHeuristic::CRH, LookAheadHeuristic::BSRH] {
            let mut config = Config::default();
            config.preselection.value = preselection;
            config.look_ahead.value = heuristic;
            configs.push(config);
        }
    }

    check_configs(&configs, 0x2b);
}

#[test]
fn statistics_toggles() {
    let mut configs = Vec::default();

    for autarky in [false, true] {
        for local_learning in [false, true] {
            let mut config = Config::default();
            config.autarky.value = autarky;
            config.local_learning.value = local_learning;
            configs.push(config);
        }
    }

    check_configs(&configs, 0x3c);
}

#[test]
fn larger_formulas() {
    // Enough atoms for Propz and Cra to select a proper subset of atoms.
    let mut rng = StdRng::seed_from_u64(0x4d);

    let mut configs = Vec::default();
    for preselection in [Preselection::All, Preselection::Propz, Preselection::Cra] {
        let mut config = Config::default();
        config.preselection.value = preselection;
        configs.push(config);
    }

    for _ in 0..4 {
        let atoms = rng.random_range(21..=22);
        let clause_count = rng.random_range((4 * atoms)..=(5 * atoms));

        let clauses: Vec<CClause> = (0..clause_count)
            .map(|_| {
                (0..3)
                    .map(|_| {
                        let atom = rng.random_range(1..=atoms);
                        match rng.random_bool(0.5) {
                            true => atom,
                            false => -atom,
                        }
                    })
                    .collect()
            })
            .collect();

        // Too many atoms for a brute force check, so agreement with every atom examined is checked.
        let expected = search(&configs[0], &clauses);

        for config in &configs[1..] {
            assert_eq!(search(config, &clauses), expected, "{config:?}\n{clauses:?}");
        }
    }
}

/// Checks `child` extends `parent`: satisfied keys are kept, and each active clause of `child` is part of the same active clause of `parent`.
fn check_step(parent: &Instance, child: &Instance) {
    assert!(parent.clause_db.satisfied().is_subset(child.clause_db.satisfied()));

    for (key, clause) in child.clause_db.active() {
        let Some(parent_clause) = parent.clause_db.get(*key) else {
            panic!("Clause {key} active in a child though not in its parent");
        };
        assert!(clause.iter().all(|literal| parent_clause.contains(literal)));
    }
}

fn check_node(instance: &Instance) {
    assert!(instance.partition_holds());
    assert!(instance.memberships_hold());
}

/// Visits every node of the search from `instance`, taking both values of each branch.
fn walk(ctx: &mut Context, instance: Instance, level: usize) {
    check_node(&instance);

    if instance.is_satisfied() {
        return;
    }

    let mut current = instance.clone();
    let result = ctx.look_ahead(&mut current, level);
    check_node(&current);
    check_step(&instance, &current);

    match result {
        LookAhead::Unsatisfiable => {}

        LookAhead::NoBranch => walk(ctx, current, level),

        LookAhead::Branch { atom, .. } => {
            for value in [true, false] {
                let mut child = current.clone();
                if child.propagate(atom, value).is_ok() {
                    check_step(&current, &child);
                    walk(ctx, child, level + 1);
                }
            }
        }
    }
}

#[test]
fn search_paths_are_monotone() {
    let mut rng = StdRng::seed_from_u64(0x5e);

    let mut configs = Vec::default();
    for (heuristic, preselection) in [
        (LookAheadHeuristic::CRH, Preselection::All),
        (LookAheadHeuristic::WBH, Preselection::Propz),
        (LookAheadHeuristic::BSRH, Preselection::Cra),
    ] {
        let mut config = Config::default();
        config.look_ahead.value = heuristic;
        config.preselection.value = preselection;
        configs.push(config);
    }

    for _ in 0..16 {
        let atoms = rng.random_range(3..=8);
        let clauses = random_formula(&mut rng, atoms);

        for config in &configs {
            let Some(mut ctx) = context_with(config, &clauses) else {
                panic!("Failed to build a context");
            };

            let initial = ctx.instance();
            let mut instance = initial.clone();
            if instance.propagate_units().is_err() {
                continue;
            }
            check_step(&initial, &instance);

            walk(&mut ctx, instance, 0);
        }
    }
}
