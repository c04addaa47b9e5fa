use std::fs::File;
use std::io::Write;
use markdown_table::MarkdownTable;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::archive::CrowdingArchive;
use crate::dominance::{compare, Dominance};
use crate::evaluator::MaxEvaluations;
use crate::optimizers::mocell::MOCellOptimizer;
use crate::optimizers::Optimizer;
use crate::problem::constr_ex::ConstrEx;
use crate::problem::dtlz::dtlz1::Dtlz1;
use crate::problem::dtlz::dtlz2::Dtlz2;
use crate::problem::dtlz::dtlz4::Dtlz4;
use crate::problem::dtlz::dtlz7::Dtlz7;
use crate::problem::Problem;
use crate::settings::Settings;
use crate::solution::Solution;

fn init_logger()
{
    let _ = env_logger::builder().is_test(true).try_init();
}

fn optimize_and_get_best_solutions(optimizer: &mut MOCellOptimizer, max_evaluations: usize) -> Vec<Solution>
{
    let mut evaluator = MaxEvaluations::new(max_evaluations);

    optimizer.optimize(&mut evaluator).unwrap();

    optimizer.best_solutions()
}

fn mean_convergence_metric_for_solutions(problem: &dyn Problem, solutions: &[Solution]) -> f64
{
    if solutions.is_empty()
    {
        return f64::MAX
    }

    let sum = solutions
        .iter()
        .map(|solution| problem.convergence_metric(&solution.variables))
        .sum::<f64>();

    sum / solutions.len() as f64
}

/// Mean metric of uniformly random points, the baseline a run has to beat.
fn mean_random_metric_for_problem(problem: &dyn Problem) -> f64
{
    let mut rng = StdRng::seed_from_u64(0);

    let solutions: Vec<Solution> = (0..2_000)
        .map(|_| Solution::random(problem, &mut rng))
        .collect();

    mean_convergence_metric_for_solutions(problem, &solutions)
}

fn assert_archive_invariant(archive: &CrowdingArchive)
{
    assert!(archive.len() <= archive.capacity());

    for (i, x) in archive.members().iter().enumerate()
    {
        for y in archive.members().iter().skip(i + 1)
        {
            assert_eq!(compare(x, y), Dominance::Incomparable);
        }
    }
}

fn dtlz_test_problems(n_var: usize, n_obj: usize) -> Vec<Box<dyn Problem>>
{
    vec![
        Box::new(Dtlz1::new(n_var, n_obj)),
        Box::new(Dtlz2::new(n_var, n_obj)),
        Box::new(Dtlz4::new(n_var, n_obj)),
        Box::new(Dtlz7::new(n_var, n_obj)),
    ]
}

fn variant_settings(seed: u64) -> Vec<Settings>
{
    vec![
        Settings::synchronous(49, 50, 10_000, 10).with_seed(seed),
        Settings::asynchronous(49, 50, 10_000).with_seed(seed),
    ]
}

#[test]
fn calc_output_metric_for_variants()
{
    init_logger();

    let problems = dtlz_test_problems(7, 3);

    let mut table_lines = vec![vec![
        String::from("problem"),
        String::from("random"),
        String::from("sMOCell"),
        String::from("aMOCell"),
    ]];

    for problem in &problems
    {
        let random_metric = mean_random_metric_for_problem(problem.as_ref());
        let mut line = vec![problem.name().to_string(), format!("{:.3}", random_metric)];

        for settings in variant_settings(42)
        {
            let max_evaluations = settings.max_evaluations;
            let mut optimizer = MOCellOptimizer::with_default_operators(settings, problem.clone()).unwrap();

            let best_solutions = optimize_and_get_best_solutions(&mut optimizer, max_evaluations);

            assert!(!best_solutions.is_empty());
            assert_archive_invariant(optimizer.archive());
            assert_eq!(optimizer.evaluations() % 49, 0);
            assert!(optimizer.evaluations() >= max_evaluations);
            assert!(optimizer.evaluations() < max_evaluations + 49);

            let metric = mean_convergence_metric_for_solutions(problem.as_ref(), &best_solutions);

            assert!(metric < random_metric, "{} on {}: {} vs random {}", optimizer.name(), problem.name(), metric, random_metric);

            line.push(format!("{:.3}", metric));
        }

        table_lines.push(line);
    }

    let table = MarkdownTable::new(table_lines);

    println!("{}", table.to_string());

    let dir = tempfile::tempdir().unwrap();
    let mut output = File::create(dir.path().join("mocell.metric.md")).unwrap();
    write!(output, "{}", table.to_string()).unwrap();
}

#[test]
fn dtlz2_converges_close_to_the_front()
{
    init_logger();

    let problem = Dtlz2::new(12, 3);

    for settings in variant_settings(7)
    {
        let mut optimizer = MOCellOptimizer::with_default_operators(settings, Box::new(problem.clone())).unwrap();
        let archive = optimizer.run().unwrap().clone();

        let metric = mean_convergence_metric_for_solutions(&problem, archive.members());

        assert!(metric < 0.2, "{}: mean g = {}", optimizer.name(), metric);
        assert!(archive.len() > 10);
    }
}

#[test]
fn constrained_problem_archive_is_feasible()
{
    init_logger();

    for settings in [
        Settings::synchronous(64, 50, 8_000, 20).with_seed(3),
        Settings::asynchronous(64, 50, 8_000).with_seed(3),
    ]
    {
        let mut optimizer = MOCellOptimizer::with_default_operators(settings, Box::new(ConstrEx::new())).unwrap();
        let archive = optimizer.run().unwrap();

        assert!(!archive.is_empty());
        assert!(archive.iter().all(Solution::is_feasible));
        assert!(archive.iter().all(|s| s.objectives[0] >= 0.1 && s.objectives[0] <= 1.0));
        assert_archive_invariant(archive);
    }
}

#[test]
fn settings_file_drives_a_run()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mocell.json");

    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"{{"populationSize": 25, "archiveSize": 20, "maxEvaluations": 1000, "feedBack": 5, "variant": "synchronous", "randomSeed": 11}}"#
    )
    .unwrap();

    let settings = Settings::from_json_file(&path).unwrap();
    let mut optimizer = MOCellOptimizer::with_default_operators(settings, Box::new(Dtlz2::new(6, 2))).unwrap();

    let archive = optimizer.run().unwrap();

    assert!(archive.len() <= 20);
    assert_eq!(optimizer.name(), "sMOCell");
    assert_eq!(optimizer.evaluations(), 1000);
}
