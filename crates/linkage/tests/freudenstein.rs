use std::f64::consts::PI;

use approx::assert_relative_eq;
use pivot_linkage::{Angles, Branch, Freudenstein, LinkLengths, SolveForAlpha, linspace};
use pivot_observers::Recorder;
use pivot_solvers::{
    continuation::{Status as SweepStatus, SweepConfig},
    equation::{self, Config, Start, Status, brent, newton},
};

fn links() -> LinkLengths {
    LinkLengths::new(10.0, 13.0, 8.0, 10.0).expect("valid lengths")
}

fn betas() -> Vec<f64> {
    linspace(0.0, 2.0 * PI / 3.0, 61)
}

fn sweep_config() -> SweepConfig {
    SweepConfig {
        max_jump: Some(0.1),
        ..SweepConfig::default()
    }
}

#[test]
fn solves_for_alpha_from_a_guess() {
    let model = Freudenstein::new(links());
    let problem = SolveForAlpha::new(0.1);

    let solution = equation::find_root_unobserved(&model, &problem, Start::Guess(PI), &Config::default())
        .expect("valid inputs");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.residual.abs() < 1e-10);
    assert_relative_eq!(solution.x, 1.019_036_935_394_859_8, epsilon = 1e-9);
    assert_eq!(solution.snapshot.input, Angles { alpha: solution.x, beta: 0.1 });
    assert_relative_eq!(
        model.residual(solution.snapshot.input),
        solution.residual,
        epsilon = 1e-15
    );
}

#[test]
fn guess_picks_the_nearby_branch() {
    let model = Freudenstein::new(links());
    let problem = SolveForAlpha::new(0.1);

    let solution = equation::find_root_unobserved(&model, &problem, Start::Guess(5.5), &Config::default())
        .expect("valid inputs");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 5.364_148_371_784_728, epsilon = 1e-9);
}

#[test]
fn bracket_and_newton_agree_with_the_guess_path() {
    let model = Freudenstein::new(links());
    let problem = SolveForAlpha::new(0.1);
    let config = Config::default();

    let bracketed =
        brent::solve_unobserved(&model, &problem, [PI, 2.0 * PI], &config).expect("valid inputs");
    assert_eq!(bracketed.status, Status::Converged);
    assert_relative_eq!(bracketed.x, 5.364_148_371_784_728, epsilon = 1e-9);

    let newton = newton::solve_unobserved(&model, &problem, 1.0, &config).expect("valid inputs");
    assert_eq!(newton.status, Status::Converged);
    assert_relative_eq!(newton.x, 1.019_036_935_394_858_5, epsilon = 1e-9);
    assert!(newton.iters < bracketed.iters + 5);
}

#[test]
fn sweep_follows_both_branches() {
    let betas = betas();
    let [open, crossed] =
        Branch::pair(&links(), &betas, [PI, 5.5], &sweep_config()).expect("valid sweep");

    for branch in [&open, &crossed] {
        assert!(branch.is_complete(), "status: {:?}", branch.status);
        assert_eq!(branch.betas, betas);
        assert_eq!(branch.alphas.len(), 61);
        assert!(branch.max_step() < 0.1);
    }

    assert_relative_eq!(open.alphas[0], 0.967_563_491_434_207_1, epsilon = 1e-8);
    assert_relative_eq!(open.alphas[60], 2.637_225_832_748_048, epsilon = 1e-8);
    assert_relative_eq!(crossed.alphas[0], 5.315_621_815_747_801, epsilon = 1e-8);
    assert_relative_eq!(crossed.alphas[60], 5.740_354_576_824_735, epsilon = 1e-8);

    assert!(
        open.alphas
            .iter()
            .zip(&crossed.alphas)
            .all(|(a, b)| (a - b).abs() > 1.0)
    );
}

#[test]
fn every_point_closes_the_loop() {
    let model = Freudenstein::new(links());
    let branch = Branch::trace(&links(), &betas(), PI, &sweep_config()).expect("valid sweep");

    for (&beta, &alpha) in branch.betas.iter().zip(&branch.alphas) {
        assert!(model.residual(Angles { alpha, beta }).abs() < 1e-10);
    }
}

#[test]
fn each_solve_starts_from_the_previous_root() {
    let model = Freudenstein::new(links());
    let config = sweep_config();
    let branch = Branch::trace(&links(), &betas(), PI, &config).expect("valid sweep");

    for i in 1..branch.alphas.len() {
        let problem = SolveForAlpha::new(branch.betas[i]);
        let solution = equation::find_root_unobserved(
            &model,
            &problem,
            Start::Guess(branch.alphas[i - 1]),
            &config.solver,
        )
        .expect("valid inputs");
        assert_eq!(solution.x.to_bits(), branch.alphas[i].to_bits());
    }
}

#[test]
fn sweep_is_deterministic() {
    let first = Branch::trace(&links(), &betas(), PI, &sweep_config()).expect("valid sweep");
    let second = Branch::trace(&links(), &betas(), PI, &sweep_config()).expect("valid sweep");

    let bits = |branch: &Branch| branch.alphas.iter().map(|a| a.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn recorder_sees_each_point() {
    let mut recorder = Recorder::new();
    let branch = Branch::trace_observed(&links(), &betas(), 5.5, &sweep_config(), &mut recorder)
        .expect("valid sweep");

    assert_eq!(recorder.records().len(), 61);
    assert_eq!(recorder.xs(), branch.alphas);
    assert!(recorder.residuals().iter().all(|r| r.abs() < 1e-10));
    assert!(
        recorder
            .records()
            .iter()
            .enumerate()
            .all(|(i, record)| record.iteration == i)
    );
}

#[test]
fn tight_jump_limit_ends_the_sweep() {
    let config = SweepConfig {
        max_jump: Some(1e-3),
        ..SweepConfig::default()
    };
    let branch = Branch::trace(&links(), &betas(), PI, &config).expect("valid sweep");

    let SweepStatus::Jumped { index } = branch.status else {
        panic!("expected a jump, got {:?}", branch.status);
    };
    assert!(index > 0);
    assert_eq!(branch.alphas.len(), index + 1);
}
