pub mod dtlz1;
pub mod dtlz2;
pub mod dtlz4;
pub mod dtlz7;

use crate::error::ProblemError;
use crate::problem::Problem;

fn g1(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2) - (20.0 * std::f64::consts::PI * (x_m_i - 0.5)).cos();
    }

    100.0 * (x_m.len() as f64 + sum)
}

fn g2(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m.iter()
    {
        sum += (x_m_i - 0.5).powi(2);
    }

    sum
}

/// Objectives on the unit hypersphere scaled by `1 + g`, with the
/// position variables raised to `alpha` (DTLZ2 uses 1, DTLZ4 uses 100).
fn calc_spherical_target(x: &[f64], g: f64, alpha: f64, f: &mut [f64])
{
    for i in 0..f.len()
    {
        let mut f_val = 1.0 + g;

        for x_i in &x[..x.len() - i]
        {
            f_val *= (x_i.powf(alpha) * std::f64::consts::PI / 2.0).cos();
        }

        if i > 0
        {
            f_val *= (x[x.len() - i].powf(alpha) * std::f64::consts::PI / 2.0).sin();
        }

        f[i] = f_val;
    }
}

/// At least one objective and at least one distance variable.
fn check_dimensions(problem: &dyn Problem) -> Result<(), ProblemError>
{
    let (n_var, n_obj) = (problem.number_of_variables(), problem.number_of_objectives());

    if n_obj == 0 || n_obj > n_var
    {
        return Err(ProblemError::new(
            problem.name(),
            format!("{} objectives need between 1 and {} variables", n_obj, n_var),
        ));
    }

    Ok(())
}

fn resize_objectives(f: &mut Vec<f64>, n_obj: usize)
{
    if f.len() != n_obj
    {
        f.resize(n_obj, 0.0);
    }
}
