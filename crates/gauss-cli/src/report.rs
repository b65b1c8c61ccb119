use std::io::Write;

use gauss::{AugmentedMatrix, Outcome, Report};
use nalgebra::DMatrix;
use prettytable::{format, Cell, Row, Table};

/// Values rounded to integers, one table row per matrix row.
pub fn matrix_table(matrix: &DMatrix<f64>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for row in matrix.row_iter() {
        let cells = row
            .iter()
            // adding zero turns a rounded -0 into 0
            .map(|v| Cell::new_align(&format!("{:.0}", v.round() + 0.0), format::Alignment::RIGHT))
            .collect();
        table.add_row(Row::new(cells));
    }
    table
}

pub fn print_matrix<W: Write>(out: &mut W, title: &str, matrix: &DMatrix<f64>) -> std::io::Result<()> {
    writeln!(out, "{}:", title)?;
    matrix_table(matrix).print(out)?;
    Ok(())
}

pub fn print_report<W: Write>(
    out: &mut W,
    system: &AugmentedMatrix<f64>,
    report: &Report<f64>,
) -> std::io::Result<()> {
    print_matrix(out, "Input matrix", system.as_matrix())?;
    print_matrix(out, "Matrix after elimination", &report.eliminated)?;

    writeln!(out, "Determinant:")?;
    writeln!(out, "{}", report.determinant)?;

    match &report.outcome {
        Outcome::Unique { solution, residual } => {
            writeln!(out, "Solution vector:")?;
            for x in solution.iter() {
                writeln!(out, "{}", x)?;
            }
            writeln!(out, "Residual vector:")?;
            for r in residual.iter() {
                writeln!(out, "{}", r)?;
            }
        }
        Outcome::Singular { row } => {
            writeln!(out, "There is no unique solution (zero pivot in row {})", row)?;
        }
    }
    writeln!(out)
}

/// Solves `system` and prints the full report.
pub fn solve_and_print<W: Write>(out: &mut W, system: AugmentedMatrix<f64>) -> std::io::Result<()> {
    let report = gauss::solve(system.clone());
    print_report(out, &system, &report)
}
