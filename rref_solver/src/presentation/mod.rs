use itertools::Itertools;

use crate::{
    augmented_matrix::AugmentedMatrix, input::Prompt, solution_kind::SolutionKind,
    solver::solve_report::SolveReport,
};

pub fn format_prompt(prompt: Prompt) -> &'static str {
    match prompt {
        Prompt::Dimensions => "Dimensions ([Rows] [Columns]):",
        Prompt::Entries => {
            "Insert each element.\n([a1 b1 c1 ...] [k1] per row)\n(The last element per row is always part of the constant column.)"
        }
    }
}

// `{:?}` keeps the fractional part on whole numbers ("2.0" rather than "2").
fn format_entry(value: f64) -> String {
    format!("{value:?}")
}

/// Tab separated rows; with `augmented`, a `|` column separates the
/// coefficients from the constants.
pub fn format_matrix(matrix: &AugmentedMatrix, augmented: bool) -> String {
    let last_coefficient = matrix.augmentation_index() - 1;
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(idx, value)| {
                    let separator = if augmented && idx == last_coefficient {
                        "\t|"
                    } else {
                        ""
                    };
                    format!("{}{separator}\t", format_entry(*value))
                })
                .join("")
        })
        .join("\n")
        .trim()
        .to_owned()
}

pub fn format_solution(report: &SolveReport) -> String {
    match report.kind {
        SolutionKind::Unique => {
            let values = report
                .reduced
                .augmentation_column()
                .into_iter()
                .enumerate()
                .map(|(idx, value)| format!("x{} = {}", idx + 1, format_entry(value)));
            std::iter::once("The solution is".to_owned())
                .chain(values)
                .join("\n")
        }
        SolutionKind::None => "There are no solutions. The system is inconsistent.".to_owned(),
        SolutionKind::Infinite => {
            "There are infinite solutions. Refer to Resultant Matrix and perform back substitution."
                .to_owned()
        }
        SolutionKind::Undetermined => {
            unreachable!("a finished solve never reports an undetermined system")
        }
    }
}

/// Full transcript of a solve, from the initial matrix to the verdict.
pub fn format_report(report: &SolveReport) -> String {
    let mut lines = vec![
        "Initial Matrix:".to_owned(),
        format_matrix(&report.initial, true),
        "Converting matrix to RREF form...".to_owned(),
        "Resultant Matrix:".to_owned(),
        format_matrix(&report.reduced, true),
    ];
    if report.kind != SolutionKind::Unique {
        lines.push("Checking consistency...".to_owned());
    }
    lines.push(format_solution(report));
    lines.join("\n")
}
