//! The driver: fixed inputs, one combine call, two printed rows.

use addsub_kernel::CombineContext;
use anyhow::{Context, Result};
use std::io::Write;

/// Length of every driver array
pub const LEN: usize = 4;

/// First input
pub const A: [i64; LEN] = [1, 2, 3, 4];

/// Second input
pub const B: [i64; LEN] = [4, 9, 16, 25];

/// Element-wise results for `A` and `B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Results {
    pub sum: [i64; LEN],
    pub diff: [i64; LEN],
}

/// Run the combine operation over the driver inputs
pub fn compute(ctx: &CombineContext) -> Result<Results> {
    let mut sum = [0i64; LEN];
    let mut diff = [0i64; LEN];

    ctx.add_sub(&mut sum, &mut diff, &A, &B, LEN)
        .context("Failed to combine driver arrays")?;

    Ok(Results { sum, diff })
}

/// Render `"<label>: v0, v1, ..."` with decimal values separated by `", "`
pub fn format_row(label: &str, values: &[i64]) -> String {
    let values = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{label}: {values}")
}

/// Compute and write both rows to `out`
pub fn run(ctx: &CombineContext, out: &mut impl Write) -> Result<()> {
    let results = compute(ctx)?;
    log::info!(
        "computed {} elements on the {} backend",
        LEN,
        ctx.backend_name()
    );

    writeln!(out, "{}", format_row("Sum", &results.sum)).context("Failed to write sums")?;
    writeln!(out, "{}", format_row("Diff", &results.diff)).context("Failed to write differences")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addsub_kernel::BackendType;

    #[test]
    fn test_compute_driver_values() {
        let results = compute(&CombineContext::new()).unwrap();
        assert_eq!(results.sum, [5, 11, 19, 29]);
        assert_eq!(results.diff, [-3, -7, -13, -21]);
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row("Sum", &[5, 11, 19, 29]), "Sum: 5, 11, 19, 29");
        assert_eq!(
            format_row("Diff", &[-3, -7, -13, -21]),
            "Diff: -3, -7, -13, -21"
        );
    }

    #[test]
    fn test_format_row_no_values() {
        assert_eq!(format_row("Sum", &[]), "Sum: ");
    }

    #[test]
    fn test_format_row_extremes() {
        assert_eq!(
            format_row("Diff", &[i64::MIN, 0, i64::MAX]),
            "Diff: -9223372036854775808, 0, 9223372036854775807"
        );
    }

    #[test]
    fn test_run_output_is_exact() {
        let mut out = Vec::new();
        run(&CombineContext::new(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sum: 5, 11, 19, 29\nDiff: -3, -7, -13, -21\n"
        );
    }

    #[test]
    fn test_run_same_output_on_scalar() {
        let ctx = CombineContext::with_backend(BackendType::Scalar).unwrap();
        let mut out = Vec::new();
        run(&ctx, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sum: 5, 11, 19, 29\nDiff: -3, -7, -13, -21\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_reports_write_failure() {
        let err = run(&CombineContext::new(), &mut FailingWriter).unwrap_err();
        assert!(err.to_string().contains("Failed to write sums"));
    }
}
