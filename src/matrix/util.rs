use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::Matrix;

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Render every entry with 6 decimal places, columns right-aligned.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(1, 2, &[1.0_f64, -2.5]);
    /// assert_eq!(format!("{}", m), "│1.000000  -2.500000│");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Render entries up front so column widths can be measured
        let cells: Vec<String> = self.data.iter().map(|x| format!("{x:.6}")).collect();
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for i in 0..m {
            for j in 0..n {
                let w = cells[i * n + j].len();
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", cells[i * n + j], width = widths[j])?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_six_decimals() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.25]);
        let s = format!("{}", m);
        assert!(s.contains("1.000000"));
        assert!(s.contains("4.250000"));
        assert_eq!(s.lines().count(), 2);
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::from_rows(2, 2, &[1.0, 100.0, 1000.0, 2.0]);
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
