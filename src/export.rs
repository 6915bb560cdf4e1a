//! CSV export of truth tables.
//!
//! # Format
//!
//! ```text
//! A,B,Result
//! False,False,False
//! False,True,True
//! ```
//!
//! The header lists the variables in column order followed by `Result`.
//! Cells are `True` or `False` and every record ends with `\r\n`, which is
//! what existing consumers of these files expect.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::table::TruthTable;

const RESULT_HEADER: &str = "Result";
const LINE_END: &str = "\r\n";

fn cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl TruthTable {
    /// Column headers: variable names then `Result`.
    pub fn headers(&self) -> Vec<String> {
        self.variables()
            .iter()
            .map(|v| v.to_string())
            .chain(std::iter::once(RESULT_HEADER.to_string()))
            .collect()
    }

    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}{}", self.headers().join(","), LINE_END)?;
        for row in self.rows() {
            let cells: Vec<&str> = row
                .assignment
                .iter()
                .map(|(_, value)| cell(value))
                .chain(std::iter::once(cell(row.result)))
                .collect();
            write!(writer, "{}{}", cells.join(","), LINE_END)?;
        }
        writer.flush()
    }

    pub fn to_csv_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_csv(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Writes the table to a CSV file, replacing any existing file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logic_rs::engine::Engine;
    ///
    /// let table = Engine::default().generate_truth_table("A ⊕ B").unwrap();
    /// table.save_csv("xor.csv").unwrap();
    /// ```
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }
}
