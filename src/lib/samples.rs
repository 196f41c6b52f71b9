//! Vector-field sample data for trying out vPlot in file mode.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

pub const DEFAULT_SAMPLE_FILE: &str = "VectorField.csv";
pub const DEFAULT_GRID_LIMIT: i32 = 2;
const HEADER: [&str; 7] = ["x", "y", "z", "xArrow", "yArrow", "zArrow", "label"];

/// Arrow components at a grid point.
pub fn field_at(_x: i32, _y: i32, _z: i32) -> (i32, i32, i32) {
    (1, 1, 1)
}

/// Write one row per integer point of `[-limit, limit]^3` and return the row count.
pub fn write_vector_field<W: Write>(writer: &mut W, limit: i32) -> io::Result<usize> {
    writeln!(writer, "{}", HEADER.join(","))?;
    let mut label = 0usize;
    for x in -limit..=limit {
        for y in -limit..=limit {
            for z in -limit..=limit {
                let (x_arrow, y_arrow, z_arrow) = field_at(x, y, z);
                writeln!(writer, "{x},{y},{z},{x_arrow},{y_arrow},{z_arrow},{label}")?;
                label += 1;
            }
        }
    }
    Ok(label)
}

/// Create (or truncate) `path` and fill it with sample rows.
pub fn write_vector_field_file(path: &Path, limit: i32) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let rows = write_vector_field(&mut writer, limit)?;
    writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn default_grid_has_125_rows_with_running_labels() {
        let mut buffer = Vec::new();
        let rows = write_vector_field(&mut buffer, DEFAULT_GRID_LIMIT).expect("write to memory");
        assert_eq!(rows, 125);

        let text = String::from_utf8(buffer).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 126);
        assert_eq!(lines[0], "x,y,z,xArrow,yArrow,zArrow,label");
        assert_eq!(lines[1], "-2,-2,-2,1,1,1,0");
        assert_eq!(lines[2], "-2,-2,-1,1,1,1,1");
        assert_eq!(lines[125], "2,2,2,1,1,1,124");
    }

    #[test]
    fn zero_limit_writes_single_origin_row() {
        let mut buffer = Vec::new();
        let rows = write_vector_field(&mut buffer, 0).expect("write to memory");
        assert_eq!(rows, 1);
        assert!(String::from_utf8_lossy(&buffer).ends_with("0,0,0,1,1,1,0\n"));
    }

    #[test]
    fn writes_file_to_disk() {
        let temp = tempdir().expect("can create temporary directory");
        let path = temp.path().join(DEFAULT_SAMPLE_FILE);
        let rows = write_vector_field_file(&path, 1).expect("file should be written");
        assert_eq!(rows, 27);
        let content = fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(content.lines().count(), 28);
    }
}
