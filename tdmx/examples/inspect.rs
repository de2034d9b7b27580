//! Inspect a matrix file and print what it holds

use std::time::Instant;

use tdmx::{load_emx, load_fortran_square, load_mdf, load_mdf_header, MatrixData};

fn main() -> tdmx::Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("usage: inspect <matrix-file>");
            return Ok(());
        }
    };

    if !std::path::Path::new(&path).exists() {
        println!("File '{path}' not found!");
        return Ok(());
    }

    let start = Instant::now();

    // Tagged records identify themselves; the headerless layouts are
    // told apart by their length factorization.
    if let Ok(header) = load_mdf_header(&path) {
        println!("Tagged matrix record:");
        if let Some(data_type) = header.data_type() {
            println!("   Element type: {data_type}");
        }
        println!("   Axes: {}", header.ndim);
        describe(&load_mdf(&path, false, false)?);
    } else if let Ok(matrix) = load_emx(&path, None, false) {
        println!("Headerless square float buffer:");
        describe(&matrix);
    } else {
        println!("Row-indexed square layout:");
        describe(&load_fortran_square(&path, None, false)?);
    }

    println!(
        "\nDecoded in {:.3}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn describe(matrix: &MatrixData) {
    if let Some(array) = matrix.as_raw() {
        println!("   Cells: {}", array.len());
        println!("   Shape: {:?}", array.shape());
        println!("   Storage: {}", array.data_type());
    } else if let Some(vector) = matrix.as_vector() {
        println!("   Zones: {}", vector.len());
    } else if let Some(labeled) = matrix.as_matrix() {
        println!("   Rows: {}", labeled.rows());
        println!("   Columns: {}", labeled.cols());
    } else if let Some(series) = matrix.as_series() {
        println!("   Pairs: {}", series.len());
    }
}
