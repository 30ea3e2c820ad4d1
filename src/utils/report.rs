use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::models::FileRecord;
use crate::utils::hash::HashAlgorithm;

/// Render an integer with thousands separators for human-facing output.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn table_columns(records: &[FileRecord], algorithm: HashAlgorithm) -> (Vec<String>, Vec<Vec<String>>) {
    let header = vec![
        "Path".to_string(),
        algorithm.to_string(),
        "Size".to_string(),
        "Last-Mod".to_string(),
        "Last-Acc".to_string(),
        "Created".to_string(),
        "Owner".to_string(),
        "Group".to_string(),
        "Mode".to_string(),
    ];

    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.path.clone(),
                r.digest.clone(),
                format_thousands(r.size_bytes),
                r.modified_time.clone(),
                r.accessed_time.clone(),
                r.created_time.clone(),
                r.owner_id.clone(),
                r.group_id.clone(),
                r.mode_bits.clone(),
            ]
        })
        .collect();

    (header, rows)
}

/// Render scan records as a left-aligned fixed-width table.
pub fn render_table_report(records: &[FileRecord], algorithm: HashAlgorithm) -> String {
    let (header, rows) = table_columns(records, algorithm);

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let render_row = |cells: &[String]| {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            line.push_str(&format!("| {:<width$} ", cell, width = widths[i]));
        }
        line.push('|');
        line
    };

    let separator: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .chain(std::iter::once("+".to_string()))
        .collect();

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&header));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

/// Render scan records as per-file key/value blocks.
pub fn render_text_report(records: &[FileRecord], algorithm: HashAlgorithm) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&"=".repeat(60));
        out.push('\n');
        out.push_str(&format!("File:          {}\n", record.path));
        out.push_str(&format!("HashType:      {}\n", algorithm));
        out.push_str(&format!("Hash:          {}\n", record.digest));
        out.push_str(&format!(
            "Size:          {}\n",
            format_thousands(record.size_bytes)
        ));
        out.push_str(&format!("Last Modified: {}\n", record.modified_time));
        out.push_str(&format!("Last Accessed: {}\n", record.accessed_time));
        out.push_str(&format!("Created:       {}\n", record.created_time));
        out.push_str(&format!("Owner:         {}\n", record.owner_id));
        out.push_str(&format!("Group:         {}\n", record.group_id));
        out.push_str(&format!("Mode:          {}\n", record.mode_bits));
    }
    out
}

/// Write the CSV report: a header row plus one row per hashed file.
///
/// Timestamps are single-quoted so spreadsheet imports keep them as text.
pub fn write_csv_report(
    output_path: &Path,
    records: &[FileRecord],
    algorithm: HashAlgorithm,
) -> Result<()> {
    let file = File::create(output_path).context(format!(
        "Failed to create CSV report at {}",
        output_path.display()
    ))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "Path,{},Size,Last-Mod,Last-Acc,Created,Owner,Group,Mode",
        algorithm
    )?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},'{}','{}','{}',{},{},{}",
            record.path,
            record.digest,
            record.size_bytes,
            record.modified_time,
            record.accessed_time,
            record.created_time,
            record.owner_id,
            record.group_id,
            record.mode_bits
        )?;
    }

    writer.flush()?;
    info!("CSV report written to {}", output_path.display());
    Ok(())
}
