//! Report writing: one URL per line per category file, plus the console
//! summary table.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::classify::{Categorized, Category};
use crate::error::Result;

/// One written report file and its line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub label: String,
    pub count: usize,
    pub path: PathBuf,
}

/// Write `items` to `path`, one per line, trailing whitespace stripped.
/// Parent directories are created as needed.
pub fn write_list<P: AsRef<Path>>(path: P, items: &[String]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    for item in items {
        writeln!(file, "{}", item.trim_end())?;
    }
    Ok(())
}

fn display_label(category: Category) -> String {
    match category {
        Category::Json | Category::Js | Category::Php => format!(".{}", category.name()),
        Category::OpenRedirect => "OpenRedirect".to_string(),
        Category::Xss => "XSS".to_string(),
    }
}

/// Write every category file plus the full URL list for `target`.
pub fn write_category_reports(
    outdir: &Path,
    target: &str,
    categorized: &Categorized,
    all_urls: &[String],
) -> Result<Vec<WrittenReport>> {
    let mut reports = Vec::new();

    for (category, list) in categorized.as_named_lists() {
        let path = outdir.join(format!("{target}_{}.txt", category.name()));
        write_list(&path, list)?;
        reports.push(WrittenReport {
            label: display_label(category),
            count: list.len(),
            path,
        });
    }

    let all_path = outdir.join(format!("{target}_all_urls.txt"));
    write_list(&all_path, all_urls)?;
    reports.push(WrittenReport {
        label: "Total".to_string(),
        count: all_urls.len(),
        path: all_path,
    });

    Ok(reports)
}

/// Write the liveness report for `target`.
pub fn write_alive_report(
    outdir: &Path,
    target: &str,
    target_status: u16,
    alive: &[String],
) -> Result<WrittenReport> {
    let path = outdir.join(format!("{target}_alive{target_status}.txt"));
    write_list(&path, alive)?;
    Ok(WrittenReport {
        label: format!("Alive({target_status})"),
        count: alive.len(),
        path,
    })
}

/// Print the aligned summary table for a set of written reports.
pub fn print_summary(reports: &[WrittenReport]) {
    for report in reports {
        println!(
            "[+] {:<13}: {:<5} URLs -> {}",
            report.label,
            report.count,
            report.path.display()
        );
    }
}
