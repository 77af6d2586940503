//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::info;

use owm_model::{EquipmentSlot, SaveRecord};
use owm_rawdata::{RawDataValidator, Severity, read_rawdata};
use owm_store::SaveStore;

use crate::cli::{CheckArgs, ListArgs, NewArgs, ShowArgs};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let store = SaveStore::new(&args.dir);
    let summaries = store.list().context("list save files")?;

    if summaries.is_empty() {
        println!("no save files in {}", args.dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["File", "Persona", "Class", "Level", "Saved", "Status"]);
    apply_table_style(&mut table);
    for summary in &summaries {
        let status = if summary.is_valid() {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("invalid").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&summary.file_name),
            Cell::new(summary.persona_name.as_deref().unwrap_or("-")),
            Cell::new(
                summary
                    .character_class
                    .map_or("-", owm_model::CharacterClass::as_str),
            ),
            Cell::new(
                summary
                    .current_level
                    .map_or_else(|| "-".to_string(), |level| level.to_string()),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(
                summary
                    .modified_at
                    .map_or_else(|| "-".to_string(), format_timestamp),
            ),
            status,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let record = read_rawdata(&args.file)
        .with_context(|| format!("read save file {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_record(&record);
    Ok(())
}

/// Run the validator; returns true when the file has no errors.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let report = RawDataValidator::validate_file(&args.file)
        .with_context(|| format!("validate save file {}", args.file.display()))?;

    if report.issues().is_empty() {
        println!("{}: clean", args.file.display());
        return Ok(true);
    }

    for issue in report.issues() {
        let marker = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{marker}: [{}] {}", issue.section, issue.message);
    }
    println!(
        "{}: {} error(s), {} warning(s)",
        args.file.display(),
        report.error_count(),
        report.warning_count()
    );
    Ok(report.is_valid())
}

pub fn run_new(args: &NewArgs) -> Result<()> {
    let now = chrono::Utc::now().timestamp_millis() as f64 / 1_000.0;
    let record = SaveRecord::new(args.name.clone(), args.class, now);
    let store = SaveStore::new(&args.dir);
    let file_name = store.create(&record).context("create save file")?;
    info!(file = %file_name, "created character");
    println!("{}", store.path_of(&file_name).display());
    Ok(())
}

fn print_record(record: &SaveRecord) {
    println!("Persona:  {}", record.persona_name);
    println!(
        "Class:    {}",
        record
            .character_class
            .map_or("(unknown)", owm_model::CharacterClass::as_str)
    );
    println!("Level:    {}", record.stage.current_level);
    println!("Cleared:  {} level(s)", record.stage.completed.count());
    println!("XP:       {}", record.experience);
    println!(
        "Skills:   {}",
        record
            .skills
            .indices()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Created:  {}", format_timestamp(record.creation_date));
    println!("Saved:    {}", format_timestamp(record.modification_date));

    println!("\nEquipment:");
    for slot in EquipmentSlot::ALL {
        let contents = match record.equipment.get(slot) {
            Some(index) => match record.inventory.get(usize::from(index)) {
                Some(entry) => format!("{} (slot {index})", entry.kind),
                None => format!("slot {index} (empty)"),
            },
            None => "-".to_string(),
        };
        println!("  {:<10} {contents}", slot.as_str());
    }

    let mut table = Table::new();
    table.set_header(vec!["Slot", "Item", "Lvl", "Stack", "Alterations"]);
    apply_table_style(&mut table);
    for (index, entry) in record.inventory.iter().enumerate() {
        let Some(entry) = entry else { continue };
        let alterations = entry
            .alterations
            .iter()
            .map(|(kind, value)| format!("{kind} {value:+}"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(index).set_alignment(CellAlignment::Right),
            Cell::new(entry.kind),
            Cell::new(entry.level).set_alignment(CellAlignment::Right),
            Cell::new(entry.stack).set_alignment(CellAlignment::Right),
            Cell::new(alterations),
        ]);
    }
    println!("\nInventory ({} occupied):", record.inventory.occupied());
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn format_timestamp(seconds: f64) -> String {
    chrono::DateTime::from_timestamp(seconds as i64, 0)
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{seconds}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use owm_model::CharacterClass;
    use owm_rawdata::write_rawdata;

    #[test]
    fn format_timestamp_renders_utc() {
        assert_eq!(format_timestamp(0.0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn check_passes_a_clean_save_and_fails_a_torn_one() {
        let dir = tempfile::tempdir().unwrap();

        let clean = dir.path().join("clean.rawdata");
        let record = SaveRecord::new("Ada", CharacterClass::Rogue, 1_000.0);
        write_rawdata(&clean, &record).unwrap();
        assert!(run_check(&CheckArgs { file: clean }).unwrap());

        let torn = dir.path().join("torn.rawdata");
        std::fs::write(&torn, b"not a save").unwrap();
        assert!(!run_check(&CheckArgs { file: torn }).unwrap());
    }
}
