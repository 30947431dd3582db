// File: ./src/storage.rs
// Output naming and calendar file writing.
use crate::model::EventDescriptor;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ExportStorage;

impl ExportStorage {
    /// Generates a single VCALENDAR string containing all events as VEVENT components.
    pub fn to_ics_string(events: &[EventDescriptor], calendar_name: Option<&str>) -> String {
        let mut output =
            String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Coursecal//Schedule//EN\r\n");
        if let Some(name) = calendar_name {
            output.push_str(&format!("X-WR-CALNAME:{}\r\n", name));
        }

        for event in events {
            let full_ics = event.to_ics();
            if let Some(start) = full_ics.find("BEGIN:VEVENT")
                && let Some(end_idx) = full_ics.rfind("END:VEVENT")
            {
                // "END:VEVENT" is 10 chars long
                let vevent = &full_ics[start..end_idx + 10];
                output.push_str(vevent);
                output.push_str("\r\n");
            }
        }

        output.push_str("END:VCALENDAR\r\n");
        output
    }

    /// `schedule.xlsx` -> `<output_dir or input dir>/schedule.ics`
    pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "schedule".to_string());
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        dir.join(format!("{}.ics", stem))
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Serializes `events` next to `input` (or into `output_dir`) and returns the path.
    pub fn write_calendar(
        input: &Path,
        output_dir: Option<&Path>,
        events: &[EventDescriptor],
    ) -> Result<PathBuf> {
        let path = Self::output_path_for(input, output_dir);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let name = input.file_stem().map(|s| s.to_string_lossy().to_string());
        let ics = Self::to_ics_string(events, name.as_deref());
        Self::atomic_write(&path, ics)
            .with_context(|| format!("Failed to write calendar '{}'", path.display()))?;
        log::info!("Wrote {} event(s) to {}", events.len(), path.display());
        Ok(path)
    }
}
