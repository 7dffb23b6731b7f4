use crate::types::CharFrequencyEntry;
use crate::Error;
use csv::Writer;
use std::path::Path;

/// Writes the full ranked list as `character,count` rows.
pub fn export_frequency_csv(path: &Path, ranked: &[CharFrequencyEntry]) -> Result<(), Error> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record(["character", "count"])?;
    for (ch, count) in ranked {
        writer.write_record([ch.to_string(), count.to_string()])?;
    }

    writer
        .flush()
        .map_err(|err| Error::ExportError(err.to_string()))?;

    Ok(())
}
