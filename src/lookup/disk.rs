use super::table::Table;
use crate::Error;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;
use anyhow::Context;

/// for types that can be built from scratch,
/// written to disk, and read back later
pub trait Disk: Sized {
    /// file name of the entity
    fn name() -> String;
    /// build from scratch
    fn grow() -> anyhow::Result<Self>;
    /// read from disk
    fn load(path: &str) -> anyhow::Result<Self>;
    /// write to disk
    fn save(&self, path: &str) -> anyhow::Result<()>;
    /// default path to file on disk
    fn path() -> String {
        format!(
            "{}/{}",
            std::env::current_dir()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            Self::name()
        )
    }
    /// check if file exists on disk
    fn done(path: &str) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

/// Plain text, one `<key>,<value>` record per line, no header, any order.
/// Keys are hand bit values and values packed strengths, both decimal.
impl Disk for Table {
    fn name() -> String {
        crate::TABLE_PATH.to_string()
    }
    fn grow() -> anyhow::Result<Self> {
        Ok(Self::seven(&Self::five())?)
    }
    fn load(path: &str) -> anyhow::Result<Self> {
        use std::fs::File;
        use std::io::BufRead;
        use std::io::BufReader;
        log::info!("{:<32}{:<32}", "loading     seven card table", path);
        let file = File::open(path).with_context(|| format!("open {}", path))?;
        let table = BufReader::new(file)
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(i, line)| -> anyhow::Result<(u64, Strength)> {
                let line = line.with_context(|| format!("read {} line {}", path, i + 1))?;
                Ok(Self::parse(i + 1, &line)?)
            })
            .collect::<anyhow::Result<Table>>()?;
        log::info!("{:<32}{:<32}", "loaded      seven card table", table.len());
        Ok(table)
    }
    fn save(&self, path: &str) -> anyhow::Result<()> {
        use std::fs::File;
        use std::io::BufWriter;
        use std::io::Write;
        log::info!("{:<32}{:<32}", "saving      seven card table", path);
        let file = File::create(path).with_context(|| format!("touch {}", path))?;
        let ref mut writer = BufWriter::new(file);
        for (key, strength) in self.iter() {
            writeln!(writer, "{},{}", key, u32::from(*strength))?;
        }
        writer.flush().with_context(|| format!("flush {}", path))?;
        Ok(())
    }
}

impl Table {
    fn parse(line: usize, record: &str) -> Result<(u64, Strength), Error> {
        let corrupt = || Error::TableFileCorruption {
            line,
            record: record.to_string(),
        };
        let (key, value) = record.trim().split_once(',').ok_or_else(corrupt)?;
        let key = key.trim().parse::<u64>().map_err(|_| corrupt())?;
        let value = value.trim().parse::<u32>().map_err(|_| corrupt())?;
        match (key & !Hand::mask(), value >> 20) {
            (0, 0..=8) => Ok((key, Strength::from(value))),
            _ => Err(corrupt()),
        }
    }
}
