use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::model::agent_model::AgentModel;

/// Destination of a JSON document: a file when a path is given, stdout
/// otherwise.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let target = self.target();
        serde_json::to_writer_pretty(&mut self, value)
            .with_context(|| format!("Failed to write JSON to {target}"))?;
        writeln!(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to finish writing {target}"))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    Output::create(path)?.write_json(value)
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a trained agent model from a JSON file
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_agent_model_file<P>(path: P) -> anyhow::Result<AgentModel>
where
    P: AsRef<Path>,
{
    read_json_file("agent model", path)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use dinorun_engine::WorldSeed;
    use dinorun_training::agent::Agent;

    use super::*;

    fn sample_model() -> AgentModel {
        let mut agent = Agent::new([3.25, -0.5], -1.75);
        agent.record_score(512.5);
        AgentModel {
            name: "champion".to_owned(),
            trained_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            seed: 42,
            generations: 50,
            agent,
            world_seed: WorldSeed::from_u64(7),
        }
    }

    #[test]
    fn test_model_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = sample_model();

        save_json(&model, Some(path.as_path())).unwrap();
        let loaded = read_agent_model_file(&path).unwrap();
        assert_eq!(loaded, model);

        let agent = loaded.to_agent();
        assert_eq!(agent.weights(), &[3.25, -0.5]);
        assert_eq!(agent.bias(), -1.75);
        assert_eq!(agent.fitness(), 0.0);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_agent_model_file(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_model_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"name": "x", "agent": {"weights": [1.0]}}"#).unwrap();
        let err = read_agent_model_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse agent model"));
    }
}
