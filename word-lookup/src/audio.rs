use std::process::Stdio;

use tokio::process::Command;

/// Starts playback of a pronunciation clip without waiting for it to finish.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str);
}

/// Hands the clip url to an external player program.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, url: &str) {
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                tracing::debug!(pid = ?child.id(), url, "started audio playback");
            }
            Err(error) => {
                tracing::warn!(%error, program = %self.program, "failed to start audio player");
            }
        }
    }
}
