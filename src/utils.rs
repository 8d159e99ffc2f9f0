use anyhow::{Context, Result};
use demand::Confirm;
use log::{debug, info};
use std::{
    fs,
    io::{stdin, stdout, IsTerminal, Read, Write},
    path::Path,
};

pub fn is_interactive() -> bool {
    stdin().is_terminal()
}

/// Asks a yes/no question. Without a terminal the default answer is returned.
pub fn ask_confirm(question: &str, default: bool) -> Result<bool> {
    if !is_interactive() {
        debug!("Not interactive, answering '{question}' with {default}");
        return Ok(default);
    }

    Confirm::new(question)
        .affirmative("Yes")
        .negative("No")
        .run()
        .context("Failed to read confirmation")
}

/// Reads `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Writes `content` to `path`, or to stdout. An existing file is only
/// replaced once `overwrite` is set or the user agrees.
pub fn write_output(path: Option<&Path>, content: &[u8], overwrite: bool) -> Result<()> {
    let Some(path) = path else {
        let mut out = stdout().lock();
        out.write_all(content)?;
        out.flush()?;
        return Ok(());
    };

    if path.exists()
        && !overwrite
        && !ask_confirm(
            &format!("File '{}' already exists. Overwrite?", path.display()),
            true,
        )?
    {
        info!("Left {} untouched", path.display());
        return Ok(());
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
